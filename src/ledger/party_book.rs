use std::collections::BTreeMap;

use serde::Serialize;

use crate::domain::common::{Identifiable, PartyId};
use crate::domain::notification::{Receiver, ReceiverDirectory};
use crate::domain::person::Person;

use super::balance::Balance;

/// Mutable state shared by every role a person plays: money and inbox.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PartyAccount {
    pub balance: Balance,
    pub notifications: Vec<String>,
}

impl PartyAccount {
    pub fn new(opening: f64) -> Self {
        Self {
            balance: Balance::new(opening),
            notifications: Vec::new(),
        }
    }
}

impl Receiver for PartyAccount {
    fn update(&mut self, message: &str) {
        self.notifications.push(message.to_string());
    }
}

/// One account per party id. Client, instructor and secretary facades of the
/// same person all resolve to the same entry.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PartyBook {
    accounts: BTreeMap<PartyId, PartyAccount>,
}

impl PartyBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the account for `person`, opening it with the person's opening
    /// balance on first contact.
    pub fn open(&mut self, person: &Person) -> &mut PartyAccount {
        self.accounts
            .entry(person.id())
            .or_insert_with(|| PartyAccount::new(person.opening_balance))
    }

    pub fn account(&self, id: PartyId) -> Option<&PartyAccount> {
        self.accounts.get(&id)
    }

    pub fn account_mut(&mut self, id: PartyId) -> Option<&mut PartyAccount> {
        self.accounts.get_mut(&id)
    }

    /// Current balance of `id`, or zero for a party the gym has never seen.
    pub fn balance_of(&self, id: PartyId) -> f64 {
        self.account(id)
            .map(|account| account.balance.amount())
            .unwrap_or_default()
    }

    pub fn notifications_of(&self, id: PartyId) -> &[String] {
        self.account(id)
            .map(|account| account.notifications.as_slice())
            .unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}

impl ReceiverDirectory for PartyBook {
    type Receiver = PartyAccount;

    fn receiver_mut(&mut self, id: PartyId) -> Option<&mut PartyAccount> {
        self.account_mut(id)
    }
}
