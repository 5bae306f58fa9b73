use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::common::whole_units;

/// Numeric balance owned by a single party.
///
/// No overdraft guard lives here: callers check sufficiency before withdrawing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Balance {
    amount: f64,
}

impl Balance {
    pub fn new(opening: f64) -> Self {
        Self { amount: opening }
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    pub fn deposit(&mut self, amount: f64) {
        self.amount += amount;
    }

    pub fn withdraw(&mut self, amount: f64) {
        self.amount -= amount;
    }
}

impl fmt::Display for Balance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", whole_units(self.amount))
    }
}
