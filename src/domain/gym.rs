use std::fmt;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::core::clock::Clock;
use crate::domain::common::{whole_units, GymId, Identifiable, NamedEntity};
use crate::domain::notification::Channel;
use crate::domain::person::{Client, Instructor, Person};
use crate::domain::secretary::Secretary;
use crate::domain::session::{Session, SessionId};
use crate::errors::{GymError, GymResult};
use crate::ledger::{Balance, PartyBook};

/// Age thresholds applied during registration and enrollment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrollmentPolicy {
    pub minimum_client_age: u32,
    pub senior_age: u32,
}

impl Default for EnrollmentPolicy {
    fn default() -> Self {
        Self {
            minimum_client_age: 18,
            senior_age: 65,
        }
    }
}

/// Aggregate root: everything a single gym knows about.
///
/// All mutation goes through `&mut Gym`, which is the only exclusion boundary
/// the model needs.
pub struct Gym {
    id: GymId,
    name: String,
    secretary: Option<Secretary>,
    tenure: u64,
    clients: Vec<Client>,
    instructors: Vec<Instructor>,
    sessions: Vec<Session>,
    actions: Vec<String>,
    balance: Balance,
    parties: PartyBook,
    announcements: Channel,
    clock: Box<dyn Clock>,
    policy: EnrollmentPolicy,
}

impl Gym {
    pub fn new(name: impl Into<String>, clock: Box<dyn Clock>) -> Self {
        Self {
            id: GymId::next(),
            name: name.into(),
            secretary: None,
            tenure: 0,
            clients: Vec::new(),
            instructors: Vec::new(),
            sessions: Vec::new(),
            actions: Vec::new(),
            balance: Balance::default(),
            parties: PartyBook::new(),
            announcements: Channel::new(),
            clock,
            policy: EnrollmentPolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: EnrollmentPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn id(&self) -> GymId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn policy(&self) -> &EnrollmentPolicy {
        &self.policy
    }

    pub fn now(&self) -> NaiveDateTime {
        self.clock.now()
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    /// Installs a new secretary, deactivating whoever held the post before.
    pub fn hire_secretary(&mut self, person: Person, salary: f64) -> Secretary {
        self.tenure += 1;
        self.parties.open(&person);
        let secretary = Secretary::new(person, salary, self.id, self.tenure);
        if let Some(previous) = self.secretary.replace(secretary.clone()) {
            info!(previous = %previous.id(), "secretary deactivated");
        }
        info!(secretary = %secretary.id(), tenure = self.tenure, "secretary hired");
        self.record_action(format!(
            "A new secretary has started working at the gym: {}",
            secretary.name()
        ));
        secretary
    }

    pub fn secretary(&self) -> Option<&Secretary> {
        self.secretary.as_ref()
    }

    /// True only for the handle returned by this gym's latest hire.
    pub fn is_active(&self, secretary: &Secretary) -> bool {
        secretary.gym() == self.id
            && self.secretary.as_ref().is_some_and(|current| {
                current.tenure() == secretary.tenure() && current.id() == secretary.id()
            })
    }

    pub fn ensure_active(&self, secretary: &Secretary) -> GymResult<()> {
        if self.is_active(secretary) {
            Ok(())
        } else {
            Err(GymError::InactiveSecretary)
        }
    }

    pub fn clients(&self) -> &[Client] {
        &self.clients
    }

    pub fn is_client_registered(&self, client: &Client) -> bool {
        self.clients.contains(client)
    }

    pub(crate) fn add_client(&mut self, client: Client) {
        self.parties.open(client.person());
        self.clients.push(client);
    }

    pub(crate) fn remove_client(&mut self, client: &Client) -> Option<Client> {
        let index = self.clients.iter().position(|known| known == client)?;
        Some(self.clients.remove(index))
    }

    pub fn instructors(&self) -> &[Instructor] {
        &self.instructors
    }

    pub fn employs(&self, instructor: &Instructor) -> bool {
        self.instructors.contains(instructor)
    }

    pub(crate) fn add_instructor(&mut self, instructor: Instructor) {
        self.parties.open(instructor.person());
        self.instructors.push(instructor);
    }

    pub fn sessions(&self) -> &[Session] {
        &self.sessions
    }

    fn session_slot(&self, id: SessionId) -> GymResult<usize> {
        if id.gym() == self.id && id.index() < self.sessions.len() {
            Ok(id.index())
        } else {
            Err(GymError::SessionNotFound(id))
        }
    }

    pub fn session(&self, id: SessionId) -> GymResult<&Session> {
        let slot = self.session_slot(id)?;
        Ok(&self.sessions[slot])
    }

    pub(crate) fn session_mut(&mut self, id: SessionId) -> GymResult<&mut Session> {
        let slot = self.session_slot(id)?;
        Ok(&mut self.sessions[slot])
    }

    pub(crate) fn next_session_id(&self) -> SessionId {
        SessionId::new(self.id, self.sessions.len())
    }

    pub(crate) fn add_session(&mut self, session: Session) -> SessionId {
        let id = session.id();
        self.sessions.push(session);
        id
    }

    /// Number of sessions on the books taught by `instructor`.
    pub fn sessions_taught_by(&self, instructor: &Instructor) -> usize {
        self.sessions
            .iter()
            .filter(|session| session.instructor() == instructor)
            .count()
    }

    pub fn action_log(&self) -> &[String] {
        &self.actions
    }

    pub(crate) fn record_action(&mut self, action: impl Into<String>) {
        self.actions.push(action.into());
    }

    pub fn balance(&self) -> f64 {
        self.balance.amount()
    }

    pub(crate) fn ledger_mut(&mut self) -> &mut Balance {
        &mut self.balance
    }

    pub fn parties(&self) -> &PartyBook {
        &self.parties
    }

    pub(crate) fn parties_mut(&mut self) -> &mut PartyBook {
        &mut self.parties
    }

    pub fn balance_of(&self, party: &impl Identifiable) -> f64 {
        self.parties.balance_of(party.id())
    }

    pub fn notifications_of(&self, party: &impl Identifiable) -> &[String] {
        self.parties.notifications_of(party.id())
    }

    pub(crate) fn broadcast_to_session(
        &mut self,
        id: SessionId,
        message: &str,
    ) -> GymResult<usize> {
        let slot = self.session_slot(id)?;
        Ok(self.sessions[slot].notify(message, &mut self.parties))
    }

    /// Notifies the rosters of every session held on `date`.
    pub(crate) fn broadcast_on_date(&mut self, date: NaiveDate, message: &str) -> usize {
        self.sessions
            .iter()
            .filter(|session| session.date() == date)
            .map(|session| session.notify(message, &mut self.parties))
            .sum()
    }

    /// One-shot fan-out to every current client. Nobody stays subscribed.
    pub(crate) fn broadcast_to_clients(&mut self, message: &str) -> usize {
        for client in &self.clients {
            self.announcements.subscribe(client.id());
        }
        let delivered = self.announcements.broadcast(message, &mut self.parties);
        for client in &self.clients {
            self.announcements.unsubscribe(client.id());
        }
        delivered
    }

    /// Serializable snapshot used for operator inspection.
    pub fn report(&self) -> GymReport {
        let today = self.today();
        let party_line = |person: &Person| {
            format!(
                "{} | Age: {} | Balance: {}",
                person,
                person.age_on(today),
                whole_units(self.parties.balance_of(person.id))
            )
        };

        let secretary = self
            .secretary
            .as_ref()
            .map(|secretary| {
                format!("{} | {}", party_line(secretary.person()), secretary.role_details())
            });
        let clients = self
            .clients
            .iter()
            .map(|client| party_line(client.person()))
            .collect();
        let instructors = self
            .instructors
            .iter()
            .map(|instructor| {
                format!("{} | {}", party_line(instructor.person()), instructor.role_details())
            })
            .collect();

        GymReport {
            name: self.name.clone(),
            balance: whole_units(self.balance.amount()),
            secretary,
            clients,
            instructors,
            sessions: self.sessions.iter().map(ToString::to_string).collect(),
            actions: self.actions.clone(),
        }
    }
}

impl fmt::Display for Gym {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.report(), f)
    }
}

impl fmt::Debug for Gym {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Gym")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("secretary", &self.secretary.as_ref().map(|s| s.id()))
            .field("clients", &self.clients.len())
            .field("instructors", &self.instructors.len())
            .field("sessions", &self.sessions.len())
            .field("balance", &self.balance.amount())
            .finish()
    }
}

/// Rendered view of a gym, one line per party or session.
#[derive(Debug, Clone, Serialize)]
pub struct GymReport {
    pub name: String,
    pub balance: i64,
    pub secretary: Option<String>,
    pub clients: Vec<String>,
    pub instructors: Vec<String>,
    pub sessions: Vec<String>,
    pub actions: Vec<String>,
}

impl fmt::Display for GymReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let secretary = self.secretary.as_deref().unwrap_or("none");
        writeln!(f, "Gym Name: {}", self.name)?;
        writeln!(f, "Gym Secretary: {secretary}")?;
        writeln!(f, "Gym Balance: {}", self.balance)?;
        writeln!(f)?;
        writeln!(f, "Clients Data:")?;
        for client in &self.clients {
            writeln!(f, "{client}")?;
        }
        writeln!(f)?;
        writeln!(f, "Employees Data:")?;
        for instructor in &self.instructors {
            writeln!(f, "{instructor}")?;
        }
        if let Some(secretary) = &self.secretary {
            writeln!(f, "{secretary}")?;
        }
        writeln!(f)?;
        writeln!(f, "Sessions Data:")?;
        write!(f, "{}", self.sessions.join("\n"))
    }
}
