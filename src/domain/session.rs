use std::fmt;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::domain::common::{
    parse_date_time, Gender, GymId, Identifiable, NamedEntity, PartyId, DATE_TIME_FORMAT,
};
use crate::domain::gym::EnrollmentPolicy;
use crate::domain::notification::{Channel, ReceiverDirectory};
use crate::domain::person::{Client, Instructor};
use crate::errors::{GymError, GymResult};

/// Kinds of classes the gym runs. Each kind fixes its own price and capacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SessionType {
    Pilates,
    MachinePilates,
    ThaiBoxing,
    Ninja,
}

impl SessionType {
    pub const ALL: [SessionType; 4] = [
        SessionType::Pilates,
        SessionType::MachinePilates,
        SessionType::ThaiBoxing,
        SessionType::Ninja,
    ];

    pub fn price(self) -> f64 {
        match self {
            SessionType::Pilates => 60.0,
            SessionType::MachinePilates => 80.0,
            SessionType::ThaiBoxing => 100.0,
            SessionType::Ninja => 150.0,
        }
    }

    pub fn capacity(self) -> usize {
        match self {
            SessionType::Pilates => 30,
            SessionType::MachinePilates => 10,
            SessionType::ThaiBoxing => 20,
            SessionType::Ninja => 5,
        }
    }
}

impl fmt::Display for SessionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SessionType::Pilates => "Pilates",
            SessionType::MachinePilates => "MachinePilates",
            SessionType::ThaiBoxing => "ThaiBoxing",
            SessionType::Ninja => "Ninja",
        };
        f.write_str(label)
    }
}

/// Eligibility class restricting who may join a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ForumType {
    Male,
    Female,
    Seniors,
    All,
}

impl fmt::Display for ForumType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ForumType::Male => "Male",
            ForumType::Female => "Female",
            ForumType::Seniors => "Seniors",
            ForumType::All => "All",
        };
        f.write_str(label)
    }
}

/// Handle to a session owned by a [`crate::domain::gym::Gym`].
///
/// Only the issuing gym resolves a handle; any other gym reports it as not
/// found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SessionId {
    gym: GymId,
    index: usize,
}

impl SessionId {
    pub(crate) fn new(gym: GymId, index: usize) -> Self {
        Self { gym, index }
    }

    pub fn gym(&self) -> GymId {
        self.gym
    }

    /// Position in the issuing gym's schedule, in creation order.
    pub fn index(&self) -> usize {
        self.index
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.index)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Session {
    id: SessionId,
    session_type: SessionType,
    date_time: NaiveDateTime,
    forum: ForumType,
    instructor: Instructor,
    capacity: usize,
    price: f64,
    /// Enrolled clients. Doubles as the session's notification channel.
    roster: Channel,
}

impl Session {
    /// Builds a session with the price and capacity fixed by its type.
    pub fn new(
        id: SessionId,
        session_type: SessionType,
        date_time: NaiveDateTime,
        forum: ForumType,
        instructor: Instructor,
    ) -> Self {
        Self {
            id,
            session_type,
            date_time,
            forum,
            instructor,
            capacity: session_type.capacity(),
            price: session_type.price(),
            roster: Channel::new(),
        }
    }

    /// Like [`Session::new`], parsing `date_time` as `dd-MM-yyyy HH:mm`.
    pub fn parse(
        id: SessionId,
        session_type: SessionType,
        date_time: &str,
        forum: ForumType,
        instructor: Instructor,
    ) -> GymResult<Self> {
        let date_time = parse_date_time(date_time)?;
        Ok(Self::new(id, session_type, date_time, forum, instructor))
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn session_type(&self) -> SessionType {
        self.session_type
    }

    pub fn date_time(&self) -> NaiveDateTime {
        self.date_time
    }

    pub fn date(&self) -> NaiveDate {
        self.date_time.date()
    }

    pub fn forum(&self) -> ForumType {
        self.forum
    }

    pub fn instructor(&self) -> &Instructor {
        &self.instructor
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn roster(&self) -> &[PartyId] {
        self.roster.subscribers()
    }

    pub fn is_enrolled(&self, client: &Client) -> bool {
        self.roster.is_subscribed(client.id())
    }

    pub fn is_in_future(&self, now: NaiveDateTime) -> bool {
        self.date_time > now
    }

    pub fn is_client_eligible(
        &self,
        client: &Client,
        today: NaiveDate,
        policy: &EnrollmentPolicy,
    ) -> bool {
        match self.forum {
            ForumType::All => true,
            ForumType::Male => client.gender() == Gender::Male,
            ForumType::Female => client.gender() == Gender::Female,
            ForumType::Seniors => client.age_on(today) >= policy.senior_age,
        }
    }

    pub fn is_full(&self) -> bool {
        self.roster.subscribers().len() >= self.capacity
    }

    /// Adds `client` to the roster and subscribes it to session notices.
    ///
    /// Capacity is the only check performed here.
    pub fn enroll(&mut self, client: &Client) -> GymResult<()> {
        if self.is_full() {
            return Err(GymError::SessionFull(self.id));
        }
        self.roster.subscribe(client.id());
        Ok(())
    }

    /// Pushes `message` to everyone on the roster.
    pub fn notify<D: ReceiverDirectory>(&self, message: &str, directory: &mut D) -> usize {
        self.roster.broadcast(message, directory)
    }
}

/// Sessions are the same when they share type, time, forum and instructor.
impl PartialEq for Session {
    fn eq(&self, other: &Self) -> bool {
        self.session_type == other.session_type
            && self.date_time == other.date_time
            && self.forum == other.forum
            && self.instructor == other.instructor
    }
}

impl Eq for Session {}

impl fmt::Display for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Session Type: {} | Date: {} | Forum: {} | Instructor: {} | Participants: {}/{}",
            self.session_type,
            self.date_time.format(DATE_TIME_FORMAT),
            self.forum,
            self.instructor.name(),
            self.roster.subscribers().len(),
            self.capacity
        )
    }
}
