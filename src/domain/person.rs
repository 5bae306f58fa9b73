use std::collections::BTreeSet;
use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::domain::common::{
    parse_date, whole_units, Gender, Identifiable, NamedEntity, PartyId, DATE_FORMAT,
};
use crate::domain::session::SessionType;
use crate::errors::GymResult;

/// Identity record for anyone who deals with the gym.
///
/// The opening balance only seeds the party's account the first time the gym
/// sees this person; afterwards the gym's party book is authoritative.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Person {
    pub id: PartyId,
    pub name: String,
    pub gender: Gender,
    pub date_of_birth: NaiveDate,
    pub opening_balance: f64,
}

impl Person {
    /// Creates a person with a fresh id. `date_of_birth` is `dd-MM-yyyy`.
    pub fn new(
        name: impl Into<String>,
        opening_balance: f64,
        gender: Gender,
        date_of_birth: &str,
    ) -> GymResult<Self> {
        Ok(Self {
            id: PartyId::next(),
            name: name.into(),
            gender,
            date_of_birth: parse_date(date_of_birth)?,
            opening_balance,
        })
    }

    /// Whole years completed on `today`; zero for birth dates in the future.
    pub fn age_on(&self, today: NaiveDate) -> u32 {
        let born = self.date_of_birth;
        let mut years = today.year() - born.year();
        if (today.month(), today.day()) < (born.month(), born.day()) {
            years -= 1;
        }
        years.max(0) as u32
    }
}

impl PartialEq for Person {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Person {}

impl Identifiable for Person {
    fn id(&self) -> PartyId {
        self.id
    }
}

impl NamedEntity for Person {
    fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID: {} | Name: {} | Gender: {} | Birthday: {}",
            self.id,
            self.name,
            self.gender,
            self.date_of_birth.format(DATE_FORMAT)
        )
    }
}

/// A registered gym member. Receives session and gym-wide notifications.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Client {
    person: Person,
}

impl Client {
    pub fn person(&self) -> &Person {
        &self.person
    }

    pub fn gender(&self) -> Gender {
        self.person.gender
    }

    pub fn age_on(&self, today: NaiveDate) -> u32 {
        self.person.age_on(today)
    }
}

impl From<Person> for Client {
    fn from(person: Person) -> Self {
        Self { person }
    }
}

impl Identifiable for Client {
    fn id(&self) -> PartyId {
        self.person.id
    }
}

impl NamedEntity for Client {
    fn name(&self) -> &str {
        &self.person.name
    }
}

impl fmt::Display for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.person, f)
    }
}

/// Staff member paid per session hour and gated by certification.
#[derive(Debug, Clone, Serialize)]
pub struct Instructor {
    person: Person,
    hourly_wage: f64,
    certified: BTreeSet<SessionType>,
}

impl Instructor {
    pub fn new(
        person: Person,
        hourly_wage: f64,
        certified: impl IntoIterator<Item = SessionType>,
    ) -> Self {
        Self {
            person,
            hourly_wage,
            certified: certified.into_iter().collect(),
        }
    }

    pub fn person(&self) -> &Person {
        &self.person
    }

    pub fn hourly_wage(&self) -> f64 {
        self.hourly_wage
    }

    pub fn certified_types(&self) -> impl Iterator<Item = SessionType> + '_ {
        self.certified.iter().copied()
    }

    pub fn is_certified_for(&self, session_type: SessionType) -> bool {
        self.certified.contains(&session_type)
    }

    /// Role-specific tail of the instructor's summary line.
    pub fn role_details(&self) -> String {
        let certified = self
            .certified
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        format!(
            "Role: Instructor | Salary per Hour: {} | Certified Classes: {}",
            whole_units(self.hourly_wage),
            certified
        )
    }
}

impl PartialEq for Instructor {
    fn eq(&self, other: &Self) -> bool {
        self.person == other.person
    }
}

impl Eq for Instructor {}

impl Identifiable for Instructor {
    fn id(&self) -> PartyId {
        self.person.id
    }
}

impl NamedEntity for Instructor {
    fn name(&self) -> &str {
        &self.person.name
    }
}

impl fmt::Display for Instructor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} | {}", self.person, self.role_details())
    }
}
