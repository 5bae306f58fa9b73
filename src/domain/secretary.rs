use std::fmt;

use serde::Serialize;

use crate::domain::common::{whole_units, GymId, Identifiable, NamedEntity, PartyId};
use crate::domain::person::Person;

/// The gym's administrator and the capability every back-office operation
/// requires.
///
/// Each hire gets a new tenure number within the hiring gym. A secretary is
/// active only in that gym and only while its tenure is the current one, so
/// hiring a replacement deactivates every older handle for good.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Secretary {
    person: Person,
    salary: f64,
    gym: GymId,
    tenure: u64,
}

impl Secretary {
    pub(crate) fn new(person: Person, salary: f64, gym: GymId, tenure: u64) -> Self {
        Self {
            person,
            salary,
            gym,
            tenure,
        }
    }

    pub fn person(&self) -> &Person {
        &self.person
    }

    /// Fixed salary paid on every payroll run.
    pub fn salary(&self) -> f64 {
        self.salary
    }

    /// The gym that hired this secretary.
    pub fn gym(&self) -> GymId {
        self.gym
    }

    pub fn tenure(&self) -> u64 {
        self.tenure
    }

    pub fn role_details(&self) -> String {
        format!(
            "Role: Secretary | Salary per Month: {}",
            whole_units(self.salary)
        )
    }
}

impl Identifiable for Secretary {
    fn id(&self) -> PartyId {
        self.person.id
    }
}

impl NamedEntity for Secretary {
    fn name(&self) -> &str {
        &self.person.name
    }
}

impl fmt::Display for Secretary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} | {}", self.person, self.role_details())
    }
}
