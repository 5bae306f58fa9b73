#![allow(dead_code)]

use chrono::NaiveDate;
use gym_core::{
    core::{clock::FixedClock, services::StaffService},
    domain::{Gender, Gym, Instructor, Person, Secretary, SessionType},
};

/// Reference "now" for every integration test: 2025-01-01 00:00.
pub fn reference_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 1).expect("valid reference date")
}

/// Creates an isolated gym on the reference clock with an active secretary.
pub fn setup_gym() -> (Gym, Secretary) {
    let mut gym = Gym::new("Test Gym", Box::new(FixedClock::at_midnight(reference_date())));
    let secretary = gym.hire_secretary(person("Sigal", 0.0, Gender::Female, "10-10-1980"), 3000.0);
    (gym, secretary)
}

pub fn person(name: &str, balance: f64, gender: Gender, born: &str) -> Person {
    Person::new(name, balance, gender, born).expect("valid birth date")
}

/// An instructor certified for every session type.
pub fn hire_coach(gym: &mut Gym, secretary: &Secretary, name: &str, wage: f64) -> Instructor {
    StaffService::hire_instructor(
        gym,
        secretary,
        person(name, 0.0, Gender::Male, "01-05-1985"),
        wage,
        SessionType::ALL,
    )
    .expect("hire instructor")
}
