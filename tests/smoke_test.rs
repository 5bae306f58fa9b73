mod common;

use common::{hire_coach, person, setup_gym};
use gym_core::{
    core::services::{ClientService, EnrollmentService, ScheduleService},
    domain::{ForumType, Gender, SessionType},
    init,
};

#[test]
fn gym_day_smoke() {
    init();

    let (mut gym, secretary) = setup_gym();
    let coach = hire_coach(&mut gym, &secretary, "Eitan", 80.0);
    let session = ScheduleService::schedule(
        &mut gym,
        &secretary,
        SessionType::MachinePilates,
        "07-01-2025 07:00",
        ForumType::All,
        &coach,
    )
    .unwrap();
    let client = ClientService::register(
        &mut gym,
        &secretary,
        person("Dana", 100.0, Gender::Female, "02-07-1995"),
    )
    .unwrap();

    EnrollmentService::enroll(&mut gym, &secretary, &client, session).unwrap();

    assert_eq!(gym.balance(), 80.0);
    assert_eq!(gym.balance_of(&client), 20.0);
    assert!(gym
        .to_string()
        .contains("Session Type: MachinePilates | Date: 07-01-2025 07:00 | Forum: All | Instructor: Eitan | Participants: 1/10"));
}
