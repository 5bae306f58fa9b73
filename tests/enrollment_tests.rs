mod common;

use common::{hire_coach, person, setup_gym};
use gym_core::{
    core::services::{ClientService, EnrollmentService, ScheduleService},
    domain::{ForumType, Gender, Identifiable, SessionType},
    errors::{DuplicateScope, GymError},
};

#[test]
fn registration_adds_exactly_one_client_with_the_same_id() {
    let (mut gym, secretary) = setup_gym();
    let dana = person("Dana", 200.0, Gender::Female, "02-07-1995");
    let dana_id = dana.id;

    let before = gym.clients().len();
    let client = ClientService::register(&mut gym, &secretary, dana).unwrap();

    assert_eq!(gym.clients().len(), before + 1);
    assert_eq!(client.id(), dana_id);
    assert_eq!(gym.balance_of(&client), 200.0);
    assert_eq!(gym.action_log().last().unwrap(), "Registered new client: Dana");
}

#[test]
fn registering_twice_is_a_duplicate() {
    let (mut gym, secretary) = setup_gym();
    let dana = person("Dana", 200.0, Gender::Female, "02-07-1995");

    ClientService::register(&mut gym, &secretary, dana.clone()).unwrap();
    let err = ClientService::register(&mut gym, &secretary, dana).unwrap_err();

    assert!(matches!(
        err,
        GymError::DuplicateClient {
            scope: DuplicateScope::Gym,
            ..
        }
    ));
    assert_eq!(gym.clients().len(), 1);
}

#[test]
fn minors_cannot_register() {
    let (mut gym, secretary) = setup_gym();
    let teen = person("Noam", 50.0, Gender::Male, "02-01-2007");

    let err = ClientService::register(&mut gym, &secretary, teen).unwrap_err();

    assert!(matches!(err, GymError::InvalidAge { age: 17, minimum: 18 }));
    assert!(gym.clients().is_empty());
}

#[test]
fn unregistering_an_unknown_client_fails() {
    let (mut gym, secretary) = setup_gym();
    let client = ClientService::register(
        &mut gym,
        &secretary,
        person("Dana", 0.0, Gender::Female, "02-07-1995"),
    )
    .unwrap();

    ClientService::unregister(&mut gym, &secretary, &client).unwrap();
    let err = ClientService::unregister(&mut gym, &secretary, &client).unwrap_err();

    assert!(matches!(err, GymError::ClientNotRegistered(id) if id == client.id()));
    assert_eq!(gym.action_log().last().unwrap(), "Unregistered client: Dana");
}

#[test]
fn senior_enrollment_moves_money_then_full_session_rejects_softly() {
    let (mut gym, secretary) = setup_gym();
    let coach = hire_coach(&mut gym, &secretary, "Eitan", 50.0);
    let session = ScheduleService::schedule(
        &mut gym,
        &secretary,
        SessionType::Pilates,
        "15-01-2025 09:00",
        ForumType::Seniors,
        &coach,
    )
    .unwrap();
    let rivka = ClientService::register(
        &mut gym,
        &secretary,
        person("Rivka", 300.0, Gender::Female, "10-06-1954"),
    )
    .unwrap();
    let yosef = ClientService::register(
        &mut gym,
        &secretary,
        person("Yosef", 300.0, Gender::Male, "10-06-1950"),
    )
    .unwrap();

    EnrollmentService::enroll(&mut gym, &secretary, &rivka, session).unwrap();

    let enrolled = gym.session(session).unwrap();
    assert_eq!(enrolled.roster(), &[rivka.id()]);
    assert_eq!(gym.balance_of(&rivka), 240.0);
    assert_eq!(gym.balance(), 60.0);
    assert_eq!(
        gym.action_log().last().unwrap(),
        "Registered client: Rivka to session: Pilates on 2025-01-15T09:00 for price: 60"
    );

    // Fill the remaining 29 spots.
    for index in 0..29 {
        let filler = ClientService::register(
            &mut gym,
            &secretary,
            person(&format!("Senior {index}"), 100.0, Gender::Female, "01-01-1940"),
        )
        .unwrap();
        EnrollmentService::enroll(&mut gym, &secretary, &filler, session).unwrap();
    }
    assert!(gym.session(session).unwrap().is_full());

    let gym_balance = gym.balance();
    let log_len = gym.action_log().len();
    EnrollmentService::enroll(&mut gym, &secretary, &yosef, session).unwrap();

    assert!(!gym.session(session).unwrap().is_enrolled(&yosef));
    assert_eq!(gym.balance_of(&yosef), 300.0);
    assert_eq!(gym.balance(), gym_balance);
    assert_eq!(gym.action_log().len(), log_len + 1);
    assert_eq!(
        gym.action_log().last().unwrap(),
        "Failed registration: No available spots for session"
    );
}

#[test]
fn insufficient_balance_never_mutates() {
    let (mut gym, secretary) = setup_gym();
    let coach = hire_coach(&mut gym, &secretary, "Eitan", 50.0);
    let session = ScheduleService::schedule(
        &mut gym,
        &secretary,
        SessionType::Ninja,
        "20-02-2025 19:00",
        ForumType::All,
        &coach,
    )
    .unwrap();
    let avi = ClientService::register(
        &mut gym,
        &secretary,
        person("Avi", 149.0, Gender::Male, "15-11-1999"),
    )
    .unwrap();

    EnrollmentService::enroll(&mut gym, &secretary, &avi, session).unwrap();

    assert!(gym.session(session).unwrap().roster().is_empty());
    assert_eq!(gym.balance_of(&avi), 149.0);
    assert_eq!(gym.balance(), 0.0);
    assert_eq!(
        gym.action_log().last().unwrap(),
        "Failed registration: Client doesn't have enough balance"
    );
}

#[test]
fn every_soft_failure_is_logged_separately() {
    let (mut gym, secretary) = setup_gym();
    let coach = hire_coach(&mut gym, &secretary, "Eitan", 50.0);
    let past_ladies_night = ScheduleService::schedule(
        &mut gym,
        &secretary,
        SessionType::ThaiBoxing,
        "20-12-2024 20:00",
        ForumType::Female,
        &coach,
    )
    .unwrap();
    let avi = ClientService::register(
        &mut gym,
        &secretary,
        person("Avi", 10.0, Gender::Male, "15-11-1999"),
    )
    .unwrap();

    EnrollmentService::enroll(&mut gym, &secretary, &avi, past_ladies_night).unwrap();

    let log = gym.action_log();
    assert_eq!(
        &log[log.len() - 3..],
        [
            "Failed registration: Session is not in the future",
            "Failed registration: Client's gender doesn't match the session's gender requirements",
            "Failed registration: Client doesn't have enough balance",
        ]
    );
}

#[test]
fn unregistered_client_is_a_fatal_error() {
    let (mut gym, secretary) = setup_gym();
    let coach = hire_coach(&mut gym, &secretary, "Eitan", 50.0);
    let session = ScheduleService::schedule(
        &mut gym,
        &secretary,
        SessionType::Pilates,
        "20-02-2025 19:00",
        ForumType::All,
        &coach,
    )
    .unwrap();
    let outsider = gym_core::domain::Client::from(person("Lea", 500.0, Gender::Female, "01-01-1990"));
    let log_len = gym.action_log().len();

    let err = EnrollmentService::enroll(&mut gym, &secretary, &outsider, session).unwrap_err();

    assert!(matches!(err, GymError::ClientNotRegistered(_)));
    assert_eq!(gym.action_log().len(), log_len);
}

#[test]
fn enrolling_twice_is_a_duplicate() {
    let (mut gym, secretary) = setup_gym();
    let coach = hire_coach(&mut gym, &secretary, "Eitan", 50.0);
    let session = ScheduleService::schedule(
        &mut gym,
        &secretary,
        SessionType::Pilates,
        "20-02-2025 19:00",
        ForumType::All,
        &coach,
    )
    .unwrap();
    let lea = ClientService::register(
        &mut gym,
        &secretary,
        person("Lea", 500.0, Gender::Female, "01-01-1990"),
    )
    .unwrap();

    EnrollmentService::enroll(&mut gym, &secretary, &lea, session).unwrap();
    let err = EnrollmentService::enroll(&mut gym, &secretary, &lea, session).unwrap_err();

    assert!(matches!(
        err,
        GymError::DuplicateClient {
            scope: DuplicateScope::Session(id),
            ..
        } if id == session
    ));
    assert_eq!(gym.balance_of(&lea), 440.0);
    assert_eq!(gym.session(session).unwrap().roster().len(), 1);
}

#[test]
fn unqualified_or_foreign_instructors_cannot_teach() {
    let (mut gym, secretary) = setup_gym();
    let boxer = gym_core::core::services::StaffService::hire_instructor(
        &mut gym,
        &secretary,
        person("Tom", 0.0, Gender::Male, "03-03-1990"),
        60.0,
        [SessionType::ThaiBoxing],
    )
    .unwrap();

    let err = ScheduleService::schedule(
        &mut gym,
        &secretary,
        SessionType::Ninja,
        "20-02-2025 19:00",
        ForumType::All,
        &boxer,
    )
    .unwrap_err();
    assert!(matches!(
        err,
        GymError::InstructorNotQualified {
            session_type: SessionType::Ninja,
            ..
        }
    ));

    let (mut other_gym, other_secretary) = setup_gym();
    let err = ScheduleService::schedule(
        &mut other_gym,
        &other_secretary,
        SessionType::ThaiBoxing,
        "20-02-2025 19:00",
        ForumType::All,
        &boxer,
    )
    .unwrap_err();
    assert!(matches!(err, GymError::InstructorNotFound(id) if id == boxer.id()));
    assert!(gym.sessions().is_empty());
}

#[test]
fn replaced_secretary_cannot_act() {
    let (mut gym, old_secretary) = setup_gym();
    let new_secretary = gym.hire_secretary(person("Moshe", 0.0, Gender::Male, "04-04-1984"), 3500.0);

    let err = ClientService::register(
        &mut gym,
        &old_secretary,
        person("Dana", 200.0, Gender::Female, "02-07-1995"),
    )
    .unwrap_err();
    assert!(matches!(err, GymError::InactiveSecretary));
    assert!(gym.clients().is_empty());

    ClientService::register(
        &mut gym,
        &new_secretary,
        person("Dana", 200.0, Gender::Female, "02-07-1995"),
    )
    .unwrap();
    assert_eq!(gym.clients().len(), 1);
}

#[test]
fn eighteenth_birthday_is_old_enough_to_register() {
    let (mut gym, secretary) = setup_gym();
    let adult = person("Noa", 50.0, Gender::Female, "01-01-2007");

    let client = ClientService::register(&mut gym, &secretary, adult).unwrap();

    assert_eq!(client.age_on(common::reference_date()), 18);
    assert!(gym.is_client_registered(&client));
}

#[test]
fn balance_equal_to_price_is_enough() {
    let (mut gym, secretary) = setup_gym();
    let coach = hire_coach(&mut gym, &secretary, "Eitan", 50.0);
    let session = ScheduleService::schedule(
        &mut gym,
        &secretary,
        SessionType::Ninja,
        "20-02-2025 19:00",
        ForumType::All,
        &coach,
    )
    .unwrap();
    let avi = ClientService::register(
        &mut gym,
        &secretary,
        person("Avi", 150.0, Gender::Male, "15-11-1999"),
    )
    .unwrap();

    EnrollmentService::enroll(&mut gym, &secretary, &avi, session).unwrap();

    assert!(gym.session(session).unwrap().is_enrolled(&avi));
    assert_eq!(gym.balance_of(&avi), 0.0);
    assert_eq!(gym.balance(), 150.0);
}

#[test]
fn women_are_turned_away_from_male_sessions() {
    let (mut gym, secretary) = setup_gym();
    let coach = hire_coach(&mut gym, &secretary, "Eitan", 50.0);
    let session = ScheduleService::schedule(
        &mut gym,
        &secretary,
        SessionType::ThaiBoxing,
        "20-02-2025 19:00",
        ForumType::Male,
        &coach,
    )
    .unwrap();
    let dana = ClientService::register(
        &mut gym,
        &secretary,
        person("Dana", 500.0, Gender::Female, "02-07-1995"),
    )
    .unwrap();
    let log_len = gym.action_log().len();

    EnrollmentService::enroll(&mut gym, &secretary, &dana, session).unwrap();

    assert!(gym.session(session).unwrap().roster().is_empty());
    assert_eq!(gym.balance_of(&dana), 500.0);
    assert_eq!(gym.action_log().len(), log_len + 1);
    assert_eq!(
        gym.action_log().last().unwrap(),
        "Failed registration: Client's gender doesn't match the session's gender requirements"
    );
}

#[test]
fn seniors_sessions_start_at_sixty_five() {
    let (mut gym, secretary) = setup_gym();
    let coach = hire_coach(&mut gym, &secretary, "Eitan", 50.0);
    let session = ScheduleService::schedule(
        &mut gym,
        &secretary,
        SessionType::Pilates,
        "20-02-2025 10:00",
        ForumType::Seniors,
        &coach,
    )
    .unwrap();
    let almost = ClientService::register(
        &mut gym,
        &secretary,
        person("Shula", 500.0, Gender::Female, "02-01-1960"),
    )
    .unwrap();
    let senior = ClientService::register(
        &mut gym,
        &secretary,
        person("Bella", 500.0, Gender::Female, "01-01-1960"),
    )
    .unwrap();

    let log_len = gym.action_log().len();
    EnrollmentService::enroll(&mut gym, &secretary, &almost, session).unwrap();

    assert_eq!(gym.action_log().len(), log_len + 1);
    assert_eq!(
        gym.action_log().last().unwrap(),
        "Failed registration: Client doesn't meet the age requirements for this session (Seniors)"
    );
    assert_eq!(gym.balance_of(&almost), 500.0);

    EnrollmentService::enroll(&mut gym, &secretary, &senior, session).unwrap();
    assert_eq!(gym.session(session).unwrap().roster(), &[senior.id()]);
}

#[test]
fn secretary_of_another_gym_cannot_act() {
    let (mut gym, _) = setup_gym();
    let (_, outsider) = setup_gym();
    let log_len = gym.action_log().len();

    let err = ClientService::register(
        &mut gym,
        &outsider,
        person("Dana", 200.0, Gender::Female, "02-07-1995"),
    )
    .unwrap_err();

    assert!(matches!(err, GymError::InactiveSecretary));
    assert!(gym.clients().is_empty());
    assert_eq!(gym.action_log().len(), log_len);
}

#[test]
fn session_handles_only_resolve_in_their_own_gym() {
    let (mut gym, secretary) = setup_gym();
    let (mut other_gym, other_secretary) = setup_gym();
    let coach = hire_coach(&mut gym, &secretary, "Eitan", 50.0);
    let other_coach = hire_coach(&mut other_gym, &other_secretary, "Gal", 50.0);
    ScheduleService::schedule(
        &mut gym,
        &secretary,
        SessionType::Pilates,
        "20-02-2025 19:00",
        ForumType::All,
        &coach,
    )
    .unwrap();
    let foreign = ScheduleService::schedule(
        &mut other_gym,
        &other_secretary,
        SessionType::Pilates,
        "21-02-2025 19:00",
        ForumType::All,
        &other_coach,
    )
    .unwrap();
    let lea = ClientService::register(
        &mut gym,
        &secretary,
        person("Lea", 500.0, Gender::Female, "01-01-1990"),
    )
    .unwrap();

    assert_eq!(foreign.index(), 0);
    assert!(matches!(gym.session(foreign), Err(GymError::SessionNotFound(id)) if id == foreign));
    let err = EnrollmentService::enroll(&mut gym, &secretary, &lea, foreign).unwrap_err();
    assert!(matches!(err, GymError::SessionNotFound(_)));
    assert!(gym.sessions()[0].roster().is_empty());
    assert_eq!(gym.balance_of(&lea), 500.0);
}
