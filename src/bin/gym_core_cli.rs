use std::{env, process};

use colored::Colorize;
use gym_core::{
    config::{ConfigManager, GymConfig},
    core::services::{
        ClientService, EnrollmentService, NotificationService, ReportService, ScheduleService,
        StaffService,
    },
    domain::{ForumType, Gender, Gym, Person, Secretary, SessionType},
    init,
};

fn main() {
    init();

    if let Err(err) = run() {
        eprintln!("{} {err}", "Error:".red().bold());
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = env::args().skip(1);
    let command = args.next().unwrap_or_else(|| {
        print_usage();
        process::exit(1);
    });

    match command.as_str() {
        "demo" => {
            let json = matches!(args.next().as_deref(), Some("--json"));
            let config = ConfigManager::new().load()?;
            let (gym, secretary) = run_demo(&config)?;
            let report = ReportService::summary(&gym, &secretary)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("{}", "Gym summary".bold().underline());
                println!("{report}");
                println!();
                println!("{}", "Action log".bold().underline());
                for action in ReportService::action_log(&gym, &secretary)? {
                    println!("{action}");
                }
            }
        }
        "config" => {
            let manager = ConfigManager::new();
            match args.next().as_deref() {
                None | Some("show") => {
                    let config = manager.load()?;
                    println!("{}", serde_json::to_string_pretty(&config)?);
                }
                Some("path") => println!("{}", manager.path().display()),
                Some("init") => {
                    manager.save(&GymConfig::default())?;
                    println!("Wrote default config to {}", manager.path().display());
                }
                Some(_) => {
                    print_usage();
                    process::exit(1);
                }
            }
        }
        _ => {
            print_usage();
            process::exit(1);
        }
    }

    Ok(())
}

/// Walks a small but complete working day through the back office.
fn run_demo(config: &GymConfig) -> Result<(Gym, Secretary), Box<dyn std::error::Error>> {
    let mut gym = config.build_gym();
    let secretary = gym.hire_secretary(
        Person::new("Ruth", 0.0, Gender::Female, "21-04-1988")?,
        config.secretary_salary,
    );

    let dana = ClientService::register(
        &mut gym,
        &secretary,
        Person::new("Dana", 500.0, Gender::Female, "02-07-1995")?,
    )?;
    let avi = ClientService::register(
        &mut gym,
        &secretary,
        Person::new("Avi", 90.0, Gender::Male, "15-11-1999")?,
    )?;
    let miriam = ClientService::register(
        &mut gym,
        &secretary,
        Person::new("Miriam", 400.0, Gender::Female, "30-01-1950")?,
    )?;

    let coach = StaffService::hire_instructor(
        &mut gym,
        &secretary,
        Person::new("Eitan", 0.0, Gender::Male, "09-09-1985")?,
        70.0,
        [SessionType::Pilates, SessionType::ThaiBoxing],
    )?;
    let ninja_coach = StaffService::hire_instructor(
        &mut gym,
        &secretary,
        Person::new("Gal", 0.0, Gender::Female, "12-03-1992")?,
        90.0,
        [SessionType::Ninja],
    )?;

    let pilates = ScheduleService::schedule(
        &mut gym,
        &secretary,
        SessionType::Pilates,
        "23-01-2025 10:00",
        ForumType::Seniors,
        &coach,
    )?;
    let boxing = ScheduleService::schedule(
        &mut gym,
        &secretary,
        SessionType::ThaiBoxing,
        "23-01-2025 18:00",
        ForumType::All,
        &coach,
    )?;
    let ninja = ScheduleService::schedule(
        &mut gym,
        &secretary,
        SessionType::Ninja,
        "24-01-2025 19:00",
        ForumType::Female,
        &ninja_coach,
    )?;

    EnrollmentService::enroll(&mut gym, &secretary, &miriam, pilates)?;
    EnrollmentService::enroll(&mut gym, &secretary, &dana, pilates)?;
    EnrollmentService::enroll(&mut gym, &secretary, &dana, boxing)?;
    EnrollmentService::enroll(&mut gym, &secretary, &avi, boxing)?;
    EnrollmentService::enroll(&mut gym, &secretary, &avi, ninja)?;

    NotificationService::notify_session(
        &mut gym,
        &secretary,
        boxing,
        "Bring your own gloves",
    )?;
    NotificationService::notify_by_date(
        &mut gym,
        &secretary,
        "23-01-2025",
        "Parking lot is closed on Thursday",
    )?;
    NotificationService::notify_all_clients(&mut gym, &secretary, "Happy new year!")?;

    StaffService::pay_salaries(&mut gym, &secretary)?;
    ClientService::unregister(&mut gym, &secretary, &avi)?;

    Ok((gym, secretary))
}

fn print_usage() {
    eprintln!(
        "Usage: gym_core_cli <command>\n\
         Commands:\n  \
         demo [--json]\n  \
         config [show|path|init]"
    );
}
