use serde::Serialize;
use tracing::info;

use crate::domain::common::{whole_units, Identifiable, NamedEntity, PartyId};
use crate::domain::gym::Gym;
use crate::domain::person::{Instructor, Person};
use crate::domain::secretary::Secretary;
use crate::domain::session::SessionType;
use crate::errors::GymResult;

/// One salary transfer made during a payroll run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Payslip {
    pub party: PartyId,
    pub amount: f64,
}

/// Everything paid out by a single [`StaffService::pay_salaries`] call.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Payroll {
    pub payslips: Vec<Payslip>,
}

impl Payroll {
    pub fn total(&self) -> f64 {
        self.payslips.iter().map(|slip| slip.amount).sum()
    }

    pub fn amount_for(&self, party: &impl Identifiable) -> Option<f64> {
        let id = party.id();
        self.payslips
            .iter()
            .find(|slip| slip.party == id)
            .map(|slip| slip.amount)
    }
}

/// Hiring and paying staff.
pub struct StaffService;

impl StaffService {
    pub fn hire_instructor(
        gym: &mut Gym,
        secretary: &Secretary,
        person: Person,
        hourly_wage: f64,
        certified: impl IntoIterator<Item = SessionType>,
    ) -> GymResult<Instructor> {
        gym.ensure_active(secretary)?;

        let instructor = Instructor::new(person, hourly_wage, certified);
        gym.add_instructor(instructor.clone());
        gym.record_action(format!(
            "Hired new instructor: {} with salary per hour: {}",
            instructor.name(),
            whole_units(hourly_wage)
        ));
        info!(instructor = %instructor.id(), hourly_wage, "instructor hired");
        Ok(instructor)
    }

    /// Pays every instructor one hour per session they teach, then the acting
    /// secretary's fixed salary. All money comes out of the gym's balance.
    pub fn pay_salaries(gym: &mut Gym, secretary: &Secretary) -> GymResult<Payroll> {
        gym.ensure_active(secretary)?;

        let mut transfers: Vec<(Person, f64)> = gym
            .instructors()
            .iter()
            .map(|instructor| {
                let hours = gym.sessions_taught_by(instructor);
                (
                    instructor.person().clone(),
                    hours as f64 * instructor.hourly_wage(),
                )
            })
            .collect();
        transfers.push((secretary.person().clone(), secretary.salary()));

        // Every withdrawal from the gym is matched by a deposit to the payee.
        let mut payroll = Payroll::default();
        for (payee, amount) in transfers {
            gym.parties_mut().open(&payee).balance.deposit(amount);
            gym.ledger_mut().withdraw(amount);
            payroll.payslips.push(Payslip {
                party: payee.id,
                amount,
            });
        }

        gym.record_action("Salaries have been paid to all employees");
        info!(
            payslips = payroll.payslips.len(),
            total = payroll.total(),
            "payroll completed"
        );
        Ok(payroll)
    }
}
