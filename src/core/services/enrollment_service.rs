//! The validated client-into-session transaction.
//!
//! Checks run in two tiers. Referential problems (unknown client, client
//! already on the roster) are returned as errors before anything else is
//! looked at. Business rules (timing, forum, capacity, funds) are collected
//! together; each failure becomes its own action log entry and the call
//! returns `Ok(())` without touching any state.

use std::fmt;

use tracing::{info, warn};

use crate::domain::common::{
    whole_units, Gender, Identifiable, NamedEntity, LOG_DATE_TIME_FORMAT,
};
use crate::domain::gym::Gym;
use crate::domain::person::Client;
use crate::domain::secretary::Secretary;
use crate::domain::session::{ForumType, Session, SessionId};
use crate::errors::{DuplicateScope, GymError, GymResult};

/// A business rule that kept a client out of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnrollmentRejection {
    NotInFuture,
    AgeRequirement,
    GenderMismatch,
    NotEligible,
    NoAvailableSpots,
    InsufficientBalance,
}

impl fmt::Display for EnrollmentRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            EnrollmentRejection::NotInFuture => "Session is not in the future",
            EnrollmentRejection::AgeRequirement => {
                "Client doesn't meet the age requirements for this session (Seniors)"
            }
            EnrollmentRejection::GenderMismatch => {
                "Client's gender doesn't match the session's gender requirements"
            }
            EnrollmentRejection::NotEligible => "Client is not eligible for this session",
            EnrollmentRejection::NoAvailableSpots => "No available spots for session",
            EnrollmentRejection::InsufficientBalance => "Client doesn't have enough balance",
        };
        f.write_str(reason)
    }
}

pub struct EnrollmentService;

impl EnrollmentService {
    /// Enrolls `client` into the session behind `session_id`.
    ///
    /// On success the session price moves from the client's balance to the
    /// gym's. Business-rule rejections are only visible in the action log.
    pub fn enroll(
        gym: &mut Gym,
        secretary: &Secretary,
        client: &Client,
        session_id: SessionId,
    ) -> GymResult<()> {
        gym.ensure_active(secretary)?;

        if !gym.is_client_registered(client) {
            warn!(client = %client.id(), session = %session_id, "enrollment of unknown client");
            return Err(GymError::ClientNotRegistered(client.id()));
        }
        let session = gym.session(session_id)?;
        if session.is_enrolled(client) {
            return Err(GymError::DuplicateClient {
                client: client.id(),
                scope: DuplicateScope::Session(session_id),
            });
        }

        let rejections = Self::assess(gym, client, session);
        if !rejections.is_empty() {
            warn!(
                client = %client.id(),
                session = %session_id,
                reasons = rejections.len(),
                "enrollment rejected"
            );
            for rejection in rejections {
                gym.record_action(format!("Failed registration: {rejection}"));
            }
            return Ok(());
        }

        let session = gym.session_mut(session_id)?;
        session.enroll(client)?;
        let price = session.price();
        let action = format!(
            "Registered client: {} to session: {} on {} for price: {}",
            client.name(),
            session.session_type(),
            session.date_time().format(LOG_DATE_TIME_FORMAT),
            whole_units(price)
        );

        gym.parties_mut()
            .open(client.person())
            .balance
            .withdraw(price);
        gym.ledger_mut().deposit(price);
        gym.record_action(action);
        info!(client = %client.id(), session = %session_id, price, "client enrolled");
        Ok(())
    }

    /// Business rules `client` currently fails for `session`, in check order.
    pub fn assess(gym: &Gym, client: &Client, session: &Session) -> Vec<EnrollmentRejection> {
        let mut rejections = Vec::new();
        let today = gym.today();

        if !session.is_in_future(gym.now()) {
            rejections.push(EnrollmentRejection::NotInFuture);
        }
        if !session.is_client_eligible(client, today, gym.policy()) {
            rejections.push(Self::ineligibility_reason(gym, client, session));
        }
        if session.is_full() {
            rejections.push(EnrollmentRejection::NoAvailableSpots);
        }
        if gym.balance_of(client) < session.price() {
            rejections.push(EnrollmentRejection::InsufficientBalance);
        }
        rejections
    }

    fn ineligibility_reason(gym: &Gym, client: &Client, session: &Session) -> EnrollmentRejection {
        match session.forum() {
            ForumType::Seniors if client.age_on(gym.today()) < gym.policy().senior_age => {
                EnrollmentRejection::AgeRequirement
            }
            ForumType::Male if client.gender() != Gender::Male => {
                EnrollmentRejection::GenderMismatch
            }
            ForumType::Female if client.gender() != Gender::Female => {
                EnrollmentRejection::GenderMismatch
            }
            _ => EnrollmentRejection::NotEligible,
        }
    }
}
