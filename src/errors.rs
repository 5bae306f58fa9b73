use std::fmt;

use thiserror::Error;

use crate::domain::common::PartyId;
use crate::domain::session::{SessionId, SessionType};

pub type GymResult<T> = Result<T, GymError>;

/// Error type that captures structural and fatal gym failures.
///
/// Business-rule rejections during enrollment are not errors; see
/// [`crate::core::services::EnrollmentRejection`].
#[derive(Debug, Error)]
pub enum GymError {
    #[error("Former secretaries are not permitted to perform actions")]
    InactiveSecretary,
    #[error("Client must be at least {minimum} years old to register (age {age})")]
    InvalidAge { age: u32, minimum: u32 },
    #[error("Client {client} is already registered {scope}")]
    DuplicateClient {
        client: PartyId,
        scope: DuplicateScope,
    },
    #[error("Client {0} is not registered with the gym")]
    ClientNotRegistered(PartyId),
    #[error("Instructor {instructor} is not qualified to conduct {session_type} sessions")]
    InstructorNotQualified {
        instructor: PartyId,
        session_type: SessionType,
    },
    #[error("Instructor {0} does not work at this gym")]
    InstructorNotFound(PartyId),
    #[error("Session not found: {0}")]
    SessionNotFound(SessionId),
    #[error("Session {0} has no available spots")]
    SessionFull(SessionId),
    #[error("Invalid date `{input}`, expected format {expected}")]
    InvalidDate {
        input: String,
        expected: &'static str,
        #[source]
        source: chrono::ParseError,
    },
}

/// Where a duplicate registration was detected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DuplicateScope {
    Gym,
    Session(SessionId),
}

impl fmt::Display for DuplicateScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DuplicateScope::Gym => write!(f, "with the gym"),
            DuplicateScope::Session(id) => write!(f, "for session {id}"),
        }
    }
}

/// Failures while reading or writing the configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}
