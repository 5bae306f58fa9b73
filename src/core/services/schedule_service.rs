use tracing::info;

use crate::domain::common::{Identifiable, NamedEntity, LOG_DATE_TIME_FORMAT};
use crate::domain::gym::Gym;
use crate::domain::person::Instructor;
use crate::domain::secretary::Secretary;
use crate::domain::session::{ForumType, Session, SessionId, SessionType};
use crate::errors::{GymError, GymResult};

/// Session creation.
pub struct ScheduleService;

impl ScheduleService {
    /// Schedules a new session at `date_time` (`dd-MM-yyyy HH:mm`) taught by
    /// `instructor`, who must work here and hold the matching certification.
    pub fn schedule(
        gym: &mut Gym,
        secretary: &Secretary,
        session_type: SessionType,
        date_time: &str,
        forum: ForumType,
        instructor: &Instructor,
    ) -> GymResult<SessionId> {
        gym.ensure_active(secretary)?;

        if !gym.employs(instructor) {
            return Err(GymError::InstructorNotFound(instructor.id()));
        }
        if !instructor.is_certified_for(session_type) {
            return Err(GymError::InstructorNotQualified {
                instructor: instructor.id(),
                session_type,
            });
        }

        let session = Session::parse(
            gym.next_session_id(),
            session_type,
            date_time,
            forum,
            instructor.clone(),
        )?;
        let action = format!(
            "Created new session: {} on {} with instructor: {}",
            session_type,
            session.date_time().format(LOG_DATE_TIME_FORMAT),
            instructor.name()
        );
        let id = gym.add_session(session);
        gym.record_action(action);
        info!(session = %id, %session_type, "session scheduled");
        Ok(id)
    }
}
