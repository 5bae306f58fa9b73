use tracing::{debug, info};

use crate::domain::common::{parse_date, LOG_DATE_TIME_FORMAT};
use crate::domain::gym::Gym;
use crate::domain::secretary::Secretary;
use crate::domain::session::SessionId;
use crate::errors::GymResult;

/// Message fan-out to session rosters and to the whole client base.
///
/// Every call writes exactly one action log entry, however many sessions or
/// clients it reaches.
pub struct NotificationService;

impl NotificationService {
    pub fn notify_session(
        gym: &mut Gym,
        secretary: &Secretary,
        session_id: SessionId,
        message: &str,
    ) -> GymResult<usize> {
        gym.ensure_active(secretary)?;

        let delivered = gym.broadcast_to_session(session_id, message)?;
        let session = gym.session(session_id)?;
        let action = format!(
            "A message was sent to everyone registered for session {} on {} : {}",
            session.session_type(),
            session.date_time().format(LOG_DATE_TIME_FORMAT),
            message
        );
        gym.record_action(action);
        debug!(session = %session_id, delivered, "session notified");
        Ok(delivered)
    }

    /// Notifies everyone enrolled in any session held on `date`
    /// (`dd-MM-yyyy`).
    pub fn notify_by_date(
        gym: &mut Gym,
        secretary: &Secretary,
        date: &str,
        message: &str,
    ) -> GymResult<usize> {
        gym.ensure_active(secretary)?;

        let day = parse_date(date)?;
        let delivered = gym.broadcast_on_date(day, message);
        gym.record_action(format!(
            "A message was sent to everyone registered for a session on {date} : {message}"
        ));
        debug!(%day, delivered, "sessions on date notified");
        Ok(delivered)
    }

    pub fn notify_all_clients(
        gym: &mut Gym,
        secretary: &Secretary,
        message: &str,
    ) -> GymResult<usize> {
        gym.ensure_active(secretary)?;

        let delivered = gym.broadcast_to_clients(message);
        gym.record_action(format!("A message was sent to all gym clients: {message}"));
        info!(delivered, "announcement sent to all clients");
        Ok(delivered)
    }
}
