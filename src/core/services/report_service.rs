use crate::domain::gym::{Gym, GymReport};
use crate::domain::secretary::Secretary;
use crate::errors::GymResult;

/// Secretary-facing read access to the gym's records.
pub struct ReportService;

impl ReportService {
    /// The action log, oldest entry first.
    pub fn action_log<'g>(gym: &'g Gym, secretary: &Secretary) -> GymResult<&'g [String]> {
        gym.ensure_active(secretary)?;
        Ok(gym.action_log())
    }

    pub fn summary(gym: &Gym, secretary: &Secretary) -> GymResult<GymReport> {
        gym.ensure_active(secretary)?;
        Ok(gym.report())
    }
}
