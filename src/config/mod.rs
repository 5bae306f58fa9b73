use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use crate::core::clock::{Clock, FixedClock, SystemClock};
use crate::core::utils::{app_data_dir, config_file_in};
use crate::domain::gym::{EnrollmentPolicy, Gym};
use crate::errors::ConfigError;

const TMP_SUFFIX: &str = "tmp";

/// Operator settings for building a gym.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GymConfig {
    pub gym_name: String,
    #[serde(default)]
    pub clock: ClockSetting,
    #[serde(default)]
    pub policy: EnrollmentPolicy,
    #[serde(default = "GymConfig::default_secretary_salary")]
    pub secretary_salary: f64,
}

impl Default for GymConfig {
    fn default() -> Self {
        Self {
            gym_name: "Gym".into(),
            clock: ClockSetting::default(),
            policy: EnrollmentPolicy::default(),
            secretary_salary: Self::default_secretary_salary(),
        }
    }
}

impl GymConfig {
    pub fn default_secretary_salary() -> f64 {
        3000.0
    }

    /// Creates an empty gym wired to the configured clock and policy.
    pub fn build_gym(&self) -> Gym {
        Gym::new(self.gym_name.clone(), self.clock.build()).with_policy(self.policy)
    }
}

/// Which notion of "now" the gym runs on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum ClockSetting {
    System,
    Fixed { at: NaiveDateTime },
}

impl Default for ClockSetting {
    /// 2025-01-01 00:00, the reference instant the schedules were written for.
    fn default() -> Self {
        let at = NaiveDate::from_ymd_opt(2025, 1, 1)
            .map(|date| date.and_time(chrono::NaiveTime::MIN))
            .unwrap_or_default();
        ClockSetting::Fixed { at }
    }
}

impl ClockSetting {
    pub fn build(&self) -> Box<dyn Clock> {
        match self {
            ClockSetting::System => Box::new(SystemClock),
            ClockSetting::Fixed { at } => Box::new(FixedClock::new(*at)),
        }
    }
}

pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    /// Uses `$GYM_CORE_HOME` or `~/.gym_core`.
    pub fn new() -> Self {
        Self::with_base_dir(app_data_dir())
    }

    pub fn with_base_dir(base: PathBuf) -> Self {
        Self {
            path: config_file_in(&base),
        }
    }

    /// Reads the config file, falling back to defaults when it does not exist.
    pub fn load(&self) -> Result<GymConfig, ConfigError> {
        if self.path.exists() {
            let data = fs::read_to_string(&self.path)?;
            Ok(serde_json::from_str(&data)?)
        } else {
            Ok(GymConfig::default())
        }
    }

    pub fn save(&self, config: &GymConfig) -> Result<(), ConfigError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(config)?;
        let tmp = tmp_path(&self.path);
        write_atomic(&tmp, &json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> Result<(), ConfigError> {
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}
