use chrono::{Local, NaiveDate, NaiveDateTime};

/// Source of "now" for age and scheduling checks.
///
/// Production uses [`SystemClock`]; tests and reproducible runs use
/// [`FixedClock`].
pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveDateTime;

    fn today(&self) -> NaiveDate {
        self.now().date()
    }
}

/// Wall clock in the local time zone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Clock pinned to a single instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    time: NaiveDateTime,
}

impl FixedClock {
    pub const fn new(time: NaiveDateTime) -> Self {
        Self { time }
    }

    /// Midnight at the start of `date`.
    pub fn at_midnight(date: NaiveDate) -> Self {
        Self::new(date.and_time(chrono::NaiveTime::MIN))
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.time
    }
}
