//! Clock port
//!
//! Domain operations compare requested dates against "now" and against the
//! start of "today". Both are read through [`Clock`] so the book can be driven
//! by the wall clock in production and by a pinned instant in tests.

use chrono::{DateTime, Utc};

use crate::temporal::Timezone;

/// Source of the current instant
pub trait Clock: Send + Sync {
    /// Returns the current instant
    fn now(&self) -> DateTime<Utc>;

    /// Timezone in which calendar days are reckoned
    fn timezone(&self) -> Timezone {
        Timezone::default()
    }

    /// Returns midnight of the current local day, as UTC
    ///
    /// This is the floor for "not in the past" checks: any instant later
    /// today is still acceptable.
    fn today_start(&self) -> DateTime<Utc> {
        let tz = self.timezone();
        tz.start_of_day(tz.local_date(self.now()))
    }
}

/// Wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock {
    timezone: Timezone,
}

impl SystemClock {
    pub fn new(timezone: Timezone) -> Self {
        Self { timezone }
    }
}

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn timezone(&self) -> Timezone {
        self.timezone
    }
}

/// Clock pinned to a single instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    instant: DateTime<Utc>,
    timezone: Timezone,
}

impl FixedClock {
    pub fn new(instant: DateTime<Utc>) -> Self {
        Self {
            instant,
            timezone: Timezone::default(),
        }
    }

    pub fn with_timezone(mut self, timezone: Timezone) -> Self {
        self.timezone = timezone;
        self
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.instant
    }

    fn timezone(&self) -> Timezone {
        self.timezone
    }
}

impl<C: Clock + ?Sized> Clock for Box<C> {
    fn now(&self) -> DateTime<Utc> {
        (**self).now()
    }

    fn timezone(&self) -> Timezone {
        (**self).timezone()
    }
}
