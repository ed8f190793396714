//! Source of the current instant for [`age_now`](crate::age_now).

use chrono::{Local, NaiveDateTime};

pub trait Clock {
    /// Current civil date and time.
    fn now(&self) -> NaiveDateTime;
}

/// Local wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Clock stuck at a single instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(NaiveDateTime);

impl FixedClock {
    pub fn new(instant: NaiveDateTime) -> Self {
        Self(instant)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}
