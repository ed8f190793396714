//! Ordering and threshold checks on [`Age`].
//!
//! Ages are ordered through a single weighted key,
//! `years * 10000 + months * 100 + days`, which matches field-by-field
//! ordering as long as months and days stay below 100.

use std::cmp::Ordering;

use crate::age::Age;

impl Age {
    /// Weighted key used by every comparison in this module.
    pub fn ordering_key(&self) -> i64 {
        i64::from(self.years()) * 10_000 + i64::from(self.months()) * 100 + i64::from(self.days())
    }

    /// `Greater` when `self` is older than `other`.
    pub fn compare(&self, other: &Age) -> Ordering {
        self.ordering_key().cmp(&other.ordering_key())
    }

    /// Field-by-field equality, independent of the weighted key.
    pub fn equals(&self, other: &Age) -> bool {
        self.years() == other.years()
            && self.months() == other.months()
            && self.days() == other.days()
    }

    pub fn older_than(&self, other: &Age) -> bool {
        self.compare(other) == Ordering::Greater
    }

    pub fn younger_than(&self, other: &Age) -> bool {
        self.compare(other) == Ordering::Less
    }

    /// True when `self` is at least `years`, `months` and `days` old.
    pub fn at_least(&self, years: i32, months: i32, days: i32) -> bool {
        self.compare(&Age::new(years, months, days)) != Ordering::Less
    }

    /// True when `self` is at most `years`, `months` and `days` old.
    pub fn at_most(&self, years: i32, months: i32, days: i32) -> bool {
        self.compare(&Age::new(years, months, days)) != Ordering::Greater
    }

    /// Inclusive range check.
    ///
    /// `younger` must be the lower bound. Bounds are not reordered, so
    /// swapped bounds make this false for every age between them.
    pub fn between(&self, younger: &Age, older: &Age) -> bool {
        self.compare(younger) != Ordering::Less && self.compare(older) != Ordering::Greater
    }

    /// Approximate number of days lived, counting 365 days per year and 30
    /// per month.
    ///
    /// Leap days and real month lengths are ignored. Good for coarse relative
    /// comparisons only, never as an exact day count.
    pub fn total_days_approx(&self) -> i64 {
        i64::from(self.years()) * 365 + i64::from(self.months()) * 30 + i64::from(self.days())
    }
}
