//! age.rs
//!
//! Calendar-aware age in years, months and days.
//!
//! Chrono does not provide a built-in year/month/day diff (unlike Python’s
//! relativedelta), so the borrowing rules are implemented manually:
//!   • day underflow borrows the birth month's length, except when the
//!     reference year is a leap year
//!   • month underflow borrows from years
//!   • a birthday in February of a leap year, measured against an earlier
//!     February day of another leap year, is corrected afterwards
//!
//! The borrow order is part of the contract. Changing it changes results for
//! February birthdays in leap years.

use chrono::{Datelike, NaiveDateTime};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::calendar::{days_in_month, is_leap_year};
use crate::clock::{Clock, SystemClock};
use crate::error::{AgeError, Result};

/// Age expressed as whole years, months and days.
///
/// Values produced by [`age_between`] keep `months` in `0..=11` and `days`
/// at most 30. When the reference year is a leap year and the birth day of
/// month is later than the reference day (outside February), the borrow is
/// skipped and `days` comes out negative; that result is kept as is.
///
/// The zero age means either "born today" or "birth after reference". Use
/// [`try_age_between`] when the two must be told apart.
///
/// Deserializing is unchecked, like [`Age::new`], so computed ages with
/// negative days round-trip. Months or days of 100 and above read this way
/// break ordering; re-check untrusted input with [`Age::try_new`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Age {
    years: i32,
    months: i32,
    days: i32,
}

impl Age {
    pub const ZERO: Age = Age::new(0, 0, 0);

    /// Builds an age without checking the components.
    ///
    /// Comparisons weigh months by 100 and days by 1, so months or days of
    /// 100 and above give wrong orderings. See [`Age::try_new`].
    pub const fn new(years: i32, months: i32, days: i32) -> Self {
        Self {
            years,
            months,
            days,
        }
    }

    /// Builds an age, rejecting negative components, months above 11 and
    /// days above 30.
    pub fn try_new(years: i32, months: i32, days: i32) -> Result<Self> {
        check_component("years", years, i32::MAX)?;
        check_component("months", months, 11)?;
        check_component("days", days, 30)?;
        Ok(Self::new(years, months, days))
    }

    pub fn years(&self) -> i32 {
        self.years
    }

    pub fn months(&self) -> i32 {
        self.months
    }

    pub fn days(&self) -> i32 {
        self.days
    }
}

fn check_component(field: &'static str, value: i32, max: i32) -> Result<()> {
    if (0..=max).contains(&value) {
        Ok(())
    } else {
        Err(AgeError::OutOfRange { field, value })
    }
}

/// Age at `reference` of someone born at `birth`.
///
/// Returns [`Age::ZERO`] when `birth` is after `reference`, compared at the
/// full precision of `D`. Time of day never contributes to the result, so
/// two instants on the same calendar day also give [`Age::ZERO`], which
/// formats as "1 day".
pub fn age_between<D>(birth: D, reference: D) -> Age
where
    D: Datelike + PartialOrd,
{
    try_age_between(birth, reference).unwrap_or_default()
}

/// Like [`age_between`], but reports a birth after the reference as
/// [`AgeError::BirthAfterReference`] instead of the zero age.
pub fn try_age_between<D>(birth: D, reference: D) -> Result<Age>
where
    D: Datelike + PartialOrd,
{
    if birth > reference {
        debug!(
            birth_year = birth.year(),
            reference_year = reference.year(),
            "birth is after reference"
        );
        return Err(AgeError::BirthAfterReference);
    }

    let age = civil_difference(
        (birth.year(), birth.month(), birth.day()),
        (reference.year(), reference.month(), reference.day()),
    );
    trace!(
        years = age.years,
        months = age.months,
        days = age.days,
        "computed age"
    );
    Ok(age)
}

/// Age now, as reported by `clock`.
pub fn age_now<C>(birth: NaiveDateTime, clock: &C) -> Age
where
    C: Clock + ?Sized,
{
    age_between(birth, clock.now())
}

/// Age now, according to the local wall clock.
pub fn current_age(birth: NaiveDateTime) -> Age {
    age_now(birth, &SystemClock)
}

fn civil_difference(birth: (i32, u32, u32), reference: (i32, u32, u32)) -> Age {
    let (birth_year, birth_month, birth_day) = birth;
    let (mut ref_year, ref_month, ref_day) = reference;

    // Month lengths are those of the reference year.
    let ref_leap = is_leap_year(ref_year);
    let birth_month_len = days_in_month(ref_year, birth_month) as i32;

    let birth_month = birth_month as i32;
    let birth_day = birth_day as i32;
    let mut ref_month = ref_month as i32;
    let mut ref_day = ref_day as i32;

    // Day underflow: borrow the birth month's length. Skipped entirely when
    // the reference year is leap.
    if birth_day > ref_day && !ref_leap {
        ref_day += birth_month_len;
        ref_month -= 1;
    }

    // Month underflow
    if birth_month > ref_month {
        ref_year -= 1;
        ref_month += 12;
    }

    let mut years = ref_year - birth_year;
    let mut months = ref_month - birth_month;
    let mut days = ref_day - birth_day;

    // Born in February of a leap year, measured on an earlier day of February
    // in another leap year: the skipped borrow left a negative day count.
    if is_leap_year(birth_year)
        && ref_leap
        && ref_month == 2
        && birth_month == 2
        && birth_day > ref_day
    {
        years -= 1;
        months = 11;
        days = ref_day;
    }

    Age::new(years, months, days)
}
