//! Calendar-aware age in years, months and days, with human-readable
//! formatting and ordering helpers.
//!
//! ```
//! use age_calc::{age_between, Age};
//! use chrono::NaiveDate;
//!
//! let birth = NaiveDate::from_ymd_opt(1989, 1, 1).unwrap();
//! let today = NaiveDate::from_ymd_opt(2022, 8, 25).unwrap();
//! let age = age_between(birth, today);
//!
//! assert_eq!(age, Age::new(33, 7, 24));
//! assert_eq!(age.to_string(), "33 years");
//! assert!(age.at_least(18, 0, 0));
//! ```

mod age;
mod calendar;
mod clock;
mod compare;
mod error;
mod format;

pub use age::{Age, age_between, age_now, current_age, try_age_between};
pub use calendar::is_leap_year;
pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{AgeError, Result};
