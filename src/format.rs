//! Human-readable rendering of an [`Age`].
//!
//! Only the two most significant units are ever shown, and the second one
//! only while the first is 1:
//!     "1 year, 6 months", "2 years", "1 month, 15 days", "3 months"
//!
//! A zero age renders as "1 day" rather than "0 days" or "newborn", so every
//! output keeps the same `<count> <unit>` shape.

use std::fmt;

use crate::age::Age;

impl fmt::Display for Age {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (years, months, days) = (self.years(), self.months(), self.days());

        if years > 0 {
            write!(f, "{years} year{}", plural(years))?;
            if months > 0 && years < 2 {
                write!(f, ", {months} month{}", plural(months))?;
            }
            return Ok(());
        }

        // Toddlers
        if months > 0 {
            write!(f, "{months} month{}", plural(months))?;
            if days > 0 && months < 2 {
                write!(f, ", {days} day{}", plural(days))?;
            }
            return Ok(());
        }

        if days == 0 {
            return f.write_str("1 day");
        }

        write!(f, "{days} day{}", plural(days))
    }
}

fn plural(n: i32) -> &'static str {
    if n == 1 { "" } else { "s" }
}
