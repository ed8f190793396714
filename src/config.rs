use anyhow::{Context, Result, bail};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

const BIRTHDATE_VAR: &str = "BIRTHDATE";
const REFERENCE_VAR: &str = "REFERENCE_DATE";
const OUTPUT_VAR: &str = "AGE_OUTPUT";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Output {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub birth: NaiveDateTime,
    /// `None` means "now".
    pub reference: Option<NaiveDateTime>,
    pub output: Output,
}

impl Config {
    /// Read configuration from BIRTHDATE, REFERENCE_DATE and AGE_OUTPUT.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let birth = lookup(BIRTHDATE_VAR)
            .with_context(|| format!("{BIRTHDATE_VAR} environment variable not set"))?;
        let birth = parse_instant(&birth).with_context(|| format!("Invalid {BIRTHDATE_VAR}"))?;

        let reference = lookup(REFERENCE_VAR)
            .filter(|s| !s.trim().is_empty())
            .map(|s| parse_instant(&s).with_context(|| format!("Invalid {REFERENCE_VAR}")))
            .transpose()?;

        let output = match lookup(OUTPUT_VAR).as_deref().map(str::trim) {
            None | Some("" | "text") => Output::Text,
            Some("json") => Output::Json,
            Some(other) => {
                bail!("Invalid {OUTPUT_VAR}: expected \"text\" or \"json\", got {other:?}")
            }
        };

        Ok(Self {
            birth,
            reference,
            output,
        })
    }
}

/// Accepts `YYYY-MM-DD` (midnight) or `YYYY-MM-DDTHH:MM:SS[.fraction]`.
fn parse_instant(s: &str) -> Result<NaiveDateTime> {
    let s = s.trim();
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Ok(date.and_time(NaiveTime::MIN));
    }
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f")
        .with_context(|| format!("expected YYYY-MM-DD or YYYY-MM-DDTHH:MM:SS, got {s:?}"))
}
