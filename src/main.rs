mod config;

use age_calc::{Age, AgeError, Clock, SystemClock, try_age_between};
use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use config::{Config, Output};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    init_logger();

    let config = Config::from_env()?;
    let reference = config.reference.unwrap_or_else(|| SystemClock.now());
    info!(birth = %config.birth, reference = %reference, "calculating age");

    let age = calculate(config.birth, reference)?;

    match config.output {
        Output::Text => println!("{age}"),
        Output::Json => {
            let out = serde_json::json!({
                "years": age.years(),
                "months": age.months(),
                "days": age.days(),
                "formatted": age.to_string(),
                "total_days_approx": age.total_days_approx(),
            });
            let rendered =
                serde_json::to_string_pretty(&out).context("Failed to serialize age as JSON")?;
            println!("{rendered}");
        }
    }

    Ok(())
}

/// Birth after reference is reported as the zero age.
fn calculate(birth: NaiveDateTime, reference: NaiveDateTime) -> Result<Age> {
    match try_age_between(birth, reference) {
        Ok(age) => Ok(age),
        Err(AgeError::BirthAfterReference) => {
            info!("birth is after reference, reporting zero age");
            Ok(Age::ZERO)
        }
        Err(err) => Err(err).context("Failed to calculate age"),
    }
}

/// Logs go to stderr so stdout carries only the age.
fn init_logger() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("age_calc=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}
