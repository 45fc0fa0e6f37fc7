//! `mealbook-guard` -- validate one booking payload against the booking windows.
//!
//! Reads a JSON payload from the file named by the first argument, or from
//! stdin when no argument is given, and prints the verdict as JSON.
//!
//! # Exit codes
//!
//! | Code | Meaning                                  |
//! |------|------------------------------------------|
//! | `0`  | booking allowed                          |
//! | `1`  | malformed payload or configuration error |
//! | `2`  | booking denied                           |
//!
//! Cutoffs and the UTC offset are configured through the environment; see
//! [`GuardConfig::from_env`].

use std::io::Read;
use std::process::ExitCode;

use mealbook_guard::{GuardConfig, GuardResult, SubmissionGuard};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const EXIT_DENIED: u8 = 2;

fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mealbook_guard=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = match GuardConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "Invalid configuration");
            return ExitCode::FAILURE;
        }
    };
    tracing::debug!(utc_offset = %config.utc_offset, "Loaded guard configuration");

    let body = match read_payload(std::env::args().nth(1)) {
        Ok(body) => body,
        Err(e) => {
            tracing::error!(error = %e, "Failed to read payload");
            return ExitCode::FAILURE;
        }
    };

    let guard = SubmissionGuard::from_config(&config);
    let verdict = match guard.evaluate_json(&body) {
        Ok(verdict) => verdict,
        Err(e) => {
            tracing::error!(error = %e, "Rejected payload");
            return ExitCode::FAILURE;
        }
    };

    match serde_json::to_string(&verdict) {
        Ok(json) => println!("{json}"),
        Err(e) => {
            tracing::error!(error = %e, "Failed to serialize verdict");
            return ExitCode::FAILURE;
        }
    }

    if verdict.allowed {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(EXIT_DENIED)
    }
}

fn read_payload(path: Option<String>) -> GuardResult<String> {
    match path {
        Some(path) => Ok(std::fs::read_to_string(path)?),
        None => {
            let mut body = String::new();
            std::io::stdin().read_to_string(&mut body)?;
            Ok(body)
        }
    }
}
