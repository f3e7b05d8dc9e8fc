//! Integrity self-check.
//!
//! Runs every scenario in the table and reports each as PASS or FAIL.
//! Exits with status 1 if any scenario misbehaves.
//!
//! Set `RUST_LOG=integrity=debug` to see each raised error as it happens.

mod scenarios;

use std::process::ExitCode;
use std::sync::Once;

use scenarios::{Mismatch, SCENARIOS};

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Only installs a subscriber when `RUST_LOG` is set.
fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}

fn main() -> ExitCode {
    init_tracing();

    let mut failures = 0usize;
    for scenario in SCENARIOS {
        match scenario.evaluate() {
            Ok(()) => println!("PASS  {}", scenario.name),
            Err(mismatch) => {
                failures += 1;
                println!("FAIL  {}", scenario.name);
                match mismatch {
                    Mismatch::UnexpectedFailure(message) => {
                        println!("      unexpected failure: '{message}'");
                    }
                    Mismatch::UnexpectedPass => println!("      expected a failure, none raised"),
                    Mismatch::WrongMessage { expected, got } => {
                        println!("      expected '{expected}'");
                        println!("      got      '{got}'");
                    }
                }
            }
        }
    }

    println!();
    println!(
        "{} scenarios, {} passed, {failures} failed",
        SCENARIOS.len(),
        SCENARIOS.len() - failures
    );
    tracing::info!(total = SCENARIOS.len(), failures, "self-check finished");

    if failures == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
