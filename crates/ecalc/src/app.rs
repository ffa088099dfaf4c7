//! Application entry point and presentation.

use std::time::Instant;

use anyhow::Result;
use tracing::debug;

use ecalc_core::compute_e;

use crate::config::AppConfig;
use crate::output::{format_duration, write_to_file};

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    let workers = config.resolved_workers();
    debug!(digits = config.digits, workers, "starting run");

    let start = Instant::now();
    let expansion = compute_e(config.digits, workers)?;
    let duration = start.elapsed();

    if config.quiet {
        println!("{expansion}");
    } else {
        println!("Digits: {}", config.digits);
        println!("Workers: {workers}");
        println!("Duration: {}", format_duration(duration));
        if config.verbose {
            println!(
                "Precision: {} bits",
                ecalc_core::working_precision(config.digits)
            );
        }
        println!("e = {expansion}");
    }

    if let Some(ref path) = config.output {
        write_to_file(path, &expansion)?;
    }

    Ok(())
}
