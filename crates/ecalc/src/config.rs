//! Application configuration from CLI flags and environment.

use clap::Parser;

/// ecalc — compute Euler's number e to a requested number of correct
/// decimal digits, using a fixed set of message-passing workers.
#[derive(Parser, Debug)]
#[command(name = "ecalc", version, about)]
pub struct AppConfig {
    /// Number of correct decimal digits after the point.
    pub digits: u32,

    /// Number of cooperating workers (0 = one per available CPU).
    #[arg(short, long, default_value = "0", env = "ECALC_WORKERS")]
    pub workers: usize,

    /// Quiet mode (only output the expansion).
    #[arg(short, long)]
    pub quiet: bool,

    /// Verbose output.
    #[arg(short, long)]
    pub verbose: bool,

    /// Output file path.
    #[arg(short, long)]
    pub output: Option<String>,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Worker count with `0` resolved to the available parallelism.
    #[must_use]
    pub fn resolved_workers(&self) -> usize {
        if self.workers > 0 {
            return self.workers;
        }
        std::thread::available_parallelism().map_or(1, std::num::NonZeroUsize::get)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_from(args: &[&str]) -> AppConfig {
        <AppConfig as Parser>::parse_from(args)
    }

    #[test]
    fn digits_is_required_and_positional() {
        let config = parse_from(&["ecalc", "100"]);
        assert_eq!(config.digits, 100);
        assert!(!config.quiet);
    }

    #[test]
    fn missing_digits_is_an_error() {
        assert!(<AppConfig as Parser>::try_parse_from(["ecalc"]).is_err());
    }

    #[test]
    fn non_numeric_digits_is_an_error() {
        assert!(<AppConfig as Parser>::try_parse_from(["ecalc", "many"]).is_err());
    }

    #[test]
    fn workers_flag() {
        let config = parse_from(&["ecalc", "10", "--workers", "4"]);
        assert_eq!(config.workers, 4);
        assert_eq!(config.resolved_workers(), 4);
    }

    #[test]
    fn auto_workers_is_at_least_one() {
        let config = parse_from(&["ecalc", "10"]);
        assert_eq!(config.workers, 0);
        assert!(config.resolved_workers() >= 1);
    }
}
