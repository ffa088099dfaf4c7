//! CLI output formatting.

use std::io::{self, Write};
use std::time::Duration;

/// Format a duration for display.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn format_duration(d: Duration) -> String {
    let secs = d.as_secs_f64();
    if secs < 0.001 {
        format!("{:.2}µs", secs * 1_000_000.0)
    } else if secs < 1.0 {
        format!("{:.2}ms", secs * 1000.0)
    } else if secs < 60.0 {
        format!("{secs:.3}s")
    } else {
        let mins = (secs / 60.0).floor() as u64;
        let remaining = secs - (mins as f64 * 60.0);
        format!("{mins}m{remaining:.1}s")
    }
}

/// Write the rendered expansion to a file.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be created or written.
pub fn write_to_file(path: &str, expansion: &str) -> io::Result<()> {
    let mut file = std::fs::File::create(path)?;
    write!(file, "{expansion}")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_duration_micro() {
        let s = format_duration(Duration::from_nanos(500));
        assert!(s.contains("µs"));
    }

    #[test]
    fn format_duration_milli() {
        let s = format_duration(Duration::from_millis(42));
        assert!(s.contains("ms"));
    }

    #[test]
    fn format_duration_seconds() {
        let s = format_duration(Duration::from_secs_f64(3.14));
        assert!(s.contains("s"));
    }

    #[test]
    fn format_duration_minutes() {
        let s = format_duration(Duration::from_secs(90));
        assert!(s.contains("m"));
    }

    #[test]
    fn write_and_read_back() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("out.txt");
        write_to_file(path.to_str().unwrap(), "2.72").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "2.72");
    }
}
