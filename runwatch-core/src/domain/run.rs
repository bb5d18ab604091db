//! Run ledger
//!
//! Tracks the highest run number any poller has reported. A poller whose run
//! is older than that is told to shut down.

use crate::dto::status::RunStatus;

/// Server-side state behind the status endpoint
#[derive(Debug, Clone, Default)]
pub struct RunLedger {
    /// Highest run number seen so far
    latest_run: i64,

    /// Number of status calls answered
    total_calls: u64,
}

impl RunLedger {
    /// Creates a ledger that considers `initial_run` the latest run
    pub fn new(initial_run: i64) -> Self {
        Self {
            latest_run: initial_run,
            total_calls: 0,
        }
    }

    pub fn latest_run(&self) -> i64 {
        self.latest_run
    }

    pub fn total_calls(&self) -> u64 {
        self.total_calls
    }

    /// Records a status call from a poller working on `run`
    ///
    /// An older run is told to shut down, a newer run becomes the latest.
    /// Calls without a usable run number are counted but change nothing.
    pub fn observe(&mut self, run: Option<i64>) -> RunStatus {
        self.total_calls += 1;

        let shutdown = match run {
            Some(run) if self.latest_run > run => true,
            Some(run) => {
                if self.latest_run < run {
                    self.latest_run = run;
                }
                false
            }
            None => false,
        };

        RunStatus {
            shutdown,
            total_calls: Some(self.total_calls),
        }
    }
}

/// Parses a run number as sent in the `run` query parameter
///
/// Reads an optional sign and the leading decimal digits, ignoring leading
/// whitespace and anything after the digits, so `"42abc"` and `"42.9"` are
/// both run 42. Returns `None` when there are no digits or the value does
/// not fit in an `i64`.
pub fn parse_run_number(raw: &str) -> Option<i64> {
    let raw = raw.trim_start();
    let sign_len = usize::from(raw.starts_with(['+', '-']));
    let digits_len = raw[sign_len..]
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();

    if digits_len == 0 {
        return None;
    }

    raw[..sign_len + digits_len].parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_newer_run_becomes_latest() {
        let mut ledger = RunLedger::default();

        let status = ledger.observe(Some(42));
        assert!(!status.shutdown);
        assert_eq!(ledger.latest_run(), 42);
    }

    #[test]
    fn test_older_run_is_shut_down() {
        let mut ledger = RunLedger::new(10);

        assert!(ledger.observe(Some(9)).shutdown);
        assert!(!ledger.observe(Some(10)).shutdown);
        assert_eq!(ledger.latest_run(), 10);
    }

    #[test]
    fn test_superseded_run_sees_shutdown() {
        let mut ledger = RunLedger::default();

        assert!(!ledger.observe(Some(42)).shutdown);
        assert!(!ledger.observe(Some(43)).shutdown);
        assert!(ledger.observe(Some(42)).shutdown);
        assert!(!ledger.observe(Some(43)).shutdown);
    }

    #[test]
    fn test_every_call_is_counted() {
        let mut ledger = RunLedger::default();

        ledger.observe(Some(1));
        ledger.observe(None);
        let status = ledger.observe(Some(0));

        assert_eq!(status.total_calls, Some(3));
        assert_eq!(ledger.total_calls(), 3);
    }

    #[test]
    fn test_missing_run_changes_nothing() {
        let mut ledger = RunLedger::new(5);

        assert!(!ledger.observe(None).shutdown);
        assert_eq!(ledger.latest_run(), 5);
    }

    #[test]
    fn test_parse_run_number() {
        assert_eq!(parse_run_number("42"), Some(42));
        assert_eq!(parse_run_number(" 7 "), Some(7));
        assert_eq!(parse_run_number("-3"), Some(-3));
        assert_eq!(parse_run_number("+8"), Some(8));
        assert_eq!(parse_run_number("abc"), None);
        assert_eq!(parse_run_number(""), None);
        assert_eq!(parse_run_number("-"), None);
    }

    #[test]
    fn test_parse_run_number_reads_leading_digits() {
        assert_eq!(parse_run_number("42abc"), Some(42));
        assert_eq!(parse_run_number("3.9"), Some(3));
        assert_eq!(parse_run_number("\t 7 runs"), Some(7));
        assert_eq!(parse_run_number("-12x"), Some(-12));
        assert_eq!(parse_run_number("x42"), None);
    }

    #[test]
    fn test_trailing_garbage_run_still_shuts_down() {
        let mut ledger = RunLedger::default();

        ledger.observe(parse_run_number("43"));
        assert!(ledger.observe(parse_run_number("42abc")).shutdown);
    }
}
