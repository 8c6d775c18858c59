//! Wall-clock abstraction used when generating default form values

use chrono::Utc;

/// Source of the current Unix time, enabling mocking in tests
#[cfg_attr(test, mockall::automock)]
pub trait Clock {
    /// Current time in whole seconds since the Unix epoch (floored)
    fn now_unix_seconds(&self) -> i64;
}

/// Clock backed by the system time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_unix_seconds(&self) -> i64 {
        Utc::now().timestamp()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_clock_matches_chrono() {
        let before = Utc::now().timestamp();
        let now = SystemClock.now_unix_seconds();
        let after = Utc::now().timestamp();
        assert!(before <= now && now <= after);
    }

    #[test]
    fn test_system_clock_is_non_decreasing() {
        let first = SystemClock.now_unix_seconds();
        let second = SystemClock.now_unix_seconds();
        assert!(second >= first);
    }

    #[test]
    fn test_mock_clock_returns_configured_time() {
        let mut clock = MockClock::new();
        clock.expect_now_unix_seconds().return_const(1_700_000_000i64);
        assert_eq!(clock.now_unix_seconds(), 1_700_000_000);
    }
}
