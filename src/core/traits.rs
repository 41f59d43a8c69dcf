//! Core traits for the ledger engine
//!
//! The only seam the ledger needs is time: transactions are stamped with the
//! current moment, and tests and replays need that moment to be predictable.

use chrono::{Local, NaiveDateTime};

/// Source of the timestamp stamped on new transactions
pub trait Clock {
    /// Current local date and time
    fn now(&self) -> NaiveDateTime;
}

/// Wall clock in the local time zone
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Clock frozen at a single moment
///
/// Used for deterministic replays (`--now`) and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_fixed_clock_never_advances() {
        let at = NaiveDate::from_ymd_opt(2024, 11, 28)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap();
        let clock = FixedClock(at);
        assert_eq!(clock.now(), at);
        assert_eq!(clock.now(), at);
    }
}
