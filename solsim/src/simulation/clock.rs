//! Simulated calendar date.
//!
//! The clock moves one calendar day per integrator step, independent of how
//! fast frames are rendered.

use chrono::{Days, NaiveDate};

use super::error::SimError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulationClock {
    start: NaiveDate,
    current: NaiveDate,
    elapsed_days: u64,
}

impl SimulationClock {
    pub fn new(start: NaiveDate) -> Self {
        Self {
            start,
            current: start,
            elapsed_days: 0,
        }
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn current(&self) -> NaiveDate {
        self.current
    }

    pub fn elapsed_days(&self) -> u64 {
        self.elapsed_days
    }

    /// Move the date forward by exactly one day
    pub fn advance(&mut self) -> Result<(), SimError> {
        self.current = self
            .current
            .checked_add_days(Days::new(1))
            .ok_or(SimError::CalendarOverflow { date: self.current })?;
        self.elapsed_days += 1;
        Ok(())
    }

    /// Overlay text, `YYYY-MM-DD`
    pub fn label(&self) -> String {
        self.current.format("%Y-%m-%d").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn advance_crosses_month_and_leap_day() {
        let mut clock = SimulationClock::new(date(2024, 2, 28));
        clock.advance().unwrap();
        assert_eq!(clock.current(), date(2024, 2, 29));
        clock.advance().unwrap();
        assert_eq!(clock.current(), date(2024, 3, 1));
        assert_eq!(clock.elapsed_days(), 2);
        assert_eq!(clock.start(), date(2024, 2, 28));
    }

    #[test]
    fn label_is_iso_date() {
        let clock = SimulationClock::new(date(2022, 1, 1));
        assert_eq!(clock.label(), "2022-01-01");
    }

    #[test]
    fn advance_past_last_date_fails() {
        let mut clock = SimulationClock::new(NaiveDate::MAX);
        assert!(matches!(clock.advance(), Err(SimError::CalendarOverflow { .. })));
        assert_eq!(clock.current(), NaiveDate::MAX);
        assert_eq!(clock.elapsed_days(), 0);
    }
}
