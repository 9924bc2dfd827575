//! Wall-clock access for the time and date rules.

use chrono::{DateTime, Local};

/// Source of the current local time.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Local>;

    /// Short local time, e.g. `3:07:42 PM`.
    fn time_string(&self) -> String {
        self.now().format("%-I:%M:%S %p").to_string()
    }

    /// Short local date, e.g. `10/19/2026`.
    fn date_string(&self) -> String {
        self.now().format("%-m/%-d/%Y").to_string()
    }
}

/// Reads the host clock in the host time zone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// Always reports the same instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Local>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Local> {
        self.0
    }
}
