//! Injectable source of "today".

use chrono::{Local, NaiveDate};
use shaku::{Component, Interface};

/// Source of the current calendar date.
pub trait Clock: Interface + Send + Sync {
    /// Returns today's date in the server's local time zone.
    fn today(&self) -> NaiveDate;
}

/// Clock backed by the system time.
#[derive(Component, Debug, Default)]
#[shaku(interface = Clock)]
pub struct SystemClock {}

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Clock pinned to a single date.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
