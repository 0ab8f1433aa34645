//! Wall-clock implementation of the `Clock` port.

use chrono::{Local, NaiveDate};

use inkpot_core::ports::Clock;

/// Reads the server's local date.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}
