//! Domain services
//!
//! - [`notifier`] — the notification side-effect every mutating operation ends with
//! - [`time_clock`] — clock-in/clock-out lifecycle and duration computation

pub mod notifier;
pub mod time_clock;

pub use time_clock::{ClockInOutcome, ClockOutOutcome, TimeClockService};
