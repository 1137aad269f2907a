//! Attendance-suspension rules for influenza.
//!
//! [`compute_return`] answers "when can this student go back to school" and
//! [`build_timeline`] expands the same rule into one status per calendar day.
//! [`report::SuspensionReport`] runs both from a single set of inputs and
//! exposes presentation-ready views of the result.

pub mod calendar;
mod calculation;
pub mod domain;
pub mod report;
mod timeline;

pub use calculation::{compute_return, ReturnCalculation};
pub use report::SuspensionReport;
pub use timeline::{build_timeline, DayStatus};
