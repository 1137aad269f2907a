mod advice;
mod summary;
pub mod views;

pub use summary::SuspensionReport;

pub(crate) use advice::{advisories, headline};
