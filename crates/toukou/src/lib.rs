//! Return-to-school date calculator for influenza.
//!
//! Japanese school law suspends attendance after an influenza diagnosis until
//! two conditions are both satisfied: five days have passed since symptom
//! onset, and two days (three for preschoolers) have passed since the fever
//! resolved. This crate computes the earliest permitted return date from an
//! onset date, an optional fever-resolution date, and the student category,
//! and derives a day-by-day timeline from the same rule so the two views can
//! never disagree.
//!
//! # Modules
//!
//! - [`suspension`]: the eligibility rules, calendar helpers, timeline
//!   generator, and presentation-ready report views
//! - [`config`]: environment-driven application configuration
//! - [`telemetry`]: tracing subscriber setup
//! - [`error`]: top-level application error type

pub mod config;
pub mod error;
pub mod suspension;
pub mod telemetry;
