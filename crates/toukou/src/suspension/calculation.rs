//! The eligibility engine: derives the binding return date.

use chrono::{Duration, NaiveDate};

use super::calendar::day_difference;
use super::domain::{ReturnReason, StudentCategory, ONSET_CLEARANCE_DAYS};

/// Outcome of the return-date rule for one set of inputs.
///
/// A plain value object: rebuilt from scratch whenever an input changes,
/// never mutated in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReturnCalculation {
    /// First day the student may attend again.
    pub can_return_date: NaiveDate,
    /// Which of the two rules produced `can_return_date`.
    pub reason: ReturnReason,
    /// Whole days from onset to the return date, at least 6.
    pub days_from_onset: i64,
    /// Whole days from fever resolution to the return date, 0 when no
    /// fever-resolution date was supplied.
    pub days_from_fever: i64,
    /// The onset rule is evaluated unconditionally.
    pub criterion_a_met: bool,
    /// True iff a fever-resolution date was supplied.
    pub criterion_b_met: bool,
}

/// Computes the earliest permitted return date.
///
/// Each rule names the last calendar day its restriction still applies:
/// `onset + 5` for the onset rule, `fever + 2` (or `+ 3` for preschoolers)
/// for the fever rule. The later of the two wins and the return date is the
/// day after it. On a tie the onset rule is reported as the reason; the date
/// itself is the same either way.
///
/// A fever-resolution date earlier than the onset date is computed through
/// unchanged. The onset rule then dominates and the fever-side day count
/// simply comes out large.
pub fn compute_return(
    onset: NaiveDate,
    fever_resolved: Option<NaiveDate>,
    category: StudentCategory,
) -> ReturnCalculation {
    let mut last_wait_day = onset + Duration::days(ONSET_CLEARANCE_DAYS);
    let mut reason = ReturnReason::Onset;

    if let Some(fever) = fever_resolved {
        let last_wait_from_fever = fever + Duration::days(category.fever_clearance_days());
        if last_wait_from_fever > last_wait_day {
            last_wait_day = last_wait_from_fever;
            reason = ReturnReason::FeverResolved;
        }
    }

    let can_return_date = last_wait_day + Duration::days(1);

    ReturnCalculation {
        can_return_date,
        reason,
        days_from_onset: day_difference(can_return_date, onset),
        days_from_fever: fever_resolved
            .map(|fever| day_difference(can_return_date, fever))
            .unwrap_or(0),
        criterion_a_met: true,
        criterion_b_met: fever_resolved.is_some(),
    }
}
