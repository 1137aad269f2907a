//! The timeline generator: one status record per day of the waiting period.

use chrono::NaiveDate;

use super::calendar::day_difference;
use super::domain::{clearance_state, DayState, StudentCategory};

/// Status of a single calendar day between onset and return.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayStatus {
    pub date: NaiveDate,
    /// Signed offset from the onset date, 0 on the onset day itself.
    pub day_from_onset: i64,
    /// Signed offset from the fever-resolution date, `None` when no such
    /// date was supplied.
    pub day_from_fever: Option<i64>,
    pub state: DayState,
    pub is_onset: bool,
    pub is_fever_resolved: bool,
    pub is_return_date: bool,
}

/// Expands the waiting period into an eager, ordered sequence of day
/// statuses, from the onset date through `can_return_date` inclusive.
///
/// `can_return_date` is taken as input rather than recomputed, so callers
/// pair this with [`super::compute_return`] on the same inputs. The per-day
/// state comes from [`clearance_state`], which applies the same thresholds
/// and strict comparisons as the engine; the final entry is therefore the
/// first `Ok` day and everything before it is `Wait`.
pub fn build_timeline(
    onset: NaiveDate,
    fever_resolved: Option<NaiveDate>,
    can_return_date: NaiveDate,
    category: StudentCategory,
) -> Vec<DayStatus> {
    onset
        .iter_days()
        .take_while(|day| *day <= can_return_date)
        .map(|date| {
            let day_from_onset = day_difference(date, onset);
            let day_from_fever = fever_resolved.map(|fever| day_difference(date, fever));
            DayStatus {
                date,
                day_from_onset,
                day_from_fever,
                state: clearance_state(day_from_onset, day_from_fever, category),
                is_onset: day_from_onset == 0,
                is_fever_resolved: day_from_fever == Some(0),
                is_return_date: day_difference(date, can_return_date) == 0,
            }
        })
        .collect()
}
