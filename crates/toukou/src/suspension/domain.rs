//! Core vocabulary of the suspension rules.
//!
//! The statutory rule ("発症した後5日を経過し、かつ、解熱した後2日（幼児に
//! あつては3日）を経過するまで") counts the onset day and the fever-resolution
//! day as day zero, so a day is past a restriction only when strictly more
//! days than the threshold have elapsed.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Days that must pass after symptom onset before attendance may resume.
pub const ONSET_CLEARANCE_DAYS: i64 = 5;

/// Student category, which decides the fever-resolution threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StudentCategory {
    /// Elementary school and above.
    School,
    /// Preschool children.
    Preschool,
}

impl StudentCategory {
    pub const fn ordered() -> [StudentCategory; 2] {
        [StudentCategory::School, StudentCategory::Preschool]
    }

    /// Days that must pass after the fever resolves: two for schoolchildren,
    /// three for preschoolers.
    pub const fn fever_clearance_days(self) -> i64 {
        match self {
            StudentCategory::School => 2,
            StudentCategory::Preschool => 3,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            StudentCategory::School => "小学生以上",
            StudentCategory::Preschool => "幼児（未就学児）",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown student category '{0}', expected 'school' or 'preschool'")]
pub struct ParseCategoryError(String);

impl FromStr for StudentCategory {
    type Err = ParseCategoryError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "school" => Ok(StudentCategory::School),
            "preschool" => Ok(StudentCategory::Preschool),
            _ => Err(ParseCategoryError(value.to_string())),
        }
    }
}

/// Which rule fixed the return date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReturnReason {
    /// The five-days-from-onset rule was the later one.
    Onset,
    /// The days-from-fever-resolution rule was the later one.
    FeverResolved,
}

impl ReturnReason {
    pub const fn label(self, category: StudentCategory) -> &'static str {
        match (self, category) {
            (ReturnReason::Onset, _) => "発症した後5日を経過",
            (ReturnReason::FeverResolved, StudentCategory::School) => "解熱した後2日を経過",
            (ReturnReason::FeverResolved, StudentCategory::Preschool) => "解熱した後3日を経過",
        }
    }
}

/// Whether a given day still falls inside the suspension window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayState {
    /// Attendance still suspended on this day.
    Wait,
    /// All restrictions have lapsed; attendance is permitted.
    Ok,
}

/// Day-level form of the clearance rule. Built on the same thresholds and
/// strict comparisons as the return-date computation; the timeline generator
/// consumes this instead of re-deriving the rule.
///
/// `day_from_fever` is `None` when no fever-resolution date is known, in
/// which case only the onset rule applies and the result is provisional.
pub fn clearance_state(
    day_from_onset: i64,
    day_from_fever: Option<i64>,
    category: StudentCategory,
) -> DayState {
    let onset_cleared = day_from_onset > ONSET_CLEARANCE_DAYS;
    let cleared = match day_from_fever {
        Some(elapsed) => onset_cleared && elapsed > category.fever_clearance_days(),
        None => onset_cleared,
    };
    if cleared {
        DayState::Ok
    } else {
        DayState::Wait
    }
}
