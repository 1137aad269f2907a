use super::super::domain::{DayState, ReturnReason, StudentCategory};
use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct ReturnDateView {
    pub can_return_date: NaiveDate,
    pub can_return_date_label: String,
    pub reason: ReturnReason,
    pub reason_label: &'static str,
    pub days_from_onset: i64,
    pub days_from_onset_label: String,
    pub days_from_fever: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub days_from_fever_label: Option<String>,
    pub criterion_a_met: bool,
    pub criterion_b_met: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct DayStatusView {
    pub date: NaiveDate,
    pub date_label: String,
    pub day_from_onset: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub day_from_fever: Option<i64>,
    pub state: DayState,
    pub day_label: String,
    pub onset_progress_label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fever_progress_label: Option<String>,
    pub is_onset: bool,
    pub is_fever_resolved: bool,
    pub is_return_date: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct SuspensionSummary {
    pub category: StudentCategory,
    pub category_label: &'static str,
    pub headline: &'static str,
    /// True when no fever-resolution date was supplied, so the return date
    /// may still move once the fever actually resolves.
    pub provisional: bool,
    pub return_date: ReturnDateView,
    pub advisories: Vec<String>,
}
