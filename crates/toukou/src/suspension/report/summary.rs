use super::super::calculation::{compute_return, ReturnCalculation};
use super::super::calendar::format_jp;
use super::super::domain::{StudentCategory, ONSET_CLEARANCE_DAYS};
use super::super::timeline::{build_timeline, DayStatus};
use super::views::{DayStatusView, ReturnDateView, SuspensionSummary};
use super::{advisories, headline};
use chrono::NaiveDate;

/// One full assessment: the binding calculation plus the day-by-day
/// timeline, both derived from the same inputs.
#[derive(Debug, Clone)]
pub struct SuspensionReport {
    category: StudentCategory,
    onset: NaiveDate,
    fever_resolved: Option<NaiveDate>,
    calculation: ReturnCalculation,
    timeline: Vec<DayStatus>,
}

impl SuspensionReport {
    pub fn assess(
        onset: NaiveDate,
        fever_resolved: Option<NaiveDate>,
        category: StudentCategory,
    ) -> Self {
        let calculation = compute_return(onset, fever_resolved, category);
        let timeline = build_timeline(onset, fever_resolved, calculation.can_return_date, category);
        Self {
            category,
            onset,
            fever_resolved,
            calculation,
            timeline,
        }
    }

    pub fn category(&self) -> StudentCategory {
        self.category
    }

    pub fn onset(&self) -> NaiveDate {
        self.onset
    }

    pub fn fever_resolved(&self) -> Option<NaiveDate> {
        self.fever_resolved
    }

    pub fn calculation(&self) -> &ReturnCalculation {
        &self.calculation
    }

    pub fn timeline(&self) -> &[DayStatus] {
        &self.timeline
    }

    pub fn summary(&self) -> SuspensionSummary {
        let fever_known = self.fever_resolved.is_some();
        SuspensionSummary {
            category: self.category,
            category_label: self.category.label(),
            headline: headline(fever_known),
            provisional: !fever_known,
            return_date: self.return_date_view(),
            advisories: advisories(fever_known),
        }
    }

    fn return_date_view(&self) -> ReturnDateView {
        let calculation = &self.calculation;
        ReturnDateView {
            can_return_date: calculation.can_return_date,
            can_return_date_label: format_jp(calculation.can_return_date),
            reason: calculation.reason,
            reason_label: calculation.reason.label(self.category),
            days_from_onset: calculation.days_from_onset,
            days_from_onset_label: format!("発症から{}日経過", calculation.days_from_onset),
            days_from_fever: calculation.days_from_fever,
            days_from_fever_label: self
                .fever_resolved
                .map(|_| format!("解熱から{}日経過", calculation.days_from_fever)),
            criterion_a_met: calculation.criterion_a_met,
            criterion_b_met: calculation.criterion_b_met,
        }
    }

    pub fn day_views(&self) -> Vec<DayStatusView> {
        self.timeline.iter().map(|day| self.day_view(day)).collect()
    }

    fn day_view(&self, day: &DayStatus) -> DayStatusView {
        let day_label = if day.is_return_date {
            "登校可能".to_string()
        } else {
            format!("発症{}日目", day.day_from_onset)
        };
        let onset_progress_label = if day.day_from_onset > ONSET_CLEARANCE_DAYS {
            format!("経過({}日超)", ONSET_CLEARANCE_DAYS)
        } else {
            format!("経過中({}/{})", day.day_from_onset, ONSET_CLEARANCE_DAYS)
        };
        let fever_threshold = self.category.fever_clearance_days();
        let fever_progress_label = day.day_from_fever.map(|elapsed| {
            if elapsed > fever_threshold {
                format!("経過({}日超)", fever_threshold)
            } else if elapsed >= 0 {
                format!("経過中({}/{})", elapsed, fever_threshold)
            } else {
                // Days before the fever resolves show a dash, not a
                // negative count.
                format!("経過中(-/{})", fever_threshold)
            }
        });
        DayStatusView {
            date: day.date,
            date_label: format_jp(day.date),
            day_from_onset: day.day_from_onset,
            day_from_fever: day.day_from_fever,
            state: day.state,
            day_label,
            onset_progress_label,
            fever_progress_label,
            is_onset: day.is_onset,
            is_fever_resolved: day.is_fever_resolved,
            is_return_date: day.is_return_date,
        }
    }
}
