use crate::infra::{parse_category, parse_date};
use chrono::{Duration, Local, NaiveDate};
use clap::Args;
use toukou::error::AppError;
use toukou::suspension::calendar::format_jp;
use toukou::suspension::domain::{DayState, StudentCategory};
use toukou::suspension::SuspensionReport;

#[derive(Args, Debug)]
pub(crate) struct SuspensionReportArgs {
    /// Symptom onset date, day 0 of the onset count (YYYY-MM-DD)
    #[arg(long, value_parser = parse_date)]
    pub(crate) onset_date: NaiveDate,
    /// Fever resolution date, if already known (YYYY-MM-DD)
    #[arg(long, value_parser = parse_date)]
    pub(crate) fever_resolved_date: Option<NaiveDate>,
    /// Student category: school | preschool
    #[arg(long, value_parser = parse_category, default_value = "school")]
    pub(crate) category: StudentCategory,
    /// Print the day-by-day timeline under the summary
    #[arg(long)]
    pub(crate) show_timeline: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Onset date shared by all demo cases (YYYY-MM-DD). Defaults to today.
    #[arg(long, value_parser = parse_date)]
    pub(crate) onset_date: Option<NaiveDate>,
    /// Include the day-by-day timeline for each case
    #[arg(long)]
    pub(crate) show_timeline: bool,
}

pub(crate) fn run_suspension_report(args: SuspensionReportArgs) -> Result<(), AppError> {
    let SuspensionReportArgs {
        onset_date,
        fever_resolved_date,
        category,
        show_timeline,
    } = args;

    let report = SuspensionReport::assess(onset_date, fever_resolved_date, category);
    render_suspension_report(&report, show_timeline);

    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        onset_date,
        show_timeline,
    } = args;

    let onset = onset_date.unwrap_or_else(|| Local::now().date_naive());

    println!("Influenza return-date demo (onset {onset})");

    for category in StudentCategory::ordered() {
        // No fever date yet, early resolution, late resolution.
        let fever_cases = [
            None,
            Some(onset + Duration::days(3)),
            Some(onset + Duration::days(5)),
        ];
        for fever_resolved in fever_cases {
            let report = SuspensionReport::assess(onset, fever_resolved, category);
            println!();
            render_suspension_report(&report, show_timeline);
        }
    }

    Ok(())
}

pub(crate) fn render_suspension_report(report: &SuspensionReport, show_timeline: bool) {
    let summary = report.summary();

    println!("{} [{}]", summary.headline, summary.category_label);
    match report.fever_resolved() {
        Some(fever) => println!(
            "発症日 {} / 解熱日 {}",
            format_jp(report.onset()),
            format_jp(fever)
        ),
        None => println!("発症日 {} / 解熱日 未入力", format_jp(report.onset())),
    }

    let return_date = &summary.return_date;
    println!(
        "登校可能日: {} ({})",
        return_date.can_return_date_label, return_date.reason_label
    );
    match &return_date.days_from_fever_label {
        Some(fever_label) => println!(
            "- {} | {}",
            return_date.days_from_onset_label, fever_label
        ),
        None => println!("- {}", return_date.days_from_onset_label),
    }

    for advisory in &summary.advisories {
        println!("- {advisory}");
    }

    if show_timeline {
        println!("\n経過タイムライン (0日目 = 発症日)");
        for day in report.day_views() {
            let state_label = match day.state {
                DayState::Wait => "待機",
                DayState::Ok => "登校可",
            };
            let fever_progress = day.fever_progress_label.as_deref().unwrap_or("-");
            let mut markers = Vec::new();
            if day.is_onset {
                markers.push("発症日");
            }
            if day.is_fever_resolved {
                markers.push("解熱日");
            }
            if day.is_return_date {
                markers.push("登校可能日");
            }
            let marker_note = if markers.is_empty() {
                String::new()
            } else {
                format!(" <- {}", markers.join("・"))
            };

            println!(
                "- {} {} [{}] | 発症 {} | 解熱 {}{}",
                day.date_label,
                day.day_label,
                state_label,
                day.onset_progress_label,
                fever_progress,
                marker_note
            );
        }
    }
}
