use chrono::{Duration, NaiveDate};
use std::str::FromStr;
use toukou::suspension::{
    compute_return,
    domain::{ReturnReason, StudentCategory},
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

#[test]
fn onset_only_gives_six_days_for_both_categories() {
    // Month, year, and leap-day boundaries inside the waiting window.
    let onsets = [
        date(2024, 1, 10),
        date(2023, 12, 28),
        date(2024, 2, 26),
        date(2024, 12, 30),
    ];

    for onset in onsets {
        for category in StudentCategory::ordered() {
            let result = compute_return(onset, None, category);
            assert_eq!(result.can_return_date, onset + Duration::days(6));
            assert_eq!(result.reason, ReturnReason::Onset);
            assert_eq!(result.days_from_onset, 6);
            assert_eq!(result.days_from_fever, 0);
            assert!(result.criterion_a_met);
            assert!(
                !result.criterion_b_met,
                "fever criterion cannot be met without a fever date"
            );
        }
    }

    let result = compute_return(date(2024, 1, 10), None, StudentCategory::School);
    assert_eq!(result.can_return_date, date(2024, 1, 16));
}

#[test]
fn early_fever_leaves_onset_rule_binding() {
    let onset = date(2024, 1, 10);
    let fever = date(2024, 1, 12);

    let result = compute_return(onset, Some(fever), StudentCategory::School);
    assert_eq!(result.can_return_date, date(2024, 1, 16));
    assert_eq!(result.reason, ReturnReason::Onset);
    assert_eq!(result.reason.label(StudentCategory::School), "発症した後5日を経過");
    assert_eq!(result.days_from_onset, 6);
    assert_eq!(result.days_from_fever, 4);
    assert!(result.criterion_b_met);
}

#[test]
fn late_fever_extends_school_return() {
    let onset = date(2024, 1, 10);
    let fever = date(2024, 1, 15);

    let result = compute_return(onset, Some(fever), StudentCategory::School);
    assert_eq!(result.can_return_date, date(2024, 1, 18));
    assert_eq!(result.reason, ReturnReason::FeverResolved);
    assert_eq!(result.reason.label(StudentCategory::School), "解熱した後2日を経過");
    assert_eq!(result.days_from_onset, 8);
    assert_eq!(result.days_from_fever, 3);
}

#[test]
fn preschool_waits_an_extra_day_after_fever() {
    let onset = date(2024, 1, 10);
    let fever = date(2024, 1, 15);

    let result = compute_return(onset, Some(fever), StudentCategory::Preschool);
    assert_eq!(result.can_return_date, date(2024, 1, 19));
    assert_eq!(result.reason, ReturnReason::FeverResolved);
    assert_eq!(
        result.reason.label(StudentCategory::Preschool),
        "解熱した後3日を経過"
    );
    assert_eq!(result.days_from_fever, 4);
}

#[test]
fn equal_last_wait_days_keep_onset_reason() {
    // Fever on day 3 makes fever + 2 land exactly on onset + 5.
    let onset = date(2024, 1, 10);
    let fever = date(2024, 1, 13);

    let result = compute_return(onset, Some(fever), StudentCategory::School);
    assert_eq!(result.can_return_date, date(2024, 1, 16));
    assert_eq!(result.reason, ReturnReason::Onset);
}

#[test]
fn fever_rule_binds_only_when_strictly_later() {
    let onset = date(2024, 1, 10);

    for category in StudentCategory::ordered() {
        for offset in -3..=10 {
            let fever = onset + Duration::days(offset);
            let result = compute_return(onset, Some(fever), category);

            let expected = match category {
                StudentCategory::School => {
                    if fever + Duration::days(2) >= onset + Duration::days(5) {
                        fever + Duration::days(3)
                    } else {
                        onset + Duration::days(6)
                    }
                }
                StudentCategory::Preschool => {
                    if fever + Duration::days(3) >= onset + Duration::days(5) {
                        fever + Duration::days(4)
                    } else {
                        onset + Duration::days(6)
                    }
                }
            };
            assert_eq!(
                result.can_return_date, expected,
                "return date for fever offset {offset} ({category:?})"
            );

            let fever_last_wait = fever + Duration::days(category.fever_clearance_days());
            let onset_last_wait = onset + Duration::days(5);
            let expected_reason = if fever_last_wait > onset_last_wait {
                ReturnReason::FeverResolved
            } else {
                ReturnReason::Onset
            };
            assert_eq!(
                result.reason, expected_reason,
                "reason for fever offset {offset} ({category:?})"
            );
            assert!(result.days_from_onset >= 6);
        }
    }
}

#[test]
fn fever_before_onset_is_computed_through() {
    // Deliberately illogical input; the rule is applied without any guard.
    let onset = date(2024, 1, 10);
    let fever = date(2024, 1, 6);

    let result = compute_return(onset, Some(fever), StudentCategory::School);
    assert_eq!(result.can_return_date, date(2024, 1, 16));
    assert_eq!(result.reason, ReturnReason::Onset);
    assert_eq!(result.days_from_fever, 10);
    assert!(result.criterion_b_met);
}

#[test]
fn category_thresholds_and_labels() {
    assert_eq!(StudentCategory::School.fever_clearance_days(), 2);
    assert_eq!(StudentCategory::Preschool.fever_clearance_days(), 3);
    assert_eq!(StudentCategory::School.label(), "小学生以上");
    assert_eq!(StudentCategory::Preschool.label(), "幼児（未就学児）");
}

#[test]
fn category_parses_from_common_spellings() {
    assert_eq!(
        StudentCategory::from_str("school").expect("parses"),
        StudentCategory::School
    );
    assert_eq!(
        StudentCategory::from_str(" PRESCHOOL ").expect("parses"),
        StudentCategory::Preschool
    );

    let error = StudentCategory::from_str("highschool").expect_err("rejects unknown input");
    assert!(error.to_string().contains("highschool"));
}
