use crate::infra::{deserialize_date, deserialize_optional_date, AppState};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::json;
use toukou::suspension::domain::StudentCategory;
use toukou::suspension::report::views::{DayStatusView, SuspensionSummary};
use toukou::suspension::SuspensionReport;

#[derive(Debug, Deserialize)]
pub(crate) struct SuspensionReportRequest {
    #[serde(deserialize_with = "deserialize_date")]
    pub(crate) onset_date: NaiveDate,
    #[serde(default, deserialize_with = "deserialize_optional_date")]
    pub(crate) fever_resolved_date: Option<NaiveDate>,
    pub(crate) category: StudentCategory,
    #[serde(default)]
    pub(crate) include_timeline: bool,
}

#[derive(Debug, Serialize)]
pub(crate) struct SuspensionReportResponse {
    pub(crate) onset_date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) fever_resolved_date: Option<NaiveDate>,
    pub(crate) summary: SuspensionSummary,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) timeline: Option<Vec<DayStatusView>>,
}

pub(crate) fn router() -> axum::Router {
    axum::Router::new()
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .route(
            "/api/v1/suspension/report",
            axum::routing::post(suspension_report_endpoint),
        )
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn suspension_report_endpoint(
    Json(payload): Json<SuspensionReportRequest>,
) -> Json<SuspensionReportResponse> {
    let SuspensionReportRequest {
        onset_date,
        fever_resolved_date,
        category,
        include_timeline,
    } = payload;

    let report = SuspensionReport::assess(onset_date, fever_resolved_date, category);
    let summary = report.summary();
    let timeline = include_timeline.then(|| report.day_views());

    Json(SuspensionReportResponse {
        onset_date,
        fever_resolved_date,
        summary,
        timeline,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use serde_json::Value;
    use tower::ServiceExt;

    fn onset() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 10).expect("valid onset date")
    }

    #[tokio::test]
    async fn suspension_report_endpoint_returns_summary() {
        let request = SuspensionReportRequest {
            onset_date: onset(),
            fever_resolved_date: None,
            category: StudentCategory::School,
            include_timeline: false,
        };

        let Json(body) = suspension_report_endpoint(Json(request)).await;

        assert_eq!(
            body.summary.return_date.can_return_date,
            NaiveDate::from_ymd_opt(2024, 1, 16).expect("valid return date")
        );
        assert!(body.summary.provisional);
        assert!(body.timeline.is_none());
    }

    #[tokio::test]
    async fn suspension_report_endpoint_can_include_timeline() {
        let request = SuspensionReportRequest {
            onset_date: onset(),
            fever_resolved_date: Some(NaiveDate::from_ymd_opt(2024, 1, 15).expect("valid fever date")),
            category: StudentCategory::School,
            include_timeline: true,
        };

        let Json(body) = suspension_report_endpoint(Json(request)).await;

        let timeline = body.timeline.expect("timeline returned");
        assert_eq!(timeline.len(), 9);
        assert!(timeline.last().expect("non-empty").is_return_date);
        assert!(!body.summary.provisional);
    }

    #[tokio::test]
    async fn report_route_round_trips_json() {
        let response = router()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/v1/suspension/report")
                    .header("content-type", "application/json")
                    .body(Body::from(
                        serde_json::to_vec(&json!({
                            "onset_date": "2024-01-10",
                            "fever_resolved_date": "2024-01-15",
                            "category": "school",
                        }))
                        .expect("serialize request"),
                    ))
                    .expect("request"),
            )
            .await
            .expect("router dispatch");

        assert_eq!(response.status(), StatusCode::OK);

        let body = to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("body");
        let payload: Value = serde_json::from_slice(&body).expect("json");
        assert_eq!(
            payload["summary"]["return_date"]["can_return_date"],
            "2024-01-18"
        );
        assert_eq!(payload["summary"]["return_date"]["reason"], "fever_resolved");
        assert!(payload.get("timeline").is_none());
    }

    #[tokio::test]
    async fn report_route_rejects_unknown_category() {
        let response = router()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/v1/suspension/report")
                    .header("content-type", "application/json")
                    .body(Body::from(
                        serde_json::to_vec(&json!({
                            "onset_date": "2024-01-10",
                            "category": "highschool",
                        }))
                        .expect("serialize request"),
                    ))
                    .expect("request"),
            )
            .await
            .expect("router dispatch");

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn report_route_rejects_malformed_dates() {
        let response = router()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/v1/suspension/report")
                    .header("content-type", "application/json")
                    .body(Body::from(
                        serde_json::to_vec(&json!({
                            "onset_date": "01/10/2024",
                            "category": "school",
                        }))
                        .expect("serialize request"),
                    ))
                    .expect("request"),
            )
            .await
            .expect("router dispatch");

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
