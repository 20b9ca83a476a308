use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use health_risk::assessment::{
    assessment_router, preview_chart, AssessmentService, ChartPoint, ProfileRepository,
};
use serde_json::json;
use std::sync::Arc;

pub(crate) fn with_assessment_routes<R>(service: Arc<AssessmentService<R>>) -> axum::Router
where
    R: ProfileRepository + 'static,
{
    assessment_router(service)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .route(
            "/api/v1/preview-chart",
            axum::routing::get(preview_chart_endpoint),
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

/// Fixed sample chart shown on the landing page before any questionnaire is submitted.
pub(crate) async fn preview_chart_endpoint() -> Json<Vec<ChartPoint>> {
    Json(preview_chart())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::InMemoryProfileRepository;
    use axum::body::Body;
    use axum::http::Request;
    use health_risk::assessment::IntakePolicy;
    use tower::ServiceExt;

    fn router() -> axum::Router {
        let repository = Arc::new(InMemoryProfileRepository::with_capacity(16));
        let service = Arc::new(AssessmentService::new(repository, IntakePolicy::lenient()));
        with_assessment_routes(service)
    }

    async fn read_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body readable");
        serde_json::from_slice(&bytes).expect("json body")
    }

    #[tokio::test]
    async fn healthcheck_reports_ok() {
        let Json(body) = healthcheck().await;
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn preview_chart_lists_every_category() {
        let response = router()
            .oneshot(
                Request::get("/api/v1/preview-chart")
                    .body(Body::empty())
                    .expect("request builds"),
            )
            .await
            .expect("route executes");

        assert_eq!(response.status(), StatusCode::OK);
        let payload = read_json(response).await;
        assert_eq!(payload.as_array().map(Vec::len), Some(6));
    }

    #[tokio::test]
    async fn assessment_routes_are_mounted() {
        let body = json!({
            "age": "41",
            "gender": "female",
            "weightKg": "68",
            "heightCm": "170"
        });
        let response = router()
            .oneshot(
                Request::post("/api/v1/assessments")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body.to_string()))
                    .expect("request builds"),
            )
            .await
            .expect("route executes");

        assert_eq!(response.status(), StatusCode::CREATED);
        let payload = read_json(response).await;
        assert!(payload["profile_id"].is_string());
    }
}
