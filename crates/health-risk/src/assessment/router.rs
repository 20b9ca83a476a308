use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::json;

use super::classification::RiskLevel;
use super::domain::HealthProfile;
use super::engine::RiskAssessment;
use super::priority::{prioritize, ActionPlan};
use super::report::{render_text, REPORT_FILE_NAME};
use super::repository::{AssessmentRecord, ProfileId, ProfileRepository, RepositoryError};
use super::service::{AssessmentService, AssessmentServiceError};

const RECENT_LIMIT: usize = 20;

/// Response body for submitted and previewed assessments.
#[derive(Debug, Clone, Serialize)]
pub struct AssessmentResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_id: Option<ProfileId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub submitted_at: Option<DateTime<Utc>>,
    pub overall_score: u8,
    pub overall_level: RiskLevel,
    pub overall_label: &'static str,
    pub assessment: RiskAssessment,
    pub action_plan: ActionPlan,
}

impl AssessmentResponse {
    pub fn preview(assessment: RiskAssessment) -> Self {
        let level = assessment.overall_level();
        Self {
            profile_id: None,
            submitted_at: None,
            overall_score: assessment.overall_score,
            overall_level: level,
            overall_label: level.label(),
            action_plan: prioritize(&assessment),
            assessment,
        }
    }
}

impl From<AssessmentRecord> for AssessmentResponse {
    fn from(record: AssessmentRecord) -> Self {
        let mut response = Self::preview(record.assessment);
        response.profile_id = Some(record.profile_id);
        response.submitted_at = Some(record.submitted_at);
        response
    }
}

/// Router builder exposing the assessment endpoints.
pub fn assessment_router<R>(service: Arc<AssessmentService<R>>) -> Router
where
    R: ProfileRepository + 'static,
{
    Router::new()
        .route(
            "/api/v1/assessments",
            post(submit_handler::<R>).get(recent_handler::<R>),
        )
        .route("/api/v1/assessments/preview", post(preview_handler::<R>))
        .route("/api/v1/assessments/:profile_id", get(record_handler::<R>))
        .route(
            "/api/v1/assessments/:profile_id/report",
            get(report_handler::<R>),
        )
        .route(
            "/api/v1/assessments/:profile_id/actions",
            get(actions_handler::<R>),
        )
        .with_state(service)
}

fn error_response(error: AssessmentServiceError) -> Response {
    let status = match &error {
        AssessmentServiceError::Intake(_) => StatusCode::BAD_REQUEST,
        AssessmentServiceError::Repository(RepositoryError::Conflict) => StatusCode::CONFLICT,
        AssessmentServiceError::Repository(RepositoryError::NotFound) => StatusCode::NOT_FOUND,
        AssessmentServiceError::Repository(RepositoryError::Unavailable(_)) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };

    let payload = json!({
        "error": error.to_string(),
    });
    (status, axum::Json(payload)).into_response()
}

pub(crate) async fn submit_handler<R>(
    State(service): State<Arc<AssessmentService<R>>>,
    axum::Json(profile): axum::Json<HealthProfile>,
) -> Response
where
    R: ProfileRepository + 'static,
{
    match service.submit(profile) {
        Ok(record) => (
            StatusCode::CREATED,
            axum::Json(AssessmentResponse::from(record)),
        )
            .into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn preview_handler<R>(
    State(service): State<Arc<AssessmentService<R>>>,
    axum::Json(profile): axum::Json<HealthProfile>,
) -> Response
where
    R: ProfileRepository + 'static,
{
    match service.preview(&profile) {
        Ok(assessment) => (
            StatusCode::OK,
            axum::Json(AssessmentResponse::preview(assessment)),
        )
            .into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn recent_handler<R>(State(service): State<Arc<AssessmentService<R>>>) -> Response
where
    R: ProfileRepository + 'static,
{
    match service.recent(RECENT_LIMIT) {
        Ok(summaries) => (StatusCode::OK, axum::Json(summaries)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn record_handler<R>(
    State(service): State<Arc<AssessmentService<R>>>,
    Path(profile_id): Path<String>,
) -> Response
where
    R: ProfileRepository + 'static,
{
    match service.get(&ProfileId(profile_id)) {
        Ok(record) => (StatusCode::OK, axum::Json(AssessmentResponse::from(record))).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn report_handler<R>(
    State(service): State<Arc<AssessmentService<R>>>,
    Path(profile_id): Path<String>,
) -> Response
where
    R: ProfileRepository + 'static,
{
    match service.get(&ProfileId(profile_id)) {
        Ok(record) => {
            let headers = [
                (header::CONTENT_TYPE, "text/plain; charset=utf-8".to_string()),
                (
                    header::CONTENT_DISPOSITION,
                    format!("attachment; filename=\"{REPORT_FILE_NAME}\""),
                ),
            ];
            (StatusCode::OK, headers, render_text(&record.assessment)).into_response()
        }
        Err(error) => error_response(error),
    }
}

pub(crate) async fn actions_handler<R>(
    State(service): State<Arc<AssessmentService<R>>>,
    Path(profile_id): Path<String>,
) -> Response
where
    R: ProfileRepository + 'static,
{
    match service.get(&ProfileId(profile_id)) {
        Ok(record) => (StatusCode::OK, axum::Json(prioritize(&record.assessment))).into_response(),
        Err(error) => error_response(error),
    }
}
