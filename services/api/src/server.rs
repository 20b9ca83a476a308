use crate::cli::ServeArgs;
use crate::infra::{AppState, InMemoryProfileRepository};
use crate::routes::with_assessment_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use health_risk::assessment::AssessmentService;
use health_risk::config::AppConfig;
use health_risk::error::AppError;
use health_risk::telemetry;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let repository = Arc::new(InMemoryProfileRepository::with_capacity(
        config.storage.profile_capacity,
    ));
    let policy = config.intake.policy();
    let assessment_service = Arc::new(AssessmentService::new(repository, policy));

    let app = with_assessment_routes(assessment_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        intake_policy = %policy,
        profile_capacity = config.storage.profile_capacity,
        "health risk predictor ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
