//! Questionnaire intake, rule-based risk scoring, and the exports built on top of it.
//!
//! A submitted [`HealthProfile`] passes the [`IntakeGuard`], is scored by the [`RiskEngine`]
//! into six bounded [`CategoryRisk`] records, and can then be prioritised into an
//! [`ActionPlan`], rendered as a text or CSV report, or projected into presentation views.

pub mod classification;
pub mod domain;
pub mod engine;
pub mod factors;
pub mod intake;
mod lenient;
pub mod priority;
pub mod report;
pub mod repository;
pub mod router;
pub mod service;
pub mod views;

#[cfg(test)]
mod tests;

pub use classification::{risk_level, RiskLevel};
pub use domain::{
    AlcoholConsumption, BloodPressure, Cholesterol, ConditionHistory, ConditionTag, DietType,
    ExerciseFrequency, ExposureLevel, FastFoodFrequency, Gender, HealthProfile, LastCheckup,
    SleepQuality, SmokingStatus, SocialConnections, VaccinationStatus, WaterIntake,
    NONE_OF_THE_ABOVE,
};
pub use engine::{assess, CategoryRisk, RiskAssessment, RiskCategory, RiskEngine};
pub use factors::{CategoryRiskFactor, Direction, FactorKind, ImpactLabel, Magnitude};
pub use intake::{IntakeGuard, IntakePolicy, IntakeViolation};
pub use priority::{prioritize, ActionPlan, PrioritizedAction};
pub use report::{render_text, share_text, write_csv, ReportError, REPORT_FILE_NAME};
pub use repository::{
    AssessmentRecord, AssessmentSummaryView, ProfileId, ProfileRepository, RepositoryError,
};
pub use router::{assessment_router, AssessmentResponse};
pub use service::{AssessmentService, AssessmentServiceError};
pub use views::{
    preview_chart, AssessmentView, CategoryView, ChartPoint, FactorIcon, FactorView,
    PREVIEW_SCORES,
};
