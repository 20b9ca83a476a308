//! Lifestyle questionnaire risk scoring.
//!
//! A submitted [`assessment::HealthProfile`] is validated by the intake guard, scored by the
//! [`assessment::RiskEngine`] across six health categories, and exposed through report,
//! presentation and HTTP adapters.

pub mod assessment;
pub mod config;
pub mod error;
pub mod telemetry;
