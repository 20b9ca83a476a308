use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info, warn};

use super::domain::HealthProfile;
use super::engine::{RiskAssessment, RiskEngine};
use super::intake::{IntakeGuard, IntakePolicy, IntakeViolation};
use super::repository::{
    AssessmentRecord, AssessmentSummaryView, ProfileId, ProfileRepository, RepositoryError,
};

/// Service composing the intake guard, the risk engine, and the profile store.
pub struct AssessmentService<R> {
    guard: Arc<IntakeGuard>,
    repository: Arc<R>,
    engine: Arc<RiskEngine>,
}

static PROFILE_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_profile_id() -> ProfileId {
    let id = PROFILE_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    ProfileId(format!("profile-{id:06}"))
}

impl<R> AssessmentService<R>
where
    R: ProfileRepository + 'static,
{
    pub fn new(repository: Arc<R>, policy: IntakePolicy) -> Self {
        Self::with_guard(IntakeGuard::with_policy(policy), repository)
    }

    pub fn with_guard(guard: IntakeGuard, repository: Arc<R>) -> Self {
        Self {
            guard: Arc::new(guard),
            repository,
            engine: Arc::new(RiskEngine::new()),
        }
    }

    pub fn policy(&self) -> IntakePolicy {
        self.guard.policy()
    }

    /// Validate, score, and store a submitted questionnaire.
    pub fn submit(
        &self,
        profile: HealthProfile,
    ) -> Result<AssessmentRecord, AssessmentServiceError> {
        let assessment = self.preview(&profile)?;
        let record = AssessmentRecord {
            profile_id: next_profile_id(),
            submitted_at: Utc::now(),
            profile,
            assessment,
        };

        let stored = self.repository.insert(record)?;
        info!(
            profile_id = %stored.profile_id,
            overall_score = stored.assessment.overall_score,
            overall_level = stored.assessment.overall_level().label(),
            "stored health assessment"
        );
        Ok(stored)
    }

    /// Validate and score without storing anything.
    pub fn preview(&self, profile: &HealthProfile) -> Result<RiskAssessment, AssessmentServiceError> {
        if let Err(violation) = self.guard.check(profile) {
            warn!(
                policy = %self.guard.policy(),
                error = %violation,
                "rejected questionnaire"
            );
            return Err(violation.into());
        }

        for label in profile
            .family_history
            .unrecognised()
            .chain(profile.existing_conditions.unrecognised())
        {
            debug!(label, "ignoring unrecognised condition tag");
        }

        Ok(self.engine.assess(profile))
    }

    pub fn get(&self, profile_id: &ProfileId) -> Result<AssessmentRecord, AssessmentServiceError> {
        let record = self
            .repository
            .fetch(profile_id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(record)
    }

    pub fn recent(&self, limit: usize) -> Result<Vec<AssessmentSummaryView>, AssessmentServiceError> {
        let records = self.repository.recent(limit)?;
        Ok(records.iter().map(AssessmentRecord::summary_view).collect())
    }
}

/// Error raised by the assessment service.
#[derive(Debug, thiserror::Error)]
pub enum AssessmentServiceError {
    #[error(transparent)]
    Intake(#[from] IntakeViolation),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
