use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::classification::RiskLevel;
use super::domain::HealthProfile;
use super::engine::RiskAssessment;

/// Identifier wrapper for stored assessments.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProfileId(pub String);

impl fmt::Display for ProfileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Repository record pairing a submitted profile with its assessment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessmentRecord {
    pub profile_id: ProfileId,
    pub submitted_at: DateTime<Utc>,
    pub profile: HealthProfile,
    pub assessment: RiskAssessment,
}

impl AssessmentRecord {
    pub fn summary_view(&self) -> AssessmentSummaryView {
        let level = self.assessment.overall_level();
        AssessmentSummaryView {
            profile_id: self.profile_id.clone(),
            submitted_at: self.submitted_at,
            overall_score: self.assessment.overall_score,
            overall_level: level,
            overall_label: level.label(),
        }
    }
}

/// Storage abstraction so the service module can be exercised in isolation.
pub trait ProfileRepository: Send + Sync {
    fn insert(&self, record: AssessmentRecord) -> Result<AssessmentRecord, RepositoryError>;
    fn fetch(&self, id: &ProfileId) -> Result<Option<AssessmentRecord>, RepositoryError>;
    /// Most recent records first.
    fn recent(&self, limit: usize) -> Result<Vec<AssessmentRecord>, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

/// Compact listing entry for a stored assessment.
#[derive(Debug, Clone, Serialize)]
pub struct AssessmentSummaryView {
    pub profile_id: ProfileId,
    pub submitted_at: DateTime<Utc>,
    pub overall_score: u8,
    pub overall_level: RiskLevel,
    pub overall_label: &'static str,
}
