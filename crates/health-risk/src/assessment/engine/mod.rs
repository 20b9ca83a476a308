mod cardiovascular;
mod chronic;
mod immune;
mod mental;
mod metabolic;
mod sleep;
mod tally;

use serde::{Deserialize, Serialize};

use super::classification::RiskLevel;
use super::domain::HealthProfile;
use super::factors::CategoryRiskFactor;

/// The six independently scored health domains, in presentation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RiskCategory {
    Cardiovascular,
    Metabolic,
    Sleep,
    Mental,
    Immune,
    Chronic,
}

impl RiskCategory {
    pub const ALL: [Self; 6] = [
        Self::Cardiovascular,
        Self::Metabolic,
        Self::Sleep,
        Self::Mental,
        Self::Immune,
        Self::Chronic,
    ];

    /// Inclusive clamp range applied to the category score.
    pub const fn bounds(self) -> (u8, u8) {
        match self {
            Self::Cardiovascular => (10, 85),
            Self::Metabolic => (15, 85),
            Self::Sleep => (15, 80),
            Self::Mental => (10, 80),
            Self::Immune => (15, 75),
            Self::Chronic => (15, 85),
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Cardiovascular => "Cardiovascular",
            Self::Metabolic => "Metabolic",
            Self::Sleep => "Sleep",
            Self::Mental => "Mental",
            Self::Immune => "Immune",
            Self::Chronic => "Chronic",
        }
    }

    /// Chart palette colour.
    pub const fn color(self) -> &'static str {
        match self {
            Self::Cardiovascular => "#e11d48",
            Self::Metabolic => "#0891b2",
            Self::Sleep => "#7c3aed",
            Self::Mental => "#8b5cf6",
            Self::Immune => "#16a34a",
            Self::Chronic => "#ea580c",
        }
    }
}

/// Bounded score and contributing factors for one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryRisk {
    pub category: RiskCategory,
    pub score: u8,
    pub factors: Vec<CategoryRiskFactor>,
}

impl CategoryRisk {
    pub fn level(&self) -> RiskLevel {
        RiskLevel::from_score(self.score)
    }
}

/// Engine output: all six categories plus the unweighted overall score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskAssessment {
    pub categories: Vec<CategoryRisk>,
    pub overall_score: u8,
}

impl RiskAssessment {
    fn from_categories(categories: Vec<CategoryRisk>) -> Self {
        let overall_score = if categories.is_empty() {
            0
        } else {
            let total: f64 = categories.iter().map(|risk| f64::from(risk.score)).sum();
            (total / categories.len() as f64).round() as u8
        };

        Self {
            categories,
            overall_score,
        }
    }

    pub fn overall_level(&self) -> RiskLevel {
        RiskLevel::from_score(self.overall_score)
    }

    pub fn category(&self, category: RiskCategory) -> Option<&CategoryRisk> {
        self.categories
            .iter()
            .find(|risk| risk.category == category)
    }

    /// Score for a category; zero when the category is missing from a hand-built assessment.
    pub fn score(&self, category: RiskCategory) -> u8 {
        self.category(category).map(|risk| risk.score).unwrap_or(0)
    }
}

/// Stateless rule engine mapping a profile to its category scores.
#[derive(Debug, Clone, Copy, Default)]
pub struct RiskEngine;

impl RiskEngine {
    pub fn new() -> Self {
        Self
    }

    pub fn assess(&self, profile: &HealthProfile) -> RiskAssessment {
        let bmi = profile.bmi();
        let categories = RiskCategory::ALL
            .into_iter()
            .map(|category| match category {
                RiskCategory::Cardiovascular => cardiovascular::score(profile, bmi),
                RiskCategory::Metabolic => metabolic::score(profile, bmi),
                RiskCategory::Sleep => sleep::score(profile),
                RiskCategory::Mental => mental::score(profile),
                RiskCategory::Immune => immune::score(profile),
                RiskCategory::Chronic => chronic::score(profile, bmi),
            })
            .collect();

        RiskAssessment::from_categories(categories)
    }
}

/// Score a profile with the default engine.
pub fn assess(profile: &HealthProfile) -> RiskAssessment {
    RiskEngine::new().assess(profile)
}
