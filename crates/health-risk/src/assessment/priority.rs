use serde::{Deserialize, Serialize};

use super::engine::{RiskAssessment, RiskCategory};
use super::factors::{CategoryRiskFactor, Magnitude};

const BUCKET_CAP: usize = 5;

/// A factor lifted out of its category for the action plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrioritizedAction {
    pub category: RiskCategory,
    pub factor: CategoryRiskFactor,
}

/// Factors bucketed by urgency, each bucket in category-then-evaluation order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionPlan {
    pub immediate: Vec<PrioritizedAction>,
    pub short_term: Vec<PrioritizedAction>,
    pub maintenance: Vec<PrioritizedAction>,
}

impl ActionPlan {
    pub fn is_empty(&self) -> bool {
        self.immediate.is_empty() && self.short_term.is_empty() && self.maintenance.is_empty()
    }
}

pub fn prioritize(assessment: &RiskAssessment) -> ActionPlan {
    let mut plan = ActionPlan::default();

    for risk in &assessment.categories {
        for factor in &risk.factors {
            let bucket = if factor.impact.is_positive() {
                &mut plan.maintenance
            } else {
                match factor.impact.magnitude {
                    Magnitude::High => &mut plan.immediate,
                    Magnitude::Medium => &mut plan.short_term,
                    Magnitude::Low => continue,
                }
            };

            if bucket.len() < BUCKET_CAP {
                bucket.push(PrioritizedAction {
                    category: risk.category,
                    factor: factor.clone(),
                });
            }
        }
    }

    plan
}
