use serde::Serialize;

use super::classification::RiskLevel;
use super::engine::{CategoryRisk, RiskAssessment, RiskCategory};
use super::factors::{CategoryRiskFactor, FactorKind};

/// Sample scores rendered before a questionnaire has been submitted.
pub const PREVIEW_SCORES: [(RiskCategory, u8); 6] = [
    (RiskCategory::Cardiovascular, 28),
    (RiskCategory::Metabolic, 42),
    (RiskCategory::Sleep, 35),
    (RiskCategory::Mental, 22),
    (RiskCategory::Immune, 30),
    (RiskCategory::Chronic, 38),
];

/// Icon shown next to a factor in the results view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum FactorIcon {
    Activity,
    AlertCircle,
    Brain,
    Clock,
    Droplets,
    Dumbbell,
    Moon,
    Sun,
    Thermometer,
    Users,
    Utensils,
}

impl FactorIcon {
    pub const fn for_kind(kind: FactorKind) -> Self {
        match kind {
            FactorKind::Exercise => Self::Dumbbell,
            FactorKind::Diet => Self::Utensils,
            FactorKind::Sleep => Self::Moon,
            FactorKind::Stress | FactorKind::MentalHealth | FactorKind::Mindfulness => Self::Brain,
            FactorKind::ScreenTime => Self::Clock,
            FactorKind::OutdoorTime => Self::Sun,
            FactorKind::SocialConnection | FactorKind::FamilyHistory => Self::Users,
            FactorKind::Smoking | FactorKind::Alcohol => Self::AlertCircle,
            FactorKind::Hydration => Self::Droplets,
            FactorKind::Checkup | FactorKind::Vaccination => Self::Thermometer,
            FactorKind::Age
            | FactorKind::Weight
            | FactorKind::BloodPressure
            | FactorKind::MedicalCondition => Self::Activity,
        }
    }
}

/// One bar of the category chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartPoint {
    pub category: RiskCategory,
    pub label: &'static str,
    pub color: &'static str,
    pub score: u8,
}

impl ChartPoint {
    fn new(category: RiskCategory, score: u8) -> Self {
        Self {
            category,
            label: category.label(),
            color: category.color(),
            score,
        }
    }
}

pub fn preview_chart() -> Vec<ChartPoint> {
    PREVIEW_SCORES
        .iter()
        .map(|(category, score)| ChartPoint::new(*category, *score))
        .collect()
}

#[derive(Debug, Clone, Serialize)]
pub struct FactorView {
    pub name: String,
    pub impact: &'static str,
    pub suggestion: String,
    pub kind: FactorKind,
    pub icon: FactorIcon,
}

impl From<&CategoryRiskFactor> for FactorView {
    fn from(factor: &CategoryRiskFactor) -> Self {
        Self {
            name: factor.name.clone(),
            impact: factor.impact.label(),
            suggestion: factor.suggestion.clone(),
            kind: factor.factor_kind,
            icon: FactorIcon::for_kind(factor.factor_kind),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoryView {
    pub category: RiskCategory,
    pub label: &'static str,
    pub color: &'static str,
    pub score: u8,
    pub level: RiskLevel,
    pub level_label: &'static str,
    pub factors: Vec<FactorView>,
}

impl From<&CategoryRisk> for CategoryView {
    fn from(risk: &CategoryRisk) -> Self {
        let level = risk.level();
        Self {
            category: risk.category,
            label: risk.category.label(),
            color: risk.category.color(),
            score: risk.score,
            level,
            level_label: level.label(),
            factors: risk.factors.iter().map(FactorView::from).collect(),
        }
    }
}

/// Presentation-ready projection of an assessment.
#[derive(Debug, Clone, Serialize)]
pub struct AssessmentView {
    pub overall_score: u8,
    pub overall_level: RiskLevel,
    pub overall_label: &'static str,
    pub categories: Vec<CategoryView>,
}

impl AssessmentView {
    pub fn chart(&self) -> Vec<ChartPoint> {
        self.categories
            .iter()
            .map(|view| ChartPoint::new(view.category, view.score))
            .collect()
    }
}

impl From<&RiskAssessment> for AssessmentView {
    fn from(assessment: &RiskAssessment) -> Self {
        let overall_level = assessment.overall_level();
        Self {
            overall_score: assessment.overall_score,
            overall_level,
            overall_label: overall_level.label(),
            categories: assessment.categories.iter().map(CategoryView::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preview_chart_follows_category_order() {
        let chart = preview_chart();
        let scores: Vec<_> = chart.iter().map(|point| point.score).collect();
        assert_eq!(scores, vec![28, 42, 35, 22, 30, 38]);
        assert_eq!(chart[0].color, "#e11d48");
        assert_eq!(chart[5].label, "Chronic");
    }

    #[test]
    fn icons_come_from_factor_kind() {
        assert_eq!(FactorIcon::for_kind(FactorKind::Exercise), FactorIcon::Dumbbell);
        assert_eq!(FactorIcon::for_kind(FactorKind::Mindfulness), FactorIcon::Brain);
        assert_eq!(FactorIcon::for_kind(FactorKind::Vaccination), FactorIcon::Thermometer);
        assert_eq!(FactorIcon::for_kind(FactorKind::Weight), FactorIcon::Activity);
    }
}
