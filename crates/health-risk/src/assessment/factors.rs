use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Strength tier of a factor's contribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Magnitude {
    High,
    Medium,
    Low,
}

/// Whether a factor raises or lowers the category risk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Direction {
    Positive,
    Negative,
}

/// Qualitative impact attached to every factor, encoded on the wire as e.g. `"High negative impact"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ImpactLabel {
    pub magnitude: Magnitude,
    pub direction: Direction,
}

impl ImpactLabel {
    pub const HIGH_POSITIVE: Self = Self::new(Magnitude::High, Direction::Positive);
    pub const MEDIUM_POSITIVE: Self = Self::new(Magnitude::Medium, Direction::Positive);
    pub const LOW_POSITIVE: Self = Self::new(Magnitude::Low, Direction::Positive);
    pub const HIGH_NEGATIVE: Self = Self::new(Magnitude::High, Direction::Negative);
    pub const MEDIUM_NEGATIVE: Self = Self::new(Magnitude::Medium, Direction::Negative);
    pub const LOW_NEGATIVE: Self = Self::new(Magnitude::Low, Direction::Negative);

    const ALL: [Self; 6] = [
        Self::HIGH_POSITIVE,
        Self::MEDIUM_POSITIVE,
        Self::LOW_POSITIVE,
        Self::HIGH_NEGATIVE,
        Self::MEDIUM_NEGATIVE,
        Self::LOW_NEGATIVE,
    ];

    pub const fn new(magnitude: Magnitude, direction: Direction) -> Self {
        Self {
            magnitude,
            direction,
        }
    }

    pub const fn is_positive(self) -> bool {
        matches!(self.direction, Direction::Positive)
    }

    pub const fn label(self) -> &'static str {
        match (self.magnitude, self.direction) {
            (Magnitude::High, Direction::Positive) => "High positive impact",
            (Magnitude::Medium, Direction::Positive) => "Medium positive impact",
            (Magnitude::Low, Direction::Positive) => "Low positive impact",
            (Magnitude::High, Direction::Negative) => "High negative impact",
            (Magnitude::Medium, Direction::Negative) => "Medium negative impact",
            (Magnitude::Low, Direction::Negative) => "Low negative impact",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|impact| impact.label().eq_ignore_ascii_case(label.trim()))
    }
}

impl fmt::Display for ImpactLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for ImpactLabel {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for ImpactLabel {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Self::from_label(&raw)
            .ok_or_else(|| serde::de::Error::custom(format!("unknown impact label `{raw}`")))
    }
}

/// Explicit tag carried by each factor so presenters never infer intent from the display name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FactorKind {
    Age,
    Weight,
    Exercise,
    BloodPressure,
    Smoking,
    FamilyHistory,
    Diet,
    Hydration,
    Sleep,
    ScreenTime,
    Stress,
    Alcohol,
    SocialConnection,
    OutdoorTime,
    MedicalCondition,
    MentalHealth,
    Mindfulness,
    Vaccination,
    Checkup,
}

/// One named contributor to a category's score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryRiskFactor {
    pub name: String,
    pub impact: ImpactLabel,
    pub suggestion: String,
    pub factor_kind: FactorKind,
}

impl CategoryRiskFactor {
    pub fn new(
        name: impl Into<String>,
        factor_kind: FactorKind,
        impact: ImpactLabel,
        suggestion: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            impact,
            suggestion: suggestion.into(),
            factor_kind,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn impact_labels_use_the_fixed_strings() {
        let value = serde_json::to_value(ImpactLabel::MEDIUM_NEGATIVE).expect("serializes");
        assert_eq!(value, json!("Medium negative impact"));

        let parsed: ImpactLabel =
            serde_json::from_value(json!("High positive impact")).expect("parses");
        assert_eq!(parsed, ImpactLabel::HIGH_POSITIVE);
        assert!(parsed.is_positive());
    }

    #[test]
    fn unknown_impact_label_is_rejected() {
        assert!(serde_json::from_value::<ImpactLabel>(json!("Neutral impact")).is_err());
    }

    #[test]
    fn factor_serializes_with_kind_tag() {
        let factor = CategoryRiskFactor::new(
            "Blood Pressure",
            FactorKind::BloodPressure,
            ImpactLabel::HIGH_NEGATIVE,
            "Consult with a healthcare provider about managing your blood pressure",
        );
        let value = serde_json::to_value(&factor).expect("serializes");
        assert_eq!(value["factorKind"], json!("blood-pressure"));
        assert_eq!(value["impact"], json!("High negative impact"));
    }
}
