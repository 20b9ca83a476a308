use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::lenient;

/// Label the questionnaire uses for an explicit empty selection in multi-select fields.
pub const NONE_OF_THE_ABOVE: &str = "None of the above";

const CM_PER_FOOT: f64 = 30.48;
const CM_PER_INCH: f64 = 2.54;

/// Self-reported questionnaire answers, decoded from the wizard's camelCase JSON.
///
/// Every scalar is optional: the engine treats an absent answer as "no contribution", and the
/// intake guard decides which answers are mandatory before a profile is scored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthProfile {
    #[serde(default, deserialize_with = "lenient::optional_whole")]
    pub age: Option<u16>,
    #[serde(default, deserialize_with = "lenient::optional_token")]
    pub gender: Option<Gender>,
    #[serde(default, alias = "weight", deserialize_with = "lenient::optional_decimal")]
    pub weight_kg: Option<f64>,
    #[serde(default, alias = "height", deserialize_with = "lenient::optional_decimal")]
    pub height_cm: Option<f64>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient::optional_decimal"
    )]
    pub height_feet: Option<f64>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient::optional_decimal"
    )]
    pub height_inches: Option<f64>,
    #[serde(default, deserialize_with = "lenient::optional_token")]
    pub blood_pressure: Option<BloodPressure>,
    #[serde(
        default,
        alias = "cholesterolLevels",
        deserialize_with = "lenient::optional_token"
    )]
    pub cholesterol: Option<Cholesterol>,
    #[serde(default, deserialize_with = "lenient::optional_token")]
    pub last_checkup: Option<LastCheckup>,
    #[serde(default, deserialize_with = "lenient::optional_token")]
    pub exercise_frequency: Option<ExerciseFrequency>,
    #[serde(default, deserialize_with = "lenient::optional_list")]
    pub exercise_types: Vec<String>,
    #[serde(default, deserialize_with = "lenient::optional_decimal")]
    pub sleep_hours: Option<f64>,
    #[serde(default, deserialize_with = "lenient::optional_token")]
    pub sleep_quality: Option<SleepQuality>,
    #[serde(default, deserialize_with = "lenient::optional_token")]
    pub diet_type: Option<DietType>,
    #[serde(default, deserialize_with = "lenient::optional_token")]
    pub water_intake: Option<WaterIntake>,
    #[serde(default, deserialize_with = "lenient::optional_token")]
    pub fast_food_frequency: Option<FastFoodFrequency>,
    #[serde(default, deserialize_with = "lenient::optional_token")]
    pub screen_time: Option<ExposureLevel>,
    #[serde(default, deserialize_with = "lenient::optional_token")]
    pub outdoor_time: Option<ExposureLevel>,
    #[serde(default, deserialize_with = "lenient::optional_token")]
    pub social_connections: Option<SocialConnections>,
    #[serde(default, deserialize_with = "lenient::optional_whole")]
    pub stress_level: Option<u16>,
    #[serde(default, deserialize_with = "lenient::optional_token")]
    pub smoking_status: Option<SmokingStatus>,
    #[serde(default, deserialize_with = "lenient::optional_token")]
    pub alcohol_consumption: Option<AlcoholConsumption>,
    #[serde(default, deserialize_with = "lenient::optional_flag")]
    pub chronic_pain: Option<bool>,
    #[serde(default, deserialize_with = "lenient::optional_whole")]
    pub pain_level: Option<u16>,
    #[serde(default, deserialize_with = "lenient::optional_token")]
    pub vaccination_status: Option<VaccinationStatus>,
    #[serde(default, deserialize_with = "lenient::optional_list")]
    pub family_history: ConditionHistory,
    #[serde(default, deserialize_with = "lenient::optional_list")]
    pub existing_conditions: ConditionHistory,
}

impl HealthProfile {
    /// Height in centimetres, preferring the metric answer over the feet/inches pair.
    pub fn resolved_height_cm(&self) -> Option<f64> {
        if let Some(height) = self.height_cm.filter(|height| *height > 0.0) {
            return Some(height);
        }

        if self.height_feet.is_none() && self.height_inches.is_none() {
            return None;
        }

        let feet = self.height_feet.unwrap_or(0.0);
        let inches = self.height_inches.unwrap_or(0.0);
        Some((feet * CM_PER_FOOT + inches * CM_PER_INCH).round()).filter(|height| *height > 0.0)
    }

    /// Body-mass index, computed once per assessment and shared by the category rules.
    pub fn bmi(&self) -> Option<f64> {
        let weight = self.weight_kg.filter(|weight| *weight > 0.0)?;
        let height_m = self.resolved_height_cm()? / 100.0;
        Some(weight / (height_m * height_m))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Gender {
    Male,
    Female,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BloodPressure {
    Low,
    Normal,
    Elevated,
    HighStage1,
    HighStage2,
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Cholesterol {
    Normal,
    Borderline,
    High,
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LastCheckup {
    #[serde(rename = "less-than-6-months")]
    LessThanSixMonths,
    #[serde(rename = "6-12-months")]
    SixToTwelveMonths,
    #[serde(rename = "1-2-years")]
    OneToTwoYears,
    #[serde(rename = "2-5-years")]
    TwoToFiveYears,
    #[serde(rename = "more-than-5-years")]
    MoreThanFiveYears,
    #[serde(rename = "never")]
    Never,
}

impl LastCheckup {
    pub const fn is_recent(self) -> bool {
        matches!(self, Self::LessThanSixMonths | Self::SixToTwelveMonths)
    }

    pub const fn is_overdue(self) -> bool {
        matches!(self, Self::MoreThanFiveYears | Self::Never)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExerciseFrequency {
    Sedentary,
    Light,
    Moderate,
    Active,
    VeryActive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SleepQuality {
    Poor,
    Fair,
    Average,
    Good,
    Excellent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DietType {
    Vegetarian,
    NonVegetarian,
    Vegan,
    Mediterranean,
    #[serde(rename = "others", alias = "other")]
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WaterIntake {
    Low,
    Moderate,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FastFoodFrequency {
    Never,
    Sometimes,
    Often,
    Frequently,
}

/// Shared scale for screen time and outdoor time answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExposureLevel {
    Minimal,
    Moderate,
    High,
    VeryHigh,
}

impl ExposureLevel {
    pub const fn is_high(self) -> bool {
        matches!(self, Self::High | Self::VeryHigh)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SocialConnections {
    Limited,
    Moderate,
    Strong,
    VeryStrong,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SmokingStatus {
    NonSmoker,
    FormerSmoker,
    Occasional,
    Regular,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AlcoholConsumption {
    None,
    Occasional,
    Moderate,
    Heavy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VaccinationStatus {
    Yes,
    Partial,
    No,
    Unknown,
}

/// Condition labels offered by the family-history and existing-condition questions.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ConditionTag {
    HeartDisease,
    Diabetes,
    Cancer,
    HighBloodPressure,
    Stroke,
    MentalHealthConditions,
    AlzheimersDementia,
    AutoimmuneDisorders,
    AsthmaCopd,
    ThyroidDisorder,
    Arthritis,
    DigestiveDisorders,
    Other(String),
}

impl ConditionTag {
    const KNOWN: [Self; 12] = [
        Self::HeartDisease,
        Self::Diabetes,
        Self::Cancer,
        Self::HighBloodPressure,
        Self::Stroke,
        Self::MentalHealthConditions,
        Self::AlzheimersDementia,
        Self::AutoimmuneDisorders,
        Self::AsthmaCopd,
        Self::ThyroidDisorder,
        Self::Arthritis,
        Self::DigestiveDisorders,
    ];

    pub fn label(&self) -> &str {
        match self {
            Self::HeartDisease => "Heart Disease",
            Self::Diabetes => "Diabetes",
            Self::Cancer => "Cancer",
            Self::HighBloodPressure => "High Blood Pressure",
            Self::Stroke => "Stroke",
            Self::MentalHealthConditions => "Mental Health Conditions",
            Self::AlzheimersDementia => "Alzheimer's/Dementia",
            Self::AutoimmuneDisorders => "Autoimmune Disorders",
            Self::AsthmaCopd => "Asthma/COPD",
            Self::ThyroidDisorder => "Thyroid Disorder",
            Self::Arthritis => "Arthritis",
            Self::DigestiveDisorders => "Digestive Disorders",
            Self::Other(label) => label,
        }
    }

    /// Parse a questionnaire label; the "none" sentinel yields `None`.
    pub fn from_label(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        let normalized = trimmed.to_ascii_lowercase();
        if normalized.is_empty()
            || normalized == "none"
            || normalized == NONE_OF_THE_ABOVE.to_ascii_lowercase()
        {
            return None;
        }

        if normalized == "hypertension" {
            return Some(Self::HighBloodPressure);
        }

        let known = Self::KNOWN
            .into_iter()
            .find(|tag| tag.label().to_ascii_lowercase() == normalized);
        Some(known.unwrap_or_else(|| Self::Other(trimmed.to_string())))
    }

    pub fn is_recognised(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

/// Multi-select answer with the "None of the above" sentinel already stripped.
///
/// `answered` records whether the respondent selected anything at all, so an explicit
/// "None of the above" can be told apart from a skipped question.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct ConditionHistory {
    tags: BTreeSet<ConditionTag>,
    answered: bool,
}

impl ConditionHistory {
    /// An explicit "None of the above" answer.
    pub fn none() -> Self {
        Self {
            tags: BTreeSet::new(),
            answered: true,
        }
    }

    pub fn from_tags<I>(tags: I) -> Self
    where
        I: IntoIterator<Item = ConditionTag>,
    {
        Self {
            tags: tags.into_iter().collect(),
            answered: true,
        }
    }

    pub fn contains(&self, tag: &ConditionTag) -> bool {
        self.tags.contains(tag)
    }

    pub fn contains_any(&self, tags: &[ConditionTag]) -> bool {
        tags.iter().any(|tag| self.contains(tag))
    }

    pub fn count_of(&self, tags: &[ConditionTag]) -> usize {
        tags.iter().filter(|tag| self.contains(tag)).count()
    }

    pub fn is_answered(&self) -> bool {
        self.answered
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ConditionTag> {
        self.tags.iter()
    }

    pub fn unrecognised(&self) -> impl Iterator<Item = &str> {
        self.tags
            .iter()
            .filter(|tag| !tag.is_recognised())
            .map(ConditionTag::label)
    }
}

impl From<Vec<String>> for ConditionHistory {
    fn from(labels: Vec<String>) -> Self {
        let answered = labels.iter().any(|label| !label.trim().is_empty());
        let tags = labels
            .iter()
            .filter_map(|label| ConditionTag::from_label(label))
            .collect();
        Self { tags, answered }
    }
}

impl From<ConditionHistory> for Vec<String> {
    fn from(history: ConditionHistory) -> Self {
        if history.tags.is_empty() {
            return if history.answered {
                vec![NONE_OF_THE_ABOVE.to_string()]
            } else {
                Vec::new()
            };
        }

        history
            .tags
            .iter()
            .map(|tag| tag.label().to_string())
            .collect()
    }
}
