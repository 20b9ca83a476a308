use std::fmt;

use super::domain::{ConditionHistory, HealthProfile};

/// Validation errors raised before a profile reaches the engine.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum IntakeViolation {
    #[error("required field `{field}` is missing")]
    MissingField { field: &'static str },
    #[error("field `{field}` must be between {min} and {max} (found {found})")]
    OutOfRange {
        field: &'static str,
        min: f64,
        max: f64,
        found: f64,
    },
    #[error("pain level is required when chronic pain is reported")]
    MissingPainLevel,
    #[error("field `{field}` needs at least one selection")]
    EmptySelection { field: &'static str },
}

/// Inclusive bounds for one numeric answer.
#[derive(Debug, Clone, Copy)]
struct FieldBounds {
    field: &'static str,
    min: f64,
    max: f64,
}

impl FieldBounds {
    const fn new(field: &'static str, min: f64, max: f64) -> Self {
        Self { field, min, max }
    }

    fn check(self, value: Option<f64>) -> Result<(), IntakeViolation> {
        match value {
            Some(found) if found < self.min || found > self.max => {
                Err(IntakeViolation::OutOfRange {
                    field: self.field,
                    min: self.min,
                    max: self.max,
                    found,
                })
            }
            _ => Ok(()),
        }
    }
}

const AGE: FieldBounds = FieldBounds::new("age", 0.0, 114.0);
const WEIGHT: FieldBounds = FieldBounds::new("weightKg", 2.0, 250.0);
const HEIGHT: FieldBounds = FieldBounds::new("heightCm", 46.0, 259.0);
const SLEEP_HOURS: FieldBounds = FieldBounds::new("sleepHours", 4.0, 15.0);
const STRESS: FieldBounds = FieldBounds::new("stressLevel", 1.0, 10.0);
const PAIN: FieldBounds = FieldBounds::new("painLevel", 1.0, 10.0);

/// Which answers the guard insists on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntakePolicy {
    require_complete: bool,
}

impl IntakePolicy {
    /// Demographics only; every lifestyle answer may be skipped.
    pub const fn lenient() -> Self {
        Self {
            require_complete: false,
        }
    }

    /// Every question the wizard marks as required must be answered.
    pub const fn complete() -> Self {
        Self {
            require_complete: true,
        }
    }

    pub const fn requires_complete(self) -> bool {
        self.require_complete
    }
}

impl Default for IntakePolicy {
    fn default() -> Self {
        Self::lenient()
    }
}

impl fmt::Display for IntakePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.require_complete {
            f.write_str("complete")
        } else {
            f.write_str("lenient")
        }
    }
}

/// Guard enforcing the questionnaire contract on inbound profiles.
#[derive(Debug, Clone, Default)]
pub struct IntakeGuard {
    policy: IntakePolicy,
}

impl IntakeGuard {
    pub fn with_policy(policy: IntakePolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> IntakePolicy {
        self.policy
    }

    pub fn check(&self, profile: &HealthProfile) -> Result<(), IntakeViolation> {
        require("age", profile.age.is_some())?;
        require("gender", profile.gender.is_some())?;
        require("weightKg", profile.weight_kg.is_some())?;
        let height = profile.resolved_height_cm();
        require("heightCm", height.is_some())?;

        AGE.check(profile.age.map(f64::from))?;
        WEIGHT.check(profile.weight_kg)?;
        HEIGHT.check(height)?;
        SLEEP_HOURS.check(profile.sleep_hours)?;
        STRESS.check(profile.stress_level.map(f64::from))?;

        if profile.chronic_pain == Some(true) && profile.pain_level.is_none() {
            return Err(IntakeViolation::MissingPainLevel);
        }
        PAIN.check(profile.pain_level.map(f64::from))?;

        if self.policy.requires_complete() {
            check_complete(profile)?;
        }

        Ok(())
    }
}

fn require(field: &'static str, present: bool) -> Result<(), IntakeViolation> {
    if present {
        Ok(())
    } else {
        Err(IntakeViolation::MissingField { field })
    }
}

fn require_selection(field: &'static str, history: &ConditionHistory) -> Result<(), IntakeViolation> {
    if history.is_answered() {
        Ok(())
    } else {
        Err(IntakeViolation::EmptySelection { field })
    }
}

fn check_complete(profile: &HealthProfile) -> Result<(), IntakeViolation> {
    require("bloodPressure", profile.blood_pressure.is_some())?;
    require("cholesterol", profile.cholesterol.is_some())?;
    require("lastCheckup", profile.last_checkup.is_some())?;
    require("exerciseFrequency", profile.exercise_frequency.is_some())?;
    require("sleepHours", profile.sleep_hours.is_some())?;
    require("sleepQuality", profile.sleep_quality.is_some())?;
    require("dietType", profile.diet_type.is_some())?;
    require("waterIntake", profile.water_intake.is_some())?;
    require("fastFoodFrequency", profile.fast_food_frequency.is_some())?;
    require("screenTime", profile.screen_time.is_some())?;
    require("outdoorTime", profile.outdoor_time.is_some())?;
    require("stressLevel", profile.stress_level.is_some())?;
    require("smokingStatus", profile.smoking_status.is_some())?;
    require("alcoholConsumption", profile.alcohol_consumption.is_some())?;
    require("chronicPain", profile.chronic_pain.is_some())?;
    require("vaccinationStatus", profile.vaccination_status.is_some())?;
    require_selection("familyHistory", &profile.family_history)?;
    require_selection("existingConditions", &profile.existing_conditions)?;
    Ok(())
}
