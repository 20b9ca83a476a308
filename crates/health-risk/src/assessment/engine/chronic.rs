use super::tally::{Filler, Tally};
use super::{CategoryRisk, RiskCategory};
use crate::assessment::domain::{
    ConditionTag, DietType, ExerciseFrequency, FastFoodFrequency, HealthProfile, SmokingStatus,
};
use crate::assessment::factors::{FactorKind, ImpactLabel};

const FILLERS: [Filler; 3] = [
    Filler {
        name: "Stress Management",
        kind: FactorKind::Stress,
        impact: ImpactLabel::MEDIUM_NEGATIVE,
        suggestion: "Chronic stress contributes to many chronic diseases",
    },
    Filler {
        name: "Diet Quality",
        kind: FactorKind::Diet,
        impact: ImpactLabel::LOW_NEGATIVE,
        suggestion: "Reducing processed foods can lower chronic disease risk",
    },
    Filler {
        name: "Physical Activity",
        kind: FactorKind::Exercise,
        impact: ImpactLabel::LOW_NEGATIVE,
        suggestion: "Regular physical activity reduces risk of many chronic diseases",
    },
];

const SCREENED_CONDITIONS: [ConditionTag; 4] = [
    ConditionTag::HeartDisease,
    ConditionTag::Diabetes,
    ConditionTag::Cancer,
    ConditionTag::HighBloodPressure,
];

pub(super) fn score(profile: &HealthProfile, bmi: Option<f64>) -> CategoryRisk {
    let mut tally = Tally::default();

    match profile.age {
        Some(age) if age >= 60 => tally.record(
            25.0,
            "Age",
            FactorKind::Age,
            ImpactLabel::HIGH_NEGATIVE,
            "Regular preventive screenings are essential at your age",
        ),
        Some(age) if age >= 45 => tally.record(
            15.0,
            "Age",
            FactorKind::Age,
            ImpactLabel::MEDIUM_NEGATIVE,
            "Begin regular screenings for common chronic conditions",
        ),
        _ => {}
    }

    match profile.family_history.count_of(&SCREENED_CONDITIONS) {
        0 => {}
        1 => tally.record(
            15.0,
            "Family History",
            FactorKind::FamilyHistory,
            ImpactLabel::MEDIUM_NEGATIVE,
            "Your family history increases risk for certain conditions. Regular check-ups are important.",
        ),
        _ => tally.record(
            25.0,
            "Family History",
            FactorKind::FamilyHistory,
            ImpactLabel::HIGH_NEGATIVE,
            "With your family history, regular preventive screenings are essential",
        ),
    }

    match bmi {
        Some(bmi) if bmi >= 30.0 => tally.record(
            25.0,
            "Weight Management",
            FactorKind::Weight,
            ImpactLabel::MEDIUM_NEGATIVE,
            "Maintaining a healthy weight reduces risk of multiple chronic conditions",
        ),
        Some(bmi) if bmi >= 25.0 => tally.record(
            15.0,
            "Weight Management",
            FactorKind::Weight,
            ImpactLabel::LOW_NEGATIVE,
            "Even modest weight loss can reduce chronic disease risk",
        ),
        _ => {}
    }

    if profile.diet_type.is_some() {
        if matches!(
            profile.fast_food_frequency,
            Some(FastFoodFrequency::Frequently | FastFoodFrequency::Often)
        ) {
            tally.record(
                20.0,
                "Diet Quality",
                FactorKind::Diet,
                ImpactLabel::MEDIUM_NEGATIVE,
                "Reducing processed foods can lower chronic disease risk",
            );
        } else if profile.diet_type == Some(DietType::Mediterranean) {
            tally.record(
                -15.0,
                "Diet Quality",
                FactorKind::Diet,
                ImpactLabel::HIGH_POSITIVE,
                "Your diet helps protect against many chronic diseases",
            );
        }
    }

    match profile.exercise_frequency {
        Some(ExerciseFrequency::Sedentary | ExerciseFrequency::Light) => tally.record(
            20.0,
            "Physical Activity",
            FactorKind::Exercise,
            ImpactLabel::MEDIUM_NEGATIVE,
            "Regular physical activity reduces risk of many chronic diseases",
        ),
        Some(ExerciseFrequency::Moderate | ExerciseFrequency::Active) => tally.record(
            -10.0,
            "Physical Activity",
            FactorKind::Exercise,
            ImpactLabel::MEDIUM_POSITIVE,
            "Your activity level helps prevent chronic conditions",
        ),
        Some(ExerciseFrequency::VeryActive) | None => {}
    }

    match profile.smoking_status {
        Some(SmokingStatus::Regular) => tally.record(
            30.0,
            "Smoking",
            FactorKind::Smoking,
            ImpactLabel::HIGH_NEGATIVE,
            "Smoking increases risk for numerous chronic diseases",
        ),
        Some(SmokingStatus::Occasional) => tally.record(
            15.0,
            "Smoking",
            FactorKind::Smoking,
            ImpactLabel::MEDIUM_NEGATIVE,
            "Even occasional smoking increases chronic disease risk",
        ),
        _ => {}
    }

    match profile.last_checkup {
        Some(checkup) if checkup.is_recent() => tally.record(
            -10.0,
            "Regular Checkups",
            FactorKind::Checkup,
            ImpactLabel::HIGH_POSITIVE,
            "Continue with regular health screenings for early detection",
        ),
        Some(checkup) if checkup.is_overdue() => tally.record(
            15.0,
            "Regular Checkups",
            FactorKind::Checkup,
            ImpactLabel::MEDIUM_NEGATIVE,
            "Schedule a comprehensive health checkup soon",
        ),
        _ => {}
    }

    tally.finish(RiskCategory::Chronic, &FILLERS)
}
