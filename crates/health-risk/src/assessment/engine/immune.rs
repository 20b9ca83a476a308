use super::tally::{Filler, Tally};
use super::{CategoryRisk, RiskCategory};
use crate::assessment::domain::{
    AlcoholConsumption, DietType, ExerciseFrequency, FastFoodFrequency, HealthProfile,
    SleepQuality, SmokingStatus, VaccinationStatus,
};
use crate::assessment::factors::{FactorKind, ImpactLabel};

const FILLERS: [Filler; 3] = [
    Filler {
        name: "Hydration",
        kind: FactorKind::Hydration,
        impact: ImpactLabel::MEDIUM_POSITIVE,
        suggestion: "Staying well-hydrated supports immune function",
    },
    Filler {
        name: "Nutrition",
        kind: FactorKind::Diet,
        impact: ImpactLabel::LOW_POSITIVE,
        suggestion: "Continue consuming a variety of fruits and vegetables rich in antioxidants",
    },
    Filler {
        name: "Physical Activity",
        kind: FactorKind::Exercise,
        impact: ImpactLabel::LOW_NEGATIVE,
        suggestion: "Regular moderate exercise supports immune health",
    },
];

pub(super) fn score(profile: &HealthProfile) -> CategoryRisk {
    let mut tally = Tally::default();

    match profile.vaccination_status {
        Some(VaccinationStatus::Yes) => tally.record(
            -15.0,
            "Vaccination",
            FactorKind::Vaccination,
            ImpactLabel::HIGH_POSITIVE,
            "Staying up-to-date with vaccinations strengthens your immune protection",
        ),
        Some(VaccinationStatus::No) => tally.record(
            20.0,
            "Vaccination",
            FactorKind::Vaccination,
            ImpactLabel::HIGH_NEGATIVE,
            "Consider updating your vaccinations to improve immune protection",
        ),
        Some(VaccinationStatus::Partial) => tally.record(
            10.0,
            "Vaccination",
            FactorKind::Vaccination,
            ImpactLabel::MEDIUM_NEGATIVE,
            "Complete your vaccination schedule for better immune protection",
        ),
        Some(VaccinationStatus::Unknown) | None => {}
    }

    match profile.sleep_quality {
        Some(SleepQuality::Poor) => tally.record(
            15.0,
            "Sleep Quality",
            FactorKind::Sleep,
            ImpactLabel::MEDIUM_NEGATIVE,
            "Poor sleep can weaken immune function; aim for 7-8 hours of quality sleep",
        ),
        Some(_) => {}
        None if profile.sleep_hours.is_some_and(|hours| hours < 6.0) => tally.record(
            15.0,
            "Sleep Duration",
            FactorKind::Sleep,
            ImpactLabel::MEDIUM_NEGATIVE,
            "Insufficient sleep weakens immunity. Aim for 7-8 hours nightly.",
        ),
        None => {}
    }

    if profile.stress_level.is_some_and(|stress| stress >= 7) {
        tally.record(
            20.0,
            "Stress Management",
            FactorKind::Stress,
            ImpactLabel::MEDIUM_NEGATIVE,
            "Chronic stress suppresses immune function; consider stress reduction techniques",
        );
    }

    // Fast food only counts when the diet question was skipped.
    match profile.diet_type {
        Some(DietType::Mediterranean | DietType::Vegetarian) => tally.record(
            -10.0,
            "Nutrition",
            FactorKind::Diet,
            ImpactLabel::MEDIUM_POSITIVE,
            "Continue consuming a variety of fruits and vegetables rich in antioxidants",
        ),
        Some(_) => {}
        None if profile.fast_food_frequency == Some(FastFoodFrequency::Frequently) => {
            tally.record(
                15.0,
                "Nutrition",
                FactorKind::Diet,
                ImpactLabel::MEDIUM_NEGATIVE,
                "A diet high in processed foods may weaken immunity. Increase fruits and vegetables.",
            )
        }
        None => {}
    }

    match profile.exercise_frequency {
        Some(ExerciseFrequency::Sedentary) => tally.record(
            15.0,
            "Physical Activity",
            FactorKind::Exercise,
            ImpactLabel::MEDIUM_NEGATIVE,
            "Regular moderate exercise supports immune health",
        ),
        Some(ExerciseFrequency::Moderate | ExerciseFrequency::Active) => tally.record(
            -10.0,
            "Physical Activity",
            FactorKind::Exercise,
            ImpactLabel::MEDIUM_POSITIVE,
            "Your exercise routine supports immune function",
        ),
        Some(ExerciseFrequency::VeryActive) => tally.record(
            5.0,
            "Physical Activity",
            FactorKind::Exercise,
            ImpactLabel::LOW_NEGATIVE,
            "Very intense exercise may temporarily suppress immunity. Ensure adequate recovery.",
        ),
        Some(ExerciseFrequency::Light) | None => {}
    }

    if matches!(
        profile.smoking_status,
        Some(SmokingStatus::Regular | SmokingStatus::Occasional)
    ) {
        tally.record(
            20.0,
            "Smoking",
            FactorKind::Smoking,
            ImpactLabel::HIGH_NEGATIVE,
            "Smoking weakens immune function and lung defenses",
        );
    }

    if profile.alcohol_consumption == Some(AlcoholConsumption::Heavy) {
        tally.record(
            20.0,
            "Alcohol Consumption",
            FactorKind::Alcohol,
            ImpactLabel::HIGH_NEGATIVE,
            "Excessive alcohol weakens immune function",
        );
    }

    tally.finish(RiskCategory::Immune, &FILLERS)
}
