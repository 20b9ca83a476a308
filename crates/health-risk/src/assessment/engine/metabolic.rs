use super::tally::{Filler, Tally};
use super::{CategoryRisk, RiskCategory};
use crate::assessment::domain::{
    ConditionTag, DietType, ExerciseFrequency, FastFoodFrequency, HealthProfile, WaterIntake,
};
use crate::assessment::factors::{FactorKind, ImpactLabel};

const FILLERS: [Filler; 3] = [
    Filler {
        name: "Fast Food",
        kind: FactorKind::Diet,
        impact: ImpactLabel::MEDIUM_NEGATIVE,
        suggestion: "Try to limit fast food to once per week",
    },
    Filler {
        name: "Diet",
        kind: FactorKind::Diet,
        impact: ImpactLabel::LOW_NEGATIVE,
        suggestion: "Reduce processed carbohydrates",
    },
    Filler {
        name: "Exercise",
        kind: FactorKind::Exercise,
        impact: ImpactLabel::LOW_NEGATIVE,
        suggestion: "Add 2 more days of strength training",
    },
];

pub(super) fn score(profile: &HealthProfile, bmi: Option<f64>) -> CategoryRisk {
    let mut tally = Tally::default();

    if let Some(bmi) = bmi {
        if bmi >= 30.0 {
            tally.record(
                30.0,
                "Weight",
                FactorKind::Weight,
                ImpactLabel::HIGH_NEGATIVE,
                "Obesity significantly increases metabolic risk. A 5-10% weight reduction would be beneficial.",
            );
        } else if bmi >= 25.0 {
            tally.record(
                20.0,
                "Weight",
                FactorKind::Weight,
                ImpactLabel::MEDIUM_NEGATIVE,
                "Being overweight increases metabolic risk. Consider a balanced diet and regular exercise.",
            );
        } else if bmi < 18.5 {
            tally.record(
                10.0,
                "Weight",
                FactorKind::Weight,
                ImpactLabel::LOW_NEGATIVE,
                "Being underweight may affect metabolic health. Consider a nutrition plan to reach a healthy weight.",
            );
        }
    }

    match profile.diet_type {
        None => {}
        Some(DietType::Mediterranean | DietType::Vegetarian) => tally.record(
            -10.0,
            "Diet",
            FactorKind::Diet,
            ImpactLabel::HIGH_POSITIVE,
            "Your diet choice is beneficial for metabolic health",
        ),
        Some(_)
            if matches!(
                profile.fast_food_frequency,
                Some(FastFoodFrequency::Frequently | FastFoodFrequency::Often)
            ) =>
        {
            tally.record(
                20.0,
                "Diet",
                FactorKind::Diet,
                ImpactLabel::MEDIUM_NEGATIVE,
                "Reduce processed carbohydrates and fast food consumption",
            )
        }
        Some(_) => {}
    }

    match profile.exercise_frequency {
        Some(ExerciseFrequency::Sedentary) => tally.record(
            25.0,
            "Exercise",
            FactorKind::Exercise,
            ImpactLabel::HIGH_NEGATIVE,
            "Regular physical activity is essential for metabolic health. Start with short daily walks.",
        ),
        Some(ExerciseFrequency::Light) => tally.record(
            15.0,
            "Exercise",
            FactorKind::Exercise,
            ImpactLabel::MEDIUM_NEGATIVE,
            "Increase your physical activity to at least 150 minutes per week",
        ),
        Some(ExerciseFrequency::Moderate) => tally.record(
            5.0,
            "Exercise",
            FactorKind::Exercise,
            ImpactLabel::LOW_NEGATIVE,
            "Add 2 more days of strength training to your routine",
        ),
        Some(ExerciseFrequency::Active | ExerciseFrequency::VeryActive) => tally.note(
            "Exercise",
            FactorKind::Exercise,
            ImpactLabel::MEDIUM_POSITIVE,
            "Your activity level benefits your metabolic health",
        ),
        None => {}
    }

    match profile.water_intake {
        Some(WaterIntake::Low) => tally.record(
            10.0,
            "Hydration",
            FactorKind::Hydration,
            ImpactLabel::MEDIUM_NEGATIVE,
            "Increase water intake to at least 8 glasses daily",
        ),
        Some(WaterIntake::Moderate | WaterIntake::High) => tally.note(
            "Hydration",
            FactorKind::Hydration,
            ImpactLabel::MEDIUM_POSITIVE,
            "Continue with good hydration habits",
        ),
        None => {}
    }

    if profile.family_history.contains(&ConditionTag::Diabetes) {
        tally.record(
            15.0,
            "Family History",
            FactorKind::FamilyHistory,
            ImpactLabel::MEDIUM_NEGATIVE,
            "With your family history of diabetes, regular metabolic screenings are important",
        );
    }

    if profile.existing_conditions.contains(&ConditionTag::Diabetes) {
        tally.record(
            30.0,
            "Diabetes",
            FactorKind::MedicalCondition,
            ImpactLabel::HIGH_NEGATIVE,
            "Continue following your diabetes management plan and regular check-ups",
        );
    }

    tally.finish(RiskCategory::Metabolic, &FILLERS)
}
