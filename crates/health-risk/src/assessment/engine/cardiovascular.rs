use super::tally::{Filler, Tally};
use super::{CategoryRisk, RiskCategory};
use crate::assessment::domain::{
    BloodPressure, ConditionTag, DietType, ExerciseFrequency, FastFoodFrequency, HealthProfile,
    SmokingStatus,
};
use crate::assessment::factors::{FactorKind, ImpactLabel};

const FILLERS: [Filler; 3] = [
    Filler {
        name: "Sleep",
        kind: FactorKind::Sleep,
        impact: ImpactLabel::MEDIUM_NEGATIVE,
        suggestion: "Poor sleep quality can affect heart health. Aim for 7-8 hours of quality sleep.",
    },
    Filler {
        name: "Regular Checkups",
        kind: FactorKind::Checkup,
        impact: ImpactLabel::LOW_NEGATIVE,
        suggestion: "Regular cardiovascular checkups are recommended",
    },
    Filler {
        name: "Diet",
        kind: FactorKind::Diet,
        impact: ImpactLabel::LOW_NEGATIVE,
        suggestion: "Consider reducing sodium intake",
    },
];

const HEART_CONDITIONS: [ConditionTag; 3] = [
    ConditionTag::HeartDisease,
    ConditionTag::HighBloodPressure,
    ConditionTag::Stroke,
];

pub(super) fn score(profile: &HealthProfile, bmi: Option<f64>) -> CategoryRisk {
    let mut tally = Tally::default();

    if let Some(age) = profile.age {
        let age = f64::from(age);
        tally.adjust(((age - 30.0).max(0.0) * 0.5).min(30.0));
        if age > 50.0 {
            tally.note(
                "Age",
                FactorKind::Age,
                ImpactLabel::MEDIUM_NEGATIVE,
                "Regular cardiovascular checkups are recommended for your age group",
            );
        }
    }

    if let Some(bmi) = bmi {
        if bmi < 18.5 {
            tally.record(
                10.0,
                "Weight",
                FactorKind::Weight,
                ImpactLabel::MEDIUM_NEGATIVE,
                "Being underweight may affect heart health. Consider a nutrition plan to reach a healthy weight.",
            );
        } else if bmi >= 30.0 {
            tally.record(
                25.0,
                "Weight",
                FactorKind::Weight,
                ImpactLabel::HIGH_NEGATIVE,
                "Obesity significantly increases cardiovascular risk. Consult a healthcare provider about weight management.",
            );
        } else if bmi >= 25.0 {
            tally.record(
                15.0,
                "Weight",
                FactorKind::Weight,
                ImpactLabel::MEDIUM_NEGATIVE,
                "Being overweight increases cardiovascular risk. Aim for a 5-10% weight reduction.",
            );
        }
    }

    match profile.exercise_frequency {
        Some(ExerciseFrequency::Sedentary | ExerciseFrequency::Light) => tally.record(
            20.0,
            "Exercise",
            FactorKind::Exercise,
            ImpactLabel::HIGH_NEGATIVE,
            "Aim for at least 150 minutes of moderate aerobic activity weekly",
        ),
        Some(ExerciseFrequency::Moderate) => tally.record(
            5.0,
            "Exercise",
            FactorKind::Exercise,
            ImpactLabel::LOW_NEGATIVE,
            "Consider adding more variety to your exercise routine",
        ),
        Some(ExerciseFrequency::Active | ExerciseFrequency::VeryActive) => tally.note(
            "Exercise",
            FactorKind::Exercise,
            ImpactLabel::HIGH_POSITIVE,
            "Continue your regular exercise routine",
        ),
        None => {}
    }

    match profile.blood_pressure {
        Some(BloodPressure::HighStage1 | BloodPressure::HighStage2) => tally.record(
            25.0,
            "Blood Pressure",
            FactorKind::BloodPressure,
            ImpactLabel::HIGH_NEGATIVE,
            "Consult with a healthcare provider about managing your blood pressure",
        ),
        Some(BloodPressure::Elevated) => tally.record(
            15.0,
            "Blood Pressure",
            FactorKind::BloodPressure,
            ImpactLabel::MEDIUM_NEGATIVE,
            "Monitor your blood pressure regularly and consider dietary changes",
        ),
        Some(BloodPressure::Normal) => tally.note(
            "Blood Pressure",
            FactorKind::BloodPressure,
            ImpactLabel::HIGH_POSITIVE,
            "Continue maintaining healthy blood pressure levels",
        ),
        Some(BloodPressure::Low | BloodPressure::Unknown) | None => {}
    }

    match profile.smoking_status {
        Some(SmokingStatus::Regular) => tally.record(
            30.0,
            "Smoking",
            FactorKind::Smoking,
            ImpactLabel::HIGH_NEGATIVE,
            "Quitting smoking is the single most important step for heart health",
        ),
        Some(SmokingStatus::Occasional) => tally.record(
            15.0,
            "Smoking",
            FactorKind::Smoking,
            ImpactLabel::MEDIUM_NEGATIVE,
            "Even occasional smoking increases cardiovascular risk. Consider quitting completely.",
        ),
        Some(SmokingStatus::FormerSmoker) => tally.record(
            5.0,
            "Smoking History",
            FactorKind::Smoking,
            ImpactLabel::LOW_NEGATIVE,
            "Your risk decreases the longer you stay smoke-free",
        ),
        Some(SmokingStatus::NonSmoker) | None => {}
    }

    if profile.family_history.contains_any(&HEART_CONDITIONS) {
        tally.record(
            15.0,
            "Family History",
            FactorKind::FamilyHistory,
            ImpactLabel::MEDIUM_NEGATIVE,
            "Given your family history, regular cardiovascular checkups are recommended",
        );
    }

    match profile.diet_type {
        None => {}
        Some(DietType::Mediterranean) => tally.record(
            -10.0,
            "Diet",
            FactorKind::Diet,
            ImpactLabel::HIGH_POSITIVE,
            "The Mediterranean diet is excellent for heart health",
        ),
        Some(_) if profile.fast_food_frequency == Some(FastFoodFrequency::Frequently) => {
            tally.record(
                15.0,
                "Diet",
                FactorKind::Diet,
                ImpactLabel::MEDIUM_NEGATIVE,
                "Reducing fast food consumption can improve heart health",
            )
        }
        Some(_) => {}
    }

    tally.finish(RiskCategory::Cardiovascular, &FILLERS)
}
