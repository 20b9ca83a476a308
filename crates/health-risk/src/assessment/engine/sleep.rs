use super::tally::{Filler, Tally};
use super::{CategoryRisk, RiskCategory};
use crate::assessment::domain::{
    AlcoholConsumption, ExerciseFrequency, ExposureLevel, HealthProfile, SleepQuality,
};
use crate::assessment::factors::{FactorKind, ImpactLabel};

const FILLERS: [Filler; 3] = [
    Filler {
        name: "Sleep Consistency",
        kind: FactorKind::Sleep,
        impact: ImpactLabel::MEDIUM_NEGATIVE,
        suggestion: "Try to go to bed at the same time each night",
    },
    Filler {
        name: "Sleep Environment",
        kind: FactorKind::Sleep,
        impact: ImpactLabel::LOW_NEGATIVE,
        suggestion: "Maintain your comfortable sleep environment",
    },
    Filler {
        name: "Screen Time",
        kind: FactorKind::ScreenTime,
        impact: ImpactLabel::LOW_NEGATIVE,
        suggestion: "Reduce screen time before bed",
    },
];

pub(super) fn score(profile: &HealthProfile) -> CategoryRisk {
    let mut tally = Tally::default();

    if let Some(hours) = profile.sleep_hours {
        if hours < 6.0 {
            tally.record(
                30.0,
                "Sleep Duration",
                FactorKind::Sleep,
                ImpactLabel::HIGH_NEGATIVE,
                format!("Aim for 7-8 hours of sleep instead of your current {hours} hours"),
            );
        } else if hours > 9.0 {
            tally.record(
                15.0,
                "Sleep Duration",
                FactorKind::Sleep,
                ImpactLabel::MEDIUM_NEGATIVE,
                "Excessive sleep can affect quality. Aim for 7-8 hours of quality sleep.",
            );
        } else if (7.0..=8.0).contains(&hours) {
            tally.note(
                "Sleep Duration",
                FactorKind::Sleep,
                ImpactLabel::HIGH_POSITIVE,
                "Your sleep duration is optimal",
            );
        }
    }

    match profile.sleep_quality {
        Some(SleepQuality::Poor) => tally.record(
            25.0,
            "Sleep Quality",
            FactorKind::Sleep,
            ImpactLabel::HIGH_NEGATIVE,
            "Create a dark, quiet, and cool sleeping environment",
        ),
        Some(SleepQuality::Fair) => tally.record(
            15.0,
            "Sleep Quality",
            FactorKind::Sleep,
            ImpactLabel::MEDIUM_NEGATIVE,
            "Establish a consistent pre-sleep routine to improve sleep quality",
        ),
        Some(SleepQuality::Good | SleepQuality::Excellent) => tally.note(
            "Sleep Quality",
            FactorKind::Sleep,
            ImpactLabel::HIGH_POSITIVE,
            "Continue maintaining your good sleep environment",
        ),
        Some(SleepQuality::Average) | None => {}
    }

    match profile.screen_time {
        Some(level) if level.is_high() => tally.record(
            20.0,
            "Screen Time",
            FactorKind::ScreenTime,
            ImpactLabel::HIGH_NEGATIVE,
            "Avoid screens 1-2 hours before bedtime",
        ),
        Some(ExposureLevel::Moderate) => tally.record(
            10.0,
            "Screen Time",
            FactorKind::ScreenTime,
            ImpactLabel::MEDIUM_NEGATIVE,
            "Try to reduce screen time, especially before bed",
        ),
        _ => {}
    }

    match profile.stress_level {
        Some(stress) if stress >= 7 => tally.record(
            20.0,
            "Stress",
            FactorKind::Stress,
            ImpactLabel::MEDIUM_NEGATIVE,
            "Try meditation or deep breathing before sleep",
        ),
        Some(stress) if stress >= 5 => tally.record(
            10.0,
            "Stress",
            FactorKind::Stress,
            ImpactLabel::LOW_NEGATIVE,
            "Consider relaxation techniques to improve sleep",
        ),
        _ => {}
    }

    if matches!(
        profile.alcohol_consumption,
        Some(AlcoholConsumption::Heavy | AlcoholConsumption::Moderate)
    ) {
        tally.record(
            15.0,
            "Alcohol Consumption",
            FactorKind::Alcohol,
            ImpactLabel::MEDIUM_NEGATIVE,
            "Alcohol disrupts sleep quality. Try to avoid alcohol close to bedtime.",
        );
    }

    if profile
        .exercise_frequency
        .is_some_and(|frequency| frequency != ExerciseFrequency::Sedentary)
    {
        tally.note(
            "Exercise Timing",
            FactorKind::Exercise,
            ImpactLabel::LOW_NEGATIVE,
            "Avoid intense exercise 3 hours before bed",
        );
    }

    tally.finish(RiskCategory::Sleep, &FILLERS)
}
