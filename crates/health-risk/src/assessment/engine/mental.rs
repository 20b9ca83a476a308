use super::tally::{Filler, Tally};
use super::{CategoryRisk, RiskCategory};
use crate::assessment::domain::{
    ConditionTag, ExerciseFrequency, ExposureLevel, HealthProfile, SleepQuality,
    SocialConnections,
};
use crate::assessment::factors::{FactorKind, ImpactLabel};

const FILLERS: [Filler; 3] = [
    Filler {
        name: "Mindfulness",
        kind: FactorKind::Mindfulness,
        impact: ImpactLabel::MEDIUM_POSITIVE,
        suggestion: "Regular mindfulness practice can improve mental wellbeing",
    },
    Filler {
        name: "Social Connection",
        kind: FactorKind::SocialConnection,
        impact: ImpactLabel::LOW_POSITIVE,
        suggestion: "Continue maintaining social connections",
    },
    Filler {
        name: "Sleep",
        kind: FactorKind::Sleep,
        impact: ImpactLabel::LOW_NEGATIVE,
        suggestion: "Improve sleep quality with a consistent schedule",
    },
];

pub(super) fn score(profile: &HealthProfile) -> CategoryRisk {
    let mut tally = Tally::default();

    match profile.stress_level {
        Some(stress) if stress >= 8 => tally.record(
            30.0,
            "Stress Management",
            FactorKind::Stress,
            ImpactLabel::HIGH_NEGATIVE,
            "Your stress levels are high. Consider professional support and stress reduction techniques.",
        ),
        Some(stress) if stress >= 6 => tally.record(
            20.0,
            "Stress Management",
            FactorKind::Stress,
            ImpactLabel::MEDIUM_NEGATIVE,
            "Consider adding mindfulness practice to manage stress",
        ),
        Some(stress) if stress <= 3 => tally.note(
            "Stress Management",
            FactorKind::Stress,
            ImpactLabel::HIGH_POSITIVE,
            "Continue your effective stress management techniques",
        ),
        _ => {}
    }

    match profile.social_connections {
        Some(SocialConnections::Limited) => tally.record(
            25.0,
            "Social Connection",
            FactorKind::SocialConnection,
            ImpactLabel::HIGH_NEGATIVE,
            "Try to increase meaningful social interactions weekly",
        ),
        Some(SocialConnections::Strong | SocialConnections::VeryStrong) => tally.record(
            -10.0,
            "Social Connection",
            FactorKind::SocialConnection,
            ImpactLabel::HIGH_POSITIVE,
            "Continue maintaining your strong social connections",
        ),
        Some(SocialConnections::Moderate) => {}
        None if profile.outdoor_time == Some(ExposureLevel::Minimal) => tally.record(
            15.0,
            "Social Connection",
            FactorKind::SocialConnection,
            ImpactLabel::MEDIUM_NEGATIVE,
            "Spending more time outdoors can increase social interactions",
        ),
        None => {}
    }

    match profile.sleep_quality {
        Some(SleepQuality::Poor | SleepQuality::Fair) => tally.record(
            20.0,
            "Sleep",
            FactorKind::Sleep,
            ImpactLabel::MEDIUM_NEGATIVE,
            "Improve sleep quality with a consistent schedule",
        ),
        Some(_) => {}
        None if profile.sleep_hours.is_some_and(|hours| hours < 6.0) => tally.record(
            20.0,
            "Sleep",
            FactorKind::Sleep,
            ImpactLabel::MEDIUM_NEGATIVE,
            "Poor sleep affects mental health. Aim for 7-8 hours nightly.",
        ),
        None => {}
    }

    match profile.exercise_frequency {
        Some(ExerciseFrequency::Sedentary | ExerciseFrequency::Light) => tally.record(
            15.0,
            "Physical Activity",
            FactorKind::Exercise,
            ImpactLabel::MEDIUM_NEGATIVE,
            "Regular exercise can significantly improve mood and reduce anxiety",
        ),
        Some(ExerciseFrequency::Active | ExerciseFrequency::VeryActive) => tally.record(
            -15.0,
            "Physical Activity",
            FactorKind::Exercise,
            ImpactLabel::HIGH_POSITIVE,
            "Exercise is benefiting your mental health",
        ),
        Some(ExerciseFrequency::Moderate) | None => {}
    }

    match profile.outdoor_time {
        Some(ExposureLevel::Minimal) => tally.record(
            15.0,
            "Outdoor Time",
            FactorKind::OutdoorTime,
            ImpactLabel::MEDIUM_NEGATIVE,
            "Spending time in nature can improve mental wellbeing",
        ),
        Some(level) if level.is_high() => tally.record(
            -10.0,
            "Outdoor Time",
            FactorKind::OutdoorTime,
            ImpactLabel::MEDIUM_POSITIVE,
            "Your time outdoors benefits your mental health",
        ),
        _ => {}
    }

    if profile
        .family_history
        .contains(&ConditionTag::MentalHealthConditions)
    {
        tally.record(
            15.0,
            "Family History",
            FactorKind::FamilyHistory,
            ImpactLabel::MEDIUM_NEGATIVE,
            "With your family history, be proactive about mental health care",
        );
    }

    if profile
        .existing_conditions
        .contains(&ConditionTag::MentalHealthConditions)
    {
        tally.record(
            25.0,
            "Mental Health Condition",
            FactorKind::MentalHealth,
            ImpactLabel::HIGH_NEGATIVE,
            "Continue with your treatment plan and regular check-ins with healthcare providers",
        );
    }

    tally.finish(RiskCategory::Mental, &FILLERS)
}
