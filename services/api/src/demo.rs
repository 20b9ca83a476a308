use clap::{Args, ValueEnum};
use health_risk::assessment::{
    prioritize, render_text, share_text, write_csv, ActionPlan, AlcoholConsumption,
    AssessmentResponse, BloodPressure, Cholesterol, ConditionHistory, ConditionTag, DietType,
    ExerciseFrequency, ExposureLevel, FastFoodFrequency, Gender, HealthProfile, IntakeGuard,
    IntakePolicy, LastCheckup, PrioritizedAction, RiskAssessment, RiskEngine, SleepQuality,
    SmokingStatus, SocialConnections, VaccinationStatus, WaterIntake,
};
use health_risk::error::AppError;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub(crate) enum ReportFormat {
    /// Plain-text report matching the downloadable file
    #[default]
    Text,
    /// Assessment and action plan as JSON
    Json,
    /// One CSV row per risk factor
    Csv,
}

#[derive(Args, Debug)]
pub(crate) struct AssessArgs {
    /// Path to a questionnaire JSON document (wizard field names)
    #[arg(long)]
    pub(crate) profile: PathBuf,
    /// Output format written to stdout
    #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
    pub(crate) format: ReportFormat,
    /// Require every questionnaire answer instead of demographics only
    #[arg(long)]
    pub(crate) strict: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Skip the prioritised action plans in the demo output.
    #[arg(long)]
    pub(crate) skip_plan: bool,
}

pub(crate) fn run_assess(args: AssessArgs) -> Result<(), AppError> {
    let AssessArgs {
        profile,
        format,
        strict,
    } = args;

    let raw = std::fs::read_to_string(&profile)?;
    let profile: HealthProfile = serde_json::from_str(&raw)?;
    let policy = if strict {
        IntakePolicy::complete()
    } else {
        IntakePolicy::lenient()
    };
    IntakeGuard::with_policy(policy).check(&profile)?;

    let assessment = RiskEngine::new().assess(&profile);
    print!("{}", render(assessment, format)?);
    Ok(())
}

pub(crate) fn render(assessment: RiskAssessment, format: ReportFormat) -> Result<String, AppError> {
    match format {
        ReportFormat::Text => Ok(format!("{}\n", render_text(&assessment))),
        ReportFormat::Json => {
            let response = AssessmentResponse::preview(assessment);
            let mut body = serde_json::to_string_pretty(&response)
                .map_err(|err| AppError::Io(err.into()))?;
            body.push('\n');
            Ok(body)
        }
        ReportFormat::Csv => {
            let mut buffer = Vec::new();
            write_csv(&assessment, &mut buffer)?;
            Ok(String::from_utf8_lossy(&buffer).into_owned())
        }
    }
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let engine = RiskEngine::new();
    let guard = IntakeGuard::with_policy(IntakePolicy::lenient());

    println!("Health risk prediction demo");
    for (label, profile) in [
        ("High-risk questionnaire", demo_high_risk_profile()),
        ("Low-risk questionnaire", demo_low_risk_profile()),
    ] {
        if let Err(err) = guard.check(&profile) {
            println!("\n{label}: rejected ({err})");
            continue;
        }

        let assessment = engine.assess(&profile);
        render_assessment(label, &assessment);

        if !args.skip_plan {
            render_action_plan(&prioritize(&assessment));
        }
        println!("  Share: {}", share_text(&assessment));
    }

    Ok(())
}

fn render_assessment(label: &str, assessment: &RiskAssessment) {
    println!(
        "\n{label}: overall {}% ({})",
        assessment.overall_score,
        assessment.overall_level()
    );
    for risk in &assessment.categories {
        println!(
            "- {:<15} {:>3}% | {}",
            risk.category.label(),
            risk.score,
            risk.level()
        );
        for factor in &risk.factors {
            println!("    * {} [{}]: {}", factor.name, factor.impact, factor.suggestion);
        }
    }
}

fn render_action_plan(plan: &ActionPlan) {
    if plan.is_empty() {
        println!("  Action plan: nothing to prioritise");
        return;
    }

    for (heading, actions) in [
        ("Immediate", &plan.immediate),
        ("Short term", &plan.short_term),
        ("Maintenance", &plan.maintenance),
    ] {
        if actions.is_empty() {
            continue;
        }
        println!("  {heading}:");
        for PrioritizedAction { category, factor } in actions.iter() {
            println!(
                "    - {} / {}: {}",
                category.label(),
                factor.name,
                factor.suggestion
            );
        }
    }
}

fn demo_high_risk_profile() -> HealthProfile {
    HealthProfile {
        age: Some(58),
        gender: Some(Gender::Male),
        weight_kg: Some(102.0),
        height_cm: Some(178.0),
        exercise_frequency: Some(ExerciseFrequency::Sedentary),
        sleep_hours: Some(5.5),
        sleep_quality: Some(SleepQuality::Poor),
        diet_type: Some(DietType::NonVegetarian),
        water_intake: Some(WaterIntake::Low),
        fast_food_frequency: Some(FastFoodFrequency::Often),
        screen_time: Some(ExposureLevel::VeryHigh),
        outdoor_time: Some(ExposureLevel::Minimal),
        social_connections: Some(SocialConnections::Limited),
        blood_pressure: Some(BloodPressure::HighStage1),
        cholesterol: Some(Cholesterol::Borderline),
        smoking_status: Some(SmokingStatus::Regular),
        alcohol_consumption: Some(AlcoholConsumption::Heavy),
        stress_level: Some(8),
        family_history: ConditionHistory::from_tags([
            ConditionTag::HeartDisease,
            ConditionTag::HighBloodPressure,
        ]),
        existing_conditions: ConditionHistory::from_tags([ConditionTag::Diabetes]),
        vaccination_status: Some(VaccinationStatus::Partial),
        last_checkup: Some(LastCheckup::TwoToFiveYears),
        ..HealthProfile::default()
    }
}

fn demo_low_risk_profile() -> HealthProfile {
    HealthProfile {
        age: Some(29),
        gender: Some(Gender::Female),
        weight_kg: Some(61.0),
        height_cm: Some(168.0),
        exercise_frequency: Some(ExerciseFrequency::Active),
        sleep_hours: Some(8.0),
        sleep_quality: Some(SleepQuality::Good),
        diet_type: Some(DietType::Mediterranean),
        water_intake: Some(WaterIntake::High),
        fast_food_frequency: Some(FastFoodFrequency::Never),
        screen_time: Some(ExposureLevel::Moderate),
        outdoor_time: Some(ExposureLevel::High),
        social_connections: Some(SocialConnections::Strong),
        blood_pressure: Some(BloodPressure::Normal),
        cholesterol: Some(Cholesterol::Normal),
        smoking_status: Some(SmokingStatus::NonSmoker),
        alcohol_consumption: Some(AlcoholConsumption::Occasional),
        stress_level: Some(3),
        family_history: ConditionHistory::none(),
        existing_conditions: ConditionHistory::none(),
        vaccination_status: Some(VaccinationStatus::Yes),
        last_checkup: Some(LastCheckup::LessThanSixMonths),
        chronic_pain: Some(false),
        ..HealthProfile::default()
    }
}
