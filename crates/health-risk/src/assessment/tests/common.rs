use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::response::Response;
use serde_json::{json, Value};

use crate::assessment::domain::{
    AlcoholConsumption, BloodPressure, Cholesterol, ConditionHistory, ConditionTag, DietType,
    ExerciseFrequency, ExposureLevel, FastFoodFrequency, Gender, HealthProfile, LastCheckup,
    SleepQuality, SmokingStatus, VaccinationStatus, WaterIntake,
};
use crate::assessment::repository::{
    AssessmentRecord, ProfileId, ProfileRepository, RepositoryError,
};
use crate::assessment::{assessment_router, AssessmentService, IntakePolicy};

/// Demographics only; every lifestyle answer skipped.
pub(super) fn minimal_profile() -> HealthProfile {
    HealthProfile {
        age: Some(30),
        gender: Some(Gender::Female),
        weight_kg: Some(70.0),
        height_cm: Some(175.0),
        ..HealthProfile::default()
    }
}

pub(super) fn high_risk_profile() -> HealthProfile {
    HealthProfile {
        age: Some(55),
        gender: Some(Gender::Male),
        weight_kg: Some(95.0),
        height_cm: Some(175.0),
        exercise_frequency: Some(ExerciseFrequency::Sedentary),
        sleep_hours: Some(5.0),
        sleep_quality: Some(SleepQuality::Poor),
        diet_type: Some(DietType::NonVegetarian),
        fast_food_frequency: Some(FastFoodFrequency::Frequently),
        blood_pressure: Some(BloodPressure::HighStage2),
        cholesterol: Some(Cholesterol::High),
        smoking_status: Some(SmokingStatus::Regular),
        stress_level: Some(9),
        family_history: ConditionHistory::from_tags([
            ConditionTag::HeartDisease,
            ConditionTag::Diabetes,
        ]),
        existing_conditions: ConditionHistory::none(),
        vaccination_status: Some(VaccinationStatus::No),
        last_checkup: Some(LastCheckup::MoreThanFiveYears),
        ..HealthProfile::default()
    }
}

pub(super) fn low_risk_profile() -> HealthProfile {
    HealthProfile {
        exercise_frequency: Some(ExerciseFrequency::Active),
        sleep_hours: Some(8.0),
        sleep_quality: Some(SleepQuality::Excellent),
        smoking_status: Some(SmokingStatus::NonSmoker),
        alcohol_consumption: Some(AlcoholConsumption::None),
        blood_pressure: Some(BloodPressure::Normal),
        stress_level: Some(2),
        family_history: ConditionHistory::none(),
        existing_conditions: ConditionHistory::none(),
        vaccination_status: Some(VaccinationStatus::Yes),
        ..minimal_profile()
    }
}

/// Every wizard question answered.
pub(super) fn complete_profile() -> HealthProfile {
    HealthProfile {
        cholesterol: Some(Cholesterol::Normal),
        last_checkup: Some(LastCheckup::SixToTwelveMonths),
        diet_type: Some(DietType::Mediterranean),
        water_intake: Some(WaterIntake::High),
        fast_food_frequency: Some(FastFoodFrequency::Never),
        screen_time: Some(ExposureLevel::Moderate),
        outdoor_time: Some(ExposureLevel::High),
        chronic_pain: Some(false),
        ..low_risk_profile()
    }
}

pub(super) fn high_risk_json() -> Value {
    json!({
        "age": "55",
        "gender": "male",
        "weight": "95",
        "height": "175",
        "exerciseFrequency": "sedentary",
        "sleepHours": "5",
        "sleepQuality": "poor",
        "dietType": "non-vegetarian",
        "fastFoodFrequency": "frequently",
        "bloodPressure": "high-stage2",
        "cholesterolLevels": "high",
        "smokingStatus": "regular",
        "stressLevel": "9",
        "familyHistory": ["Heart Disease", "Diabetes"],
        "existingConditions": ["None of the above"],
        "vaccinationStatus": "no",
        "lastCheckup": "more-than-5-years"
    })
}

pub(super) fn build_service() -> (AssessmentService<MemoryRepository>, Arc<MemoryRepository>) {
    let repository = Arc::new(MemoryRepository::default());
    let service = AssessmentService::new(repository.clone(), IntakePolicy::lenient());
    (service, repository)
}

pub(super) fn router_with_service(service: AssessmentService<MemoryRepository>) -> axum::Router {
    assessment_router(Arc::new(service))
}

#[derive(Default, Clone)]
pub(super) struct MemoryRepository {
    pub(super) records: Arc<Mutex<HashMap<ProfileId, AssessmentRecord>>>,
}

impl ProfileRepository for MemoryRepository {
    fn insert(&self, record: AssessmentRecord) -> Result<AssessmentRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.contains_key(&record.profile_id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(record.profile_id.clone(), record.clone());
        Ok(record)
    }

    fn fetch(&self, id: &ProfileId) -> Result<Option<AssessmentRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.get(id).cloned())
    }

    fn recent(&self, limit: usize) -> Result<Vec<AssessmentRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        let mut records: Vec<_> = guard.values().cloned().collect();
        records.sort_by(|a, b| b.profile_id.0.cmp(&a.profile_id.0));
        records.truncate(limit);
        Ok(records)
    }
}

pub(super) struct ConflictRepository;

impl ProfileRepository for ConflictRepository {
    fn insert(&self, _record: AssessmentRecord) -> Result<AssessmentRecord, RepositoryError> {
        Err(RepositoryError::Conflict)
    }

    fn fetch(&self, _id: &ProfileId) -> Result<Option<AssessmentRecord>, RepositoryError> {
        Ok(None)
    }

    fn recent(&self, _limit: usize) -> Result<Vec<AssessmentRecord>, RepositoryError> {
        Ok(Vec::new())
    }
}

pub(super) struct UnavailableRepository;

impl ProfileRepository for UnavailableRepository {
    fn insert(&self, _record: AssessmentRecord) -> Result<AssessmentRecord, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn fetch(&self, _id: &ProfileId) -> Result<Option<AssessmentRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn recent(&self, _limit: usize) -> Result<Vec<AssessmentRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}

pub(super) async fn read_body(response: Response) -> Vec<u8> {
    axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body")
        .to_vec()
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = read_body(response).await;
    serde_json::from_slice(&body).expect("json payload")
}
