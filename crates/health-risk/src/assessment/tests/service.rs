use super::common::*;
use crate::assessment::domain::HealthProfile;
use crate::assessment::repository::{ProfileId, RepositoryError};
use crate::assessment::{
    AssessmentService, AssessmentServiceError, IntakePolicy, IntakeViolation,
};
use std::sync::Arc;

#[test]
fn submit_scores_and_stores_the_profile() {
    let (service, repository) = build_service();

    let record = service.submit(high_risk_profile()).expect("submission succeeds");

    assert!(record.profile_id.0.starts_with("profile-"));
    assert_eq!(record.profile_id.0.len(), "profile-000000".len());
    assert_eq!(record.assessment.overall_score, 78);

    let stored = repository
        .records
        .lock()
        .expect("repository mutex poisoned")
        .get(&record.profile_id)
        .cloned()
        .expect("record stored");
    assert_eq!(stored.profile, high_risk_profile());
}

#[test]
fn submit_propagates_intake_errors_without_storing() {
    let (service, repository) = build_service();
    let profile = HealthProfile {
        gender: None,
        ..minimal_profile()
    };

    match service.submit(profile) {
        Err(AssessmentServiceError::Intake(IntakeViolation::MissingField { field: "gender" })) => {}
        other => panic!("expected intake violation, got {other:?}"),
    }
    assert!(repository
        .records
        .lock()
        .expect("repository mutex poisoned")
        .is_empty());
}

#[test]
fn preview_does_not_store() {
    let (service, repository) = build_service();

    let assessment = service.preview(&low_risk_profile()).expect("preview succeeds");

    assert_eq!(assessment.overall_score, 13);
    assert!(repository
        .records
        .lock()
        .expect("repository mutex poisoned")
        .is_empty());
}

#[test]
fn strict_policy_is_applied_by_the_service() {
    let service = AssessmentService::new(
        Arc::new(MemoryRepository::default()),
        IntakePolicy::complete(),
    );
    assert_eq!(service.policy(), IntakePolicy::complete());
    assert!(matches!(
        service.preview(&minimal_profile()),
        Err(AssessmentServiceError::Intake(_))
    ));
    assert!(service.preview(&complete_profile()).is_ok());
}

#[test]
fn get_returns_not_found_for_unknown_ids() {
    let (service, _) = build_service();
    match service.get(&ProfileId("profile-999999".to_string())) {
        Err(AssessmentServiceError::Repository(RepositoryError::NotFound)) => {}
        other => panic!("expected not found, got {other:?}"),
    }
}

#[test]
fn get_round_trips_submitted_records() {
    let (service, _) = build_service();
    let record = service.submit(low_risk_profile()).expect("submission succeeds");

    let fetched = service.get(&record.profile_id).expect("record found");
    assert_eq!(fetched.assessment, record.assessment);
    assert_eq!(fetched.submitted_at, record.submitted_at);
}

#[test]
fn submit_surfaces_repository_conflicts() {
    let service = AssessmentService::new(Arc::new(ConflictRepository), IntakePolicy::lenient());
    assert!(matches!(
        service.submit(minimal_profile()),
        Err(AssessmentServiceError::Repository(RepositoryError::Conflict))
    ));
}

#[test]
fn recent_lists_newest_first() {
    let (service, _) = build_service();
    let first = service.submit(low_risk_profile()).expect("first stored");
    let second = service.submit(high_risk_profile()).expect("second stored");

    let summaries = service.recent(10).expect("listing succeeds");
    let ids: Vec<_> = summaries.iter().map(|summary| summary.profile_id.clone()).collect();

    let second_index = ids.iter().position(|id| *id == second.profile_id);
    let first_index = ids.iter().position(|id| *id == first.profile_id);
    assert!(second_index < first_index);
    assert_eq!(summaries[0].overall_label, "Very High Risk");
}
