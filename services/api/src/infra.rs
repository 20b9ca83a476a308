use health_risk::assessment::{AssessmentRecord, ProfileId, ProfileRepository, RepositoryError};
use metrics_exporter_prometheus::PrometheusHandle;
use std::collections::{HashMap, VecDeque};
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};
use tracing::debug;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

#[derive(Default)]
struct ProfileStore {
    records: HashMap<ProfileId, AssessmentRecord>,
    order: VecDeque<ProfileId>,
}

/// Process-local profile store. Once `capacity` records are held the oldest is evicted.
#[derive(Clone)]
pub(crate) struct InMemoryProfileRepository {
    capacity: usize,
    store: Arc<Mutex<ProfileStore>>,
}

impl InMemoryProfileRepository {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            store: Arc::new(Mutex::new(ProfileStore::default())),
        }
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.store
            .lock()
            .expect("repository mutex poisoned")
            .records
            .len()
    }
}

impl ProfileRepository for InMemoryProfileRepository {
    fn insert(&self, record: AssessmentRecord) -> Result<AssessmentRecord, RepositoryError> {
        let mut guard = self.store.lock().expect("repository mutex poisoned");
        if guard.records.contains_key(&record.profile_id) {
            return Err(RepositoryError::Conflict);
        }

        while guard.order.len() >= self.capacity {
            if let Some(evicted) = guard.order.pop_front() {
                guard.records.remove(&evicted);
                debug!(profile_id = %evicted, "evicted oldest stored assessment");
            }
        }

        guard.order.push_back(record.profile_id.clone());
        guard
            .records
            .insert(record.profile_id.clone(), record.clone());
        Ok(record)
    }

    fn fetch(&self, id: &ProfileId) -> Result<Option<AssessmentRecord>, RepositoryError> {
        let guard = self.store.lock().expect("repository mutex poisoned");
        Ok(guard.records.get(id).cloned())
    }

    fn recent(&self, limit: usize) -> Result<Vec<AssessmentRecord>, RepositoryError> {
        let guard = self.store.lock().expect("repository mutex poisoned");
        Ok(guard
            .order
            .iter()
            .rev()
            .filter_map(|id| guard.records.get(id))
            .take(limit)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use health_risk::assessment::{assess, Gender, HealthProfile};

    fn record(id: &str) -> AssessmentRecord {
        let profile = HealthProfile {
            age: Some(40),
            gender: Some(Gender::Other),
            weight_kg: Some(80.0),
            height_cm: Some(180.0),
            ..HealthProfile::default()
        };
        AssessmentRecord {
            profile_id: ProfileId(id.to_string()),
            submitted_at: Utc::now(),
            assessment: assess(&profile),
            profile,
        }
    }

    #[test]
    fn duplicate_ids_conflict() {
        let repository = InMemoryProfileRepository::with_capacity(4);
        repository.insert(record("profile-000001")).expect("stored");

        assert!(matches!(
            repository.insert(record("profile-000001")),
            Err(RepositoryError::Conflict)
        ));
    }

    #[test]
    fn oldest_record_is_evicted_at_capacity() {
        let repository = InMemoryProfileRepository::with_capacity(2);
        for id in ["profile-000001", "profile-000002", "profile-000003"] {
            repository.insert(record(id)).expect("stored");
        }

        assert_eq!(repository.len(), 2);
        let evicted = repository
            .fetch(&ProfileId("profile-000001".to_string()))
            .expect("fetch succeeds");
        assert!(evicted.is_none());
        assert!(repository
            .fetch(&ProfileId("profile-000003".to_string()))
            .expect("fetch succeeds")
            .is_some());
    }

    #[test]
    fn recent_returns_newest_first_up_to_limit() {
        let repository = InMemoryProfileRepository::with_capacity(8);
        for id in ["profile-000001", "profile-000002", "profile-000003"] {
            repository.insert(record(id)).expect("stored");
        }

        let ids: Vec<_> = repository
            .recent(2)
            .expect("listing succeeds")
            .into_iter()
            .map(|record| record.profile_id.0)
            .collect();
        assert_eq!(ids, vec!["profile-000003", "profile-000002"]);
    }

    #[test]
    fn zero_capacity_still_keeps_the_latest_record() {
        let repository = InMemoryProfileRepository::with_capacity(0);
        repository.insert(record("profile-000001")).expect("stored");
        repository.insert(record("profile-000002")).expect("stored");

        assert_eq!(repository.len(), 1);
    }
}
