//! Sensor service — the link orchestrator and the read aggregator.
//!
//! Linking is a two-phase workflow against two independently-failing systems:
//! the legacy registry (remote) and the link store (local). A registry failure
//! leaves no trace anywhere; a store failure after a successful registration
//! leaves an orphaned remote device that nothing currently repairs.

use std::sync::Arc;

use tokio::sync::Semaphore;
use tokio::task::JoinSet;

use homelink_domain::error::HomeLinkError;
use homelink_domain::id::HomeId;
use homelink_domain::link::SensorLink;
use homelink_domain::sensor::{SensorDetail, SensorDraft};

use crate::ports::{DeviceRegistry, LinkRepository};

/// Application service for attaching sensors to homes and aggregating their
/// live readings from the registry.
pub struct SensorService<L, G> {
    links: L,
    registry: Arc<G>,
    /// Cap on concurrent registry reads during one aggregation pass.
    fetch_limit: usize,
}

impl<L, G> SensorService<L, G>
where
    L: LinkRepository,
    G: DeviceRegistry + Send + Sync + 'static,
{
    /// Create a new service.
    ///
    /// `fetch_limit` bounds the number of in-flight registry reads per
    /// aggregation request.
    pub fn new(links: L, registry: Arc<G>, fetch_limit: usize) -> Self {
        Self {
            links,
            registry,
            fetch_limit,
        }
    }

    /// Attach a new sensor to a home: provision the device in the registry,
    /// then record the association locally.
    ///
    /// # Errors
    ///
    /// - [`HomeLinkError::Validation`]: the draft is malformed; nothing was
    ///   touched.
    /// - [`HomeLinkError::Registry`]: the registry call failed; no local
    ///   state was touched, so the whole request is safe to retry.
    /// - [`HomeLinkError::Storage`]: the local insert failed *after* the
    ///   registry accepted the device. The remote device is now orphaned and
    ///   no compensating action is taken.
    #[tracing::instrument(skip(self, draft), fields(sensor_name = %draft.name))]
    pub async fn link_sensor(
        &self,
        home_id: HomeId,
        draft: SensorDraft,
    ) -> Result<SensorLink, HomeLinkError> {
        draft.validate()?;

        let service_id = self.registry.register(&draft).await?;
        let link = SensorLink::new(home_id, service_id);

        if let Err(err) = self.links.insert(link).await {
            tracing::error!(
                %home_id,
                %service_id,
                error = %err,
                "device registered remotely but local link failed; remote device is orphaned"
            );
            return Err(err);
        }

        Ok(link)
    }

    /// Collect current readings for every sensor linked to a home.
    ///
    /// One registry read is spawned per linked device, capped at
    /// `fetch_limit` concurrent calls. Each read stands alone: a success
    /// contributes one [`SensorDetail`]; a failure is logged and the sensor
    /// is silently left out. The call waits for every read to finish. Result
    /// order follows completion order and is unspecified.
    ///
    /// # Errors
    ///
    /// Returns a storage error if the link list cannot be read. Individual
    /// fetch failures never fail the request.
    #[tracing::instrument(skip(self))]
    pub async fn read_sensors(&self, home_id: HomeId) -> Result<Vec<SensorDetail>, HomeLinkError> {
        let service_ids = self.links.list_service_ids(home_id).await?;
        if service_ids.is_empty() {
            return Ok(Vec::new());
        }

        let semaphore = Arc::new(Semaphore::new(self.fetch_limit));
        let mut fetches = JoinSet::new();

        for service_id in service_ids {
            let registry = Arc::clone(&self.registry);
            let semaphore = Arc::clone(&semaphore);
            fetches.spawn(async move {
                // The semaphore outlives the fan-out and is never closed.
                let _permit = semaphore.acquire_owned().await.expect("semaphore closed");
                (service_id, registry.fetch(service_id).await)
            });
        }

        let mut details = Vec::new();
        while let Some(joined) = fetches.join_next().await {
            match joined {
                Ok((_, Ok(detail))) => details.push(detail),
                Ok((service_id, Err(err))) => {
                    tracing::warn!(%service_id, error = %err, "dropping sensor from aggregate");
                }
                Err(err) => {
                    tracing::warn!(error = %err, "sensor fetch task aborted");
                }
            }
        }

        Ok(details)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use homelink_domain::error::RegistryError;
    use homelink_domain::id::ServiceId;
    use homelink_domain::time::now;
    use std::collections::HashSet;
    use std::future::Future;
    use std::sync::Mutex;

    struct InMemoryLinkRepo {
        rows: Mutex<Vec<SensorLink>>,
        fail_insert: bool,
    }

    impl InMemoryLinkRepo {
        fn new() -> Self {
            Self {
                rows: Mutex::new(Vec::new()),
                fail_insert: false,
            }
        }

        fn failing() -> Self {
            Self {
                rows: Mutex::new(Vec::new()),
                fail_insert: true,
            }
        }

        fn with_links(home_id: HomeId, service_ids: &[i64]) -> Self {
            let repo = Self::new();
            {
                let mut rows = repo.rows.lock().unwrap();
                for id in service_ids {
                    rows.push(SensorLink::new(home_id, ServiceId::from_i64(*id)));
                }
            }
            repo
        }

        fn row_count(&self) -> usize {
            self.rows.lock().unwrap().len()
        }
    }

    impl LinkRepository for &InMemoryLinkRepo {
        fn insert(
            &self,
            link: SensorLink,
        ) -> impl Future<Output = Result<(), HomeLinkError>> + Send {
            let result = if self.fail_insert {
                Err(HomeLinkError::Storage(Box::new(std::io::Error::other(
                    "disk full",
                ))))
            } else {
                self.rows.lock().unwrap().push(link);
                Ok(())
            };
            async move { result }
        }

        fn list_service_ids(
            &self,
            home_id: HomeId,
        ) -> impl Future<Output = Result<Vec<ServiceId>, HomeLinkError>> + Send {
            let result = self
                .rows
                .lock()
                .unwrap()
                .iter()
                .filter(|link| link.home_id == home_id)
                .map(|link| link.service_id)
                .collect();
            async move { Ok(result) }
        }
    }

    struct StubRegistry {
        assigned_id: i64,
        fail_register: bool,
        failing_fetches: HashSet<i64>,
        register_calls: Mutex<usize>,
    }

    impl StubRegistry {
        fn assigning(assigned_id: i64) -> Self {
            Self {
                assigned_id,
                fail_register: false,
                failing_fetches: HashSet::new(),
                register_calls: Mutex::new(0),
            }
        }

        fn rejecting() -> Self {
            Self {
                fail_register: true,
                ..Self::assigning(0)
            }
        }

        fn with_failing_fetches(ids: &[i64]) -> Self {
            Self {
                failing_fetches: ids.iter().copied().collect(),
                ..Self::assigning(0)
            }
        }

        fn detail(service_id: ServiceId) -> SensorDetail {
            SensorDetail {
                id: service_id,
                name: format!("sensor-{service_id}"),
                sensor_type: "temperature".to_string(),
                location: "Kitchen".to_string(),
                value: 21.5,
                unit: "°C".to_string(),
                status: "active".to_string(),
                last_updated: now(),
            }
        }
    }

    impl DeviceRegistry for StubRegistry {
        fn register(
            &self,
            _draft: &SensorDraft,
        ) -> impl Future<Output = Result<ServiceId, HomeLinkError>> + Send {
            *self.register_calls.lock().unwrap() += 1;
            let result = if self.fail_register {
                Err(RegistryError::Rejected { status: 503 }.into())
            } else {
                Ok(ServiceId::from_i64(self.assigned_id))
            };
            async move { result }
        }

        fn fetch(
            &self,
            service_id: ServiceId,
        ) -> impl Future<Output = Result<SensorDetail, HomeLinkError>> + Send {
            let result = if self.failing_fetches.contains(&service_id.as_i64()) {
                Err(RegistryError::Unavailable(Box::new(std::io::Error::new(
                    std::io::ErrorKind::TimedOut,
                    "deadline exceeded",
                )))
                .into())
            } else {
                Ok(Self::detail(service_id))
            };
            async move { result }
        }
    }

    fn valid_draft() -> SensorDraft {
        SensorDraft::new("Kitchen Temp", "TEMPERATURE_SENSOR", "Kitchen")
    }

    const HOME: HomeId = HomeId::from_i64(1);

    #[tokio::test]
    async fn should_link_sensor_when_registry_and_store_succeed() {
        let repo = InMemoryLinkRepo::new();
        let registry = Arc::new(StubRegistry::assigning(42));
        let svc = SensorService::new(&repo, registry, 8);

        let link = svc.link_sensor(HOME, valid_draft()).await.unwrap();

        assert_eq!(link.home_id, HOME);
        assert_eq!(link.service_id, ServiceId::from_i64(42));
        assert_eq!(repo.row_count(), 1);
    }

    #[tokio::test]
    async fn should_not_touch_store_when_registration_fails() {
        let repo = InMemoryLinkRepo::new();
        let registry = Arc::new(StubRegistry::rejecting());
        let svc = SensorService::new(&repo, registry, 8);

        let result = svc.link_sensor(HOME, valid_draft()).await;

        assert!(matches!(result, Err(HomeLinkError::Registry(_))));
        assert_eq!(repo.row_count(), 0);
    }

    #[tokio::test]
    async fn should_surface_storage_error_after_remote_success() {
        let repo = InMemoryLinkRepo::failing();
        let registry = Arc::new(StubRegistry::assigning(42));
        let svc = SensorService::new(&repo, Arc::clone(&registry), 8);

        let result = svc.link_sensor(HOME, valid_draft()).await;

        // The remote side registered the device; the error only reports the
        // local failure and no cleanup is attempted.
        assert!(matches!(result, Err(HomeLinkError::Storage(_))));
        assert_eq!(*registry.register_calls.lock().unwrap(), 1);
        assert_eq!(repo.row_count(), 0);
    }

    #[tokio::test]
    async fn should_reject_invalid_draft_before_any_side_effect() {
        let repo = InMemoryLinkRepo::new();
        let registry = Arc::new(StubRegistry::assigning(42));
        let svc = SensorService::new(&repo, Arc::clone(&registry), 8);

        let mut draft = valid_draft();
        draft.location = String::new();

        let result = svc.link_sensor(HOME, draft).await;

        assert!(matches!(result, Err(HomeLinkError::Validation(_))));
        assert_eq!(*registry.register_calls.lock().unwrap(), 0);
        assert_eq!(repo.row_count(), 0);
    }

    #[tokio::test]
    async fn should_return_empty_collection_when_no_sensors_linked() {
        let repo = InMemoryLinkRepo::new();
        let registry = Arc::new(StubRegistry::assigning(0));
        let svc = SensorService::new(&repo, registry, 8);

        let details = svc.read_sensors(HOME).await.unwrap();
        assert!(details.is_empty());
    }

    #[tokio::test]
    async fn should_merge_survivors_and_drop_failed_fetches() {
        let repo = InMemoryLinkRepo::with_links(HOME, &[10, 11, 12]);
        let registry = Arc::new(StubRegistry::with_failing_fetches(&[11]));
        let svc = SensorService::new(&repo, registry, 8);

        let details = svc.read_sensors(HOME).await.unwrap();

        let ids: HashSet<i64> = details.iter().map(|d| d.id.as_i64()).collect();
        assert_eq!(details.len(), 2);
        assert_eq!(ids, HashSet::from([10, 12]));
    }

    #[tokio::test]
    async fn should_fetch_all_sensors_even_beyond_the_concurrency_cap() {
        let repo = InMemoryLinkRepo::with_links(HOME, &[1, 2, 3, 4, 5, 6, 7]);
        let registry = Arc::new(StubRegistry::assigning(0));
        let svc = SensorService::new(&repo, registry, 2);

        let details = svc.read_sensors(HOME).await.unwrap();
        assert_eq!(details.len(), 7);
    }

    #[tokio::test]
    async fn should_succeed_with_empty_result_when_every_fetch_fails() {
        let repo = InMemoryLinkRepo::with_links(HOME, &[10, 11]);
        let registry = Arc::new(StubRegistry::with_failing_fetches(&[10, 11]));
        let svc = SensorService::new(&repo, registry, 8);

        let details = svc.read_sensors(HOME).await.unwrap();
        assert!(details.is_empty());
    }

    #[tokio::test]
    async fn should_only_list_links_for_the_requested_home() {
        let repo = InMemoryLinkRepo::with_links(HOME, &[10]);
        {
            let mut rows = repo.rows.lock().unwrap();
            rows.push(SensorLink::new(HomeId::from_i64(2), ServiceId::from_i64(99)));
        }
        let registry = Arc::new(StubRegistry::assigning(0));
        let svc = SensorService::new(&repo, registry, 8);

        let details = svc.read_sensors(HOME).await.unwrap();
        assert_eq!(details.len(), 1);
        assert_eq!(details[0].id, ServiceId::from_i64(10));
    }
}
