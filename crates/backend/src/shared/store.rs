use contracts::shared::actions::{ActionError, ActionKind, ActionRequest};
use contracts::shared::aggregate::AdminAggregate;
use contracts::shared::listing::ListRecord;
use contracts::shared::metadata::Stored;
use tokio::sync::RwLock;

use super::actions::ApplyAction;
use super::error::ApiError;

/// In-memory dataset of one aggregate.
///
/// Seeded at startup and reset on restart. Every record carries
/// `EntityMetadata`; `act` holds the write lock across the version check
/// and the mutation.
pub struct EntityStore<T> {
    items: RwLock<Vec<Stored<T>>>,
}

impl<T> EntityStore<T>
where
    T: ListRecord + AdminAggregate + Clone + Send + Sync,
{
    pub fn new(seed: Vec<T>) -> Self {
        Self {
            items: RwLock::new(seed.into_iter().map(Stored::new).collect()),
        }
    }

    pub async fn list(&self) -> Vec<Stored<T>> {
        self.items.read().await.clone()
    }

    /// Runs `f` over the records under the read lock
    pub async fn read<R>(&self, f: impl FnOnce(&[Stored<T>]) -> R) -> R {
        let items = self.items.read().await;
        f(&items)
    }

    pub async fn get(&self, id: &str) -> Result<Stored<T>, ApiError> {
        self.items
            .read()
            .await
            .iter()
            .find(|s| s.item.record_id() == id)
            .cloned()
            .ok_or_else(|| not_found::<T>(id))
    }

    pub async fn insert(&self, item: T) -> Stored<T> {
        let stored = Stored::new(item);
        self.items.write().await.push(stored.clone());
        stored
    }

    /// Executes a row action with optimistic locking.
    pub async fn act(&self, id: &str, request: ActionRequest<T::Action>) -> Result<Stored<T>, ApiError>
    where
        T: ApplyAction,
    {
        let ActionRequest {
            action,
            expected_version,
            params,
        } = request;

        let mut items = self.items.write().await;
        let stored = items
            .iter_mut()
            .find(|s| s.item.record_id() == id)
            .ok_or_else(|| not_found::<T>(id))?;

        if stored.version() != expected_version {
            tracing::warn!(
                "{} {}: version conflict on '{}' (expected {}, current {})",
                T::aggregate_index(),
                id,
                action.code(),
                expected_version,
                stored.version()
            );
            return Err(ApiError::VersionConflict {
                expected: expected_version,
                actual: stored.version(),
            });
        }

        if action.is_navigation() || !stored.item.is_available(action) {
            tracing::warn!(
                "{} {}: action '{}' not available",
                T::aggregate_index(),
                id,
                action.code()
            );
            return Err(ActionError::NotAvailable(action.code()).into());
        }

        params.validate(action.prompts())?;

        let mut next = stored.item.clone();
        if let Err(e) = next.apply(action, &params) {
            tracing::warn!(
                "{} {}: action '{}' rejected: {}",
                T::aggregate_index(),
                id,
                action.code(),
                e
            );
            return Err(e.into());
        }

        stored.item = next;
        stored.bump();
        tracing::info!(
            "{} {}: '{}' applied, version {}",
            T::aggregate_index(),
            id,
            action.code(),
            stored.version()
        );
        Ok(stored.clone())
    }
}

fn not_found<T: AdminAggregate>(id: &str) -> ApiError {
    ApiError::NotFound(format!("{} '{}'", T::element_name(), id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a002_queue_job::{Priority, QueueJob, QueueJobAction, QueueJobStatus};
    use contracts::shared::actions::ActionParams;

    fn queue_job(id: &str, status: QueueJobStatus) -> QueueJob {
        QueueJob {
            id: id.into(),
            job_id: format!("J-{}", id),
            customer_name: "Sarah Mitchell".into(),
            service_category: "Home Cleaning".into(),
            scheduled_time: "2025-02-15 10:00".into(),
            assigned_professional: None,
            status,
            priority: Priority::Medium,
            flag: None,
        }
    }

    fn request(action: QueueJobAction, expected_version: i32) -> ActionRequest<QueueJobAction> {
        ActionRequest {
            action,
            expected_version,
            params: ActionParams::default(),
        }
    }

    #[tokio::test]
    async fn test_action_bumps_version() {
        let store = EntityStore::new(vec![queue_job("1", QueueJobStatus::PendingApproval)]);
        let updated = store.act("1", request(QueueJobAction::Approve, 1)).await.unwrap();
        assert_eq!(updated.item.status, QueueJobStatus::Active);
        assert_eq!(updated.version(), 2);
        assert_eq!(store.get("1").await.unwrap().version(), 2);
    }

    #[tokio::test]
    async fn test_stale_version_is_rejected_and_record_unchanged() {
        let store = EntityStore::new(vec![queue_job("1", QueueJobStatus::PendingApproval)]);
        let err = store
            .act("1", request(QueueJobAction::Approve, 7))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            ApiError::VersionConflict {
                expected: 7,
                actual: 1
            }
        ));
        let current = store.get("1").await.unwrap();
        assert_eq!(current.item.status, QueueJobStatus::PendingApproval);
        assert_eq!(current.version(), 1);
    }

    #[tokio::test]
    async fn test_unavailable_action_is_rejected() {
        let store = EntityStore::new(vec![queue_job("1", QueueJobStatus::Active)]);
        let mut req = request(QueueJobAction::Assign, 1);
        req.params.target = Some("Mike Johnson".into());
        let err = store.act("1", req).await.unwrap_err();
        assert!(matches!(
            err,
            ApiError::Action(ActionError::NotAvailable("assign"))
        ));
    }

    #[tokio::test]
    async fn test_missing_param_is_rejected_before_apply() {
        let store = EntityStore::new(vec![queue_job("1", QueueJobStatus::Unassigned)]);
        let err = store
            .act("1", request(QueueJobAction::Assign, 1))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            ApiError::Action(ActionError::MissingParam("target"))
        ));
        assert_eq!(store.get("1").await.unwrap().version(), 1);
    }

    #[tokio::test]
    async fn test_unknown_id_is_not_found() {
        let store: EntityStore<QueueJob> = EntityStore::new(Vec::new());
        assert!(matches!(
            store.get("missing").await,
            Err(ApiError::NotFound(_))
        ));
    }
}
