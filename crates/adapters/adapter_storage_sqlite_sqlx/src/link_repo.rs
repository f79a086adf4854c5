//! `SQLite` implementation of [`LinkRepository`].

use std::future::Future;

use sqlx::{Row, SqlitePool};

use homelink_app::ports::LinkRepository;
use homelink_domain::error::HomeLinkError;
use homelink_domain::id::{HomeId, ServiceId};
use homelink_domain::link::SensorLink;

use crate::error::StorageError;

const INSERT: &str = "INSERT INTO sensors (home_id, service_id) VALUES (?, ?)";
const SELECT_SERVICE_IDS: &str = "SELECT service_id FROM sensors WHERE home_id = ?";

/// `SQLite`-backed link repository.
///
/// The `sensors` relation carries no uniqueness constraint, so inserting the
/// same link twice records two rows. It also performs no existence check on
/// `home_id`.
pub struct SqliteLinkRepository {
    pool: SqlitePool,
}

impl SqliteLinkRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl LinkRepository for SqliteLinkRepository {
    fn insert(&self, link: SensorLink) -> impl Future<Output = Result<(), HomeLinkError>> + Send {
        let pool = self.pool.clone();
        async move {
            sqlx::query(INSERT)
                .bind(link.home_id.as_i64())
                .bind(link.service_id.as_i64())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(())
        }
    }

    fn list_service_ids(
        &self,
        home_id: HomeId,
    ) -> impl Future<Output = Result<Vec<ServiceId>, HomeLinkError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows = sqlx::query(SELECT_SERVICE_IDS)
                .bind(home_id.as_i64())
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            rows.into_iter()
                .map(|row| {
                    row.try_get::<i64, _>("service_id")
                        .map(ServiceId::from_i64)
                        .map_err(|err| StorageError::from(err).into())
                })
                .collect()
        }
    }
}
