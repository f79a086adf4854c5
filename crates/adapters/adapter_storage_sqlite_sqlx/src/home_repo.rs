//! `SQLite` implementation of [`HomeRepository`].

use std::future::Future;

use chrono::{DateTime, Utc};
use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use homelink_app::ports::HomeRepository;
use homelink_domain::error::{HomeLinkError, NotFoundError};
use homelink_domain::home::{Home, HomeUpdate, NewHome};
use homelink_domain::id::HomeId;
use homelink_domain::time::now;

use crate::error::StorageError;

/// Wrapper for converting database rows into domain [`Home`].
struct Wrapper(Home);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<Home> {
        value.map(|w| w.0)
    }
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let home_id: i64 = row.try_get("home_id")?;
        let user_id: i64 = row.try_get("user_id")?;
        let name: String = row.try_get("name")?;
        let city: String = row.try_get("city")?;
        let street: String = row.try_get("street")?;
        let num: i64 = row.try_get("num")?;
        let created_at: DateTime<Utc> = row.try_get("created_at")?;

        Ok(Self(Home {
            home_id: HomeId::from_i64(home_id),
            user_id,
            name,
            city,
            street,
            num,
            created_at,
        }))
    }
}

const INSERT: &str =
    "INSERT INTO homes (user_id, name, city, street, num, created_at) VALUES (?, ?, ?, ?, ?, ?)";
const SELECT_BY_ID: &str = "SELECT * FROM homes WHERE home_id = ?";
const SELECT_ALL: &str = "SELECT * FROM homes ORDER BY name";
const UPDATE: &str =
    "UPDATE homes SET user_id = ?, name = ?, city = ?, street = ?, num = ? WHERE home_id = ?";
const DELETE_BY_ID: &str = "DELETE FROM homes WHERE home_id = ?";

/// `SQLite`-backed home repository.
pub struct SqliteHomeRepository {
    pool: SqlitePool,
}

impl SqliteHomeRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn not_found(id: HomeId) -> HomeLinkError {
        NotFoundError {
            entity: "Home",
            id: id.to_string(),
        }
        .into()
    }
}

impl HomeRepository for SqliteHomeRepository {
    fn create(&self, home: NewHome) -> impl Future<Output = Result<Home, HomeLinkError>> + Send {
        let pool = self.pool.clone();
        async move {
            let created_at = now();
            let result = sqlx::query(INSERT)
                .bind(home.user_id)
                .bind(&home.name)
                .bind(&home.city)
                .bind(&home.street)
                .bind(home.num)
                .bind(created_at)
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Home {
                home_id: HomeId::from_i64(result.last_insert_rowid()),
                user_id: home.user_id,
                name: home.name,
                city: home.city,
                street: home.street,
                num: home.num,
                created_at,
            })
        }
    }

    fn get_by_id(
        &self,
        id: HomeId,
    ) -> impl Future<Output = Result<Option<Home>, HomeLinkError>> + Send {
        let pool = self.pool.clone();
        async move {
            let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
                .bind(id.as_i64())
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Wrapper::maybe(row))
        }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Home>, HomeLinkError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }

    fn update(
        &self,
        id: HomeId,
        update: HomeUpdate,
    ) -> impl Future<Output = Result<Home, HomeLinkError>> + Send {
        let pool = self.pool.clone();
        async move {
            let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
                .bind(id.as_i64())
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            let Some(existing) = Wrapper::maybe(row) else {
                return Err(Self::not_found(id));
            };

            let updated = update.apply(existing);
            sqlx::query(UPDATE)
                .bind(updated.user_id)
                .bind(&updated.name)
                .bind(&updated.city)
                .bind(&updated.street)
                .bind(updated.num)
                .bind(id.as_i64())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(updated)
        }
    }

    fn delete(&self, id: HomeId) -> impl Future<Output = Result<(), HomeLinkError>> + Send {
        let pool = self.pool.clone();
        async move {
            let result = sqlx::query(DELETE_BY_ID)
                .bind(id.as_i64())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            if result.rows_affected() == 0 {
                return Err(Self::not_found(id));
            }
            Ok(())
        }
    }
}
