//! Home service — use-cases for managing homes.

use homelink_domain::error::{HomeLinkError, NotFoundError};
use homelink_domain::event::Event;
use homelink_domain::home::{Home, HomeUpdate, NewHome};
use homelink_domain::id::HomeId;

use crate::ports::{EventPublisher, HomeRepository};

/// Application service for home CRUD operations.
///
/// Create and delete publish `home.created` / `home.deleted` events.
/// Publication is best-effort: a publish failure is logged and discarded and
/// never changes the outcome of the operation itself.
pub struct HomeService<R, P> {
    repo: R,
    publisher: P,
}

impl<R: HomeRepository, P: EventPublisher> HomeService<R, P> {
    /// Create a new service backed by the given repository and publisher.
    pub fn new(repo: R, publisher: P) -> Self {
        Self { repo, publisher }
    }

    /// Create a new home after validating domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`HomeLinkError::Validation`] if invariants fail, or a
    /// storage error propagated from the repository.
    #[tracing::instrument(skip(self, home), fields(home_name = %home.name))]
    pub async fn create_home(&self, home: NewHome) -> Result<Home, HomeLinkError> {
        home.validate()?;
        let created = self.repo.create(home).await?;

        if let Err(err) = self.publisher.publish(Event::home_created(&created)).await {
            tracing::warn!(error = %err, home_id = %created.home_id, "dropped home.created event");
        }

        Ok(created)
    }

    /// Look up a home by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`HomeLinkError::NotFound`] when no home with `id` exists,
    /// or a storage error from the repository.
    pub async fn get_home(&self, id: HomeId) -> Result<Home, HomeLinkError> {
        self.repo.get_by_id(id).await?.ok_or_else(|| {
            NotFoundError {
                entity: "Home",
                id: id.to_string(),
            }
            .into()
        })
    }

    /// List all homes.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_homes(&self) -> Result<Vec<Home>, HomeLinkError> {
        self.repo.get_all().await
    }

    /// Apply a partial update to an existing home.
    ///
    /// # Errors
    ///
    /// Returns [`HomeLinkError::NotFound`] if the home does not exist, or a
    /// storage error from the repository.
    #[tracing::instrument(skip(self, update))]
    pub async fn update_home(&self, id: HomeId, update: HomeUpdate) -> Result<Home, HomeLinkError> {
        self.repo.update(id, update).await
    }

    /// Delete a home by id.
    ///
    /// Sensor links pointing at the home are left in place.
    ///
    /// # Errors
    ///
    /// Returns [`HomeLinkError::NotFound`] if the home does not exist, or a
    /// storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn delete_home(&self, id: HomeId) -> Result<(), HomeLinkError> {
        self.repo.delete(id).await?;

        if let Err(err) = self.publisher.publish(Event::home_deleted(id)).await {
            tracing::warn!(error = %err, home_id = %id, "dropped home.deleted event");
        }

        Ok(())
    }
}
