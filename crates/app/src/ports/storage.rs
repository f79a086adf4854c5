//! Storage port — repository traits for persistence.

use std::future::Future;

use homelink_domain::error::HomeLinkError;
use homelink_domain::home::{Home, HomeUpdate, NewHome};
use homelink_domain::id::{HomeId, ServiceId};
use homelink_domain::link::SensorLink;

/// Persistence for locally-owned homes.
pub trait HomeRepository {
    /// Insert a new home and return it with its store-assigned id.
    fn create(&self, home: NewHome) -> impl Future<Output = Result<Home, HomeLinkError>> + Send;

    /// Look up a home by id.
    fn get_by_id(
        &self,
        id: HomeId,
    ) -> impl Future<Output = Result<Option<Home>, HomeLinkError>> + Send;

    /// List all homes.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Home>, HomeLinkError>> + Send;

    /// Apply a partial update to an existing home and return the new state.
    ///
    /// Implementations return [`HomeLinkError::NotFound`] when no home with
    /// `id` exists.
    fn update(
        &self,
        id: HomeId,
        update: HomeUpdate,
    ) -> impl Future<Output = Result<Home, HomeLinkError>> + Send;

    /// Delete a home by id.
    ///
    /// Implementations return [`HomeLinkError::NotFound`] when no home with
    /// `id` exists. Sensor links pointing at the home are left in place.
    fn delete(&self, id: HomeId) -> impl Future<Output = Result<(), HomeLinkError>> + Send;
}

/// Persistence for home↔device associations.
///
/// Pure storage: no existence checks, no uniqueness. Inserting the same link
/// twice records two rows.
pub trait LinkRepository {
    /// Append a link row.
    fn insert(&self, link: SensorLink) -> impl Future<Output = Result<(), HomeLinkError>> + Send;

    /// All device identifiers linked to a home, in no guaranteed order.
    ///
    /// An empty result is valid and is not distinguished from "home does not
    /// exist".
    fn list_service_ids(
        &self,
        home_id: HomeId,
    ) -> impl Future<Output = Result<Vec<ServiceId>, HomeLinkError>> + Send;
}
