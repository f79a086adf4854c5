//! Home — the facade's own aggregate: a dwelling that sensors get linked to.

use serde::{Deserialize, Serialize};

use crate::error::{HomeLinkError, ValidationError};
use crate::id::HomeId;
use crate::time::Timestamp;

/// A home as stored locally. Sensors are not embedded; they live as separate
/// links resolved against the registry on demand.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Home {
    pub home_id: HomeId,
    pub user_id: i64,
    pub name: String,
    pub city: String,
    pub street: String,
    pub num: i64,
    pub created_at: Timestamp,
}

/// Payload for creating a home. The store assigns `home_id` and `created_at`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewHome {
    pub user_id: i64,
    pub name: String,
    pub city: String,
    pub street: String,
    pub num: i64,
}

impl NewHome {
    /// Create a builder for constructing a [`NewHome`].
    #[must_use]
    pub fn builder() -> NewHomeBuilder {
        NewHomeBuilder::default()
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`HomeLinkError::Validation`] when `name` is empty.
    pub fn validate(&self) -> Result<(), HomeLinkError> {
        if self.name.is_empty() {
            return Err(ValidationError::EmptyName.into());
        }
        Ok(())
    }
}

/// Step-by-step builder for [`NewHome`].
#[derive(Debug, Default)]
pub struct NewHomeBuilder {
    user_id: Option<i64>,
    name: Option<String>,
    city: Option<String>,
    street: Option<String>,
    num: Option<i64>,
}

impl NewHomeBuilder {
    #[must_use]
    pub fn user_id(mut self, user_id: i64) -> Self {
        self.user_id = Some(user_id);
        self
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    #[must_use]
    pub fn street(mut self, street: impl Into<String>) -> Self {
        self.street = Some(street.into());
        self
    }

    #[must_use]
    pub fn num(mut self, num: i64) -> Self {
        self.num = Some(num);
        self
    }

    /// Consume the builder, validate, and return a [`NewHome`].
    ///
    /// # Errors
    ///
    /// Returns [`HomeLinkError::Validation`] if `name` is missing or empty.
    pub fn build(self) -> Result<NewHome, HomeLinkError> {
        let home = NewHome {
            user_id: self.user_id.unwrap_or_default(),
            name: self.name.unwrap_or_default(),
            city: self.city.unwrap_or_default(),
            street: self.street.unwrap_or_default(),
            num: self.num.unwrap_or_default(),
        };
        home.validate()?;
        Ok(home)
    }
}

/// Partial update for a home. `None` fields leave the stored value unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HomeUpdate {
    pub user_id: Option<i64>,
    pub name: Option<String>,
    pub city: Option<String>,
    pub street: Option<String>,
    pub num: Option<i64>,
}

impl HomeUpdate {
    /// Apply this update on top of an existing home, returning the new state.
    #[must_use]
    pub fn apply(self, mut home: Home) -> Home {
        if let Some(user_id) = self.user_id {
            home.user_id = user_id;
        }
        if let Some(name) = self.name {
            home.name = name;
        }
        if let Some(city) = self.city {
            home.city = city;
        }
        if let Some(street) = self.street {
            home.street = street;
        }
        if let Some(num) = self.num {
            home.num = num;
        }
        home
    }
}
