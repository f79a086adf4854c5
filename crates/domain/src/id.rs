//! Typed identifier newtypes backed by `i64`.
//!
//! Homes are numbered by the local store; devices are numbered by the legacy
//! registry. Both identifier spaces are plain integers on the wire, so the
//! newtypes exist purely to keep them from being mixed up.

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

macro_rules! define_id {
    ($(#[doc = $doc:expr])* $name:ident) => {
        $(#[doc = $doc])*
        #[derive(
            Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord,
            Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Wrap a raw integer identifier.
            #[must_use]
            pub const fn from_i64(value: i64) -> Self {
                Self(value)
            }

            /// Access the inner integer.
            #[must_use]
            pub const fn as_i64(self) -> i64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }

        impl From<i64> for $name {
            fn from(value: i64) -> Self {
                Self(value)
            }
        }

        impl FromStr for $name {
            type Err = ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.parse().map(Self)
            }
        }
    };
}

define_id!(
    /// Identifier of a [`Home`](crate::home::Home), assigned by the local store.
    HomeId
);

define_id!(
    /// Identifier the legacy registry assigned to a device when it was
    /// provisioned. The facade never mints these.
    ServiceId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_roundtrip_through_display_and_from_str() {
        let id = HomeId::from_i64(42);
        let text = id.to_string();
        let parsed: HomeId = text.parse().unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn should_serialize_as_bare_integer() {
        let id = ServiceId::from_i64(7);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "7");
        let parsed: ServiceId = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn should_return_error_when_parsing_non_numeric_id() {
        let result = ServiceId::from_str("not-a-number");
        assert!(result.is_err());
    }

    #[test]
    fn should_expose_inner_value() {
        let id = HomeId::from_i64(13);
        assert_eq!(id.as_i64(), 13);
    }
}
