use std::fmt;

use serde::{Deserialize, Serialize};

/// Numeric identifiers as issued by the game API.
///
/// Every id in a notification payload is a plain integer; the newtypes keep a
/// corporation id from being handed to a system lookup by accident.
macro_rules! define_id {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            pub fn new(id: i64) -> Self {
                Self(id)
            }

            pub fn as_i64(&self) -> i64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<i64> for $name {
            fn from(value: i64) -> Self {
                Self(value)
            }
        }

        impl From<$name> for i64 {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

// Owners
define_id!(CorporationId);
define_id!(AllianceId);
define_id!(CharacterId);

// Locations
define_id!(SolarSystemId);
define_id!(PlanetId);
define_id!(MoonId);

// Things in space
define_id!(ItemTypeId);
define_id!(StructureId);
