//! Records returned by the entity directory.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::ids::SolarSystemId;

/// Name used when a structure lookup succeeds but the structure has no public name.
pub const UNKNOWN_STRUCTURE_NAME: &str = "Unknown name";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanetRecord {
    pub name: String,
    pub system_id: SolarSystemId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoonRecord {
    pub name: String,
}

/// Structures can be looked up without docking rights, in which case the
/// name is withheld.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructureRecord {
    #[serde(default)]
    pub name: Option<String>,
}

impl StructureRecord {
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(UNKNOWN_STRUCTURE_NAME)
    }
}

/// One side of a war.
///
/// War notifications do not say whether a party is a corporation or an
/// alliance, so the lookup records which directory answered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WarParty {
    Corporation(String),
    Alliance(String),
}

impl WarParty {
    pub fn name(&self) -> &str {
        match self {
            Self::Corporation(name) | Self::Alliance(name) => name,
        }
    }

    pub fn is_alliance(&self) -> bool {
        matches!(self, Self::Alliance(_))
    }
}

impl fmt::Display for WarParty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
