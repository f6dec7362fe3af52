//! Entity directory backed by a JSON document of names.
//!
//! The document holds one table per entity kind, keyed by id:
//!
//! ```json
//! {
//!   "corporations": { "98000001": "Test Corp" },
//!   "systems": { "30000142": "Jita" },
//!   "planets": { "40009077": { "name": "Jita IV", "system_id": 30000142 } },
//!   "structures": { "1021975535893": { "name": "Jita - Keepstar" } }
//! }
//! ```
//!
//! Absent tables are empty. Ids missing from a table are reported as
//! `LookupError::NotFound`.

use std::collections::HashMap;
use std::path::Path;

use async_trait::async_trait;
use reconbot_domain::{
    AllianceId, CharacterId, CorporationId, ItemTypeId, MoonId, MoonRecord, PlanetId,
    PlanetRecord, SolarSystemId, StructureId, StructureRecord,
};
use serde::Deserialize;

use crate::infrastructure::ports::{EntityDirectory, LookupError};

#[derive(Debug, thiserror::Error)]
pub enum NameDirectoryError {
    #[error("Failed to read name directory {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid name directory: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct NameTables {
    corporations: HashMap<i64, String>,
    alliances: HashMap<i64, String>,
    characters: HashMap<i64, String>,
    systems: HashMap<i64, String>,
    items: HashMap<i64, String>,
    planets: HashMap<i64, PlanetRecord>,
    moons: HashMap<i64, MoonRecord>,
    structures: HashMap<i64, StructureRecord>,
}

/// Read-only directory loaded once from JSON.
#[derive(Debug, Default)]
pub struct JsonNameDirectory {
    tables: NameTables,
}

impl JsonNameDirectory {
    pub fn from_json(json: &str) -> Result<Self, NameDirectoryError> {
        let tables = serde_json::from_str(json)?;
        Ok(Self { tables })
    }

    pub async fn load(path: impl AsRef<Path>) -> Result<Self, NameDirectoryError> {
        let path = path.as_ref();
        let json = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| NameDirectoryError::Io {
                path: path.display().to_string(),
                source,
            })?;
        let directory = Self::from_json(&json)?;
        tracing::debug!(
            path = %path.display(),
            corporations = directory.tables.corporations.len(),
            systems = directory.tables.systems.len(),
            items = directory.tables.items.len(),
            "Loaded name directory"
        );
        Ok(directory)
    }
}

fn lookup<T: Clone>(
    table: &HashMap<i64, T>,
    entity_type: &'static str,
    id: i64,
) -> Result<T, LookupError> {
    table
        .get(&id)
        .cloned()
        .ok_or_else(|| LookupError::not_found(entity_type, id))
}

#[async_trait]
impl EntityDirectory for JsonNameDirectory {
    async fn corporation_name(&self, id: CorporationId) -> Result<String, LookupError> {
        lookup(&self.tables.corporations, "Corporation", id.as_i64())
    }

    async fn alliance_name(&self, id: AllianceId) -> Result<String, LookupError> {
        lookup(&self.tables.alliances, "Alliance", id.as_i64())
    }

    async fn character_name(&self, id: CharacterId) -> Result<String, LookupError> {
        lookup(&self.tables.characters, "Character", id.as_i64())
    }

    async fn system_name(&self, id: SolarSystemId) -> Result<String, LookupError> {
        lookup(&self.tables.systems, "Solar system", id.as_i64())
    }

    async fn item_name(&self, id: ItemTypeId) -> Result<String, LookupError> {
        lookup(&self.tables.items, "Item type", id.as_i64())
    }

    async fn planet(&self, id: PlanetId) -> Result<PlanetRecord, LookupError> {
        lookup(&self.tables.planets, "Planet", id.as_i64())
    }

    async fn moon(&self, id: MoonId) -> Result<MoonRecord, LookupError> {
        lookup(&self.tables.moons, "Moon", id.as_i64())
    }

    async fn structure(&self, id: StructureId) -> Result<StructureRecord, LookupError> {
        lookup(&self.tables.structures, "Structure", id.as_i64())
    }
}
