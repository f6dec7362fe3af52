//! Entity resolver - turns payload ids into display names.

use std::sync::Arc;

use reconbot_domain::{
    AllianceId, CharacterId, CorporationId, ItemTypeId, MoonId, MoonRecord, PlanetId,
    SolarSystemId, StructureId, WarParty,
};

use crate::infrastructure::ports::{EntityDirectory, LookupError};

/// Resolver entity - wraps the directory port and adds the lookups that
/// combine more than one directory call.
pub struct EntityResolver {
    directory: Arc<dyn EntityDirectory>,
}

impl EntityResolver {
    pub fn new(directory: Arc<dyn EntityDirectory>) -> Self {
        Self { directory }
    }

    pub async fn resolve_corporation(&self, id: CorporationId) -> Result<String, LookupError> {
        self.directory.corporation_name(id).await
    }

    pub async fn resolve_alliance(&self, id: AllianceId) -> Result<String, LookupError> {
        self.directory.alliance_name(id).await
    }

    pub async fn resolve_character(&self, id: CharacterId) -> Result<String, LookupError> {
        self.directory.character_name(id).await
    }

    pub async fn resolve_system(&self, id: SolarSystemId) -> Result<String, LookupError> {
        self.directory.system_name(id).await
    }

    pub async fn resolve_item(&self, id: ItemTypeId) -> Result<String, LookupError> {
        self.directory.item_name(id).await
    }

    /// Planet name together with its system, e.g. `Jita IV in Jita`.
    pub async fn resolve_planet(&self, id: PlanetId) -> Result<String, LookupError> {
        let planet = self.directory.planet(id).await?;
        let system = self.resolve_system(planet.system_id).await?;
        Ok(format!("{} in {}", planet.name, system))
    }

    pub async fn resolve_moon(&self, id: MoonId) -> Result<MoonRecord, LookupError> {
        self.directory.moon(id).await
    }

    /// Structure name, or `Unknown name` when the directory withholds it.
    pub async fn resolve_structure_name(&self, id: StructureId) -> Result<String, LookupError> {
        let structure = self.directory.structure(id).await?;
        Ok(structure.display_name().to_string())
    }

    /// Resolve one side of a war.
    ///
    /// Tries the corporation directory first and falls back to alliances.
    /// When both fail, the alliance error is returned.
    pub async fn resolve_war_party(&self, id: i64) -> Result<WarParty, LookupError> {
        match self.directory.corporation_name(CorporationId::new(id)).await {
            Ok(name) => Ok(WarParty::Corporation(name)),
            Err(corporation_error) => {
                tracing::debug!(
                    id,
                    error = %corporation_error,
                    "War party is not a corporation, trying alliances"
                );
                self.directory
                    .alliance_name(AllianceId::new(id))
                    .await
                    .map(WarParty::Alliance)
            }
        }
    }
}
