//! Entity directory port - maps numeric ids from notifications to names.

use async_trait::async_trait;
use reconbot_domain::{
    AllianceId, CharacterId, CorporationId, ItemTypeId, MoonId, MoonRecord, PlanetId,
    PlanetRecord, SolarSystemId, StructureId, StructureRecord,
};

use super::error::LookupError;

/// Name lookups supplied by the host application.
///
/// Implementations own caching and rate limiting. Failures are returned as-is;
/// nothing on this side retries.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EntityDirectory: Send + Sync {
    async fn corporation_name(&self, id: CorporationId) -> Result<String, LookupError>;
    async fn alliance_name(&self, id: AllianceId) -> Result<String, LookupError>;
    async fn character_name(&self, id: CharacterId) -> Result<String, LookupError>;
    async fn system_name(&self, id: SolarSystemId) -> Result<String, LookupError>;
    /// Item types cover ships, structures, modules and services alike.
    async fn item_name(&self, id: ItemTypeId) -> Result<String, LookupError>;
    async fn planet(&self, id: PlanetId) -> Result<PlanetRecord, LookupError>;
    async fn moon(&self, id: MoonId) -> Result<MoonRecord, LookupError>;
    async fn structure(&self, id: StructureId) -> Result<StructureRecord, LookupError>;
}
