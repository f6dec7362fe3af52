//! Upwell structures (citadels): fuel, anchoring, attacks, reinforcement, transfers.

use futures_util::future::try_join_all;
use reconbot_domain::{
    CharacterId, CorporationId, ItemTypeId, Payload, SolarSystemId, StructureId,
};

use super::{percent, NotificationPrinter, RenderError};

/// Index of the structure type id in `structureShowInfoData`.
const SHOW_INFO_TYPE_INDEX: usize = 1;

/// Type, name and system of the citadel a notification is about.
struct Citadel {
    kind: String,
    name: String,
    system: String,
}

impl NotificationPrinter {
    async fn citadel(&self, payload: &Payload) -> Result<Citadel, RenderError> {
        let type_id: ItemTypeId = payload.id_at("structureShowInfoData", SHOW_INFO_TYPE_INDEX)?;
        let system_id: SolarSystemId = payload.id("solarsystemID")?;
        let structure_id: StructureId = payload.id("structureID")?;

        let kind = self.resolver.resolve_item(type_id).await?;
        let system = self.resolver.resolve_system(system_id).await?;
        let name = self.resolver.resolve_structure_name(structure_id).await?;

        Ok(Citadel { kind, name, system })
    }

    pub(super) async fn structure_transferred(
        &self,
        payload: &Payload,
    ) -> Result<String, RenderError> {
        let from_id: CorporationId = payload.last_id("fromCorporationLinkData")?;
        let to_id: CorporationId = payload.last_id("toCorporationLinkData")?;
        let structure = payload.string("structureName")?;
        let system_id: SolarSystemId = payload.last_id("solarSystemLinkData")?;
        let character_id: CharacterId = payload.last_id("characterLinkData")?;

        let from_corporation = self.resolver.resolve_corporation(from_id).await?;
        let to_corporation = self.resolver.resolve_corporation(to_id).await?;
        let system = self.resolver.resolve_system(system_id).await?;
        let character = self.resolver.resolve_character(character_id).await?;

        Ok(format!(
            "\"{}\" structure in {} has been transferred from {} to {} by {}",
            structure, system, from_corporation, to_corporation, character
        ))
    }

    pub(super) async fn citadel_low_fuel(&self, payload: &Payload) -> Result<String, RenderError> {
        let citadel = self.citadel(payload).await?;
        Ok(format!(
            "Citadel ({}, \"{}\") low fuel alert in {}",
            citadel.kind, citadel.name, citadel.system
        ))
    }

    pub(super) async fn citadel_anchored(&self, payload: &Payload) -> Result<String, RenderError> {
        let owner_id: CorporationId = payload.last_id("ownerCorpLinkData")?;
        let citadel = self.citadel(payload).await?;
        let owner = self.resolver.resolve_corporation(owner_id).await?;

        Ok(format!(
            "Citadel ({}, \"{}\") anchored in {} by {}",
            citadel.kind, citadel.name, citadel.system, owner
        ))
    }

    pub(super) async fn citadel_unanchored(
        &self,
        payload: &Payload,
    ) -> Result<String, RenderError> {
        let owner_id: CorporationId = payload.last_id("ownerCorpLinkData")?;
        let citadel = self.citadel(payload).await?;
        let owner = self.resolver.resolve_corporation(owner_id).await?;

        Ok(format!(
            "Citadel ({}, \"{}\") unanchored in {} by {}",
            citadel.kind, citadel.name, citadel.system, owner
        ))
    }

    /// Percentages arrive already scaled to 0-100.
    pub(super) async fn citadel_attacked(&self, payload: &Payload) -> Result<String, RenderError> {
        let attacker_id: CharacterId = payload.id("charID")?;
        let shield = payload.float("shieldPercentage")?;
        let armor = payload.float("armorPercentage")?;
        let hull = payload.float("hullPercentage")?;
        let citadel = self.citadel(payload).await?;
        let attacker = self.resolver.resolve_character(attacker_id).await?;

        Ok(format!(
            "Citadel ({}, \"{}\") attacked ({} shield, {} armor, {} hull) in {} by {}",
            citadel.kind,
            citadel.name,
            percent(shield),
            percent(armor),
            percent(hull),
            citadel.system,
            attacker
        ))
    }

    pub(super) async fn citadel_onlined(&self, payload: &Payload) -> Result<String, RenderError> {
        let citadel = self.citadel(payload).await?;
        Ok(format!(
            "Citadel ({}, \"{}\") onlined in {}",
            citadel.kind, citadel.name, citadel.system
        ))
    }

    /// `timeLeft` counts from the moment of rendering, not from the notification.
    pub(super) async fn citadel_reinforced(
        &self,
        payload: &Payload,
    ) -> Result<String, RenderError> {
        let exits = self.time_left(payload, "timeLeft")?;
        let citadel = self.citadel(payload).await?;

        Ok(format!(
            "Citadel ({}, \"{}\") reinforced in {} (comes out of reinforce on \"{}\")",
            citadel.kind, citadel.name, citadel.system, exits
        ))
    }

    pub(super) async fn citadel_out_of_fuel(
        &self,
        payload: &Payload,
    ) -> Result<String, RenderError> {
        let service_ids = payload.int_list("listOfServiceModuleIDs")?;
        let citadel = self.citadel(payload).await?;
        let services = try_join_all(
            service_ids
                .into_iter()
                .map(|id| self.resolver.resolve_item(ItemTypeId::new(id))),
        )
        .await?;

        Ok(format!(
            "Citadel ({}, \"{}\") ran out of fuel in {} with services \"{}\"",
            citadel.kind,
            citadel.name,
            citadel.system,
            services.join(", ")
        ))
    }

    /// Citadel destroyed.
    ///
    /// No notification type routes here yet; the payload shape matches the
    /// anchoring notifications (`ownerCorpLinkData` plus the citadel fields).
    pub async fn citadel_destroyed(&self, payload: &Payload) -> Result<String, RenderError> {
        let owner_id: CorporationId = payload.last_id("ownerCorpLinkData")?;
        let citadel = self.citadel(payload).await?;
        let owner = self.resolver.resolve_corporation(owner_id).await?;

        Ok(format!(
            "Citadel ({}, \"{}\") destroyed in {} owned by {}",
            citadel.kind, citadel.name, citadel.system, owner
        ))
    }
}
