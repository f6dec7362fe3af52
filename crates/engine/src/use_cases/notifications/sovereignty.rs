//! Sovereignty: claims, entosis campaigns, sov structures and IHUB bills.

use reconbot_domain::{
    CampaignEventType, CharacterId, CorporationId, ItemTypeId, Payload, SolarSystemId,
};

use super::{file_time, NotificationPrinter, RenderError};

impl NotificationPrinter {
    pub(super) async fn sov_claim_lost(&self, payload: &Payload) -> Result<String, RenderError> {
        let (owner, system) = self.claim(payload).await?;
        Ok(format!("SOV lost in {} by {}", system, owner))
    }

    pub(super) async fn sov_claim_acquired(
        &self,
        payload: &Payload,
    ) -> Result<String, RenderError> {
        let (owner, system) = self.claim(payload).await?;
        Ok(format!("SOV acquired in {} by {}", system, owner))
    }

    /// Claiming corporation and system of a claim notification.
    async fn claim(&self, payload: &Payload) -> Result<(String, String), RenderError> {
        let corp_id: CorporationId = payload.id("corpID")?;
        let system_id: SolarSystemId = payload.id("solarSystemID")?;

        let owner = self.resolver.resolve_corporation(corp_id).await?;
        let system = self.resolver.resolve_system(system_id).await?;
        Ok((owner, system))
    }

    pub(super) async fn station_conquered(
        &self,
        payload: &Payload,
    ) -> Result<String, RenderError> {
        let system_id: SolarSystemId = payload.id("solarSystemID")?;
        let old_owner_id: CorporationId = payload.id("oldOwnerID")?;
        let new_owner_id: CorporationId = payload.id("newOwnerID")?;

        let system = self.resolver.resolve_system(system_id).await?;
        let old_owner = self.resolver.resolve_corporation(old_owner_id).await?;
        let new_owner = self.resolver.resolve_corporation(new_owner_id).await?;

        Ok(format!(
            "Station conquered from {} by {} in {}",
            old_owner, new_owner, system
        ))
    }

    pub(super) async fn entosis_capture_started(
        &self,
        payload: &Payload,
    ) -> Result<String, RenderError> {
        let (structure, system) = self.sov_structure(payload).await?;
        Ok(format!(
            "Capturing of \"{}\" in {} has started",
            structure, system
        ))
    }

    pub(super) async fn entosis_enabled_structure(
        &self,
        payload: &Payload,
    ) -> Result<String, RenderError> {
        let (structure, system) = self.sov_structure(payload).await?;
        Ok(format!(
            "Structure \"{}\" in {} has been enabled",
            structure, system
        ))
    }

    pub(super) async fn entosis_disabled_structure(
        &self,
        payload: &Payload,
    ) -> Result<String, RenderError> {
        let (structure, system) = self.sov_structure(payload).await?;
        Ok(format!(
            "Structure \"{}\" in {} has been disabled",
            structure, system
        ))
    }

    pub(super) async fn sov_structure_reinforced(
        &self,
        payload: &Payload,
    ) -> Result<String, RenderError> {
        let system_id: SolarSystemId = payload.id("solarSystemID")?;
        let campaign = CampaignEventType::from(payload.int("campaignEventType")?);
        let decloak = file_time(payload, "decloakTime")?;

        let system = self.resolver.resolve_system(system_id).await?;

        Ok(format!(
            "SOV structure \"{}\" in {} has been reinforced, nodes will decloak \"{}\"",
            campaign, system, decloak
        ))
    }

    pub(super) async fn sov_command_nodes_decloaked(
        &self,
        payload: &Payload,
    ) -> Result<String, RenderError> {
        let system_id: SolarSystemId = payload.id("solarSystemID")?;
        let campaign = CampaignEventType::from(payload.int("campaignEventType")?);

        let system = self.resolver.resolve_system(system_id).await?;

        Ok(format!(
            "Command nodes for \"{}\" SOV structure in {} have decloaked",
            campaign, system
        ))
    }

    pub(super) async fn sov_structure_destroyed(
        &self,
        payload: &Payload,
    ) -> Result<String, RenderError> {
        let (structure, system) = self.sov_structure(payload).await?;
        Ok(format!(
            "SOV structure \"{}\" in {} has been destroyed",
            structure, system
        ))
    }

    pub(super) async fn sov_structure_freeported(
        &self,
        payload: &Payload,
    ) -> Result<String, RenderError> {
        let exits = file_time(payload, "freeportexittime")?;
        let (structure, system) = self.sov_structure(payload).await?;
        Ok(format!(
            "SOV structure \"{}\" in {} has been freeported, exits freeport on \"{}\"",
            structure, system, exits
        ))
    }

    pub(super) async fn ihub_bill_about_to_expire(
        &self,
        payload: &Payload,
    ) -> Result<String, RenderError> {
        let corp_id: CorporationId = payload.id("corpID")?;
        let due = file_time(payload, "dueDate")?;
        let system_id: SolarSystemId = payload.id("solarSystemID")?;

        let corp = self.resolver.resolve_corporation(corp_id).await?;
        let system = self.resolver.resolve_system(system_id).await?;

        Ok(format!(
            "IHUB bill to {} for system {} will expire {}",
            corp, system, due
        ))
    }

    pub(super) async fn sov_structure_self_destruct_requested(
        &self,
        payload: &Payload,
    ) -> Result<String, RenderError> {
        let character_id: CharacterId = payload.id("charID")?;
        let destruct_at = file_time(payload, "destructTime")?;

        let (structure, system) = self.sov_structure(payload).await?;
        let character = self.resolver.resolve_character(character_id).await?;

        Ok(format!(
            "Self-destruction of \"{}\" SOV structure in {} has been requested by {}. \
             Structure will self-destruct on \"{}\"",
            structure, system, character, destruct_at
        ))
    }

    pub(super) async fn sov_structure_self_destructed(
        &self,
        payload: &Payload,
    ) -> Result<String, RenderError> {
        let (structure, system) = self.sov_structure(payload).await?;
        Ok(format!(
            "SOV structure \"{}\" has self destructed in {}",
            structure, system
        ))
    }

    /// Structure type and system of a sov structure notification.
    async fn sov_structure(&self, payload: &Payload) -> Result<(String, String), RenderError> {
        let system_id: SolarSystemId = payload.id("solarSystemID")?;
        let structure_type_id: ItemTypeId = payload.id("structureTypeID")?;

        let system = self.resolver.resolve_system(system_id).await?;
        let structure = self.resolver.resolve_item(structure_type_id).await?;
        Ok((structure, system))
    }
}
