//! Starbases (POS), customs offices (POCO) and moon anchoring.

use reconbot_domain::{
    CharacterId, CorporationId, ItemTypeId, MoonId, Payload, PayloadError, PlanetId,
};

use super::{file_time, percent, NotificationPrinter, RenderError};

impl NotificationPrinter {
    /// Shield, armor and hull arrive as fractions of 1.
    pub(super) async fn pos_attack(&self, payload: &Payload) -> Result<String, RenderError> {
        let moon_id: MoonId = payload.id("moonID")?;
        let attacker_id: CharacterId = payload.id("aggressorID")?;
        let type_id: ItemTypeId = payload.id("typeID")?;
        let shield = payload.float("shieldValue")? * 100.0;
        let armor = payload.float("armorValue")? * 100.0;
        let hull = payload.float("hullValue")? * 100.0;

        let moon = self.resolver.resolve_moon(moon_id).await?;
        let attacker = self.resolver.resolve_character(attacker_id).await?;
        let tower = self.resolver.resolve_item(type_id).await?;

        Ok(format!(
            "{} POS \"{}\" ({} shield, {} armor, {} hull) under attack by {}",
            moon.name,
            tower,
            percent(shield),
            percent(armor),
            percent(hull),
            attacker
        ))
    }

    pub(super) async fn customs_office_attacked(
        &self,
        payload: &Payload,
    ) -> Result<String, RenderError> {
        let attacker_id: CharacterId = payload.id("aggressorID")?;
        let planet_id: PlanetId = payload.id("planetID")?;
        let shields = whole_percent(payload.float("shieldLevel")?)
            .ok_or(PayloadError::mismatch("shieldLevel", "a fraction"))?;

        let attacker = self.resolver.resolve_character(attacker_id).await?;
        let planet = self.resolver.resolve_planet(planet_id).await?;

        Ok(format!(
            "\"{}\" POCO ({}% shields) has been attacked by {}",
            planet, shields, attacker
        ))
    }

    pub(super) async fn customs_office_reinforced(
        &self,
        payload: &Payload,
    ) -> Result<String, RenderError> {
        let attacker_id: CharacterId = payload.id("aggressorID")?;
        let planet_id: PlanetId = payload.id("planetID")?;
        let exit_time = file_time(payload, "reinforceExitTime")?;

        let attacker = self.resolver.resolve_character(attacker_id).await?;
        let planet = self.resolver.resolve_planet(planet_id).await?;

        Ok(format!(
            "\"{}\" POCO has been reinforced by {} (comes out of reinforce on \"{}\")",
            planet, attacker, exit_time
        ))
    }

    pub(super) async fn structure_anchoring_alert(
        &self,
        payload: &Payload,
    ) -> Result<String, RenderError> {
        let corp_id: CorporationId = payload.id("corpID")?;
        let moon_id: MoonId = payload.id("moonID")?;
        let type_id: ItemTypeId = payload.id("typeID")?;

        let owner = self.resolver.resolve_corporation(corp_id).await?;
        let moon = self.resolver.resolve_moon(moon_id).await?;
        let structure = self.resolver.resolve_item(type_id).await?;

        Ok(format!(
            "New structure ({}) anchored in \"{}\" by {}",
            structure, moon.name, owner
        ))
    }

    /// Starbase anchored at a moon.
    ///
    /// Not routed from any notification type: `AllAnchoringMsg` is printed by
    /// the structure anchoring rule, which also names the structure type.
    /// Available to hosts that want the shorter wording.
    pub async fn pos_anchoring_alert(&self, payload: &Payload) -> Result<String, RenderError> {
        let corp_id: CorporationId = payload.id("corpID")?;
        let moon_id: MoonId = payload.id("moonID")?;

        let owner = self.resolver.resolve_corporation(corp_id).await?;
        let moon = self.resolver.resolve_moon(moon_id).await?;

        Ok(format!("New POS anchored in \"{}\" by {}", moon.name, owner))
    }
}

/// A fraction of 1 as a truncated whole percentage, if it fits in an `i64`.
fn whole_percent(fraction: f64) -> Option<i64> {
    let percent = (fraction * 100.0).trunc();
    (percent.is_finite() && percent >= i64::MIN as f64 && percent < i64::MAX as f64)
        .then_some(percent as i64)
}
