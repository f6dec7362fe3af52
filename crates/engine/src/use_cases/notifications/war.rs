//! War declarations.

use reconbot_domain::Payload;

use super::{NotificationPrinter, RenderError};

impl NotificationPrinter {
    /// Either side of a war may be a corporation or an alliance; see
    /// `EntityResolver::resolve_war_party`.
    pub(super) async fn corporation_war_declared(
        &self,
        payload: &Payload,
    ) -> Result<String, RenderError> {
        let against_id = payload.int("againstID")?;
        let declared_by_id = payload.int("declaredByID")?;

        let against = self.resolver.resolve_war_party(against_id).await?;
        let declared_by = self.resolver.resolve_war_party(declared_by_id).await?;

        Ok(format!(
            "War has been declared to {} by {}",
            against, declared_by
        ))
    }
}
