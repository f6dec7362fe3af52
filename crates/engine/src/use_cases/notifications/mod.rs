//! Notification printing use case.
//!
//! Turns raw notifications into single chat lines:
//!
//! ```text
//! [2017-03-01 10:00:00] SOV lost in 1DQ1-A by Test Corp
//! ```
//!
//! Each routed notification type has one rule that reads its payload fields,
//! resolves the ids in them, and fills a fixed template. Downstream consumers
//! match on the wording of these templates, so it must not drift.

mod citadel;
mod sovereignty;
mod starbase;
mod war;

use std::sync::Arc;

use reconbot_domain::{
    duration_to_future_date, epoch_to_date, parse_notification_timestamp, CalendarDate,
    NotificationType, Payload, PayloadError, RawNotification, TimestampError,
};

use crate::entities::EntityResolver;
use crate::infrastructure::ports::{ClockPort, LookupError};

/// Body returned for notification types without a printing rule.
pub const UNKNOWN_NOTIFICATION_TYPE: &str = "Unknown notification type for printing";

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("Payload error: {0}")]
    Payload(#[from] PayloadError),
    #[error("Timestamp error: {0}")]
    Timestamp(#[from] TimestampError),
    #[error("Lookup error: {0}")]
    Lookup(#[from] LookupError),
}

/// Renders notifications into chat lines.
///
/// Stateless apart from its collaborators; share it behind an `Arc`.
pub struct NotificationPrinter {
    resolver: Arc<EntityResolver>,
    clock: Arc<dyn ClockPort>,
}

impl NotificationPrinter {
    pub fn new(resolver: Arc<EntityResolver>, clock: Arc<dyn ClockPort>) -> Self {
        Self { resolver, clock }
    }

    /// Render a notification as `[YYYY-MM-DD HH:MM:SS] body`.
    pub async fn transform(&self, raw: &RawNotification) -> Result<String, RenderError> {
        let date = parse_notification_timestamp(&raw.timestamp)?;
        let body = self.render(raw).await?;
        Ok(format!("[{}] {}", date, body))
    }

    /// Render a batch, one result per notification, in input order.
    ///
    /// A failing notification is logged and does not stop the rest.
    pub async fn transform_all(
        &self,
        notifications: &[RawNotification],
    ) -> Vec<Result<String, RenderError>> {
        let mut lines = Vec::with_capacity(notifications.len());
        for raw in notifications {
            let line = self.transform(raw).await;
            if let Err(error) = &line {
                tracing::warn!(
                    notification_id = ?raw.notification_id,
                    notification_type = %raw.kind,
                    error = %error,
                    "Failed to print notification"
                );
            }
            lines.push(line);
        }
        lines
    }

    /// Render the body of a notification, without the timestamp prefix.
    ///
    /// Types without a rule render as [`UNKNOWN_NOTIFICATION_TYPE`]. The
    /// payload is decoded before the type is looked up, so a malformed body
    /// fails even for unrouted types.
    pub async fn render(&self, raw: &RawNotification) -> Result<String, RenderError> {
        let payload = Payload::decode(&raw.text)?;

        let Some(kind) = raw.notification_type() else {
            tracing::debug!(
                notification_type = %raw.kind,
                "No printing rule for notification type"
            );
            return Ok(UNKNOWN_NOTIFICATION_TYPE.to_string());
        };

        self.render_payload(kind, &payload).await
    }

    /// Dispatch a decoded payload to the rule for `kind`.
    pub async fn render_payload(
        &self,
        kind: NotificationType,
        payload: &Payload,
    ) -> Result<String, RenderError> {
        use NotificationType::*;

        tracing::trace!(
            notification_type = %kind,
            fields = payload.len(),
            "Rendering notification"
        );

        match kind {
            AllWarDeclaredMsg => self.corporation_war_declared(payload).await,
            SovAllClaimLostMsg => self.sov_claim_lost(payload).await,
            SovAllClaimAquiredMsg => self.sov_claim_acquired(payload).await,
            TowerAlertMsg => self.pos_attack(payload).await,
            StationConquerMsg => self.station_conquered(payload).await,
            OrbitalAttacked => self.customs_office_attacked(payload).await,
            OrbitalReinforced => self.customs_office_reinforced(payload).await,
            OwnershipTransferred => self.structure_transferred(payload).await,
            EntosisCaptureStarted => self.entosis_capture_started(payload).await,
            StationServiceEnabled => self.entosis_enabled_structure(payload).await,
            StationServiceDisabled => self.entosis_disabled_structure(payload).await,
            SovStructureReinforced => self.sov_structure_reinforced(payload).await,
            SovCommandNodeEventStarted => self.sov_command_nodes_decloaked(payload).await,
            SovStructureDestroyed => self.sov_structure_destroyed(payload).await,
            SovStationEnteredFreeport => self.sov_structure_freeported(payload).await,
            StructureFuelAlert => self.citadel_low_fuel(payload).await,
            StructureAnchoring => self.citadel_anchored(payload).await,
            StructureUnanchoring => self.citadel_unanchored(payload).await,
            StructureUnderAttack => self.citadel_attacked(payload).await,
            StructureOnline => self.citadel_onlined(payload).await,
            StructureLostShields => self.citadel_reinforced(payload).await,
            StructureServicesOffline => self.citadel_out_of_fuel(payload).await,
            AllAnchoringMsg => self.structure_anchoring_alert(payload).await,
            InfrastructureHubBillAboutToExpire => self.ihub_bill_about_to_expire(payload).await,
            SovStructureSelfDestructRequested => {
                self.sov_structure_self_destruct_requested(payload).await
            }
            SovStructureSelfDestructFinished => self.sov_structure_self_destructed(payload).await,
        }
    }

    /// Read a tick-duration field as the date it runs out, counted from now.
    fn time_left(
        &self,
        payload: &Payload,
        field: &'static str,
    ) -> Result<CalendarDate, RenderError> {
        let ticks = payload.int(field)?;
        Ok(duration_to_future_date(ticks, self.clock.now())?)
    }
}

/// Read a file-time field as an absolute date.
fn file_time(payload: &Payload, field: &'static str) -> Result<CalendarDate, RenderError> {
    Ok(epoch_to_date(payload.int(field)?)?)
}

/// Format a percentage with one decimal, as used in attack alerts.
fn percent(value: f64) -> String {
    format!("{:.1}%", value)
}
