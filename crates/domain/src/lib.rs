//! Reconbot domain types.
//!
//! Pure types shared by the engine: entity ids, notification envelopes, the
//! decoded payload, directory records, and the timestamp conversions used when
//! printing notifications. Nothing in this crate performs I/O or reads the clock.

pub mod directory;
pub mod error;
pub mod ids;
pub mod notification;
pub mod payload;
pub mod sovereignty;
pub mod time_codec;

pub use directory::{MoonRecord, PlanetRecord, StructureRecord, WarParty, UNKNOWN_STRUCTURE_NAME};
pub use error::{PayloadError, TimestampError};
pub use ids::{
    AllianceId, CharacterId, CorporationId, ItemTypeId, MoonId, PlanetId, SolarSystemId,
    StructureId,
};
pub use notification::{NotificationType, RawNotification};
pub use payload::Payload;
pub use sovereignty::CampaignEventType;
pub use time_codec::{
    duration_to_future_date, epoch_to_date, parse_notification_timestamp, CalendarDate,
};
