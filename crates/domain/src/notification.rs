//! Notification records as delivered by the game API.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A notification as fetched from the API, before any decoding.
///
/// Only `type`, `timestamp` and `text` take part in rendering; the remaining
/// envelope fields are carried so hosts can deduplicate and filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawNotification {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notification_id: Option<i64>,
    #[serde(rename = "type")]
    pub kind: String,
    /// ISO-8601, e.g. `2016-05-01T12:00:00Z`
    pub timestamp: String,
    /// Embedded YAML document, see [`crate::Payload`]
    #[serde(default)]
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sender_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sender_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_read: Option<bool>,
}

impl RawNotification {
    pub fn new(
        kind: impl Into<String>,
        timestamp: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            notification_id: None,
            kind: kind.into(),
            timestamp: timestamp.into(),
            text: text.into(),
            sender_id: None,
            sender_type: None,
            is_read: None,
        }
    }

    /// The routed type of this notification, if it is one we print.
    pub fn notification_type(&self) -> Option<NotificationType> {
        NotificationType::from_tag(&self.kind)
    }
}

macro_rules! notification_types {
    ($($variant:ident),+ $(,)?) => {
        /// Notification types that have a printing rule.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum NotificationType {
            $($variant),+
        }

        impl NotificationType {
            pub const ALL: &'static [NotificationType] = &[$(NotificationType::$variant),+];

            /// Look up a type by its API tag. Tags are case-sensitive.
            pub fn from_tag(tag: &str) -> Option<Self> {
                match tag {
                    $(stringify!($variant) => Some(Self::$variant),)+
                    _ => None,
                }
            }

            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => stringify!($variant)),+
                }
            }
        }
    };
}

// Tags are spelled as the API spells them, including `SovAllClaimAquiredMsg`.
notification_types! {
    AllWarDeclaredMsg,
    SovAllClaimLostMsg,
    SovAllClaimAquiredMsg,
    TowerAlertMsg,
    StationConquerMsg,
    OrbitalAttacked,
    OrbitalReinforced,
    OwnershipTransferred,
    EntosisCaptureStarted,
    StationServiceEnabled,
    StationServiceDisabled,
    SovStructureReinforced,
    SovCommandNodeEventStarted,
    SovStructureDestroyed,
    SovStationEnteredFreeport,
    StructureFuelAlert,
    StructureAnchoring,
    StructureUnanchoring,
    StructureUnderAttack,
    StructureOnline,
    StructureLostShields,
    StructureServicesOffline,
    AllAnchoringMsg,
    InfrastructureHubBillAboutToExpire,
    SovStructureSelfDestructRequested,
    SovStructureSelfDestructFinished,
}

impl fmt::Display for NotificationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_tag_round_trips() {
        for kind in NotificationType::ALL {
            assert_eq!(NotificationType::from_tag(kind.as_str()), Some(*kind));
        }
    }

    #[test]
    fn routes_twenty_six_tags() {
        assert_eq!(NotificationType::ALL.len(), 26);
    }

    #[test]
    fn unknown_and_miscased_tags_are_not_routed() {
        assert_eq!(NotificationType::from_tag("CharLeftCorpMsg"), None);
        assert_eq!(NotificationType::from_tag("structureonline"), None);
        assert_eq!(NotificationType::from_tag(""), None);
    }

    #[test]
    fn deserializes_api_envelope() {
        let json = r#"{
            "is_read": true,
            "notification_id": 649238771,
            "sender_id": 1000137,
            "sender_type": "corporation",
            "text": "solarSystemID: 30000142\n",
            "timestamp": "2017-03-01T10:00:00Z",
            "type": "SovStructureDestroyed"
        }"#;

        let raw: RawNotification = serde_json::from_str(json).unwrap();

        assert_eq!(raw.notification_id, Some(649238771));
        assert_eq!(raw.kind, "SovStructureDestroyed");
        assert_eq!(
            raw.notification_type(),
            Some(NotificationType::SovStructureDestroyed)
        );
        assert_eq!(raw.sender_type.as_deref(), Some("corporation"));
    }

    #[test]
    fn envelope_text_defaults_to_empty() {
        let json = r#"{"type": "CorpAllBillMsg", "timestamp": "2017-03-01T10:00:00Z"}"#;
        let raw: RawNotification = serde_json::from_str(json).unwrap();
        assert_eq!(raw.text, "");
        assert_eq!(raw.notification_type(), None);
    }
}
