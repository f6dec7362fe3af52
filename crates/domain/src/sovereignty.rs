//! Sovereignty campaign vocabulary.

use std::fmt;

/// The sovereignty structure a campaign event is fought over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CampaignEventType {
    Tcu,
    Ihub,
    Station,
    Unknown(i64),
}

impl From<i64> for CampaignEventType {
    fn from(value: i64) -> Self {
        match value {
            1 => Self::Tcu,
            2 => Self::Ihub,
            3 => Self::Station,
            other => Self::Unknown(other),
        }
    }
}

impl fmt::Display for CampaignEventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Tcu => write!(f, "TCU"),
            Self::Ihub => write!(f, "IHUB"),
            Self::Station => write!(f, "Station"),
            Self::Unknown(code) => write!(f, "Unknown structure type \"{}\"", code),
        }
    }
}
