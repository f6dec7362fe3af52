//! Test fixtures: a small name directory, a fixed clock, and one sample
//! payload per notification type.
//!
//! # Usage
//!
//! ```rust,ignore
//! use crate::test_fixtures::{printer, raw, payloads};
//!
//! #[tokio::test]
//! async fn renders_sov_loss() {
//!     let kind = NotificationType::SovAllClaimLostMsg;
//!     let body = printer().render(&raw(kind, payloads::sample(kind))).await.unwrap();
//! }
//! ```

pub mod payloads;

use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};
use reconbot_domain::{NotificationType, RawNotification};

use crate::entities::EntityResolver;
use crate::infrastructure::clock::FixedClock;
use crate::infrastructure::name_directory::JsonNameDirectory;
use crate::use_cases::notifications::NotificationPrinter;

/// Names for every id used in `payloads`.
pub const NAMES_JSON: &str = r#"{
    "corporations": {
        "98000001": "Test Corp",
        "98000002": "Other Corp",
        "98000003": "New Owner Corp"
    },
    "alliances": { "99000001": "Test Alliance" },
    "characters": {
        "90000001": "Joe Pilot",
        "90000002": "Ann Hauler"
    },
    "systems": {
        "30000142": "Jita",
        "30004759": "1DQ1-A"
    },
    "items": {
        "2233": "Customs Office",
        "16213": "Caldari Control Tower",
        "32226": "Territorial Claim Unit",
        "32458": "Infrastructure Hub",
        "35832": "Astrahus",
        "35894": "Standup Cloning Center I",
        "35899": "Standup Manufacturing Plant I"
    },
    "planets": {
        "40009077": { "name": "Jita IV", "system_id": 30000142 }
    },
    "moons": {
        "40009082": { "name": "Jita IV - Moon 4" }
    },
    "structures": {
        "1021975535893": { "name": "Jita - Keepstar" },
        "1022000000000": {}
    }
}"#;

/// Every id that appears in `NAMES_JSON`. None of them may leak into a rendered line.
pub const FIXTURE_IDS: &[i64] = &[
    98000001,
    98000002,
    98000003,
    99000001,
    90000001,
    90000002,
    30000142,
    30004759,
    2233,
    16213,
    32226,
    32458,
    35832,
    35894,
    35899,
    40009077,
    40009082,
    1021975535893,
    1022000000000,
];

/// The instant the fixed clock reports.
pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2017, 3, 1, 10, 0, 0).unwrap()
}

pub fn name_directory() -> Arc<JsonNameDirectory> {
    Arc::new(JsonNameDirectory::from_json(NAMES_JSON).expect("fixture names parse"))
}

pub fn resolver() -> Arc<EntityResolver> {
    Arc::new(EntityResolver::new(name_directory()))
}

/// Printer over the fixture directory with the clock pinned to `fixed_now()`.
pub fn printer() -> NotificationPrinter {
    NotificationPrinter::new(resolver(), Arc::new(FixedClock(fixed_now())))
}

pub fn raw(kind: NotificationType, text: &str) -> RawNotification {
    RawNotification::new(kind.as_str(), "2017-03-01T10:00:00Z", text)
}
