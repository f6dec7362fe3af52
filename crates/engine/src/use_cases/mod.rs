//! Use cases - User story orchestration.
//!
//! Use cases orchestrate across entity modules to fulfill user stories.

pub mod notifications;

// Re-export main types
pub use notifications::{NotificationPrinter, RenderError, UNKNOWN_NOTIFICATION_TYPE};
