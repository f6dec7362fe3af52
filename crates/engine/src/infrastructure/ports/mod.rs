//! Port traits for infrastructure boundaries.
//!
//! Ports exist for:
//! - Entity name lookups (could swap a static JSON file -> the live API)
//! - Clock (for testing)

mod directory;
mod error;
mod testing;

pub use directory::EntityDirectory;
pub use error::LookupError;
pub use testing::ClockPort;

// =============================================================================
// Test-Only Mocks (only available during test builds)
// =============================================================================
#[cfg(test)]
pub use directory::MockEntityDirectory;

#[cfg(test)]
pub use testing::MockClockPort;
