//! Reconbot Engine library.
//!
//! Renders game notifications into single chat lines.
//!
//! ## Structure
//!
//! - `entities/` - Entity modules wrapping port operations
//! - `use_cases/` - Notification printing
//! - `infrastructure/` - External dependency implementations (ports + adapters)
//! - `app` - Application composition

pub mod app;
pub mod entities;
pub mod infrastructure;
pub mod use_cases;

/// Test fixtures shared by unit tests.
#[cfg(test)]
pub mod test_fixtures;

pub use app::App;
