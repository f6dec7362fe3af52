//! Entity modules - Domain capability encapsulation.
//!
//! Each module wraps operations over a port and provides the building blocks
//! for use cases.

pub mod resolver;

pub use resolver::EntityResolver;
