//! Core types and service wiring for the kerbside bin-collection aggregator.

/// Locale-flexible parsing for the date strings councils render on their pages.
pub mod dates;
/// Typed element queries over parsed HTML documents.
pub mod html;
/// Domain models and identifiers shared by all sources.
pub mod model;
/// Registry and helpers for plugging council-specific sources into the service.
pub mod plugin;
/// Traits describing the source interfaces.
pub mod ports;
/// High-level service facade used by clients.
pub mod service;

pub use model::*;
pub use plugin::*;
pub use ports::*;
pub use service::*;
