//! HTTP request handlers organized by domain
//!
//! Each submodule contains handlers for a specific API area.

pub mod analytics;
pub mod catalog;
pub mod dashboard;
pub mod entries;
pub mod export;
pub mod insights;
pub mod profile;

// Re-export all handlers for use in router
pub use analytics::*;
pub use catalog::*;
pub use dashboard::*;
pub use entries::*;
pub use export::*;
pub use insights::*;
pub use profile::*;
