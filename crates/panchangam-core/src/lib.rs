//! Shared types, error handling, and observability plumbing for the
//! panchangam calculation engine. Every other crate in the workspace
//! depends on this one; it depends on nothing in the workspace.

pub mod config;
pub mod error;
pub mod observability;
pub mod time;
pub mod types;
pub mod tz;

pub use config::PanchangamConfig;
pub use error::{Category, EnhancedError, PanchangamError, Severity};
pub use observability::ObservabilityContext;
pub use time::{Ayanamsa, JulianDay, Longitude};
pub use types::*;
pub use tz::resolve_timezone;
