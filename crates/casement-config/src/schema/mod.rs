//! Configuration schema types for Casement.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod events;
mod logging;
mod store;
mod window;

pub use events::*;
pub use logging::*;
pub use store::*;
pub use window::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration for Casement.
///
/// Only override what you want to change.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct CasementConfig {
    pub window: WindowConfig,
    pub events: EventsConfig,
    pub store: StoreConfig,
    pub logging: LoggingConfig,
}
