pub mod errors;
pub mod events;
pub mod namespace;
pub mod types;

pub use errors::{CasementError, ConfigError, PlatformError, StoreError};
pub use events::{Event, EventBus, EventToken, Listener, ListenerId, Registration, Topic};
pub use namespace::concat_namespace;
pub use types::Rect;

pub type Result<T> = std::result::Result<T, CasementError>;
