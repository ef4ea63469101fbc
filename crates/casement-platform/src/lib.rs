pub mod display;
pub mod input;
pub mod paths;

pub use display::{DisplayQuery, StaticDisplays};
pub use input::{KeyCombo, KeyInput, KeyPhase, ModifierKeys};
pub use paths::{config_dir, config_file, data_dir, ensure_dirs, window_state_dir};
