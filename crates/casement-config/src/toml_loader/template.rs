//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# Casement Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[window]
# Preferred size of the main window. Used to build the centered default
# geometry when no saved geometry is visible on the connected displays.
# width = 800            # 100-16384
# height = 600           # 100-16384
# isolated = true
# preload = ""
# title = "Casement"

[events]
# Warn when a single event has more listeners than this.
# max_listeners = 10     # 1-1000

[store]
# Saved window geometry is keyed "<namespace>-<window name>".
# namespace = "window-state"
# directory = "/path/to/window-state"   # unset uses the platform data directory

[logging]
# level = "info"         # trace, debug, info, warn, error
"##
    .to_string()
}
