use std::path::PathBuf;

use casement_common::Rect;
use clap::{Parser, Subcommand};

/// Casement: remembers where your windows were.
#[derive(Parser, Debug)]
#[command(name = "casement", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log filter directive override (e.g. `casement=debug`).
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Decide where a window would open on the given displays.
    Resolve {
        /// Display bounds as `WxH+X+Y`. The first is the primary display.
        #[arg(long = "display", required = true)]
        displays: Vec<Rect>,

        #[command(flatten)]
        target: Target,
    },

    /// Print the saved geometry of a window.
    Show {
        #[command(flatten)]
        target: Target,
    },

    /// Close a simulated window at GEOMETRY and save it as the app would.
    Save {
        /// Window bounds as `WxH+X+Y`.
        geometry: Rect,

        /// Display bounds as `WxH+X+Y`. The first is the primary display.
        #[arg(long = "display", default_value = "1920x1080+0+0")]
        displays: Vec<Rect>,

        /// Close the window while maximized.
        #[arg(long, conflicts_with = "minimized")]
        maximized: bool,

        /// Close the window while minimized.
        #[arg(long)]
        minimized: bool,

        #[command(flatten)]
        target: Target,
    },

    /// Print the config file and geometry store locations.
    Paths,

    /// Print the effective configuration as JSON.
    Config,
}

/// Which window, and where its geometry is stored.
#[derive(clap::Args, Debug, Clone)]
pub struct Target {
    /// Window name.
    #[arg(long, default_value = "main")]
    pub name: String,

    /// Geometry store directory override.
    #[arg(long)]
    pub store_dir: Option<PathBuf>,
}

pub fn parse() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_resolve_with_displays() {
        let args = Args::try_parse_from([
            "casement",
            "resolve",
            "--display",
            "1920x1080+0+0",
            "--display",
            "2560x1440+1920+0",
            "--name",
            "settings",
        ])
        .unwrap();

        match args.command {
            Command::Resolve { displays, target } => {
                assert_eq!(displays[1], Rect::new(1920, 0, 2560, 1440));
                assert_eq!(target.name, "settings");
                assert_eq!(target.store_dir, None);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn resolve_requires_a_display() {
        assert!(Args::try_parse_from(["casement", "resolve"]).is_err());
    }

    #[test]
    fn save_defaults() {
        let args = Args::try_parse_from(["casement", "save", "800x600+100+100"]).unwrap();
        match args.command {
            Command::Save {
                geometry,
                displays,
                maximized,
                minimized,
                target,
            } => {
                assert_eq!(geometry, Rect::new(100, 100, 800, 600));
                assert_eq!(displays, vec![Rect::new(0, 0, 1920, 1080)]);
                assert!(!maximized);
                assert!(!minimized);
                assert_eq!(target.name, "main");
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn save_rejects_conflicting_states() {
        let result =
            Args::try_parse_from(["casement", "save", "800x600+0+0", "--maximized", "--minimized"]);
        assert!(result.is_err());
    }

    #[test]
    fn bad_geometry_is_rejected() {
        assert!(Args::try_parse_from(["casement", "save", "800by600"]).is_err());
    }

    #[test]
    fn global_flags_after_subcommand() {
        let args =
            Args::try_parse_from(["casement", "paths", "--config", "/tmp/c.toml", "--log-level", "debug"])
                .unwrap();
        assert_eq!(args.config, Some(PathBuf::from("/tmp/c.toml")));
        assert_eq!(args.log_level.as_deref(), Some("debug"));
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }
}
