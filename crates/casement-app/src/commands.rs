//! Subcommand handlers. Each prints its result to stdout.

use std::path::{Path, PathBuf};

use casement_common::{concat_namespace, CasementError, Rect};
use casement_config::CasementConfig;
use casement_platform::StaticDisplays;
use casement_window::{
    GeometrySource, GeometryStore, HeadlessWindow, JsonFileStore, WindowStateManager,
};

use crate::app::{App, AppMode};
use crate::cli::{Command, Target};

pub fn execute(
    command: Command,
    config: &CasementConfig,
    config_path: Option<&Path>,
) -> Result<(), CasementError> {
    match command {
        Command::Resolve { displays, target } => {
            let geometry_key = key(config, &target);
            let store = store(config, &target)?;
            let displays = StaticDisplays::new(displays);
            let manager = WindowStateManager::resolve(
                &geometry_key,
                store,
                &displays,
                config.window.preferred_size(),
            );
            let resolution = manager.resolution();
            println!("{} ({})", resolution.geometry, source_label(resolution.source));
        }
        Command::Show { target } => {
            let geometry_key = key(config, &target);
            match store(config, &target)?.load(&geometry_key) {
                Some(rect) => println!("{rect}"),
                None => println!("none"),
            }
        }
        Command::Save {
            geometry,
            displays,
            maximized,
            minimized,
            target,
        } => {
            let saved = save(config, geometry, displays, maximized, minimized, &target)?;
            match saved {
                Some(rect) => println!("saved {rect}"),
                None => println!("nothing saved"),
            }
        }
        Command::Paths => {
            let config_file = match config_path {
                Some(path) => path.to_path_buf(),
                None => casement_platform::config_file()?,
            };
            println!("config: {}", config_file.display());
            println!("store:  {}", store_dir(config, None)?.display());
        }
        Command::Config => {
            println!("{}", casement_config::config_to_json(config));
        }
    }
    Ok(())
}

/// Runs a headless window through launch and close.
fn save(
    config: &CasementConfig,
    geometry: Rect,
    displays: Vec<Rect>,
    maximized: bool,
    minimized: bool,
    target: &Target,
) -> Result<Option<Rect>, CasementError> {
    let primary = displays.first().copied();
    let displays = StaticDisplays::new(displays);
    let store = store(config, target)?;

    let app = App::new(config.clone(), AppMode::from_env());
    let mut window = app.launch_named(&target.name, HeadlessWindow::new(), store, &displays);

    window.host_mut().move_to(geometry);
    if maximized {
        window.host_mut().maximize(primary.unwrap_or(geometry));
    } else if minimized {
        window.host_mut().minimize();
    }
    Ok(app.close_window(&mut window))
}

fn key(config: &CasementConfig, target: &Target) -> String {
    concat_namespace(&config.store.namespace, &target.name, "-")
}

fn store(config: &CasementConfig, target: &Target) -> Result<JsonFileStore, CasementError> {
    Ok(JsonFileStore::new(store_dir(config, target.store_dir.as_deref())?))
}

/// CLI override, then `[store] directory`, then the platform data dir.
/// Empty paths are skipped.
pub fn store_dir(config: &CasementConfig, cli: Option<&Path>) -> Result<PathBuf, CasementError> {
    let chosen = [cli, config.store.directory.as_deref()]
        .into_iter()
        .flatten()
        .find(|dir| !dir.as_os_str().is_empty());
    match chosen {
        Some(dir) => Ok(dir.to_path_buf()),
        None => Ok(casement_platform::window_state_dir()?),
    }
}

fn source_label(source: GeometrySource) -> &'static str {
    match source {
        GeometrySource::Restored => "restored",
        GeometrySource::Default => "default",
        GeometrySource::Reset => "reset",
    }
}
