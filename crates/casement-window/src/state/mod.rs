//! Restores a window's geometry at startup and saves it on close.

mod resolve;

#[cfg(test)]
mod tests;

pub use resolve::{default_geometry, ensure_visible, is_visible, GeometrySource, Resolution};

use casement_common::Rect;
use casement_platform::DisplayQuery;
use tracing::{debug, info, warn};

use crate::host::HostWindow;
use crate::store::GeometryStore;

/// Lifecycle of a [`WindowStateManager`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Geometry decided but not yet applied to a window.
    Resolved,
    /// Applied; following the window until it closes.
    Tracking,
    /// The window closed. Nothing more is captured or saved.
    Disposed,
}

/// Owns the persisted geometry of one window.
///
/// It is the only writer for its key. The geometry used at startup is kept
/// apart from what gets saved: only bounds captured from the live window
/// are ever written back.
#[derive(Debug)]
pub struct WindowStateManager<S: GeometryStore> {
    key: String,
    store: S,
    default_geometry: Rect,
    resolution: Resolution,
    last_captured: Option<Rect>,
    phase: Phase,
}

impl<S: GeometryStore> WindowStateManager<S> {
    /// Decides the geometry for the window stored under `key`.
    ///
    /// Display queries are made fresh. A failed primary query puts the
    /// default at the origin; a failed display listing makes any saved
    /// geometry count as invisible.
    pub fn resolve(
        key: impl Into<String>,
        store: S,
        displays: &impl DisplayQuery,
        preferred_size: (u32, u32),
    ) -> Self {
        let key = key.into();

        let primary = displays
            .primary()
            .inspect_err(|e| warn!("primary display unavailable, using origin: {e}"))
            .ok();
        let default_geometry = resolve::default_geometry(primary, preferred_size);

        let saved = store.load(&key);
        let connected = displays.all().unwrap_or_else(|e| {
            warn!("display query failed, ignoring saved geometry: {e}");
            Vec::new()
        });
        let resolution = resolve::ensure_visible(saved, default_geometry, &connected);

        match resolution.source {
            GeometrySource::Restored => {
                info!("restored {key} geometry {}", resolution.geometry)
            }
            GeometrySource::Reset => info!(
                "saved {key} geometry is off-screen on {} display(s), reset to {}",
                connected.len(),
                resolution.geometry
            ),
            GeometrySource::Default => {
                debug!("no saved {key} geometry, using {}", resolution.geometry)
            }
        }

        Self {
            key,
            store,
            default_geometry,
            resolution,
            last_captured: None,
            phase: Phase::Resolved,
        }
    }

    /// Resolves and immediately applies to `host`.
    pub fn attach(
        key: impl Into<String>,
        store: S,
        displays: &impl DisplayQuery,
        preferred_size: (u32, u32),
        host: &mut impl HostWindow,
    ) -> Self {
        let mut manager = Self::resolve(key, store, displays, preferred_size);
        manager.apply(host);
        manager
    }

    /// Sets the resolved geometry on `host` and starts tracking.
    pub fn apply(&mut self, host: &mut impl HostWindow) {
        if self.phase != Phase::Resolved {
            return;
        }
        host.set_bounds(self.resolution.geometry);
        self.phase = Phase::Tracking;
    }

    /// Records the window's bounds as the latest good geometry, unless it
    /// is minimized or maximized. Hosts call this on move and resize.
    pub fn track(&mut self, host: &impl HostWindow) -> Option<Rect> {
        if self.phase != Phase::Tracking || host.is_minimized() || host.is_maximized() {
            return None;
        }
        let bounds = host.bounds();
        self.last_captured = Some(bounds);
        Some(bounds)
    }

    /// Handles the host's closing signal.
    ///
    /// Captures the current bounds if they are meaningful, then saves the
    /// latest captured geometry. If nothing was captured this session the
    /// store is left alone. Returns what was written.
    pub fn on_close(&mut self, host: &impl HostWindow) -> Option<Rect> {
        if self.phase != Phase::Tracking {
            return None;
        }
        self.track(host);
        self.phase = Phase::Disposed;

        let Some(geometry) = self.last_captured else {
            debug!("{} closed without a usable geometry, keeping saved value", self.key);
            return None;
        };

        match self.store.set(&self.key, geometry) {
            Ok(()) => Some(geometry),
            Err(e) => {
                warn!("failed to save {} geometry: {e}", self.key);
                None
            }
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    pub fn default_geometry(&self) -> Rect {
        self.default_geometry
    }

    pub fn last_captured(&self) -> Option<Rect> {
        self.last_captured
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
