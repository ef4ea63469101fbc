use std::cell::Cell;
use std::path::PathBuf;

use casement_common::{PlatformError, Rect, StoreError};
use casement_platform::{DisplayQuery, StaticDisplays};

use super::*;
use crate::host::HeadlessWindow;
use crate::store::{JsonFileStore, MemoryStore};

const KEY: &str = "window-state-main";
const SIZE: (u32, u32) = (800, 600);
const PRIMARY: Rect = Rect::new(0, 0, 1920, 1080);
const CENTERED: Rect = Rect::new(560, 240, 800, 600);

fn one_display() -> StaticDisplays {
    StaticDisplays::single(PRIMARY)
}

fn store_with(saved: Rect) -> MemoryStore {
    let mut store = MemoryStore::new();
    store.set(KEY, saved).unwrap();
    store
}

/// Every write fails; counts attempts.
#[derive(Default)]
struct ReadOnlyStore {
    saved: Option<Rect>,
    attempts: Cell<usize>,
}

impl GeometryStore for ReadOnlyStore {
    fn load(&self, _key: &str) -> Option<Rect> {
        self.saved
    }

    fn set(&mut self, _key: &str, _value: Rect) -> Result<(), StoreError> {
        self.attempts.set(self.attempts.get() + 1);
        Err(StoreError::Io {
            path: PathBuf::from("/read-only/window-state-main.json"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only"),
        })
    }
}

struct BrokenDisplays {
    primary_ok: bool,
}

impl DisplayQuery for BrokenDisplays {
    fn primary(&self) -> Result<Rect, PlatformError> {
        if self.primary_ok {
            Ok(PRIMARY)
        } else {
            Err(PlatformError::DisplayError("no screen".into()))
        }
    }

    fn all(&self) -> Result<Vec<Rect>, PlatformError> {
        Err(PlatformError::DisplayError("enumeration failed".into()))
    }
}

// =============================================================================
// Resolution
// =============================================================================

#[test]
fn offscreen_geometry_resets_to_centered_default() {
    let store = store_with(Rect::new(2000, 0, 800, 600));
    let manager = WindowStateManager::resolve(KEY, store, &one_display(), SIZE);

    assert_eq!(manager.resolution().geometry, CENTERED);
    assert_eq!(manager.resolution().source, GeometrySource::Reset);
    assert_eq!(manager.phase(), Phase::Resolved);
}

#[test]
fn contained_geometry_is_restored_unchanged() {
    let saved = Rect::new(100, 100, 800, 600);
    let manager = WindowStateManager::resolve(KEY, store_with(saved), &one_display(), SIZE);

    assert_eq!(manager.resolution().geometry, saved);
    assert_eq!(manager.resolution().source, GeometrySource::Restored);
}

#[test]
fn nothing_saved_uses_default() {
    let manager = WindowStateManager::resolve(KEY, MemoryStore::new(), &one_display(), SIZE);
    assert_eq!(manager.resolution().geometry, CENTERED);
    assert_eq!(manager.resolution().source, GeometrySource::Default);
    assert_eq!(manager.default_geometry(), CENTERED);
}

#[test]
fn unplugged_monitor_resets_geometry() {
    // Saved while a second monitor sat to the right of the primary.
    let saved = Rect::new(2200, 200, 1024, 768);
    let before = StaticDisplays::new(vec![PRIMARY, Rect::new(1920, 0, 2560, 1440)]);
    let restored = WindowStateManager::resolve(KEY, store_with(saved), &before, SIZE);
    assert_eq!(restored.resolution().geometry, saved);

    let after = one_display();
    let reset = WindowStateManager::resolve(KEY, store_with(saved), &after, SIZE);
    assert_eq!(reset.resolution().geometry, CENTERED);
}

#[test]
fn geometry_on_secondary_display_is_kept() {
    let saved = Rect::new(-1200, 100, 800, 600);
    let displays = StaticDisplays::new(vec![PRIMARY, Rect::new(-1280, 0, 1280, 1024)]);
    let manager = WindowStateManager::resolve(KEY, store_with(saved), &displays, SIZE);
    assert_eq!(manager.resolution().geometry, saved);
}

#[test]
fn preferred_size_drives_default() {
    let manager = WindowStateManager::resolve(KEY, MemoryStore::new(), &one_display(), (1280, 720));
    assert_eq!(manager.resolution().geometry, Rect::new(320, 180, 1280, 720));
}

#[test]
fn oversized_default_is_not_clamped() {
    let small = StaticDisplays::single(Rect::new(0, 0, 1024, 768));
    let manager = WindowStateManager::resolve(KEY, MemoryStore::new(), &small, (1600, 1000));
    assert_eq!(manager.resolution().geometry, Rect::new(-288, -116, 1600, 1000));
}

#[test]
fn display_enumeration_failure_falls_back_to_default() {
    let store = store_with(Rect::new(100, 100, 800, 600));
    let displays = BrokenDisplays { primary_ok: true };
    let manager = WindowStateManager::resolve(KEY, store, &displays, SIZE);
    assert_eq!(manager.resolution().geometry, CENTERED);
    assert_eq!(manager.resolution().source, GeometrySource::Reset);
}

#[test]
fn primary_failure_places_default_at_origin() {
    let displays = BrokenDisplays { primary_ok: false };
    let manager = WindowStateManager::resolve(KEY, MemoryStore::new(), &displays, SIZE);
    assert_eq!(manager.resolution().geometry, Rect::new(0, 0, 800, 600));
}

#[test]
fn corrupt_saved_file_falls_back_to_default() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join(format!("{KEY}.json")), "garbage").unwrap();
    let store = JsonFileStore::new(dir.path());

    let manager = WindowStateManager::resolve(KEY, store, &one_display(), SIZE);
    assert_eq!(manager.resolution().geometry, CENTERED);
    assert_eq!(manager.resolution().source, GeometrySource::Default);
}

#[test]
fn degenerate_saved_size_resets_to_default() {
    for saved in [
        Rect::new(100, 100, -5000, 0),
        Rect::new(100, 100, 0, 0),
        Rect::new(100, 100, 800, -1),
    ] {
        let manager = WindowStateManager::resolve(KEY, store_with(saved), &one_display(), SIZE);
        assert_eq!(manager.resolution().geometry, CENTERED, "saved {saved:?}");
        assert_eq!(manager.resolution().source, GeometrySource::Reset);
    }
}

#[test]
fn degenerate_saved_file_is_not_applied() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join(format!("{KEY}.json")),
        r#"{"x":100,"y":100,"width":-5000,"height":0}"#,
    )
    .unwrap();

    let mut host = HeadlessWindow::new();
    let manager = WindowStateManager::attach(
        KEY,
        JsonFileStore::new(dir.path()),
        &one_display(),
        SIZE,
        &mut host,
    );
    assert_eq!(manager.resolution().source, GeometrySource::Reset);
    assert_eq!(host.bounds(), CENTERED);
}

// =============================================================================
// Apply and tracking
// =============================================================================

#[test]
fn attach_applies_resolved_geometry() {
    let saved = Rect::new(100, 100, 800, 600);
    let mut host = HeadlessWindow::new();
    let manager = WindowStateManager::attach(KEY, store_with(saved), &one_display(), SIZE, &mut host);

    assert_eq!(host.bounds(), saved);
    assert_eq!(manager.phase(), Phase::Tracking);
}

#[test]
fn apply_only_once() {
    let mut host = HeadlessWindow::new();
    let mut manager = WindowStateManager::attach(KEY, MemoryStore::new(), &one_display(), SIZE, &mut host);
    host.move_to(Rect::new(5, 5, 400, 300));

    manager.apply(&mut host);
    assert_eq!(host.bounds(), Rect::new(5, 5, 400, 300));
}

#[test]
fn track_captures_normal_bounds_only() {
    let mut host = HeadlessWindow::new();
    let mut manager = WindowStateManager::attach(KEY, MemoryStore::new(), &one_display(), SIZE, &mut host);

    host.move_to(Rect::new(50, 60, 700, 500));
    assert_eq!(manager.track(&host), Some(Rect::new(50, 60, 700, 500)));

    host.maximize(PRIMARY);
    assert_eq!(manager.track(&host), None);
    assert_eq!(manager.last_captured(), Some(Rect::new(50, 60, 700, 500)));
}

#[test]
fn track_before_apply_is_ignored() {
    let mut manager = WindowStateManager::resolve(KEY, MemoryStore::new(), &one_display(), SIZE);
    let mut host = HeadlessWindow::new();
    host.move_to(Rect::new(1, 1, 200, 200));
    assert_eq!(manager.track(&host), None);
}

// =============================================================================
// Close
// =============================================================================

#[test]
fn close_persists_current_bounds() {
    let mut host = HeadlessWindow::new();
    let mut manager = WindowStateManager::attach(KEY, MemoryStore::new(), &one_display(), SIZE, &mut host);
    host.move_to(Rect::new(300, 200, 900, 700));

    assert_eq!(manager.on_close(&host), Some(Rect::new(300, 200, 900, 700)));
    assert_eq!(manager.store().load(KEY), Some(Rect::new(300, 200, 900, 700)));
    assert_eq!(manager.phase(), Phase::Disposed);
}

#[test]
fn close_while_maximized_keeps_previous_value() {
    let saved = Rect::new(100, 100, 800, 600);
    let mut host = HeadlessWindow::new();
    let mut manager = WindowStateManager::attach(KEY, store_with(saved), &one_display(), SIZE, &mut host);
    host.maximize(PRIMARY);

    assert_eq!(manager.on_close(&host), None);
    assert_eq!(manager.store().load(KEY), Some(saved));
}

#[test]
fn close_while_maximized_with_nothing_saved_writes_nothing() {
    let mut host = HeadlessWindow::new();
    let mut manager = WindowStateManager::attach(KEY, MemoryStore::new(), &one_display(), SIZE, &mut host);
    host.maximize(PRIMARY);

    manager.on_close(&host);
    assert!(manager.store().is_empty());
    assert_eq!(manager.store().get(KEY, CENTERED), CENTERED);
}

#[test]
fn close_while_maximized_saves_geometry_from_before_maximize() {
    let mut host = HeadlessWindow::new();
    let mut manager = WindowStateManager::attach(KEY, MemoryStore::new(), &one_display(), SIZE, &mut host);
    host.move_to(Rect::new(40, 40, 1000, 700));
    manager.track(&host);
    host.maximize(PRIMARY);

    assert_eq!(manager.on_close(&host), Some(Rect::new(40, 40, 1000, 700)));
    assert_eq!(manager.store().load(KEY), Some(Rect::new(40, 40, 1000, 700)));
}

#[test]
fn close_while_minimized_keeps_previous_value() {
    let saved = Rect::new(100, 100, 800, 600);
    let mut host = HeadlessWindow::new();
    let mut manager = WindowStateManager::attach(KEY, store_with(saved), &one_display(), SIZE, &mut host);
    host.move_to(Rect::new(0, 0, 10, 10));
    host.minimize();

    manager.on_close(&host);
    assert_eq!(manager.store().load(KEY), Some(saved));
}

#[test]
fn reset_geometry_is_not_persisted_without_capture() {
    let offscreen = Rect::new(5000, 5000, 800, 600);
    let mut host = HeadlessWindow::new();
    let mut manager = WindowStateManager::attach(KEY, store_with(offscreen), &one_display(), SIZE, &mut host);
    assert_eq!(host.bounds(), CENTERED);
    host.maximize(PRIMARY);

    manager.on_close(&host);
    assert_eq!(manager.store().load(KEY), Some(offscreen));
}

#[test]
fn close_fires_once() {
    let mut host = HeadlessWindow::new();
    let mut manager = WindowStateManager::attach(KEY, MemoryStore::new(), &one_display(), SIZE, &mut host);
    host.move_to(Rect::new(10, 10, 500, 400));
    manager.on_close(&host);

    host.move_to(Rect::new(20, 20, 600, 500));
    assert_eq!(manager.on_close(&host), None);
    assert_eq!(manager.track(&host), None);
    assert_eq!(manager.store().load(KEY), Some(Rect::new(10, 10, 500, 400)));
}

#[test]
fn write_failure_is_not_fatal() {
    let mut host = HeadlessWindow::new();
    let store = ReadOnlyStore {
        saved: Some(Rect::new(100, 100, 800, 600)),
        ..Default::default()
    };
    let mut manager = WindowStateManager::attach(KEY, store, &one_display(), SIZE, &mut host);
    host.move_to(Rect::new(200, 200, 800, 600));

    assert_eq!(manager.on_close(&host), None);
    assert_eq!(manager.store().attempts.get(), 1);
    assert_eq!(manager.phase(), Phase::Disposed);
}

#[test]
fn saved_geometry_round_trips_across_sessions() {
    let dir = tempfile::tempdir().unwrap();

    let mut host = HeadlessWindow::new();
    let mut first = WindowStateManager::attach(KEY, JsonFileStore::new(dir.path()), &one_display(), SIZE, &mut host);
    assert_eq!(first.resolution().source, GeometrySource::Default);
    host.move_to(Rect::new(120, 80, 1024, 768));
    first.on_close(&host);

    let mut host = HeadlessWindow::new();
    let second = WindowStateManager::attach(KEY, JsonFileStore::new(dir.path()), &one_display(), SIZE, &mut host);
    assert_eq!(second.resolution().source, GeometrySource::Restored);
    assert_eq!(host.bounds(), Rect::new(120, 80, 1024, 768));
}
