//! A named application window: its event bus, host handle and persisted
//! geometry.
//!
//! Host glue forwards native callbacks to the `handle_*` methods; the rest
//! of the application subscribes through `on_*`.


use std::cell::Cell;
use std::path::PathBuf;
use std::rc::Rc;

use casement_common::{concat_namespace, Event, EventBus, EventToken, Rect};
use casement_config::schema::WindowConfig;
use casement_config::CasementConfig;
use casement_platform::{DisplayQuery, KeyCombo, KeyInput, KeyPhase, ModifierKeys};
use serde::Serialize;

use crate::host::HostWindow;
use crate::state::WindowStateManager;
use crate::store::GeometryStore;

/// Separator between the store namespace and the window name.
const KEY_SEPARATOR: &str = "-";

/// A key release delivered to listeners.
///
/// Listeners that act on the key call [`mark_handled`](Self::mark_handled)
/// so the host can suppress its default handling.
#[derive(Debug, Clone)]
pub struct KeyPress {
    pub input: KeyInput,
    handled: Cell<bool>,
}

impl KeyPress {
    pub fn new(input: KeyInput) -> Self {
        Self {
            input,
            handled: Cell::new(false),
        }
    }

    pub fn mark_handled(&self) {
        self.handled.set(true);
    }

    pub fn is_handled(&self) -> bool {
        self.handled.get()
    }
}

#[derive(Debug, Clone)]
pub enum WindowEvent {
    Ready,
    Closing,
    /// Geometry has been saved and the window is gone.
    Closed,
    KeyUp(KeyPress),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WindowEventKind {
    Ready,
    Closing,
    Closed,
    KeyUp,
}

impl Event for WindowEvent {
    type Kind = WindowEventKind;

    fn kind(&self) -> WindowEventKind {
        match self {
            WindowEvent::Ready => WindowEventKind::Ready,
            WindowEvent::Closing => WindowEventKind::Closing,
            WindowEvent::Closed => WindowEventKind::Closed,
            WindowEvent::KeyUp(_) => WindowEventKind::KeyUp,
        }
    }
}

/// Page settings handed to the host's web view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WebPreferences {
    pub context_isolation: bool,
    pub node_integration: bool,
    pub preload: Option<PathBuf>,
}

pub struct AppWindow<H: HostWindow, S: GeometryStore> {
    name: String,
    config: WindowConfig,
    events: EventBus<WindowEvent>,
    host: H,
    state: WindowStateManager<S>,
    dev_tools_combo: Option<KeyCombo>,
    closed: bool,
}

impl<H: HostWindow, S: GeometryStore> AppWindow<H, S> {
    /// Restores the geometry saved under `<namespace>-<name>` and applies
    /// it to `host`.
    pub fn new(
        name: impl Into<String>,
        config: &CasementConfig,
        mut host: H,
        store: S,
        displays: &impl DisplayQuery,
    ) -> Self {
        let name = name.into();
        let key = concat_namespace(&config.store.namespace, &name, KEY_SEPARATOR);
        let state = WindowStateManager::attach(
            key,
            store,
            displays,
            config.window.preferred_size(),
            &mut host,
        );
        tracing::debug!("window {name} created at {}", host.bounds());

        Self {
            name,
            config: config.window.clone(),
            events: EventBus::with_max_listeners(config.events.max_listeners),
            host,
            state,
            dev_tools_combo: None,
            closed: false,
        }
    }

    // -- subscriptions ------------------------------------------------------

    pub fn on_ready(&self, f: impl Fn() + 'static) -> EventToken {
        self.events.on(WindowEventKind::Ready, Rc::new(move |_| f()))
    }

    /// Runs `f` when the window starts closing, before geometry is saved.
    pub fn on_closing(&self, f: impl Fn() + 'static) -> EventToken {
        self.events.on(WindowEventKind::Closing, Rc::new(move |_| f()))
    }

    /// Runs `f` once the window has closed and its geometry is saved.
    pub fn on_closed(&self, f: impl Fn() + 'static) -> EventToken {
        self.events.on(WindowEventKind::Closed, Rc::new(move |_| f()))
    }

    /// Runs `f` on release of `key`, whatever modifiers are held.
    pub fn on_key_pressed(&self, key: &str, f: impl Fn(&KeyPress) + 'static) -> EventToken {
        self.on_key_combo(KeyCombo::key(key), f)
    }

    /// Runs `f` on release of `key` while every modifier set in
    /// `modifiers` is held.
    pub fn on_key_pressed_with(
        &self,
        key: &str,
        modifiers: ModifierKeys,
        f: impl Fn(&KeyPress) + 'static,
    ) -> EventToken {
        self.on_key_combo(KeyCombo::with_modifiers(key, modifiers), f)
    }

    /// Runs `f` when `combo` matches a key release. A match marks the
    /// press handled.
    pub fn on_key_combo(&self, combo: KeyCombo, f: impl Fn(&KeyPress) + 'static) -> EventToken {
        self.events.on(
            WindowEventKind::KeyUp,
            Rc::new(move |event: &WindowEvent| {
                if let WindowEvent::KeyUp(press) = event {
                    if combo.matches(&press.input) {
                        press.mark_handled();
                        f(press);
                    }
                }
            }),
        )
    }

    /// Toggles the host's developer tools whenever `combo` is released.
    pub fn enable_dev_tools_shortcut(&mut self, combo: KeyCombo) {
        self.dev_tools_combo = Some(combo);
    }

    // -- host entry points ---------------------------------------------------

    /// The page finished loading.
    pub fn handle_ready(&self) -> usize {
        self.events.emit(&WindowEvent::Ready)
    }

    /// A key was released. Returns `true` when something handled it and
    /// the host should prevent the default action. Key presses are ignored.
    pub fn handle_key_up(&mut self, input: KeyInput) -> bool {
        if input.phase != KeyPhase::Up || self.closed {
            return false;
        }

        let event = WindowEvent::KeyUp(KeyPress::new(input));
        self.events.emit(&event);
        let WindowEvent::KeyUp(press) = &event else {
            return false;
        };

        if let Some(combo) = &self.dev_tools_combo {
            if combo.matches(&press.input) {
                tracing::debug!("toggling dev tools for window {}", self.name);
                self.host.toggle_dev_tools();
                press.mark_handled();
            }
        }
        press.is_handled()
    }

    /// The window was moved or resized.
    pub fn handle_moved(&mut self) -> Option<Rect> {
        self.state.track(&self.host)
    }

    /// The host is about to close the window.
    ///
    /// Emits `Closing`, saves the last good geometry, then emits `Closed`.
    /// Only the first call does anything. Returns the geometry written, if
    /// any.
    pub fn handle_closing(&mut self) -> Option<Rect> {
        if self.closed {
            return None;
        }
        self.closed = true;

        self.events.emit(&WindowEvent::Closing);
        let saved = self.state.on_close(&self.host);
        tracing::info!("window {} closed", self.name);
        self.events.emit(&WindowEvent::Closed);
        saved
    }

    pub fn toggle_dev_tools(&mut self) {
        self.host.toggle_dev_tools();
    }

    pub fn web_preferences(&self) -> WebPreferences {
        WebPreferences {
            context_isolation: self.config.isolated,
            node_integration: !self.config.isolated,
            preload: (!self.config.preload.is_empty()).then(|| PathBuf::from(&self.config.preload)),
        }
    }

    // -- accessors -----------------------------------------------------------

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn title(&self) -> &str {
        &self.config.title
    }

    pub fn geometry_key(&self) -> &str {
        self.state.key()
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    pub fn events(&self) -> &EventBus<WindowEvent> {
        &self.events
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn state(&self) -> &WindowStateManager<S> {
        &self.state
    }
}
