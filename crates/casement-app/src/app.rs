//! Application owner: builds the main window and announces lifecycle
//! events.

use std::rc::Rc;

use casement_common::{Event, EventBus, EventToken, Rect};
use casement_config::CasementConfig;
use casement_platform::{DisplayQuery, KeyCombo};
use casement_window::{AppWindow, GeometryStore, HostWindow};

/// Environment variable selecting the run mode.
pub const ENV_VAR: &str = "CASEMENT_ENV";

pub const MAIN_WINDOW: &str = "main";

/// Key that opens the developer tools in dev mode.
const DEV_TOOLS_KEY: &str = "F12";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppMode {
    pub dev_mode: bool,
    pub production: bool,
}

impl AppMode {
    pub fn from_env() -> Self {
        Self::from_value(std::env::var(ENV_VAR).ok().as_deref())
    }

    /// Production iff the value is exactly `production`.
    pub fn from_value(value: Option<&str>) -> Self {
        let production = value == Some("production");
        Self {
            dev_mode: !production,
            production,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    Ready,
    WindowClosed(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AppEventKind {
    Ready,
    WindowClosed,
}

impl Event for AppEvent {
    type Kind = AppEventKind;

    fn kind(&self) -> AppEventKind {
        match self {
            AppEvent::Ready => AppEventKind::Ready,
            AppEvent::WindowClosed(_) => AppEventKind::WindowClosed,
        }
    }
}

pub struct App {
    config: CasementConfig,
    mode: AppMode,
    events: Rc<EventBus<AppEvent>>,
}

impl App {
    pub fn new(config: CasementConfig, mode: AppMode) -> Self {
        let events = Rc::new(EventBus::with_max_listeners(config.events.max_listeners));
        Self {
            config,
            mode,
            events,
        }
    }

    pub fn on_ready(&self, f: impl Fn() + 'static) -> EventToken {
        self.events.on(AppEventKind::Ready, Rc::new(move |_| f()))
    }

    pub fn on_window_closed(&self, f: impl Fn(&str) + 'static) -> EventToken {
        self.events.on(
            AppEventKind::WindowClosed,
            Rc::new(move |event: &AppEvent| {
                if let AppEvent::WindowClosed(name) = event {
                    f(name);
                }
            }),
        )
    }

    /// Creates the main window on `host`, restoring its saved geometry,
    /// then emits `Ready`. `WindowClosed` follows whenever the window
    /// closes, whoever triggers it.
    pub fn launch<H: HostWindow, S: GeometryStore>(
        &self,
        host: H,
        store: S,
        displays: &impl DisplayQuery,
    ) -> AppWindow<H, S> {
        self.launch_named(MAIN_WINDOW, host, store, displays)
    }

    pub fn launch_named<H: HostWindow, S: GeometryStore>(
        &self,
        name: &str,
        host: H,
        store: S,
        displays: &impl DisplayQuery,
    ) -> AppWindow<H, S> {
        let mut window = AppWindow::new(name, &self.config, host, store, displays);
        if self.mode.dev_mode {
            window.enable_dev_tools_shortcut(KeyCombo::key(DEV_TOOLS_KEY));
        }

        let events = Rc::clone(&self.events);
        let closed_name = name.to_string();
        window.on_closed(move || {
            events.emit(&AppEvent::WindowClosed(closed_name.clone()));
        });

        tracing::info!(
            "Casement ready ({} mode, {name} window at {})",
            if self.mode.production { "production" } else { "dev" },
            window.host().bounds()
        );
        self.events.emit(&AppEvent::Ready);
        window
    }

    /// Closes `window` through its normal close path. The announcement
    /// comes from the window's `Closed` event.
    pub fn close_window<H: HostWindow, S: GeometryStore>(
        &self,
        window: &mut AppWindow<H, S>,
    ) -> Option<Rect> {
        window.handle_closing()
    }

    pub fn config(&self) -> &CasementConfig {
        &self.config
    }

    pub fn mode(&self) -> AppMode {
        self.mode
    }

    pub fn events(&self) -> &EventBus<AppEvent> {
        &self.events
    }
}
