//! Development toolbar bootstrap.
//!
//! DESIGN
//! ======
//! `ToolbarLoader` is a one-shot state machine driven by a component mount.
//! The run mode and the host are injected so the gating is testable without
//! touching process or browser state. The host wraps the third-party
//! `initToolbar` global; calls into it are fire-and-forget.
//!
//! TRADE-OFFS
//! ==========
//! Failures inside the third-party initializer are logged, never retried.
//! SSR and native builds use a no-op host since effects only run in the
//! browser.

use serde::{Deserialize, Serialize};

use crate::config::RunMode;

/// Name of the global function exposed by the toolbar bundle.
pub const INITIALIZER_GLOBAL: &str = "initToolbar";

/// Diagnostic line emitted after a successful hand-off to the initializer.
pub const INIT_MESSAGE: &str = "Development toolbar initialized";

/// Opaque plugin descriptor forwarded to the toolbar as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ToolbarPlugin(pub serde_json::Value);

/// Configuration object passed to the initializer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ToolbarConfig {
    pub plugins: Vec<ToolbarPlugin>,
}

/// Side-effect boundary for the loader.
pub trait ToolbarHost {
    fn init_toolbar(&self, config: &ToolbarConfig);
    fn log(&self, message: &str);
}

impl<H: ToolbarHost + ?Sized> ToolbarHost for &H {
    fn init_toolbar(&self, config: &ToolbarConfig) {
        (**self).init_toolbar(config);
    }

    fn log(&self, message: &str) {
        (**self).log(message);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoaderState {
    Uninitialized,
    Initialized,
    Skipped,
}

/// One loader per mount. A re-mount builds a fresh loader and initializes
/// again.
pub struct ToolbarLoader<H> {
    mode: RunMode,
    host: H,
    state: LoaderState,
}

impl<H: ToolbarHost> ToolbarLoader<H> {
    pub fn new(mode: RunMode, host: H) -> Self {
        Self { mode, host, state: LoaderState::Uninitialized }
    }

    pub fn state(&self) -> LoaderState {
        self.state
    }

    /// Run the post-mount transition. Only the first call has side effects;
    /// later calls return the terminal state unchanged.
    pub fn on_mounted(&mut self) -> LoaderState {
        if self.state != LoaderState::Uninitialized {
            return self.state;
        }

        self.state = if self.mode.is_development() {
            let config = ToolbarConfig::default();
            self.host.init_toolbar(&config);
            self.host.log(INIT_MESSAGE);
            LoaderState::Initialized
        } else {
            LoaderState::Skipped
        };
        self.state
    }
}

/// Host backed by the browser's global `initToolbar` function.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserToolbarHost;

impl ToolbarHost for BrowserToolbarHost {
    fn init_toolbar(&self, config: &ToolbarConfig) {
        #[cfg(feature = "hydrate")]
        {
            if let Err(err) = call_global_initializer(config) {
                log::warn!("{INITIALIZER_GLOBAL} failed: {err}");
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = config;
        }
    }

    fn log(&self, message: &str) {
        #[cfg(feature = "hydrate")]
        {
            log::info!("{message}");
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = message;
        }
    }
}

#[cfg(feature = "hydrate")]
fn call_global_initializer(config: &ToolbarConfig) -> Result<(), String> {
    use wasm_bindgen::{JsCast, JsValue};

    let window = web_sys::window().ok_or("no window")?;
    let init = js_sys::Reflect::get(&window, &JsValue::from_str(INITIALIZER_GLOBAL)).map_err(|e| format!("{e:?}"))?;
    let init = init
        .dyn_into::<js_sys::Function>()
        .map_err(|_| format!("{INITIALIZER_GLOBAL} is not a function"))?;

    let json = serde_json::to_string(config).map_err(|e| e.to_string())?;
    let arg = js_sys::JSON::parse(&json).map_err(|e| format!("{e:?}"))?;
    init.call1(&JsValue::NULL, &arg).map_err(|e| format!("{e:?}"))?;
    Ok(())
}

#[cfg(test)]
#[path = "toolbar_test.rs"]
mod tests;
