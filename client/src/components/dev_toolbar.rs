//! Development-only toolbar mount point.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted once by the root layout. Renders nothing; after the first render
//! in the browser it hands control to `ToolbarLoader`, which decides from the
//! injected run mode whether the third-party toolbar starts.

use leptos::prelude::*;

use crate::config::RunMode;
use crate::util::toolbar::{BrowserToolbarHost, LoaderState, ToolbarLoader};

#[component]
pub fn DevToolbar(mode: RunMode) -> impl IntoView {
    // No tracked signals, so this runs once per mount. The previous value
    // guards against a re-run ever repeating the side effect.
    Effect::new(move |prev: Option<LoaderState>| {
        if let Some(state) = prev {
            return state;
        }
        ToolbarLoader::new(mode, BrowserToolbarHost).on_mounted()
    });
}

#[cfg(all(test, feature = "ssr"))]
#[path = "dev_toolbar_test.rs"]
mod tests;
