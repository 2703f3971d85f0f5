//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! Settings are read once at startup and shared read-only.

use std::sync::Arc;

use crate::config::Settings;

/// Clone is required by Axum; the settings are Arc-wrapped.
#[derive(Clone, Debug)]
pub struct AppState {
    pub settings: Arc<Settings>,
}

impl AppState {
    #[must_use]
    pub fn new(settings: Settings) -> Self {
        Self { settings: Arc::new(settings) }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================
