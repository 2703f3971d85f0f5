//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module binds the JSON API and stitches it with Leptos SSR rendering
//! under a single Axum router. The UI owns `/`; API routes live at fixed
//! system paths and under the configured API prefix.

pub mod system;

use std::any::Any;
use std::path::PathBuf;

use axum::Router;
use axum::http::HeaderValue;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::compression::CompressionLayer;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::error::panic_response;
use crate::state::AppState;

/// Mount point for the compiled UI assets.
pub const PKG_PATH: &str = "/pkg";

/// Full application router: API routes, the UI when its configuration is
/// available, and the shared HTTP layers.
pub fn app(state: AppState) -> Router {
    let debug = state.settings.debug;
    let router = match leptos_app() {
        Ok(ui) => api_routes(state).merge(ui),
        Err(e) => {
            tracing::warn!(error = %e, "UI disabled, serving API only");
            api_routes(state)
        }
    };
    with_http_layers(router, debug)
}

/// JSON API routes. `/docs` is only mounted in debug mode.
pub fn api_routes(state: AppState) -> Router {
    let settings = state.settings.clone();

    let mut router: Router<AppState> = Router::new()
        .route(system::HEALTH_PATH, get(system::health))
        .route(&settings.api_prefix, get(system::api_info));
    if settings.debug {
        router = router.route(system::DOCS_PATH, get(system::docs_index));
    }

    router.layer(cors_layer(&settings.cors_origins)).with_state(state)
}

/// Tracing, compression, and panic-to-JSON mapping for every route.
pub fn with_http_layers(router: Router, debug: bool) -> Router {
    router
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(CatchPanicLayer::custom(move |panic: Box<dyn Any + Send + 'static>| panic_response(panic, debug)))
}

/// Credentialed CORS for the configured origins; methods and headers mirror
/// the preflight request.
fn cors_layer(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(%origin, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_credentials(true)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
}

/// Leptos SSR routes plus the `/pkg` static assets.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `[[workspace.metadata.leptos]]` section or `LEPTOS_*` variables).
pub fn leptos_app() -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(copilot_ui::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || copilot_ui::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    // Serve Leptos static assets (WASM, CSS, JS) from the site root /pkg directory.
    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    Ok(leptos_router.nest_service(PKG_PATH, ServeDir::new(site_root_path.join("pkg"))))
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
