//! System routes: health, API information, and the debug route index.

use axum::extract::State;
use axum::response::Json;
use serde::Serialize;

use crate::state::AppState;

pub const HEALTH_PATH: &str = "/health";
pub const DOCS_PATH: &str = "/docs";
pub const DOCS_DISABLED: &str = "Disabled in production";

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct HealthResponse {
    pub status: &'static str,
    pub app_name: String,
    pub version: String,
    pub environment: &'static str,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct ApiInfo {
    pub message: String,
    pub version: String,
    pub docs: &'static str,
    pub health: &'static str,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct RouteDoc {
    pub method: &'static str,
    pub path: String,
    pub summary: &'static str,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct DocsIndex {
    pub title: String,
    pub version: String,
    pub description: &'static str,
    pub routes: Vec<RouteDoc>,
}

pub const API_DESCRIPTION: &str = "A secure, self-contained RAG assistant for querying internal documentation";

/// `GET /health`: liveness plus build identity.
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let s = &state.settings;
    Json(HealthResponse {
        status: "healthy",
        app_name: s.app_name.clone(),
        version: s.app_version.clone(),
        environment: s.environment.as_str(),
    })
}

/// `GET {api_prefix}`: entry point describing where to go next.
pub async fn api_info(State(state): State<AppState>) -> Json<ApiInfo> {
    let s = &state.settings;
    Json(ApiInfo {
        message: format!("Welcome to {}", s.app_name),
        version: s.app_version.clone(),
        docs: if s.debug { DOCS_PATH } else { DOCS_DISABLED },
        health: HEALTH_PATH,
    })
}

/// `GET /docs`: only mounted in debug mode.
pub async fn docs_index(State(state): State<AppState>) -> Json<DocsIndex> {
    let s = &state.settings;
    Json(DocsIndex {
        title: s.app_name.clone(),
        version: s.app_version.clone(),
        description: API_DESCRIPTION,
        routes: route_docs(&s.api_prefix),
    })
}

fn route_docs(api_prefix: &str) -> Vec<RouteDoc> {
    vec![
        RouteDoc { method: "GET", path: HEALTH_PATH.to_owned(), summary: "Health check" },
        RouteDoc { method: "GET", path: api_prefix.to_owned(), summary: "API information" },
        RouteDoc { method: "GET", path: DOCS_PATH.to_owned(), summary: "This route index" },
    ]
}

#[cfg(test)]
#[path = "system_test.rs"]
mod tests;
