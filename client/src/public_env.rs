//! Public build-time variables exposed to client-rendered code.
//!
//! This file is compiled twice: by `build.rs`, which resolves the values and
//! re-exports them with `cargo:rustc-env`, and as a library module so the
//! resolution rules stay unit-tested. It must not depend on anything else in
//! the crate.

pub const APP_NAME_VAR: &str = "NEXT_PUBLIC_APP_NAME";
pub const APP_VERSION_VAR: &str = "NEXT_PUBLIC_APP_VERSION";
pub const RUN_MODE_VAR: &str = "APP_ENV";

pub const DEFAULT_APP_NAME: &str = "Private RAG Copilot";
pub const DEFAULT_APP_VERSION: &str = "1.0.0";

pub const DEVELOPMENT: &str = "development";
pub const PRODUCTION: &str = "production";

/// Every variable the build script tracks for rebuilds.
pub const BUILD_VARS: [&str; 3] = [APP_NAME_VAR, APP_VERSION_VAR, RUN_MODE_VAR];

/// Resolve all public variables. Unset or empty values fall back to their
/// literal defaults; an unset run mode follows the build profile.
pub fn resolve_build_vars(lookup: impl Fn(&str) -> Option<String>, debug_build: bool) -> [(&'static str, String); 3] {
    let fallback_mode = if debug_build { DEVELOPMENT } else { PRODUCTION };
    [
        (APP_NAME_VAR, resolve_or(&lookup, APP_NAME_VAR, DEFAULT_APP_NAME)),
        (APP_VERSION_VAR, resolve_or(&lookup, APP_VERSION_VAR, DEFAULT_APP_VERSION)),
        (RUN_MODE_VAR, resolve_or(&lookup, RUN_MODE_VAR, fallback_mode)),
    ]
}

/// Read one variable, treating an empty string the same as unset.
pub fn resolve_or(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: &str) -> String {
    lookup(key)
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| default.to_owned())
}

#[cfg(test)]
#[path = "public_env_test.rs"]
mod tests;
