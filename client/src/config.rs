//! Build-time configuration consumed by the UI.
//!
//! SYSTEM CONTEXT
//! ==============
//! Values are inlined by `build.rs` at compile time, so the server render and
//! the hydrated bundle agree. Components never read the environment
//! themselves; they receive a [`PublicEnv`] or a [`RunMode`] from `App`.

use crate::public_env::DEVELOPMENT;

/// Whether the bundle was built for local development or for production.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    Development,
    Production,
}

impl RunMode {
    /// Map a raw mode indicator. Only the exact development value selects
    /// [`RunMode::Development`].
    pub fn from_indicator(raw: &str) -> Self {
        if raw == DEVELOPMENT { Self::Development } else { Self::Production }
    }

    pub fn is_development(self) -> bool {
        matches!(self, Self::Development)
    }
}

/// Public values exposed to client-rendered code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PublicEnv {
    pub app_name: &'static str,
    pub app_version: &'static str,
    pub mode: RunMode,
}

impl PublicEnv {
    /// Values resolved by the build script for this compilation.
    pub fn from_build() -> Self {
        Self {
            app_name: env!("NEXT_PUBLIC_APP_NAME"),
            app_version: env!("NEXT_PUBLIC_APP_VERSION"),
            mode: RunMode::from_indicator(env!("APP_ENV")),
        }
    }
}

/// Static page metadata for search engines and the browser tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SiteMeta {
    pub title: &'static str,
    pub description: &'static str,
    pub keywords: &'static [&'static str],
}

impl SiteMeta {
    /// Keywords joined for the `<meta name="keywords">` tag.
    pub fn keywords_content(&self) -> String {
        self.keywords.join(", ")
    }
}

pub const SITE_META: SiteMeta = SiteMeta {
    title: "Private RAG Copilot",
    description: "A secure, self-contained RAG assistant for querying internal documentation",
    keywords: &["RAG", "AI", "Knowledge Management", "Enterprise Search"],
};

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
