//! Root application component, document shell, and layout.

use leptos::attr::custom::custom_attribute;
use leptos::prelude::*;
use leptos_meta::{Meta, MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::dev_toolbar::DevToolbar;
use crate::config::{PublicEnv, SITE_META};
use crate::pages::landing::LandingPage;

pub const HTML_LANG: &str = "en";
pub const BODY_CLASS: &str = "font-sans antialiased";
pub const HYDRATION_FLAG: &str = "suppresshydrationwarning";

/// HTML shell rendered on the server for SSR + hydration.
///
/// Only `<body>` is hydrated, so attributes that browser extensions inject on
/// `<html>` never cause mismatches.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <Document>
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body class=BODY_CLASS>
                <App/>
            </body>
        </Document>
    }
}

/// Document root. Carries the language and the hydration-mismatch
/// suppression flag on every render.
#[component]
pub fn Document(children: Children) -> impl IntoView {
    // Not a known `<html>` attribute, so it goes through the untyped path.
    view! { <html lang=HTML_LANG>{children()}</html> }.add_any_attr(custom_attribute(HYDRATION_FLAG, "true"))
}

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let env = PublicEnv::from_build();

    view! {
        <Stylesheet id="leptos" href="/pkg/rag-copilot.css"/>
        <Title text={SITE_META.title}/>
        <Meta name="description" content={SITE_META.description}/>
        <Meta name="keywords" content={SITE_META.keywords_content()}/>
        <Meta name="application-name" content={env.app_name}/>
        <Meta name="version" content={env.app_version}/>

        <RootLayout>
            <Router>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=LandingPage/>
                </Routes>
            </Router>
            <DevToolbar mode={env.mode}/>
        </RootLayout>
    }
}

/// Full-height flex container wrapping the routed content.
#[component]
pub fn RootLayout(children: Children) -> impl IntoView {
    view! {
        <div class="layout">
            <main class="layout__main">{children()}</main>
        </div>
    }
}

#[cfg(test)]
#[path = "app_test.rs"]
mod tests;
