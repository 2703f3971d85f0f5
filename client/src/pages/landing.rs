//! Landing page describing project status.
//!
//! SYSTEM CONTEXT
//! ==============
//! Purely presentational: no context, no data fetching. Roadmap content is
//! kept in constants so ordering and completion counts are testable without
//! rendering.

use leptos::prelude::*;

pub const HEADING: &str = "Private RAG Copilot";
pub const SUBHEADING: &str =
    "A secure, self-contained RAG assistant for querying internal documentation with grounded, cited answers.";
pub const DOCS_PATH: &str = "/docs";
pub const REPOSITORY_URL: &str = "https://github.com/gex380/Private-Rag-Copilot";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoadmapStatus {
    Complete,
    Pending,
}

impl RoadmapStatus {
    fn marker(self) -> &'static str {
        match self {
            Self::Complete => "\u{2713}",
            Self::Pending => "\u{25cb}",
        }
    }

    fn class(self) -> &'static str {
        match self {
            Self::Complete => "roadmap__item roadmap__item--complete",
            Self::Pending => "roadmap__item roadmap__item--pending",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoadmapItem {
    pub label: &'static str,
    pub status: RoadmapStatus,
}

pub const ROADMAP: [RoadmapItem; 4] = [
    RoadmapItem { label: "Backend API structure initialized", status: RoadmapStatus::Complete },
    RoadmapItem { label: "Frontend app configured", status: RoadmapStatus::Complete },
    RoadmapItem { label: "Document ingestion pipeline (Week 2)", status: RoadmapStatus::Pending },
    RoadmapItem { label: "Retrieval and LLM generation with citations (Weeks 3-4)", status: RoadmapStatus::Pending },
];

#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <div class="landing container">
            <div class="landing__hero">
                <h1 class="landing__title">{HEADING}</h1>
                <p class="landing__subtitle">{SUBHEADING}</p>
            </div>

            <section class="landing__card">
                <h2>"Week 1: Project Setup"</h2>
                <p class="muted">"Repository structure and environment configuration complete."</p>
                <ul class="roadmap">
                    {ROADMAP.iter().map(|item| view! { <RoadmapRow item=*item/> }).collect_view()}
                </ul>
            </section>

            <div class="landing__links">
                <a class="button button--primary" href=DOCS_PATH>"View Documentation"</a>
                <a class="button" href=REPOSITORY_URL target="_blank" rel="noopener noreferrer">"View on GitHub"</a>
            </div>
        </div>
    }
}

#[component]
fn RoadmapRow(item: RoadmapItem) -> impl IntoView {
    view! {
        <li class={item.status.class()}>
            <span class="roadmap__marker" aria-hidden="true">{item.status.marker()}</span>
            <span>{item.label}</span>
        </li>
    }
}

#[cfg(test)]
#[path = "landing_test.rs"]
mod tests;
