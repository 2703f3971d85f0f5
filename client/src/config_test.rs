use super::*;

#[test]
fn run_mode_development_only_for_exact_value() {
    assert_eq!(RunMode::from_indicator("development"), RunMode::Development);
    assert_eq!(RunMode::from_indicator("production"), RunMode::Production);
    assert_eq!(RunMode::from_indicator("staging"), RunMode::Production);
    assert_eq!(RunMode::from_indicator("Development"), RunMode::Production);
    assert_eq!(RunMode::from_indicator(""), RunMode::Production);
}

#[test]
fn run_mode_is_development() {
    assert!(RunMode::Development.is_development());
    assert!(!RunMode::Production.is_development());
}

#[test]
fn from_build_values_are_never_empty() {
    let env = PublicEnv::from_build();
    assert!(!env.app_name.is_empty());
    assert!(!env.app_version.is_empty());
}

#[test]
fn site_meta_keywords_content_joins_in_order() {
    assert_eq!(SITE_META.keywords_content(), "RAG, AI, Knowledge Management, Enterprise Search");
}

#[test]
fn site_meta_title_matches_product_name() {
    assert_eq!(SITE_META.title, "Private RAG Copilot");
    assert!(SITE_META.description.contains("internal documentation"));
}
