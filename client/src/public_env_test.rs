use std::collections::HashMap;

use super::*;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

fn value_of(resolved: &[(&'static str, String); 3], key: &str) -> String {
    resolved
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, v)| v.clone())
        .unwrap()
}

#[test]
fn unset_public_vars_fall_back_to_literal_defaults() {
    let resolved = resolve_build_vars(|_| None, false);
    assert_eq!(value_of(&resolved, APP_NAME_VAR), "Private RAG Copilot");
    assert_eq!(value_of(&resolved, APP_VERSION_VAR), "1.0.0");
}

#[test]
fn empty_public_vars_fall_back_to_literal_defaults() {
    let resolved = resolve_build_vars(lookup_from(&[(APP_NAME_VAR, ""), (APP_VERSION_VAR, "")]), false);
    assert_eq!(value_of(&resolved, APP_NAME_VAR), DEFAULT_APP_NAME);
    assert_eq!(value_of(&resolved, APP_VERSION_VAR), DEFAULT_APP_VERSION);
}

#[test]
fn set_public_vars_pass_through() {
    let resolved = resolve_build_vars(
        lookup_from(&[(APP_NAME_VAR, "Docs Copilot"), (APP_VERSION_VAR, "2.3.4"), (RUN_MODE_VAR, "staging")]),
        true,
    );
    assert_eq!(value_of(&resolved, APP_NAME_VAR), "Docs Copilot");
    assert_eq!(value_of(&resolved, APP_VERSION_VAR), "2.3.4");
    assert_eq!(value_of(&resolved, RUN_MODE_VAR), "staging");
}

#[test]
fn unset_run_mode_follows_build_profile() {
    assert_eq!(value_of(&resolve_build_vars(|_| None, true), RUN_MODE_VAR), DEVELOPMENT);
    assert_eq!(value_of(&resolve_build_vars(|_| None, false), RUN_MODE_VAR), PRODUCTION);
}

#[test]
fn build_vars_cover_every_resolved_key() {
    let resolved = resolve_build_vars(|_| None, true);
    let keys: Vec<&str> = resolved.iter().map(|(k, _)| *k).collect();
    assert_eq!(keys, BUILD_VARS.to_vec());
}
