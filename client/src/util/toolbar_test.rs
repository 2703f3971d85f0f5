use std::cell::RefCell;

use super::*;

#[derive(Default)]
struct RecordingHost {
    inits: RefCell<Vec<ToolbarConfig>>,
    logs: RefCell<Vec<String>>,
}

impl ToolbarHost for RecordingHost {
    fn init_toolbar(&self, config: &ToolbarConfig) {
        self.inits.borrow_mut().push(config.clone());
    }

    fn log(&self, message: &str) {
        self.logs.borrow_mut().push(message.to_owned());
    }
}

#[test]
fn development_mount_initializes_once_with_empty_plugins() {
    let host = RecordingHost::default();
    let mut loader = ToolbarLoader::new(RunMode::Development, &host);

    assert_eq!(loader.state(), LoaderState::Uninitialized);
    assert_eq!(loader.on_mounted(), LoaderState::Initialized);

    let inits = host.inits.borrow();
    assert_eq!(inits.len(), 1);
    assert!(inits[0].plugins.is_empty());
    assert_eq!(*host.logs.borrow(), vec![INIT_MESSAGE.to_owned()]);
}

#[test]
fn production_mount_never_touches_host() {
    let host = RecordingHost::default();
    let mut loader = ToolbarLoader::new(RunMode::Production, &host);

    assert_eq!(loader.on_mounted(), LoaderState::Skipped);
    assert!(host.inits.borrow().is_empty());
    assert!(host.logs.borrow().is_empty());
}

#[test]
fn repeated_mount_signal_is_ignored() {
    let host = RecordingHost::default();
    let mut loader = ToolbarLoader::new(RunMode::Development, &host);

    loader.on_mounted();
    assert_eq!(loader.on_mounted(), LoaderState::Initialized);
    assert_eq!(loader.on_mounted(), LoaderState::Initialized);

    assert_eq!(host.inits.borrow().len(), 1);
    assert_eq!(host.logs.borrow().len(), 1);
}

#[test]
fn skipped_state_is_terminal() {
    let host = RecordingHost::default();
    let mut loader = ToolbarLoader::new(RunMode::Production, &host);

    loader.on_mounted();
    assert_eq!(loader.on_mounted(), LoaderState::Skipped);
    assert!(host.inits.borrow().is_empty());
}

#[test]
fn remount_initializes_again() {
    let host = RecordingHost::default();

    ToolbarLoader::new(RunMode::Development, &host).on_mounted();
    ToolbarLoader::new(RunMode::Development, &host).on_mounted();

    assert_eq!(host.inits.borrow().len(), 2);
    assert_eq!(host.logs.borrow().len(), 2);
}

#[test]
fn toolbar_config_serializes_plugins_list() {
    let json = serde_json::to_value(ToolbarConfig::default()).unwrap();
    assert_eq!(json, serde_json::json!({ "plugins": [] }));
}

#[test]
fn toolbar_config_keeps_plugin_order() {
    let config = ToolbarConfig {
        plugins: vec![
            ToolbarPlugin(serde_json::json!({ "name": "a" })),
            ToolbarPlugin(serde_json::json!({ "name": "b" })),
        ],
    };
    let json = serde_json::to_value(&config).unwrap();
    assert_eq!(json, serde_json::json!({ "plugins": [{ "name": "a" }, { "name": "b" }] }));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn browser_host_is_noop_outside_browser() {
    let mut loader = ToolbarLoader::new(RunMode::Development, BrowserToolbarHost);
    assert_eq!(loader.on_mounted(), LoaderState::Initialized);
}
