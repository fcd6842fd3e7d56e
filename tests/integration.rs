// SPDX-License-Identifier: MPL-2.0
use iced_toast::app::config::{self, Config, DEFAULT_TOAST_DURATION_MS};
use iced_toast::ui::design_tokens::palette;
use iced_toast::ui::notifications::{
    self, DismissCause, Manager, Notification, Phase, Severity, Toast,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tempfile::tempdir;

fn counter() -> (Arc<AtomicUsize>, impl FnOnce() + Send + 'static) {
    let calls = Arc::new(AtomicUsize::new(0));
    let handle = Arc::clone(&calls);
    (calls, move || {
        handle.fetch_add(1, Ordering::SeqCst);
    })
}

#[test]
fn saved_successfully_toast_expires_once() {
    let (calls, callback) = counter();
    let (mut toast, _countdown) = Toast::show(
        Notification::new("Saved successfully")
            .severity(Severity::from_name("success"))
            .duration_ms(100)
            .on_dismiss(callback),
    );

    assert_eq!(toast.severity().color(), palette::SUCCESS_500);
    assert!(toast.is_visible());

    toast.update(notifications::Message::Expired(toast.id()));

    assert!(!toast.is_visible());
    assert_eq!(toast.phase(), Phase::Dismissed(DismissCause::Expired));
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn network_error_toast_closes_without_callback() {
    let (mut toast, _countdown) = Toast::show(Notification::error("Network error"));
    assert_eq!(toast.severity().color(), palette::ERROR_500);

    assert!(toast.update(notifications::Message::Close(toast.id())));
    assert!(!toast.update(notifications::Message::Expired(toast.id())));
    assert_eq!(toast.phase(), Phase::Dismissed(DismissCause::Closed));
}

#[test]
fn stack_routes_dismissals_to_the_right_toast() {
    let (first_calls, first) = counter();
    let (second_calls, second) = counter();
    let mut manager = Manager::new();
    let _ = manager.push(Notification::info("first").on_dismiss(first));
    let _ = manager.push(Notification::warning("second").on_dismiss(second));

    let second_id = manager.visible().next().map(Toast::id).expect("second toast");
    let _ = manager.update(notifications::Message::Close(second_id));

    assert_eq!(manager.visible_count(), 1);
    assert_eq!(first_calls.load(Ordering::SeqCst), 0);
    assert_eq!(second_calls.load(Ordering::SeqCst), 1);
}

#[test]
fn dropping_the_stack_never_runs_callbacks() {
    let (calls, callback) = counter();
    let mut manager = Manager::new();
    let _ = manager.push(Notification::info("short-lived").on_dismiss(callback));

    drop(manager);
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[test]
fn config_file_drives_notification_defaults() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let mut config = Config::default();
    assert_eq!(
        config.notifications.lifetime().as_millis(),
        DEFAULT_TOAST_DURATION_MS
    );
    config.notifications.default_duration_ms = 100;
    config.notifications.default_severity = Severity::Success;
    config::save_to_path(&config, &path).expect("Failed to write config file");

    let loaded = config::load_from_path(&path).expect("Failed to load config from path");
    let notification = loaded.notifications.notification("Saved successfully");
    assert_eq!(notification.severity_level(), Severity::Success);
    assert_eq!(notification.lifetime_value().as_millis(), 100);

    dir.close().expect("Failed to close temporary directory");
}
