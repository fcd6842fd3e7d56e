// SPDX-License-Identifier: MPL-2.0
//! Demo host application.
//!
//! The `App` owns a toast [`Manager`] and plays the role of the external
//! container: it decides when to show toasts, keeps the stack, and counts
//! the dismissals reported by each toast's callback.

pub mod config;
mod message;
pub mod paths;
mod view;

pub use message::{Flags, Message};

use crate::ui::notifications::{Manager, Notification, Severity};
use crate::ui::theming::ThemeMode;
use config::Config;
use iced::{window, Element, Task, Theme};
use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

pub struct App {
    config: Config,
    theme_mode: ThemeMode,
    notifications: Manager,
    /// Number of toasts shown so far.
    shown: usize,
    /// Incremented by each toast's dismiss callback.
    dismissed: Arc<AtomicUsize>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("theme_mode", &self.theme_mode)
            .field("visible_toasts", &self.notifications.visible_count())
            .field("shown", &self.shown)
            .field("dismissed", &self.dismissed_count())
            .finish()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(config::WINDOW_DEFAULT_WIDTH, config::WINDOW_DEFAULT_HEIGHT),
        min_size: Some(iced::Size::new(
            config::MIN_WINDOW_WIDTH,
            config::MIN_WINDOW_HEIGHT,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    paths::init_cli_overrides(flags.config_dir.clone());

    // iced requires an Fn boot closure; the flags are consumed on first call.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .run()
}

/// Sample message shown by each severity button.
#[must_use]
pub fn sample_message(severity: Severity) -> &'static str {
    match severity {
        Severity::Info => "A new version is available",
        Severity::Warning => "Disk space is running low",
        Severity::Error => "Network error",
        Severity::Success => "Saved successfully",
    }
}

impl App {
    /// Loads the configuration and shows the startup toasts requested by
    /// `flags`.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let (mut app, task) = Self::with_config(config, flags);

        if let Some(warning) = config_warning {
            let warning_task = app.push(Notification::warning(warning).duration_ms(5000));
            return (app, Task::batch([task, warning_task]));
        }
        (app, task)
    }

    /// Builds the application from an already loaded configuration.
    pub fn with_config(config: Config, flags: Flags) -> (Self, Task<Message>) {
        let mut app = App {
            theme_mode: config.general.theme_mode,
            notifications: Manager::with_max_visible(config.notifications.max_visible),
            config,
            shown: 0,
            dismissed: Arc::new(AtomicUsize::new(0)),
        };

        let task = match flags.message {
            Some(message) => {
                let mut notification = app.config.notifications.notification(message);
                if let Some(severity) = flags.severity.as_deref() {
                    notification = notification.severity(Severity::from_name(severity));
                }
                if let Some(duration_ms) = flags.duration_ms {
                    notification = notification.duration_ms(duration_ms);
                }
                app.push(notification)
            }
            None => Task::none(),
        };

        (app, task)
    }

    pub fn title(&self) -> String {
        String::from("Iced Toast")
    }

    pub fn theme(&self) -> Theme {
        self.theme_mode.theme()
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Show(severity) => {
                let notification = self
                    .config
                    .notifications
                    .notification(sample_message(severity))
                    .severity(severity);
                self.push(notification)
            }
            Message::Toast(toast_message) => self
                .notifications
                .update(toast_message)
                .map(Message::Toast),
            Message::ClearAll => {
                self.notifications.clear();
                Task::none()
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }

    /// Shows a notification, counting its dismissal when it happens.
    fn push(&mut self, notification: Notification) -> Task<Message> {
        let dismissed = Arc::clone(&self.dismissed);
        let notification = notification.on_dismiss(move || {
            dismissed.fetch_add(1, Ordering::Relaxed);
        });
        self.shown += 1;
        self.notifications.push(notification).map(Message::Toast)
    }

    #[must_use]
    pub fn notifications(&self) -> &Manager {
        &self.notifications
    }

    #[must_use]
    pub fn shown_count(&self) -> usize {
        self.shown
    }

    #[must_use]
    pub fn dismissed_count(&self) -> usize {
        self.dismissed.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::notifications::{self, Toast};

    fn app() -> App {
        App::with_config(Config::default(), Flags::default()).0
    }

    fn first_id(app: &App) -> notifications::NotificationId {
        app.notifications()
            .visible()
            .next()
            .map(Toast::id)
            .expect("a visible toast")
    }

    #[test]
    fn starts_without_toasts() {
        let app = app();
        assert!(!app.notifications().has_notifications());
        assert_eq!(app.shown_count(), 0);
        assert_eq!(app.dismissed_count(), 0);
    }

    #[test]
    fn show_pushes_sample_toast_with_requested_severity() {
        let mut app = app();
        let _ = app.update(Message::Show(Severity::Success));

        let toast = app.notifications().visible().next().expect("toast");
        assert_eq!(toast.message(), "Saved successfully");
        assert_eq!(toast.severity(), Severity::Success);
        assert_eq!(app.shown_count(), 1);
    }

    #[test]
    fn close_removes_toast_and_counts_dismissal() {
        let mut app = app();
        let _ = app.update(Message::Show(Severity::Error));
        let id = first_id(&app);

        let _ = app.update(Message::Toast(notifications::Message::Close(id)));
        let _ = app.update(Message::Toast(notifications::Message::Expired(id)));

        assert_eq!(app.notifications().visible_count(), 0);
        assert_eq!(app.dismissed_count(), 1);
    }

    #[test]
    fn clear_all_does_not_count_dismissals() {
        let mut app = app();
        let _ = app.update(Message::Show(Severity::Info));
        let _ = app.update(Message::Show(Severity::Warning));

        let _ = app.update(Message::ClearAll);
        assert!(!app.notifications().has_notifications());
        assert_eq!(app.dismissed_count(), 0);
    }

    #[test]
    fn startup_flags_show_initial_toast() {
        let flags = Flags {
            message: Some("Hello".to_string()),
            severity: Some("warning".to_string()),
            duration_ms: Some(250),
            ..Flags::default()
        };
        let (app, _task) = App::with_config(Config::default(), flags);

        let toast = app.notifications().visible().next().expect("toast");
        assert_eq!(toast.message(), "Hello");
        assert_eq!(toast.severity(), Severity::Warning);
        assert_eq!(toast.lifetime().as_millis(), 250);
    }

    #[test]
    fn startup_toast_with_unknown_type_is_info() {
        let flags = Flags {
            message: Some("Hello".to_string()),
            severity: Some("fatal".to_string()),
            ..Flags::default()
        };
        let (app, _task) = App::with_config(Config::default(), flags);

        let toast = app.notifications().visible().next().expect("toast");
        assert_eq!(toast.severity(), Severity::Info);
    }

    #[test]
    fn zero_duration_startup_toast_is_dismissed_immediately() {
        let flags = Flags {
            message: Some("Blink".to_string()),
            duration_ms: Some(0),
            ..Flags::default()
        };
        let (app, _task) = App::with_config(Config::default(), flags);

        assert_eq!(app.notifications().visible_count(), 0);
        assert_eq!(app.dismissed_count(), 1);
    }

    #[test]
    fn theme_follows_config() {
        let mut config = Config::default();
        config.general.theme_mode = ThemeMode::Light;
        let (app, _task) = App::with_config(config, Flags::default());
        assert_eq!(app.theme(), Theme::Light);
    }
}
