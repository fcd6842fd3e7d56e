// SPDX-License-Identifier: MPL-2.0
//! Toast widget: a single notification with its own countdown.
//!
//! A toast is shown in the `Visible` phase with an abortable countdown task.
//! It leaves that phase exactly once, either when the countdown fires or when
//! the user presses the dismiss button, and never comes back. Whichever
//! trigger comes first wins; the other one finds the toast already dismissed
//! and does nothing.

use super::lifetime::Lifetime;
use super::notification::{DismissCallback, Notification, NotificationId, Severity};
use crate::ui::design_tokens::{opacity, palette, radius, shadow, sizing, spacing, typography};
use iced::task::Handle;
use iced::widget::{button, container, text, Container, Row, Text};
use iced::{alignment, Color, Element, Length, Task, Theme};
use std::fmt;

/// Messages emitted by toasts and their countdowns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// The dismiss button was pressed.
    Close(NotificationId),
    /// The countdown elapsed.
    Expired(NotificationId),
}

impl Message {
    /// Returns the toast this message is addressed to.
    #[must_use]
    pub fn id(&self) -> NotificationId {
        match self {
            Message::Close(id) | Message::Expired(id) => *id,
        }
    }
}

/// Why a toast left the visible phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DismissCause {
    Expired,
    Closed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Visible,
    Dismissed(DismissCause),
}

/// A shown notification.
pub struct Toast {
    id: NotificationId,
    message: String,
    severity: Severity,
    lifetime: Lifetime,
    phase: Phase,
    on_dismiss: Option<DismissCallback>,
    /// Aborts on drop, so tearing the toast down cancels its countdown.
    countdown: Option<Handle>,
}

/// Sleeps for `lifetime`, then yields the id of the toast to expire.
pub(crate) async fn countdown(id: NotificationId, lifetime: Lifetime) -> NotificationId {
    tokio::time::sleep(lifetime.as_duration()).await;
    id
}

impl Toast {
    /// Shows a notification and returns the countdown task that expires it.
    ///
    /// A zero lifetime dismisses the toast before this returns: the dismiss
    /// callback runs here and no countdown is scheduled.
    pub fn show(notification: Notification) -> (Self, Task<Message>) {
        let (message, severity, lifetime, on_dismiss) = notification.into_parts();
        let mut toast = Self {
            id: NotificationId::new(),
            message,
            severity,
            lifetime,
            phase: Phase::Visible,
            on_dismiss,
            countdown: None,
        };

        tracing::debug!(
            id = %toast.id,
            severity = toast.severity.name(),
            lifetime_ms = toast.lifetime.as_millis(),
            "toast shown"
        );

        if toast.lifetime.is_immediate() {
            toast.expire();
            return (toast, Task::none());
        }

        let (task, handle) =
            Task::perform(countdown(toast.id, toast.lifetime), Message::Expired).abortable();
        toast.countdown = Some(handle.abort_on_drop());

        (toast, task)
    }

    /// Leaves the visible phase. Returns `false` if already dismissed.
    pub fn dismiss(&mut self, cause: DismissCause) -> bool {
        if self.phase != Phase::Visible {
            return false;
        }

        self.phase = Phase::Dismissed(cause);
        if let Some(handle) = self.countdown.take() {
            handle.abort();
        }

        tracing::debug!(id = %self.id, ?cause, "toast dismissed");

        if let Some(callback) = self.on_dismiss.take() {
            callback();
        }
        true
    }

    /// Manual dismissal from the dismiss button.
    pub fn close(&mut self) -> bool {
        self.dismiss(DismissCause::Closed)
    }

    /// Automatic dismissal when the countdown elapses.
    pub fn expire(&mut self) -> bool {
        self.dismiss(DismissCause::Expired)
    }

    /// Applies a message if it is addressed to this toast.
    ///
    /// Returns `true` only if the message caused the dismissal.
    pub fn update(&mut self, message: Message) -> bool {
        if message.id() != self.id {
            return false;
        }
        match message {
            Message::Close(_) => self.close(),
            Message::Expired(_) => self.expire(),
        }
    }

    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    #[must_use]
    pub fn lifetime(&self) -> Lifetime {
        self.lifetime
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.phase == Phase::Visible
    }

    #[must_use]
    pub fn has_pending_countdown(&self) -> bool {
        self.countdown.is_some()
    }

    /// Renders the toast anchored to the top-right corner, or nothing once
    /// dismissed.
    pub fn view(&self) -> Element<'_, Message> {
        if !self.is_visible() {
            return empty();
        }

        Container::new(self.view_card())
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Right)
            .align_y(alignment::Vertical::Top)
            .padding(spacing::MD)
            .into()
    }

    /// Renders the toast card itself: message and dismiss button on a
    /// severity-colored background.
    pub fn view_card(&self) -> Element<'_, Message> {
        if !self.is_visible() {
            return empty();
        }

        let background = self.severity.color();

        let message_widget =
            Text::new(self.message.as_str())
                .size(typography::BODY)
                .style(|_theme: &Theme| text::Style {
                    color: Some(palette::WHITE),
                });

        let glyph = Container::new(Text::new("\u{00d7}").size(typography::DISMISS_GLYPH))
            .center(Length::Fill);
        let dismiss_button = button(glyph)
            .on_press(Message::Close(self.id))
            .width(Length::Fixed(sizing::DISMISS_SIZE))
            .height(Length::Fixed(sizing::DISMISS_SIZE))
            .padding(0)
            .style(dismiss_button_style);

        // Layout: [message] [dismiss]
        let content = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(
                Container::new(message_widget)
                    .width(Length::Fill)
                    .align_x(alignment::Horizontal::Left),
            )
            .push(dismiss_button);

        Container::new(content)
            .width(Length::Fixed(sizing::TOAST_WIDTH))
            .padding([spacing::SM, spacing::MD])
            .style(move |theme: &Theme| toast_container_style(theme, background))
            .into()
    }
}

impl Drop for Toast {
    fn drop(&mut self) {
        if self.is_visible() {
            tracing::trace!(id = %self.id, "toast torn down while visible");
        }
    }
}

impl fmt::Debug for Toast {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Toast")
            .field("id", &self.id)
            .field("message", &self.message)
            .field("severity", &self.severity)
            .field("lifetime", &self.lifetime)
            .field("phase", &self.phase)
            .finish()
    }
}

/// An element that takes no space.
fn empty<'a>() -> Element<'a, Message> {
    Container::new(text(""))
        .width(Length::Shrink)
        .height(Length::Shrink)
        .into()
}

/// Style function for the toast container.
fn toast_container_style(_theme: &Theme, background: Color) -> container::Style {
    container::Style {
        background: Some(iced::Background::Color(background)),
        border: iced::Border {
            color: background,
            width: 0.0,
            radius: radius::MD.into(),
        },
        shadow: shadow::MD,
        text_color: Some(palette::WHITE),
        ..Default::default()
    }
}

/// Style function for the dismiss button.
fn dismiss_button_style(_theme: &Theme, status: button::Status) -> button::Style {
    let overlay = |alpha: f32| {
        Some(iced::Background::Color(Color {
            a: alpha,
            ..palette::BLACK
        }))
    };

    let background = match status {
        button::Status::Active | button::Status::Disabled => None,
        button::Status::Hovered => overlay(opacity::OVERLAY_SUBTLE),
        button::Status::Pressed => overlay(opacity::OVERLAY_MEDIUM),
    };

    button::Style {
        background,
        text_color: palette::WHITE,
        border: iced::Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use std::time::Duration;

    fn counting(notification: Notification) -> (Notification, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let notification = notification.on_dismiss(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        (notification, calls)
    }

    #[test]
    fn show_starts_visible_with_countdown() {
        let (toast, _task) = Toast::show(Notification::info("hello"));
        assert!(toast.is_visible());
        assert!(toast.has_pending_countdown());
        assert_eq!(toast.phase(), Phase::Visible);
    }

    #[test]
    fn expiry_fires_callback_once() {
        let (notification, calls) =
            counting(Notification::success("Saved successfully").duration_ms(100));
        let (mut toast, _task) = Toast::show(notification);

        assert!(toast.update(Message::Expired(toast.id())));
        assert_eq!(toast.phase(), Phase::Dismissed(DismissCause::Expired));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(!toast.has_pending_countdown());
    }

    #[test]
    fn close_before_expiry_suppresses_countdown() {
        let (notification, calls) = counting(Notification::info("hello"));
        let (mut toast, _task) = Toast::show(notification);
        let id = toast.id();

        assert!(toast.update(Message::Close(id)));
        assert!(!toast.has_pending_countdown());

        // A countdown message already in flight has no effect.
        assert!(!toast.update(Message::Expired(id)));
        assert_eq!(toast.phase(), Phase::Dismissed(DismissCause::Closed));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn repeated_close_is_idempotent() {
        let (notification, calls) = counting(Notification::warning("careful"));
        let (mut toast, _task) = Toast::show(notification);

        assert!(toast.close());
        assert!(!toast.close());
        assert!(!toast.close());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn close_without_callback_does_not_panic() {
        let (mut toast, _task) = Toast::show(Notification::error("Network error"));
        assert!(toast.close());
        assert!(!toast.is_visible());
    }

    #[test]
    fn teardown_before_dismissal_skips_callback() {
        let (notification, calls) = counting(Notification::info("bye"));
        let (toast, _task) = Toast::show(notification);
        drop(toast);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn messages_for_other_toasts_are_ignored() {
        let (notification, calls) = counting(Notification::info("mine"));
        let (mut toast, _task) = Toast::show(notification);
        let (other, _other_task) = Toast::show(Notification::info("other"));

        assert!(!toast.update(Message::Close(other.id())));
        assert!(toast.is_visible());
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn zero_lifetime_dismisses_on_show() {
        let (notification, calls) = counting(Notification::info("gone").duration_ms(0));
        let (toast, _task) = Toast::show(notification);

        assert_eq!(toast.phase(), Phase::Dismissed(DismissCause::Expired));
        assert!(!toast.has_pending_countdown());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn negative_lifetime_dismisses_on_show() {
        let (notification, calls) = counting(Notification::info("gone").duration_ms(-20));
        let (toast, _task) = Toast::show(notification);

        assert!(!toast.is_visible());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn message_reports_its_target() {
        let id = NotificationId::new();
        assert_eq!(Message::Close(id).id(), id);
        assert_eq!(Message::Expired(id).id(), id);
    }

    #[test]
    fn container_style_uses_severity_background() {
        let theme = Theme::Dark;
        for severity in [
            Severity::Info,
            Severity::Warning,
            Severity::Error,
            Severity::Success,
        ] {
            let style = toast_container_style(&theme, severity.color());
            assert_eq!(
                style.background,
                Some(iced::Background::Color(severity.color()))
            );
            assert_eq!(style.text_color, Some(palette::WHITE));
        }
    }

    #[test]
    fn dismiss_button_highlights_on_hover() {
        let theme = Theme::Light;
        assert!(dismiss_button_style(&theme, button::Status::Active)
            .background
            .is_none());
        assert!(dismiss_button_style(&theme, button::Status::Hovered)
            .background
            .is_some());
    }

    #[tokio::test(start_paused = true)]
    async fn countdown_fires_at_or_after_lifetime() {
        let id = NotificationId::new();
        let start = tokio::time::Instant::now();

        let fired = countdown(id, Lifetime::from_millis(100)).await;

        assert_eq!(fired, id);
        assert!(start.elapsed() >= Duration::from_millis(100));
    }

    #[tokio::test(start_paused = true)]
    async fn elapsed_countdown_expires_its_toast() {
        let (notification, calls) =
            counting(Notification::success("Saved successfully").duration_ms(100));
        let (mut toast, _task) = Toast::show(notification);
        let start = tokio::time::Instant::now();

        let message = Message::Expired(countdown(toast.id(), toast.lifetime()).await);

        assert_eq!(message, Message::Expired(toast.id()));
        assert!(start.elapsed() >= Duration::from_millis(100));
        assert!(toast.update(message));
        assert_eq!(toast.phase(), Phase::Dismissed(DismissCause::Expired));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn countdown_finishing_after_close_changes_nothing() {
        let (notification, calls) =
            counting(Notification::error("Network error").duration_ms(100));
        let (mut toast, _task) = Toast::show(notification);

        tokio::time::sleep(Duration::from_millis(10)).await;
        assert!(toast.close());
        assert!(!toast.has_pending_countdown());

        let late = Message::Expired(countdown(toast.id(), toast.lifetime()).await);
        assert!(!toast.update(late));
        assert_eq!(toast.phase(), Phase::Dismissed(DismissCause::Closed));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
