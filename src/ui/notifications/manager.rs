// SPDX-License-Identifier: MPL-2.0
//! Host-side stack of toasts.
//!
//! A toast manages only itself. The `Manager` is what a host application
//! keeps around to show several of them at once: it routes messages to the
//! addressed toast, drops toasts once they are dismissed, and queues
//! notifications when the stack is full.

use super::notification::Notification;
use super::toast::{Message, Toast};
use crate::app::config::{
    DEFAULT_MAX_VISIBLE_TOASTS, MAX_MAX_VISIBLE_TOASTS, MIN_MAX_VISIBLE_TOASTS,
};
use crate::ui::design_tokens::spacing;
use iced::widget::{text, Column, Container};
use iced::{alignment, Element, Length, Task};
use std::collections::VecDeque;

/// Manages the visible toasts and the notifications waiting for a slot.
#[derive(Debug)]
pub struct Manager {
    /// Currently visible toasts (newest first).
    visible: VecDeque<Toast>,
    /// Notifications waiting to be shown. Their countdown has not started.
    queue: VecDeque<Notification>,
    max_visible: usize,
}

impl Default for Manager {
    fn default() -> Self {
        Self::new()
    }
}

impl Manager {
    /// Creates an empty manager with the default stack height.
    #[must_use]
    pub fn new() -> Self {
        Self::with_max_visible(DEFAULT_MAX_VISIBLE_TOASTS)
    }

    /// Creates an empty manager showing at most `max_visible` toasts.
    #[must_use]
    pub fn with_max_visible(max_visible: usize) -> Self {
        Self {
            visible: VecDeque::new(),
            queue: VecDeque::new(),
            max_visible: max_visible.clamp(MIN_MAX_VISIBLE_TOASTS, MAX_MAX_VISIBLE_TOASTS),
        }
    }

    /// Shows a notification, or queues it if the stack is full.
    ///
    /// Zero-lifetime notifications are never queued: they are dismissed
    /// right away whatever the stack height.
    ///
    /// Returns the countdown task of the shown toast.
    pub fn push(&mut self, notification: Notification) -> Task<Message> {
        let immediate = notification.lifetime_value().is_immediate();
        if immediate || self.visible.len() < self.max_visible {
            self.show(notification, true)
        } else {
            tracing::debug!(queued = self.queue.len() + 1, "toast stack full, queuing");
            self.queue.push_back(notification);
            Task::none()
        }
    }

    /// Routes a toast message, then discards dismissed toasts and fills
    /// freed slots from the queue.
    pub fn update(&mut self, message: Message) -> Task<Message> {
        if let Some(toast) = self.visible.iter_mut().find(|t| t.id() == message.id()) {
            toast.update(message);
        }

        let before = self.visible.len();
        self.visible.retain(Toast::is_visible);

        if self.visible.len() < before {
            self.promote_from_queue()
        } else {
            Task::none()
        }
    }

    /// Returns the currently visible toasts, newest first.
    pub fn visible(&self) -> impl Iterator<Item = &Toast> {
        self.visible.iter()
    }

    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    #[must_use]
    pub fn queued_count(&self) -> usize {
        self.queue.len()
    }

    #[must_use]
    pub fn max_visible(&self) -> usize {
        self.max_visible
    }

    /// Returns whether there are any notifications (visible or queued).
    #[must_use]
    pub fn has_notifications(&self) -> bool {
        !self.visible.is_empty() || !self.queue.is_empty()
    }

    /// Tears down every toast. Countdowns are aborted and no dismiss
    /// callback runs.
    pub fn clear(&mut self) {
        self.visible.clear();
        self.queue.clear();
    }

    /// Renders the visible toasts stacked in the top-right corner.
    pub fn view(&self) -> Element<'_, Message> {
        if self.visible.is_empty() {
            return Container::new(text(""))
                .width(Length::Shrink)
                .height(Length::Shrink)
                .into();
        }

        let cards = Column::with_children(self.visible.iter().map(Toast::view_card))
            .spacing(spacing::XS)
            .align_x(alignment::Horizontal::Right);

        Container::new(cards)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Right)
            .align_y(alignment::Vertical::Top)
            .padding(spacing::MD)
            .into()
    }

    fn show(&mut self, notification: Notification, newest: bool) -> Task<Message> {
        let (toast, task) = Toast::show(notification);

        // Zero-lifetime toasts are already dismissed and never take a slot.
        if toast.is_visible() {
            if newest {
                self.visible.push_front(toast);
            } else {
                self.visible.push_back(toast);
            }
        }
        task
    }

    fn promote_from_queue(&mut self) -> Task<Message> {
        let mut tasks = Vec::new();
        while self.visible.len() < self.max_visible {
            let Some(notification) = self.queue.pop_front() else {
                break;
            };
            tracing::debug!(remaining = self.queue.len(), "promoting queued toast");
            tasks.push(self.show(notification, false));
        }
        Task::batch(tasks)
    }
}
