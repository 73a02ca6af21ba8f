// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! The `Manager` owns the store, the expiration timers and the presentation
//! state (hover, exit transitions). It is the Iced component an application
//! embeds: route its `Message`s through [`Manager::update`], batch
//! [`Manager::subscription`] into the app subscription and layer
//! [`Manager::view`] over the app content.

use super::lifecycle::{Lifecycle, MIN_COUNTDOWN_TICK};
use super::notification::{Notification, NotificationId, Position};
use super::store::{ObserverId, Store};
use super::toast::{ExitAnimations, Toast, EXIT_ANIMATION};
use crate::config::{ToastsConfig, MAX_EXIT_ANIMATION_MS};
use crate::domain::toast::ToastDuration;
use crate::i18n::fluent::I18n;
use iced::{event, keyboard, time, Element, Event, Subscription};
use std::time::{Duration, Instant};

/// Messages for notification state changes.
#[derive(Debug, Clone)]
pub enum Message {
    /// Dismiss a specific notification by ID (starts its exit transition).
    Dismiss(NotificationId),
    /// The action button of a notification was pressed.
    ActionTriggered(NotificationId),
    /// The exit transition of a notification completed.
    ExitFinished(NotificationId),
    /// The expiration timer of a notification fired.
    Expired(NotificationId),
    /// Countdown refresh carrying the current time.
    CountdownTick(Instant),
    /// Pointer entered a toast.
    HoverEntered(NotificationId),
    /// Pointer left a toast.
    HoverLeft(NotificationId),
    /// Escape was pressed.
    EscapePressed,
}

/// Values applied when a request leaves a field unset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Defaults {
    pub duration: ToastDuration,
    pub position: Position,
    pub exit_animation: Duration,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            duration: ToastDuration::default(),
            position: Position::default(),
            exit_animation: EXIT_ANIMATION,
        }
    }
}

impl From<&ToastsConfig> for Defaults {
    fn from(config: &ToastsConfig) -> Self {
        let fallback = Self::default();
        Self {
            duration: config
                .default_duration_ms
                .map_or(fallback.duration, ToastDuration::from_millis),
            position: config.default_position.unwrap_or(fallback.position),
            exit_animation: config.exit_animation_ms.map_or(fallback.exit_animation, |ms| {
                Duration::from_millis(ms.min(MAX_EXIT_ANIMATION_MS))
            }),
        }
    }
}

/// Manages the active notifications and their timers.
#[derive(Debug)]
pub struct Manager {
    store: Store,
    lifecycle: Lifecycle,
    exits: ExitAnimations,
    hovered: Option<NotificationId>,
    /// Clock used for rendering; refreshed by the countdown tick.
    now: Instant,
    defaults: Defaults,
}

impl Default for Manager {
    fn default() -> Self {
        Self::with_defaults(Defaults::default())
    }
}

impl Manager {
    /// Creates a new empty notification manager.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_defaults(defaults: Defaults) -> Self {
        Self {
            store: Store::new(),
            lifecycle: Lifecycle::new(),
            exits: ExitAnimations::new(defaults.exit_animation),
            hovered: None,
            now: Instant::now(),
            defaults,
        }
    }

    #[must_use]
    pub fn defaults(&self) -> Defaults {
        self.defaults
    }

    /// Adds a fully built record and schedules its expiration.
    pub fn add(&mut self, notification: Notification) -> NotificationId {
        let scheduled = self.lifecycle.schedule(&notification);
        tracing::debug!(
            id = %notification.id(),
            severity = %notification.severity(),
            position = %notification.position(),
            duration_ms = notification.duration().as_millis(),
            scheduled,
            "toast added"
        );
        self.now = self.now.max(notification.created_at_instant());
        self.store.add(notification)
    }

    /// Removes a notification right away, skipping the exit transition.
    ///
    /// Removing an unknown id is a no-op. Returns `true` if a record was
    /// removed.
    pub fn remove(&mut self, id: NotificationId) -> bool {
        self.lifecycle.cancel(id);
        self.exits.finish(id);
        if self.hovered == Some(id) {
            self.hovered = None;
        }
        let removed = self.store.remove(id);
        if removed {
            tracing::debug!(%id, "toast removed");
        }
        removed
    }

    /// Removes every notification and releases all timers.
    pub fn remove_all(&mut self) {
        let count = self.store.len();
        self.lifecycle.cancel_all();
        self.exits.clear();
        self.hovered = None;
        self.store.remove_all();
        tracing::debug!(count, "all toasts removed");
    }

    /// Returns the active notifications, oldest first.
    #[must_use]
    pub fn list(&self) -> &[Notification] {
        self.store.list()
    }

    #[must_use]
    pub fn get(&self, id: NotificationId) -> Option<&Notification> {
        self.store.get(id)
    }

    #[must_use]
    pub fn contains(&self, id: NotificationId) -> bool {
        self.store.contains(id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.store.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Registers a read-only observer of the active list.
    pub fn subscribe(
        &mut self,
        observer: impl FnMut(&[Notification]) + 'static,
    ) -> ObserverId {
        self.store.subscribe(observer)
    }

    pub fn unsubscribe(&mut self, observer: ObserverId) -> bool {
        self.store.unsubscribe(observer)
    }

    #[must_use]
    pub fn lifecycle(&self) -> &Lifecycle {
        &self.lifecycle
    }

    /// Time last used for rendering countdowns and transitions.
    #[must_use]
    pub fn now(&self) -> Instant {
        self.now
    }

    #[must_use]
    pub fn hovered(&self) -> Option<NotificationId> {
        self.hovered
    }

    #[must_use]
    pub fn is_exiting(&self, id: NotificationId) -> bool {
        self.exits.is_exiting(id)
    }

    #[must_use]
    pub fn exit_progress(&self, id: NotificationId) -> Option<f32> {
        self.exits.progress(id, self.now)
    }

    /// Starts the exit transition of a notification.
    ///
    /// The record stays in the list until the transition finishes.
    /// Returns `false` for unknown ids and toasts already leaving.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        self.dismiss_at(id, Instant::now())
    }

    fn dismiss_at(&mut self, id: NotificationId, now: Instant) -> bool {
        if !self.store.contains(id) {
            return false;
        }
        self.now = self.now.max(now);
        let started = self.exits.start(id, now);
        if started {
            tracing::debug!(%id, "toast dismissed");
        }
        started
    }

    /// Handles a notification message.
    pub fn update(&mut self, message: Message) {
        match message {
            Message::Dismiss(id) => {
                self.dismiss(id);
            }
            Message::ActionTriggered(id) => {
                if self.exits.is_exiting(id) {
                    return;
                }
                if let Some(action) = self.store.get(id).and_then(Notification::action) {
                    tracing::debug!(%id, label = action.label(), "toast action triggered");
                    action.trigger();
                }
                self.dismiss(id);
            }
            Message::ExitFinished(id) => {
                if self.exits.finish(id) {
                    self.remove(id);
                }
            }
            Message::Expired(id) => {
                if self.lifecycle.fire(id) {
                    tracing::debug!(%id, "toast expired");
                    self.remove(id);
                }
            }
            Message::CountdownTick(now) => {
                self.now = now;
            }
            Message::HoverEntered(id) => {
                self.hovered = Some(id);
            }
            Message::HoverLeft(id) => {
                if self.hovered == Some(id) {
                    self.hovered = None;
                }
            }
            Message::EscapePressed => {
                if let Some(id) = self.hovered {
                    self.dismiss(id);
                }
            }
        }
    }

    /// Pace of the render clock, or `None` when nothing on screen moves.
    ///
    /// A running fade needs frame-rate refreshes even when no timed toast
    /// is left to drive the countdown.
    #[must_use]
    pub fn tick_interval(&self) -> Option<Duration> {
        if self.exits.is_active() {
            Some(MIN_COUNTDOWN_TICK)
        } else {
            self.lifecycle.countdown_interval()
        }
    }

    /// Timers, render tick and the Escape listener.
    ///
    /// Everything here is derived from the current state: when a record
    /// leaves the store its timers stop being listed and the runtime
    /// cancels them.
    pub fn subscription(&self) -> Subscription<Message> {
        let escape = if self.hovered.is_some() {
            event::listen_with(|event, _status, _window| match event {
                Event::Keyboard(keyboard::Event::KeyPressed {
                    key: keyboard::Key::Named(keyboard::key::Named::Escape),
                    ..
                }) => Some(Message::EscapePressed),
                _ => None,
            })
        } else {
            Subscription::none()
        };

        let tick = match self.tick_interval() {
            Some(interval) => time::every(interval).map(Message::CountdownTick),
            None => Subscription::none(),
        };

        Subscription::batch([
            self.lifecycle.subscription(),
            self.exits.subscription(),
            tick,
            escape,
        ])
    }

    /// Renders all active toasts grouped by position.
    pub fn view<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        Toast::view_overlay(self, i18n)
    }
}
