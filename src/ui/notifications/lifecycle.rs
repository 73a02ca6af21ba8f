// SPDX-License-Identifier: MPL-2.0
//! Expiration timers and countdown cadence.
//!
//! Every notification with a non-zero duration owns exactly one one-shot
//! expiration timer. Timers are expressed as Iced subscriptions keyed by the
//! notification id: once a record is no longer scheduled here, its
//! subscription disappears from the batch and the runtime cancels the
//! pending sleep. Dropping the owning manager releases every timer the same
//! way.
//!
//! The countdown tick is a separate, shared subscription owned by the
//! manager. It only refreshes the clock used for rendering and never
//! removes anything; [`Lifecycle::countdown_interval`] sets its pace.

use super::manager::Message;
use super::notification::{Notification, NotificationId};
use futures_util::stream::{self, Stream, StreamExt};
use iced::Subscription;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Number of countdown refreshes over the shortest active duration.
pub const COUNTDOWN_STEPS: u32 = 50;

/// Fastest countdown refresh (roughly one frame at 60 Hz).
pub const MIN_COUNTDOWN_TICK: Duration = Duration::from_millis(16);

/// Slowest countdown refresh.
pub const MAX_COUNTDOWN_TICK: Duration = Duration::from_millis(100);

#[derive(Debug, Clone, Copy)]
struct Timer {
    deadline: Instant,
    duration: Duration,
}

/// Subscription key of a notification's expiration timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct ExpiryTimer(NotificationId);

/// Tracks the pending expiration timer of each timed notification.
#[derive(Debug, Default)]
pub struct Lifecycle {
    timers: HashMap<NotificationId, Timer>,
}

impl Lifecycle {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedules the expiration timer for a freshly added notification.
    ///
    /// Persistent notifications get no timer. Returns `true` if a timer was
    /// scheduled.
    pub fn schedule(&mut self, notification: &Notification) -> bool {
        let Some(deadline) = notification.expires_at() else {
            return false;
        };
        self.timers.insert(
            notification.id(),
            Timer {
                deadline,
                duration: notification.duration().as_duration(),
            },
        );
        true
    }

    /// Cancels the timer of a notification removed before it expired.
    pub fn cancel(&mut self, id: NotificationId) -> bool {
        self.timers.remove(&id).is_some()
    }

    pub fn cancel_all(&mut self) {
        self.timers.clear();
    }

    /// Consumes the timer of `id` when its expiration message arrives.
    ///
    /// Returns `false` for ids with no pending timer (already removed or
    /// persistent), in which case the message is stale and must be ignored.
    pub fn fire(&mut self, id: NotificationId) -> bool {
        self.timers.remove(&id).is_some()
    }

    #[must_use]
    pub fn is_scheduled(&self, id: NotificationId) -> bool {
        self.timers.contains_key(&id)
    }

    #[must_use]
    pub fn deadline(&self, id: NotificationId) -> Option<Instant> {
        self.timers.get(&id).map(|timer| timer.deadline)
    }

    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.timers.len()
    }

    /// Interval of the countdown tick, or `None` when no timer is pending.
    ///
    /// The shortest pending duration is split into [`COUNTDOWN_STEPS`]
    /// refreshes, clamped to a range that keeps the bar smooth without
    /// redrawing needlessly.
    #[must_use]
    pub fn countdown_interval(&self) -> Option<Duration> {
        self.timers
            .values()
            .map(|timer| timer.duration)
            .min()
            .map(|shortest| (shortest / COUNTDOWN_STEPS).clamp(MIN_COUNTDOWN_TICK, MAX_COUNTDOWN_TICK))
    }

    /// Expiration timers for every pending notification.
    ///
    /// Each timer is keyed by its id and deadline, so an unchanged timer
    /// keeps running across rebuilds of the batch.
    pub fn subscription(&self) -> Subscription<Message> {
        Subscription::batch(self.timers.iter().map(|(&id, timer)| {
            Subscription::run_with(
                (ExpiryTimer(id), timer.deadline),
                |(ExpiryTimer(id), deadline)| expiry_stream(*id, *deadline),
            )
        }))
    }
}

/// One-shot stream yielding `Expired(id)` once `deadline` has passed.
///
/// This is the stream behind each expiration subscription. It sleeps on the
/// Tokio clock, so tests can drive it with a paused runtime.
pub fn expiry_stream(
    id: NotificationId,
    deadline: Instant,
) -> impl Stream<Item = Message> + Send + 'static {
    stream::once(sleep_until(deadline)).map(move |()| Message::Expired(id))
}

/// Sleeps on the Tokio clock until `deadline`.
pub(crate) async fn sleep_until(deadline: Instant) {
    tokio::time::sleep_until(tokio::time::Instant::from_std(deadline)).await;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::toast::ToastDuration;
    use crate::ui::notifications::notification::{Position, Severity};

    fn timed(millis: u64, created_at: Instant) -> Notification {
        Notification::created_at(
            "timed",
            Severity::Info,
            ToastDuration::from_millis(millis),
            Position::default(),
            created_at,
        )
    }

    #[test]
    fn timed_notification_gets_deadline() {
        let start = Instant::now();
        let notification = timed(3000, start);
        let mut lifecycle = Lifecycle::new();

        assert!(lifecycle.schedule(&notification));
        assert_eq!(
            lifecycle.deadline(notification.id()),
            Some(start + Duration::from_millis(3000))
        );
    }

    #[test]
    fn persistent_notification_gets_no_timer() {
        let notification = timed(0, Instant::now());
        let mut lifecycle = Lifecycle::new();

        assert!(!lifecycle.schedule(&notification));
        assert!(!lifecycle.is_scheduled(notification.id()));
        assert_eq!(lifecycle.countdown_interval(), None);
    }

    #[test]
    fn cancel_prevents_later_fire() {
        let notification = timed(1000, Instant::now());
        let mut lifecycle = Lifecycle::new();
        lifecycle.schedule(&notification);

        assert!(lifecycle.cancel(notification.id()));
        assert!(!lifecycle.fire(notification.id()));
    }

    #[test]
    fn fire_consumes_timer_once() {
        let notification = timed(1000, Instant::now());
        let mut lifecycle = Lifecycle::new();
        lifecycle.schedule(&notification);

        assert!(lifecycle.fire(notification.id()));
        assert!(!lifecycle.fire(notification.id()));
        assert_eq!(lifecycle.pending_count(), 0);
    }

    #[test]
    fn cancel_all_drops_every_timer() {
        let start = Instant::now();
        let mut lifecycle = Lifecycle::new();
        for millis in [100, 200, 300] {
            lifecycle.schedule(&timed(millis, start));
        }

        lifecycle.cancel_all();
        assert_eq!(lifecycle.pending_count(), 0);
    }

    #[test]
    fn countdown_interval_follows_shortest_duration() {
        let start = Instant::now();
        let mut lifecycle = Lifecycle::new();
        lifecycle.schedule(&timed(4000, start));
        lifecycle.schedule(&timed(2000, start));

        // 2000 ms / 50 steps = 40 ms
        assert_eq!(
            lifecycle.countdown_interval(),
            Some(Duration::from_millis(40))
        );
    }

    #[test]
    fn countdown_interval_is_clamped() {
        let start = Instant::now();
        let mut short = Lifecycle::new();
        short.schedule(&timed(100, start));
        assert_eq!(short.countdown_interval(), Some(MIN_COUNTDOWN_TICK));

        let mut long = Lifecycle::new();
        long.schedule(&timed(60_000, start));
        assert_eq!(long.countdown_interval(), Some(MAX_COUNTDOWN_TICK));
    }

    #[tokio::test(start_paused = true)]
    async fn expiry_stream_fires_once_after_duration() {
        let start = tokio::time::Instant::now();
        let notification = timed(3000, start.into_std());
        let id = notification.id();
        let deadline = notification.expires_at().unwrap();

        let mut timer = Box::pin(expiry_stream(id, deadline));
        let message = timer.next().await;

        assert!(matches!(message, Some(Message::Expired(fired)) if fired == id));
        assert!(start.elapsed() >= Duration::from_millis(3000));
        assert!(timer.next().await.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn expiry_stream_is_pending_before_deadline() {
        let start = tokio::time::Instant::now();
        let notification = timed(3000, start.into_std());
        let deadline = notification.expires_at().unwrap();

        let early = tokio::time::timeout(
            Duration::from_millis(2900),
            Box::pin(expiry_stream(notification.id(), deadline)).next(),
        )
        .await;

        assert!(early.is_err(), "timer fired before its deadline");
    }
}
