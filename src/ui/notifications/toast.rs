// SPDX-License-Identifier: MPL-2.0
//! Toast widget for rendering individual notifications.
//!
//! Toasts are the visual representation of notifications, appearing as
//! small cards with severity-colored accents, a countdown bar and a dismiss
//! button. Active notifications are grouped into one stack per screen
//! anchor; empty anchors render nothing.

use super::lifecycle::sleep_until;
use super::manager::{Manager, Message};
use super::notification::{Notification, NotificationId, Position};
use crate::config;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{
    border, opacity, palette, radius, shadow, sizing, spacing, typography,
};
use futures_util::stream::{self, StreamExt};
use iced::widget::{button, container, mouse_area, tooltip, Column, Container, Row, Stack, Text};
use iced::{alignment, font, Color, Element, Font, Length, Subscription, Theme};
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Default length of the exit transition.
pub const EXIT_ANIMATION: Duration = Duration::from_millis(config::DEFAULT_EXIT_ANIMATION_MS);

// =============================================================================
// Position Buckets
// =============================================================================

/// Notifications grouped by screen anchor, insertion order kept per bucket.
#[derive(Debug)]
pub struct PositionBuckets<'a> {
    buckets: [Vec<&'a Notification>; 6],
}

impl<'a> PositionBuckets<'a> {
    /// Returns the notifications anchored at `position`.
    #[must_use]
    pub fn bucket(&self, position: Position) -> &[&'a Notification] {
        &self.buckets[position.index()]
    }

    /// Iterates over the buckets that hold at least one notification, in
    /// [`Position::ALL`] order.
    pub fn non_empty(&self) -> impl Iterator<Item = (Position, &[&'a Notification])> {
        Position::ALL
            .into_iter()
            .map(|position| (position, self.bucket(position)))
            .filter(|(_, bucket)| !bucket.is_empty())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buckets.iter().all(Vec::is_empty)
    }
}

/// Sorts the active notifications into the six position buckets.
#[must_use]
pub fn group_by_position(notifications: &[Notification]) -> PositionBuckets<'_> {
    let mut buckets: [Vec<&Notification>; 6] = std::array::from_fn(|_| Vec::new());
    for notification in notifications {
        buckets[notification.position().index()].push(notification);
    }
    PositionBuckets { buckets }
}

// =============================================================================
// Exit Animations
// =============================================================================

/// Subscription key of a toast's exit transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct ExitTimer(NotificationId);

/// Toasts that were dismissed and are fading out before removal.
///
/// A dismissed toast stays in the store until its transition timer fires,
/// so it remains visible while already slated for removal.
#[derive(Debug)]
pub struct ExitAnimations {
    started: HashMap<NotificationId, Instant>,
    duration: Duration,
}

impl Default for ExitAnimations {
    fn default() -> Self {
        Self::new(EXIT_ANIMATION)
    }
}

impl ExitAnimations {
    #[must_use]
    pub fn new(duration: Duration) -> Self {
        Self {
            started: HashMap::new(),
            duration,
        }
    }

    /// Starts the transition for `id`. Returns `false` if it already runs.
    pub fn start(&mut self, id: NotificationId, now: Instant) -> bool {
        if self.started.contains_key(&id) {
            return false;
        }
        self.started.insert(id, now);
        true
    }

    /// Ends the transition for `id`. Returns `true` if one was running.
    pub fn finish(&mut self, id: NotificationId) -> bool {
        self.started.remove(&id).is_some()
    }

    pub fn clear(&mut self) {
        self.started.clear();
    }

    #[must_use]
    pub fn is_exiting(&self, id: NotificationId) -> bool {
        self.started.contains_key(&id)
    }

    /// Whether any toast is currently fading out.
    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.started.is_empty()
    }

    /// Fraction of the transition elapsed at `now`, in `[0, 1]`.
    #[must_use]
    pub fn progress(&self, id: NotificationId, now: Instant) -> Option<f32> {
        let started = self.started.get(&id)?;
        if self.duration.is_zero() {
            return Some(1.0);
        }
        let elapsed = now.saturating_duration_since(*started).as_secs_f32();
        Some((elapsed / self.duration.as_secs_f32()).clamp(0.0, 1.0))
    }

    /// One-shot timers delivering `ExitFinished` for each running transition.
    pub fn subscription(&self) -> Subscription<Message> {
        Subscription::batch(self.started.iter().map(|(&id, &started)| {
            Subscription::run_with(
                (ExitTimer(id), started + self.duration),
                |(ExitTimer(id), deadline)| exit_stream(*id, *deadline),
            )
        }))
    }
}

/// One-shot stream yielding `ExitFinished(id)` once the fade has run out.
fn exit_stream(
    id: NotificationId,
    deadline: Instant,
) -> impl stream::Stream<Item = Message> + Send + 'static {
    stream::once(sleep_until(deadline)).map(move |()| Message::ExitFinished(id))
}

// =============================================================================
// Toast Widget
// =============================================================================

/// Per-toast rendering inputs.
pub struct ToastContext<'a> {
    pub i18n: &'a I18n,
    pub now: Instant,
    /// Exit transition progress, `None` while the toast is live.
    pub exit_progress: Option<f32>,
}

/// Toast widget configuration.
pub struct Toast;

impl Toast {
    /// Renders a single toast notification.
    pub fn view<'a>(notification: &'a Notification, ctx: &ToastContext<'_>) -> Element<'a, Message> {
        let id = notification.id();
        let severity = notification.severity();
        let exiting = ctx.exit_progress.is_some();
        let alpha = 1.0 - ctx.exit_progress.unwrap_or(0.0);
        let accent = with_alpha(severity.color(), alpha);

        let glyph = Text::new(severity.glyph())
            .size(sizing::ICON_MD)
            .color(accent);

        let mut body = Column::new().spacing(spacing::XXS).width(Length::Fill);
        if let Some(title) = notification.title() {
            body = body.push(
                Text::new(title)
                    .size(typography::TITLE_SM)
                    .font(Font {
                        weight: font::Weight::Bold,
                        ..Font::DEFAULT
                    })
                    .style(move |theme: &Theme| text_style(theme, alpha)),
            );
        }
        body = body.push(
            Text::new(notification.message())
                .size(typography::BODY)
                .style(move |theme: &Theme| text_style(theme, alpha)),
        );

        if let Some(action) = notification.action() {
            let action_button = button(Text::new(action.label()).size(typography::BODY))
                .on_press_maybe((!exiting).then_some(Message::ActionTriggered(id)))
                .padding([spacing::XXS, spacing::XS])
                .style(move |theme: &Theme, status| action_button_style(theme, status, accent));
            body = body.push(action_button);
        }

        let dismiss_button = button(Text::new("✕").size(sizing::ICON_SM))
            .on_press_maybe((!exiting).then_some(Message::Dismiss(id)))
            .padding(spacing::XXS)
            .style(dismiss_button_style);
        let dismiss = tooltip(
            dismiss_button,
            Text::new(ctx.i18n.tr("toast-dismiss")).size(typography::CAPTION),
            tooltip::Position::Left,
        );

        // Layout: [glyph] [title/message/action] [dismiss]
        let header = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Top)
            .push(Container::new(glyph).padding(spacing::XXS))
            .push(body)
            .push(dismiss);

        let mut content = Column::new().spacing(spacing::XS).push(header);
        if let Some(remaining) = notification.remaining_fraction(ctx.now) {
            content = content.push(countdown_bar(remaining, accent));
        }

        let card = Container::new(content)
            .width(Length::Fixed(sizing::TOAST_WIDTH))
            .padding(spacing::SM)
            .style(move |theme: &Theme| toast_container_style(theme, accent, alpha));

        mouse_area(card)
            .on_enter(Message::HoverEntered(id))
            .on_exit(Message::HoverLeft(id))
            .into()
    }

    /// Renders every non-empty position bucket as a stack anchored to its
    /// corner or edge.
    pub fn view_overlay<'a>(manager: &'a Manager, i18n: &'a I18n) -> Element<'a, Message> {
        let buckets = group_by_position(manager.list());
        let now = manager.now();

        let layers: Vec<Element<'a, Message>> = buckets
            .non_empty()
            .map(|(position, notifications)| {
                let toasts: Vec<Element<'a, Message>> = notifications
                    .iter()
                    .copied()
                    .map(|notification| {
                        let ctx = ToastContext {
                            i18n,
                            now,
                            exit_progress: manager.exit_progress(notification.id()),
                        };
                        Self::view(notification, &ctx)
                    })
                    .collect();

                Container::new(
                    Column::with_children(toasts)
                        .spacing(spacing::XS)
                        .align_x(position.horizontal()),
                )
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(position.horizontal())
                .align_y(position.vertical())
                .padding(spacing::MD)
                .into()
            })
            .collect();

        Stack::with_children(layers)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}

/// Horizontal bar showing the share of display time left.
fn countdown_bar<'a>(remaining: f32, accent: Color) -> Element<'a, Message> {
    const RESOLUTION: f32 = 1000.0;
    let filled = (remaining * RESOLUTION).round() as u16;
    let empty = RESOLUTION as u16 - filled;

    let segment = |portion: u16, color: Color| {
        Container::new(Column::new())
            .width(Length::FillPortion(portion))
            .height(Length::Fixed(sizing::COUNTDOWN_HEIGHT))
            .style(move |_theme: &Theme| container::Style {
                background: Some(iced::Background::Color(color)),
                border: iced::Border {
                    radius: radius::FULL.into(),
                    ..Default::default()
                },
                ..Default::default()
            })
    };

    Row::new()
        .width(Length::Fill)
        .push(segment(filled, accent))
        .push(segment(
            empty,
            Color {
                a: accent.a * opacity::COUNTDOWN_TRACK,
                ..accent
            },
        ))
        .into()
}

fn with_alpha(color: Color, alpha: f32) -> Color {
    Color {
        a: color.a * alpha,
        ..color
    }
}

fn text_style(theme: &Theme, alpha: f32) -> iced::widget::text::Style {
    iced::widget::text::Style {
        color: Some(with_alpha(theme.palette().text, alpha)),
    }
}

/// Style function for the toast container.
fn toast_container_style(theme: &Theme, accent_color: Color, alpha: f32) -> container::Style {
    let bg_color = theme.extended_palette().background.base.color;

    container::Style {
        background: Some(iced::Background::Color(with_alpha(bg_color, alpha))),
        border: iced::Border {
            color: accent_color,
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: if alpha < opacity::OPAQUE {
            shadow::NONE
        } else {
            shadow::MD
        },
        text_color: Some(with_alpha(theme.palette().text, alpha)),
        ..Default::default()
    }
}

/// Style function for the action button.
fn action_button_style(theme: &Theme, status: button::Status, accent: Color) -> button::Style {
    let base = theme.extended_palette().background.base;
    let background = match status {
        button::Status::Hovered => Some(iced::Background::Color(Color {
            a: accent.a * opacity::OVERLAY_SUBTLE,
            ..accent
        })),
        button::Status::Pressed => Some(iced::Background::Color(Color {
            a: accent.a * opacity::OVERLAY_MEDIUM,
            ..accent
        })),
        button::Status::Active | button::Status::Disabled => None,
    };

    button::Style {
        background,
        text_color: if matches!(status, button::Status::Disabled) {
            Color {
                a: opacity::OVERLAY_MEDIUM,
                ..base.text
            }
        } else {
            accent
        },
        border: iced::Border {
            color: accent,
            width: border::WIDTH_SM,
            radius: radius::SM.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Style function for the dismiss button.
fn dismiss_button_style(theme: &Theme, status: button::Status) -> button::Style {
    let base = theme.extended_palette().background.base;

    match status {
        button::Status::Active => button::Style {
            background: None,
            text_color: base.text,
            border: iced::Border::default(),
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Hovered => button::Style {
            background: Some(iced::Background::Color(Color {
                a: opacity::OVERLAY_SUBTLE,
                ..palette::GRAY_400
            })),
            text_color: base.text,
            border: iced::Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Pressed => button::Style {
            background: Some(iced::Background::Color(Color {
                a: opacity::OVERLAY_MEDIUM,
                ..palette::GRAY_400
            })),
            text_color: base.text,
            border: iced::Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Disabled => button::Style {
            background: None,
            text_color: Color {
                a: opacity::OVERLAY_MEDIUM,
                ..base.text
            },
            border: iced::Border::default(),
            shadow: shadow::NONE,
            snap: true,
        },
    }
}
