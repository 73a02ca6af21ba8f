// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The demo form fills the window; active toasts are layered on top of it.

use super::Message;
use crate::i18n::fluent::I18n;
use crate::ui::demo::{self, ViewContext as DemoViewContext};
use crate::ui::notifications;
use iced::{
    widget::{Container, Stack},
    Element, Length,
};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub demo: &'a demo::State,
    pub notifications: &'a notifications::Manager,
    pub action_count: usize,
}

/// Renders the form with the toast overlay above it.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let form = demo::view(DemoViewContext {
        i18n: ctx.i18n,
        state: ctx.demo,
        action_count: ctx.action_count,
    })
    .map(Message::Demo);

    let toasts = ctx.notifications.view(ctx.i18n).map(Message::Notification);

    Stack::new()
        .push(Container::new(form).width(Length::Fill).height(Length::Fill))
        .push(toasts)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
