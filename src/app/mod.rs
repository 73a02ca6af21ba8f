// SPDX-License-Identifier: MPL-2.0
//! Demo application root.
//!
//! The `App` struct wires the demo form to the notification manager and
//! applies persisted preferences (language, theme, toast defaults) at
//! startup. A configuration file that cannot be read is reported as a
//! warning toast rather than aborting.

mod message;
pub mod paths;
mod view;

pub use message::{Flags, Message};

use crate::config;
use crate::i18n::fluent::I18n;
use crate::ui::demo;
use crate::ui::notifications::{self, Action, Severity, ToastRequest};
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Subscription, Task, Theme};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::path::PathBuf;
use std::sync::Arc;

pub const WINDOW_DEFAULT_WIDTH: u32 = 960;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 720;
pub const MIN_WINDOW_WIDTH: u32 = 640;
pub const MIN_WINDOW_HEIGHT: u32 = 560;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    theme_mode: ThemeMode,
    notifications: notifications::Manager,
    demo: demo::State,
    /// Bumped by the demo action callback.
    action_count: Arc<AtomicUsize>,
}

impl std::fmt::Debug for App {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("App")
            .field("theme_mode", &self.theme_mode)
            .field("notifications", &self.notifications.len())
            .field("action_count", &self.action_count())
            .finish_non_exhaustive()
    }
}

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires an Fn boot closure; flags are consumed on the first call
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        let i18n = I18n::default();
        let demo = demo::State::new(i18n.tr("demo-default-message"), Default::default());
        Self {
            i18n,
            theme_mode: ThemeMode::System,
            notifications: notifications::Manager::new(),
            demo,
            action_count: Arc::new(AtomicUsize::new(0)),
        }
    }
}

impl App {
    /// Initializes application state from the persisted config and the
    /// launcher flags.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) =
            config::load_with_override(flags.config_dir.as_deref().map(PathBuf::from));
        (Self::from_config(flags, &config, config_warning), Task::none())
    }

    fn from_config(flags: Flags, config: &config::Config, warning: Option<String>) -> Self {
        let i18n = I18n::new(flags.lang, config);
        let mut notifications =
            notifications::Manager::with_defaults(notifications::Defaults::from(&config.toasts));
        let demo = demo::State::new(
            i18n.tr("demo-default-message"),
            notifications.defaults().position,
        );

        if let Some(key) = warning {
            notifications.warning(i18n.tr(&key));
        }
        if let Some(message) = flags.message.filter(|m| !m.trim().is_empty()) {
            notifications.info(message);
        }

        Self {
            i18n,
            theme_mode: config.general.theme_mode,
            notifications,
            demo,
            action_count: Arc::new(AtomicUsize::new(0)),
        }
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        self.theme_mode.to_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        self.notifications.subscription().map(Message::Notification)
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Notification(notification_message) => {
                self.notifications.update(notification_message);
            }
            Message::Demo(demo_message) => {
                let event = demo::update(&mut self.demo, demo_message);
                self.handle_demo_event(event);
            }
        }
        Task::none()
    }

    fn handle_demo_event(&mut self, event: demo::Event) {
        match event {
            demo::Event::None => {}
            demo::Event::Show {
                request,
                with_action,
            } => {
                let request = if with_action {
                    request.action(self.demo_action())
                } else {
                    request
                };
                self.notifications.notify(request);
            }
            demo::Event::Quick { severity, position } => {
                let text = self.i18n.tr(quick_message_key(severity));
                self.notifications.notify(
                    ToastRequest::new(text)
                        .severity(severity)
                        .position(position),
                );
            }
            demo::Event::ClearAll => self.notifications.remove_all(),
        }
    }

    /// Action attached to demo toasts: logs and counts each press.
    fn demo_action(&self) -> Action {
        let counter = Arc::clone(&self.action_count);
        Action::new(self.i18n.tr("demo-action-label"), move || {
            let count = counter.fetch_add(1, Ordering::Relaxed) + 1;
            tracing::info!(count, "demo action triggered");
        })
    }

    fn action_count(&self) -> usize {
        self.action_count.load(Ordering::Relaxed)
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            demo: &self.demo,
            notifications: &self.notifications,
            action_count: self.action_count(),
        })
    }
}

fn quick_message_key(severity: Severity) -> &'static str {
    match severity {
        Severity::Success => "demo-quick-success",
        Severity::Error => "demo-quick-error",
        Severity::Warning => "demo-quick-warning",
        Severity::Info => "demo-quick-info",
    }
}
