// SPDX-License-Identifier: MPL-2.0
//! Demo form for raising toasts by hand.
//!
//! The form collects a title, a message, a severity, a position, a duration
//! and whether to attach an action. Submitting emits an [`Event`] the parent
//! turns into a notification; this module never touches the manager itself.

use crate::domain::toast::ToastDuration;
use crate::error::InvalidArgument;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::notifications::{Position, Severity, ToastRequest};
use iced::{
    font::Weight,
    widget::{button, checkbox, pick_list, text_input, Column, Container, Row, Text},
    Element, Font, Length,
};

/// Form state.
#[derive(Debug, Clone)]
pub struct State {
    title: String,
    message: String,
    severity: Severity,
    position: Position,
    duration_input: String,
    include_action: bool,
    /// Last rejected input, cleared on the next edit.
    error: Option<InvalidArgument>,
}

impl Default for State {
    fn default() -> Self {
        Self::new(String::new(), Position::default())
    }
}

impl State {
    /// Creates a form prefilled with `message` and the configured position.
    #[must_use]
    pub fn new(message: String, position: Position) -> Self {
        Self {
            title: String::new(),
            message,
            severity: Severity::default(),
            position,
            duration_input: ToastDuration::default().as_millis().to_string(),
            include_action: false,
            error: None,
        }
    }

    #[must_use]
    pub fn error(&self) -> Option<&InvalidArgument> {
        self.error.as_ref()
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    #[must_use]
    pub fn position(&self) -> Position {
        self.position
    }

    /// Builds a request from the current fields.
    ///
    /// # Errors
    ///
    /// Fails when the duration field is not a whole, non-negative number.
    pub fn request(&self) -> Result<ToastRequest, InvalidArgument> {
        let duration = ToastDuration::parse_millis(&self.duration_input)?;
        let mut request = ToastRequest::new(self.message.clone())
            .severity(self.severity)
            .position(self.position)
            .duration(duration);
        let title = self.title.trim();
        if !title.is_empty() {
            request = request.title(title);
        }
        Ok(request)
    }
}

/// Contextual data needed to render the form.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
    /// How many times a toast action has run.
    pub action_count: usize,
}

/// Messages emitted by the form.
#[derive(Debug, Clone)]
pub enum Message {
    TitleChanged(String),
    MessageChanged(String),
    SeverityChanged(Severity),
    PositionChanged(Position),
    DurationChanged(String),
    IncludeActionToggled(bool),
    ShowToast,
    Quick(Severity),
    ClearAll,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    /// Raise a toast built from the form; attach the demo action if asked.
    Show {
        request: ToastRequest,
        with_action: bool,
    },
    /// Raise a canned toast of the given severity at the selected position.
    Quick {
        severity: Severity,
        position: Position,
    },
    ClearAll,
}

/// Process a form message and return the corresponding event.
pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::TitleChanged(title) => {
            state.title = title;
            Event::None
        }
        Message::MessageChanged(text) => {
            state.message = text;
            Event::None
        }
        Message::SeverityChanged(severity) => {
            state.severity = severity;
            Event::None
        }
        Message::PositionChanged(position) => {
            state.position = position;
            Event::None
        }
        Message::DurationChanged(input) => {
            state.duration_input = input;
            state.error = None;
            Event::None
        }
        Message::IncludeActionToggled(include) => {
            state.include_action = include;
            Event::None
        }
        Message::ShowToast => match state.request() {
            Ok(request) => {
                state.error = None;
                Event::Show {
                    request,
                    with_action: state.include_action,
                }
            }
            Err(err) => {
                tracing::debug!(error = %err, "demo form rejected");
                state.error = Some(err);
                Event::None
            }
        },
        Message::Quick(severity) => Event::Quick {
            severity,
            position: state.position,
        },
        Message::ClearAll => Event::ClearAll,
    }
}

/// Severity option for the pick list.
#[derive(Debug, Clone, PartialEq, Eq)]
struct SeverityOption {
    severity: Severity,
    label: String,
}

impl std::fmt::Display for SeverityOption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.severity.glyph(), self.label)
    }
}

/// Position option for the pick list.
#[derive(Debug, Clone, PartialEq, Eq)]
struct PositionOption {
    position: Position,
    label: String,
}

impl std::fmt::Display for PositionOption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label)
    }
}

/// Render the demo form.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;
    let state = ctx.state;

    let heading = Text::new(i18n.tr("demo-title"))
        .size(typography::TITLE_LG)
        .font(Font {
            weight: Weight::Bold,
            ..Font::DEFAULT
        });

    let title_input = text_input(&i18n.tr("demo-field-title-placeholder"), &state.title)
        .on_input(Message::TitleChanged)
        .padding(spacing::XS)
        .size(typography::BODY);

    let message_input = text_input(&i18n.tr("demo-field-message-placeholder"), &state.message)
        .on_input(Message::MessageChanged)
        .on_submit(Message::ShowToast)
        .padding(spacing::XS)
        .size(typography::BODY);

    let severity_options: Vec<SeverityOption> = Severity::ALL
        .into_iter()
        .map(|severity| SeverityOption {
            severity,
            label: i18n.tr(severity.i18n_key()),
        })
        .collect();
    let selected_severity = severity_options
        .iter()
        .find(|opt| opt.severity == state.severity)
        .cloned();
    let severity_picker = pick_list(severity_options, selected_severity, |opt| {
        Message::SeverityChanged(opt.severity)
    })
    .padding(spacing::XS)
    .width(Length::Fill);

    let position_options: Vec<PositionOption> = Position::ALL
        .into_iter()
        .map(|position| PositionOption {
            position,
            label: i18n.tr(position.i18n_key()),
        })
        .collect();
    let selected_position = position_options
        .iter()
        .find(|opt| opt.position == state.position)
        .cloned();
    let position_picker = pick_list(position_options, selected_position, |opt| {
        Message::PositionChanged(opt.position)
    })
    .padding(spacing::XS)
    .width(Length::Fill);

    let duration_input = text_input("5000", &state.duration_input)
        .on_input(Message::DurationChanged)
        .on_submit(Message::ShowToast)
        .padding(spacing::XS)
        .size(typography::BODY);

    let mut duration_field = labeled(i18n.tr("demo-field-duration"), duration_input.into());
    if let Some(err) = &state.error {
        duration_field = Column::new()
            .spacing(spacing::XXS)
            .push(duration_field)
            .push(
                Text::new(i18n.tr(err.i18n_key()))
                    .size(typography::CAPTION)
                    .color(palette::ERROR_500),
            )
            .into();
    }

    let action_checkbox = checkbox(state.include_action)
        .label(i18n.tr("demo-show-action"))
        .on_toggle(Message::IncludeActionToggled);

    let show_button = button(Text::new(i18n.tr("demo-show-toast")).size(typography::BODY))
        .on_press(Message::ShowToast)
        .padding([spacing::XS, spacing::MD])
        .style(button::primary);

    let quick_buttons = Severity::ALL.into_iter().fold(
        Row::new().spacing(spacing::XS),
        |row, severity| {
            let label = Row::new()
                .spacing(spacing::XXS)
                .push(Text::new(severity.glyph()).color(severity.color()))
                .push(Text::new(i18n.tr(severity.i18n_key())).size(typography::BODY));
            row.push(
                button(label)
                    .on_press(Message::Quick(severity))
                    .padding([spacing::XXS, spacing::XS])
                    .style(button::secondary),
            )
        },
    );

    let clear_button = button(Text::new(i18n.tr("demo-clear-all")).size(typography::BODY))
        .on_press(Message::ClearAll)
        .padding([spacing::XS, spacing::MD])
        .style(button::danger);

    let counter = Text::new(
        i18n.tr_with_args("demo-action-count", &[("count", &ctx.action_count.to_string())]),
    )
    .size(typography::CAPTION);

    let pickers = Row::new()
        .spacing(spacing::SM)
        .push(labeled(i18n.tr("demo-field-type"), severity_picker.into()))
        .push(labeled(i18n.tr("demo-field-position"), position_picker.into()));

    let form = Column::new()
        .spacing(spacing::MD)
        .width(Length::Fixed(sizing::FORM_WIDTH))
        .push(heading)
        .push(labeled(i18n.tr("demo-field-title"), title_input.into()))
        .push(labeled(i18n.tr("demo-field-message"), message_input.into()))
        .push(pickers)
        .push(duration_field)
        .push(action_checkbox)
        .push(show_button)
        .push(Text::new(i18n.tr("demo-quick-title")).size(typography::BODY))
        .push(quick_buttons)
        .push(clear_button)
        .push(counter);

    Container::new(form)
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .padding(spacing::LG)
        .into()
}

fn labeled<'a>(label: String, field: Element<'a, Message>) -> Element<'a, Message> {
    Column::new()
        .spacing(spacing::XXS)
        .width(Length::Fill)
        .push(Text::new(label).size(typography::CAPTION))
        .push(field)
        .into()
}
