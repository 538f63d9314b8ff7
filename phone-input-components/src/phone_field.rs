//! The phone field: country button, number input and helper text

use crossterm::event::KeyCode;
use phone_input_core::{
    rect_contains, Command, Component, EventKind, PhoneAction, PhoneInputConfig,
    PhoneInputState, WidgetContext,
};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::text_input::{TextInput, TextInputProps};
use crate::theme::PhoneInputTheme;

/// Rows taken by the bordered field, without helper text
pub const FIELD_HEIGHT: u16 = 3;

pub struct PhoneFieldProps<'a> {
    pub state: &'a PhoneInputState,
    pub config: &'a PhoneInputConfig,
    pub theme: &'a PhoneInputTheme,
    /// Whether the number input has focus
    pub is_focused: bool,
    /// Draw the field in the error style
    pub error: bool,
    /// Text below the field (empty = nothing)
    pub helper_text: &'a str,
}

/// Bordered field with a leading country button
///
/// The button shows the selected country's flag; clicking it (or the
/// open-picker key) asks to open the picker anchored below the button.
/// Tab and BackTab leave the field.
#[derive(Default)]
pub struct PhoneField {
    input: TextInput,
    area: Rect,
    button_area: Rect,
}

impl PhoneField {
    pub fn new() -> Self {
        Self::default()
    }

    /// Screen area of the last render, helper text included
    pub fn area(&self) -> Rect {
        self.area
    }

    /// Screen area of the country button (the picker's anchor)
    pub fn button_area(&self) -> Rect {
        self.button_area
    }

    fn open_picker(&self) -> PhoneAction {
        PhoneAction::PickerOpen {
            anchor: self.button_area,
        }
    }
}

impl Component<PhoneAction> for PhoneField {
    type Props<'a> = PhoneFieldProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = PhoneAction> {
        if let Some((x, y)) = event.left_click() {
            return rect_contains(self.button_area, x, y).then(|| self.open_picker());
        }
        if !props.is_focused {
            return None;
        }

        if let EventKind::Key(key) = event {
            if props.config.command(*key, WidgetContext::Field) == Some(Command::OpenPicker) {
                return Some(self.open_picker());
            }
            if matches!(key.code, KeyCode::Tab | KeyCode::BackTab) {
                return Some(PhoneAction::InputBlur);
            }
        }

        let input_props = TextInputProps {
            value: &props.state.phone,
            placeholder: "",
            is_focused: true,
            style: props.theme.text,
            placeholder_style: props.theme.placeholder,
            on_change: PhoneAction::InputChange,
        };
        self.input.handle_event(event, input_props).into_iter().next()
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        self.area = area;

        let [field_area, helper_area] =
            Layout::vertical([Constraint::Length(FIELD_HEIGHT), Constraint::Fill(1)]).areas(area);

        let border = props.theme.field_border(props.is_focused, props.error);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border)
            .title(Line::styled(props.config.label.as_str(), border));
        let inner = block.inner(field_area);
        frame.render_widget(block, field_area);

        let button = Line::from(vec![
            Span::raw(props.state.country.flag()),
            Span::raw(" \u{25BE}"),
        ])
        .style(props.theme.button);
        let button_width = (button.width() as u16).min(inner.width);
        self.button_area = Rect::new(inner.x, inner.y, button_width, inner.height.min(1));
        frame.render_widget(Paragraph::new(button), self.button_area);

        let input_area = Rect {
            x: inner.x.saturating_add(button_width + 1),
            width: inner.width.saturating_sub(button_width + 1),
            ..self.button_area
        };
        let placeholder = props
            .config
            .key_hint(Command::OpenPicker, WidgetContext::Field)
            .map(|hint| format!("{} to pick a country", hint))
            .unwrap_or_default();
        let input_props = TextInputProps {
            value: &props.state.phone,
            placeholder: &placeholder,
            is_focused: props.is_focused,
            style: props.theme.text,
            placeholder_style: props.theme.placeholder,
            on_change: PhoneAction::InputChange,
        };
        self.input.render(frame, input_area, input_props);

        if !props.helper_text.is_empty() && helper_area.height > 0 {
            let helper = Paragraph::new(props.helper_text).style(props.theme.helper_text(props.error));
            frame.render_widget(helper, helper_area);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use phone_input_core::testing::{click, key, RenderHarness};
    use phone_input_core::{CountryCatalog, LibPhoneFormatter};
    use std::sync::Arc;

    fn state() -> PhoneInputState {
        PhoneInputState::new(CountryCatalog::global(), Arc::new(LibPhoneFormatter::new()))
    }

    fn props<'a>(
        state: &'a PhoneInputState,
        config: &'a PhoneInputConfig,
        theme: &'a PhoneInputTheme,
    ) -> PhoneFieldProps<'a> {
        PhoneFieldProps {
            state,
            config,
            theme,
            is_focused: true,
            error: false,
            helper_text: "",
        }
    }

    fn rendered(field: &mut PhoneField, props: PhoneFieldProps<'_>) -> String {
        let mut render = RenderHarness::new(40, 4);
        render.render_to_string_plain(|frame| field.render(frame, frame.area(), props))
    }

    #[test]
    fn test_typing_emits_input_change() {
        let (state, config, theme) = (state(), PhoneInputConfig::default(), PhoneInputTheme::default());
        let mut field = PhoneField::new();

        let actions: Vec<_> = field
            .handle_event(&EventKind::Key(key("7")), props(&state, &config, &theme))
            .into_iter()
            .collect();

        assert_eq!(actions, vec![PhoneAction::InputChange("7".into())]);
    }

    #[test]
    fn test_open_picker_key_anchors_to_button() {
        let (state, config, theme) = (state(), PhoneInputConfig::default(), PhoneInputTheme::default());
        let mut field = PhoneField::new();
        rendered(&mut field, props(&state, &config, &theme));
        let anchor = field.button_area();
        assert_eq!((anchor.x, anchor.y), (1, 1));

        for open in ["ctrl+k", "alt+down"] {
            let actions: Vec<_> = field
                .handle_event(&EventKind::Key(key(open)), props(&state, &config, &theme))
                .into_iter()
                .collect();
            assert_eq!(actions, vec![PhoneAction::PickerOpen { anchor }]);
        }
    }

    #[test]
    fn test_button_click_opens_picker() {
        let (state, config, theme) = (state(), PhoneInputConfig::default(), PhoneInputTheme::default());
        let mut field = PhoneField::new();
        rendered(&mut field, props(&state, &config, &theme));

        let on_button: Vec<_> = field
            .handle_event(&EventKind::Mouse(click(1, 1)), props(&state, &config, &theme))
            .into_iter()
            .collect();
        assert!(matches!(on_button.as_slice(), [PhoneAction::PickerOpen { .. }]));

        let on_text: Vec<_> = field
            .handle_event(&EventKind::Mouse(click(20, 1)), props(&state, &config, &theme))
            .into_iter()
            .collect();
        assert!(on_text.is_empty());
    }

    #[test]
    fn test_tab_blurs() {
        let (state, config, theme) = (state(), PhoneInputConfig::default(), PhoneInputTheme::default());
        let mut field = PhoneField::new();
        for leave in ["tab", "shift+tab"] {
            let actions: Vec<_> = field
                .handle_event(&EventKind::Key(key(leave)), props(&state, &config, &theme))
                .into_iter()
                .collect();
            assert_eq!(actions, vec![PhoneAction::InputBlur]);
        }
    }

    #[test]
    fn test_unfocused_ignores_keys() {
        let (state, config, theme) = (state(), PhoneInputConfig::default(), PhoneInputTheme::default());
        let mut field = PhoneField::new();
        let props = PhoneFieldProps {
            is_focused: false,
            ..props(&state, &config, &theme)
        };
        let actions: Vec<_> = field
            .handle_event(&EventKind::Key(key("7")), props)
            .into_iter()
            .collect();
        assert!(actions.is_empty());
    }

    #[test]
    fn test_render_label_number_and_helper() {
        let (mut state, config, theme) = (state(), PhoneInputConfig::default(), PhoneInputTheme::default());
        state.phone = "(44) 20-7946".into();
        let mut field = PhoneField::new();

        let output = rendered(
            &mut field,
            PhoneFieldProps {
                error: true,
                helper_text: "Number is required",
                ..props(&state, &config, &theme)
            },
        );

        assert!(output.contains("Phone Number"));
        assert!(output.contains("(44) 20-7946"));
        assert!(output.contains("\u{25BE}"));
        assert!(output.lines().nth(3).unwrap().starts_with("Number is required"));
    }

    #[test]
    fn test_error_styles_helper_text() {
        let (state, config, theme) = (state(), PhoneInputConfig::default(), PhoneInputTheme::default());
        let mut field = PhoneField::new();
        let mut render = RenderHarness::new(40, 4);

        let buffer = render.render(|frame| {
            let props = PhoneFieldProps {
                error: true,
                helper_text: "Invalid",
                ..props(&state, &config, &theme)
            };
            field.render(frame, frame.area(), props)
        });

        assert_eq!(buffer[(0, 3)].fg, theme.error.fg.unwrap());
        assert_eq!(buffer[(0, 0)].fg, theme.error.fg.unwrap());
    }

    #[test]
    fn test_placeholder_shows_open_key() {
        let (state, config, theme) = (state(), PhoneInputConfig::default(), PhoneInputTheme::default());
        let mut field = PhoneField::new();
        let output = rendered(&mut field, props(&state, &config, &theme));
        assert!(output.contains("^K to pick a country"));
    }
}
