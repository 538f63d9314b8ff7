//! Phone field and country picker composed into one component

use phone_input_core::{
    rect_contains, Component, EventKind, PhoneAction, PhoneInputConfig, PhoneInputState,
};
use ratatui::{layout::Rect, Frame};

use crate::country_picker::{CountryPicker, CountryPickerProps};
use crate::phone_field::{PhoneField, PhoneFieldProps};
use crate::theme::PhoneInputTheme;

pub struct PhoneInputProps<'a> {
    pub state: &'a PhoneInputState,
    pub config: &'a PhoneInputConfig,
    pub theme: &'a PhoneInputTheme,
    pub error: bool,
    pub helper_text: &'a str,
    /// Popover width in columns
    pub width: u16,
}

impl<'a> PhoneInputProps<'a> {
    fn field(&self) -> PhoneFieldProps<'a> {
        PhoneFieldProps {
            state: self.state,
            config: self.config,
            theme: self.theme,
            is_focused: false,
            error: self.error,
            helper_text: self.helper_text,
        }
    }

    fn picker(&self) -> CountryPickerProps<'a> {
        CountryPickerProps {
            state: self.state,
            config: self.config,
            theme: self.theme,
            width: self.width,
        }
    }
}

/// Routes events to the picker while it is open, to the field otherwise
///
/// Tracks keyboard focus: a click inside the field takes it, Tab/BackTab or
/// a click outside the whole widget gives it up and reports `InputBlur`.
pub struct PhoneInput {
    field: PhoneField,
    picker: CountryPicker,
    focused: bool,
}

impl Default for PhoneInput {
    fn default() -> Self {
        Self::new()
    }
}

impl PhoneInput {
    /// Create a focused phone input
    pub fn new() -> Self {
        Self {
            field: PhoneField::new(),
            picker: CountryPicker::new(),
            focused: true,
        }
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    pub fn field(&self) -> &PhoneField {
        &self.field
    }

    pub fn picker(&self) -> &CountryPicker {
        &self.picker
    }
}

impl Component<PhoneAction> for PhoneInput {
    type Props<'a> = PhoneInputProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = PhoneAction> {
        if props.state.popover.is_open() {
            return self.picker.handle_event(event, props.picker()).into_iter().next();
        }

        if let Some((x, y)) = event.left_click() {
            if !rect_contains(self.field.area(), x, y) {
                let was_focused = std::mem::replace(&mut self.focused, false);
                return was_focused.then_some(PhoneAction::InputBlur);
            }
            self.focused = true;
        } else if matches!(event, EventKind::Key(_)) && !self.focused {
            return None;
        }

        let field_props = PhoneFieldProps {
            is_focused: self.focused,
            ..props.field()
        };
        let action = self.field.handle_event(event, field_props).into_iter().next();
        if action == Some(PhoneAction::InputBlur) {
            self.focused = false;
        }
        action
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let is_open = props.state.popover.is_open();
        let field_props = PhoneFieldProps {
            is_focused: self.focused && !is_open,
            ..props.field()
        };
        self.field.render(frame, area, field_props);

        if is_open {
            self.picker.render(frame, frame.area(), props.picker());
        } else {
            self.picker.reset();
        }
    }
}
