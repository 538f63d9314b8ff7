//! Styles used to draw the phone input

use ratatui::style::{Color, Modifier, Style};

/// Every style the phone input draws with
///
/// Passed to rendering explicitly; the widget never reaches for global styles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhoneInputTheme {
    /// Field border and label when unfocused
    pub border: Style,
    /// Field border and label while focused
    pub border_focused: Style,
    /// Field border, label and helper text when `error` is set
    pub error: Style,
    /// Text typed in the field
    pub text: Style,
    /// Placeholder shown while the field is empty
    pub placeholder: Style,
    /// Leading country button
    pub button: Style,
    /// Helper text below the field
    pub helper: Style,
    /// Popover background
    pub popover_bg: Color,
    /// Popover border
    pub popover_border: Style,
    /// Picker list row
    pub row: Style,
    /// Highlighted picker row
    pub row_highlighted: Style,
    /// Calling code column of a picker row
    pub row_code: Style,
    /// Parts of a country name that match the search
    pub search_match: Style,
    /// "No match" message
    pub no_match: Style,
}

impl Default for PhoneInputTheme {
    fn default() -> Self {
        Self {
            border: Style::default().fg(Color::DarkGray),
            border_focused: Style::default().fg(Color::Cyan),
            error: Style::default().fg(Color::Red),
            text: Style::default(),
            placeholder: Style::default().fg(Color::DarkGray),
            button: Style::default().fg(Color::White),
            helper: Style::default().fg(Color::Gray),
            popover_bg: Color::Rgb(30, 30, 40),
            popover_border: Style::default().fg(Color::Cyan),
            row: Style::default(),
            row_highlighted: Style::default()
                .fg(Color::Black)
                .bg(Color::White)
                .add_modifier(Modifier::BOLD),
            row_code: Style::default().fg(Color::DarkGray),
            search_match: Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
            no_match: Style::default().fg(Color::DarkGray),
        }
    }
}

impl PhoneInputTheme {
    /// Border style for the field given focus and error state
    pub fn field_border(&self, is_focused: bool, error: bool) -> Style {
        if error {
            self.error
        } else if is_focused {
            self.border_focused
        } else {
            self.border
        }
    }

    /// Helper text style given error state
    pub fn helper_text(&self, error: bool) -> Style {
        if error {
            self.error
        } else {
            self.helper
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_wins_over_focus() {
        let theme = PhoneInputTheme::default();
        assert_eq!(theme.field_border(true, true), theme.error);
        assert_eq!(theme.field_border(true, false), theme.border_focused);
        assert_eq!(theme.field_border(false, false), theme.border);
        assert_eq!(theme.helper_text(true).fg, Some(Color::Red));
    }
}
