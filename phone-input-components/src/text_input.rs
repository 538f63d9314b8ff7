//! Single-line text input component

use crossterm::event::{KeyCode, KeyModifiers};
use phone_input_core::{Component, EventKind};
use ratatui::{
    layout::Rect,
    style::Style,
    text::Span,
    widgets::Paragraph,
    Frame,
};

/// Props for TextInput component
pub struct TextInputProps<'a, A> {
    /// Current input value
    pub value: &'a str,
    /// Placeholder text when empty
    pub placeholder: &'a str,
    /// Whether this component has focus
    pub is_focused: bool,
    /// Style of the value
    pub style: Style,
    /// Style of the placeholder
    pub placeholder_style: Style,
    /// Callback when value changes
    pub on_change: fn(String) -> A,
}

/// A single-line text input with cursor
///
/// Handles typing, backspace, delete and cursor movement, emitting
/// `on_change` with the edited text. The owner may rewrite the value it
/// passes back (the phone field reformats it); a cursor that sat at the end
/// stays at the end of the rewritten value.
pub struct TextInput {
    /// Cursor position (byte index)
    cursor: usize,
    /// Cursor follows the end of the value
    at_end: bool,
}

impl Default for TextInput {
    fn default() -> Self {
        Self::new()
    }
}

impl TextInput {
    /// Create a new TextInput
    pub fn new() -> Self {
        Self {
            cursor: 0,
            at_end: true,
        }
    }

    /// Cursor position as a byte index into the last value
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Clamp cursor to a char boundary of `value`
    fn clamp_cursor(&mut self, value: &str) {
        if self.at_end {
            self.cursor = value.len();
            return;
        }
        self.cursor = self.cursor.min(value.len());
        while !value.is_char_boundary(self.cursor) {
            self.cursor -= 1;
        }
    }

    fn set_cursor(&mut self, cursor: usize, value_len: usize) {
        self.cursor = cursor;
        self.at_end = cursor >= value_len;
    }

    fn move_cursor_left(&mut self, value: &str) {
        let pos = value[..self.cursor]
            .char_indices()
            .last()
            .map(|(i, _)| i)
            .unwrap_or(0);
        self.set_cursor(pos, value.len());
    }

    fn move_cursor_right(&mut self, value: &str) {
        let pos = value[self.cursor..]
            .chars()
            .next()
            .map(|c| self.cursor + c.len_utf8())
            .unwrap_or(value.len());
        self.set_cursor(pos, value.len());
    }

    fn insert_char(&mut self, value: &str, c: char) -> String {
        let mut new_value = String::with_capacity(value.len() + c.len_utf8());
        new_value.push_str(&value[..self.cursor]);
        new_value.push(c);
        new_value.push_str(&value[self.cursor..]);
        self.set_cursor(self.cursor + c.len_utf8(), new_value.len());
        new_value
    }

    /// Backspace
    fn delete_char_before(&mut self, value: &str) -> Option<String> {
        let (char_start, _) = value[..self.cursor].char_indices().last()?;

        let mut new_value = String::with_capacity(value.len());
        new_value.push_str(&value[..char_start]);
        new_value.push_str(&value[self.cursor..]);
        self.set_cursor(char_start, new_value.len());
        Some(new_value)
    }

    /// Delete
    fn delete_char_at(&mut self, value: &str) -> Option<String> {
        let c = value[self.cursor..].chars().next()?;

        let mut new_value = String::with_capacity(value.len());
        new_value.push_str(&value[..self.cursor]);
        new_value.push_str(&value[self.cursor + c.len_utf8()..]);
        self.set_cursor(self.cursor, new_value.len());
        Some(new_value)
    }
}

impl<A> Component<A> for TextInput {
    type Props<'a> = TextInputProps<'a, A>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = A> {
        if !props.is_focused {
            return None;
        }

        self.clamp_cursor(props.value);

        let EventKind::Key(key) = event else {
            return None;
        };

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('a') => {
                    self.set_cursor(0, props.value.len());
                    None
                }
                KeyCode::Char('e') => {
                    self.set_cursor(props.value.len(), props.value.len());
                    None
                }
                // clear line
                KeyCode::Char('u') => {
                    self.set_cursor(0, 0);
                    Some((props.on_change)(String::new()))
                }
                _ => None,
            };
        }
        if key.modifiers.contains(KeyModifiers::ALT) {
            return None;
        }

        match key.code {
            KeyCode::Char(c) => {
                let new_value = self.insert_char(props.value, c);
                Some((props.on_change)(new_value))
            }
            KeyCode::Backspace => self
                .delete_char_before(props.value)
                .map(|v| (props.on_change)(v)),
            KeyCode::Delete => self
                .delete_char_at(props.value)
                .map(|v| (props.on_change)(v)),
            KeyCode::Left => {
                self.move_cursor_left(props.value);
                None
            }
            KeyCode::Right => {
                self.move_cursor_right(props.value);
                None
            }
            KeyCode::Home => {
                self.set_cursor(0, props.value.len());
                None
            }
            KeyCode::End => {
                self.set_cursor(props.value.len(), props.value.len());
                None
            }
            _ => None,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        self.clamp_cursor(props.value);

        let cursor_col = Span::raw(&props.value[..self.cursor]).width() as u16;
        // keep the cursor inside the area by scrolling long values
        let scroll = cursor_col.saturating_sub(area.width.saturating_sub(1));

        let paragraph = if props.value.is_empty() {
            Paragraph::new(props.placeholder).style(props.placeholder_style)
        } else {
            Paragraph::new(props.value)
                .style(props.style)
                .scroll((0, scroll))
        };
        frame.render_widget(paragraph, area);

        if props.is_focused {
            frame.set_cursor_position((area.x + cursor_col - scroll, area.y));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use phone_input_core::testing::{key, RenderHarness};

    #[derive(Debug, Clone, PartialEq)]
    enum TestAction {
        Change(String),
    }

    fn props(value: &str, is_focused: bool) -> TextInputProps<'_, TestAction> {
        TextInputProps {
            value,
            placeholder: "",
            is_focused,
            style: Style::default(),
            placeholder_style: Style::default(),
            on_change: TestAction::Change,
        }
    }

    fn press(input: &mut TextInput, value: &str, k: &str) -> Vec<TestAction> {
        input
            .handle_event(&EventKind::Key(key(k)), props(value, true))
            .into_iter()
            .collect()
    }

    #[test]
    fn test_typing() {
        let mut input = TextInput::new();
        assert_eq!(press(&mut input, "", "5"), vec![TestAction::Change("5".into())]);
    }

    #[test]
    fn test_typing_follows_rewritten_value() {
        let mut input = TextInput::new();
        press(&mut input, "", "2");
        // owner reformatted "2" into a longer string; cursor stays at the end
        let actions = press(&mut input, "(1) 2", "0");
        assert_eq!(actions, vec![TestAction::Change("(1) 20".into())]);
    }

    #[test]
    fn test_insert_in_middle() {
        let mut input = TextInput::new();
        press(&mut input, "1234", "home");
        press(&mut input, "1234", "right");
        let actions = press(&mut input, "1234", "9");
        assert_eq!(actions, vec![TestAction::Change("19234".into())]);
        assert_eq!(input.cursor(), 2);
    }

    #[test]
    fn test_backspace() {
        let mut input = TextInput::new();
        assert_eq!(
            press(&mut input, "555", "backspace"),
            vec![TestAction::Change("55".into())]
        );
        assert_eq!(input.cursor(), 2);
    }

    #[test]
    fn test_backspace_at_start() {
        let mut input = TextInput::new();
        press(&mut input, "555", "home");
        assert!(press(&mut input, "555", "backspace").is_empty());
    }

    #[test]
    fn test_delete_at_cursor() {
        let mut input = TextInput::new();
        press(&mut input, "(44)", "home");
        assert_eq!(
            press(&mut input, "(44)", "delete"),
            vec![TestAction::Change("44)".into())]
        );
        assert!(press(&mut input, "44)", "end").is_empty());
        assert!(press(&mut input, "44)", "delete").is_empty());
    }

    #[test]
    fn test_ctrl_u_clears() {
        let mut input = TextInput::new();
        assert_eq!(
            press(&mut input, "(1) 555", "ctrl+u"),
            vec![TestAction::Change(String::new())]
        );
    }

    #[test]
    fn test_tab_is_ignored() {
        let mut input = TextInput::new();
        assert!(press(&mut input, "555", "tab").is_empty());
    }

    #[test]
    fn test_unfocused_ignores() {
        let mut input = TextInput::new();
        let actions: Vec<_> = input
            .handle_event(&EventKind::Key(key("a")), props("", false))
            .into_iter()
            .collect();
        assert!(actions.is_empty());
    }

    #[test]
    fn test_render_with_value() {
        let mut render = RenderHarness::new(20, 1);
        let mut input = TextInput::new();

        let output = render.render_to_string_plain(|frame| {
            input.render(frame, frame.area(), props("(44) 20-7946", true));
        });

        assert_eq!(output, "(44) 20-7946");
    }

    #[test]
    fn test_render_placeholder() {
        let mut render = RenderHarness::new(20, 1);
        let mut input = TextInput::new();

        let output = render.render_to_string_plain(|frame| {
            let props = TextInputProps {
                placeholder: "Type a number",
                ..props("", true)
            };
            input.render(frame, frame.area(), props);
        });

        assert_eq!(output, "Type a number");
    }

    #[test]
    fn test_render_scrolls_to_cursor() {
        let mut render = RenderHarness::new(5, 1);
        let mut input = TextInput::new();

        let output = render.render_to_string_plain(|frame| {
            input.render(frame, frame.area(), props("123456789", true));
        });

        assert_eq!(output, "6789");
    }
}
