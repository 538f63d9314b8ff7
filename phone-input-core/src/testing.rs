//! Test utilities for components built on this crate
//!
//! - [`key`] / [`char_key`] / [`click`]: build input events
//! - [`type_text`]: key events for a whole string
//! - [`RenderHarness`]: render into a `TestBackend` and read the buffer back
//! - [`assert_emitted!`](crate::assert_emitted) and friends for action lists
//!
//! # Example
//!
//! ```ignore
//! use phone_input_core::testing::{key, RenderHarness};
//!
//! let mut render = RenderHarness::new(40, 3);
//! let output = render.render_to_string_plain(|frame| {
//!     field.render(frame, frame.area(), props);
//! });
//! assert!(output.contains("(44)"));
//! ```

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::{backend::TestBackend, buffer::Buffer, layout::Rect, Frame, Terminal};

use crate::event::EventKind;
use crate::keybindings::parse_key_string;

/// Create a `KeyEvent` from a key string (`"a"`, `"ctrl+k"`, `"esc"`)
///
/// # Panics
///
/// Panics if the key string cannot be parsed.
pub fn key(s: &str) -> KeyEvent {
    parse_key_string(s).unwrap_or_else(|| panic!("Invalid key string: {:?}", s))
}

/// Create a `KeyEvent` for a character with no modifiers
pub fn char_key(c: char) -> KeyEvent {
    KeyEvent {
        code: KeyCode::Char(c),
        modifiers: KeyModifiers::empty(),
        kind: KeyEventKind::Press,
        state: KeyEventState::empty(),
    }
}

/// Key events typing `text` one character at a time
pub fn type_text(text: &str) -> Vec<EventKind> {
    text.chars().map(|c| EventKind::Key(char_key(c))).collect()
}

/// Left mouse button press at a screen position
pub fn click(column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}

/// Scroll wheel event at a screen position (positive = down)
pub fn scroll(column: u16, row: u16, delta: isize) -> EventKind {
    EventKind::Scroll { column, row, delta }
}

/// Renders components into an in-memory terminal
pub struct RenderHarness {
    terminal: Terminal<TestBackend>,
}

impl RenderHarness {
    /// Create a harness with the given terminal size
    ///
    /// # Panics
    ///
    /// Panics if the test terminal cannot be created.
    pub fn new(width: u16, height: u16) -> Self {
        let terminal = Terminal::new(TestBackend::new(width, height))
            .unwrap_or_else(|e| panic!("Failed to create test terminal: {}", e));
        Self { terminal }
    }

    /// Render a frame and return the resulting buffer
    pub fn render<F>(&mut self, draw: F) -> &Buffer
    where
        F: FnOnce(&mut Frame),
    {
        self.terminal
            .draw(draw)
            .unwrap_or_else(|e| panic!("Failed to draw test frame: {}", e));
        self.terminal.backend().buffer()
    }

    /// Render a frame and return its text, one line per row, without styles
    pub fn render_to_string_plain<F>(&mut self, draw: F) -> String
    where
        F: FnOnce(&mut Frame),
    {
        let buffer = self.render(draw);
        buffer_to_string_plain(buffer)
    }
}

/// Buffer contents as plain text, trailing spaces trimmed per row
pub fn buffer_to_string_plain(buffer: &Buffer) -> String {
    buffer_rect_to_string_plain(buffer, buffer.area)
}

/// Plain text of a region of the buffer
pub fn buffer_rect_to_string_plain(buffer: &Buffer, area: Rect) -> String {
    let area = area.intersection(buffer.area);
    (area.y..area.y + area.height)
        .map(|y| {
            let line: String = (area.x..area.x + area.width)
                .map(|x| buffer[(x, y)].symbol())
                .collect();
            line.trim_end().to_string()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Assert that a specific action was emitted
///
/// ```ignore
/// let actions: Vec<_> = field.handle_event(&event, props).into_iter().collect();
/// assert_emitted!(actions, PhoneAction::InputChange(_));
/// ```
#[macro_export]
macro_rules! assert_emitted {
    ($actions:expr, $pattern:pat $(if $guard:expr)?) => {
        assert!(
            $actions.iter().any(|a| matches!(a, $pattern $(if $guard)?)),
            "Expected action matching `{}` to be emitted, but got: {:?}",
            stringify!($pattern),
            $actions
        );
    };
}

/// Assert that a specific action was NOT emitted
#[macro_export]
macro_rules! assert_not_emitted {
    ($actions:expr, $pattern:pat $(if $guard:expr)?) => {
        assert!(
            !$actions.iter().any(|a| matches!(a, $pattern $(if $guard)?)),
            "Expected action matching `{}` NOT to be emitted, but it was: {:?}",
            stringify!($pattern),
            $actions
        );
    };
}

/// Find the first action matching a pattern
#[macro_export]
macro_rules! find_emitted {
    ($actions:expr, $pattern:pat $(if $guard:expr)?) => {
        $actions.iter().find(|a| matches!(a, $pattern $(if $guard)?))
    };
}
