//! Event types delivered to components

use crossterm::event::{KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;

/// The event payload handed to `Component::handle_event`
#[derive(Debug, Clone)]
pub enum EventKind {
    /// Keyboard event
    Key(KeyEvent),
    /// Mouse event (clicks, drags, moves)
    Mouse(MouseEvent),
    /// Scroll event with position and delta
    Scroll { column: u16, row: u16, delta: isize },
    /// Terminal resize
    Resize(u16, u16),
    /// Periodic tick
    Tick,
}

impl EventKind {
    /// Position of a left-button press, if this event is one
    pub fn left_click(&self) -> Option<(u16, u16)> {
        match self {
            EventKind::Mouse(MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                column,
                row,
                ..
            }) => Some((*column, *row)),
            _ => None,
        }
    }

    /// Check if this is an application-level quit chord (ctrl+c / ctrl+q)
    pub fn is_quit(&self) -> bool {
        match self {
            EventKind::Key(key) => {
                use crossterm::event::KeyCode;
                key.modifiers.contains(KeyModifiers::CONTROL)
                    && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('q'))
            }
            _ => false,
        }
    }
}

/// Check if a point is within a rect
pub fn rect_contains(area: Rect, x: u16, y: u16) -> bool {
    x >= area.x
        && x < area.x.saturating_add(area.width)
        && y >= area.y
        && y < area.y.saturating_add(area.height)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{click, key};

    #[test]
    fn test_left_click_position() {
        let event = EventKind::Mouse(click(4, 7));
        assert_eq!(event.left_click(), Some((4, 7)));
    }

    #[test]
    fn test_key_is_not_click() {
        let event = EventKind::Key(key("a"));
        assert_eq!(event.left_click(), None);
    }

    #[test]
    fn test_quit_chord() {
        assert!(EventKind::Key(key("ctrl+c")).is_quit());
        assert!(!EventKind::Key(key("c")).is_quit());
    }

    #[test]
    fn test_rect_contains_edges() {
        let area = Rect::new(2, 3, 4, 2);
        assert!(rect_contains(area, 2, 3));
        assert!(rect_contains(area, 5, 4));
        assert!(!rect_contains(area, 6, 4));
        assert!(!rect_contains(area, 2, 5));
        assert!(!rect_contains(area, 1, 3));
    }
}
