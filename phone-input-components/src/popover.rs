//! Anchored popover overlay
//!
//! Placement below an anchor, clearing what was drawn underneath, and
//! click-away detection. The country picker composes these.

use phone_input_core::{rect_contains, EventKind};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Color,
    widgets::{Clear, Widget},
    Frame,
};

/// Place a `width` x `height` popover below `anchor`, kept inside `screen`
///
/// Opens above the anchor when there is not enough room below but more room
/// above; shrinks to the available space when neither side fits.
pub fn anchored_rect(anchor: Rect, width: u16, height: u16, screen: Rect) -> Rect {
    let width = width.min(screen.width);
    let x = anchor
        .x
        .max(screen.x)
        .min(screen.right().saturating_sub(width));

    let below = screen.bottom().saturating_sub(anchor.bottom());
    let above = anchor.y.saturating_sub(screen.y);

    let (y, height) = if height <= below || below >= above {
        (anchor.bottom().min(screen.bottom()), height.min(below))
    } else {
        let height = height.min(above);
        (anchor.y - height, height)
    };

    Rect::new(x, y, width, height)
}

/// Clear `area` and fill it with the popover background
///
/// Call this AFTER rendering what lies underneath, then render the popover
/// content into `area`.
pub fn render_popover(frame: &mut Frame, area: Rect, bg_color: Option<Color>) {
    frame.render_widget(Clear, area);
    if let Some(bg) = bg_color {
        frame.render_widget(BgFill(bg), area);
    }
}

/// True for a left-button press outside `area`
pub fn is_click_away(area: Rect, event: &EventKind) -> bool {
    event
        .left_click()
        .is_some_and(|(x, y)| !rect_contains(area, x, y))
}

/// Fills an area with a background color
struct BgFill(Color);

impl Widget for BgFill {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                buf[(x, y)].set_bg(self.0);
                buf[(x, y)].set_symbol(" ");
            }
        }
    }
}
