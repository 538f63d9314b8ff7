//! Virtualized selection list
//!
//! Only the rows in `[offset - overscan, offset + viewport + overscan)` are
//! built each frame, so a list of any length costs the same to draw.

use std::ops::Range;

use crossterm::event::KeyCode;
use phone_input_core::{rect_contains, Component, EventKind};
use ratatui::{
    layout::Rect,
    style::Style,
    text::Line,
    widgets::{List, ListItem, ListState},
    Frame,
};

/// Rows built for a frame: the viewport plus `overscan` rows on each side
pub fn materialized_range(offset: usize, viewport: usize, overscan: usize, len: usize) -> Range<usize> {
    let start = offset.saturating_sub(overscan).min(len);
    let end = offset
        .saturating_add(viewport)
        .saturating_add(overscan)
        .min(len);
    start..end.max(start)
}

/// Props for VirtualList component
pub struct VirtualListProps<'a, A> {
    /// Total number of rows
    pub len: usize,
    /// Highlighted row
    pub highlighted: usize,
    /// Rows built beyond the viewport on each side
    pub overscan: usize,
    /// Whether this component has focus
    pub is_focused: bool,
    /// Builds the line for a row; only called for materialized rows
    pub row: &'a dyn Fn(usize) -> Line<'a>,
    pub row_style: Style,
    pub highlight_style: Style,
    /// Callback when keyboard navigation moves the highlight
    pub on_highlight: fn(usize) -> A,
    /// Callback when a row is clicked
    pub on_select: fn(usize) -> A,
}

/// A scrollable list that materializes only what it shows
///
/// Up/Down/PageUp/PageDown/Home/End move the highlight, a left click selects
/// the row under the mouse, and the wheel scrolls without moving the highlight.
#[derive(Default)]
pub struct VirtualList {
    /// First row in the viewport
    offset: usize,
    /// Area of the last render
    area: Rect,
    /// Highlight seen by the last render
    last_highlighted: Option<usize>,
    /// Rows built by the last render
    materialized: usize,
}

impl VirtualList {
    pub fn new() -> Self {
        Self::default()
    }

    /// First row in the viewport
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Number of rows built by the last render
    pub fn materialized(&self) -> usize {
        self.materialized
    }

    /// Jump back to the top (the list content was replaced)
    pub fn reset(&mut self) {
        self.offset = 0;
        self.last_highlighted = None;
    }

    fn viewport(&self) -> usize {
        self.area.height as usize
    }

    fn max_offset(&self, len: usize) -> usize {
        len.saturating_sub(self.viewport())
    }

    fn ensure_visible(&mut self, highlighted: usize) {
        let viewport = self.viewport();
        if viewport == 0 {
            return;
        }
        if highlighted < self.offset {
            self.offset = highlighted;
        } else if highlighted >= self.offset + viewport {
            self.offset = highlighted + 1 - viewport;
        }
    }

    fn row_at(&self, x: u16, y: u16, len: usize) -> Option<usize> {
        if !rect_contains(self.area, x, y) {
            return None;
        }
        let row = self.offset + (y - self.area.y) as usize;
        (row < len).then_some(row)
    }

    fn navigate(&self, code: KeyCode, highlighted: usize, len: usize) -> Option<usize> {
        let last = len.saturating_sub(1);
        let page = self.viewport().max(1);
        let target = match code {
            KeyCode::Down => (highlighted + 1).min(last),
            KeyCode::Up => highlighted.saturating_sub(1),
            KeyCode::PageDown => (highlighted + page).min(last),
            KeyCode::PageUp => highlighted.saturating_sub(page),
            KeyCode::Home => 0,
            KeyCode::End => last,
            _ => return None,
        };
        (target != highlighted).then_some(target)
    }
}

impl<A> Component<A> for VirtualList {
    type Props<'a> = VirtualListProps<'a, A>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = A> {
        if !props.is_focused || props.len == 0 {
            return None;
        }

        match event {
            EventKind::Key(key) => self
                .navigate(key.code, props.highlighted, props.len)
                .map(props.on_highlight),
            EventKind::Scroll { column, row, delta } => {
                if rect_contains(self.area, *column, *row) {
                    let offset = self.offset as isize + delta;
                    self.offset = offset.clamp(0, self.max_offset(props.len) as isize) as usize;
                }
                None
            }
            EventKind::Mouse(_) => event
                .left_click()
                .and_then(|(x, y)| self.row_at(x, y, props.len))
                .map(props.on_select),
            _ => None,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        self.area = area;

        if self.last_highlighted != Some(props.highlighted) {
            self.ensure_visible(props.highlighted);
            self.last_highlighted = Some(props.highlighted);
        }
        self.offset = self.offset.min(self.max_offset(props.len));

        let range = materialized_range(self.offset, self.viewport(), props.overscan, props.len);
        let start = range.start;
        let items: Vec<ListItem> = range
            .map(|index| ListItem::new((props.row)(index)).style(props.row_style))
            .collect();
        self.materialized = items.len();

        // only mark the highlight when it is on screen, so List keeps our offset
        let viewport = self.offset..self.offset + self.viewport();
        let selected = viewport
            .contains(&props.highlighted)
            .then(|| props.highlighted - start);
        let mut state = ListState::default().with_selected(selected);
        *state.offset_mut() = self.offset - start;

        let list = List::new(items).highlight_style(props.highlight_style);
        frame.render_stateful_widget(list, area, &mut state);
    }
}
