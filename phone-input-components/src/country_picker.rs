//! Country picker popover: search box over a virtualized country list

use std::ops::Range;

use phone_input_core::{
    Command, Component, CountryFilter, EventKind, PhoneAction, PhoneInputConfig,
    PhoneInputState, WidgetContext,
};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::popover::{anchored_rect, is_click_away, render_popover};
use crate::text_input::{TextInput, TextInputProps};
use crate::theme::PhoneInputTheme;
use crate::virtual_list::{VirtualList, VirtualListProps};

/// Shown instead of the list when the search matches nothing
pub const NO_MATCH_MESSAGE: &str = "There is no country match the result";

/// Rows around the list: borders, search line and separator
const CHROME_HEIGHT: u16 = 4;

pub struct CountryPickerProps<'a> {
    pub state: &'a PhoneInputState,
    pub config: &'a PhoneInputConfig,
    pub theme: &'a PhoneInputTheme,
    /// Popover width in columns
    pub width: u16,
}

/// Popover listing the catalog, filtered by the search box
///
/// Only drawn while the popover is open. Esc or a click outside closes it,
/// Enter or a click on a row selects; navigation keys move the highlight and
/// everything else edits the search.
#[derive(Default)]
pub struct CountryPicker {
    search: TextInput,
    list: VirtualList,
    area: Rect,
    /// Search the list was last drawn for
    drawn_search: Option<String>,
}

impl CountryPicker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Screen area of the last render
    pub fn area(&self) -> Rect {
        self.area
    }

    /// Rows the list built on the last render
    pub fn materialized_rows(&self) -> usize {
        self.list.materialized()
    }

    /// Forget scroll and cursor positions once the popover closed
    pub fn reset(&mut self) {
        self.search = TextInput::new();
        self.list.reset();
        self.area = Rect::default();
        self.drawn_search = None;
    }
}

fn list_props<'a>(
    props: &CountryPickerProps<'a>,
    row: &'a dyn Fn(usize) -> Line<'a>,
) -> VirtualListProps<'a, PhoneAction> {
    VirtualListProps {
        len: props.state.visible_len(),
        highlighted: props.state.highlighted,
        overscan: props.config.list.overscan,
        is_focused: true,
        row,
        row_style: props.theme.row,
        highlight_style: props.theme.row_highlighted,
        on_highlight: PhoneAction::PickerHighlight,
        on_select: PhoneAction::PickerSelect,
    }
}

fn search_props<'a>(props: &CountryPickerProps<'a>) -> TextInputProps<'a, PhoneAction> {
    TextInputProps {
        value: &props.state.search,
        placeholder: "Search country",
        is_focused: true,
        style: props.theme.text,
        placeholder_style: props.theme.placeholder,
        on_change: PhoneAction::PickerSearch,
    }
}

/// Flag, name with matches highlighted, and `+code`
fn country_row<'a>(
    state: &'a PhoneInputState,
    theme: &PhoneInputTheme,
    filter: Option<&CountryFilter>,
    row: usize,
) -> Line<'a> {
    let Some(country) = state.visible_country(row) else {
        return Line::default();
    };

    let ranges = filter
        .filter(|_| !state.search.is_empty())
        .map(|filter| filter.match_ranges(&country.name))
        .unwrap_or_default();

    let mut spans = vec![Span::raw(country.flag()), Span::raw(" ")];
    spans.extend(highlighted_spans(&country.name, &ranges, theme.search_match));
    spans.push(Span::styled(
        format!(" +{}", country.primary_calling_code()),
        theme.row_code,
    ));
    Line::from(spans)
}

/// Split `text` into plain and `style`d spans along sorted, disjoint `ranges`
fn highlighted_spans<'a>(text: &'a str, ranges: &[Range<usize>], style: Style) -> Vec<Span<'a>> {
    let mut spans = Vec::with_capacity(ranges.len() * 2 + 1);
    let mut pos = 0;
    for range in ranges {
        if range.start > pos {
            spans.push(Span::raw(&text[pos..range.start]));
        }
        spans.push(Span::styled(&text[range.clone()], style));
        pos = range.end;
    }
    if pos < text.len() {
        spans.push(Span::raw(&text[pos..]));
    }
    spans
}

impl Component<PhoneAction> for CountryPicker {
    type Props<'a> = CountryPickerProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = PhoneAction> {
        if is_click_away(self.area, event) {
            return Some(PhoneAction::PickerClose);
        }

        if let EventKind::Key(key) = event {
            match props.config.command(*key, WidgetContext::Picker) {
                Some(Command::ClosePicker) => return Some(PhoneAction::PickerClose),
                Some(Command::SelectCountry) => {
                    return (props.state.visible_len() > 0)
                        .then_some(PhoneAction::PickerSelect(props.state.highlighted));
                }
                _ => {}
            }
        }

        let no_rows = |_| Line::default();
        let from_list = self
            .list
            .handle_event(event, list_props(&props, &no_rows))
            .into_iter()
            .next();
        if from_list.is_some() || !matches!(event, EventKind::Key(_)) {
            return from_list;
        }
        self.search
            .handle_event(event, search_props(&props))
            .into_iter()
            .next()
    }

    fn render(&mut self, frame: &mut Frame, _area: Rect, props: Self::Props<'_>) {
        let Some(anchor) = props.state.popover.anchor() else {
            return;
        };

        let height = props.config.list.height.saturating_add(CHROME_HEIGHT);
        self.area = anchored_rect(anchor, props.width, height, frame.area());
        render_popover(frame, self.area, Some(props.theme.popover_bg));

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(props.theme.popover_border)
            .style(Style::default().bg(props.theme.popover_bg));
        let inner = block.inner(self.area);
        frame.render_widget(block, self.area);

        let [search_area, separator_area, list_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Fill(1),
        ])
        .areas(inner);

        self.search.render(frame, search_area, search_props(&props));
        frame.render_widget(
            Paragraph::new("\u{2500}".repeat(separator_area.width as usize))
                .style(props.theme.popover_border),
            separator_area,
        );

        if self.drawn_search.as_deref() != Some(props.state.search.as_str()) {
            self.list.reset();
            self.drawn_search = Some(props.state.search.clone());
        }

        if props.state.visible_len() == 0 {
            let message = Paragraph::new(NO_MATCH_MESSAGE).style(props.theme.no_match);
            frame.render_widget(message, list_area);
            self.list.reset();
            return;
        }

        let filter = CountryFilter::new(&props.state.search).ok();
        let state = props.state;
        let theme = props.theme;
        let row = |index| country_row(state, theme, filter.as_ref(), index);
        self.list.render(frame, list_area, list_props(&props, &row));
    }
}
