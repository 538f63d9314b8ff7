//! Widget state - single source of truth for one phone input
//!
//! Components receive `&PhoneInputState` through their props; only the
//! reducer mutates it.

use std::sync::Arc;

use ratatui::layout::Rect;

use crate::country::{Country, CountryCatalog};
use crate::format::PhoneFormatter;

/// Country picker popover
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Popover {
    #[default]
    Closed,
    /// Open below `anchor`, the screen area of the country button
    Open { anchor: Rect },
}

impl Popover {
    pub fn is_open(&self) -> bool {
        matches!(self, Popover::Open { .. })
    }

    pub fn anchor(&self) -> Option<Rect> {
        match self {
            Popover::Open { anchor } => Some(*anchor),
            Popover::Closed => None,
        }
    }
}

/// State of one phone input widget
#[derive(Debug, Clone)]
pub struct PhoneInputState {
    /// Text shown in the field
    pub phone: String,

    /// National number from the last formatting pass
    pub national_number: String,

    pub popover: Popover,

    /// Selected or detected country (unknown sentinel when none)
    pub country: Country,

    /// Catalog indices of the rows shown in the picker
    pub visible: Vec<usize>,

    /// Picker search text
    pub search: String,

    /// Highlighted row in `visible`
    pub highlighted: usize,

    /// Emit a change notification when a country is picked
    pub notify_on_select: bool,

    pub catalog: Arc<CountryCatalog>,
    pub formatter: Arc<dyn PhoneFormatter>,
}

impl PhoneInputState {
    pub fn new(catalog: Arc<CountryCatalog>, formatter: Arc<dyn PhoneFormatter>) -> Self {
        let visible = (0..catalog.len()).collect();
        Self {
            phone: String::new(),
            national_number: String::new(),
            popover: Popover::Closed,
            country: Country::unknown(),
            visible,
            search: String::new(),
            highlighted: 0,
            notify_on_select: false,
            catalog,
            formatter,
        }
    }

    pub fn visible_len(&self) -> usize {
        self.visible.len()
    }

    /// Country at `row` of the picker list
    pub fn visible_country(&self, row: usize) -> Option<&Country> {
        self.visible
            .get(row)
            .and_then(|&index| self.catalog.get(index))
    }

    pub fn visible_countries(&self) -> impl Iterator<Item = &Country> + '_ {
        self.visible
            .iter()
            .filter_map(|&index| self.catalog.get(index))
    }

    /// True when the picker lists the whole catalog
    pub fn shows_full_catalog(&self) -> bool {
        self.visible.len() == self.catalog.len()
            && self.visible.iter().enumerate().all(|(row, &index)| row == index)
    }

    /// Clear the search and list every country again
    pub(crate) fn reset_search(&mut self) {
        self.search.clear();
        self.visible = (0..self.catalog.len()).collect();
        self.highlighted = 0;
    }
}
