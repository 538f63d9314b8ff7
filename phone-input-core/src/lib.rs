//! Core state and behavior of a terminal phone-number input
//!
//! The widget is a text field that formats what the user types as a phone
//! number, plus a country picker popover that rewrites the dialing code.
//! This crate holds everything that does not draw: the country catalog, the
//! formatting pipeline, the widget state and its reducer. Drawing lives in
//! `phone-input-components`.
//!
//! # Core Concepts
//!
//! - **Country catalog**: every assigned country with a calling code, sorted by
//!   name, loaded once and shared by `Arc`
//! - **Formatter**: [`PhoneFormatter`] turns field text into formatted text,
//!   a detected country and national digits (backed by `phonenumber`)
//! - **Reducer**: `fn(&mut PhoneInputState, PhoneAction) -> DispatchResult<PhoneEffect>`;
//!   effects tell the owner to run its change/blur callbacks
//! - **Component**: pure UI elements that turn events into actions
//!
//! # Example
//!
//! ```ignore
//! use phone_input_core::prelude::*;
//!
//! let state = PhoneInputState::new(
//!     CountryCatalog::global(),
//!     Arc::new(LibPhoneFormatter::with_default_region("US")?),
//! );
//! let mut store = Store::new(state, reducer);
//!
//! let result = store.dispatch(PhoneAction::InputChange("2025551234".into()));
//! assert_eq!(store.state().phone, "(1) 202-555-1234");
//! assert_eq!(
//!     result.effects,
//!     vec![PhoneEffect::Changed {
//!         country_code: "US".into(),
//!         national_number: "2025551234".into(),
//!     }]
//! );
//! ```

pub mod action;
pub mod bus;
pub mod component;
pub mod config;
pub mod country;
pub mod error;
pub mod event;
pub mod format;
pub mod keybindings;
pub mod reducer;
pub mod search;
pub mod state;
pub mod store;
pub mod testing;

pub use action::Action;
pub use component::Component;
pub use config::{default_keybindings, Command, ListConfig, PhoneInputConfig, WidgetContext};
pub use country::{Country, CountryCatalog};
pub use error::{Error, Result};
pub use event::{rect_contains, EventKind};
pub use format::{Formatted, LibPhoneFormatter, PhoneFormatter};
pub use keybindings::{format_key_for_display, parse_key_string, BindingContext, Keybindings};
pub use reducer::{reducer, PhoneAction, PhoneEffect};
pub use search::{filter_catalog, highlight_ranges, CountryFilter};
pub use state::{PhoneInputState, Popover};
pub use store::{DispatchResult, EffectReducer, LoggingMiddleware, Middleware, NoopMiddleware, Store};

// Event polling
pub use bus::{process_raw_event, spawn_event_poller, RawEvent};

// Re-export ratatui types for convenience
pub use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    Frame,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        reducer, Action, Component, Country, CountryCatalog, DispatchResult, EventKind,
        LibPhoneFormatter, LoggingMiddleware, PhoneAction, PhoneEffect, PhoneFormatter,
        PhoneInputConfig, PhoneInputState, Popover, Store,
    };
    pub use std::sync::Arc;

    pub use ratatui::{
        layout::Rect,
        style::{Color, Modifier, Style},
        text::{Line, Span, Text},
        Frame,
    };
}
