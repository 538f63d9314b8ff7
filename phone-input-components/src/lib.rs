//! Terminal components for the phone input
//!
//! Components implement `Component<A>` from `phone-input-core`: they take
//! read-only props, turn events into actions and draw with ratatui. State
//! lives in the reducer; components only keep UI details such as cursor
//! position, scroll offset and keyboard focus.
//!
//! # Components
//!
//! - [`TextInput`] - Single-line text input with cursor
//! - [`VirtualList`] - List that only builds the rows it shows
//! - [`popover`] - Anchored overlay placement and click-away detection
//! - [`PhoneField`] - Country button, number input and helper text
//! - [`CountryPicker`] - Search box over the country list
//! - [`PhoneInput`] - Field and picker composed, routing by popover state
//! - [`PhoneInputWidget`] - Self-contained widget owning its store and callbacks
//!
//! # Example
//!
//! ```ignore
//! use phone_input_components::PhoneInputWidget;
//! use phone_input_core::PhoneInputConfig;
//!
//! let mut phone = PhoneInputWidget::new(PhoneInputConfig::default())?
//!     .on_change(|country, national| tracing::info!(country, national, "changed"))
//!     .on_blur(|| tracing::info!("blurred"));
//!
//! // In the event loop:
//! phone.handle_event(&event);
//! terminal.draw(|frame| phone.render(frame, area))?;
//! ```

mod country_picker;
mod phone_field;
mod phone_input;
pub mod popover;
mod text_input;
mod theme;
mod virtual_list;
mod widget;

pub use country_picker::{CountryPicker, CountryPickerProps, NO_MATCH_MESSAGE};
pub use phone_field::{PhoneField, PhoneFieldProps, FIELD_HEIGHT};
pub use phone_input::{PhoneInput, PhoneInputProps};
pub use popover::{anchored_rect, is_click_away, render_popover};
pub use text_input::{TextInput, TextInputProps};
pub use theme::PhoneInputTheme;
pub use virtual_list::{materialized_range, VirtualList, VirtualListProps};
pub use widget::{BlurCallback, ChangeCallback, PhoneInputWidget};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{
        anchored_rect, is_click_away, render_popover, CountryPicker, CountryPickerProps,
        PhoneField, PhoneFieldProps, PhoneInput, PhoneInputProps, PhoneInputTheme,
        PhoneInputWidget, TextInput, TextInputProps, VirtualList, VirtualListProps,
    };
}
