//! The embeddable phone input: store, view and callbacks in one object

use std::sync::Arc;

use phone_input_core::{
    reducer, Component, CountryCatalog, EventKind, LoggingMiddleware, PhoneAction, PhoneEffect,
    PhoneFormatter, PhoneInputConfig, PhoneInputState, Result, Store,
};
use ratatui::{layout::Rect, Frame};

use crate::phone_field::FIELD_HEIGHT;
use crate::phone_input::{PhoneInput, PhoneInputProps};
use crate::theme::PhoneInputTheme;

/// Called with `(country_code, national_number)` whenever the number changes
pub type ChangeCallback = Box<dyn FnMut(&str, &str)>;

/// Called when the field loses focus
pub type BlurCallback = Box<dyn FnMut()>;

/// A phone number input with a country picker
///
/// Owns its state and runs the reducer itself; the host feeds it events,
/// renders it, and hears back through `on_change` / `on_blur`.
///
/// ```ignore
/// let mut phone = PhoneInputWidget::new(PhoneInputConfig::default())?
///     .on_change(|country, national| status = format!("{country} {national}"))
///     .helper_text("We'll text you a code");
///
/// phone.handle_event(&event);
/// terminal.draw(|frame| phone.render(frame, area))?;
/// ```
pub struct PhoneInputWidget {
    store: Store<PhoneInputState, PhoneAction, PhoneEffect, LoggingMiddleware>,
    view: PhoneInput,
    config: PhoneInputConfig,
    pub on_change: Option<ChangeCallback>,
    pub on_blur: Option<BlurCallback>,
    /// Validation state owned by the host
    pub error: bool,
    pub helper_text: String,
    pub theme: PhoneInputTheme,
    /// Popover width; `None` uses the configured list width
    pub width: Option<u16>,
}

impl PhoneInputWidget {
    /// Widget formatting with the library formatter for the configured region
    pub fn new(config: PhoneInputConfig) -> Result<Self> {
        let formatter = config.formatter()?;
        Ok(Self::with_formatter(config, Arc::new(formatter)))
    }

    pub fn with_formatter(config: PhoneInputConfig, formatter: Arc<dyn PhoneFormatter>) -> Self {
        let mut state = PhoneInputState::new(CountryCatalog::global(), formatter);
        state.notify_on_select = config.notify_on_select;

        Self {
            store: Store::with_middleware(state, reducer, LoggingMiddleware::new()),
            view: PhoneInput::new(),
            config,
            on_change: None,
            on_blur: None,
            error: false,
            helper_text: String::new(),
            theme: PhoneInputTheme::default(),
            width: None,
        }
    }

    pub fn on_change(mut self, callback: impl FnMut(&str, &str) + 'static) -> Self {
        self.on_change = Some(Box::new(callback));
        self
    }

    pub fn on_blur(mut self, callback: impl FnMut() + 'static) -> Self {
        self.on_blur = Some(Box::new(callback));
        self
    }

    pub fn error(mut self, error: bool) -> Self {
        self.error = error;
        self
    }

    pub fn helper_text(mut self, helper_text: impl Into<String>) -> Self {
        self.helper_text = helper_text.into();
        self
    }

    pub fn theme(mut self, theme: PhoneInputTheme) -> Self {
        self.theme = theme;
        self
    }

    pub fn width(mut self, width: u16) -> Self {
        self.width = Some(width);
        self
    }

    pub fn state(&self) -> &PhoneInputState {
        self.store.state()
    }

    pub fn config(&self) -> &PhoneInputConfig {
        &self.config
    }

    pub fn view(&self) -> &PhoneInput {
        &self.view
    }

    pub fn is_focused(&self) -> bool {
        self.view.is_focused()
    }

    pub fn set_focused(&mut self, focused: bool) {
        self.view.set_focused(focused);
    }

    /// Rows the widget occupies below its top edge (field plus helper text)
    pub fn height(&self) -> u16 {
        FIELD_HEIGHT + 1
    }

    /// Handle one input event; returns true when the widget state changed
    pub fn handle_event(&mut self, event: &EventKind) -> bool {
        let props = PhoneInputProps {
            state: self.store.state(),
            config: &self.config,
            theme: &self.theme,
            error: self.error,
            helper_text: &self.helper_text,
            width: self.width.unwrap_or(self.config.list.width),
        };
        let actions: Vec<_> = self.view.handle_event(event, props).into_iter().collect();

        let mut changed = false;
        for action in actions {
            changed |= self.dispatch(action);
        }
        changed
    }

    /// Dispatch an action and run the callbacks its effects ask for
    pub fn dispatch(&mut self, action: PhoneAction) -> bool {
        let result = self.store.dispatch(action);
        for effect in result.effects {
            self.run_effect(effect);
        }
        result.changed
    }

    fn run_effect(&mut self, effect: PhoneEffect) {
        match effect {
            PhoneEffect::Changed {
                country_code,
                national_number,
            } => {
                tracing::debug!(%country_code, "Phone number changed");
                if let Some(on_change) = self.on_change.as_mut() {
                    on_change(&country_code, &national_number);
                }
            }
            PhoneEffect::Blurred => {
                tracing::debug!("Phone input blurred");
                if let Some(on_blur) = self.on_blur.as_mut() {
                    on_blur();
                }
            }
        }
    }

    /// Draw the field into `area`; an open picker overlays the rest of the frame
    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        let props = PhoneInputProps {
            state: self.store.state(),
            config: &self.config,
            theme: &self.theme,
            error: self.error,
            helper_text: &self.helper_text,
            width: self.width.unwrap_or(self.config.list.width),
        };
        self.view.render(frame, area, props);
    }
}
