//! Widget configuration loaded from JSON
//!
//! Every field is optional; missing fields take their defaults and user
//! keybindings are merged over the default ones command by command.

use std::path::Path;

use crossterm::event::KeyEvent;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::format::LibPhoneFormatter;
use crate::keybindings::{BindingContext, Keybindings};

/// Which part of the widget has keyboard focus
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum WidgetContext {
    Field,
    Picker,
}

impl BindingContext for WidgetContext {
    fn name(&self) -> &'static str {
        match self {
            WidgetContext::Field => "field",
            WidgetContext::Picker => "picker",
        }
    }

    fn from_name(name: &str) -> Option<Self> {
        match name {
            "field" => Some(WidgetContext::Field),
            "picker" => Some(WidgetContext::Picker),
            _ => None,
        }
    }

    fn all() -> &'static [Self] {
        &[WidgetContext::Field, WidgetContext::Picker]
    }
}

/// Commands that keybindings can trigger
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Command {
    OpenPicker,
    ClosePicker,
    SelectCountry,
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::OpenPicker => "open_picker",
            Command::ClosePicker => "close",
            Command::SelectCountry => "select",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "open_picker" => Some(Command::OpenPicker),
            "close" => Some(Command::ClosePicker),
            "select" => Some(Command::SelectCountry),
            _ => None,
        }
    }
}

/// Default bindings: ctrl+k / alt+down open the picker, esc closes, enter selects
pub fn default_keybindings() -> Keybindings<WidgetContext> {
    let mut bindings = Keybindings::new();
    bindings.add(
        WidgetContext::Field,
        Command::OpenPicker.name(),
        vec!["ctrl+k".into(), "alt+down".into()],
    );
    bindings.add(
        WidgetContext::Picker,
        Command::ClosePicker.name(),
        vec!["esc".into()],
    );
    bindings.add(
        WidgetContext::Picker,
        Command::SelectCountry.name(),
        vec!["enter".into()],
    );
    bindings
}

/// Size of the picker list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListConfig {
    /// Popover width in columns
    pub width: u16,
    /// Visible rows
    pub height: u16,
    /// Rows materialized above and below the viewport
    pub overscan: usize,
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            width: 36,
            height: 10,
            overscan: 10,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PhoneInputConfig {
    /// Region used to parse numbers typed without `+` (e.g. `"US"`)
    pub default_country: Option<String>,
    /// Field label
    pub label: String,
    /// Notify the change callback when a country is picked
    pub notify_on_select: bool,
    pub list: ListConfig,
    pub keybindings: Keybindings<WidgetContext>,
}

impl Default for PhoneInputConfig {
    fn default() -> Self {
        Self {
            default_country: None,
            label: "Phone Number".to_string(),
            notify_on_select: false,
            list: ListConfig::default(),
            keybindings: default_keybindings(),
        }
    }
}

impl PhoneInputConfig {
    /// Parse a JSON config, merging keybindings over the defaults
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        let mut config: Self = serde_json::from_str(json)?;
        config.keybindings = Keybindings::merge(default_keybindings(), config.keybindings);
        Ok(config)
    }

    /// Read and parse a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| Error::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json(&content).map_err(|source| Error::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "Loaded phone input config");
        Ok(config)
    }

    /// Formatter for the configured default region
    pub fn formatter(&self) -> Result<LibPhoneFormatter> {
        match self.default_country.as_deref() {
            Some(region) => LibPhoneFormatter::with_default_region(region),
            None => Ok(LibPhoneFormatter::new()),
        }
    }

    /// Command bound to `key` in `context`
    pub fn command(&self, key: KeyEvent, context: WidgetContext) -> Option<Command> {
        self.keybindings
            .get_command(key, context)
            .and_then(Command::from_name)
    }

    /// Display form of the first key bound to `command`
    pub fn key_hint(&self, command: Command, context: WidgetContext) -> Option<String> {
        self.keybindings
            .first_key(command.name(), context)
            .map(crate::keybindings::format_key_for_display)
    }
}
