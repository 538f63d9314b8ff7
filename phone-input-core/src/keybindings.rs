//! Context-aware keybindings for the phone field and the country picker
//!
//! Bindings map a command name to a list of key strings (`"ctrl+k"`,
//! `"alt+down"`, `"esc"`). They are grouped by a [`BindingContext`] so the
//! same key can mean different things in the field and in the picker, and
//! they round-trip through serde so a config file can override them.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;
use std::hash::Hash;

/// A keybinding context (which part of the widget has focus)
pub trait BindingContext: Clone + Copy + Eq + Hash {
    /// Context name as used in config files
    fn name(&self) -> &'static str;

    /// Parse a context from its config name
    fn from_name(name: &str) -> Option<Self>;

    /// Every context value
    fn all() -> &'static [Self];
}

/// Keybindings grouped by context, with a global fallback group
#[derive(Debug, Clone)]
pub struct Keybindings<C: BindingContext> {
    global: HashMap<String, Vec<String>>,
    contexts: HashMap<C, HashMap<String, Vec<String>>>,
}

impl<C: BindingContext> Default for Keybindings<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: BindingContext> Serialize for Keybindings<C> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(Some(1 + self.contexts.len()))?;
        map.serialize_entry("global", &self.global)?;
        for (context, bindings) in &self.contexts {
            map.serialize_entry(context.name(), bindings)?;
        }
        map.end()
    }
}

impl<'de, C: BindingContext> Deserialize<'de> for Keybindings<C> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: HashMap<String, HashMap<String, Vec<String>>> =
            HashMap::deserialize(deserializer)?;

        let mut keybindings = Keybindings::new();
        for (context_name, bindings) in raw {
            if context_name == "global" {
                keybindings.global = bindings;
            } else if let Some(context) = C::from_name(&context_name) {
                keybindings.contexts.insert(context, bindings);
            } else {
                tracing::warn!(context = %context_name, "Ignoring unknown keybinding context");
            }
        }
        Ok(keybindings)
    }
}

impl<C: BindingContext> Keybindings<C> {
    /// Create an empty set of bindings
    pub fn new() -> Self {
        Self {
            global: HashMap::new(),
            contexts: HashMap::new(),
        }
    }

    /// Bind keys to a command in every context
    pub fn add_global(&mut self, command: impl Into<String>, keys: Vec<String>) {
        self.global.insert(command.into(), keys);
    }

    /// Bind keys to a command in one context
    pub fn add(&mut self, context: C, command: impl Into<String>, keys: Vec<String>) {
        self.contexts
            .entry(context)
            .or_default()
            .insert(command.into(), keys);
    }

    /// Bindings of a single context
    pub fn context_bindings(&self, context: C) -> Option<&HashMap<String, Vec<String>>> {
        self.contexts.get(&context)
    }

    /// Command bound to `key` in `context`, falling back to global bindings
    pub fn get_command(&self, key: KeyEvent, context: C) -> Option<&str> {
        self.contexts
            .get(&context)
            .and_then(|bindings| find_command(key, bindings))
            .or_else(|| find_command(key, &self.global))
    }

    /// First key string bound to `command` in `context` (for hints)
    pub fn first_key(&self, command: &str, context: C) -> Option<&str> {
        self.contexts
            .get(&context)
            .and_then(|bindings| bindings.get(command))
            .and_then(|keys| keys.first())
            .or_else(|| self.global.get(command).and_then(|keys| keys.first()))
            .map(String::as_str)
    }

    /// Overlay `user` bindings on top of `defaults`, command by command
    pub fn merge(mut defaults: Self, user: Self) -> Self {
        defaults.global.extend(user.global);
        for (context, bindings) in user.contexts {
            defaults.contexts.entry(context).or_default().extend(bindings);
        }
        defaults
    }
}

fn find_command(key: KeyEvent, bindings: &HashMap<String, Vec<String>>) -> Option<&str> {
    bindings.iter().find_map(|(command, keys)| {
        keys.iter()
            .filter_map(|key_str| parse_key_string(key_str))
            .any(|bound| key_matches(&bound, &key))
            .then_some(command.as_str())
    })
}

/// Compare code and modifiers; characters compare case-insensitively
fn key_matches(bound: &KeyEvent, key: &KeyEvent) -> bool {
    let codes_match = match (bound.code, key.code) {
        (KeyCode::Char(a), KeyCode::Char(b)) => a.to_lowercase().eq(b.to_lowercase()),
        (a, b) => a == b,
    };
    codes_match && bound.modifiers == key.modifiers
}

fn named_key(name: &str) -> Option<KeyCode> {
    let code = match name {
        "esc" | "escape" => KeyCode::Esc,
        "enter" | "return" => KeyCode::Enter,
        "tab" => KeyCode::Tab,
        "backtab" => KeyCode::BackTab,
        "backspace" => KeyCode::Backspace,
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "pageup" => KeyCode::PageUp,
        "pagedown" => KeyCode::PageDown,
        "delete" => KeyCode::Delete,
        "insert" => KeyCode::Insert,
        "space" => KeyCode::Char(' '),
        f if f.len() > 1 && f.starts_with('f') => KeyCode::F(f[1..].parse().ok()?),
        c => {
            let mut chars = c.chars();
            let ch = chars.next()?;
            if chars.next().is_some() {
                return None;
            }
            KeyCode::Char(ch)
        }
    };
    Some(code)
}

/// Parse a key string like `"q"`, `"esc"`, `"ctrl+k"`, `"shift+tab"` into a `KeyEvent`
pub fn parse_key_string(key_str: &str) -> Option<KeyEvent> {
    let key_str = key_str.trim().to_lowercase();
    if key_str.is_empty() {
        return None;
    }

    // A lone "+" is the plus key, not a separator
    let (modifier_parts, key_part) = match key_str.rsplit_once('+') {
        Some((mods, "")) => (mods.trim_end_matches('+'), "+"),
        Some((mods, key)) => (mods, key),
        None => ("", key_str.as_str()),
    };

    let mut modifiers = KeyModifiers::empty();
    for part in modifier_parts.split('+').map(str::trim).filter(|p| !p.is_empty()) {
        match part {
            "ctrl" | "control" => modifiers |= KeyModifiers::CONTROL,
            "shift" => modifiers |= KeyModifiers::SHIFT,
            "alt" => modifiers |= KeyModifiers::ALT,
            _ => return None,
        }
    }

    let mut code = named_key(key_part.trim())?;
    if code == KeyCode::Tab && modifiers.contains(KeyModifiers::SHIFT) {
        code = KeyCode::BackTab;
    }
    if code == KeyCode::BackTab {
        modifiers |= KeyModifiers::SHIFT;
    }

    Some(KeyEvent {
        code,
        modifiers,
        kind: KeyEventKind::Press,
        state: KeyEventState::empty(),
    })
}

/// Format a key string for hints (`"ctrl+k"` -> `"^K"`, `"alt+down"` -> `"Alt+Down"`)
pub fn format_key_for_display(key_str: &str) -> String {
    let Some(key) = parse_key_string(key_str) else {
        return key_str.to_string();
    };

    let name = match key.code {
        KeyCode::Esc => "Esc".to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Tab => "Tab".to_string(),
        KeyCode::BackTab => return "Shift+Tab".to_string(),
        KeyCode::Backspace => "Backspace".to_string(),
        KeyCode::Up => "Up".to_string(),
        KeyCode::Down => "Down".to_string(),
        KeyCode::Left => "Left".to_string(),
        KeyCode::Right => "Right".to_string(),
        KeyCode::Home => "Home".to_string(),
        KeyCode::End => "End".to_string(),
        KeyCode::PageUp => "PgUp".to_string(),
        KeyCode::PageDown => "PgDn".to_string(),
        KeyCode::Delete => "Del".to_string(),
        KeyCode::Insert => "Ins".to_string(),
        KeyCode::F(n) => format!("F{}", n),
        KeyCode::Char(' ') => "Space".to_string(),
        KeyCode::Char(c) => c.to_uppercase().collect(),
        _ => key_str.to_string(),
    };

    let mut prefix = String::new();
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        prefix.push('^');
    }
    if key.modifiers.contains(KeyModifiers::ALT) {
        prefix.push_str("Alt+");
    }
    if key.modifiers.contains(KeyModifiers::SHIFT) {
        prefix.push_str("Shift+");
    }
    format!("{}{}", prefix, name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
    enum TestContext {
        Field,
        Picker,
    }

    impl BindingContext for TestContext {
        fn name(&self) -> &'static str {
            match self {
                TestContext::Field => "field",
                TestContext::Picker => "picker",
            }
        }

        fn from_name(name: &str) -> Option<Self> {
            match name {
                "field" => Some(TestContext::Field),
                "picker" => Some(TestContext::Picker),
                _ => None,
            }
        }

        fn all() -> &'static [Self] {
            &[TestContext::Field, TestContext::Picker]
        }
    }

    #[test]
    fn test_parse_simple_key() {
        let result = parse_key_string("q").unwrap();
        assert_eq!(result.code, KeyCode::Char('q'));
        assert_eq!(result.modifiers, KeyModifiers::empty());
    }

    #[test]
    fn test_parse_modified_keys() {
        let result = parse_key_string("ctrl+k").unwrap();
        assert_eq!(result.code, KeyCode::Char('k'));
        assert!(result.modifiers.contains(KeyModifiers::CONTROL));

        let result = parse_key_string("alt+down").unwrap();
        assert_eq!(result.code, KeyCode::Down);
        assert!(result.modifiers.contains(KeyModifiers::ALT));
    }

    #[test]
    fn test_parse_shift_tab() {
        for s in ["shift+tab", "backtab"] {
            let result = parse_key_string(s).unwrap();
            assert_eq!(result.code, KeyCode::BackTab);
            assert!(result.modifiers.contains(KeyModifiers::SHIFT));
        }
    }

    #[test]
    fn test_parse_plus_and_function_keys() {
        assert_eq!(parse_key_string("+").unwrap().code, KeyCode::Char('+'));
        assert_eq!(parse_key_string("f12").unwrap().code, KeyCode::F(12));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_key_string("").is_none());
        assert!(parse_key_string("hyper+x").is_none());
        assert!(parse_key_string("notakey").is_none());
    }

    #[test]
    fn test_get_command_context_then_global() {
        let mut bindings: Keybindings<TestContext> = Keybindings::new();
        bindings.add_global("quit", vec!["ctrl+q".to_string()]);
        bindings.add(TestContext::Picker, "close", vec!["esc".to_string()]);

        let quit = parse_key_string("ctrl+q").unwrap();
        assert_eq!(bindings.get_command(quit, TestContext::Field), Some("quit"));
        assert_eq!(bindings.get_command(quit, TestContext::Picker), Some("quit"));

        let esc = parse_key_string("esc").unwrap();
        assert_eq!(bindings.get_command(esc, TestContext::Picker), Some("close"));
        assert_eq!(bindings.get_command(esc, TestContext::Field), None);
    }

    #[test]
    fn test_merge_overrides_per_command() {
        let mut defaults: Keybindings<TestContext> = Keybindings::new();
        defaults.add(TestContext::Field, "open_picker", vec!["ctrl+k".into()]);
        defaults.add(TestContext::Picker, "close", vec!["esc".into()]);

        let mut user: Keybindings<TestContext> = Keybindings::new();
        user.add(TestContext::Field, "open_picker", vec!["f2".into()]);

        let merged = Keybindings::merge(defaults, user);
        assert_eq!(merged.first_key("open_picker", TestContext::Field), Some("f2"));
        assert_eq!(merged.first_key("close", TestContext::Picker), Some("esc"));
    }

    #[test]
    fn test_deserialize_ignores_unknown_context() {
        let json = r#"{ "picker": { "close": ["esc"] }, "bogus": { "x": ["y"] } }"#;
        let bindings: Keybindings<TestContext> = serde_json::from_str(json).unwrap();
        assert!(bindings.context_bindings(TestContext::Picker).is_some());
        assert!(bindings.context_bindings(TestContext::Field).is_none());
    }

    #[test]
    fn test_format_key_for_display() {
        assert_eq!(format_key_for_display("q"), "Q");
        assert_eq!(format_key_for_display("ctrl+k"), "^K");
        assert_eq!(format_key_for_display("alt+down"), "Alt+Down");
        assert_eq!(format_key_for_display("shift+tab"), "Shift+Tab");
    }
}
