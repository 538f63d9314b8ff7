//! Phone number formatting and calling-code rewriting
//!
//! Parsing and formatting are delegated to the `phonenumber` crate behind the
//! [`PhoneFormatter`] trait. The functions in this module only rewrite the
//! library output for display: the calling code is shown in parentheses
//! (`(44) 7911-123456`) and spaces become hyphens.

use std::borrow::Cow;
use std::fmt::Debug;
use std::sync::LazyLock;

use phonenumber::{country, Mode};
use regex::Regex;

use crate::country::Country;
use crate::error::{Error, Result};

/// Output of one formatting pass over the field text
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Formatted {
    /// Formatted number, `None` when the library could not parse the input
    pub text: Option<String>,
    /// Detected ISO alpha-2 code
    pub country: Option<String>,
    /// National significant number digits
    pub national_number: String,
}

impl Formatted {
    /// Result for input the library could not make sense of
    pub fn unrecognized(input: &str) -> Self {
        Self {
            text: None,
            country: None,
            national_number: input.chars().filter(char::is_ascii_digit).collect(),
        }
    }
}

/// Turns raw field text into formatted text, a country and a national number
pub trait PhoneFormatter: Debug + Send + Sync {
    fn format(&self, input: &str) -> Formatted;
}

/// [`PhoneFormatter`] backed by the `phonenumber` crate
#[derive(Debug, Clone, Default)]
pub struct LibPhoneFormatter {
    default_region: Option<country::Id>,
}

impl LibPhoneFormatter {
    /// Formatter that only recognises international input (`+44...`)
    pub fn new() -> Self {
        Self::default()
    }

    /// Formatter that parses national input in `region` (e.g. `"US"`)
    pub fn with_default_region(region: &str) -> Result<Self> {
        let id = region
            .trim()
            .to_ascii_uppercase()
            .parse::<country::Id>()
            .map_err(|_| Error::UnknownRegion(region.to_string()))?;
        Ok(Self {
            default_region: Some(id),
        })
    }
}

impl PhoneFormatter for LibPhoneFormatter {
    fn format(&self, input: &str) -> Formatted {
        if !input.chars().any(|c| c.is_ascii_digit()) {
            return Formatted::unrecognized(input);
        }

        match phonenumber::parse(self.default_region, input) {
            Ok(number) => Formatted {
                text: Some(number.format().mode(Mode::International).to_string()),
                country: number.country().id().map(|id| format!("{:?}", id)),
                national_number: number.national().to_string(),
            },
            Err(err) => {
                tracing::trace!(input, error = %err, "Phone input not parsed");
                Formatted::unrecognized(input)
            }
        }
    }
}

static LEADING_CALLING_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*\((\d+)\)").expect("static regex"));

static SPACE_AFTER_NON_PAREN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^)]\s").expect("static regex"));

/// Turn a displayed `(44) ...` prefix back into `+44 ...` before parsing
pub fn normalize_input(text: &str) -> Cow<'_, str> {
    LEADING_CALLING_CODE.replace(text, "+$1")
}

/// Wrap the calling code of the formatted text in parentheses
///
/// The first `+code` (or bare `code` when there is no plus) becomes `(code)`.
pub fn splice_calling_code(text: &str, code: &str) -> String {
    if code.is_empty() {
        return text.to_string();
    }
    let wrapped = format!("({})", code);
    let plus_code = format!("+{}", code);
    if text.contains(&plus_code) {
        text.replacen(&plus_code, &wrapped, 1)
    } else {
        text.replacen(code, &wrapped, 1)
    }
}

/// Replace whitespace that follows anything but `)` with hyphens
///
/// Matches are non-overlapping pairs, so `"a  b"` becomes `"a- b"`.
pub fn hyphenate(text: &str) -> String {
    SPACE_AFTER_NON_PAREN
        .replace_all(text, |caps: &regex::Captures<'_>| {
            caps[0]
                .chars()
                .map(|c| if c.is_whitespace() { '-' } else { c })
                .collect::<String>()
        })
        .into_owned()
}

/// Swap the previous country's `(code)` for the next one's
///
/// When the text does not contain the previous code, the new `(code)` becomes
/// the whole text.
pub fn replace_calling_code(text: &str, previous: &Country, next: &Country) -> String {
    let current = previous.calling_code_label();
    let replacement = next.calling_code_label();
    if text.contains(&current) {
        text.replacen(&current, &replacement, 1)
    } else {
        replacement
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_input() {
        assert_eq!(normalize_input("(44) 7911-123456"), "+44 7911-123456");
        assert_eq!(normalize_input("(1)202"), "+1202");
        assert_eq!(normalize_input("2025551234"), "2025551234");
        assert_eq!(normalize_input("+1 202"), "+1 202");
    }

    #[test]
    fn test_splice_prefers_plus_code() {
        assert_eq!(splice_calling_code("+1 202-555-1234", "1"), "(1) 202-555-1234");
        assert_eq!(splice_calling_code("+44 20 7183 8750", "44"), "(44) 20 7183 8750");
    }

    #[test]
    fn test_splice_without_plus_and_without_code() {
        assert_eq!(splice_calling_code("44 20", "44"), "(44) 20");
        assert_eq!(splice_calling_code("555", ""), "555");
    }

    #[test]
    fn test_hyphenate() {
        assert_eq!(hyphenate("(44) 20 7183 8750"), "(44) 20-7183-8750");
        assert_eq!(hyphenate("(1) 202-555-1234"), "(1) 202-555-1234");
        assert_eq!(hyphenate("a  b"), "a- b");
        assert_eq!(hyphenate(""), "");
    }

    #[test]
    fn test_replace_calling_code_in_place() {
        let us = Country::new("United States", "US", ["1"]);
        let gb = Country::new("United Kingdom", "GB", ["44"]);
        assert_eq!(replace_calling_code("(1) 555-123", &us, &gb), "(44) 555-123");
    }

    #[test]
    fn test_replace_calling_code_missing_prefix() {
        let us = Country::new("United States", "US", ["1"]);
        let gb = Country::new("United Kingdom", "GB", ["44"]);
        assert_eq!(replace_calling_code("555-123", &us, &gb), "(44)");
        assert_eq!(replace_calling_code("", &Country::unknown(), &gb), "(44)");
    }

    #[test]
    fn test_unrecognized_keeps_digits() {
        let formatted = Formatted::unrecognized("+4-47a");
        assert_eq!(formatted.text, None);
        assert_eq!(formatted.country, None);
        assert_eq!(formatted.national_number, "447");
    }

    #[test]
    fn test_lib_formatter_ignores_text_without_digits() {
        let formatter = LibPhoneFormatter::new();
        assert_eq!(formatter.format("abc"), Formatted::unrecognized("abc"));
        assert_eq!(formatter.format(""), Formatted::unrecognized(""));
    }

    #[test]
    fn test_lib_formatter_detects_international_number() {
        let formatter = LibPhoneFormatter::new();
        let formatted = formatter.format("+12025551234");
        assert_eq!(formatted.country.as_deref(), Some("US"));
        assert_eq!(formatted.national_number, "2025551234");
        assert!(formatted.text.unwrap().starts_with("+1"));
    }

    #[test]
    fn test_lib_formatter_default_region() {
        let formatter = LibPhoneFormatter::with_default_region("us").unwrap();
        let formatted = formatter.format("2025551234");
        assert_eq!(formatted.country.as_deref(), Some("US"));
        assert_eq!(formatted.national_number, "2025551234");
    }

    #[test]
    fn test_unknown_default_region() {
        assert!(matches!(
            LibPhoneFormatter::with_default_region("XQ"),
            Err(Error::UnknownRegion(_))
        ));
    }
}
