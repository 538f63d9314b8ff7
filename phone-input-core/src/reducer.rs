//! Actions, effects and the reducer of the phone input
//!
//! Naming: `Input*` actions come from the text field, `Picker*` actions from
//! the country picker popover.

use ratatui::layout::Rect;

use crate::action::Action;
use crate::format::{hyphenate, normalize_input, replace_calling_code, splice_calling_code};
use crate::search::filter_catalog;
use crate::state::{PhoneInputState, Popover};
use crate::store::DispatchResult;

#[derive(Clone, Debug, PartialEq)]
pub enum PhoneAction {
    /// Field text changed (raw text as edited by the user)
    InputChange(String),
    /// Field lost focus
    InputBlur,
    /// Open the picker below the country button
    PickerOpen { anchor: Rect },
    /// Close the picker without selecting (click-away, Esc)
    PickerClose,
    /// Picker search text changed
    PickerSearch(String),
    /// Highlight a row of the picker list
    PickerHighlight(usize),
    /// Select a row of the picker list
    PickerSelect(usize),
}

impl Action for PhoneAction {
    fn name(&self) -> &'static str {
        match self {
            PhoneAction::InputChange(_) => "InputChange",
            PhoneAction::InputBlur => "InputBlur",
            PhoneAction::PickerOpen { .. } => "PickerOpen",
            PhoneAction::PickerClose => "PickerClose",
            PhoneAction::PickerSearch(_) => "PickerSearch",
            PhoneAction::PickerHighlight(_) => "PickerHighlight",
            PhoneAction::PickerSelect(_) => "PickerSelect",
        }
    }
}

/// Notifications for the widget's owner
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PhoneEffect {
    /// The number changed: detected alpha-2 code (or `""`) and national digits
    Changed {
        country_code: String,
        national_number: String,
    },
    /// The field lost focus
    Blurred,
}

pub fn reducer(state: &mut PhoneInputState, action: PhoneAction) -> DispatchResult<PhoneEffect> {
    match action {
        PhoneAction::InputChange(raw) => {
            let formatted = state.formatter.format(&normalize_input(&raw));
            let country = state.catalog.lookup_or_unknown(formatted.country.as_deref());

            let text = match formatted.text {
                Some(text) if !country.is_unknown() => {
                    splice_calling_code(&text, country.primary_calling_code())
                }
                Some(text) => text,
                None => raw,
            };

            state.phone = hyphenate(&text);
            state.country = country;
            state.national_number = formatted.national_number.clone();

            DispatchResult::changed_with(PhoneEffect::Changed {
                country_code: formatted.country.unwrap_or_default(),
                national_number: formatted.national_number,
            })
        }

        PhoneAction::InputBlur => DispatchResult::effect(PhoneEffect::Blurred),

        PhoneAction::PickerOpen { anchor } => {
            if state.popover.is_open() {
                return DispatchResult::unchanged();
            }
            state.popover = Popover::Open { anchor };
            DispatchResult::changed()
        }

        PhoneAction::PickerClose => {
            if !state.popover.is_open() {
                return DispatchResult::unchanged();
            }
            state.popover = Popover::Closed;
            state.reset_search();
            DispatchResult::changed()
        }

        PhoneAction::PickerSearch(search) => {
            state.visible = match filter_catalog(&state.catalog, &search) {
                Ok(rows) => rows,
                Err(err) => {
                    tracing::warn!(error = %err, "Country search failed");
                    Vec::new()
                }
            };
            state.search = search;
            state.highlighted = 0;
            DispatchResult::changed()
        }

        PhoneAction::PickerHighlight(row) => {
            let row = row.min(state.visible_len().saturating_sub(1));
            if row == state.highlighted {
                return DispatchResult::unchanged();
            }
            state.highlighted = row;
            DispatchResult::changed()
        }

        PhoneAction::PickerSelect(row) => {
            let Some(country) = state.visible_country(row).cloned() else {
                return DispatchResult::unchanged();
            };

            state.phone = replace_calling_code(&state.phone, &state.country, &country);
            state.country = country;
            state.popover = Popover::Closed;
            state.reset_search();

            if state.notify_on_select {
                DispatchResult::changed_with(PhoneEffect::Changed {
                    country_code: state.country.alpha2.clone(),
                    national_number: state.national_number.clone(),
                })
            } else {
                DispatchResult::changed()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::country::{Country, CountryCatalog};
    use crate::format::{Formatted, LibPhoneFormatter, PhoneFormatter};
    use std::sync::Arc;

    /// Formatter that answers from a fixed table, independent of library metadata
    #[derive(Debug)]
    struct FixedFormatter(Vec<(&'static str, Formatted)>);

    impl PhoneFormatter for FixedFormatter {
        fn format(&self, input: &str) -> Formatted {
            self.0
                .iter()
                .find(|(known, _)| *known == input)
                .map(|(_, formatted)| formatted.clone())
                .unwrap_or_else(|| Formatted::unrecognized(input))
        }
    }

    fn us_formatter() -> FixedFormatter {
        FixedFormatter(vec![(
            "2025551234",
            Formatted {
                text: Some("+1 202-555-1234".into()),
                country: Some("US".into()),
                national_number: "2025551234".into(),
            },
        )])
    }

    fn state_with(formatter: impl PhoneFormatter + 'static) -> PhoneInputState {
        PhoneInputState::new(CountryCatalog::global(), Arc::new(formatter))
    }

    fn row_of(state: &PhoneInputState, alpha2: &str) -> usize {
        state
            .visible_countries()
            .position(|c| c.alpha2 == alpha2)
            .unwrap()
    }

    #[test]
    fn test_input_change_formats_and_notifies() {
        let mut state = state_with(us_formatter());

        let result = reducer(&mut state, PhoneAction::InputChange("2025551234".into()));

        assert!(result.changed);
        assert_eq!(state.phone, "(1) 202-555-1234");
        assert_eq!(state.country.alpha2, "US");
        assert_eq!(
            result.effects,
            vec![PhoneEffect::Changed {
                country_code: "US".into(),
                national_number: "2025551234".into(),
            }]
        );
    }

    #[test]
    fn test_undetected_input_keeps_text_and_unknown_country() {
        let mut state = state_with(us_formatter());
        state.country = Country::new("Germany", "DE", ["49"]);

        let result = reducer(&mut state, PhoneAction::InputChange("12 34".into()));

        assert_eq!(state.phone, "12-34");
        assert!(state.country.is_unknown());
        assert_eq!(
            result.effects,
            vec![PhoneEffect::Changed {
                country_code: String::new(),
                national_number: "1234".into(),
            }]
        );
    }

    #[test]
    fn test_detected_code_outside_catalog_is_unknown() {
        let formatter = FixedFormatter(vec![(
            "+999",
            Formatted {
                text: Some("+999 1".into()),
                country: Some("ZZ".into()),
                national_number: "1".into(),
            },
        )]);
        let mut state = state_with(formatter);

        reducer(&mut state, PhoneAction::InputChange("+999".into()));

        assert!(state.country.is_unknown());
        assert_eq!(state.phone, "+999-1");
    }

    #[test]
    fn test_input_change_with_library_formatter() {
        let mut state = state_with(LibPhoneFormatter::with_default_region("US").unwrap());

        let result = reducer(&mut state, PhoneAction::InputChange("2025551234".into()));

        assert_eq!(state.country.alpha2, "US");
        assert!(state.phone.starts_with("(1)"));
        assert_eq!(
            result.effects,
            vec![PhoneEffect::Changed {
                country_code: "US".into(),
                national_number: "2025551234".into(),
            }]
        );

        // Re-entering the displayed text keeps the country
        let displayed = state.phone.clone();
        reducer(&mut state, PhoneAction::InputChange(displayed.clone()));
        assert_eq!(state.country.alpha2, "US");
        assert_eq!(state.phone, displayed);
    }

    #[test]
    fn test_blur_only_emits_effect() {
        let mut state = state_with(us_formatter());
        let result = reducer(&mut state, PhoneAction::InputBlur);
        assert!(!result.changed);
        assert_eq!(result.effects, vec![PhoneEffect::Blurred]);
    }

    #[test]
    fn test_popover_state_machine() {
        let mut state = state_with(us_formatter());
        let anchor = Rect::new(0, 0, 5, 1);

        assert!(!reducer(&mut state, PhoneAction::PickerClose).changed);
        assert!(reducer(&mut state, PhoneAction::PickerOpen { anchor }).changed);
        assert_eq!(state.popover, Popover::Open { anchor });
        assert!(!reducer(&mut state, PhoneAction::PickerOpen { anchor }).changed);
        assert!(reducer(&mut state, PhoneAction::PickerClose).changed);
        assert_eq!(state.popover, Popover::Closed);
    }

    #[test]
    fn test_search_filters_and_resets_highlight() {
        let mut state = state_with(us_formatter());
        state.highlighted = 5;

        reducer(&mut state, PhoneAction::PickerSearch("ger".into()));

        let names: Vec<&str> = state.visible_countries().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Algeria", "Germany", "Niger", "Nigeria"]);
        assert_eq!(state.search, "ger");
        assert_eq!(state.highlighted, 0);
    }

    #[test]
    fn test_invalid_search_shows_nothing() {
        let mut state = state_with(us_formatter());
        let result = reducer(&mut state, PhoneAction::PickerSearch("(".into()));
        assert!(result.changed);
        assert_eq!(state.visible_len(), 0);
        assert_eq!(state.search, "(");
    }

    #[test]
    fn test_click_away_keeps_selection_and_resets_list() {
        let mut state = state_with(us_formatter());
        state.country = Country::new("United States", "US", ["1"]);
        state.phone = "(1) 555".into();
        reducer(&mut state, PhoneAction::PickerOpen { anchor: Rect::default() });
        reducer(&mut state, PhoneAction::PickerSearch("ger".into()));

        reducer(&mut state, PhoneAction::PickerClose);

        assert_eq!(state.country.alpha2, "US");
        assert_eq!(state.phone, "(1) 555");
        assert!(state.search.is_empty());
        assert!(state.shows_full_catalog());
    }

    #[test]
    fn test_select_replaces_previous_calling_code() {
        let mut state = state_with(us_formatter());
        state.country = Country::new("United States", "US", ["1"]);
        state.phone = "(1) 555-123".into();
        reducer(&mut state, PhoneAction::PickerOpen { anchor: Rect::default() });
        reducer(&mut state, PhoneAction::PickerSearch("united k".into()));

        let result = reducer(&mut state, PhoneAction::PickerSelect(0));

        assert!(result.changed);
        assert!(result.effects.is_empty());
        assert_eq!(state.phone, "(44) 555-123");
        assert_eq!(state.country.alpha2, "GB");
        assert_eq!(state.popover, Popover::Closed);
        assert!(state.search.is_empty());
        assert!(state.shows_full_catalog());
    }

    #[test]
    fn test_select_without_previous_code_sets_prefix() {
        let mut state = state_with(us_formatter());
        state.phone = "555".into();
        let row = row_of(&state, "DE");

        reducer(&mut state, PhoneAction::PickerSelect(row));

        assert_eq!(state.phone, "(49)");
        assert_eq!(state.country.name, "Germany");
    }

    #[test]
    fn test_select_out_of_range_is_ignored() {
        let mut state = state_with(us_formatter());
        reducer(&mut state, PhoneAction::PickerSearch("zzzz".into()));
        assert!(!reducer(&mut state, PhoneAction::PickerSelect(0)).changed);
    }

    #[test]
    fn test_select_can_notify() {
        let mut state = state_with(us_formatter());
        state.notify_on_select = true;
        reducer(&mut state, PhoneAction::InputChange("2025551234".into()));
        let row = row_of(&state, "CA");

        let result = reducer(&mut state, PhoneAction::PickerSelect(row));

        assert_eq!(state.phone, "(1) 202-555-1234");
        assert_eq!(
            result.effects,
            vec![PhoneEffect::Changed {
                country_code: "CA".into(),
                national_number: "2025551234".into(),
            }]
        );
    }

    #[test]
    fn test_highlight_is_clamped() {
        let mut state = state_with(us_formatter());
        reducer(&mut state, PhoneAction::PickerSearch("ger".into()));

        assert!(reducer(&mut state, PhoneAction::PickerHighlight(10)).changed);
        assert_eq!(state.highlighted, 3);
        assert!(!reducer(&mut state, PhoneAction::PickerHighlight(3)).changed);
    }
}
