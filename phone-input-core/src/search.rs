//! Country search: case-insensitive pattern match on country names

use std::ops::Range;

use regex::{Regex, RegexBuilder};

use crate::country::{Country, CountryCatalog};
use crate::error::{Error, Result};

/// A compiled country-name search
///
/// The search text is used as a regular expression as typed (not escaped),
/// so `^ger` anchors to the start of the name and `(` is an error.
#[derive(Debug, Clone)]
pub struct CountryFilter {
    pattern: Regex,
}

impl CountryFilter {
    pub fn new(search: &str) -> Result<Self> {
        let pattern = RegexBuilder::new(search)
            .case_insensitive(true)
            .build()
            .map_err(|source| Error::InvalidSearch {
                pattern: search.to_string(),
                source,
            })?;
        Ok(Self { pattern })
    }

    pub fn is_match(&self, country: &Country) -> bool {
        self.pattern.is_match(&country.name)
    }

    /// Byte ranges of `text` matched by the search (empty matches skipped)
    pub fn match_ranges(&self, text: &str) -> Vec<Range<usize>> {
        self.pattern
            .find_iter(text)
            .filter(|m| !m.is_empty())
            .map(|m| m.range())
            .collect()
    }

    /// Catalog indices of matching countries, in catalog order
    pub fn apply(&self, catalog: &CountryCatalog) -> Vec<usize> {
        catalog
            .all()
            .iter()
            .enumerate()
            .filter(|(_, country)| self.is_match(country))
            .map(|(index, _)| index)
            .collect()
    }
}

/// Indices of the catalog rows matching `search`; empty search keeps every row
pub fn filter_catalog(catalog: &CountryCatalog, search: &str) -> Result<Vec<usize>> {
    if search.is_empty() {
        return Ok((0..catalog.len()).collect());
    }
    Ok(CountryFilter::new(search)?.apply(catalog))
}

/// Match ranges for highlighting; an invalid or empty search highlights nothing
pub fn highlight_ranges(search: &str, text: &str) -> Vec<Range<usize>> {
    if search.is_empty() {
        return Vec::new();
    }
    CountryFilter::new(search)
        .map(|filter| filter.match_ranges(text))
        .unwrap_or_default()
}
