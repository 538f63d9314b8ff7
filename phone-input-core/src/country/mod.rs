//! Country metadata and the process-wide country catalog

mod table;

use serde::Serialize;
use std::sync::{Arc, LazyLock};

/// ISO 3166-1 assignment status of a table row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Assigned,
    Reserved,
    Deleted,
}

/// A country with its alpha-2 code and international calling codes
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Country {
    pub name: String,
    pub alpha2: String,
    /// Calling codes, digits only; the first one is the primary code
    pub calling_codes: Vec<String>,
}

impl Country {
    pub fn new(
        name: impl Into<String>,
        alpha2: impl Into<String>,
        calling_codes: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            name: name.into(),
            alpha2: alpha2.into(),
            calling_codes: calling_codes.into_iter().map(Into::into).collect(),
        }
    }

    /// Sentinel used when no country is detected or selected
    pub fn unknown() -> Self {
        Self {
            name: String::new(),
            alpha2: String::new(),
            calling_codes: vec![String::new()],
        }
    }

    pub fn is_unknown(&self) -> bool {
        self.alpha2.is_empty()
    }

    /// First calling code, or `""` for the unknown country
    pub fn primary_calling_code(&self) -> &str {
        self.calling_codes.first().map(String::as_str).unwrap_or("")
    }

    /// The calling code as it appears in the field, e.g. `(44)`
    pub fn calling_code_label(&self) -> String {
        format!("({})", self.primary_calling_code())
    }

    /// Flag emoji built from regional indicator symbols, a globe when unknown
    pub fn flag(&self) -> String {
        const REGIONAL_INDICATOR_A: u32 = 0x1F1E6;

        let letters: Vec<char> = self.alpha2.chars().collect();
        if letters.len() != 2 || !letters.iter().all(char::is_ascii_alphabetic) {
            return "\u{1F310}".to_string();
        }
        letters
            .iter()
            .filter_map(|c| {
                char::from_u32(REGIONAL_INDICATOR_A + (c.to_ascii_uppercase() as u32 - 'A' as u32))
            })
            .collect()
    }
}

impl Default for Country {
    fn default() -> Self {
        Self::unknown()
    }
}

static GLOBAL_CATALOG: LazyLock<Arc<CountryCatalog>> = LazyLock::new(|| {
    let catalog = CountryCatalog::load();
    tracing::debug!(countries = catalog.len(), "Country catalog loaded");
    Arc::new(catalog)
});

/// Every assigned country that has a calling code, sorted by name
///
/// Built once and shared between widget instances; never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountryCatalog {
    countries: Vec<Country>,
}

impl CountryCatalog {
    /// Build the catalog from the bundled ISO table
    pub fn load() -> Self {
        Self::from_countries(
            table::COUNTRIES
                .iter()
                .filter(|(_, _, status, codes)| {
                    *status == Status::Assigned && codes.iter().any(|c| !c.is_empty())
                })
                .map(|(name, alpha2, _, codes)| Country::new(*name, *alpha2, codes.iter().copied())),
        )
    }

    /// The process-wide catalog, loaded on first use
    pub fn global() -> Arc<CountryCatalog> {
        Arc::clone(&GLOBAL_CATALOG)
    }

    /// Build a catalog from arbitrary countries (sorted by name)
    pub fn from_countries(countries: impl IntoIterator<Item = Country>) -> Self {
        let mut countries: Vec<Country> = countries.into_iter().collect();
        countries.sort_by(|a, b| a.name.cmp(&b.name));
        Self { countries }
    }

    pub fn all(&self) -> &[Country] {
        &self.countries
    }

    pub fn get(&self, index: usize) -> Option<&Country> {
        self.countries.get(index)
    }

    pub fn len(&self) -> usize {
        self.countries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }

    /// Find a country by alpha-2 code (case-insensitive)
    pub fn lookup(&self, alpha2: &str) -> Option<&Country> {
        if alpha2.is_empty() {
            return None;
        }
        self.countries
            .iter()
            .find(|c| c.alpha2.eq_ignore_ascii_case(alpha2))
    }

    /// Like [`lookup`](Self::lookup) but falls back to [`Country::unknown`]
    pub fn lookup_or_unknown(&self, alpha2: Option<&str>) -> Country {
        alpha2
            .and_then(|code| self.lookup(code))
            .cloned()
            .unwrap_or_else(Country::unknown)
    }
}
