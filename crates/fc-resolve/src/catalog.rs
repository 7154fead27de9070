//! Definition catalog loading.
//!
//! The catalog is the definition-source collaborator: a TOML document
//! declaring one financial calendar, its holiday definitions in shorthand
//! notation, and the jurisdictions the calendar is produced for.
//!
//! ```toml
//! [calendar]
//! id = "us-federal"
//!
//! [[holidays]]
//! id = "christmas"
//! name = "Christmas Day"
//! rule = "DECEMBER/25"
//!
//! [[banks]]
//! code = "FED"
//! name = "Federal Reserve"
//! country = "US"
//! currency = "USD"
//! ```

use fc_core::errors::{Error, Result};
use fc_expr::{parse, Definition, DefinitionSet};
use fc_market::CentralBank;
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

#[derive(Debug, Deserialize)]
struct CatalogFile {
    calendar: CalendarSection,
    #[serde(default)]
    holidays: Vec<HolidayEntry>,
    #[serde(default)]
    banks: Vec<BankEntry>,
}

#[derive(Debug, Deserialize)]
struct CalendarSection {
    id: String,
}

#[derive(Debug, Deserialize)]
struct HolidayEntry {
    id: String,
    name: String,
    rule: String,
}

#[derive(Debug, Deserialize)]
struct BankEntry {
    code: String,
    name: String,
    country: String,
    currency: String,
}

/// A loaded, validated definition catalog.
#[derive(Debug)]
pub struct Catalog {
    calendar_id: String,
    definitions: DefinitionSet,
    banks: Vec<CentralBank>,
}

impl Catalog {
    /// Parse a catalog from TOML text.
    ///
    /// Every rule is parsed with the shorthand parser, jurisdictions are
    /// validated at construction, and the reference graph is checked before
    /// the catalog is returned, so a `Catalog` value is always evaluatable.
    ///
    /// # Errors
    /// `Error::Catalog` for malformed TOML; parse, jurisdiction, and
    /// reference-graph errors surface unchanged.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let file: CatalogFile = toml::from_str(text).map_err(|e| Error::Catalog(e.to_string()))?;
        let mut definitions = DefinitionSet::new();
        for entry in file.holidays {
            let rule = parse(&entry.rule)?;
            definitions.insert(Definition::new(entry.id, entry.name, rule)?)?;
        }
        definitions.validate()?;
        let banks = file
            .banks
            .into_iter()
            .map(|b| CentralBank::new(b.code, b.name, &b.country, &b.currency))
            .collect::<Result<Vec<_>>>()?;
        debug!(
            calendar = %file.calendar.id,
            definitions = definitions.len(),
            banks = banks.len(),
            "loaded holiday catalog"
        );
        Ok(Self {
            calendar_id: file.calendar.id,
            definitions,
            banks,
        })
    }

    /// Load a catalog from a TOML file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// The financial-calendar id the catalog defines.
    pub fn calendar_id(&self) -> &str {
        &self.calendar_id
    }

    /// The holiday definitions.
    pub fn definitions(&self) -> &DefinitionSet {
        &self.definitions
    }

    /// The jurisdictions this calendar is produced for.
    pub fn banks(&self) -> &[CentralBank] {
        &self.banks
    }

    /// Find a jurisdiction by bank code.
    pub fn bank(&self, code: &str) -> Option<&CentralBank> {
        self.banks.iter().find(|b| b.code() == code)
    }

    /// Split the catalog into its parts.
    pub fn into_parts(self) -> (String, DefinitionSet, Vec<CentralBank>) {
        (self.calendar_id, self.definitions, self.banks)
    }
}
