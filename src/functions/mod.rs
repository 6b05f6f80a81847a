//! Functiecatalogus: de vaste tabel met vervormingsfuncties en de registry
//! die ze op sleutel opzoekt.

use std::collections::HashMap;
use std::sync::OnceLock;

use serde::Serialize;

pub mod params;
pub mod schema;
pub mod surfaces;

pub use params::ParameterValues;
pub use schema::{MAX_PARAMETERS, ParameterExport, ParameterSchema, ParameterSpec};
pub use surfaces::{Coefficients, FunctionKind};

/// Maximale bewerkingsafstand voor een "bedoelde je"-suggestie.
const SUGGESTION_DISTANCE: usize = 3;

/// Fouttype voor opzoekingen in de catalogus.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("unknown function key `{key}`{}", suggestion_suffix(.suggestion))]
    UnknownFunctionKey {
        key: String,
        suggestion: Option<&'static str>,
    },
}

/// Een benoemde vervormingsfunctie.
///
/// `key` is de enige duurzame identifier; `name` dient alleen voor weergave.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FunctionDefinition {
    pub key: &'static str,
    pub name: &'static str,
    pub kind: FunctionKind,
    pub schema: ParameterSchema,
}

impl FunctionDefinition {
    #[must_use]
    pub fn summary(&self) -> FunctionSummary {
        FunctionSummary {
            key: self.key,
            name: self.name,
        }
    }
}

/// Menu-item voor de UI-laag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FunctionSummary {
    pub key: &'static str,
    pub name: &'static str,
}

/// Registry die catalogusfuncties op sleutel opzoekt.
///
/// Wordt eenmalig opgebouwd uit [`surfaces::REGISTRATIONS`] en daarna nooit gewijzigd.
#[derive(Debug)]
pub struct FunctionCatalog {
    entries: &'static [FunctionDefinition],
    by_key: HashMap<&'static str, usize>,
}

impl FunctionCatalog {
    fn new(entries: &'static [FunctionDefinition]) -> Self {
        let mut by_key = HashMap::with_capacity(entries.len());
        for (index, definition) in entries.iter().enumerate() {
            let previous = by_key.insert(definition.key, index);
            debug_assert!(previous.is_none(), "dubbele functiesleutel `{}`", definition.key);
        }
        Self { entries, by_key }
    }

    pub fn lookup(&self, key: &str) -> Result<&'static FunctionDefinition, CatalogError> {
        match self.by_key.get(key) {
            Some(&index) => Ok(&self.entries[index]),
            None => Err(CatalogError::UnknownFunctionKey {
                key: key.to_owned(),
                suggestion: closest_match(key, self.entries.iter().map(|d| d.key)),
            }),
        }
    }

    /// Alle functies in de vaste menuvolgorde.
    #[must_use]
    pub fn list_all(&self) -> &'static [FunctionDefinition] {
        self.entries
    }

    pub fn schema_for(&self, key: &str) -> Result<ParameterSchema, CatalogError> {
        self.lookup(key).map(|definition| definition.schema)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// De procesbrede catalogus.
pub fn catalog() -> &'static FunctionCatalog {
    static CATALOG: OnceLock<FunctionCatalog> = OnceLock::new();
    CATALOG.get_or_init(|| FunctionCatalog::new(surfaces::REGISTRATIONS))
}

/// Dichtstbijzijnde kandidaat binnen [`SUGGESTION_DISTANCE`], hoofdletterongevoelig.
pub(crate) fn closest_match(
    input: &str,
    candidates: impl Iterator<Item = &'static str>,
) -> Option<&'static str> {
    let needle = input.trim().to_lowercase();
    candidates
        .map(|candidate| {
            (
                levenshtein::levenshtein(&needle, &candidate.to_lowercase()),
                candidate,
            )
        })
        .filter(|(distance, _)| *distance <= SUGGESTION_DISTANCE)
        .min_by_key(|(distance, _)| *distance)
        .map(|(_, candidate)| candidate)
}

pub(crate) fn suggestion_suffix(suggestion: &Option<&str>) -> String {
    suggestion
        .as_ref()
        .map(|candidate| format!(" (did you mean `{candidate}`?)"))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::{CatalogError, catalog};

    #[test]
    fn keys_are_unique_and_resolve_to_themselves() {
        let catalog = catalog();
        let mut seen = HashSet::new();
        for definition in catalog.list_all() {
            assert!(seen.insert(definition.key), "dubbel: {}", definition.key);
            let found = catalog.lookup(definition.key).expect("key resolves");
            assert!(std::ptr::eq(found, definition));
        }
        assert_eq!(catalog.len(), 20);
    }

    #[test]
    fn list_all_keeps_menu_order() {
        let keys: Vec<&str> = catalog().list_all().iter().map(|d| d.key).collect();
        assert_eq!(keys.first(), Some(&"sineRidge"));
        assert_eq!(keys[8], "noisyOrganism");
        assert_eq!(keys.last(), Some(&"wiggler"));
    }

    #[test]
    fn declared_parameters_are_well_formed() {
        for definition in catalog().list_all() {
            for spec in definition.schema.iter() {
                assert!(spec.min <= spec.default_value, "{}.{}", definition.key, spec.name);
                assert!(spec.default_value <= spec.max, "{}.{}", definition.key, spec.name);
                assert!(spec.step > 0.0, "{}.{}", definition.key, spec.name);
            }
        }
    }

    #[test]
    fn unknown_key_suggests_close_match() {
        let err = catalog().lookup("sineridge ").unwrap_err();
        assert_eq!(
            err,
            CatalogError::UnknownFunctionKey {
                key: "sineridge ".to_owned(),
                suggestion: Some("sineRidge"),
            }
        );
        assert!(err.to_string().contains("did you mean `sineRidge`"));
    }

    #[test]
    fn unknown_key_without_candidate() {
        let err = catalog().lookup("doesNotExist").unwrap_err();
        assert_eq!(err.to_string(), "unknown function key `doesNotExist`");
    }

    #[test]
    fn schema_for_returns_declared_names() {
        assert_eq!(catalog().schema_for("organicWeb").unwrap().names(), ["a", "b", "c"]);
        assert!(catalog().schema_for("tunnel").unwrap().is_empty());
        assert!(catalog().schema_for("nope").is_err());
    }
}
