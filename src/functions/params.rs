//! Actuele parameterwaarden, geadresseerd op parameternaam.

use std::collections::BTreeMap;

use serde::Serialize;

/// Mapping van parameternaam naar de huidige instelling.
///
/// De evaluatie-engine eist dat elke naam uit het actieve schema aanwezig is;
/// niet-gedeclareerde extra namen worden genegeerd.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ParameterValues {
    values: BTreeMap<String, f64>,
}

impl ParameterValues {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Voeg een waarde toe of overschrijf een bestaande; geeft de vorige waarde terug.
    pub fn insert(&mut self, name: impl Into<String>, value: f64) -> Option<f64> {
        self.values.insert(name.into(), value)
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<f64> {
        self.values.get(name).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.values.iter().map(|(name, value)| (name.as_str(), *value))
    }
}

impl<S: Into<String>> FromIterator<(S, f64)> for ParameterValues {
    fn from_iter<I: IntoIterator<Item = (S, f64)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(name, value)| (name.into(), value))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ParameterValues;

    #[test]
    fn insert_replaces_single_entry() {
        let mut values: ParameterValues = [("a", 1.0), ("b", 2.0)].into_iter().collect();
        assert_eq!(values.insert("a", 3.0), Some(1.0));
        assert_eq!(values.get("a"), Some(3.0));
        assert_eq!(values.get("b"), Some(2.0));
        assert_eq!(values.len(), 2);
    }

    #[test]
    fn iterates_in_name_order() {
        let values: ParameterValues = [("c", 3.0), ("a", 1.0), ("b", 2.0)].into_iter().collect();
        let names: Vec<&str> = values.iter().map(|(name, _)| name).collect();
        assert_eq!(names, ["a", "b", "c"]);
    }
}
