//! Parameterschema's: per functie de instelbare coëfficiënten met hun grenzen.

use std::collections::BTreeMap;

use serde::Serialize;

use super::params::ParameterValues;

/// Maximaal aantal parameters dat een catalogusfunctie kan declareren.
///
/// Schema-entry `i` wordt bij evaluatie in coëfficiëntslot `i` geplaatst.
pub const MAX_PARAMETERS: usize = 3;

/// Metadata van een enkele parameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParameterSpec {
    pub name: &'static str,
    pub default_value: f64,
    pub min: f64,
    pub max: f64,
    /// Stapgrootte waarop een UI-control mag snappen; wordt hier niet afgedwongen.
    pub step: f64,
    pub label: &'static str,
}

impl ParameterSpec {
    /// Begrens `value` tot `[min, max]`.
    #[must_use]
    pub fn clamp(&self, value: f64) -> f64 {
        value.max(self.min).min(self.max)
    }

    #[must_use]
    pub fn export(&self) -> ParameterExport {
        ParameterExport {
            value: self.default_value,
            min: self.min,
            max: self.max,
            step: self.step,
            label: self.label,
        }
    }
}

/// Vorm waarin een parameter naar de UI-laag gaat.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ParameterExport {
    pub value: f64,
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub label: &'static str,
}

/// Geordende, statische verzameling parameterdefinities van een functie.
///
/// Een leeg schema betekent dat de functie alleen van `(x, y)` afhangt.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParameterSchema {
    specs: &'static [ParameterSpec],
}

impl ParameterSchema {
    pub const EMPTY: Self = Self { specs: &[] };

    #[must_use]
    pub const fn new(specs: &'static [ParameterSpec]) -> Self {
        Self { specs }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'static, ParameterSpec> {
        self.specs.iter()
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&'static ParameterSpec> {
        self.specs.iter().find(|spec| spec.name == name)
    }

    #[must_use]
    pub fn names(&self) -> Vec<&'static str> {
        self.specs.iter().map(|spec| spec.name).collect()
    }

    /// Naam → `{ value, min, max, step, label }` voor het genereren van controls.
    #[must_use]
    pub fn export(&self) -> BTreeMap<&'static str, ParameterExport> {
        self.specs
            .iter()
            .map(|spec| (spec.name, spec.export()))
            .collect()
    }

    /// Parameterwaarden gevuld met de standaardwaarden van dit schema.
    #[must_use]
    pub fn defaults(&self) -> ParameterValues {
        self.specs
            .iter()
            .map(|spec| (spec.name, spec.default_value))
            .collect()
    }
}

/// Het gangbare `a`/`b` schema van de meeste functies.
pub const UNIT_AB: ParameterSchema = ParameterSchema::new(&[
    ParameterSpec {
        name: "a",
        default_value: 1.0,
        min: 0.1,
        max: 5.0,
        step: 0.01,
        label: "A",
    },
    ParameterSpec {
        name: "b",
        default_value: 1.0,
        min: 0.1,
        max: 5.0,
        step: 0.01,
        label: "B",
    },
]);
