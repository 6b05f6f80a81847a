//! Evaluatie-engine: berekent hoogtes voor een catalogusfunctie.
//!
//! Parameters worden eenmalig gebonden ([`bind`]) zodat de per-vertex aanroep
//! geen opzoekingen of allocaties meer doet.

use rand::Rng;

use crate::functions::{Coefficients, FunctionDefinition, ParameterValues};

pub mod grid;

/// Amplitude van de ruis die `noisyOrganism` per aanroep optelt.
pub const JITTER_AMPLITUDE: f64 = 0.1;

/// Fouttype voor evaluaties.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EvalError {
    #[error("function `{key}` requires a value for parameter `{parameter}`")]
    MissingParameterValue {
        key: &'static str,
        parameter: &'static str,
    },
}

/// Een functie met opgeloste coëfficiënten, klaar voor herhaalde evaluatie.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundFunction {
    definition: &'static FunctionDefinition,
    coefficients: Coefficients,
}

impl BoundFunction {
    #[must_use]
    pub fn definition(&self) -> &'static FunctionDefinition {
        self.definition
    }

    #[must_use]
    pub fn coefficients(&self) -> Coefficients {
        self.coefficients
    }

    /// Hoogte op `(x, y)`.
    ///
    /// Alleen stochastische functies lezen uit `rng`; alle andere zijn puur.
    /// Niet-eindige resultaten worden niet afgevangen.
    pub fn height<R: Rng + ?Sized>(&self, x: f64, y: f64, rng: &mut R) -> f64 {
        let kind = self.definition.kind;
        let base = kind.height(x, y, &self.coefficients);
        if kind.is_stochastic() {
            base + rng.random_range(-JITTER_AMPLITUDE..=JITTER_AMPLITUDE)
        } else {
            base
        }
    }
}

/// Los de gedeclareerde parameters van `definition` op uit `params`.
///
/// Ontbrekende waarden worden niet aangevuld met standaardwaarden.
pub fn bind(
    definition: &'static FunctionDefinition,
    params: &ParameterValues,
) -> Result<BoundFunction, EvalError> {
    let mut coefficients = Coefficients::default();
    for (slot, spec) in definition.schema.iter().enumerate() {
        coefficients.0[slot] = params.get(spec.name).ok_or(EvalError::MissingParameterValue {
            key: definition.key,
            parameter: spec.name,
        })?;
    }
    Ok(BoundFunction {
        definition,
        coefficients,
    })
}

/// Evalueer met de thread-lokale randomgenerator.
pub fn evaluate(
    definition: &'static FunctionDefinition,
    x: f64,
    y: f64,
    params: &ParameterValues,
) -> Result<f64, EvalError> {
    evaluate_with_rng(definition, x, y, params, &mut rand::rng())
}

pub fn evaluate_with_rng<R: Rng + ?Sized>(
    definition: &'static FunctionDefinition,
    x: f64,
    y: f64,
    params: &ParameterValues,
    rng: &mut R,
) -> Result<f64, EvalError> {
    Ok(bind(definition, params)?.height(x, y, rng))
}
