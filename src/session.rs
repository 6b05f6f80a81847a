//! Selectiestatus: welke functie actief is en met welke parameterwaarden.
//!
//! Eén schrijver (de UI-eventlaag), lezers krijgen per frame een [`FrameSnapshot`].

use crate::eval::{self, BoundFunction, EvalError};
use crate::functions::{
    CatalogError, FunctionDefinition, ParameterValues, catalog, closest_match, suggestion_suffix,
};

/// Sleutel die bij het opstarten geselecteerd is.
pub const DEFAULT_FUNCTION_KEY: &str = "sineRidge";

/// Fouttype voor mutaties van de selectiestatus.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectionError {
    #[error(transparent)]
    UnknownFunctionKey(#[from] CatalogError),
    #[error(
        "function `{key}` has no parameter `{name}`{}",
        suggestion_suffix(.suggestion)
    )]
    UnknownParameter {
        key: &'static str,
        name: String,
        suggestion: Option<&'static str>,
    },
    #[error("parameter `{name}` cannot be set to NaN")]
    NanValue { name: &'static str },
}

/// Onveranderlijke kopie van de selectie voor één frame.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameSnapshot {
    pub definition: &'static FunctionDefinition,
    pub params: ParameterValues,
}

impl FrameSnapshot {
    pub fn bind(&self) -> Result<BoundFunction, EvalError> {
        eval::bind(self.definition, &self.params)
    }
}

/// De enige muteerbare status van het subsysteem.
///
/// Sleutel en parameters worden altijd samen vervangen, zodat een lezer nooit
/// de nieuwe sleutel met de oude parameterset ziet.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionState {
    active: FrameSnapshot,
}

impl Default for SelectionState {
    fn default() -> Self {
        Self::new()
    }
}

impl SelectionState {
    #[must_use]
    pub fn new() -> Self {
        let definition = catalog()
            .list_all()
            .iter()
            .find(|definition| definition.key == DEFAULT_FUNCTION_KEY)
            .unwrap_or(&catalog().list_all()[0]);
        Self {
            active: seeded(definition),
        }
    }

    /// Activeer `key` en zet alle parameters terug naar de schemastandaarden.
    ///
    /// Bij een onbekende sleutel blijft de vorige selectie ongewijzigd.
    pub fn select_function(&mut self, key: &str) -> Result<(), SelectionError> {
        let definition = catalog().lookup(key)?;
        self.active = seeded(definition);
        log::debug!(
            "functie `{}` geselecteerd met {} parameter(s)",
            definition.key,
            definition.schema.len()
        );
        Ok(())
    }

    /// Zet een enkele parameter; waarden buiten `[min, max]` worden begrensd.
    ///
    /// Geeft de opgeslagen waarde terug. Er wordt niet op `step` afgerond.
    pub fn set_parameter(&mut self, name: &str, value: f64) -> Result<f64, SelectionError> {
        let definition = self.active.definition;
        let Some(spec) = definition.schema.get(name) else {
            return Err(SelectionError::UnknownParameter {
                key: definition.key,
                name: name.to_owned(),
                suggestion: closest_match(name, definition.schema.iter().map(|spec| spec.name)),
            });
        };

        if value.is_nan() {
            return Err(SelectionError::NanValue { name: spec.name });
        }

        let clamped = spec.clamp(value);
        if clamped != value {
            log::debug!(
                "parameter `{}` begrensd van {value} naar {clamped} ([{}, {}])",
                spec.name,
                spec.min,
                spec.max
            );
        }

        self.active.params.insert(spec.name, clamped);
        Ok(clamped)
    }

    #[must_use]
    pub fn current_key(&self) -> &'static str {
        self.active.definition.key
    }

    #[must_use]
    pub fn current_definition(&self) -> &'static FunctionDefinition {
        self.active.definition
    }

    #[must_use]
    pub fn current_params(&self) -> &ParameterValues {
        &self.active.params
    }

    /// Kopie voor de renderlus; lees per frame alleen hieruit.
    #[must_use]
    pub fn snapshot(&self) -> FrameSnapshot {
        self.active.clone()
    }
}

fn seeded(definition: &'static FunctionDefinition) -> FrameSnapshot {
    FrameSnapshot {
        definition,
        params: definition.schema.defaults(),
    }
}
