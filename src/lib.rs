#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod eval;
pub mod functions;
pub mod session;

use std::fmt;

use eval::grid::{self, GridSpec};
use functions::{FunctionSummary, catalog};
use session::SelectionState;
use wasm_bindgen::JsError;
use wasm_bindgen::prelude::*;

cfg_if::cfg_if! {
    if #[cfg(all(feature = "console_error_panic_hook", target_arch = "wasm32"))] {
        #[wasm_bindgen(start)]
        pub fn initialize() {
            console_error_panic_hook::set_once();
            init_logger();
        }
    } else {
        #[wasm_bindgen(start)]
        pub fn initialize() {
            // no-op fallback when panic hook is disabled
            init_logger();
        }
    }
}

#[cfg(feature = "debug_logs")]
fn init_logger() {
    use log::LevelFilter;
    use wasm_bindgen_console_logger::DEFAULT_LOGGER;
    if log::set_logger(&DEFAULT_LOGGER).is_ok() {
        log::set_max_level(LevelFilter::Debug);
    }
}

#[cfg(not(feature = "debug_logs"))]
fn init_logger() {
    // no-op fallback when debug logs are disabled
}

#[cfg(all(feature = "parallel", target_arch = "wasm32"))]
#[wasm_bindgen]
pub async fn initialize_parallel(worker_count: Option<u32>) -> Result<(), JsError> {
    let threads = worker_count
        .map(|count| count.max(1) as usize)
        .or_else(|| {
            std::thread::available_parallelism()
                .map(|value| value.get())
                .ok()
        })
        .unwrap_or(1);

    wasm_bindgen_rayon::init_thread_pool(threads)
        .await
        .map_err(|err| JsError::new(&format!("kon rayon threadpool niet initialiseren: {err}")))
}

/// Publieke ingang voor de renderer en de UI-laag.
#[wasm_bindgen]
pub struct Engine {
    selection: SelectionState,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl Engine {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Engine {
        Engine {
            selection: SelectionState::new(),
        }
    }

    /// Alle functies als `{ key, name }` in menuvolgorde.
    #[wasm_bindgen]
    pub fn list_functions(&self) -> Result<JsValue, JsValue> {
        let summaries: Vec<FunctionSummary> = catalog()
            .list_all()
            .iter()
            .map(functions::FunctionDefinition::summary)
            .collect();
        serde_wasm_bindgen::to_value(&summaries).map_err(|err| JsError::new(&err.to_string()).into())
    }

    /// Parameterschema van `key` voor het genereren van sliders.
    #[wasm_bindgen]
    pub fn schema_for(&self, key: &str) -> Result<JsValue, JsValue> {
        let schema = catalog().schema_for(key).map_err(to_js_error)?;
        serde_wasm_bindgen::to_value(&schema.export())
            .map_err(|err| JsError::new(&err.to_string()).into())
    }

    #[wasm_bindgen]
    pub fn current_key(&self) -> String {
        self.selection.current_key().to_owned()
    }

    #[wasm_bindgen]
    pub fn current_params(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(self.selection.current_params())
            .map_err(|err| JsError::new(&err.to_string()).into())
    }

    #[wasm_bindgen]
    pub fn select_function(&mut self, key: &str) -> Result<(), JsValue> {
        self.selection.select_function(key).map_err(to_js_error)
    }

    /// Stel een parameter in; geeft de (begrensde) opgeslagen waarde terug.
    #[wasm_bindgen]
    pub fn set_parameter(&mut self, name: &str, value: f64) -> Result<f64, JsValue> {
        self.selection.set_parameter(name, value).map_err(to_js_error)
    }

    /// Hoogte van de actieve functie op één punt.
    #[wasm_bindgen]
    pub fn height_at(&self, x: f64, y: f64) -> Result<f64, JsValue> {
        eval::evaluate(
            self.selection.current_definition(),
            x,
            y,
            self.selection.current_params(),
        )
        .map_err(to_js_error)
    }

    /// Bemonster de actieve functie over een raster; `spec` is `{ extent?, resolution? }`.
    #[wasm_bindgen]
    pub fn sample_grid(&self, spec: JsValue) -> Result<JsValue, JsValue> {
        let spec: GridSpec = if spec.is_undefined() || spec.is_null() {
            GridSpec::default()
        } else {
            serde_wasm_bindgen::from_value(spec).map_err(|err| JsError::new(&err.to_string()))?
        };
        let field = grid::sample_grid(&self.selection.snapshot(), &spec).map_err(to_js_error)?;
        serde_wasm_bindgen::to_value(&field).map_err(|err| JsError::new(&err.to_string()).into())
    }
}

impl Engine {
    /// Toegang tot de selectiestatus voor Rust-consumenten.
    #[must_use]
    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }
}

fn to_js_error<E: fmt::Display>(error: E) -> JsValue {
    js_error(&error.to_string())
}

fn js_error(message: &str) -> JsValue {
    #[cfg(target_arch = "wasm32")]
    {
        JsError::new(message).into()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = message;
        JsValue::NULL
    }
}

#[cfg(test)]
mod tests {
    use super::Engine;

    #[test]
    fn engine_starts_on_default_function() {
        let engine = Engine::new();
        assert_eq!(engine.current_key(), "sineRidge");
    }

    #[test]
    fn engine_forwards_mutations() {
        let mut engine = Engine::new();
        assert!(engine.select_function("eggCrate").is_ok());
        assert!(engine.select_function("onbekend").is_err());
        assert_eq!(engine.current_key(), "eggCrate");
        assert_eq!(engine.set_parameter("b", 99.0).ok(), Some(5.0));
        assert!(engine.set_parameter("z", 1.0).is_err());
    }

    #[test]
    fn height_at_uses_current_selection() {
        let mut engine = Engine::new();
        engine.select_function("eggCrate").unwrap();
        assert_eq!(engine.height_at(0.0, 0.0).ok(), Some(1.0));
    }

    #[test]
    fn height_at_reads_live_parameters() {
        let mut engine = Engine::new();
        let (x, y) = (0.8_f64, 0.3_f64);
        assert_eq!(engine.height_at(x, y).ok(), Some(x.sin() * y.cos()));

        assert_eq!(engine.set_parameter("a", 2.0).ok(), Some(2.0));
        let expected = crate::eval::evaluate(
            engine.selection().current_definition(),
            x,
            y,
            engine.selection().current_params(),
        )
        .unwrap();
        assert_eq!(engine.height_at(x, y).ok(), Some(expected));
        assert_eq!(expected, (2.0 * x).sin() * y.cos());
    }
}
