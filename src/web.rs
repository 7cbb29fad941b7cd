// src/web.rs
//
// Entrée WEB (WASM) : expose la calculatrice à l’UI JS.
//
// Côté JS :
//   const calc = new Calculatrice();
//   calc.setMode("infix");
//   calc.evaluate("( 1 + ( 2 * 3 ) )"); // 7, ou exception (message texte)

use wasm_bindgen::prelude::wasm_bindgen;
use wasm_bindgen::JsValue;

use crate::noyau;

#[wasm_bindgen]
pub struct Calculatrice {
    inner: noyau::Calculatrice,
}

#[wasm_bindgen]
impl Calculatrice {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            inner: noyau::Calculatrice::new(),
        }
    }

    /// "prefix" ou "infix" (non vérifié ici, comme côté natif).
    #[wasm_bindgen(js_name = setMode)]
    pub fn set_mode(&mut self, mode: &str) {
        self.inner.set_mode(mode);
    }

    /// Mode courant, tel que demandé.
    #[wasm_bindgen(getter)]
    pub fn mode(&self) -> String {
        self.inner.mode_demande().to_string()
    }

    pub fn evaluate(&self, entree: &str) -> Result<f64, JsValue> {
        self.inner
            .evaluate(entree)
            .map_err(|e| js_err(&e.to_string()))
    }
}

impl Default for Calculatrice {
    fn default() -> Self {
        Self::new()
    }
}

fn js_err(msg: &str) -> JsValue {
    JsValue::from_str(msg)
}
