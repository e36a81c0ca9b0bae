//! WebAssembly bindings.
//!
//! The columnar arrays are handed to JavaScript as typed-array copies; the
//! borrowed slices of [`SimulationBox`] cannot cross the boundary.

use wasm_bindgen::prelude::*;

use crate::io::{ParseOptions, TiltPolicy, parse_with};
use crate::model::simbox::SimulationBox;

#[wasm_bindgen]
pub struct WasmSimulationBox {
    inner: SimulationBox,
}

#[wasm_bindgen]
impl WasmSimulationBox {
    /// Parses the text of a data file. Throws with the parse error message.
    #[wasm_bindgen(constructor)]
    pub fn new(content: &str, optional_tilt: Option<bool>) -> Result<WasmSimulationBox, JsError> {
        let tilt = if optional_tilt.unwrap_or(false) {
            TiltPolicy::Optional
        } else {
            TiltPolicy::Required
        };
        let inner = parse_with(content, &ParseOptions::default().tilt(tilt))?;
        Ok(WasmSimulationBox { inner })
    }

    #[wasm_bindgen(getter, js_name = numAtoms)]
    pub fn num_atoms(&self) -> usize {
        self.inner.num_atoms()
    }

    #[wasm_bindgen(getter, js_name = numAtomTypes)]
    pub fn num_atom_types(&self) -> usize {
        self.inner.num_atom_types()
    }

    #[wasm_bindgen(getter)]
    pub fn xlo(&self) -> f32 {
        self.inner.xlo()
    }

    #[wasm_bindgen(getter)]
    pub fn xhi(&self) -> f32 {
        self.inner.xhi()
    }

    #[wasm_bindgen(getter)]
    pub fn ylo(&self) -> f32 {
        self.inner.ylo()
    }

    #[wasm_bindgen(getter)]
    pub fn yhi(&self) -> f32 {
        self.inner.yhi()
    }

    #[wasm_bindgen(getter)]
    pub fn zlo(&self) -> f32 {
        self.inner.zlo()
    }

    #[wasm_bindgen(getter)]
    pub fn zhi(&self) -> f32 {
        self.inner.zhi()
    }

    #[wasm_bindgen(getter)]
    pub fn xy(&self) -> f32 {
        self.inner.xy()
    }

    #[wasm_bindgen(getter)]
    pub fn xz(&self) -> f32 {
        self.inner.xz()
    }

    #[wasm_bindgen(getter)]
    pub fn yz(&self) -> f32 {
        self.inner.yz()
    }

    /// `"atomic"` or `"molecular"`.
    #[wasm_bindgen(getter, js_name = atomStyle)]
    pub fn atom_style(&self) -> String {
        self.inner.atom_style().to_string()
    }

    /// True when the file did not name a recognized style.
    #[wasm_bindgen(getter, js_name = styleDefaulted)]
    pub fn style_defaulted(&self) -> bool {
        self.inner.style_declaration().is_defaulted()
    }

    pub fn ids(&self) -> Vec<i32> {
        self.inner.ids().to_vec()
    }

    pub fn types(&self) -> Vec<i32> {
        self.inner.types().to_vec()
    }

    #[wasm_bindgen(js_name = molIds)]
    pub fn mol_ids(&self) -> Vec<i32> {
        self.inner.mol_ids().to_vec()
    }

    pub fn positions(&self) -> Vec<f32> {
        self.inner.positions().to_vec()
    }
}
