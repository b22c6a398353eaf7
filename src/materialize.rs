//! Bindings to the Materialize widget library, reached through the global
//! `M` object loaded by the page templates.

use crate::Result;
use crate::utils::query_selector_all;
use js_sys::Object;
use wasm_bindgen::JsValue;
use wasm_bindgen::prelude::wasm_bindgen;
use web_sys::{Document, Element, NodeList};

/// Side navigation panels, with the library defaults.
pub fn init_sidenavs(document: &Document) -> Result<()> {
    let elements = query_selector_all(document, ".sidenav")?;
    Sidenav::init(&elements, &Object::new());
    Ok(())
}

/// Native `<select>` elements are hidden and replaced by styled dropdowns.
pub fn init_select_dropdowns(document: &Document) -> Result<()> {
    let elements = query_selector_all(document, "select")?;
    FormSelect::init(&elements, &Object::new());
    Ok(())
}

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = M)]
    type Sidenav;

    #[wasm_bindgen(static_method_of = Sidenav, js_namespace = M)]
    fn init(elements: &NodeList, options: &JsValue);
}

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = M)]
    type FormSelect;

    #[wasm_bindgen(static_method_of = FormSelect, js_namespace = M)]
    fn init(elements: &NodeList, options: &JsValue);
}

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = M)]
    pub type Modal;

    #[wasm_bindgen(static_method_of = Modal, js_namespace = M)]
    pub fn init(element: &Element, options: &JsValue) -> Modal;

    #[wasm_bindgen(method)]
    pub fn open(this: &Modal);
}

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = M)]
    pub type Datepicker;

    #[wasm_bindgen(static_method_of = Datepicker, js_namespace = M)]
    pub fn init(element: &Element, options: &JsValue);
}
