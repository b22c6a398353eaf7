use crate::Result;
use crate::error::{DEFAULT_ERROR_MESSAGE, Error};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element, Event, HtmlElement, NodeList, Storage, Window};

pub fn set_panic_hook() {
    // When the `console_error_panic_hook` feature is enabled, we can call the
    // `set_panic_hook` function at least once during initialization, and then
    // we will get better error messages if our code ever panics.
    //
    // For more details see
    // https://github.com/rustwasm/console_error_panic_hook#readme
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

pub fn get_window() -> Result<Window> {
    web_sys::window().ok_or_else(|| {
        Error::new(
            DEFAULT_ERROR_MESSAGE.to_owned(),
            "no global `window` exists".to_owned(),
        )
    })
}

pub fn get_document() -> Result<Document> {
    get_window()?.document().ok_or_else(|| {
        Error::new(
            DEFAULT_ERROR_MESSAGE.to_owned(),
            "window should have a document".to_owned(),
        )
    })
}

pub fn get_body() -> Result<HtmlElement> {
    get_document()?.body().ok_or_else(|| {
        Error::new(
            DEFAULT_ERROR_MESSAGE.to_owned(),
            "document should have a body".to_owned(),
        )
    })
}

/// Templates differ between pages, so a missing element is never an error.
pub fn get_element_by_id(document: &Document, id: &str) -> Option<Element> {
    document.get_element_by_id(id)
}

pub fn query_selector(document: &Document, selector: &str) -> Result<Option<Element>> {
    Ok(document.query_selector(selector)?)
}

pub fn query_selector_all(document: &Document, selector: &str) -> Result<NodeList> {
    Ok(document.query_selector_all(selector)?)
}

pub fn set_attribute(element: &Element, name: &str, value: &str) -> Result<()> {
    Ok(element.set_attribute(name, value)?)
}

pub fn set_style(element: &Element, property: &str, value: &str) -> Result<()> {
    let element = element.clone().dyn_into::<HtmlElement>()?;
    element.style().set_property(property, value)?;
    Ok(())
}

pub fn session_storage() -> Result<Option<Storage>> {
    Ok(get_window()?.session_storage()?)
}

pub fn add_click_listener<F>(target: &Element, callback: F) -> Result<()>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::wrap(Box::new(callback) as Box<dyn FnMut(_)>);
    target.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
    // Listeners live as long as the page.
    closure.forget();
    Ok(())
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn should_get_window() {
        assert!(get_window().is_ok());
    }

    #[wasm_bindgen_test]
    fn should_set_style_on_element() {
        let document = get_document().unwrap();
        let element = document.create_element("div").unwrap();
        set_style(&element, "display", "block").unwrap();

        let element = element.dyn_into::<HtmlElement>().unwrap();
        assert_eq!(element.style().get_property_value("display").unwrap(), "block");
    }
}
