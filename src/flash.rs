use crate::Result;
use crate::timer::Timeout;
use crate::utils::{query_selector, set_style};
use web_sys::Document;

const FLASH_DISMISS_DELAY_MS: i32 = 3000;

/// Flash messages disappear on their own a few seconds after the page loads.
pub fn schedule_flash_dismissal(document: &Document) -> Result<()> {
    let document = document.clone();
    Timeout::schedule(FLASH_DISMISS_DELAY_MS, move || {
        if let Err(error) = dismiss(&document) {
            log::error!("Couldn't dismiss flash messages: {error:?}");
        }
    })?
    .forget();

    Ok(())
}

fn dismiss(document: &Document) -> Result<()> {
    if let Some(messages) = query_selector(document, ".messages")? {
        set_style(&messages, "display", "none")?;
    }
    Ok(())
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use crate::utils::{get_body, get_document};
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;
    use web_sys::HtmlElement;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn should_hide_messages_when_present() {
        let document = get_document().unwrap();
        let messages = document.create_element("div").unwrap();
        messages.set_class_name("messages");
        get_body().unwrap().append_child(&messages).unwrap();

        dismiss(&document).unwrap();

        let messages = messages.dyn_into::<HtmlElement>().unwrap();
        assert_eq!(
            messages.style().get_property_value("display").unwrap(),
            "none"
        );
        messages.remove();
    }

    #[wasm_bindgen_test]
    fn should_do_nothing_without_messages_element() {
        let document = get_document().unwrap();
        dismiss(&document).unwrap();
    }
}
