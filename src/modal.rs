use crate::Result;
use crate::materialize::Modal;
use crate::utils::{add_click_listener, get_element_by_id, query_selector_all, set_attribute};
use js_sys::Object;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlTextAreaElement};

const EDIT_REVIEW_MODAL_ID: &str = "edit-review";
const EDIT_DEAL_MODAL_ID: &str = "edit-deal";

/// Attach a click handler to every modal trigger on the page. A trigger
/// links to its dialog through `href="#<modal-id>"` and may carry `data-id`
/// and `data-text` attributes used to pre-fill the dialog.
pub fn bind_modal_triggers(document: &Document) -> Result<()> {
    let triggers = query_selector_all(document, ".modal-trigger")?;
    for index in 0..triggers.length() {
        let Some(node) = triggers.item(index) else {
            continue;
        };
        let trigger = node.dyn_into::<Element>()?;

        let document = document.clone();
        let handler_trigger = trigger.clone();
        add_click_listener(&trigger, move |event: Event| {
            event.prevent_default();
            let Some(href) = handler_trigger.get_attribute("href") else {
                return;
            };
            open_modal(&document, modal_id_from_href(&href), &handler_trigger);
        })?;
    }
    Ok(())
}

pub fn modal_id_from_href(href: &str) -> &str {
    href.strip_prefix('#').unwrap_or(href)
}

/// Open the dialog with the given id and pre-fill its fields from the
/// trigger. A missing dialog is logged and ignored, since triggers and
/// dialogs are rendered by different templates.
pub fn open_modal(document: &Document, modal_id: &str, trigger: &Element) {
    let Some(modal) = get_element_by_id(document, modal_id) else {
        log::error!("Modal `{modal_id}` not found");
        return;
    };

    Modal::init(&modal, &Object::new()).open();

    let populated = match modal_id {
        EDIT_REVIEW_MODAL_ID => populate_edit_review(document, trigger),
        EDIT_DEAL_MODAL_ID => populate_edit_deal(document, trigger),
        _ => Ok(()),
    };
    if let Err(error) = populated {
        log::error!("Couldn't populate modal `{modal_id}`: {error:?}");
    }
}

fn populate_edit_review(document: &Document, trigger: &Element) -> Result<()> {
    if let (Some(review_id), Some(form)) = (
        trigger.get_attribute("data-id"),
        get_element_by_id(document, "edit-review-form"),
    ) {
        set_attribute(&form, "action", &edit_review_action(&review_id))?;
    }
    if let (Some(review_text), Some(field)) = (
        trigger.get_attribute("data-text"),
        get_element_by_id(document, "edit-review-text"),
    ) {
        field.dyn_into::<HtmlTextAreaElement>()?.set_value(&review_text);
    }
    Ok(())
}

// The deal text lands in the placeholder, not the value: deals are re-entered
// from scratch and the old text is only shown as a hint.
fn populate_edit_deal(document: &Document, trigger: &Element) -> Result<()> {
    if let (Some(deal_id), Some(form)) = (
        trigger.get_attribute("data-id"),
        get_element_by_id(document, "edit-deal-form"),
    ) {
        set_attribute(&form, "action", &edit_deal_action(&deal_id))?;
    }
    if let (Some(deal_text), Some(field)) = (
        trigger.get_attribute("data-text"),
        get_element_by_id(document, "edit-deal-text"),
    ) {
        set_attribute(&field, "placeholder", &deal_text)?;
    }
    Ok(())
}

pub fn edit_review_action(review_id: &str) -> String {
    format!("/edit_review/{review_id}")
}

pub fn edit_deal_action(deal_id: &str) -> String {
    format!("/edit_promo/{deal_id}")
}
