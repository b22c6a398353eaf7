use crate::Result;
use crate::materialize::Datepicker;
use crate::utils::{get_body, get_element_by_id, query_selector};
use chrono::{Local, NaiveDate};
use js_sys::Reflect;
use serde::Serialize;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlInputElement};

// Id kept as spelled in the page templates.
const DATE_FIELD_ID: &str = "datefeild";

/// Fill the hidden date input with today's date so submitted reviews and
/// deals carry their creation date without the user typing it.
pub fn fill_date_field(document: &Document) -> Result<()> {
    let Some(field) = get_element_by_id(document, DATE_FIELD_ID) else {
        return Ok(());
    };
    let field = field.dyn_into::<HtmlInputElement>()?;
    field.set_value(&format_day_month_year(Local::now().date_naive()));
    Ok(())
}

pub fn format_day_month_year(date: NaiveDate) -> String {
    date.format("%d-%m-%Y").to_string()
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DatepickerOptions {
    format: String,
    show_clear_btn: bool,
    auto_close: bool,
    first_day: u32,
}

impl Default for DatepickerOptions {
    fn default() -> Self {
        Self {
            format: "dd-mm-yyyy".to_owned(),
            show_clear_btn: true,
            auto_close: true,
            // Weeks start on Monday.
            first_day: 1,
        }
    }
}

/// Set up the deal expiry date picker. The picker panel is anchored to the
/// document body so it isn't clipped by the surrounding form.
pub fn init_datepicker(document: &Document) -> Result<()> {
    let Some(picker) = query_selector(document, ".datepicker")? else {
        return Ok(());
    };

    let options =
        serde_wasm_bindgen::to_value(&DatepickerOptions::default()).map_err(JsValue::from)?;
    Reflect::set(
        &options,
        &JsValue::from_str("container"),
        &JsValue::from(get_body()?),
    )?;

    // The placeholder would stay visible under the picker overlay, so drop
    // it as soon as the picker opens.
    let picker_on_open = picker.clone();
    let on_open = Closure::wrap(Box::new(move || {
        let _ = picker_on_open.remove_attribute("placeholder");
    }) as Box<dyn FnMut()>);
    Reflect::set(&options, &JsValue::from_str("onOpen"), on_open.as_ref())?;
    on_open.forget();

    Datepicker::init(&picker, &options);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_zero_pad_day_and_month() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        assert_eq!(format_day_month_year(date), "05-03-2024");
    }

    #[test]
    fn should_keep_two_digit_fields_unchanged() {
        let date = NaiveDate::from_ymd_opt(2025, 12, 31).unwrap();
        assert_eq!(format_day_month_year(date), "31-12-2025");
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use crate::utils::get_document;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn should_fill_hidden_date_field() {
        let document = get_document().unwrap();
        let field = document
            .create_element("input")
            .unwrap()
            .dyn_into::<HtmlInputElement>()
            .unwrap();
        field.set_id(DATE_FIELD_ID);
        document.body().unwrap().append_child(&field).unwrap();

        fill_date_field(&document).unwrap();

        assert_eq!(
            field.value(),
            format_day_month_year(Local::now().date_naive())
        );
        field.remove();
    }
}
