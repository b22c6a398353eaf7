use crate::Result;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

/// Give review cards an alternating background so consecutive reviews are
/// easy to tell apart. Even rows get the highlight, odd rows keep the page
/// background.
pub fn style_review_rows(document: &Document) -> Result<()> {
    let rows = document.get_elements_by_class_name("review-container");
    for index in 0..rows.length() {
        let Some(row) = rows.get_with_index(index) else {
            continue;
        };
        if is_striped(index) {
            stripe(&row)?;
        }
    }
    Ok(())
}

fn is_striped(index: u32) -> bool {
    index % 2 == 0
}

fn stripe(row: &Element) -> Result<()> {
    let style = row.clone().dyn_into::<HtmlElement>()?.style();
    style.set_property("background-color", "lightgrey")?;
    style.set_property("padding", "10px")?;
    style.set_property("margin-bottom", "20px")?;
    style.set_property("border-radius", "10px")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_stripe_even_indices_only() {
        assert!(is_striped(0));
        assert!(!is_striped(1));
        assert!(is_striped(2));
        assert!(!is_striped(3));
        assert!(is_striped(4));
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use crate::utils::{get_body, get_document};
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn should_stripe_every_other_row() {
        let document = get_document().unwrap();
        let body = get_body().unwrap();
        let rows = (0..5)
            .map(|_| {
                let row = document.create_element("div").unwrap();
                row.set_class_name("review-container");
                body.append_child(&row).unwrap();
                row
            })
            .collect::<Vec<_>>();

        style_review_rows(&document).unwrap();

        for (index, row) in rows.iter().enumerate() {
            let style = row.clone().dyn_into::<HtmlElement>().unwrap().style();
            let background = style.get_property_value("background-color").unwrap();
            if index % 2 == 0 {
                assert_eq!(background, "lightgrey");
            } else {
                assert!(background.is_empty());
            }
        }

        rows.iter().for_each(Element::remove);
    }
}
