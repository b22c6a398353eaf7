use crate::Result;
use crate::timer::Timeout;
use crate::utils::{query_selector, session_storage, set_style};
use web_sys::{Document, Element, Storage};

pub const POPUP_SHOWN_KEY: &str = "popup";
const POPUP_DELAY_MS: i32 = 1000;

/// Reveal the welcome popup once per browser session.
///
/// The session flag is only written when the popup is actually shown, so
/// navigating away before the delay elapses keeps the popup eligible on the
/// next page.
pub fn init_first_visit_popup(document: &Document) -> Result<()> {
    let Some(popup) = query_selector(document, ".pop-up")? else {
        return Ok(());
    };
    let Some(storage) = session_storage()? else {
        return Ok(());
    };
    if storage.get_item(POPUP_SHOWN_KEY)?.is_some() {
        return Ok(());
    }

    Timeout::schedule(POPUP_DELAY_MS, move || {
        if let Err(error) = reveal(&popup, &storage) {
            log::error!("Couldn't reveal the popup: {error:?}");
        }
    })?
    .forget();

    Ok(())
}

fn reveal(popup: &Element, storage: &Storage) -> Result<()> {
    set_style(popup, "display", "block")?;
    storage.set_item(POPUP_SHOWN_KEY, "true")?;
    Ok(())
}
