mod date;
mod error;
mod flash;
mod materialize;
mod modal;
mod popup;
mod review;
mod timer;
mod utils;

pub use crate::error::Error;
pub type Result<T> = core::result::Result<T, Error>;

use crate::utils::get_document;
use wasm_bindgen::prelude::wasm_bindgen;
use web_sys::Document;

#[wasm_bindgen(start)]
fn run() {
    utils::set_panic_hook();
    wasm_logger::init(wasm_logger::Config::default());

    match get_document() {
        Ok(document) => init_page(&document),
        Err(error) => log::error!("Document is not available: {error:?}"),
    }
}

/// Run every page-setup step once the document is ready.
/// Steps are independent: a failing step is logged and the rest still run.
/// Not every page contains every element, so each step treats a missing
/// element as a no-op.
pub fn init_page(document: &Document) {
    log_on_error("first-visit popup", popup::init_first_visit_popup(document));
    log_on_error("side navigation", materialize::init_sidenavs(document));
    log_on_error(
        "flash messages",
        flash::schedule_flash_dismissal(document),
    );
    log_on_error("modal triggers", modal::bind_modal_triggers(document));
    log_on_error(
        "select dropdowns",
        materialize::init_select_dropdowns(document),
    );
    log_on_error("review rows", review::style_review_rows(document));
    log_on_error("date auto-fill", date::fill_date_field(document));
    log_on_error("date picker", date::init_datepicker(document));
}

fn log_on_error(step: &str, result: Result<()>) {
    if let Err(error) = result {
        log::error!("Couldn't initialize {step}: {error:?}");
    }
}
