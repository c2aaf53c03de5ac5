use web_sys::{Document, Window};

use super::{on_load, query, set_class};
use crate::error::{Error, Result};

const PRELOADER: &str = "[data-preloader]";
const LOADED: &str = "loaded";

/// Hides the preloader once the window has finished loading.
pub fn attach(window: &Window, document: &Document) -> Result<()> {
    let preloader = query(document, PRELOADER).ok_or(Error::MissingElement(PRELOADER))?;
    let body = document.body().ok_or(Error::MissingElement("body"))?;

    on_load(window, document, move || {
        set_class(&preloader, LOADED, true);
        set_class(&body, LOADED, true);
    })
}
