use web_sys::{Document, Window};

use super::{listen, query, set_class, ACTIVE};
use crate::error::{Error, Result};
use crate::state::scroll::header_active;

const HEADER: &str = "[data-header]";
const BACK_TOP: &str = "[data-back-top-btn]";

/// Marks the header and back-to-top button once the page is scrolled.
pub fn attach(window: &Window, document: &Document, threshold: f64) -> Result<()> {
    let header = query(document, HEADER).ok_or(Error::MissingElement(HEADER))?;
    let back_top = query(document, BACK_TOP);
    if back_top.is_none() {
        log::debug!("No {} on this page", BACK_TOP);
    }

    let win = window.clone();
    listen(window, "scroll", move |_| {
        let active = header_active(win.scroll_y().unwrap_or(0.0), threshold);
        set_class(&header, ACTIVE, active);
        if let Some(button) = &back_top {
            set_class(button, ACTIVE, active);
        }
    })
}
