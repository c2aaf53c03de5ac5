use std::rc::Rc;

use web_sys::{Document, Window};

use super::{listen, on_load, query_all, set_class, viewport_height};
use crate::error::Result;
use crate::state::scroll::is_revealed;

const REVEAL: &str = "[data-reveal]";
const REVEALED: &str = "revealed";

pub fn attach(window: &Window, document: &Document, ratio: f64) -> Result<()> {
    let elements = query_all(document, REVEAL);
    if elements.is_empty() {
        log::debug!("No {} elements", REVEAL);
        return Ok(());
    }

    let win = window.clone();
    let update = Rc::new(move || {
        let Some(height) = viewport_height(&win) else {
            return;
        };
        for element in &elements {
            let top = element.get_bounding_client_rect().top();
            set_class(element, REVEALED, is_revealed(top, height, ratio));
        }
    });

    let on_scroll = update.clone();
    listen(window, "scroll", move |_| on_scroll())?;
    on_load(window, document, move || update())
}
