use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, ScrollBehavior, ScrollToOptions, Window};

use super::navbar::Navigation;
use super::{listen, query, query_all};
use crate::error::Result;
use crate::state::scroll::{anchor_target, scroll_offset};

const ANCHORS: &str = r##"a[href^="#"]"##;
const HEADER: &str = "[data-header]";

/// Smooth-scrolls in-page anchor links so the target clears the fixed header.
pub fn attach(window: &Window, document: &Document, nav: Option<Rc<Navigation>>) -> Result<()> {
    let header = query(document, HEADER).and_then(|h| h.dyn_into::<HtmlElement>().ok());
    let links = query_all(document, ANCHORS);

    for link in links {
        let win = window.clone();
        let doc = document.clone();
        let nav = nav.clone();
        let header = header.clone();
        let anchor = link.clone();

        listen(&link, "click", move |event| {
            let Some(href) = anchor.get_attribute("href") else {
                return;
            };
            let Some(selector) = anchor_target(&href) else {
                return;
            };
            event.prevent_default();

            // Ids that are not valid selectors make query_selector throw.
            let target = doc
                .query_selector(selector)
                .ok()
                .flatten()
                .and_then(|t| t.dyn_into::<HtmlElement>().ok());
            let Some(target) = target else {
                log::debug!("No scroll target for {}", selector);
                return;
            };

            if let Some(nav) = &nav {
                nav.close();
            }

            let header_height = header
                .as_ref()
                .map_or(0.0, |h| f64::from(h.offset_height()));
            let options = ScrollToOptions::new();
            options.set_top(scroll_offset(f64::from(target.offset_top()), header_height));
            options.set_behavior(ScrollBehavior::Smooth);
            win.scroll_to_with_scroll_to_options(&options);
        })?;
    }
    Ok(())
}
