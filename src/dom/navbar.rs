use std::cell::RefCell;
use std::rc::Rc;

use web_sys::{Document, Element, HtmlElement};

use super::{listen_all, query, query_all, set_class, ACTIVE};
use crate::error::{Error, Result};
use crate::state::nav::NavState;

const NAVBAR: &str = "[data-navbar]";
const TOGGLERS: &str = "[data-nav-toggler]";
const OVERLAY: &str = "[data-overlay]";
const BODY_OPEN: &str = "nav-active";

/// Mobile drawer. Shared with the anchor-link handler, which closes it
/// before scrolling.
pub struct Navigation {
    state: RefCell<NavState>,
    navbar: Element,
    overlay: Element,
    body: HtmlElement,
}

impl Navigation {
    fn render(&self) {
        let open = self.state.borrow().is_open();
        set_class(&self.navbar, ACTIVE, open);
        set_class(&self.overlay, ACTIVE, open);
        set_class(&self.body, BODY_OPEN, open);
    }

    pub fn is_open(&self) -> bool {
        self.state.borrow().is_open()
    }

    pub fn toggle(&self) {
        self.state.borrow_mut().toggle();
        log::debug!("Nav open: {}", self.is_open());
        self.render();
    }

    pub fn close(&self) {
        let changed = self.state.borrow_mut().close();
        if changed {
            self.render();
        }
    }
}

pub fn attach(document: &Document) -> Result<Rc<Navigation>> {
    let navbar = query(document, NAVBAR).ok_or(Error::MissingElement(NAVBAR))?;
    let overlay = query(document, OVERLAY).ok_or(Error::MissingElement(OVERLAY))?;
    let body = document.body().ok_or(Error::MissingElement("body"))?;

    let nav = Rc::new(Navigation {
        state: RefCell::new(NavState::default()),
        navbar,
        overlay,
        body,
    });

    let togglers = query_all(document, TOGGLERS);
    if togglers.is_empty() {
        log::warn!("No {} elements, mobile nav cannot be opened", TOGGLERS);
    }
    let handle = nav.clone();
    listen_all(&togglers, "click", move |_| handle.toggle())?;

    Ok(nav)
}
