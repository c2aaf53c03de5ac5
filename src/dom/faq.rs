use std::cell::RefCell;
use std::rc::Rc;

use web_sys::{Document, Element};

use super::{listen, query_all, set_class, ACTIVE};
use crate::error::Result;
use crate::state::accordion::{assign_ids, Accordion};

const ITEMS: &str = ".faq-item";
const QUESTION: &str = ".faq-question";

pub struct Faq {
    accordion: RefCell<Accordion>,
    elements: Vec<Element>,
}

impl Faq {
    fn render(&self) {
        let accordion = self.accordion.borrow();
        for ((_, open), element) in accordion.items().zip(&self.elements) {
            set_class(element, ACTIVE, open);
        }
    }

    pub fn toggle(&self, id: &str) -> Result<()> {
        self.accordion.borrow_mut().toggle(id)?;
        log::debug!("FAQ expanded: {:?}", self.accordion.borrow().expanded());
        self.render();
        Ok(())
    }
}

pub fn attach(document: &Document) -> Result<()> {
    let elements = query_all(document, ITEMS);
    if elements.is_empty() {
        log::debug!("No FAQ on this page");
        return Ok(());
    }

    let ids = assign_ids(elements.iter().map(Element::id));
    let faq = Rc::new(Faq {
        accordion: RefCell::new(Accordion::new(ids.clone())?),
        elements,
    });
    faq.render();

    for (id, element) in ids.into_iter().zip(&faq.elements) {
        let Some(question) = element.query_selector(QUESTION).ok().flatten() else {
            log::warn!("FAQ item {} has no {}", id, QUESTION);
            continue;
        };
        let faq = faq.clone();
        listen(&question, "click", move |_| {
            if let Err(e) = faq.toggle(&id) {
                log::warn!("FAQ toggle failed: {}", e);
            }
        })?;
    }
    Ok(())
}
