use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Interval;
use web_sys::{Document, Element};

use super::{listen, query, query_all, set_class, ACTIVE};
use crate::error::Result;
use crate::state::carousel::Carousel;

const CARDS: &str = ".testimonial-card";
const PREV: &str = ".prev-btn";
const NEXT: &str = ".next-btn";
const DOTS: &str = ".dot";

/// Testimonial cards plus their dots, driven by one [`Carousel`].
pub struct Testimonials {
    carousel: RefCell<Carousel>,
    cards: Vec<Element>,
    dots: Vec<Element>,
}

impl Testimonials {
    fn new(cards: Vec<Element>, dots: Vec<Element>) -> Self {
        Self {
            carousel: RefCell::new(Carousel::new(cards.len())),
            cards,
            dots,
        }
    }

    fn render(&self) {
        let carousel = self.carousel.borrow();
        let active = carousel.active();
        for (i, is_active) in carousel.marks() {
            set_class(&self.cards[i], ACTIVE, is_active);
        }
        for (i, dot) in self.dots.iter().enumerate() {
            set_class(dot, ACTIVE, i == active);
        }
    }

    pub fn next(&self) {
        self.carousel.borrow_mut().next();
        self.render();
    }

    pub fn previous(&self) {
        self.carousel.borrow_mut().previous();
        self.render();
    }

    pub fn select_at(&self, index: usize) -> Result<()> {
        self.carousel.borrow_mut().select_at(index)?;
        self.render();
        Ok(())
    }
}

/// Wires the prev/next buttons and dots. Autoplay keeps its own schedule:
/// manual navigation neither pauses nor restarts it.
pub fn attach(document: &Document, autoplay_interval_ms: u32) -> Result<()> {
    let cards = query_all(document, CARDS);
    if cards.is_empty() {
        log::debug!("No testimonials on this page");
        return Ok(());
    }
    let dots = query_all(document, DOTS);
    if dots.len() != cards.len() {
        log::warn!("{} testimonial cards but {} dots", cards.len(), dots.len());
    }

    let testimonials = Rc::new(Testimonials::new(cards, dots));
    testimonials.render();

    if let Some(button) = query(document, NEXT) {
        let testimonials = testimonials.clone();
        listen(&button, "click", move |_| testimonials.next())?;
    }
    if let Some(button) = query(document, PREV) {
        let testimonials = testimonials.clone();
        listen(&button, "click", move |_| testimonials.previous())?;
    }

    for (index, dot) in testimonials.dots.iter().enumerate() {
        let testimonials = testimonials.clone();
        listen(dot, "click", move |_| {
            if let Err(e) = testimonials.select_at(index) {
                log::warn!("Ignoring dot click: {}", e);
            }
        })?;
    }

    if autoplay_interval_ms > 0 {
        let testimonials = testimonials.clone();
        Interval::new(autoplay_interval_ms, move || testimonials.next()).forget();
    }
    Ok(())
}
