//! Interactivity for the static marketing page: mobile nav, scroll effects,
//! testimonial carousel, FAQ accordion, contact form and stats counters.

pub mod config;
pub mod dom;
pub mod error;
pub mod state;

use log::{info, warn};

use config::SiteConfig;
use dom::{
    contact_form, faq, header, navbar, preloader, reveal, smooth_scroll, stats, testimonials,
};
use error::Result;

fn report(behavior: &str, result: Result<()>) {
    match result {
        Ok(()) => info!("Attached {}", behavior),
        Err(e) => warn!("Skipping {}: {}", behavior, e),
    }
}

/// Binds every behavior to the current document. A behavior whose markup
/// is missing is skipped without affecting the others.
pub fn start() {
    let Some(window) = web_sys::window() else {
        warn!("No window, nothing to attach");
        return;
    };
    let Some(document) = window.document() else {
        warn!("No document, nothing to attach");
        return;
    };

    let config = SiteConfig::load();
    log::debug!("Using {:?}", config);

    report("preloader", preloader::attach(&window, &document));

    let nav = match navbar::attach(&document) {
        Ok(nav) => {
            info!("Attached mobile navbar");
            Some(nav)
        }
        Err(e) => {
            warn!("Skipping mobile navbar: {}", e);
            None
        }
    };

    report(
        "header",
        header::attach(&window, &document, config.header_threshold_px),
    );
    report(
        "scroll reveal",
        reveal::attach(&window, &document, config.reveal_ratio),
    );
    report(
        "contact form",
        contact_form::attach(&window, &document, &config),
    );
    report(
        "smooth scrolling",
        smooth_scroll::attach(&window, &document, nav),
    );
    report("stats counters", stats::attach(&window, &document, &config));
    report(
        "testimonials",
        testimonials::attach(&document, config.autoplay_interval_ms),
    );
    report("faq", faq::attach(&document));
}
