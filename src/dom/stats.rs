use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Interval;
use web_sys::{Document, Element, Window};

use super::{listen, on_load, query, query_all, viewport_height};
use crate::config::SiteConfig;
use crate::error::Result;
use crate::state::counter::{parse_target, CounterAnimation, StatsLatch};

const SECTION: &str = ".stats";
const NUMBERS: &str = ".stats-number";
const TARGET_ATTR: &str = "data-target";

struct Stat {
    element: Element,
    animation: CounterAnimation,
}

/// Advances every unfinished counter by one frame. Returns true when all are done.
fn advance(stats: &mut [Stat]) -> bool {
    let mut done = true;
    for stat in stats.iter_mut().filter(|s| !s.animation.is_finished()) {
        let frame = stat.animation.tick();
        stat.element.set_text_content(Some(&frame.value.to_string()));
        done &= frame.finished;
    }
    done
}

fn run_counters(numbers: &[Element], duration_ms: u32, frame_ms: u32) {
    let mut stats: Vec<Stat> = numbers
        .iter()
        .filter_map(|element| {
            let raw = element.get_attribute(TARGET_ATTR).unwrap_or_default();
            match parse_target(&raw) {
                Some(target) => Some(Stat {
                    element: element.clone(),
                    animation: CounterAnimation::new(target, duration_ms, frame_ms),
                }),
                None => {
                    log::warn!("Skipping stat with bad {}: {:?}", TARGET_ATTR, raw);
                    None
                }
            }
        })
        .collect();

    if advance(&mut stats) {
        return;
    }

    let interval_handle: Rc<RefCell<Option<Interval>>> = Rc::new(RefCell::new(None));
    let interval_handle_clone = interval_handle.clone();
    let interval = Interval::new(frame_ms.max(1), move || {
        if advance(&mut stats) {
            log::debug!("Stats counters finished");
            if let Some(interval) = interval_handle_clone.borrow_mut().take() {
                drop(interval);
            }
        }
    });
    *interval_handle.borrow_mut() = Some(interval);
}

/// Starts the count-up once, when the stats section first scrolls into view.
pub fn attach(window: &Window, document: &Document, config: &SiteConfig) -> Result<()> {
    let Some(section) = query(document, SECTION) else {
        log::debug!("No {} section", SECTION);
        return Ok(());
    };
    let numbers = query_all(document, NUMBERS);
    let latch = RefCell::new(StatsLatch::default());
    let ratio = config.stats_trigger_ratio;
    let duration_ms = config.stats_duration_ms;
    let frame_ms = config.stats_frame_ms;

    let win = window.clone();
    let check = Rc::new(move || {
        if latch.borrow().has_fired() {
            return;
        }
        let Some(height) = viewport_height(&win) else {
            return;
        };
        let top = section.get_bounding_client_rect().top();
        if latch.borrow_mut().should_start(top, height, ratio) {
            log::debug!("Animating {} stats counters", numbers.len());
            run_counters(&numbers, duration_ms, frame_ms);
        }
    });

    let on_scroll = check.clone();
    listen(window, "scroll", move |_| on_scroll())?;
    on_load(window, document, move || check())
}
