//! Count-up animation for the stats section.

/// Leading decimal digits of `raw`, ignoring leading whitespace, an
/// optional `+` sign and anything after the digits (`"120+"` is 120).
/// Negative targets are rejected.
pub fn parse_target(raw: &str) -> Option<u64> {
    let trimmed = raw.trim_start();
    let trimmed = trimmed.strip_prefix('+').unwrap_or(trimmed);
    let digits: &str = match trimmed.find(|c: char| !c.is_ascii_digit()) {
        Some(end) => &trimmed[..end],
        None => trimmed,
    };
    digits.parse().ok()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CounterFrame {
    pub value: u64,
    pub finished: bool,
}

#[derive(Debug, Clone)]
pub struct CounterAnimation {
    target: u64,
    increment: f64,
    current: f64,
    finished: bool,
}

impl CounterAnimation {
    pub fn new(target: u64, duration_ms: u32, frame_ms: u32) -> Self {
        // A duration shorter than one frame still takes one frame.
        let frames = (f64::from(duration_ms) / f64::from(frame_ms.max(1))).max(1.0);
        Self {
            target,
            increment: target as f64 / frames,
            current: 0.0,
            finished: false,
        }
    }

    pub fn target(&self) -> u64 {
        self.target
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn tick(&mut self) -> CounterFrame {
        if !self.finished {
            self.current += self.increment;
            if self.current >= self.target as f64 {
                self.finished = true;
            }
        }
        if self.finished {
            CounterFrame {
                value: self.target,
                finished: true,
            }
        } else {
            CounterFrame {
                value: self.current.floor() as u64,
                finished: false,
            }
        }
    }
}

/// Fires once, the first time the stats section scrolls into range.
#[derive(Debug, Default)]
pub struct StatsLatch {
    fired: bool,
}

impl StatsLatch {
    pub fn has_fired(&self) -> bool {
        self.fired
    }

    pub fn should_start(&mut self, section_top: f64, viewport_height: f64, ratio: f64) -> bool {
        if self.fired || section_top >= viewport_height * ratio {
            return false;
        }
        self.fired = true;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_target_reads_leading_digits() {
        assert_eq!(parse_target("250"), Some(250));
        assert_eq!(parse_target("  98%"), Some(98));
        assert_eq!(parse_target("1200+"), Some(1200));
        assert_eq!(parse_target("abc"), None);
        assert_eq!(parse_target(""), None);
    }

    #[test]
    fn parse_target_accepts_plus_sign() {
        assert_eq!(parse_target("+250"), Some(250));
        assert_eq!(parse_target(" +7 users"), Some(7));
        assert_eq!(parse_target("-5"), None);
        assert_eq!(parse_target("+"), None);
    }

    #[test]
    fn counts_up_and_lands_exactly_on_target() {
        let mut counter = CounterAnimation::new(500, 2000, 16);
        let mut last = 0;
        let mut ticks = 0;
        loop {
            let frame = counter.tick();
            ticks += 1;
            assert!(frame.value >= last);
            last = frame.value;
            if frame.finished {
                break;
            }
            assert!(frame.value < 500);
        }
        assert_eq!(last, 500);
        // 2000 ms at 16 ms per frame
        assert!((124..=126).contains(&ticks), "ticks = {}", ticks);
        assert_eq!(counter.tick(), CounterFrame { value: 500, finished: true });
    }

    #[test]
    fn zero_target_finishes_immediately() {
        let mut counter = CounterAnimation::new(0, 2000, 16);
        assert_eq!(counter.tick(), CounterFrame { value: 0, finished: true });
    }

    #[test]
    fn zero_duration_finishes_on_first_tick() {
        let mut counter = CounterAnimation::new(0, 0, 16);
        assert_eq!(counter.tick(), CounterFrame { value: 0, finished: true });

        let mut counter = CounterAnimation::new(300, 0, 16);
        assert_eq!(counter.tick(), CounterFrame { value: 300, finished: true });
    }

    #[test]
    fn duration_shorter_than_a_frame_finishes_on_first_tick() {
        let mut counter = CounterAnimation::new(40, 10, 16);
        assert_eq!(counter.tick(), CounterFrame { value: 40, finished: true });
    }

    #[test]
    fn zero_frame_length_still_terminates() {
        let mut counter = CounterAnimation::new(10, 20, 0);
        let frames = (0..100).map(|_| counter.tick()).filter(|f| f.finished).count();
        assert!(frames > 0);
    }

    #[test]
    fn latch_fires_once() {
        let mut latch = StatsLatch::default();
        assert!(!latch.should_start(900.0, 1000.0, 0.75));
        assert!(latch.should_start(700.0, 1000.0, 0.75));
        assert!(latch.has_fired());
        assert!(!latch.should_start(100.0, 1000.0, 0.75));
    }
}
