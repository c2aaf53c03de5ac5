//! Scroll-position rules for the header, reveal-on-scroll and anchor links.

pub fn header_active(scroll_y: f64, threshold: f64) -> bool {
    scroll_y > threshold
}

/// `top` is the element's bounding-rect top relative to the viewport.
pub fn is_revealed(top: f64, viewport_height: f64, ratio: f64) -> bool {
    top < viewport_height / ratio
}

/// Selector for an in-page anchor href. A bare `#` links nowhere.
pub fn anchor_target(href: &str) -> Option<&str> {
    if href.len() > 1 && href.starts_with('#') {
        Some(href)
    } else {
        None
    }
}

/// Document offset to scroll to so the target sits just below the fixed header.
pub fn scroll_offset(target_offset_top: f64, header_height: f64) -> f64 {
    target_offset_top - header_height
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_activates_strictly_past_threshold() {
        assert!(!header_active(0.0, 100.0));
        assert!(!header_active(100.0, 100.0));
        assert!(header_active(100.5, 100.0));
    }

    #[test]
    fn reveal_uses_viewport_fraction() {
        // 800 / 1.15 is roughly 695.65
        assert!(is_revealed(695.0, 800.0, 1.15));
        assert!(!is_revealed(696.0, 800.0, 1.15));
        assert!(is_revealed(-40.0, 800.0, 1.15));
    }

    #[test]
    fn anchors() {
        assert_eq!(anchor_target("#"), None);
        assert_eq!(anchor_target(""), None);
        assert_eq!(anchor_target("/about#team"), None);
        assert_eq!(anchor_target("#contact"), Some("#contact"));
    }

    #[test]
    fn offset_subtracts_header() {
        assert_eq!(scroll_offset(1200.0, 80.0), 1120.0);
    }
}
