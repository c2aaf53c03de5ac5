/// Open/closed state of the mobile navigation drawer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavState {
    open: bool,
}

impl NavState {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Returns whether anything changed.
    pub fn close(&mut self) -> bool {
        std::mem::replace(&mut self.open, false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips_and_close_reports_change() {
        let mut nav = NavState::default();
        assert!(!nav.is_open());
        nav.toggle();
        assert!(nav.is_open());
        assert!(nav.close());
        assert!(!nav.is_open());
        assert!(!nav.close());
    }
}
