//! Active-slide bookkeeping for the testimonial carousel.

use crate::error::{Error, Result};

/// Index after `active` with wraparound. An empty list keeps `active`.
pub fn next_index(active: usize, len: usize) -> usize {
    if len == 0 {
        return active;
    }
    (active + 1) % len
}

/// Index before `active` with wraparound. An empty list keeps `active`.
pub fn previous_index(active: usize, len: usize) -> usize {
    if len == 0 {
        return active;
    }
    (active + len - 1) % len
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Carousel {
    len: usize,
    active: usize,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self { len, active: 0 }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn active(&self) -> usize {
        self.active
    }

    pub fn next(&mut self) {
        self.active = next_index(self.active, self.len);
    }

    pub fn previous(&mut self) {
        self.active = previous_index(self.active, self.len);
    }

    pub fn select_at(&mut self, index: usize) -> Result<()> {
        if index >= self.len {
            return Err(Error::OutOfRange {
                index,
                len: self.len,
            });
        }
        self.active = index;
        Ok(())
    }

    /// `(index, is_active)` for every slide, in order.
    pub fn marks(&self) -> impl Iterator<Item = (usize, bool)> + '_ {
        (0..self.len).map(move |i| (i, i == self.active))
    }
}
