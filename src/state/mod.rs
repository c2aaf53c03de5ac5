//! DOM-free state for every page behavior.

pub mod accordion;
pub mod carousel;
pub mod contact;
pub mod counter;
pub mod nav;
pub mod scroll;
