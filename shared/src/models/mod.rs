//! Domain models for the offer administration panel

mod catalog;
mod offer;

pub use catalog::*;
pub use offer::*;
