//! Core data model for the hero dataset.

pub mod hero;
pub mod rate;

pub use hero::*;
pub use rate::*;
