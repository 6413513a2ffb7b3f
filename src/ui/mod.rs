//! Terminal output for the `stagehand` binary

pub mod ci;
pub mod console;
pub mod context;
pub mod error;
pub mod json;
pub mod primitives;
pub mod terminal;
pub mod theme;
pub mod views;
