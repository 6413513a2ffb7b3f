//! Property tests for Stagehand.
//!
//! Properties use randomized input generation to explore edge cases and
//! protect invariants like "never panics".
//!
//! Run with: `cargo test --test properties`

#[path = "properties/alias.rs"]
mod alias;

#[path = "properties/config_parse.rs"]
mod config_parse;
