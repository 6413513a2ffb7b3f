//! Repository Implementations
//!
//! Concrete implementations of domain repository ports.

mod targets;

pub use targets::TomlTargetRepository;
