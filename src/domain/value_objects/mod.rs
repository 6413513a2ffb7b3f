//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod alias;
mod http_method;

pub use alias::{Alias, AliasError};
pub use http_method::HttpMethod;
