//! Gateway reconciliation
//!
//! Makes an API Gateway stage named after the alias forward to the
//! function alias that was just deployed.

mod reconciler;

pub use reconciler::{GatewayReconciler, GatewayReport};
