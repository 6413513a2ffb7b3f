//! Domain Layer
//!
//! The deployment model for Stagehand - pure logic without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - Deployment targets, function versions, gateway resources
//! - `value_objects/` - Immutable value types (Alias, HttpMethod)
//! - `services/` - Requirement checks, prune planning, integration inspection
//! - `ports/` - Interface definitions for infrastructure
//!
//! ## Design Principles
//!
//! 1. **No I/O** - Remote platforms are only reached through ports
//! 2. **Pure Functions** - Services are stateless and testable
//! 3. **Ports & Adapters** - Runtime, object store and gateway clients are injected

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
