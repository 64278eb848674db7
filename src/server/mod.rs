//! Server module for building the HTTP service
//!
//! This module provides a `ServerBuilder` that registers:
//! - CRUD routes for every entity descriptor
//! - Health check routes
//! - JSON fallbacks for unknown paths and unsupported methods

pub mod builder;
pub mod entity_registry;
pub mod router;

pub use builder::ServerBuilder;
pub use entity_registry::{EntityDescriptor, EntityRegistry};
pub use router::{method_not_allowed, path_not_found};
