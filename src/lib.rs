//! # GrubDash
//!
//! An in-memory REST service for a food-delivery catalogue: dishes and the
//! orders placed for them.
//!
//! ## Features
//!
//! - **Envelope Protocol**: every request body and every success response carries a `data` object
//! - **Ordered Validation Chains**: each operation runs its validators in sequence and stops at the first failure
//! - **Business Rules**: delivered orders are frozen and only pending orders can be deleted
//! - **Configuration-Based Seeding**: initial dishes and orders come from YAML
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use grubdash::prelude::*;
//!
//! let stores = EntityStores::new();
//! let app = ServerBuilder::new()
//!     .register_entities(stores.descriptors(Arc::new(UuidIdGenerator)))?
//!     .build();
//! ```

pub mod config;
pub mod core;
pub mod entities;
pub mod server;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core ===
    pub use crate::core::{
        ApiError, ApiResult, DataPayload, Entity, EntityStore, Envelope, IdGenerator,
        RequestContext, RequestError, SequentialIdGenerator, UuidIdGenerator, ValidationChain,
        Validator,
    };

    // === Entities ===
    pub use crate::entities::{
        Dish, DishFields, EntityStores, Order, OrderFields, OrderLine, OrderStatus,
    };

    // === Config ===
    pub use crate::config::{LoggingConfig, SeedData, ServerConfig, ServiceConfig};

    // === Server ===
    pub use crate::server::{EntityDescriptor, EntityRegistry, ServerBuilder};

    // === External dependencies ===
    pub use anyhow::Result;
    pub use serde::{Deserialize, Serialize};
    pub use std::sync::Arc;

    // === Axum ===
    pub use axum::{
        Router,
        extract::{Path, State},
        routing::{delete, get, post, put},
    };
}
