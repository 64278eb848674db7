//! Core module containing fundamental traits and types for the service

pub mod entity;
pub mod envelope;
pub mod error;
pub mod id;
pub mod store;
pub mod validation;

pub use entity::Entity;
pub use envelope::{DataPayload, Envelope};
pub use error::{ApiError, ApiResult, RequestError};
pub use id::{IdGenerator, SequentialIdGenerator, UuidIdGenerator};
pub use store::{Entries, EntityStore};
pub use validation::{RequestContext, ValidationChain, Validator};
