//! Request validation pipeline
//!
//! Validators are small predicates over a [`RequestContext`]. Routes compose
//! them into a [`ValidationChain`] that runs before any store mutation.

pub mod chain;
pub mod validators;

pub use chain::{RequestContext, ValidationChain, Validator};
pub use validators::{DataObject, EntityExists, IdMatchesRoute, RequiredText};
