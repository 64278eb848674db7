//! Ordered validator chains with early exit
//!
//! Each route runs a fixed [`ValidationChain`] before touching the store.
//! The first failing [`Validator`] ends the chain and its error is the one
//! reported; later validators never run.

use crate::core::entity::Entity;
use crate::core::error::{ApiError, ApiResult};
use serde_json::Value;

/// Payload used by routes that carry no request body
static NO_PAYLOAD: Value = Value::Null;

/// Everything a validator may look at for one request
#[derive(Debug)]
pub struct RequestContext<'a, T> {
    /// Id taken from the route, if the route has one
    pub route_id: Option<&'a str>,
    /// The object found under `data` in the request body
    pub data: &'a Value,
    /// The stored entity matching `route_id`, if any
    pub current: Option<&'a T>,
}

impl<'a, T: Entity> RequestContext<'a, T> {
    /// Context for a collection route (`POST /dishes`)
    pub fn for_create(data: &'a Value) -> Self {
        Self {
            route_id: None,
            data,
            current: None,
        }
    }

    /// Context for an item route (`PUT /orders/{orderId}`)
    pub fn for_item(route_id: &'a str, data: &'a Value, current: Option<&'a T>) -> Self {
        Self {
            route_id: Some(route_id),
            data,
            current,
        }
    }

    /// Context for an item route without a body (`GET`, `DELETE`)
    pub fn for_item_without_body(route_id: &'a str, current: Option<&'a T>) -> Self {
        Self::for_item(route_id, &NO_PAYLOAD, current)
    }

    /// Look up a payload field; absent and `null` are both `None`
    pub fn field(&self, name: &str) -> Option<&'a Value> {
        self.data.get(name).filter(|v| !v.is_null())
    }

    /// The stored entity, or a not-found error naming the route id
    pub fn require_current(&self) -> ApiResult<&'a T> {
        self.current
            .ok_or_else(|| ApiError::not_found(T::label(), self.route_id.unwrap_or_default()))
    }
}

/// A single predicate over a request
///
/// Implementations return exactly one outcome: `Ok(())` or the single error
/// describing the first violated condition.
pub trait Validator<T>: Send + Sync {
    /// Short name used in logs
    fn name(&self) -> &'static str;

    fn validate(&self, ctx: &RequestContext<'_, T>) -> ApiResult<()>;
}

/// Fixed sequence of validators for one operation
pub struct ValidationChain<T> {
    operation: &'static str,
    validators: Vec<Box<dyn Validator<T>>>,
}

impl<T: Entity> ValidationChain<T> {
    pub fn new(operation: &'static str) -> Self {
        Self {
            operation,
            validators: Vec::new(),
        }
    }

    /// Append a validator to the end of the chain
    pub fn then(mut self, validator: impl Validator<T> + 'static) -> Self {
        self.validators.push(Box::new(validator));
        self
    }

    pub fn operation(&self) -> &'static str {
        self.operation
    }

    /// Validator names in execution order
    pub fn names(&self) -> Vec<&'static str> {
        self.validators.iter().map(|v| v.name()).collect()
    }

    /// Run every validator in order, stopping at the first failure
    pub fn run(&self, ctx: &RequestContext<'_, T>) -> ApiResult<()> {
        for validator in &self.validators {
            if let Err(err) = validator.validate(ctx) {
                tracing::debug!(
                    resource = T::resource_name(),
                    operation = self.operation,
                    validator = validator.name(),
                    error = %err,
                    "validation failed"
                );
                return Err(err);
            }
        }
        Ok(())
    }
}
