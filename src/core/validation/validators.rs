//! Reusable validators shared by every entity type

use super::chain::{RequestContext, Validator};
use crate::core::entity::Entity;
use crate::core::error::{ApiError, ApiResult, RequestError};
use serde_json::Value;

/// Validator: the request body carried a `data` object
#[derive(Debug, Clone, Copy, Default)]
pub struct DataObject;

impl<T: Entity> Validator<T> for DataObject {
    fn name(&self) -> &'static str {
        "data"
    }

    fn validate(&self, ctx: &RequestContext<'_, T>) -> ApiResult<()> {
        if ctx.data.is_object() {
            Ok(())
        } else {
            Err(RequestError::MissingData.into())
        }
    }
}

/// Validator: field is a non-empty string
#[derive(Debug, Clone, Copy)]
pub struct RequiredText {
    field: &'static str,
    message: &'static str,
}

impl RequiredText {
    pub const fn new(field: &'static str, message: &'static str) -> Self {
        Self { field, message }
    }
}

impl<T: Entity> Validator<T> for RequiredText {
    fn name(&self) -> &'static str {
        self.field
    }

    fn validate(&self, ctx: &RequestContext<'_, T>) -> ApiResult<()> {
        match ctx.field(self.field).and_then(Value::as_str) {
            Some(s) if !s.is_empty() => Ok(()),
            _ => Err(ApiError::validation(self.field, self.message)),
        }
    }
}

/// Validator: the route id matches a stored entity
#[derive(Debug, Clone, Copy, Default)]
pub struct EntityExists;

impl<T: Entity> Validator<T> for EntityExists {
    fn name(&self) -> &'static str {
        "exists"
    }

    fn validate(&self, ctx: &RequestContext<'_, T>) -> ApiResult<()> {
        ctx.require_current().map(|_| ())
    }
}

/// Validator: a payload `id`, when given, equals the route id
///
/// Absent, `null` and `""` ids all pass.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdMatchesRoute;

impl<T: Entity> Validator<T> for IdMatchesRoute {
    fn name(&self) -> &'static str {
        "id"
    }

    fn validate(&self, ctx: &RequestContext<'_, T>) -> ApiResult<()> {
        let Some(id) = ctx.field("id") else {
            return Ok(());
        };
        let route_id = ctx.route_id.unwrap_or_default();

        let shown = match id {
            Value::String(s) if s.is_empty() => return Ok(()),
            Value::String(s) if s == route_id => return Ok(()),
            Value::String(s) => s.clone(),
            other => other.to_string(),
        };

        Err(ApiError::validation(
            "id",
            format!(
                "{label} id does not match route id. {label}: {shown}, Route: {route_id}",
                label = T::label()
            ),
        ))
    }
}
