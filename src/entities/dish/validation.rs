//! Validation chains for dish routes

use super::model::Dish;
use crate::core::error::{ApiError, ApiResult};
use crate::core::validation::{
    DataObject, EntityExists, IdMatchesRoute, RequestContext, RequiredText, ValidationChain,
    Validator,
};
use serde_json::Value;

const NAME: RequiredText = RequiredText::new("name", "Dish must include a name");
const DESCRIPTION: RequiredText =
    RequiredText::new("description", "Dish must include a description");
const IMAGE_URL: RequiredText = RequiredText::new("image_url", "Dish must include a image_url");

/// Validator: `price` is present, numeric and greater than zero
///
/// Presence is checked first; only one of the two messages is ever reported.
#[derive(Debug, Clone, Copy, Default)]
pub struct PositivePrice;

impl Validator<Dish> for PositivePrice {
    fn name(&self) -> &'static str {
        "price"
    }

    fn validate(&self, ctx: &RequestContext<'_, Dish>) -> ApiResult<()> {
        let price = match ctx.field("price") {
            None => return Err(ApiError::validation("price", "Dish must include a price")),
            Some(Value::String(s)) if s.is_empty() => {
                return Err(ApiError::validation("price", "Dish must include a price"));
            }
            Some(price) => price,
        };

        match price.as_f64() {
            Some(p) if p > 0.0 => Ok(()),
            _ => Err(ApiError::validation(
                "price",
                "The price must be a number greater than 0",
            )),
        }
    }
}

/// The chain run by each dish route
pub struct DishValidators {
    pub create: ValidationChain<Dish>,
    pub read: ValidationChain<Dish>,
    pub update: ValidationChain<Dish>,
}

impl DishValidators {
    pub fn new() -> Self {
        Self {
            create: ValidationChain::new("create")
                .then(DataObject)
                .then(NAME)
                .then(DESCRIPTION)
                .then(IMAGE_URL)
                .then(PositivePrice),
            read: ValidationChain::new("read").then(EntityExists),
            update: ValidationChain::new("update")
                .then(EntityExists)
                .then(DataObject)
                .then(IdMatchesRoute)
                .then(NAME)
                .then(DESCRIPTION)
                .then(IMAGE_URL)
                .then(PositivePrice),
        }
    }

    /// Check a dish that is loaded directly into the store (seed data)
    pub fn check_stored(&self, dish: &Dish) -> ApiResult<()> {
        let data = serde_json::to_value(dish)?;
        self.create.run(&RequestContext::for_create(&data))
    }
}

impl Default for DishValidators {
    fn default() -> Self {
        Self::new()
    }
}
