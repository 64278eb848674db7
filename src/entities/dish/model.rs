//! Dish entity model

use crate::core::entity::Entity;
use serde::{Deserialize, Serialize};
use serde_json::Number;

/// A dish on the menu
///
/// `price` keeps the number exactly as the client sent it (`5` stays `5`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dish {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: Number,
    pub image_url: String,
}

/// Caller-supplied dish fields, read from a validated payload
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DishFields {
    pub name: String,
    pub description: String,
    pub price: Number,
    pub image_url: String,
}

impl Dish {
    pub fn from_fields(id: String, fields: DishFields) -> Self {
        Self {
            id,
            name: fields.name,
            description: fields.description,
            price: fields.price,
            image_url: fields.image_url,
        }
    }
}

impl Entity for Dish {
    fn resource_name() -> &'static str {
        "dishes"
    }

    fn label() -> &'static str {
        "Dish"
    }

    fn id(&self) -> &str {
        &self.id
    }
}
