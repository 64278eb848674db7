//! Entity descriptor for Dish

use super::{
    handlers::{DishAppState, create_dish, get_dish, list_dishes, update_dish},
    model::Dish,
};
use crate::core::{EntityStore, IdGenerator};
use crate::server::{EntityDescriptor, method_not_allowed};
use axum::{Router, routing::get};
use std::sync::Arc;

/// Descriptor for the Dish entity
pub struct DishDescriptor {
    state: DishAppState,
}

impl DishDescriptor {
    pub fn new(store: EntityStore<Dish>, ids: Arc<dyn IdGenerator>) -> Self {
        Self {
            state: DishAppState::new(store, ids),
        }
    }
}

impl EntityDescriptor for DishDescriptor {
    fn entity_type(&self) -> &'static str {
        "dish"
    }

    fn build_routes(&self) -> Router {
        Router::new()
            .route(
                "/dishes",
                get(list_dishes)
                    .post(create_dish)
                    .fallback(method_not_allowed),
            )
            .route(
                "/dishes/{dish_id}",
                get(get_dish).put(update_dish).fallback(method_not_allowed),
            )
            .with_state(self.state.clone())
    }
}
