//! Entity descriptor for Order

use super::{
    handlers::{OrderAppState, create_order, delete_order, get_order, list_orders, update_order},
    model::Order,
};
use crate::core::{EntityStore, IdGenerator};
use crate::server::{EntityDescriptor, method_not_allowed};
use axum::{Router, routing::get};
use std::sync::Arc;

/// Descriptor for the Order entity
pub struct OrderDescriptor {
    state: OrderAppState,
}

impl OrderDescriptor {
    pub fn new(store: EntityStore<Order>, ids: Arc<dyn IdGenerator>) -> Self {
        Self {
            state: OrderAppState::new(store, ids),
        }
    }
}

impl EntityDescriptor for OrderDescriptor {
    fn entity_type(&self) -> &'static str {
        "order"
    }

    fn build_routes(&self) -> Router {
        Router::new()
            .route(
                "/orders",
                get(list_orders)
                    .post(create_order)
                    .fallback(method_not_allowed),
            )
            .route(
                "/orders/{order_id}",
                get(get_order)
                    .put(update_order)
                    .delete(delete_order)
                    .fallback(method_not_allowed),
            )
            .with_state(self.state.clone())
    }
}
