//! Entities module - contains all business entities

pub mod dish;
pub mod order;

pub use dish::{Dish, DishDescriptor, DishFields};
pub use order::{Order, OrderDescriptor, OrderFields, OrderLine, OrderStatus};

use crate::config::SeedData;
use crate::core::{ApiResult, EntityStore, IdGenerator};
use crate::server::EntityDescriptor;
use dish::DishValidators;
use order::OrderValidators;
use std::sync::Arc;

/// Aggregated store containing all entity stores
#[derive(Clone, Default)]
pub struct EntityStores {
    pub dishes: EntityStore<Dish>,
    pub orders: EntityStore<Order>,
}

impl EntityStores {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build stores pre-populated with seed entities
    ///
    /// Every seed entity must pass its create chain and carry a unique id.
    pub fn from_seed(seed: &SeedData) -> ApiResult<Self> {
        let dish_rules = DishValidators::new();
        for dish in &seed.dishes {
            dish_rules.check_stored(dish)?;
        }
        let order_rules = OrderValidators::new();
        for order in &seed.orders {
            order_rules.check_stored(order)?;
        }

        Ok(Self {
            dishes: EntityStore::with_entities(seed.dishes.iter().cloned())?,
            orders: EntityStore::with_entities(seed.orders.iter().cloned())?,
        })
    }

    /// Descriptors exposing every store over REST
    pub fn descriptors(&self, ids: Arc<dyn IdGenerator>) -> Vec<Box<dyn EntityDescriptor>> {
        vec![
            Box::new(DishDescriptor::new(self.dishes.clone(), ids.clone())),
            Box::new(OrderDescriptor::new(self.orders.clone(), ids)),
        ]
    }
}
