//! Registration of the resources served over REST

use anyhow::{Result, bail};
use axum::Router;

/// A resource that contributes its own routes to the server
///
/// Implemented by [`DishDescriptor`](crate::entities::DishDescriptor) and
/// [`OrderDescriptor`](crate::entities::OrderDescriptor).
pub trait EntityDescriptor: Send + Sync {
    /// Singular entity type, unique per server ("dish", "order")
    fn entity_type(&self) -> &'static str;

    /// Collection and item routes, with their state already attached
    fn build_routes(&self) -> Router;
}

/// Descriptors in registration order
///
/// Each entity type registers at most once: a second descriptor for the same
/// type would claim the same paths and make the route merge panic.
#[derive(Default)]
pub struct EntityRegistry {
    descriptors: Vec<Box<dyn EntityDescriptor>>,
}

impl EntityRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a descriptor, refusing an entity type that is already present
    pub fn register(&mut self, descriptor: Box<dyn EntityDescriptor>) -> Result<()> {
        let entity_type = descriptor.entity_type();
        if self.contains(entity_type) {
            bail!("entity type '{}' is already registered", entity_type);
        }
        self.descriptors.push(descriptor);
        Ok(())
    }

    fn contains(&self, entity_type: &str) -> bool {
        self.descriptors
            .iter()
            .any(|descriptor| descriptor.entity_type() == entity_type)
    }

    /// One router holding every registered resource's routes
    pub fn build_routes(&self) -> Router {
        self.descriptors
            .iter()
            .fold(Router::new(), |router, descriptor| {
                router.merge(descriptor.build_routes())
            })
    }

    pub fn entity_types(&self) -> Vec<&'static str> {
        self.descriptors.iter().map(|d| d.entity_type()).collect()
    }
}
