//! Entity trait defining the core abstraction for stored resources

use serde::Serialize;
use serde::de::DeserializeOwned;

/// Base trait for all entities held in an [`EntityStore`](crate::core::store::EntityStore).
///
/// An entity has a string identifier that is assigned once by the server and
/// never changes afterwards.
pub trait Entity: Clone + Serialize + DeserializeOwned + Send + Sync + 'static {
    /// The plural resource name used in URLs (e.g., "dishes", "orders")
    fn resource_name() -> &'static str;

    /// Capitalized label used in messages (e.g., "Dish", "Order")
    fn label() -> &'static str;

    /// Get the unique identifier for this entity instance
    fn id(&self) -> &str;
}
