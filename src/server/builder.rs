//! ServerBuilder for fluent API to build HTTP servers

use super::entity_registry::{EntityDescriptor, EntityRegistry};
use super::router::{health_routes, path_not_found};
use anyhow::{Context, Result};
use axum::Router;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

/// Builder for creating HTTP servers from entity descriptors
///
/// # Example
///
/// ```ignore
/// let stores = EntityStores::new();
/// let app = ServerBuilder::new()
///     .register_entities(stores.descriptors(Arc::new(UuidIdGenerator)))?
///     .build();
/// ```
pub struct ServerBuilder {
    entity_registry: EntityRegistry,
    custom_routes: Vec<Router>,
}

impl ServerBuilder {
    /// Create a new ServerBuilder
    pub fn new() -> Self {
        Self {
            entity_registry: EntityRegistry::new(),
            custom_routes: Vec::new(),
        }
    }

    /// Register entity descriptors
    ///
    /// Fails if an entity type is registered twice.
    pub fn register_entities(
        mut self,
        descriptors: impl IntoIterator<Item = Box<dyn EntityDescriptor>>,
    ) -> Result<Self> {
        for descriptor in descriptors {
            self.entity_registry.register(descriptor)?;
        }
        Ok(self)
    }

    /// Add custom routes to the server
    ///
    /// Use this for endpoints that don't fit the CRUD pattern.
    pub fn with_custom_routes(mut self, routes: Router) -> Self {
        self.custom_routes.push(routes);
        self
    }

    /// Entity types registered so far
    pub fn entity_types(&self) -> Vec<&'static str> {
        self.entity_registry.entity_types()
    }

    /// Build the final REST router
    ///
    /// This generates:
    /// - Health check routes
    /// - CRUD routes for all registered entities
    /// - Custom routes
    /// - A JSON 404 for every other path
    pub fn build(self) -> Router {
        let mut app = health_routes().merge(self.entity_registry.build_routes());

        for custom_router in self.custom_routes {
            app = app.merge(custom_router);
        }

        app.fallback(path_not_found)
            .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
    }

    /// Serve the application with graceful shutdown
    ///
    /// This will:
    /// - Bind to the provided address
    /// - Start serving requests
    /// - Handle SIGTERM and SIGINT (Ctrl+C) for graceful shutdown
    pub async fn serve(self, addr: &str) -> Result<()> {
        let entity_types = self.entity_types().join(", ");
        let app = self.build();
        let listener = TcpListener::bind(addr)
            .await
            .with_context(|| format!("failed to bind {}", addr))?;

        tracing::info!(entities = %entity_types, "Server listening on {}", addr);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .context("server error")?;

        tracing::info!("Server shutdown complete");
        Ok(())
    }
}

impl Default for ServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Wait for shutdown signal (SIGTERM or Ctrl+C)
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C signal, initiating graceful shutdown...");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM signal, initiating graceful shutdown...");
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SequentialIdGenerator;
    use crate::entities::EntityStores;
    use std::sync::Arc;

    #[test]
    fn test_new_creates_empty_builder() {
        let builder = ServerBuilder::new();
        assert!(builder.entity_types().is_empty());
        assert!(builder.custom_routes.is_empty());
    }

    #[test]
    fn test_register_entities_from_stores() {
        let stores = EntityStores::new();
        let builder = ServerBuilder::new()
            .register_entities(stores.descriptors(Arc::new(SequentialIdGenerator::new())))
            .unwrap();
        assert_eq!(builder.entity_types(), vec!["dish", "order"]);
    }

    #[test]
    fn test_registering_stores_twice_fails() {
        let stores = EntityStores::new();
        let ids = Arc::new(SequentialIdGenerator::new());
        let result = ServerBuilder::new()
            .register_entities(stores.descriptors(ids.clone()))
            .and_then(|builder| builder.register_entities(stores.descriptors(ids)));
        assert!(result.is_err());
    }

    #[test]
    fn test_with_custom_routes_appends_router() {
        let builder = ServerBuilder::new()
            .with_custom_routes(Router::new())
            .with_custom_routes(Router::new());
        assert_eq!(builder.custom_routes.len(), 2);
    }

    #[test]
    fn test_build_with_custom_routes() {
        use axum::routing::get;

        let custom = Router::new().route("/custom", get(|| async { "ok" }));
        let _router = ServerBuilder::new().with_custom_routes(custom).build();
    }
}
