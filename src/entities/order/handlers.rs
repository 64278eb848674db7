//! Order HTTP handlers

use super::{
    model::{Order, OrderFields},
    validation::OrderValidators,
};
use crate::core::{
    ApiError, ApiResult, DataPayload, Entity, EntityStore, Envelope, IdGenerator, RequestContext,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
};
use serde::Deserialize;
use std::sync::Arc;

/// Order-specific AppState
#[derive(Clone)]
pub struct OrderAppState {
    pub store: EntityStore<Order>,
    pub ids: Arc<dyn IdGenerator>,
    pub validators: Arc<OrderValidators>,
}

impl OrderAppState {
    pub fn new(store: EntityStore<Order>, ids: Arc<dyn IdGenerator>) -> Self {
        Self {
            store,
            ids,
            validators: Arc::new(OrderValidators::new()),
        }
    }
}

pub async fn list_orders(State(state): State<OrderAppState>) -> ApiResult<Envelope<Vec<Order>>> {
    Ok(Envelope::new(state.store.list()?))
}

pub async fn create_order(
    State(state): State<OrderAppState>,
    DataPayload(data): DataPayload,
) -> ApiResult<(StatusCode, Envelope<Order>)> {
    state
        .validators
        .create
        .run(&RequestContext::for_create(&data))?;
    let fields = OrderFields::deserialize(&data)?;

    let order = state.store.write(|orders| {
        orders.insert_new(state.ids.as_ref(), |id| Order::from_fields(id, fields))
    })?;

    tracing::info!(order_id = %order.id, status = %order.status, "order created");
    Ok((StatusCode::CREATED, Envelope::new(order)))
}

pub async fn get_order(
    State(state): State<OrderAppState>,
    Path(order_id): Path<String>,
) -> ApiResult<Envelope<Order>> {
    let order = state.store.read(|orders| {
        let ctx = RequestContext::for_item_without_body(&order_id, orders.get(&order_id));
        state.validators.read.run(&ctx)?;
        ctx.require_current().cloned()
    })?;

    Ok(Envelope::new(order))
}

/// Overwrite a stored order's mutable fields in place
pub async fn update_order(
    State(state): State<OrderAppState>,
    Path(order_id): Path<String>,
    DataPayload(data): DataPayload,
) -> ApiResult<Envelope<Order>> {
    let order = state.store.write(|orders| {
        let ctx = RequestContext::for_item(&order_id, &data, orders.get(&order_id));
        state.validators.update.run(&ctx)?;

        let fields = OrderFields::deserialize(&data)?;
        let order = orders
            .get_mut(&order_id)
            .ok_or_else(|| ApiError::not_found(Order::label(), &order_id))?;
        order.apply(fields);
        Ok(order.clone())
    })?;

    tracing::info!(order_id = %order.id, status = %order.status, "order updated");
    Ok(Envelope::new(order))
}

/// Remove a pending order; responds 204 with no body
pub async fn delete_order(
    State(state): State<OrderAppState>,
    Path(order_id): Path<String>,
) -> ApiResult<StatusCode> {
    state.store.write(|orders| {
        let ctx = RequestContext::for_item_without_body(&order_id, orders.get(&order_id));
        state.validators.delete.run(&ctx)?;

        orders
            .remove(&order_id)
            .map(|_| ())
            .ok_or_else(|| ApiError::not_found(Order::label(), &order_id))
    })?;

    tracing::info!(order_id = %order_id, "order deleted");
    Ok(StatusCode::NO_CONTENT)
}
