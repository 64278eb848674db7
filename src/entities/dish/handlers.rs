//! Dish HTTP handlers

use super::{
    model::{Dish, DishFields},
    validation::DishValidators,
};
use crate::core::{
    ApiResult, DataPayload, EntityStore, Envelope, IdGenerator, RequestContext,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
};
use serde::Deserialize;
use std::sync::Arc;

/// Dish-specific AppState
#[derive(Clone)]
pub struct DishAppState {
    pub store: EntityStore<Dish>,
    pub ids: Arc<dyn IdGenerator>,
    pub validators: Arc<DishValidators>,
}

impl DishAppState {
    pub fn new(store: EntityStore<Dish>, ids: Arc<dyn IdGenerator>) -> Self {
        Self {
            store,
            ids,
            validators: Arc::new(DishValidators::new()),
        }
    }
}

pub async fn list_dishes(State(state): State<DishAppState>) -> ApiResult<Envelope<Vec<Dish>>> {
    Ok(Envelope::new(state.store.list()?))
}

pub async fn create_dish(
    State(state): State<DishAppState>,
    DataPayload(data): DataPayload,
) -> ApiResult<(StatusCode, Envelope<Dish>)> {
    state
        .validators
        .create
        .run(&RequestContext::for_create(&data))?;
    let fields = DishFields::deserialize(&data)?;

    let dish = state
        .store
        .write(|dishes| dishes.insert_new(state.ids.as_ref(), |id| Dish::from_fields(id, fields)))?;

    tracing::info!(dish_id = %dish.id, name = %dish.name, "dish created");
    Ok((StatusCode::CREATED, Envelope::new(dish)))
}

pub async fn get_dish(
    State(state): State<DishAppState>,
    Path(dish_id): Path<String>,
) -> ApiResult<Envelope<Dish>> {
    let dish = state.store.read(|dishes| {
        let ctx = RequestContext::for_item_without_body(&dish_id, dishes.get(&dish_id));
        state.validators.read.run(&ctx)?;
        ctx.require_current().cloned()
    })?;

    Ok(Envelope::new(dish))
}

/// Replace a stored dish with the payload's fields
///
/// The id always comes from the route.
pub async fn update_dish(
    State(state): State<DishAppState>,
    Path(dish_id): Path<String>,
    DataPayload(data): DataPayload,
) -> ApiResult<Envelope<Dish>> {
    let dish = state.store.write(|dishes| {
        let ctx = RequestContext::for_item(&dish_id, &data, dishes.get(&dish_id));
        state.validators.update.run(&ctx)?;

        let fields = DishFields::deserialize(&data)?;
        dishes.replace(&dish_id, Dish::from_fields(dish_id.clone(), fields))
    })?;

    tracing::info!(dish_id = %dish.id, "dish updated");
    Ok(Envelope::new(dish))
}
