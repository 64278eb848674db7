//! Shared fixtures for the HTTP integration tests
//!
//! Every server is built over stores the test keeps a handle to, so a test
//! can assert what the service actually persisted.

#![allow(dead_code)]

use axum_test::TestServer;
use grubdash::prelude::*;
use serde_json::{Number, Value, json};

/// A running test server plus the stores behind it
pub struct TestApp {
    pub server: TestServer,
    pub stores: EntityStores,
}

/// Build a test server over the given stores with sequential ids ("1", "2", ...)
pub fn spawn(stores: EntityStores) -> TestApp {
    let router = ServerBuilder::new()
        .register_entities(stores.descriptors(Arc::new(SequentialIdGenerator::new())))
        .unwrap()
        .build();
    TestApp {
        server: TestServer::new(router).unwrap(),
        stores,
    }
}

/// Test server over empty stores
pub fn spawn_empty() -> TestApp {
    spawn(EntityStores::new())
}

/// Test server over the stores described by [`seed`]
pub fn spawn_seeded() -> TestApp {
    spawn(EntityStores::from_seed(&seed()).unwrap())
}

pub fn dish(id: &str, name: &str, price: f64) -> Dish {
    Dish {
        id: id.to_string(),
        name: name.to_string(),
        description: format!("{} of the day", name),
        price: Number::from_f64(price).unwrap(),
        image_url: format!("https://images.example/{}.jpg", id),
    }
}

pub fn order(id: &str, status: OrderStatus) -> Order {
    Order {
        id: id.to_string(),
        deliver_to: "1600 Pennsylvania Avenue NW, Washington, DC 20500".to_string(),
        mobile_number: "(202) 456-1111".to_string(),
        status,
        dishes: vec![OrderLine::for_dish("d1", 2)],
    }
}

/// Two dishes and one order per status
///
/// Order ids: `pending`, `preparing`, `out`, `delivered`.
pub fn seed() -> SeedData {
    SeedData {
        dishes: vec![
            dish("d1", "Dolcelatte and chickpea spaghetti", 19.0),
            dish("d2", "Falafel and tahini bagel", 6.5),
        ],
        orders: vec![
            order("pending", OrderStatus::Pending),
            order("preparing", OrderStatus::Preparing),
            order("out", OrderStatus::OutForDelivery),
            order("delivered", OrderStatus::Delivered),
        ],
    }
}

pub fn taco_payload() -> Value {
    json!({
        "data": {
            "name": "Taco",
            "description": "Spicy",
            "price": 3,
            "image_url": "http://x"
        }
    })
}

pub fn order_payload(status: &str) -> Value {
    json!({
        "data": {
            "deliverTo": "308 Negra Arroyo Lane",
            "mobileNumber": "(505) 143-3369",
            "status": status,
            "dishes": [{ "dishId": "d1", "quantity": 1 }]
        }
    })
}

/// Whole order payload with `field` replaced by `value` (or removed when `value` is null)
pub fn order_payload_with(status: &str, field: &str, value: Value) -> Value {
    let mut payload = order_payload(status);
    let data = payload["data"].as_object_mut().unwrap();
    if value.is_null() {
        data.remove(field);
    } else {
        data.insert(field.to_string(), value);
    }
    payload
}

/// The `error` string of an error response
pub fn error_message(body: &Value) -> &str {
    body["error"].as_str().unwrap()
}
