//! Order entity model

use crate::core::entity::Entity;
use serde::{Deserialize, Deserializer, Serialize, de};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

/// Delivery lifecycle of an order
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OrderStatus {
    #[default]
    Pending,
    Preparing,
    OutForDelivery,
    Delivered,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 4] = [
        OrderStatus::Pending,
        OrderStatus::Preparing,
        OrderStatus::OutForDelivery,
        OrderStatus::Delivered,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Preparing => "preparing",
            OrderStatus::OutForDelivery => "out-for-delivery",
            OrderStatus::Delivered => "delivered",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OrderStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or(())
    }
}

/// A positive whole number that fits a `u32`
///
/// `2` and `2.0` both qualify; `2.5`, `"2"` and `0` do not.
pub fn whole_quantity(value: &Value) -> Option<u32> {
    let whole = match value.as_u64() {
        Some(n) => n,
        None => {
            let f = value.as_f64()?;
            if f.fract() != 0.0 || f < 1.0 || f > f64::from(u32::MAX) {
                return None;
            }
            f as u64
        }
    };
    u32::try_from(whole).ok().filter(|q| *q > 0)
}

fn deserialize_quantity<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    whole_quantity(&value).ok_or_else(|| {
        de::Error::custom(format!("quantity must be a positive integer, got {}", value))
    })
}

/// One dish entry of an order
///
/// Everything besides `quantity` (including `dishId`) is kept as sent in
/// `details`. The dish id is not checked against the dish store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLine {
    #[serde(deserialize_with = "deserialize_quantity")]
    pub quantity: u32,
    #[serde(flatten)]
    pub details: Map<String, Value>,
}

impl OrderLine {
    /// Line for a dish id with no other details
    pub fn for_dish(dish_id: impl Into<String>, quantity: u32) -> Self {
        let mut details = Map::new();
        details.insert("dishId".to_string(), Value::String(dish_id.into()));
        Self { quantity, details }
    }

    /// The `dishId` the caller sent, whatever its JSON type
    pub fn dish_id(&self) -> Option<&Value> {
        self.details.get("dishId")
    }
}

/// A delivery order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub deliver_to: String,
    pub mobile_number: String,
    #[serde(default)]
    pub status: OrderStatus,
    pub dishes: Vec<OrderLine>,
}

/// Caller-supplied order fields, read from a validated payload
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderFields {
    pub deliver_to: String,
    pub mobile_number: String,
    #[serde(default)]
    pub status: Option<OrderStatus>,
    pub dishes: Vec<OrderLine>,
}

impl Order {
    /// New order; a missing status starts as `pending`
    pub fn from_fields(id: String, fields: OrderFields) -> Self {
        Self {
            id,
            deliver_to: fields.deliver_to,
            mobile_number: fields.mobile_number,
            status: fields.status.unwrap_or_default(),
            dishes: fields.dishes,
        }
    }

    /// Overwrite every mutable field; the id is untouched
    pub fn apply(&mut self, fields: OrderFields) {
        self.deliver_to = fields.deliver_to;
        self.mobile_number = fields.mobile_number;
        if let Some(status) = fields.status {
            self.status = status;
        }
        self.dishes = fields.dishes;
    }
}

impl Entity for Order {
    fn resource_name() -> &'static str {
        "orders"
    }

    fn label() -> &'static str {
        "Order"
    }

    fn id(&self) -> &str {
        &self.id
    }
}
