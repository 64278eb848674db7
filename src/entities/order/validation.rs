//! Validation chains for order routes
//!
//! Besides field checks, two lifecycle rules live here: a delivered order
//! cannot be changed, and only a pending order can be deleted.

use super::model::{Order, OrderStatus, whole_quantity};
use crate::core::error::{ApiError, ApiResult};
use crate::core::validation::{
    DataObject, EntityExists, IdMatchesRoute, RequestContext, RequiredText, ValidationChain,
    Validator,
};
use serde_json::Value;

const DELIVER_TO: RequiredText = RequiredText::new("deliverTo", "Order must include a deliverTo");
const MOBILE_NUMBER: RequiredText =
    RequiredText::new("mobileNumber", "Order must include a mobileNumber");

const INVALID_STATUS: &str =
    "Order must have a status of pending, preparing, out-for-delivery, delivered";

/// Parse a payload status value, if it is one of the known statuses
fn parse_status(value: &Value) -> Option<OrderStatus> {
    value.as_str().and_then(|s| s.parse().ok())
}

/// Validator: `dishes` is a non-empty array whose entries all have a positive integer `quantity`
///
/// Reports the index of the first offending entry. Entries are otherwise
/// opaque: `dishId` and any extra fields are not inspected.
#[derive(Debug, Clone, Copy, Default)]
pub struct DishLines;

impl Validator<Order> for DishLines {
    fn name(&self) -> &'static str {
        "dishes"
    }

    fn validate(&self, ctx: &RequestContext<'_, Order>) -> ApiResult<()> {
        let lines = match ctx.field("dishes").and_then(Value::as_array) {
            Some(lines) if !lines.is_empty() => lines,
            _ => {
                return Err(ApiError::validation(
                    "dishes",
                    "Dishes must include at least one dish",
                ));
            }
        };

        for (index, line) in lines.iter().enumerate() {
            if line.get("quantity").and_then(whole_quantity).is_none() {
                return Err(ApiError::validation(
                    format!("dishes[{}].quantity", index),
                    format!(
                        "Dish {} must have a quantity that is an integer greater than 0",
                        index
                    ),
                ));
            }
        }

        Ok(())
    }
}

/// Validator (update): payload status is recognized and the stored order is not delivered
#[derive(Debug, Clone, Copy, Default)]
pub struct StatusTransition;

impl Validator<Order> for StatusTransition {
    fn name(&self) -> &'static str {
        "status"
    }

    fn validate(&self, ctx: &RequestContext<'_, Order>) -> ApiResult<()> {
        if ctx.field("status").and_then(parse_status).is_none() {
            return Err(ApiError::validation("status", INVALID_STATUS));
        }

        match ctx.current {
            Some(order) if order.status == OrderStatus::Delivered => Err(
                ApiError::business_rule("A delivered order cannot be changed"),
            ),
            _ => Ok(()),
        }
    }
}

/// Validator (create): a status, when supplied, is recognized
#[derive(Debug, Clone, Copy, Default)]
pub struct OptionalStatus;

impl Validator<Order> for OptionalStatus {
    fn name(&self) -> &'static str {
        "status"
    }

    fn validate(&self, ctx: &RequestContext<'_, Order>) -> ApiResult<()> {
        match ctx.field("status") {
            None => Ok(()),
            Some(value) if parse_status(value).is_some() => Ok(()),
            Some(_) => Err(ApiError::validation("status", INVALID_STATUS)),
        }
    }
}

/// Validator (delete): the stored order is still pending
#[derive(Debug, Clone, Copy, Default)]
pub struct PendingOnly;

impl Validator<Order> for PendingOnly {
    fn name(&self) -> &'static str {
        "pending"
    }

    fn validate(&self, ctx: &RequestContext<'_, Order>) -> ApiResult<()> {
        let order = ctx.require_current()?;
        if order.status == OrderStatus::Pending {
            Ok(())
        } else {
            Err(ApiError::business_rule(
                "An order cannot be deleted unless it is pending",
            ))
        }
    }
}

/// The chain run by each order route
pub struct OrderValidators {
    pub create: ValidationChain<Order>,
    pub read: ValidationChain<Order>,
    pub update: ValidationChain<Order>,
    pub delete: ValidationChain<Order>,
}

impl OrderValidators {
    pub fn new() -> Self {
        Self {
            create: ValidationChain::new("create")
                .then(DataObject)
                .then(DishLines)
                .then(DELIVER_TO)
                .then(MOBILE_NUMBER)
                .then(OptionalStatus),
            read: ValidationChain::new("read").then(EntityExists),
            update: ValidationChain::new("update")
                .then(EntityExists)
                .then(DataObject)
                .then(IdMatchesRoute)
                .then(StatusTransition)
                .then(DishLines)
                .then(DELIVER_TO)
                .then(MOBILE_NUMBER),
            delete: ValidationChain::new("delete")
                .then(EntityExists)
                .then(PendingOnly),
        }
    }

    /// Check an order that is loaded directly into the store (seed data)
    pub fn check_stored(&self, order: &Order) -> ApiResult<()> {
        let data = serde_json::to_value(order)?;
        self.create.run(&RequestContext::for_create(&data))
    }
}

impl Default for OrderValidators {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::order::model::OrderLine;
    use crate::entities::order::model::OrderFields;
    use serde::Deserialize;
    use serde_json::json;

    fn payload() -> Value {
        json!({
            "deliverTo": "308 Negra Arroyo Lane",
            "mobileNumber": "(505) 143-3369",
            "status": "preparing",
            "dishes": [{ "dishId": "d1", "quantity": 2 }]
        })
    }

    fn stored(status: OrderStatus) -> Order {
        Order {
            id: "o1".to_string(),
            deliver_to: "1 Main St".to_string(),
            mobile_number: "555".to_string(),
            status,
            dishes: vec![OrderLine::for_dish("d1", 1)],
        }
    }

    fn create(data: Value) -> ApiResult<()> {
        OrderValidators::new()
            .create
            .run(&RequestContext::for_create(&data))
    }

    fn update(current: &Order, data: Value) -> ApiResult<()> {
        OrderValidators::new()
            .update
            .run(&RequestContext::for_item(&current.id, &data, Some(current)))
    }

    fn delete(current: Option<&Order>) -> ApiResult<()> {
        OrderValidators::new()
            .delete
            .run(&RequestContext::for_item_without_body("o1", current))
    }

    #[test]
    fn test_chain_orders() {
        let rules = OrderValidators::new();
        assert_eq!(
            rules.create.names(),
            vec!["data", "dishes", "deliverTo", "mobileNumber", "status"]
        );
        assert_eq!(
            rules.update.names(),
            vec!["exists", "data", "id", "status", "dishes", "deliverTo", "mobileNumber"]
        );
        assert_eq!(rules.delete.names(), vec!["exists", "pending"]);
    }

    #[test]
    fn test_valid_create_passes() {
        assert!(create(payload()).is_ok());
    }

    #[test]
    fn test_create_without_status_passes() {
        let mut data = payload();
        data.as_object_mut().unwrap().remove("status");
        assert!(create(data).is_ok());
    }

    #[test]
    fn test_create_with_unknown_status_fails() {
        let mut data = payload();
        data["status"] = json!("shipped");
        assert_eq!(create(data).unwrap_err().to_string(), INVALID_STATUS);
    }

    #[test]
    fn test_missing_or_empty_dishes_fail() {
        for dishes in [json!(null), json!([]), json!("d1"), json!({})] {
            let mut data = payload();
            data["dishes"] = dishes;
            assert_eq!(
                create(data).unwrap_err().to_string(),
                "Dishes must include at least one dish"
            );
        }
    }

    #[test]
    fn test_bad_quantity_reports_index() {
        for quantity in [json!(0), json!(-1), json!(1.5), json!("2"), json!(null)] {
            let mut data = payload();
            data["dishes"] = json!([
                { "dishId": "d1", "quantity": 1 },
                { "dishId": "d2", "quantity": quantity }
            ]);
            let err = create(data).unwrap_err();
            assert_eq!(
                err.to_string(),
                "Dish 1 must have a quantity that is an integer greater than 0"
            );
        }
    }

    #[test]
    fn test_whole_float_quantity_passes() {
        let mut data = payload();
        data["dishes"] = json!([{ "dishId": "d1", "quantity": 2.0 }]);
        assert!(create(data).is_ok());
    }

    #[test]
    fn test_lines_accepted_by_the_chain_always_deserialize() {
        let lines = [
            json!([{ "dishId": 7, "quantity": 2 }]),
            json!([{ "dishId": null, "quantity": 2.0 }]),
            json!([{ "quantity": 4294967295u64 }]),
            json!([{ "dishId": ["d1"], "quantity": 1, "notes": { "spicy": true } }]),
        ];
        for dishes in lines {
            let mut data = payload();
            data["dishes"] = dishes.clone();
            assert!(create(data.clone()).is_ok(), "dishes {}", dishes);
            assert!(OrderFields::deserialize(&data).is_ok(), "dishes {}", dishes);
        }
    }

    #[test]
    fn test_out_of_range_quantity_fails() {
        let mut data = payload();
        data["dishes"] = json!([{ "quantity": 4294967296u64 }]);
        assert!(create(data).unwrap_err().to_string().starts_with("Dish 0 "));
    }

    #[test]
    fn test_missing_data_object_fails_after_existence() {
        let data = Value::Null;
        let err = OrderValidators::new()
            .update
            .run(&RequestContext::for_item("o1", &data, None))
            .unwrap_err();
        assert!(matches!(err, ApiError::NotFound { .. }));

        let current = stored(OrderStatus::Pending);
        let err = update(&current, Value::Null).unwrap_err();
        assert_eq!(err.to_string(), "Request body must include a 'data' property");
    }

    #[test]
    fn test_missing_quantity_reports_index() {
        let mut data = payload();
        data["dishes"] = json!([{ "dishId": "d1" }]);
        assert!(create(data).unwrap_err().to_string().starts_with("Dish 0 "));
    }

    #[test]
    fn test_missing_contact_fields_fail_in_order() {
        let mut data = payload();
        data.as_object_mut().unwrap().remove("deliverTo");
        data.as_object_mut().unwrap().remove("mobileNumber");
        assert_eq!(
            create(data).unwrap_err().to_string(),
            "Order must include a deliverTo"
        );

        let mut data = payload();
        data["mobileNumber"] = json!("");
        assert_eq!(
            create(data).unwrap_err().to_string(),
            "Order must include a mobileNumber"
        );
    }

    #[test]
    fn test_update_requires_known_status() {
        let current = stored(OrderStatus::Pending);
        for status in [json!(null), json!(""), json!("invalid"), json!(3)] {
            let mut data = payload();
            data["status"] = status;
            assert_eq!(
                update(&current, data).unwrap_err().to_string(),
                INVALID_STATUS
            );
        }
    }

    #[test]
    fn test_update_to_delivered_is_allowed() {
        let current = stored(OrderStatus::Preparing);
        let mut data = payload();
        data["status"] = json!("delivered");
        assert!(update(&current, data).is_ok());
    }

    #[test]
    fn test_update_of_delivered_order_is_rejected() {
        let current = stored(OrderStatus::Delivered);
        let err = update(&current, payload()).unwrap_err();
        assert!(matches!(err, ApiError::BusinessRule { .. }));
        assert_eq!(err.to_string(), "A delivered order cannot be changed");
    }

    #[test]
    fn test_update_id_mismatch_precedes_status() {
        let current = stored(OrderStatus::Delivered);
        let mut data = payload();
        data["id"] = json!("other");
        let err = update(&current, data).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Order id does not match route id. Order: other, Route: o1"
        );
    }

    #[test]
    fn test_delete_only_pending() {
        assert!(delete(Some(&stored(OrderStatus::Pending))).is_ok());
        for status in [
            OrderStatus::Preparing,
            OrderStatus::OutForDelivery,
            OrderStatus::Delivered,
        ] {
            let err = delete(Some(&stored(status))).unwrap_err();
            assert_eq!(
                err.to_string(),
                "An order cannot be deleted unless it is pending"
            );
        }
    }

    #[test]
    fn test_delete_missing_is_not_found_first() {
        let err = delete(None).unwrap_err();
        assert!(matches!(err, ApiError::NotFound { .. }));
        assert_eq!(err.to_string(), "Order o1 not found");
    }

    #[test]
    fn test_check_stored_rejects_empty_dishes() {
        let rules = OrderValidators::new();
        let mut order = stored(OrderStatus::Pending);
        assert!(rules.check_stored(&order).is_ok());

        order.dishes.clear();
        assert!(rules.check_stored(&order).is_err());
    }
}
