//! Joined customer activity rows.
//!
//! The scoring pipeline reads one collection for all four metrics, so order
//! and cart fields travel together on a single row. Sources that keep orders
//! and carts in separate tables convert each side with `From` and concatenate.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::cart::{CartId, CartRecord, CartStatus};
use crate::domain::customer::CustomerId;
use crate::domain::order::{DiscountApplied, ItemId, OrderId, OrderRecord, SalePeriod};
use crate::errors::DomainError;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ActivityRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_id: Option<OrderId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_id: Option<ItemId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cart_id: Option<CartId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<CustomerId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount_applied: Option<DiscountApplied>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sale_period: Option<SalePeriod>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cart_status: Option<CartStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount_viewed: Option<bool>,
}

impl ActivityRecord {
    pub fn with_discount(mut self, discount: DiscountApplied) -> Self {
        self.discount_applied = Some(discount);
        self
    }

    pub fn with_sale(mut self, sale_period: SalePeriod) -> Self {
        self.sale_period = Some(sale_period);
        self
    }

    pub fn with_order_date(mut self, order_date: DateTime<Utc>) -> Self {
        self.order_date = Some(order_date);
        self
    }

    pub fn with_cart(mut self, status: CartStatus, discount_viewed: bool) -> Self {
        self.cart_status = Some(status);
        self.discount_viewed = Some(discount_viewed);
        self
    }

    pub fn with_customer(mut self, customer_id: impl Into<String>) -> Self {
        self.customer_id = Some(CustomerId(customer_id.into()));
        self
    }
}

impl From<OrderRecord> for ActivityRecord {
    fn from(order: OrderRecord) -> Self {
        Self {
            order_id: Some(order.order_id),
            item_id: order.item_id,
            customer_id: Some(order.customer_id),
            discount_applied: order.discount_applied,
            order_date: order.order_date,
            sale_period: order.sale_period,
            ..Self::default()
        }
    }
}

impl From<CartRecord> for ActivityRecord {
    fn from(cart: CartRecord) -> Self {
        Self {
            cart_id: Some(cart.cart_id),
            customer_id: Some(cart.customer_id),
            cart_status: cart.cart_status,
            discount_viewed: cart.discount_viewed,
            ..Self::default()
        }
    }
}

/// Parses a batch of activity rows from a JSON array or from JSON Lines.
///
/// `MalformedRecord::position` is the 1-based array element or line number of
/// the first row that fails; position 0 refers to the batch as a whole.
pub fn parse_activity_batch(raw: &str) -> Result<Vec<ActivityRecord>, DomainError> {
    let trimmed = raw.trim_start();
    if trimmed.is_empty() {
        return Ok(Vec::new());
    }

    if trimmed.starts_with('[') {
        let rows: Vec<Value> = serde_json::from_str(trimmed).map_err(|error| {
            DomainError::MalformedRecord {
                position: 0,
                message: format!("input is not a JSON array of records: {error}"),
            }
        })?;

        return rows
            .into_iter()
            .enumerate()
            .map(|(index, row)| {
                serde_json::from_value(row).map_err(|error| DomainError::MalformedRecord {
                    position: index + 1,
                    message: error.to_string(),
                })
            })
            .collect();
    }

    raw.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(index, line)| {
            serde_json::from_str(line).map_err(|error| DomainError::MalformedRecord {
                position: index + 1,
                message: error.to_string(),
            })
        })
        .collect()
}
