use std::fmt;

use chrono::{DateTime, Utc};
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::Decimal;
use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize, Serializer};

use crate::domain::customer::CustomerId;

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrderId(pub String);

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemId(pub String);

/// Smallest positive amount a `Decimal` can hold (scale 28).
const MIN_POSITIVE_AMOUNT: f64 = 1e-28;
/// Largest amount a `Decimal` can hold (96-bit mantissa).
const MAX_AMOUNT: f64 = 7.922_816_251_426_434e28;

/// Discount recorded against an order or line item.
///
/// Upstream sources record either a yes/no flag or the discounted amount.
/// Both collapse to a numeric amount where `true` counts as one unit. On the
/// wire only booleans and non-negative JSON numbers are accepted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DiscountApplied {
    Flag(bool),
    Amount(Decimal),
}

impl DiscountApplied {
    pub fn amount(value: Decimal) -> Result<Self, String> {
        if value.is_sign_negative() && !value.is_zero() {
            return Err(format!("discount amount must be non-negative, got {value}"));
        }
        Ok(Self::Amount(value))
    }

    /// Positive amounts that would round to zero, or overflow, as a `Decimal`
    /// are out of range rather than silently changed.
    pub fn from_f64(value: f64) -> Result<Self, String> {
        if !value.is_finite() {
            return Err(format!("discount amount must be finite, got {value}"));
        }
        if value < 0.0 {
            return Err(format!("discount amount must be non-negative, got {value}"));
        }
        if value == 0.0 {
            return Ok(Self::Amount(Decimal::ZERO));
        }
        if value < MIN_POSITIVE_AMOUNT || value > MAX_AMOUNT {
            return Err(format!("discount amount {value:e} is out of range"));
        }

        Decimal::from_f64(value)
            .filter(|amount| !amount.is_zero())
            .map(Self::Amount)
            .ok_or_else(|| format!("discount amount {value:e} is out of range"))
    }

    pub fn as_amount(&self) -> Decimal {
        match self {
            Self::Flag(true) => Decimal::ONE,
            Self::Flag(false) => Decimal::ZERO,
            Self::Amount(value) => *value,
        }
    }

    pub fn is_applied(&self) -> bool {
        self.as_amount() > Decimal::ZERO
    }
}

impl Serialize for DiscountApplied {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Flag(flag) => serializer.serialize_bool(*flag),
            Self::Amount(amount) => match amount.to_u64().filter(|_| amount.is_integer()) {
                Some(whole) => serializer.serialize_u64(whole),
                None => serializer.serialize_f64(amount.to_f64().unwrap_or(f64::MAX)),
            },
        }
    }
}

impl<'de> Deserialize<'de> for DiscountApplied {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(DiscountVisitor)
    }
}

struct DiscountVisitor;

impl<'de> Visitor<'de> for DiscountVisitor {
    type Value = DiscountApplied;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a boolean or a non-negative number")
    }

    fn visit_bool<E: de::Error>(self, value: bool) -> Result<Self::Value, E> {
        Ok(DiscountApplied::Flag(value))
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<Self::Value, E> {
        Ok(DiscountApplied::Amount(Decimal::from(value)))
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<Self::Value, E> {
        if value < 0 {
            return Err(E::custom(format!("discount amount must be non-negative, got {value}")));
        }
        Ok(DiscountApplied::Amount(Decimal::from(value)))
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> Result<Self::Value, E> {
        DiscountApplied::from_f64(value).map_err(E::custom)
    }
}

/// Whether an order fell inside a sale.
///
/// Either a precomputed flag, or the sale window the order is tested against.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawSalePeriod", into = "RawSalePeriod")]
pub enum SalePeriod {
    Flag(bool),
    Interval { start: DateTime<Utc>, end: DateTime<Utc> },
}

impl SalePeriod {
    pub fn interval(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Self, String> {
        if start > end {
            return Err(format!("sale period starts at {start} after it ends at {end}"));
        }
        Ok(Self::Interval { start, end })
    }

    /// Bounds are inclusive. An interval cannot be resolved without an order date.
    pub fn contains(&self, order_date: Option<DateTime<Utc>>) -> bool {
        match self {
            Self::Flag(flag) => *flag,
            Self::Interval { start, end } => {
                order_date.is_some_and(|date| *start <= date && date <= *end)
            }
        }
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(untagged)]
enum RawSalePeriod {
    Flag(bool),
    Interval { start: DateTime<Utc>, end: DateTime<Utc> },
}

impl TryFrom<RawSalePeriod> for SalePeriod {
    type Error = String;

    fn try_from(value: RawSalePeriod) -> Result<Self, Self::Error> {
        match value {
            RawSalePeriod::Flag(flag) => Ok(Self::Flag(flag)),
            RawSalePeriod::Interval { start, end } => Self::interval(start, end),
        }
    }
}

impl From<SalePeriod> for RawSalePeriod {
    fn from(value: SalePeriod) -> Self {
        match value {
            SalePeriod::Flag(flag) => Self::Flag(flag),
            SalePeriod::Interval { start, end } => Self::Interval { start, end },
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OrderRecord {
    pub order_id: OrderId,
    pub customer_id: CustomerId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_id: Option<ItemId>,
    #[serde(default)]
    pub discount_applied: Option<DiscountApplied>,
    #[serde(default)]
    pub order_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub sale_period: Option<SalePeriod>,
}
