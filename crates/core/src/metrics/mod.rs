//! Per-customer behavioural metrics.
//!
//! Each aggregator is a filter-count-divide over a slice of records and
//! yields a share in `[0, 1]`. Aggregators are generic over the capability
//! traits below, so they accept order rows, cart rows, or joined activity
//! rows. An empty slice, or an empty denominator, yields `0.0`.

mod discount_proportion;
mod dscaf;
mod duf;
mod pfds;

use chrono::{DateTime, Utc};

pub use discount_proportion::discount_proportion;
pub use dscaf::discount_sensitive_cart_abandonment;
pub use duf::discount_usage_frequency;
pub use pfds::purchase_frequency_during_sales;

use crate::domain::{
    ActivityRecord, CartRecord, CartStatus, DiscountApplied, OrderRecord, SalePeriod,
};

/// A record that may carry a discount.
pub trait DiscountedRecord {
    fn discount_applied(&self) -> Option<&DiscountApplied>;

    /// Missing discounts count as zero.
    fn is_discounted(&self) -> bool {
        self.discount_applied().is_some_and(DiscountApplied::is_applied)
    }
}

/// A purchase that can be placed relative to a sale.
pub trait SaleTimedRecord {
    fn order_date(&self) -> Option<DateTime<Utc>>;
    fn sale_period(&self) -> Option<&SalePeriod>;

    fn during_sale(&self) -> bool {
        self.sale_period().is_some_and(|period| period.contains(self.order_date()))
    }
}

/// A shopping cart outcome.
pub trait CartActivity {
    fn cart_status(&self) -> CartStatus;
    fn discount_viewed(&self) -> bool;
}

fn share(matching: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        matching as f64 / total as f64
    }
}

impl DiscountedRecord for OrderRecord {
    fn discount_applied(&self) -> Option<&DiscountApplied> {
        self.discount_applied.as_ref()
    }
}

impl SaleTimedRecord for OrderRecord {
    fn order_date(&self) -> Option<DateTime<Utc>> {
        self.order_date
    }

    fn sale_period(&self) -> Option<&SalePeriod> {
        self.sale_period.as_ref()
    }
}

impl CartActivity for CartRecord {
    fn cart_status(&self) -> CartStatus {
        self.cart_status.unwrap_or_default()
    }

    fn discount_viewed(&self) -> bool {
        self.discount_viewed.unwrap_or(false)
    }
}

impl DiscountedRecord for ActivityRecord {
    fn discount_applied(&self) -> Option<&DiscountApplied> {
        self.discount_applied.as_ref()
    }
}

impl SaleTimedRecord for ActivityRecord {
    fn order_date(&self) -> Option<DateTime<Utc>> {
        self.order_date
    }

    fn sale_period(&self) -> Option<&SalePeriod> {
        self.sale_period.as_ref()
    }
}

impl CartActivity for ActivityRecord {
    fn cart_status(&self) -> CartStatus {
        self.cart_status.unwrap_or_default()
    }

    fn discount_viewed(&self) -> bool {
        self.discount_viewed.unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::share;

    #[test]
    fn share_of_nothing_is_zero() {
        assert_eq!(share(0, 0), 0.0);
        assert_eq!(share(3, 0), 0.0);
    }

    #[test]
    fn share_divides_matching_by_total() {
        assert!((share(1, 4) - 0.25).abs() < f64::EPSILON);
        assert!((share(4, 4) - 1.0).abs() < f64::EPSILON);
    }
}
