use super::{share, DiscountedRecord};

/// Discount Usage Frequency: share of orders placed with any discount.
pub fn discount_usage_frequency<R: DiscountedRecord>(orders: &[R]) -> f64 {
    let discounted = orders.iter().filter(|order| order.is_discounted()).count();
    share(discounted, orders.len())
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::discount_usage_frequency;
    use crate::domain::{ActivityRecord, DiscountApplied};

    fn order(discount: Option<DiscountApplied>) -> ActivityRecord {
        ActivityRecord { discount_applied: discount, ..ActivityRecord::default() }
    }

    #[test]
    fn empty_orders_yield_zero() {
        assert_eq!(discount_usage_frequency::<ActivityRecord>(&[]), 0.0);
    }

    #[test]
    fn counts_flags_and_positive_amounts() {
        let orders = vec![
            order(Some(DiscountApplied::Flag(true))),
            order(Some(DiscountApplied::Amount(Decimal::new(5, 0)))),
            order(Some(DiscountApplied::Amount(Decimal::ZERO))),
            order(Some(DiscountApplied::Flag(false))),
            order(None),
        ];

        assert!((discount_usage_frequency(&orders) - 0.4).abs() < 1e-12);
    }

    #[test]
    fn invariant_to_record_order() {
        let mut orders = vec![
            order(Some(DiscountApplied::Flag(true))),
            order(None),
            order(None),
            order(Some(DiscountApplied::Amount(Decimal::new(3, 1)))),
        ];
        let forward = discount_usage_frequency(&orders);
        orders.reverse();
        orders.rotate_left(1);

        assert_eq!(forward, discount_usage_frequency(&orders));
        assert!((forward - 0.5).abs() < 1e-12);
    }
}
