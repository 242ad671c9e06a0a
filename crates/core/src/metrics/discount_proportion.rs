use super::{share, DiscountedRecord};

/// Share of records carrying a discount.
///
/// Same shape as DUF, but meant for whatever granularity the caller passes:
/// orders, or line items when the source has them.
pub fn discount_proportion<R: DiscountedRecord>(records: &[R]) -> f64 {
    let discounted = records.iter().filter(|record| record.is_discounted()).count();
    share(discounted, records.len())
}
