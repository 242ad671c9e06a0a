use super::{share, SaleTimedRecord};

/// Purchase Frequency During Sales: share of orders that fell inside a sale.
pub fn purchase_frequency_during_sales<R: SaleTimedRecord>(orders: &[R]) -> f64 {
    let during_sale = orders.iter().filter(|order| order.during_sale()).count();
    share(during_sale, orders.len())
}
