pub mod activity;
pub mod cart;
pub mod customer;
pub mod order;

pub use activity::{parse_activity_batch, ActivityRecord};
pub use cart::{CartId, CartRecord, CartStatus};
pub use customer::CustomerId;
pub use order::{DiscountApplied, ItemId, OrderId, OrderRecord, SalePeriod};
