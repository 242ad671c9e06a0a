use super::{share, CartActivity};
use crate::domain::CartStatus;

/// Discount Sensitive Cart Abandonment Frequency.
///
/// Share of carts where a discount was viewed that were then abandoned. Carts
/// that never showed a discount are outside the denominator.
pub fn discount_sensitive_cart_abandonment<R: CartActivity>(carts: &[R]) -> f64 {
    let (viewed, abandoned) = carts.iter().filter(|cart| cart.discount_viewed()).fold(
        (0usize, 0usize),
        |(viewed, abandoned), cart| {
            let abandoned_here = usize::from(cart.cart_status() == CartStatus::Abandoned);
            (viewed + 1, abandoned + abandoned_here)
        },
    );
    share(abandoned, viewed)
}
