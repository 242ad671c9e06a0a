use serde::{Deserialize, Serialize};

use crate::domain::customer::CustomerId;

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CartId(pub String);

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CartStatus {
    Abandoned,
    #[default]
    Completed,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartRecord {
    pub cart_id: CartId,
    pub customer_id: CustomerId,
    #[serde(default)]
    pub cart_status: Option<CartStatus>,
    #[serde(default)]
    pub discount_viewed: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::{CartRecord, CartStatus};

    #[test]
    fn missing_status_and_view_flag_stay_unset() {
        let cart: CartRecord =
            serde_json::from_str(r#"{"cart_id":"k-1","customer_id":"c-1"}"#).expect("cart parses");

        assert_eq!(cart.cart_status, None);
        assert_eq!(cart.discount_viewed, None);
        assert_eq!(cart.cart_status.unwrap_or_default(), CartStatus::Completed);
    }

    #[test]
    fn unknown_status_is_rejected() {
        let parsed = serde_json::from_str::<CartRecord>(
            r#"{"cart_id":"k-1","customer_id":"c-1","cart_status":"pending"}"#,
        );
        assert!(parsed.is_err());
    }
}
