//! Checkout capture payloads and the resulting order receipt.

use crate::catalog::Money;
use serde::{Deserialize, Serialize};

/// Opaque identifier for a cart frozen for payment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CheckoutToken {
    pub id: String,
}

/// Customer identity fields collected by the checkout form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub email: String,
    pub firstname: String,
    pub lastname: String,
}

/// Shipping address collected by the checkout form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Shipping {
    pub name: String,
    pub street: String,
    pub town_city: String,
    pub postal_zip_code: String,
    pub county_state: String,
    pub country: String,
}

/// Card fields forwarded opaquely to the payment gateway.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub number: String,
    pub expiry_month: String,
    pub expiry_year: String,
    pub cvc: String,
    pub postal_zip_code: String,
}

/// Fulfillment selection for the order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Fulfillment {
    pub shipping_method: String,
}

/// The full capture payload. The client performs no validation on any of
/// these fields; the backend owns that entirely.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CheckoutForm {
    pub customer: Customer,
    pub shipping: Shipping,
    pub fulfillment: Fulfillment,
    pub card: Card,
}

/// Receipt produced by a successful checkout capture. Persisted verbatim so
/// the confirmation view survives a page reload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    #[serde(default)]
    pub customer_reference: String,
    #[serde(default)]
    pub customer: Customer,
    #[serde(default)]
    pub total: Money,
}
