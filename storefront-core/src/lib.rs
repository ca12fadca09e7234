//! Storefront Core
//!
//! Platform-agnostic commerce domain for the storefront single-page app.
//! This crate provides the data model, the remote-API and receipt-persistence
//! ports, and the pure state reducers, without UI or platform-specific
//! dependencies. All pricing, tax and inventory logic lives behind the remote
//! commerce API; this crate only mirrors what the server returns.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod error;
pub mod receipt;
pub mod session;
pub mod state;

// Re-export commonly used types
pub use cart::{Cart, LineItem};
pub use catalog::{Money, Product};
pub use checkout::{Card, CheckoutForm, CheckoutToken, Customer, Fulfillment, Order, Shipping};
pub use error::CommerceError;
pub use receipt::{MemoryReceiptStore, RECEIPT_KEY, ReceiptStore};
pub use session::{CheckoutOutcome, StoreSession};
pub use state::StoreState;

/// Port to the remote commerce backend.
///
/// Every operation is a one-shot request/response call; input validation is
/// entirely the server's concern. Implementations track the active cart id
/// themselves, so cart mutations only name the product or line they touch.
#[allow(async_fn_in_trait)]
pub trait CommerceApi {
    /// Fetch the full product catalog.
    ///
    /// # Errors
    ///
    /// Returns an error if the listing call fails or the body is malformed.
    async fn list_products(&self) -> Result<Vec<Product>, CommerceError>;

    /// Fetch the current cart, creating one server-side when none exists yet.
    ///
    /// # Errors
    ///
    /// Returns an error if the cart cannot be retrieved or created.
    async fn retrieve_cart(&self) -> Result<Cart, CommerceError>;

    /// Add `quantity` of a product to the cart. Returns the whole new cart.
    ///
    /// # Errors
    ///
    /// Returns an error if the server rejects the mutation.
    async fn add_to_cart(&self, product_id: &str, quantity: u32) -> Result<Cart, CommerceError>;

    /// Change the quantity of an existing line item. Returns the whole new cart.
    ///
    /// # Errors
    ///
    /// Returns an error if the server rejects the mutation.
    async fn update_line(&self, line_id: &str, quantity: u32) -> Result<Cart, CommerceError>;

    /// Remove a line item from the cart. Returns the whole new cart.
    ///
    /// # Errors
    ///
    /// Returns an error if the server rejects the mutation.
    async fn remove_line(&self, line_id: &str) -> Result<Cart, CommerceError>;

    /// Empty the cart without discarding it. Idempotent at the server.
    ///
    /// # Errors
    ///
    /// Returns an error if the server rejects the mutation.
    async fn empty_cart(&self) -> Result<Cart, CommerceError>;

    /// Discard the current cart and obtain a fresh one. Idempotent at the
    /// server.
    ///
    /// # Errors
    ///
    /// Returns an error if a fresh cart cannot be obtained.
    async fn refresh_cart(&self) -> Result<Cart, CommerceError>;

    /// Freeze a cart for payment, producing a checkout token.
    ///
    /// # Errors
    ///
    /// Returns an error if the token cannot be generated.
    async fn generate_token(&self, cart_id: &str) -> Result<CheckoutToken, CommerceError>;

    /// Finalize payment against a checkout token, producing an order.
    ///
    /// # Errors
    ///
    /// Returns an error if the capture is declined or fails.
    async fn capture(&self, token_id: &str, form: &CheckoutForm) -> Result<Order, CommerceError>;
}
