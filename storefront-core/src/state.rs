//! The controller's state value and its reducers.
//!
//! State changes are whole-slice replacements: each reducer takes the prior
//! state by value and returns the next one, with one reducer per
//! remote-response kind. The asynchronous call sites are the only impure
//! boundary; everything here is pure.

use crate::cart::Cart;
use crate::catalog::Product;
use crate::checkout::Order;

/// Top-level UI state owned by the store controller.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StoreState {
    /// Catalog snapshot; replaced wholesale on every successful fetch.
    pub catalog: Vec<Product>,
    /// Server-authoritative cart; replaced in full by every successful
    /// cart-affecting response.
    pub cart: Cart,
    /// Client-owned visibility flag for the cart drawer. Never sent to the
    /// server.
    pub cart_visible: bool,
    /// Receipt of the last completed checkout, if any.
    pub order: Option<Order>,
}

impl StoreState {
    /// Replace the catalog slice with a fresh listing.
    #[must_use]
    pub fn with_catalog(mut self, catalog: Vec<Product>) -> Self {
        self.catalog = catalog;
        self
    }

    /// Replace the cart slice with the server's response.
    #[must_use]
    pub fn with_cart(mut self, cart: Cart) -> Self {
        self.cart = cart;
        self
    }

    /// Flip the cart drawer's visibility.
    #[must_use]
    pub fn toggled_cart(mut self) -> Self {
        self.cart_visible = !self.cart_visible;
        self
    }

    /// Record a completed order.
    #[must_use]
    pub fn with_order(mut self, order: Order) -> Self {
        self.order = Some(order);
        self
    }

    /// Drop the completed order, e.g. when leaving the confirmation view.
    #[must_use]
    pub fn cleared_order(mut self) -> Self {
        self.order = None;
        self
    }
}
