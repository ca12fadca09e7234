//! Session engine pairing the remote commerce port with receipt persistence.

use crate::CommerceApi;
use crate::cart::Cart;
use crate::catalog::Product;
use crate::checkout::{CheckoutForm, CheckoutToken, Order};
use crate::error::CommerceError;
use crate::receipt::ReceiptStore;

/// Result of a successful checkout capture.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckoutOutcome {
    /// The order the backend produced.
    pub order: Order,
    /// The fresh cart obtained after capture, when the follow-up refresh
    /// succeeded. `None` means the cart slice should stay as it was.
    pub refreshed_cart: Option<Cart>,
}

/// Pairs a [`CommerceApi`] with a [`ReceiptStore`].
///
/// Cart operations are pass-throughs returning the server's cart; the session
/// adds behavior only where the contract couples the two ports, in
/// [`checkout`](Self::checkout).
pub struct StoreSession<A, R>
where
    A: CommerceApi,
    R: ReceiptStore,
{
    api: A,
    receipts: R,
}

impl<A, R> StoreSession<A, R>
where
    A: CommerceApi,
    R: ReceiptStore,
{
    /// Create a session over the provided ports.
    pub const fn new(api: A, receipts: R) -> Self {
        Self { api, receipts }
    }

    /// The remote commerce port.
    pub const fn api(&self) -> &A {
        &self.api
    }

    /// The receipt persistence port.
    pub const fn receipts(&self) -> &R {
        &self.receipts
    }

    /// Fetch the product catalog.
    ///
    /// # Errors
    ///
    /// Returns an error if the remote call fails.
    pub async fn load_catalog(&self) -> Result<Vec<Product>, CommerceError> {
        self.api.list_products().await
    }

    /// Fetch or create the current cart.
    ///
    /// # Errors
    ///
    /// Returns an error if the remote call fails.
    pub async fn load_cart(&self) -> Result<Cart, CommerceError> {
        self.api.retrieve_cart().await
    }

    /// Add a product to the cart, returning the server's new cart.
    ///
    /// # Errors
    ///
    /// Returns an error if the remote call fails.
    pub async fn add_item(&self, product_id: &str, quantity: u32) -> Result<Cart, CommerceError> {
        self.api.add_to_cart(product_id, quantity).await
    }

    /// Change a line item's quantity, returning the server's new cart.
    ///
    /// # Errors
    ///
    /// Returns an error if the remote call fails.
    pub async fn update_quantity(
        &self,
        line_id: &str,
        quantity: u32,
    ) -> Result<Cart, CommerceError> {
        self.api.update_line(line_id, quantity).await
    }

    /// Remove a line item, returning the server's new cart.
    ///
    /// # Errors
    ///
    /// Returns an error if the remote call fails.
    pub async fn remove_line(&self, line_id: &str) -> Result<Cart, CommerceError> {
        self.api.remove_line(line_id).await
    }

    /// Empty the cart, returning the server's new cart.
    ///
    /// # Errors
    ///
    /// Returns an error if the remote call fails.
    pub async fn empty_cart(&self) -> Result<Cart, CommerceError> {
        self.api.empty_cart().await
    }

    /// Discard the cart and obtain a fresh one.
    ///
    /// # Errors
    ///
    /// Returns an error if the remote call fails.
    pub async fn refresh_cart(&self) -> Result<Cart, CommerceError> {
        self.api.refresh_cart().await
    }

    /// Freeze the cart for payment.
    ///
    /// # Errors
    ///
    /// Returns an error if the remote call fails.
    pub async fn generate_token(&self, cart_id: &str) -> Result<CheckoutToken, CommerceError> {
        self.api.generate_token(cart_id).await
    }

    /// Finalize payment against a checkout token.
    ///
    /// On success the receipt is persisted (overwriting any prior value) and
    /// a cart refresh is issued to obtain a fresh cart from the server.
    /// Persistence or refresh failures are reported and do not fail the
    /// checkout; a capture failure changes nothing at all.
    ///
    /// # Errors
    ///
    /// Returns an error if the capture call itself fails.
    pub async fn checkout(
        &self,
        token_id: &str,
        form: &CheckoutForm,
    ) -> Result<CheckoutOutcome, CommerceError> {
        let order = self.api.capture(token_id, form).await?;
        if let Err(err) = self.receipts.save(&order) {
            log::warn!("failed to persist order receipt: {err}");
        }
        let refreshed_cart = match self.api.refresh_cart().await {
            Ok(cart) => Some(cart),
            Err(err) => {
                log::warn!("cart refresh after capture failed: {err}");
                None
            }
        };
        Ok(CheckoutOutcome {
            order,
            refreshed_cart,
        })
    }

    /// Read back the persisted receipt, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the stored receipt cannot be read or parsed.
    pub fn load_receipt(&self) -> Result<Option<Order>, R::Error> {
        self.receipts.load()
    }

    /// Remove the persisted receipt.
    ///
    /// # Errors
    ///
    /// Returns an error if the stored receipt cannot be removed.
    pub fn clear_receipt(&self) -> Result<(), R::Error> {
        self.receipts.clear()
    }
}
