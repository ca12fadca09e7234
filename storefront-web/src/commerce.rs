//! Web-specific commerce backend implementation
//!
//! This module provides browser implementations of the storefront-core ports
//! and re-exports the core domain types. HTTP goes through `gloo::net`
//! against the hosted commerce REST API; the receipt lives in localStorage.

use std::cell::RefCell;

use gloo::net::http::{Request, RequestBuilder, Response};
use gloo::storage::errors::StorageError;
use gloo::storage::{LocalStorage, Storage};
use serde::{Deserialize, Serialize};

// Re-export all types from storefront-core
pub use storefront_core::*;

/// localStorage key tracking the active cart id, so the cart survives a
/// page reload the same way the original session did.
const CART_ID_KEY: &str = "cart_id";

/// Commerce client over the hosted REST API.
///
/// Tracks the active cart id internally; `refresh_cart` discards it and
/// requests a fresh cart from the server.
pub struct HttpCommerceApi {
    base_url: String,
    public_key: String,
    cart_id: RefCell<Option<String>>,
}

impl HttpCommerceApi {
    #[must_use]
    pub fn new(base_url: String, public_key: String) -> Self {
        Self {
            base_url,
            public_key,
            cart_id: RefCell::new(None),
        }
    }

    /// Client configured from the compile-time deployment settings.
    #[must_use]
    pub fn from_config() -> Self {
        Self::new(crate::config::api_base(), crate::config::public_key())
    }

    fn url(&self, path: &str) -> String {
        format!("{base}/{path}", base = self.base_url)
    }

    fn authorized(&self, builder: RequestBuilder) -> RequestBuilder {
        builder.header("X-Authorization", &self.public_key)
    }

    fn remember_cart_id(&self, cart_id: &str) {
        *self.cart_id.borrow_mut() = Some(cart_id.to_string());
        let _ = LocalStorage::set(CART_ID_KEY, cart_id);
    }

    fn forget_cart_id(&self) {
        *self.cart_id.borrow_mut() = None;
        LocalStorage::delete(CART_ID_KEY);
    }

    fn stored_cart_id(&self) -> Option<String> {
        if let Some(id) = self.cart_id.borrow().clone() {
            return Some(id);
        }
        LocalStorage::get::<String>(CART_ID_KEY).ok()
    }

    /// Resolve the active cart id, creating a cart server-side when none is
    /// known yet.
    async fn active_cart_id(&self) -> Result<String, CommerceError> {
        if let Some(id) = self.stored_cart_id() {
            return Ok(id);
        }
        Ok(self.retrieve_cart().await?.id)
    }

    async fn send(&self, builder: RequestBuilder) -> Result<Response, CommerceError> {
        let response = self
            .authorized(builder)
            .send()
            .await
            .map_err(|err| CommerceError::Remote(err.to_string()))?;
        if response.ok() {
            Ok(response)
        } else {
            Err(CommerceError::Remote(format!(
                "HTTP {status}: {status_text}",
                status = response.status(),
                status_text = response.status_text()
            )))
        }
    }

    async fn send_json<B: Serialize>(
        &self,
        builder: RequestBuilder,
        body: &B,
    ) -> Result<Response, CommerceError> {
        let request = self
            .authorized(builder)
            .json(body)
            .map_err(|err| CommerceError::Remote(err.to_string()))?;
        let response = request
            .send()
            .await
            .map_err(|err| CommerceError::Remote(err.to_string()))?;
        if response.ok() {
            Ok(response)
        } else {
            Err(CommerceError::Remote(format!(
                "HTTP {status}: {status_text}",
                status = response.status(),
                status_text = response.status_text()
            )))
        }
    }

    async fn decode<T: for<'de> Deserialize<'de>>(
        response: Response,
    ) -> Result<T, CommerceError> {
        response.json::<T>().await.map_err(|err| match err {
            gloo::net::Error::SerdeError(err) => CommerceError::Decode(err),
            other => CommerceError::Remote(other.to_string()),
        })
    }

    async fn cart_from(&self, response: Response) -> Result<Cart, CommerceError> {
        let envelope = Self::decode::<CartEnvelope>(response).await?;
        self.remember_cart_id(&envelope.cart.id);
        Ok(envelope.cart)
    }
}

fn cart_path(cart_id: &str) -> String {
    format!("carts/{cart_id}")
}

/// The line-item collection of a cart. Deleting it empties the cart while
/// keeping the cart itself alive; deleting [`cart_path`] would discard it.
fn cart_items_path(cart_id: &str) -> String {
    format!("carts/{cart_id}/items")
}

fn cart_line_path(cart_id: &str, line_id: &str) -> String {
    format!("carts/{cart_id}/items/{line_id}")
}

impl CommerceApi for HttpCommerceApi {
    async fn list_products(&self) -> Result<Vec<Product>, CommerceError> {
        let response = self
            .send(Request::get(&self.url("products?limit=200")))
            .await?;
        let listing = Self::decode::<ProductListing>(response).await?;
        Ok(listing.data.into_iter().map(Product::from).collect())
    }

    async fn retrieve_cart(&self) -> Result<Cart, CommerceError> {
        if let Some(id) = self.stored_cart_id() {
            let path = cart_path(&id);
            match self.send(Request::get(&self.url(&path))).await {
                Ok(response) => {
                    let cart = Self::decode::<Cart>(response).await?;
                    self.remember_cart_id(&cart.id);
                    return Ok(cart);
                }
                // Stale or expired cart id; fall through and create a new one.
                Err(_) => self.forget_cart_id(),
            }
        }
        let response = self.send(Request::get(&self.url("carts"))).await?;
        let cart = Self::decode::<Cart>(response).await?;
        self.remember_cart_id(&cart.id);
        Ok(cart)
    }

    async fn add_to_cart(&self, product_id: &str, quantity: u32) -> Result<Cart, CommerceError> {
        let cart_id = self.active_cart_id().await?;
        let path = cart_path(&cart_id);
        let response = self
            .send_json(
                Request::post(&self.url(&path)),
                &AddLinePayload {
                    id: product_id,
                    quantity,
                },
            )
            .await?;
        self.cart_from(response).await
    }

    async fn update_line(&self, line_id: &str, quantity: u32) -> Result<Cart, CommerceError> {
        let cart_id = self.active_cart_id().await?;
        let path = cart_line_path(&cart_id, line_id);
        let response = self
            .send_json(Request::put(&self.url(&path)), &UpdateLinePayload { quantity })
            .await?;
        self.cart_from(response).await
    }

    async fn remove_line(&self, line_id: &str) -> Result<Cart, CommerceError> {
        let cart_id = self.active_cart_id().await?;
        let path = cart_line_path(&cart_id, line_id);
        let response = self.send(Request::delete(&self.url(&path))).await?;
        self.cart_from(response).await
    }

    async fn empty_cart(&self) -> Result<Cart, CommerceError> {
        let cart_id = self.active_cart_id().await?;
        let path = cart_items_path(&cart_id);
        let response = self.send(Request::delete(&self.url(&path))).await?;
        self.cart_from(response).await
    }

    async fn refresh_cart(&self) -> Result<Cart, CommerceError> {
        self.forget_cart_id();
        let response = self.send(Request::get(&self.url("carts"))).await?;
        let cart = Self::decode::<Cart>(response).await?;
        self.remember_cart_id(&cart.id);
        Ok(cart)
    }

    async fn generate_token(&self, cart_id: &str) -> Result<CheckoutToken, CommerceError> {
        let path = format!("checkouts/{cart_id}?type=cart");
        let response = self.send(Request::get(&self.url(&path))).await?;
        Self::decode::<CheckoutToken>(response).await
    }

    async fn capture(&self, token_id: &str, form: &CheckoutForm) -> Result<Order, CommerceError> {
        let path = format!("checkouts/{token_id}");
        let response = self
            .send_json(
                Request::post(&self.url(&path)),
                &CapturePayload {
                    customer: &form.customer,
                    shipping: &form.shipping,
                    fulfillment: &form.fulfillment,
                    payment: PaymentPayload {
                        gateway: "test_gateway",
                        card: &form.card,
                    },
                },
            )
            .await?;
        Self::decode::<Order>(response).await
    }
}

// Wire shapes for the endpoints whose bodies differ from the domain types.

#[derive(Deserialize)]
struct ProductListing {
    data: Vec<WireProduct>,
}

#[derive(Deserialize)]
struct WireProduct {
    id: String,
    name: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    price: Money,
    #[serde(default)]
    image: Option<WireAsset>,
    #[serde(default)]
    permalink: String,
}

#[derive(Deserialize)]
struct WireAsset {
    url: String,
}

impl From<WireProduct> for Product {
    fn from(wire: WireProduct) -> Self {
        Self {
            id: wire.id,
            name: wire.name,
            description: wire.description,
            price: wire.price,
            image_url: wire.image.map(|asset| asset.url),
            permalink: wire.permalink,
        }
    }
}

/// Cart mutations answer `{ "cart": { ... } }` envelopes.
#[derive(Deserialize)]
struct CartEnvelope {
    cart: Cart,
}

#[derive(Serialize)]
struct AddLinePayload<'a> {
    id: &'a str,
    quantity: u32,
}

#[derive(Serialize)]
struct UpdateLinePayload {
    quantity: u32,
}

#[derive(Serialize)]
struct CapturePayload<'a> {
    customer: &'a Customer,
    shipping: &'a Shipping,
    fulfillment: &'a Fulfillment,
    payment: PaymentPayload<'a>,
}

#[derive(Serialize)]
struct PaymentPayload<'a> {
    gateway: &'static str,
    card: &'a Card,
}

/// Receipt persistence in browser localStorage under [`RECEIPT_KEY`].
pub struct BrowserReceiptStore;

#[derive(Debug, thiserror::Error)]
pub enum BrowserStorageError {
    #[error("storage error: {0}")]
    Storage(String),
}

impl ReceiptStore for BrowserReceiptStore {
    type Error = BrowserStorageError;

    fn load(&self) -> Result<Option<Order>, Self::Error> {
        match LocalStorage::get(RECEIPT_KEY) {
            Ok(order) => Ok(Some(order)),
            Err(StorageError::KeyNotFound(_)) => Ok(None),
            // A receipt is stored but unreadable; surface it rather than
            // masquerading as an empty slot.
            Err(err) => Err(BrowserStorageError::Storage(err.to_string())),
        }
    }

    fn save(&self, order: &Order) -> Result<(), Self::Error> {
        LocalStorage::set(RECEIPT_KEY, order)
            .map_err(|err| BrowserStorageError::Storage(format!("{err:?}")))
    }

    fn clear(&self) -> Result<(), Self::Error> {
        LocalStorage::delete(RECEIPT_KEY);
        Ok(())
    }
}

/// Create a browser-backed session with [`HttpCommerceApi`] and
/// [`BrowserReceiptStore`].
#[must_use]
pub fn create_web_session() -> StoreSession<HttpCommerceApi, BrowserReceiptStore> {
    StoreSession::new(HttpCommerceApi::from_config(), BrowserReceiptStore)
}
