use crate::commerce::{
    BrowserReceiptStore, Cart, CheckoutToken, HttpCommerceApi, Order, Product, StoreSession,
    create_web_session,
};
use std::rc::Rc;
use yew::prelude::*;

/// Session over the browser implementations of both ports.
pub type WebSession = StoreSession<HttpCommerceApi, BrowserReceiptStore>;

/// Top-level UI state, one handle per slice. Every remote response replaces
/// exactly one slice; nothing here is merged or patched.
#[derive(Clone)]
pub struct AppState {
    pub catalog: UseStateHandle<Vec<Product>>,
    pub cart: UseStateHandle<Cart>,
    pub cart_visible: UseStateHandle<bool>,
    pub order: UseStateHandle<Option<Order>>,
    pub checkout_token: UseStateHandle<Option<CheckoutToken>>,
    pub session: Rc<WebSession>,
}

#[hook]
pub fn use_app_state() -> AppState {
    let session = use_memo((), |_| create_web_session());
    AppState {
        catalog: use_state(Vec::new),
        cart: use_state(Cart::default),
        cart_visible: use_state(|| false),
        order: use_state(|| None::<Order>),
        checkout_token: use_state(|| None::<CheckoutToken>),
        session,
    }
}
