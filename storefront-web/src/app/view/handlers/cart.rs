//! Cart mutation handlers.
//!
//! Each handler fires exactly one remote call: on success the cart slice is
//! replaced in full by the response, on failure the error is logged and
//! state is left untouched. No loading lock, no optimistic update, no retry;
//! overlapping calls are last-write-wins.

use crate::app::state::AppState;
use crate::dom;
use std::rc::Rc;
use yew::prelude::*;

pub fn build_add_to_cart(state: &AppState) -> Callback<(String, u32)> {
    let session = Rc::clone(&state.session);
    let cart = state.cart.clone();
    Callback::from(move |(product_id, quantity): (String, u32)| {
        let session = Rc::clone(&session);
        let cart = cart.clone();
        wasm_bindgen_futures::spawn_local(async move {
            match session.add_item(&product_id, quantity).await {
                Ok(next) => cart.set(next),
                Err(err) => dom::console_error(&format!("add to cart failed: {err}")),
            }
        });
    })
}

pub fn build_update_quantity(state: &AppState) -> Callback<(String, u32)> {
    let session = Rc::clone(&state.session);
    let cart = state.cart.clone();
    Callback::from(move |(line_id, quantity): (String, u32)| {
        let session = Rc::clone(&session);
        let cart = cart.clone();
        wasm_bindgen_futures::spawn_local(async move {
            match session.update_quantity(&line_id, quantity).await {
                Ok(next) => cart.set(next),
                Err(err) => dom::console_error(&format!("quantity update failed: {err}")),
            }
        });
    })
}

pub fn build_remove_line(state: &AppState) -> Callback<String> {
    let session = Rc::clone(&state.session);
    let cart = state.cart.clone();
    Callback::from(move |line_id: String| {
        let session = Rc::clone(&session);
        let cart = cart.clone();
        wasm_bindgen_futures::spawn_local(async move {
            match session.remove_line(&line_id).await {
                Ok(next) => cart.set(next),
                Err(err) => dom::console_error(&format!("line removal failed: {err}")),
            }
        });
    })
}

pub fn build_empty_cart(state: &AppState) -> Callback<()> {
    let session = Rc::clone(&state.session);
    let cart = state.cart.clone();
    Callback::from(move |()| {
        let session = Rc::clone(&session);
        let cart = cart.clone();
        wasm_bindgen_futures::spawn_local(async move {
            match session.empty_cart().await {
                Ok(next) => cart.set(next),
                Err(err) => dom::console_error(&format!("cart emptying failed: {err}")),
            }
        });
    })
}
