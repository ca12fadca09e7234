use crate::app::state::AppState;
use crate::commerce::CheckoutForm;
use crate::dom;
use crate::router::Route;
use std::rc::Rc;
use yew::prelude::*;
use yew_router::prelude::Navigator;

/// Capture handler: one remote call against the checkout token. On success
/// the order slice is set, the refreshed cart is applied when the follow-up
/// refresh succeeded, and the app navigates to the confirmation view. On
/// failure the error is logged and the user stays on checkout with state
/// untouched.
pub fn build_capture(
    state: &AppState,
    navigator: Option<Navigator>,
) -> Callback<(String, CheckoutForm)> {
    let session = Rc::clone(&state.session);
    let cart = state.cart.clone();
    let order = state.order.clone();
    Callback::from(move |(token_id, form): (String, CheckoutForm)| {
        let session = Rc::clone(&session);
        let cart = cart.clone();
        let order = order.clone();
        let navigator = navigator.clone();
        wasm_bindgen_futures::spawn_local(async move {
            match session.checkout(&token_id, &form).await {
                Ok(outcome) => {
                    order.set(Some(outcome.order));
                    if let Some(fresh) = outcome.refreshed_cart {
                        cart.set(fresh);
                    }
                    if let Some(nav) = navigator {
                        nav.push(&Route::Confirmation);
                    }
                }
                Err(err) => dom::console_error(&format!("checkout capture failed: {err}")),
            }
        });
    })
}
