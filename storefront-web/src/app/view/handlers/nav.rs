use crate::app::state::AppState;
use crate::router::Route;
use yew::prelude::*;
use yew_router::prelude::Navigator;

/// Pure local flip of the cart drawer; no side effects beyond re-render.
pub fn build_toggle_cart(state: &AppState) -> Callback<()> {
    let cart_visible = state.cart_visible.clone();
    Callback::from(move |()| {
        cart_visible.set(!*cart_visible);
    })
}

pub fn build_go_home(navigator: Option<Navigator>) -> Callback<()> {
    Callback::from(move |()| {
        if let Some(nav) = navigator.as_ref() {
            nav.push(&Route::Home);
        }
    })
}

pub fn build_go_checkout(navigator: Option<Navigator>) -> Callback<()> {
    Callback::from(move |()| {
        if let Some(nav) = navigator.as_ref() {
            nav.push(&Route::Checkout);
        }
    })
}
