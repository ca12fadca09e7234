mod cart;
mod checkout;
mod nav;

use crate::app::state::AppState;
use crate::commerce::CheckoutForm;
use yew::prelude::*;
use yew_router::prelude::Navigator;

pub use cart::{build_add_to_cart, build_empty_cart, build_remove_line, build_update_quantity};
pub use checkout::build_capture;
pub use nav::{build_go_checkout, build_go_home, build_toggle_cart};

/// One callback per user action, rebuilt each render from the current state
/// handles. Handlers capture only the handles they touch.
#[derive(Clone)]
pub struct AppHandlers {
    pub add_to_cart: Callback<(String, u32)>,
    pub update_quantity: Callback<(String, u32)>,
    pub remove_line: Callback<String>,
    pub empty_cart: Callback<()>,
    pub capture: Callback<(String, CheckoutForm)>,
    pub toggle_cart: Callback<()>,
    pub go_home: Callback<()>,
    pub go_checkout: Callback<()>,
}

impl AppHandlers {
    #[must_use]
    pub fn new(state: &AppState, navigator: Option<Navigator>) -> Self {
        Self {
            add_to_cart: build_add_to_cart(state),
            update_quantity: build_update_quantity(state),
            remove_line: build_remove_line(state),
            empty_cart: build_empty_cart(state),
            capture: build_capture(state, navigator.clone()),
            toggle_cart: build_toggle_cart(state),
            go_home: build_go_home(navigator.clone()),
            go_checkout: build_go_checkout(navigator),
        }
    }
}
