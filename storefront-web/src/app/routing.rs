use crate::app::state::AppState;
use crate::router::Route;
use std::rc::Rc;
use yew::prelude::*;

/// Whether a route change constitutes leaving the confirmation view.
fn leaves_confirmation(previous: Option<&Route>, next: Option<&Route>) -> bool {
    matches!(previous, Some(Route::Confirmation)) && !matches!(next, Some(Route::Confirmation))
}

/// Clear the persisted receipt (and the in-memory order slice) whenever the
/// user navigates away from the confirmation view, by any means including
/// browser history.
#[hook]
pub fn use_clear_receipt_on_leave(app_state: &AppState, route: Option<Route>) {
    let state = app_state.clone();
    let previous = use_mut_ref(|| None::<Route>);
    use_effect_with(route, move |route| {
        let leaving = leaves_confirmation(previous.borrow().as_ref(), route.as_ref());
        previous.borrow_mut().clone_from(route);
        if leaving {
            if let Err(err) = state.session.clear_receipt() {
                log::error!("failed to clear order receipt: {err}");
            }
            state.order.set(None);
        }
    });
}

/// Generate a checkout token when the checkout view is entered with a
/// non-empty cart, and drop it again on leaving. The token id is what the
/// capture call is made against.
#[hook]
pub fn use_checkout_token(app_state: &AppState, route: Option<Route>) {
    let state = app_state.clone();
    let cart_id = (!state.cart.id.is_empty() && !state.cart.is_empty())
        .then(|| state.cart.id.clone());
    use_effect_with((route, cart_id), move |(route, cart_id)| {
        if let (Some(Route::Checkout), Some(cart_id)) = (route, cart_id) {
            let session = Rc::clone(&state.session);
            let token = state.checkout_token.clone();
            let cart_id = cart_id.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match session.generate_token(&cart_id).await {
                    Ok(fresh) => token.set(Some(fresh)),
                    Err(err) => log::error!("checkout token generation failed: {err}"),
                }
            });
        } else if state.checkout_token.is_some() {
            state.checkout_token.set(None);
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leaving_confirmation_is_detected_for_any_destination() {
        assert!(leaves_confirmation(
            Some(&Route::Confirmation),
            Some(&Route::Home)
        ));
        assert!(leaves_confirmation(
            Some(&Route::Confirmation),
            Some(&Route::Checkout)
        ));
        assert!(leaves_confirmation(Some(&Route::Confirmation), None));
    }

    #[test]
    fn staying_on_confirmation_or_elsewhere_does_not_clear() {
        assert!(!leaves_confirmation(
            Some(&Route::Confirmation),
            Some(&Route::Confirmation)
        ));
        assert!(!leaves_confirmation(Some(&Route::Home), Some(&Route::Checkout)));
        assert!(!leaves_confirmation(None, Some(&Route::Confirmation)));
    }
}
