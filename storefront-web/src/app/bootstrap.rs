use crate::app::state::AppState;
use std::rc::Rc;
use yew::prelude::*;

/// Kick off the three initialization requests on first render: catalog
/// fetch, cart fetch-or-create, receipt reload. The tasks are independent
/// and unordered; each success replaces only its own slice, and each failure
/// is logged and leaves the prior slice unchanged.
#[hook]
pub fn use_bootstrap(app_state: &AppState) {
    let state = app_state.clone();
    use_effect_with((), move |()| {
        {
            let session = Rc::clone(&state.session);
            let catalog = state.catalog.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match session.load_catalog().await {
                    Ok(products) => catalog.set(products),
                    Err(err) => log::error!("catalog fetch failed: {err}"),
                }
            });
        }
        {
            let session = Rc::clone(&state.session);
            let cart = state.cart.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match session.load_cart().await {
                    Ok(fetched) => cart.set(fetched),
                    Err(err) => log::error!("cart fetch failed: {err}"),
                }
            });
        }
        // localStorage read is synchronous; still independent of the above.
        match state.session.load_receipt() {
            Ok(Some(order)) => state.order.set(Some(order)),
            Ok(None) => {}
            Err(err) => log::error!("receipt reload failed: {err}"),
        }
        || {}
    });
}
