mod handlers;

pub use handlers::AppHandlers;

use crate::app::state::AppState;
use crate::components::cart_drawer::CartDrawer;
use crate::components::navbar::Navbar;
use crate::pages;
use crate::router::Route;
use yew::prelude::*;
use yew_router::prelude::Navigator;

/// Map the current state onto one of the three mutually exclusive views,
/// under a persistent nav strip. The cart drawer overlays the home view only.
pub fn render_app(state: &AppState, route: Option<&Route>, navigator: Option<Navigator>) -> Html {
    let handlers = AppHandlers::new(state, navigator);

    let main_view = match route {
        None | Some(Route::Home) => html! {
            <>
                if *state.cart_visible {
                    <CartDrawer
                        cart={(*state.cart).clone()}
                        on_update_quantity={handlers.update_quantity.clone()}
                        on_remove_line={handlers.remove_line.clone()}
                        on_empty_cart={handlers.empty_cart.clone()}
                        on_close={handlers.toggle_cart.clone()}
                        on_checkout={handlers.go_checkout.clone()}
                    />
                }
                <pages::home::HomePage
                    catalog={(*state.catalog).clone()}
                    on_add_to_cart={handlers.add_to_cart.clone()}
                />
            </>
        },
        Some(Route::Checkout) => html! {
            <pages::checkout::CheckoutPage
                cart={(*state.cart).clone()}
                checkout_token={(*state.checkout_token).clone()}
                on_capture={handlers.capture.clone()}
            />
        },
        Some(Route::Confirmation) => html! {
            <pages::confirmation::ConfirmationPage
                order={(*state.order).clone()}
                on_back_to_home={handlers.go_home.clone()}
            />
        },
        Some(Route::NotFound) => html! {
            <pages::not_found::NotFound on_go_home={handlers.go_home.clone()} />
        },
    };

    let show_cart_toggle = matches!(route, None | Some(Route::Home));
    html! {
        <>
            <Navbar
                total_items={state.cart.total_items}
                show_cart_toggle={show_cart_toggle}
                on_toggle_cart={handlers.toggle_cart.clone()}
                on_go_home={handlers.go_home.clone()}
            />
            <main id="main" role="main">
                { main_view }
            </main>
        </>
    }
}
