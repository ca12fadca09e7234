use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub total_items: u32,
    pub show_cart_toggle: bool,
    pub on_toggle_cart: Callback<()>,
    pub on_go_home: Callback<()>,
}

/// Persistent nav strip with the store title and, on the home view, the
/// cart-toggle affordance with an item-count badge.
#[function_component(Navbar)]
pub fn navbar(p: &Props) -> Html {
    let toggle = {
        let cb = p.on_toggle_cart.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let go_home = {
        let cb = p.on_go_home.clone();
        Callback::from(move |_| cb.emit(()))
    };
    html! {
        <header role="banner">
            <div class="navbar-content">
                <button class="navbar-title" onclick={go_home}>{ "Storefront" }</button>
                if p.show_cart_toggle {
                    <button class="cart-toggle" aria-label="Toggle cart" onclick={toggle}>
                        { "Cart" }
                        <span class="cart-badge" aria-label="Items in cart">
                            { p.total_items }
                        </span>
                    </button>
                }
            </div>
        </header>
    }
}
