use crate::commerce::{Cart, LineItem};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub cart: Cart,
    pub on_update_quantity: Callback<(String, u32)>,
    pub on_remove_line: Callback<String>,
    pub on_empty_cart: Callback<()>,
    pub on_close: Callback<()>,
    pub on_checkout: Callback<()>,
}

/// Cart overlay panel. All quantities and totals come straight from the
/// server's cart; the drawer only emits the user's intent back up.
#[function_component(CartDrawer)]
pub fn cart_drawer(p: &Props) -> Html {
    let close = {
        let cb = p.on_close.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let empty = {
        let cb = p.on_empty_cart.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let checkout = {
        let cb = p.on_checkout.clone();
        Callback::from(move |_| cb.emit(()))
    };

    let body = if p.cart.is_empty() {
        html! { <p class="cart-empty">{ "Your cart is empty." }</p> }
    } else {
        html! {
            <>
                <ul class="cart-lines">
                    { for p.cart.line_items.iter().map(|line| render_line(p, line)) }
                </ul>
                <div class="cart-footer">
                    <p class="cart-subtotal">
                        { "Subtotal: " }{ &p.cart.subtotal.formatted_with_symbol }
                    </p>
                    <button class="cart-empty-btn" onclick={empty}>{ "Empty cart" }</button>
                    <button class="cart-checkout-btn" onclick={checkout}>{ "Checkout" }</button>
                </div>
            </>
        }
    };

    html! {
        <aside class="cart-drawer" role="dialog" aria-label="Shopping cart">
            <div class="cart-header">
                <h2>{ "Your cart" }</h2>
                <button class="cart-close" aria-label="Close cart" onclick={close}>
                    { "\u{2715}" }
                </button>
            </div>
            { body }
        </aside>
    }
}

fn render_line(p: &Props, line: &LineItem) -> Html {
    let decrement = {
        let cb = p.on_update_quantity.clone();
        let line_id = line.id.clone();
        let quantity = line.quantity.saturating_sub(1);
        Callback::from(move |_| cb.emit((line_id.clone(), quantity)))
    };
    let increment = {
        let cb = p.on_update_quantity.clone();
        let line_id = line.id.clone();
        let quantity = line.quantity + 1;
        Callback::from(move |_| cb.emit((line_id.clone(), quantity)))
    };
    let remove = {
        let cb = p.on_remove_line.clone();
        let line_id = line.id.clone();
        Callback::from(move |_| cb.emit(line_id.clone()))
    };
    html! {
        <li class="cart-line" key={line.id.clone()}>
            <span class="line-name">{ &line.name }</span>
            <span class="line-quantity">
                <button aria-label="Decrease quantity" onclick={decrement}>{ "-" }</button>
                { line.quantity }
                <button aria-label="Increase quantity" onclick={increment}>{ "+" }</button>
            </span>
            <span class="line-total">{ &line.line_total.formatted_with_symbol }</span>
            <button class="line-remove" onclick={remove}>{ "Remove" }</button>
        </li>
    }
}
