use crate::commerce::Order;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ConfirmationPageProps {
    pub order: Option<Order>,
    pub on_back_to_home: Callback<()>,
}

/// Order confirmation view, fed from the in-memory order slice (which is
/// rehydrated from the persisted receipt after a reload).
#[function_component(ConfirmationPage)]
pub fn confirmation_page(p: &ConfirmationPageProps) -> Html {
    let back = {
        let cb = p.on_back_to_home.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let Some(order) = &p.order else {
        return html! {
            <section class="confirmation">
                <p>{ "No order found." }</p>
                <button onclick={back}>{ "Back to home" }</button>
            </section>
        };
    };
    html! {
        <section class="confirmation">
            <h1>
                { format!(
                    "Thank you for your purchase, {} {}!",
                    order.customer.firstname, order.customer.lastname
                ) }
            </h1>
            <p class="order-reference">
                { "Order ref: " }{ &order.customer_reference }
            </p>
            <p class="order-total">
                { "Total: " }{ &order.total.formatted_with_symbol }
            </p>
            <button onclick={back}>{ "Back to home" }</button>
        </section>
    }
}
