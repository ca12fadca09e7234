use crate::commerce::{Cart, CheckoutForm, CheckoutToken};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct CheckoutPageProps {
    pub cart: Cart,
    /// Token for the cart frozen for payment; generated when this view is
    /// entered. Capture is disabled until it arrives.
    pub checkout_token: Option<CheckoutToken>,
    pub on_capture: Callback<(String, CheckoutForm)>,
}

/// Checkout form bound to the current cart. All field validation is the
/// backend's; this page only collects values and emits the capture intent.
#[function_component(CheckoutPage)]
pub fn checkout_page(p: &CheckoutPageProps) -> Html {
    let form = use_state(CheckoutForm::default);

    let field = |apply: fn(&mut CheckoutForm, String)| -> Callback<InputEvent> {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<web_sys::HtmlInputElement>() {
                let mut next = (*form).clone();
                apply(&mut next, input.value());
                form.set(next);
            }
        })
    };

    let on_email = field(|f, v| f.customer.email = v);
    let on_firstname = field(|f, v| f.customer.firstname = v);
    let on_lastname = field(|f, v| f.customer.lastname = v);
    let on_street = field(|f, v| f.shipping.street = v);
    let on_city = field(|f, v| f.shipping.town_city = v);
    let on_zip = field(|f, v| f.shipping.postal_zip_code = v);
    let on_country = field(|f, v| f.shipping.country = v);
    let on_card_number = field(|f, v| f.card.number = v);
    let on_expiry_month = field(|f, v| f.card.expiry_month = v);
    let on_expiry_year = field(|f, v| f.card.expiry_year = v);
    let on_cvc = field(|f, v| f.card.cvc = v);

    let can_capture = p.checkout_token.is_some() && !p.cart.is_empty();
    let on_submit = {
        let form = form.clone();
        let token = p.checkout_token.clone();
        let on_capture = p.on_capture.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if let Some(token) = token.as_ref() {
                let mut payload = (*form).clone();
                payload.shipping.name = format!(
                    "{} {}",
                    payload.customer.firstname, payload.customer.lastname
                );
                on_capture.emit((token.id.clone(), payload));
            }
        })
    };

    html! {
        <section class="checkout">
            <h1>{ "Checkout" }</h1>
            <div class="checkout-summary" aria-label="Order summary">
                <ul>
                    { for p.cart.line_items.iter().map(|line| html! {
                        <li key={line.id.clone()}>
                            { format!("{} x{}", line.name, line.quantity) }
                            { " " }{ &line.line_total.formatted_with_symbol }
                        </li>
                    }) }
                </ul>
                <p class="checkout-subtotal">
                    { "Subtotal: " }{ &p.cart.subtotal.formatted_with_symbol }
                </p>
            </div>
            <form class="checkout-form" onsubmit={on_submit}>
                <fieldset>
                    <legend>{ "Customer" }</legend>
                    <label for="email">{ "Email" }</label>
                    <input id="email" type="email" value={form.customer.email.clone()} oninput={on_email} />
                    <label for="firstname">{ "First name" }</label>
                    <input id="firstname" value={form.customer.firstname.clone()} oninput={on_firstname} />
                    <label for="lastname">{ "Last name" }</label>
                    <input id="lastname" value={form.customer.lastname.clone()} oninput={on_lastname} />
                </fieldset>
                <fieldset>
                    <legend>{ "Shipping" }</legend>
                    <label for="street">{ "Street" }</label>
                    <input id="street" value={form.shipping.street.clone()} oninput={on_street} />
                    <label for="city">{ "City" }</label>
                    <input id="city" value={form.shipping.town_city.clone()} oninput={on_city} />
                    <label for="zip">{ "Postal code" }</label>
                    <input id="zip" value={form.shipping.postal_zip_code.clone()} oninput={on_zip} />
                    <label for="country">{ "Country" }</label>
                    <input id="country" value={form.shipping.country.clone()} oninput={on_country} />
                </fieldset>
                <fieldset>
                    <legend>{ "Payment" }</legend>
                    <label for="card-number">{ "Card number" }</label>
                    <input id="card-number" inputmode="numeric" value={form.card.number.clone()} oninput={on_card_number} />
                    <label for="expiry-month">{ "Expiry month" }</label>
                    <input id="expiry-month" value={form.card.expiry_month.clone()} oninput={on_expiry_month} />
                    <label for="expiry-year">{ "Expiry year" }</label>
                    <input id="expiry-year" value={form.card.expiry_year.clone()} oninput={on_expiry_year} />
                    <label for="cvc">{ "CVC" }</label>
                    <input id="cvc" value={form.card.cvc.clone()} oninput={on_cvc} />
                </fieldset>
                <button type="submit" disabled={!can_capture}>
                    { "Place order" }
                </button>
            </form>
        </section>
    }
}
