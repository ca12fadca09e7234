use crate::commerce::Product;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub product: Product,
    pub on_add_to_cart: Callback<(String, u32)>,
}

/// One catalog tile: image, name, backend-formatted price, add button.
#[function_component(ProductCard)]
pub fn product_card(p: &Props) -> Html {
    let add = {
        let cb = p.on_add_to_cart.clone();
        let product_id = p.product.id.clone();
        Callback::from(move |_| cb.emit((product_id.clone(), 1)))
    };
    // Description arrives as backend-rendered HTML.
    let description = Html::from_html_unchecked(AttrValue::from(p.product.description.clone()));
    html! {
        <article class="product-card">
            if let Some(url) = &p.product.image_url {
                <img src={url.clone()} alt={p.product.name.clone()} />
            }
            <h3>{ &p.product.name }</h3>
            <div class="product-description">{ description }</div>
            <p class="product-price">{ &p.product.price.formatted_with_symbol }</p>
            <button class="add-to-cart" onclick={add}>{ "Add to cart" }</button>
        </article>
    }
}
