use crate::commerce::Product;
use crate::components::product_card::ProductCard;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct HomePageProps {
    pub catalog: Vec<Product>,
    pub on_add_to_cart: Callback<(String, u32)>,
}

/// Catalog listing. An empty catalog means the fetch has not landed yet
/// (or failed, in which case the empty state simply persists).
#[function_component(HomePage)]
pub fn home_page(p: &HomePageProps) -> Html {
    if p.catalog.is_empty() {
        return html! {
            <section class="catalog catalog-loading" aria-busy="true">
                <p>{ "Loading products..." }</p>
            </section>
        };
    }
    html! {
        <section class="catalog" aria-label="Product catalog">
            <div class="product-grid">
                { for p.catalog.iter().map(|product| html! {
                    <ProductCard
                        key={product.id.clone()}
                        product={product.clone()}
                        on_add_to_cart={p.on_add_to_cart.clone()}
                    />
                }) }
            </div>
        </section>
    }
}
