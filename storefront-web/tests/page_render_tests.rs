use futures::executor::block_on;
use storefront_web::commerce::{
    Cart, CheckoutToken, Customer, LineItem, Money, Order, Product,
};
use storefront_web::pages::{
    checkout::{CheckoutPage, CheckoutPageProps},
    confirmation::{ConfirmationPage, ConfirmationPageProps},
    home::{HomePage, HomePageProps},
    not_found::{NotFound, Props as NotFoundProps},
};
use yew::{Callback, LocalServerRenderer};

fn money(formatted: &str) -> Money {
    Money {
        raw: 0.0,
        formatted_with_symbol: formatted.into(),
    }
}

fn sample_catalog() -> Vec<Product> {
    vec![
        Product {
            id: "prod_1".into(),
            name: "Beanie".into(),
            description: "<p>Warm wool beanie</p>".into(),
            price: money("$21.50"),
            image_url: Some("https://cdn.example/beanie.png".into()),
            permalink: "beanie".into(),
        },
        Product {
            id: "prod_2".into(),
            name: "Scarf".into(),
            price: money("$34.00"),
            ..Product::default()
        },
    ]
}

fn sample_cart() -> Cart {
    Cart {
        id: "cart_abc".into(),
        line_items: vec![LineItem {
            id: "item_1".into(),
            product_id: "prod_1".into(),
            name: "Beanie".into(),
            quantity: 2,
            price: money("$21.50"),
            line_total: money("$43.00"),
        }],
        total_items: 2,
        total_unique_items: 1,
        subtotal: money("$43.00"),
    }
}

#[test]
fn home_page_shows_loading_until_catalog_arrives() {
    let props = HomePageProps {
        catalog: Vec::new(),
        on_add_to_cart: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<HomePage>::with_props(props).render());
    assert!(html.contains("Loading products"));
}

#[test]
fn home_page_renders_the_full_catalog() {
    let props = HomePageProps {
        catalog: sample_catalog(),
        on_add_to_cart: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<HomePage>::with_props(props).render());
    assert!(html.contains("Beanie"));
    assert!(html.contains("Scarf"));
    assert!(html.contains("$21.50"));
    assert!(html.contains("Add to cart"));
}

#[test]
fn checkout_page_lists_cart_lines_and_subtotal() {
    let props = CheckoutPageProps {
        cart: sample_cart(),
        checkout_token: Some(CheckoutToken {
            id: "chkt_token".into(),
        }),
        on_capture: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<CheckoutPage>::with_props(props).render());
    assert!(html.contains("Beanie x2"));
    assert!(html.contains("Subtotal:"));
    assert!(html.contains("$43.00"));
    assert!(html.contains("Place order"));
    assert!(!html.contains("disabled"));
}

#[test]
fn checkout_capture_is_disabled_without_a_token() {
    let props = CheckoutPageProps {
        cart: sample_cart(),
        checkout_token: None,
        on_capture: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<CheckoutPage>::with_props(props).render());
    assert!(html.contains("disabled"));
}

#[test]
fn confirmation_page_shows_the_receipt() {
    let props = ConfirmationPageProps {
        order: Some(Order {
            id: "order_1".into(),
            customer_reference: "STORE-001".into(),
            customer: Customer {
                email: "jo@example.com".into(),
                firstname: "Jo".into(),
                lastname: "Bloggs".into(),
            },
            total: money("$43.00"),
        }),
        on_back_to_home: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<ConfirmationPage>::with_props(props).render());
    assert!(html.contains("Thank you for your purchase, Jo Bloggs!"));
    assert!(html.contains("STORE-001"));
    assert!(html.contains("$43.00"));
}

#[test]
fn confirmation_page_without_an_order_offers_a_way_home() {
    let props = ConfirmationPageProps {
        order: None,
        on_back_to_home: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<ConfirmationPage>::with_props(props).render());
    assert!(html.contains("No order found."));
    assert!(html.contains("Back to home"));
}

#[test]
fn not_found_page_renders_fallback_copy() {
    let props = NotFoundProps {
        on_go_home: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<NotFound>::with_props(props).render());
    assert!(html.contains("Page not found"));
}
