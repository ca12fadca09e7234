use futures::executor::block_on;
use storefront_web::commerce::{Cart, LineItem, Money, Product};
use storefront_web::components::{
    cart_drawer::{CartDrawer, Props as CartDrawerProps},
    navbar::{Navbar, Props as NavbarProps},
    product_card::{ProductCard, Props as ProductCardProps},
};
use yew::{Callback, LocalServerRenderer};

fn money(formatted: &str) -> Money {
    Money {
        raw: 0.0,
        formatted_with_symbol: formatted.into(),
    }
}

fn cart_with_one_line() -> Cart {
    Cart {
        id: "cart_abc".into(),
        line_items: vec![LineItem {
            id: "item_1".into(),
            product_id: "prod_1".into(),
            name: "Beanie".into(),
            quantity: 3,
            price: money("$21.50"),
            line_total: money("$64.50"),
        }],
        total_items: 3,
        total_unique_items: 1,
        subtotal: money("$64.50"),
    }
}

fn navbar_props(total_items: u32, show_cart_toggle: bool) -> NavbarProps {
    NavbarProps {
        total_items,
        show_cart_toggle,
        on_toggle_cart: Callback::noop(),
        on_go_home: Callback::noop(),
    }
}

fn drawer_props(cart: Cart) -> CartDrawerProps {
    CartDrawerProps {
        cart,
        on_update_quantity: Callback::noop(),
        on_remove_line: Callback::noop(),
        on_empty_cart: Callback::noop(),
        on_close: Callback::noop(),
        on_checkout: Callback::noop(),
    }
}

#[test]
fn navbar_badge_reflects_the_server_item_count() {
    let html = block_on(LocalServerRenderer::<Navbar>::with_props(navbar_props(7, true)).render());
    assert!(html.contains("cart-badge"));
    assert!(html.contains('7'));
}

#[test]
fn navbar_hides_the_cart_toggle_off_home() {
    let html =
        block_on(LocalServerRenderer::<Navbar>::with_props(navbar_props(7, false)).render());
    assert!(!html.contains("cart-toggle"));
}

#[test]
fn cart_drawer_renders_lines_with_totals() {
    let html =
        block_on(LocalServerRenderer::<CartDrawer>::with_props(drawer_props(cart_with_one_line())).render());
    assert!(html.contains("Beanie"));
    assert!(html.contains("$64.50"));
    assert!(html.contains("Empty cart"));
    assert!(html.contains("Checkout"));
}

#[test]
fn cart_drawer_shows_the_empty_state() {
    let html =
        block_on(LocalServerRenderer::<CartDrawer>::with_props(drawer_props(Cart::default())).render());
    assert!(html.contains("Your cart is empty."));
    assert!(!html.contains("Checkout"));
}

#[test]
fn product_card_shows_backend_formatted_price() {
    let props = ProductCardProps {
        product: Product {
            id: "prod_1".into(),
            name: "Beanie".into(),
            price: money("$21.50"),
            ..Product::default()
        },
        on_add_to_cart: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<ProductCard>::with_props(props).render());
    assert!(html.contains("$21.50"));
    assert!(html.contains("Add to cart"));
}
