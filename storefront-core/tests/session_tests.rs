//! Session behavior against a recording mock backend.

use std::cell::RefCell;
use std::rc::Rc;

use storefront_core::{
    Cart, CheckoutForm, CheckoutToken, CommerceApi, CommerceError, Customer, LineItem,
    MemoryReceiptStore, Money, Order, Product, StoreSession, StoreState,
};

/// Scripted backend that records every call it receives.
#[derive(Default)]
struct MockApi {
    calls: Rc<RefCell<Vec<String>>>,
    fail_remote: bool,
}

impl MockApi {
    fn recording(calls: &Rc<RefCell<Vec<String>>>) -> Self {
        Self {
            calls: Rc::clone(calls),
            fail_remote: false,
        }
    }

    fn failing() -> Self {
        Self {
            calls: Rc::default(),
            fail_remote: true,
        }
    }

    fn record(&self, call: &str) -> Result<(), CommerceError> {
        self.calls.borrow_mut().push(call.to_string());
        if self.fail_remote {
            Err(CommerceError::Remote("scripted failure".into()))
        } else {
            Ok(())
        }
    }
}

fn cart_with_total_items(total_items: u32) -> Cart {
    Cart {
        id: "cart_abc".into(),
        line_items: vec![LineItem {
            id: "item_1".into(),
            product_id: "prod_1".into(),
            name: "Beanie".into(),
            quantity: total_items,
            ..LineItem::default()
        }],
        total_items,
        total_unique_items: 1,
        ..Cart::default()
    }
}

fn fresh_cart() -> Cart {
    Cart {
        id: "cart_fresh".into(),
        ..Cart::default()
    }
}

impl CommerceApi for MockApi {
    async fn list_products(&self) -> Result<Vec<Product>, CommerceError> {
        self.record("list_products")?;
        Ok(vec![Product {
            id: "prod_1".into(),
            name: "Beanie".into(),
            ..Product::default()
        }])
    }

    async fn retrieve_cart(&self) -> Result<Cart, CommerceError> {
        self.record("retrieve_cart")?;
        Ok(fresh_cart())
    }

    async fn add_to_cart(&self, _product_id: &str, quantity: u32) -> Result<Cart, CommerceError> {
        self.record("add_to_cart")?;
        Ok(cart_with_total_items(quantity))
    }

    async fn update_line(&self, _line_id: &str, quantity: u32) -> Result<Cart, CommerceError> {
        self.record("update_line")?;
        Ok(cart_with_total_items(quantity))
    }

    async fn remove_line(&self, _line_id: &str) -> Result<Cart, CommerceError> {
        self.record("remove_line")?;
        Ok(fresh_cart())
    }

    async fn empty_cart(&self) -> Result<Cart, CommerceError> {
        self.record("empty_cart")?;
        Ok(fresh_cart())
    }

    async fn refresh_cart(&self) -> Result<Cart, CommerceError> {
        self.record("refresh_cart")?;
        Ok(fresh_cart())
    }

    async fn generate_token(&self, cart_id: &str) -> Result<CheckoutToken, CommerceError> {
        self.record("generate_token")?;
        Ok(CheckoutToken {
            id: format!("chkt_{cart_id}"),
        })
    }

    async fn capture(&self, _token_id: &str, form: &CheckoutForm) -> Result<Order, CommerceError> {
        self.record("capture")?;
        Ok(Order {
            id: "order_1".into(),
            customer_reference: "STORE-001".into(),
            customer: form.customer.clone(),
            total: Money {
                raw: 21.5,
                formatted_with_symbol: "$21.50".into(),
            },
        })
    }
}

fn session() -> StoreSession<MockApi, MemoryReceiptStore> {
    StoreSession::new(MockApi::default(), MemoryReceiptStore::new())
}

fn checkout_form() -> CheckoutForm {
    CheckoutForm {
        customer: Customer {
            email: "jo@example.com".into(),
            firstname: "Jo".into(),
            lastname: "Bloggs".into(),
        },
        ..CheckoutForm::default()
    }
}

#[tokio::test]
async fn add_item_mirrors_the_server_cart_exactly() {
    let session = session();
    let prior = StoreState::default();
    assert_eq!(prior.cart.total_items, 0);

    let cart = session.add_item("prod_1", 2).await.expect("add");
    let next = prior.with_cart(cart.clone());
    assert_eq!(next.cart, cart);
    assert_eq!(next.cart.total_items, 2);
}

#[tokio::test]
async fn failed_mutation_leaves_state_unchanged() {
    let session = StoreSession::new(MockApi::failing(), MemoryReceiptStore::new());
    let prior = StoreState::default().with_cart(cart_with_total_items(5));

    let next = match session.add_item("prod_1", 2).await {
        Ok(cart) => prior.clone().with_cart(cart),
        Err(_) => prior.clone(),
    };
    assert_eq!(next, prior);
}

#[tokio::test]
async fn failed_cart_fetch_keeps_the_default_slice() {
    let session = StoreSession::new(MockApi::failing(), MemoryReceiptStore::new());
    let prior = StoreState::default();

    let next = match session.load_cart().await {
        Ok(cart) => prior.clone().with_cart(cart),
        Err(_) => prior.clone(),
    };
    assert_eq!(next.cart, Cart::default());
}

#[tokio::test]
async fn checkout_persists_receipt_and_issues_a_refresh() {
    let calls = Rc::new(RefCell::new(Vec::new()));
    let session = StoreSession::new(MockApi::recording(&calls), MemoryReceiptStore::new());

    let outcome = session
        .checkout("chkt_token", &checkout_form())
        .await
        .expect("capture");
    assert_eq!(outcome.order.id, "order_1");

    // The persisted receipt deep-equals the order held in state.
    let persisted = session
        .load_receipt()
        .expect("read back")
        .expect("receipt present");
    assert_eq!(persisted, outcome.order);

    // Capture is followed by a cart refresh for a fresh empty cart.
    let recorded = calls.borrow().clone();
    assert_eq!(recorded, vec!["capture", "refresh_cart"]);
    let refreshed = outcome.refreshed_cart.expect("refresh succeeded");
    assert!(refreshed.is_empty());
}

#[tokio::test]
async fn failed_capture_persists_nothing() {
    let session = StoreSession::new(MockApi::failing(), MemoryReceiptStore::new());
    let result = session.checkout("chkt_token", &checkout_form()).await;
    assert!(result.is_err());
    assert!(session.receipts().raw().is_none());
}

#[tokio::test]
async fn clearing_the_receipt_removes_the_stored_value() {
    let session = session();
    session
        .checkout("chkt_token", &checkout_form())
        .await
        .expect("capture");
    assert!(session.receipts().raw().is_some());

    session.clear_receipt().expect("clear");
    assert!(session.receipts().raw().is_none());
    assert!(session.load_receipt().expect("load").is_none());
}
