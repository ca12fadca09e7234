//! Receipt persistence port.
//!
//! The last completed order is kept in durable local storage under a fixed
//! key so the confirmation view can be redisplayed after a reload. The store
//! is injected into the session rather than reached for as ambient storage.

use crate::checkout::Order;
use std::cell::RefCell;

/// Fixed storage key for the persisted order receipt.
pub const RECEIPT_KEY: &str = "order_receipt";

/// Trait for abstracting receipt persistence.
/// Platform-specific implementations should provide this.
pub trait ReceiptStore {
    type Error: std::error::Error + 'static;

    /// Load the persisted receipt, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the stored value exists but cannot be read or
    /// parsed.
    fn load(&self) -> Result<Option<Order>, Self::Error>;

    /// Persist the receipt, overwriting any prior value.
    ///
    /// # Errors
    ///
    /// Returns an error if the receipt cannot be written.
    fn save(&self, order: &Order) -> Result<(), Self::Error>;

    /// Remove the persisted receipt.
    ///
    /// # Errors
    ///
    /// Returns an error if the stored value cannot be removed.
    fn clear(&self) -> Result<(), Self::Error>;
}

/// In-memory receipt store holding the serialized receipt, for native tests
/// and headless use. Stores JSON like the browser implementation does, so
/// round-trip behavior matches.
#[derive(Debug, Default)]
pub struct MemoryReceiptStore {
    slot: RefCell<Option<String>>,
}

impl MemoryReceiptStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw serialized contents, if a receipt is stored.
    #[must_use]
    pub fn raw(&self) -> Option<String> {
        self.slot.borrow().clone()
    }
}

impl ReceiptStore for MemoryReceiptStore {
    type Error = serde_json::Error;

    fn load(&self) -> Result<Option<Order>, Self::Error> {
        self.slot
            .borrow()
            .as_deref()
            .map(serde_json::from_str)
            .transpose()
    }

    fn save(&self, order: &Order) -> Result<(), Self::Error> {
        let json = serde_json::to_string(order)?;
        *self.slot.borrow_mut() = Some(json);
        Ok(())
    }

    fn clear(&self) -> Result<(), Self::Error> {
        *self.slot.borrow_mut() = None;
        Ok(())
    }
}
