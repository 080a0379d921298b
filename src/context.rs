//! BoardContext - storage primitives for the order board
//!
//! The context provides access to in-memory state and the event bus. No
//! business logic methods, just data access primitives. Commands do all the
//! work, with one exception: status mutation goes through
//! [`BoardContext::set_status`] so there is exactly one path that writes a
//! status and republishes the pending count.

use crate::bus::{EventBus, Signal};
use crate::error::{BoardError, Result};
use crate::types::{Order, OrderId, Status};
use std::cell::RefCell;
use std::rc::Rc;

/// Context passed to every command - provides access, not logic
pub struct BoardContext {
    /// Authoritative order list for the current session
    orders: RefCell<Vec<Order>>,
    /// Shared bus for cross-component notifications
    bus: Rc<EventBus>,
}

impl BoardContext {
    /// Create a context with an empty store and a fresh bus
    pub fn new() -> Self {
        Self::with_bus(Rc::new(EventBus::new()))
    }

    /// Create a context sharing an existing bus.
    ///
    /// Collaborators outside the board (header, withdrawal form) subscribe
    /// and publish on the same bus instance.
    pub fn with_bus(bus: Rc<EventBus>) -> Self {
        Self {
            orders: RefCell::new(Vec::new()),
            bus,
        }
    }

    /// The shared event bus
    pub fn bus(&self) -> &Rc<EventBus> {
        &self.bus
    }

    // =========================================================================
    // Store primitives
    // =========================================================================

    /// Replace the store contents. Used once at board mount.
    pub fn replace_orders(&self, orders: Vec<Order>) {
        *self.orders.borrow_mut() = orders;
    }

    /// Read an order by id (a clone; the store keeps ownership)
    pub fn read_order(&self, id: &OrderId) -> Result<Order> {
        self.orders
            .borrow()
            .iter()
            .find(|o| &o.id == id)
            .cloned()
            .ok_or_else(|| self.not_found(id))
    }

    /// Write an order back, replacing the stored version with the same id
    pub fn write_order(&self, order: Order) -> Result<()> {
        let mut orders = self.orders.borrow_mut();
        match orders.iter_mut().find(|o| o.id == order.id) {
            Some(slot) => {
                *slot = order;
                Ok(())
            }
            None => Err(self.not_found(&order.id)),
        }
    }

    /// Snapshot of all orders in store order.
    ///
    /// The returned vector is detached: mutating it does not affect the store.
    pub fn list_orders(&self) -> Vec<Order> {
        self.orders.borrow().clone()
    }

    /// Number of orders in the store
    pub fn order_count(&self) -> usize {
        self.orders.borrow().len()
    }

    /// Number of orders currently in the Pending column
    pub fn pending_count(&self) -> usize {
        self.orders
            .borrow()
            .iter()
            .filter(|o| o.status == Status::Pending)
            .count()
    }

    /// Build a not-found error, surfacing it to the log.
    ///
    /// Ids come from enumerating the store, so a miss is a programming error
    /// rather than something the end user can cause; the log is where it
    /// belongs.
    fn not_found(&self, id: &OrderId) -> BoardError {
        tracing::warn!(id = %id, "order not found");
        BoardError::OrderNotFound { id: id.to_string() }
    }

    // =========================================================================
    // Status mutation - the single path
    // =========================================================================

    /// Set an order's status and republish the pending count.
    ///
    /// Every status change - drag drop, approve action, anything - funnels
    /// through here, which is what keeps the published count and the actual
    /// Pending membership in lockstep. Returns the updated order.
    pub fn set_status(&self, id: &OrderId, status: Status) -> Result<Order> {
        let updated = {
            let mut orders = self.orders.borrow_mut();
            let order = orders
                .iter_mut()
                .find(|o| &o.id == id)
                .ok_or_else(|| self.not_found(id))?;
            order.status = status;
            order.clone()
        };
        // Borrow released before publishing: handlers may read the store.
        self.publish_pending_count();
        Ok(updated)
    }

    /// Publish the current pending count on the bus
    pub fn publish_pending_count(&self) {
        let count = self.pending_count();
        self.bus.publish(&Signal::PendingCountChanged { count });
    }
}

impl Default for BoardContext {
    fn default() -> Self {
        Self::new()
    }
}
