//! LoadOrders command

use crate::context::BoardContext;
use crate::error::{BoardError, Result};
use crate::operation::Execute;
use crate::types::Order;
use serde_json::Value;

/// Replace the store contents at board mount.
///
/// Orders are stored sorted newest-first, matching the initial display order,
/// and the pending count is published so already-mounted subscribers see the
/// fresh value immediately.
#[derive(Debug)]
pub struct LoadOrders {
    /// The initial order records
    pub orders: Vec<Order>,
}

impl LoadOrders {
    /// Create a LoadOrders command from typed orders
    pub fn new(orders: Vec<Order>) -> Self {
        Self { orders }
    }

    /// Create a LoadOrders command from raw JSON records.
    ///
    /// Records with an out-of-enum status are rejected up front; nothing is
    /// loaded on failure.
    pub fn from_json(input: &Value) -> Result<Self> {
        Ok(Self::new(crate::parse::parse_orders(input)?))
    }

    /// Load the built-in demo dataset
    pub fn defaults() -> Self {
        Self::new(crate::defaults::default_orders())
    }
}

impl Execute<BoardContext, BoardError> for LoadOrders {
    fn execute(&self, ctx: &BoardContext) -> Result<Value> {
        let mut orders = self.orders.clone();
        orders.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        tracing::debug!(count = orders.len(), "loading orders");
        ctx.replace_orders(orders);
        ctx.publish_pending_count();

        Ok(serde_json::json!({
            "count": ctx.order_count(),
            "pending": ctx.pending_count()
        }))
    }
}
