//! ApproveOrder command

use crate::context::BoardContext;
use crate::error::{BoardError, Result};
use crate::operation::Execute;
use crate::types::{OrderId, Status};
use serde_json::Value;

/// Approve an order, moving it to the Completed column.
///
/// The manual (non-drag) transition affordance. Funnels through the same
/// status path as [`MoveOrder`](crate::order::MoveOrder) so event emission is
/// identical whichever gesture triggered the change.
#[derive(Debug)]
pub struct ApproveOrder {
    /// The order ID to approve
    pub id: OrderId,
}

impl ApproveOrder {
    /// Create a new ApproveOrder command
    pub fn new(id: impl Into<OrderId>) -> Self {
        Self { id: id.into() }
    }
}

impl Execute<BoardContext, BoardError> for ApproveOrder {
    fn execute(&self, ctx: &BoardContext) -> Result<Value> {
        let order = ctx.read_order(&self.id)?;

        if order.status == Status::Completed {
            tracing::debug!(id = %self.id, "already completed");
            return Ok(serde_json::to_value(&order)?);
        }

        let updated = ctx.set_status(&self.id, Status::Completed)?;
        tracing::debug!(id = %self.id, from = %order.status, "order approved");
        Ok(serde_json::to_value(&updated)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bus::Topic;
    use crate::order::LoadOrders;
    use std::cell::Cell;
    use std::rc::Rc;

    fn setup() -> BoardContext {
        let ctx = BoardContext::new();
        LoadOrders::defaults().execute(&ctx).unwrap();
        ctx
    }

    #[test]
    fn test_approve_from_preview() {
        let ctx = setup();
        let result = ApproveOrder::new("10").execute(&ctx).unwrap();
        assert_eq!(result["status"], "completed");
    }

    #[test]
    fn test_approve_completed_is_noop() {
        let ctx = setup();
        let hits = Rc::new(Cell::new(0u32));
        let hits_in = Rc::clone(&hits);
        ctx.bus().subscribe(Topic::PendingCountChanged, move |_| {
            hits_in.set(hits_in.get() + 1);
        });

        let result = ApproveOrder::new("4").execute(&ctx).unwrap();
        assert_eq!(result["status"], "completed");
        assert_eq!(hits.get(), 0);
    }

    #[test]
    fn test_approve_nonexistent_order() {
        let ctx = setup();
        let result = ApproveOrder::new("nonexistent").execute(&ctx);
        assert!(matches!(result, Err(BoardError::OrderNotFound { .. })));
    }
}
