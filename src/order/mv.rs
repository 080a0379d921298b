//! MoveOrder command

use crate::context::BoardContext;
use crate::error::{BoardError, Result};
use crate::operation::Execute;
use crate::types::{OrderId, Status};
use serde_json::Value;

/// Move an order to a different status column.
///
/// This is the drag-and-drop completion contract: the presentation adapter
/// issues exactly one MoveOrder per released drag. Idempotent - dropping an
/// order on the column it already occupies changes nothing and emits nothing.
///
/// Any status to any status is permitted, including backward moves; the board
/// imposes no transition table.
#[derive(Debug)]
pub struct MoveOrder {
    /// The order ID to move
    pub id: OrderId,
    /// The target column's status
    pub status: Status,
}

impl MoveOrder {
    /// Create a new MoveOrder command
    pub fn new(id: impl Into<OrderId>, status: Status) -> Self {
        Self {
            id: id.into(),
            status,
        }
    }
}

impl Execute<BoardContext, BoardError> for MoveOrder {
    fn execute(&self, ctx: &BoardContext) -> Result<Value> {
        let order = ctx.read_order(&self.id)?;

        if order.status == self.status {
            tracing::debug!(id = %self.id, status = %self.status, "move is a no-op");
            return Ok(serde_json::to_value(&order)?);
        }

        let updated = ctx.set_status(&self.id, self.status)?;
        tracing::debug!(id = %self.id, from = %order.status, to = %self.status, "order moved");
        Ok(serde_json::to_value(&updated)?)
    }
}
