//! AddComment command

use crate::context::BoardContext;
use crate::error::{BoardError, Result};
use crate::operation::Execute;
use crate::types::{Comment, OrderId};
use serde_json::Value;

/// Add a comment to an order's thread.
///
/// The only path through which comments are created. Comments are append-only:
/// the thread grows at the tail and existing entries are never edited or
/// removed. A body that trims to empty is rejected before any mutation.
/// Returns the updated order with the new comment at the tail of its thread.
#[derive(Debug)]
pub struct AddComment {
    /// The order ID to comment on
    pub order_id: OrderId,
    /// The comment body
    pub body: String,
    /// Display name of the author
    pub author: String,
}

impl AddComment {
    pub fn new(
        order_id: impl Into<OrderId>,
        body: impl Into<String>,
        author: impl Into<String>,
    ) -> Self {
        Self {
            order_id: order_id.into(),
            body: body.into(),
            author: author.into(),
        }
    }
}

impl Execute<BoardContext, BoardError> for AddComment {
    fn execute(&self, ctx: &BoardContext) -> Result<Value> {
        if self.body.trim().is_empty() {
            tracing::warn!(order_id = %self.order_id, "rejected empty comment");
            return Err(BoardError::invalid_value("body", "comment body is empty"));
        }

        let mut order = ctx.read_order(&self.order_id)?;

        let comment = Comment::new(&self.body, &self.author);
        order.comments.push(comment);
        ctx.write_order(order.clone())?;

        Ok(serde_json::to_value(&order)?)
    }
}
