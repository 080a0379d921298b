//! ListComments command

use crate::context::BoardContext;
use crate::error::{BoardError, Result};
use crate::operation::Execute;
use crate::types::OrderId;
use serde_json::Value;

/// List all comments on an order, oldest first
#[derive(Debug)]
pub struct ListComments {
    /// The order ID to list comments for
    pub order_id: OrderId,
}

impl ListComments {
    pub fn new(order_id: impl Into<OrderId>) -> Self {
        Self {
            order_id: order_id.into(),
        }
    }
}

impl Execute<BoardContext, BoardError> for ListComments {
    fn execute(&self, ctx: &BoardContext) -> Result<Value> {
        let order = ctx.read_order(&self.order_id)?;

        Ok(serde_json::json!({
            "comments": order.comments,
            "count": order.comments.len()
        }))
    }
}
