//! GetOrder command

use crate::context::BoardContext;
use crate::error::{BoardError, Result};
use crate::operation::Execute;
use crate::types::OrderId;
use serde_json::Value;

/// Get an order by ID with computed fields
#[derive(Debug)]
pub struct GetOrder {
    /// The order ID to retrieve
    pub id: OrderId,
}

impl GetOrder {
    /// Create a new GetOrder command
    pub fn new(id: impl Into<OrderId>) -> Self {
        Self { id: id.into() }
    }
}

impl Execute<BoardContext, BoardError> for GetOrder {
    fn execute(&self, ctx: &BoardContext) -> Result<Value> {
        let order = ctx.read_order(&self.id)?;

        let mut result = serde_json::to_value(&order)?;
        result["column"] = serde_json::json!(order.status.label());
        result["comment_count"] = serde_json::json!(order.comments.len());
        Ok(result)
    }
}
