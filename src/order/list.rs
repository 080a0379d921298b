//! ListOrders command

use crate::context::BoardContext;
use crate::error::{BoardError, Result};
use crate::operation::Execute;
use serde_json::Value;

/// List all orders in store order
#[derive(Debug, Default)]
pub struct ListOrders;

impl Execute<BoardContext, BoardError> for ListOrders {
    fn execute(&self, ctx: &BoardContext) -> Result<Value> {
        let orders = ctx.list_orders();

        Ok(serde_json::json!({
            "orders": orders,
            "count": orders.len()
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::order::LoadOrders;

    #[test]
    fn test_list_orders() {
        let ctx = BoardContext::new();
        LoadOrders::defaults().execute(&ctx).unwrap();

        let result = ListOrders.execute(&ctx).unwrap();
        assert_eq!(result["count"], 11);
        assert_eq!(result["orders"].as_array().unwrap().len(), 11);
    }

    #[test]
    fn test_list_empty_store() {
        let ctx = BoardContext::new();
        let result = ListOrders.execute(&ctx).unwrap();
        assert_eq!(result["count"], 0);
    }
}
