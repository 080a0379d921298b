//! GetBoard command

use crate::context::BoardContext;
use crate::error::{BoardError, Result};
use crate::operation::Execute;
use crate::types::columns_for;
use serde_json::Value;

/// Get the board view: the four columns with their member orders and counts
#[derive(Debug, Default)]
pub struct GetBoard;

impl Execute<BoardContext, BoardError> for GetBoard {
    fn execute(&self, ctx: &BoardContext) -> Result<Value> {
        let orders = ctx.list_orders();
        let columns = columns_for(&orders);

        let column_views: Vec<Value> = columns
            .iter()
            .map(|c| {
                serde_json::json!({
                    "status": c.status,
                    "label": c.label,
                    "count": c.count(),
                    "orders": c.orders
                })
            })
            .collect();

        Ok(serde_json::json!({
            "columns": column_views,
            "total": orders.len()
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::order::{LoadOrders, MoveOrder};
    use crate::types::Status;

    fn setup() -> BoardContext {
        let ctx = BoardContext::new();
        LoadOrders::defaults().execute(&ctx).unwrap();
        ctx
    }

    #[test]
    fn test_get_board_shape() {
        let ctx = setup();
        let result = GetBoard.execute(&ctx).unwrap();

        let columns = result["columns"].as_array().unwrap();
        assert_eq!(columns.len(), 4);
        assert_eq!(columns[0]["label"], "Pending");
        assert_eq!(columns[0]["count"], 2);
        assert_eq!(columns[1]["count"], 1);
        assert_eq!(columns[2]["count"], 3);
        assert_eq!(columns[3]["count"], 5);
        assert_eq!(result["total"], 11);
    }

    #[test]
    fn test_board_reflects_moves() {
        let ctx = setup();
        MoveOrder::new("1", Status::Preview).execute(&ctx).unwrap();

        let result = GetBoard.execute(&ctx).unwrap();
        let columns = result["columns"].as_array().unwrap();
        assert_eq!(columns[0]["count"], 1);
        assert_eq!(columns[2]["count"], 4);
    }

    #[test]
    fn test_board_columns_sorted_newest_first() {
        let ctx = setup();
        let result = GetBoard.execute(&ctx).unwrap();

        let preview = result["columns"][2]["orders"].as_array().unwrap();
        let numbers: Vec<&str> = preview.iter().map(|o| o["number"].as_str().unwrap()).collect();
        assert_eq!(numbers, vec!["ORD-010", "ORD-011", "ORD-012"]);
    }
}
