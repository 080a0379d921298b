//! Derived column views
//!
//! Columns are not stored. They are computed on demand from the fixed status
//! enum and whatever orders currently carry each status.

use super::order::Order;
use super::status::Status;
use serde::Serialize;

/// One column of the board: a status plus its member orders
#[derive(Debug, Clone, Serialize)]
pub struct ColumnView {
    pub status: Status,
    pub label: &'static str,
    pub orders: Vec<Order>,
}

impl ColumnView {
    /// Number of orders in this column
    pub fn count(&self) -> usize {
        self.orders.len()
    }
}

/// Partition orders into the four fixed columns.
///
/// Pure function: within each column, orders are sorted by `created_at`
/// descending (newest first). Input order is otherwise irrelevant.
pub fn columns_for(orders: &[Order]) -> Vec<ColumnView> {
    Status::ALL
        .iter()
        .map(|&status| {
            let mut members: Vec<Order> = orders
                .iter()
                .filter(|o| o.status == status)
                .cloned()
                .collect();
            members.sort_by(|a, b| b.created_at.cmp(&a.created_at));
            ColumnView {
                status,
                label: status.label(),
                orders: members,
            }
        })
        .collect()
}
