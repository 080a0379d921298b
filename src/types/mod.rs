//! Core types for the order board engine

mod column;
mod ids;
mod order;
mod status;

// Re-export all types
pub use column::{columns_for, ColumnView};
pub use ids::{CommentId, OrderId, SubscriptionId};
pub use order::{Comment, Order};
pub use status::Status;
