//! Order-progress board engine with in-memory storage
//!
//! This crate implements the order-tracking board of a reseller dashboard: an
//! in-memory store of orders grouped into four fixed status columns (Pending,
//! Processing, Preview, Completed), drag-driven and manual status
//! transitions, append-only comment threads per order, and a synchronous
//! event bus that keeps distant UI regions (header balance, cart badge) in
//! sync without a shared component ancestry.
//!
//! All state is session-local. There is no persistence, no network, and no
//! authentication - the engine backs a single UI session and everything runs
//! to completion on one thread.
//!
//! ## Basic Usage
//!
//! ```rust
//! use orderboard::{BoardContext, Execute};
//! use orderboard::order::{LoadOrders, MoveOrder};
//! use orderboard::types::Status;
//!
//! # fn example() -> Result<(), orderboard::BoardError> {
//! let ctx = BoardContext::new();
//! LoadOrders::defaults().execute(&ctx)?;
//!
//! // Drag ORD-001 from Pending to Processing
//! let result = MoveOrder::new("1", Status::Processing).execute(&ctx)?;
//! assert_eq!(result["status"], "processing");
//! # Ok(())
//! # }
//! ```
//!
//! ## Cross-component signaling
//!
//! The store republishes the Pending column's size on every status change;
//! the cart badge subscribes to it. The withdrawal collaborator publishes
//! balance updates on the same bus, which the header consumes. See
//! [`bus::EventBus`].

pub mod bus;
mod context;
pub mod defaults;
mod error;
pub mod gesture;
mod operation;
pub mod parse;
pub mod types;

// Command modules
pub mod board;
pub mod comment;
pub mod order;

pub use bus::{EventBus, Signal, Topic};
pub use context::BoardContext;
pub use error::{BoardError, Result};
pub use operation::Execute;

// Re-export commonly used types
pub use types::{columns_for, ColumnView, Comment, CommentId, Order, OrderId, Status, SubscriptionId};
