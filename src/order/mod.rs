//! Order commands

mod approve;
mod get;
mod list;
mod load;
mod mv;

pub use approve::ApproveOrder;
pub use get::GetOrder;
pub use list::ListOrders;
pub use load::LoadOrders;
pub use mv::MoveOrder;
