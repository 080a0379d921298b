//! The `Execute` trait for board commands
//!
//! Commands are structs where the fields ARE the parameters - no duplication.
//! Each command implements [`Execute`] against a context and returns a JSON
//! snapshot of its result, which is the contract with the rendering layer.

use serde_json::Value;

/// A command that executes against a context `C` and fails with `E`
pub trait Execute<C, E> {
    /// Run the command to completion. Synchronous: the engine is
    /// single-threaded and no operation suspends mid-mutation.
    fn execute(&self, ctx: &C) -> Result<Value, E>;
}
