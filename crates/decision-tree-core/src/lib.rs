//! Decision Tree Core - composable decision nodes
//!
//! Branching business logic is expressed as a chain of nodes instead of a
//! long conditional. Each node wraps a decision function whose [`Outcome`]
//! is one of:
//! - a terminal value
//! - a deferred value, forced once
//! - a delegation to another node, which sees the original input
//! - a failure signal, returned to the caller unchanged
//!
//! An optional shared context is threaded through every node of a single
//! evaluation by mutable reference.

pub mod error;
pub mod node;
pub mod outcome;
pub mod value;

// Re-export commonly used types
pub use error::{DecisionError, Result};
pub use node::DecisionNode;
pub use outcome::{Outcome, Thunk};
pub use value::Value;
