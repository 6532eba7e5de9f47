//! Result of a single decision function call
//!
//! A decision function never returns a bare value: it returns an `Outcome`,
//! and the node evaluating it decides what to do next. The variants are
//! resolved in a fixed order and a value is never reinterpreted:
//!
//! - `Fail` is surfaced to the caller as `Err`
//! - `Delegate` hands the original input and context to another node
//! - `Deferred` is forced once and its return value is final
//! - `Value` is returned as-is

use crate::error::DecisionError;
use crate::node::DecisionNode;
use std::fmt;

/// Zero-argument computation producing a final value
pub type Thunk<T> = Box<dyn FnOnce() -> T>;

/// What a decision function produced
pub enum Outcome<I, T, E = DecisionError, C = ()> {
    /// Terminal value
    Value(T),
    /// Deferred value, invoked exactly once
    Deferred(Thunk<T>),
    /// Continue with another node
    Delegate(DecisionNode<I, T, E, C>),
    /// Failure signal
    Fail(E),
}

impl<I, T, E, C> Outcome<I, T, E, C> {
    pub fn value(value: T) -> Self {
        Self::Value(value)
    }

    /// Wrap a thunk so it only runs if this outcome is resolved
    pub fn deferred<F>(thunk: F) -> Self
    where
        F: FnOnce() -> T + 'static,
    {
        Self::Deferred(Box::new(thunk))
    }

    pub fn delegate(node: &DecisionNode<I, T, E, C>) -> Self {
        Self::Delegate(node.clone())
    }

    pub fn fail(error: E) -> Self {
        Self::Fail(error)
    }

    /// Name of the variant, used in trace output
    pub fn kind(&self) -> &'static str {
        match self {
            Outcome::Value(_) => "value",
            Outcome::Deferred(_) => "deferred",
            Outcome::Delegate(_) => "delegate",
            Outcome::Fail(_) => "fail",
        }
    }
}

impl<I, T, E, C> From<DecisionNode<I, T, E, C>> for Outcome<I, T, E, C> {
    fn from(node: DecisionNode<I, T, E, C>) -> Self {
        Outcome::Delegate(node)
    }
}

/// Lets decision bodies use `?` or return `Err(e)`; an error becomes `Fail`
impl<I, T, E, C> From<Result<Outcome<I, T, E, C>, E>> for Outcome<I, T, E, C> {
    fn from(result: Result<Outcome<I, T, E, C>, E>) -> Self {
        match result {
            Ok(outcome) => outcome,
            Err(error) => Outcome::Fail(error),
        }
    }
}

impl<I, T: fmt::Debug, E: fmt::Debug, C> fmt::Debug for Outcome<I, T, E, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Value(value) => f.debug_tuple("Value").field(value).finish(),
            Outcome::Deferred(_) => f.write_str("Deferred(..)"),
            Outcome::Delegate(node) => f.debug_tuple("Delegate").field(node).finish(),
            Outcome::Fail(error) => f.debug_tuple("Fail").field(error).finish(),
        }
    }
}
