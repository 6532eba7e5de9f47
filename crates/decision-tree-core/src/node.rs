//! Decision node and its evaluation
//!
//! A node wraps a decision function and an optional input adapter. Nodes are
//! cheap handles: cloning one shares the same underlying function, which is
//! how decision functions capture the nodes they delegate to.
//!
//! Delegation is unguarded. A chain that delegates back to one of its
//! ancestors recurses until the stack is exhausted.

use crate::error::DecisionError;
use crate::outcome::Outcome;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, trace};

/// Adapter and decision function fused into one call
type Decide<I, T, E, C> = dyn Fn(&I, &mut C) -> Outcome<I, T, E, C> + Send + Sync;

/// Unit of evaluation in a decision tree
///
/// `I` is the input every node in a chain receives, `T` the final result,
/// `E` the failure type and `C` the shared context threaded through one
/// evaluation.
pub struct DecisionNode<I, T, E = DecisionError, C = ()> {
    decide: Arc<Decide<I, T, E, C>>,
}

impl<I, T, E, C> DecisionNode<I, T, E, C>
where
    I: 'static,
    T: 'static,
    E: 'static,
    C: 'static,
{
    /// Node whose decision function ignores the context
    pub fn new<F, R>(decide: F) -> Self
    where
        F: Fn(&I) -> R + Send + Sync + 'static,
        R: Into<Outcome<I, T, E, C>>,
    {
        Self::from_fn(move |input, _ctx| decide(input).into())
    }

    /// Node whose decision function reads or writes the shared context
    pub fn with_context<F, R>(decide: F) -> Self
    where
        F: Fn(&I, &mut C) -> R + Send + Sync + 'static,
        R: Into<Outcome<I, T, E, C>>,
    {
        Self::from_fn(move |input, ctx| decide(input, ctx).into())
    }

    /// Node that narrows its input with `adapter` before deciding
    ///
    /// The adapter returns an owned view: it cannot hand out a borrow of the
    /// input, so narrowing to a field means cloning it (or copying out the
    /// parts the decision needs).
    pub fn adapted<A, G, F, R>(adapter: G, decide: F) -> Self
    where
        G: Fn(&I) -> A + Send + Sync + 'static,
        F: Fn(A) -> R + Send + Sync + 'static,
        R: Into<Outcome<I, T, E, C>>,
    {
        Self::from_fn(move |input, _ctx| decide(adapter(input)).into())
    }

    pub fn adapted_with_context<A, G, F, R>(adapter: G, decide: F) -> Self
    where
        G: Fn(&I) -> A + Send + Sync + 'static,
        F: Fn(A, &mut C) -> R + Send + Sync + 'static,
        R: Into<Outcome<I, T, E, C>>,
    {
        Self::from_fn(move |input, ctx| decide(adapter(input), ctx).into())
    }

    /// Like [`adapted_with_context`](Self::adapted_with_context), but the
    /// adapter may fail. Its error is propagated unchanged and the decision
    /// function is not called.
    pub fn try_adapted<A, G, F, R>(adapter: G, decide: F) -> Self
    where
        G: Fn(&I) -> Result<A, E> + Send + Sync + 'static,
        F: Fn(A, &mut C) -> R + Send + Sync + 'static,
        R: Into<Outcome<I, T, E, C>>,
    {
        Self::from_fn(move |input, ctx| match adapter(input) {
            Ok(adapted) => decide(adapted, ctx).into(),
            Err(error) => Outcome::Fail(error),
        })
    }

    /// Node that always returns `value`
    pub fn constant(value: T) -> Self
    where
        T: Clone + Send + Sync,
    {
        Self::from_fn(move |_input, _ctx| Outcome::Value(value.clone()))
    }

    fn from_fn<F>(decide: F) -> Self
    where
        F: Fn(&I, &mut C) -> Outcome<I, T, E, C> + Send + Sync + 'static,
    {
        Self {
            decide: Arc::new(decide),
        }
    }
}

impl<I, T, E, C> DecisionNode<I, T, E, C> {
    /// Evaluate with a fresh default context
    pub fn evaluate(&self, input: &I) -> Result<T, E>
    where
        C: Default,
    {
        let mut ctx = C::default();
        self.evaluate_with(input, &mut ctx)
    }

    /// Evaluate with a caller-owned context
    ///
    /// Every node reached through delegation sees the same `input` (never an
    /// adapted view of it) and the same `ctx`, so writes made by one node are
    /// visible to the nodes it delegates to.
    pub fn evaluate_with(&self, input: &I, ctx: &mut C) -> Result<T, E> {
        self.resolve(input, ctx, 0)
    }

    fn resolve(&self, input: &I, ctx: &mut C, depth: usize) -> Result<T, E> {
        let outcome = (self.decide)(input, ctx);
        trace!(depth, outcome = outcome.kind(), "Decision node resolved");

        match outcome {
            Outcome::Fail(error) => {
                debug!(depth, "Decision node signalled failure");
                Err(error)
            }
            Outcome::Delegate(next) => next.resolve(input, ctx, depth + 1),
            // Forced once; whatever the thunk returns is final
            Outcome::Deferred(thunk) => Ok(thunk()),
            Outcome::Value(value) => Ok(value),
        }
    }

    /// Whether both handles refer to the same node
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.decide, &other.decide)
    }
}

impl<I, T, E, C> Clone for DecisionNode<I, T, E, C> {
    fn clone(&self) -> Self {
        Self {
            decide: Arc::clone(&self.decide),
        }
    }
}

impl<I, T, E, C> fmt::Debug for DecisionNode<I, T, E, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DecisionNode")
            .field("ptr", &Arc::as_ptr(&self.decide).cast::<()>())
            .finish()
    }
}
