//! Boolean predicates over graphs, backed by spec assembly.

use std::fmt;
use std::ops::Not;
use std::sync::Arc;

use gspec_axes::{compare_axis_values, compute_graph_spec_with, Axis, AxisValue, InferredSpec};
use gspec_core::{ComputePolicy, Graph, PartialPolicy};
use tracing::debug;

use crate::partial::PartialSpec;

type Check = dyn Fn(&Graph) -> bool + Send + Sync;

/// Shareable boolean test over graphs.
#[derive(Clone)]
pub struct Predicate {
    check: Arc<Check>,
}

impl Predicate {
    /// Wraps a closure.
    pub fn new(check: impl Fn(&Graph) -> bool + Send + Sync + 'static) -> Self {
        Self {
            check: Arc::new(check),
        }
    }

    /// Evaluates the predicate.
    pub fn test(&self, graph: &Graph) -> bool {
        (self.check)(graph)
    }

    /// Holds when both predicates hold; `other` is skipped when `self` fails.
    pub fn and(self, other: Predicate) -> Predicate {
        Predicate::new(move |graph| self.test(graph) && other.test(graph))
    }

    /// Holds when either predicate holds; `other` is skipped when `self` holds.
    pub fn or(self, other: Predicate) -> Predicate {
        Predicate::new(move |graph| self.test(graph) || other.test(graph))
    }
}

impl Not for Predicate {
    type Output = Predicate;

    fn not(self) -> Predicate {
        Predicate::new(move |graph| !self.test(graph))
    }
}

impl fmt::Debug for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Predicate").finish_non_exhaustive()
    }
}

/// Assembles the spec of `graph` and applies `check`.
///
/// A graph whose spec cannot be assembled (mixed arities) satisfies nothing.
pub(crate) fn evaluate(
    graph: &Graph,
    policy: &ComputePolicy,
    check: impl FnOnce(&InferredSpec) -> bool,
) -> bool {
    match compute_graph_spec_with(graph, policy) {
        Ok(spec) => check(&spec),
        Err(err) => {
            debug!(code = err.code(), error = %err, "spec assembly failed; predicate is false");
            false
        }
    }
}

/// Predicate over the assembled spec.
pub fn spec_predicate(
    policy: Option<&PartialPolicy>,
    check: impl Fn(&InferredSpec) -> bool + Send + Sync + 'static,
) -> Predicate {
    let policy = ComputePolicy::merged(policy);
    Predicate::new(move |graph| evaluate(graph, &policy, &check))
}

/// One axis equals `expected`: same kind and same integer payload.
pub fn axis_equals(
    axis: Axis,
    expected: impl Into<AxisValue>,
    policy: Option<&PartialPolicy>,
) -> Predicate {
    let expected = expected.into();
    spec_predicate(policy, move |spec| compare_axis_values(&spec.get(axis), &expected))
}

/// One axis has the given kind tag, whatever its payload.
pub fn axis_kind_is(
    axis: Axis,
    kind: impl Into<String>,
    policy: Option<&PartialPolicy>,
) -> Predicate {
    let kind = kind.into();
    spec_predicate(policy, move |spec| spec.get(axis).kind() == kind)
}

/// Every axis named in `expected` matches; unnamed axes are ignored.
pub fn has_graph_spec(expected: PartialSpec, policy: Option<&PartialPolicy>) -> Predicate {
    spec_predicate(policy, move |spec| expected.matches(spec))
}
