use gspec_core::{is_truthy, Attributes, Graph};

use crate::values::{MeasureSemantics, Observability, OperationalSemantics};

const LATENT_KEY: &str = "latent";
const OBSERVED_KEY: &str = "observed";
const FUNCTION_KEY: &str = "function";
const EXECUTABLE_KEY: &str = "executable";
const CODE_KEY: &str = "code";
const COST_KEY: &str = "cost";
const UTILITY_KEY: &str = "utility";
const WEIGHT_KEY: &str = "weight";

fn all_attributes(graph: &Graph) -> impl Iterator<Item = &Attributes> + '_ {
    graph
        .vertices
        .iter()
        .map(|v| &v.attributes)
        .chain(graph.edges.iter().map(|e| &e.attributes))
}

/// Latent when some element has a truthy `latent` attribute, partially
/// observed when some element has a falsy `observed` attribute.
pub fn compute_observability(graph: &Graph) -> Observability {
    let flagged = |key: &str, expected: bool| {
        all_attributes(graph).any(|attrs| attrs.get(key).is_some_and(|v| is_truthy(v) == expected))
    };
    if flagged(LATENT_KEY, true) {
        Observability::Latent
    } else if flagged(OBSERVED_KEY, false) {
        Observability::PartiallyObserved
    } else {
        Observability::FullySpecified
    }
}

/// Executable when some element carries code or a truthy `executable`
/// attribute; annotated when some element names a function.
pub fn compute_operational_semantics(graph: &Graph) -> OperationalSemantics {
    let executable = all_attributes(graph).any(|attrs| {
        attrs.contains_key(CODE_KEY) || attrs.get(EXECUTABLE_KEY).is_some_and(is_truthy)
    });
    if executable {
        OperationalSemantics::Executable
    } else if all_attributes(graph).any(|attrs| attrs.contains_key(FUNCTION_KEY)) {
        OperationalSemantics::Annotated
    } else {
        OperationalSemantics::StructuralOnly
    }
}

/// Edge measure by precedence: cost, then utility, then any weight.
pub fn compute_measure_semantics(graph: &Graph) -> MeasureSemantics {
    let any_edge = |key: &str| graph.edges.iter().any(|e| e.attributes.contains_key(key));
    if any_edge(COST_KEY) {
        MeasureSemantics::Cost
    } else if any_edge(UTILITY_KEY) {
        MeasureSemantics::Utility
    } else if any_edge(WEIGHT_KEY) || graph.edges.iter().any(|e| e.weight.is_some()) {
        MeasureSemantics::Metric
    } else {
        MeasureSemantics::None
    }
}
