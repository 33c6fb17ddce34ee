//! Errors raised while reading graphs, policies and specs.
//!
//! An axis that cannot be decided is reported as `unconstrained`, never as
//! an error. Errors cover input the engine refuses to classify and JSON that
//! does not decode.

use std::collections::BTreeMap;
use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Diagnostic carried by every [`SpecError`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorInfo {
    /// Kebab-case code, e.g. `mixed-arity` or `spec-deserialize`.
    pub code: String,
    /// What went wrong, usually the underlying parser message.
    pub message: String,
    /// Offending input, keyed by what it is: `arities`, `axis`.
    #[serde(default)]
    pub context: BTreeMap<String, String>,
    /// How to reshape the input so it is accepted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl ErrorInfo {
    /// Diagnostic with no context and no hint.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            context: BTreeMap::new(),
            hint: None,
        }
    }

    /// Records one piece of offending input.
    pub fn with_context(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.context.insert(key.into(), value.to_string());
        self
    }

    /// Attaches a remediation hint.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

impl Display for ErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)?;
        let context = self
            .context
            .iter()
            .map(|(key, value)| format!("{key}={value}"))
            .collect::<Vec<_>>();
        if !context.is_empty() {
            write!(f, " ({})", context.join(", "))?;
        }
        if let Some(hint) = &self.hint {
            write!(f, "; {hint}")?;
        }
        Ok(())
    }
}

/// Failure of a spec computation or of a JSON boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[serde(tag = "family", content = "detail")]
pub enum SpecError {
    /// The edge set has no single arity (`mixed-arity`), so no spec is
    /// assembled and every predicate evaluates to false.
    #[error("graph error: {0}")]
    Graph(ErrorInfo),
    /// A compute-policy document failed to parse (`policy-parse`).
    #[error("policy error: {0}")]
    Policy(ErrorInfo),
    /// Graph, spec, partial-spec or axis-value JSON failed to encode or
    /// decode, or a spec could not be serialised for hashing.
    #[error("serde error: {0}")]
    Serde(ErrorInfo),
}

impl SpecError {
    /// Diagnostic of any family.
    pub fn info(&self) -> &ErrorInfo {
        match self {
            SpecError::Graph(info) | SpecError::Policy(info) | SpecError::Serde(info) => info,
        }
    }

    /// Kebab-case code of the diagnostic.
    pub fn code(&self) -> &str {
        &self.info().code
    }

    /// Edges disagree on their arity; `arities` lists the distinct ones seen.
    pub fn mixed_arity(arities: &[usize]) -> Self {
        let listed = arities
            .iter()
            .map(|arity| arity.to_string())
            .collect::<Vec<_>>()
            .join(",");
        SpecError::Graph(
            ErrorInfo::new("mixed-arity", "edge arity is not uniform")
                .with_context("arities", listed)
                .with_hint("split hyperedges from binary edges before inferring the spec"),
        )
    }

    /// Policy document that does not decode.
    pub fn policy_parse(err: impl ToString) -> Self {
        SpecError::Policy(
            ErrorInfo::new("policy-parse", err.to_string())
                .with_hint("policy keys name attributes and must be strings"),
        )
    }

    /// JSON failure at a graph or spec boundary, tagged with `code`.
    pub fn serde(code: &str, err: impl ToString) -> Self {
        SpecError::Serde(ErrorInfo::new(code, err.to_string()))
    }
}
