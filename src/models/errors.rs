use thiserror::Error;

/// Rejection signal produced when a raw JSON document fails validation.
///
/// Every cause collapses into this one value: a missing required key, a
/// wrong value type, empty required text, unparseable decimal or timestamp
/// text, or a rejected nested category. Callers that need to know which
/// field failed must re-inspect the document themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("transaction document failed validation")]
pub struct ValidationFailure;
