use serde::Serialize;

/// Where a single filing attempt has got to. Every step moves forward by one;
/// any failure ends the attempt with the server left wherever the last
/// successful step put it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FilingStage {
    Start,
    Created,
    Submitted,
    Validated,
    Closed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub(crate) struct FilingOutcome {
    pub transaction_id: String,
    pub status: String,
}

#[derive(Debug, thiserror::Error)]
#[error("address validation failed: {}", .errors.join("; "))]
pub(crate) struct ValidationFailed {
    pub errors: Vec<String>,
}
