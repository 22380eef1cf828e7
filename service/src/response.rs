//! Versioned solve response: the shape the web client renders.

use serde::Serialize;

/// One row of the analysis table shown next to the solution.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InfoEntryV1 {
    pub title: String,
    pub value: serde_json::Value,
}

/// Wire status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SolveStatusV1 {
    /// Goal reached; `path` is populated.
    Success,
    /// The search space (or depth range) was exhausted with no solution.
    /// Deliberately distinct from an empty success.
    Failed,
    /// A budget or cancellation stopped the run early.
    Aborted,
    /// The request was rejected before any search began.
    Invalid,
}

/// The response body.
///
/// `path` is present only on success; a failed or aborted run omits it
/// rather than sending an empty list that reads as a zero-move solution.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SolveResponseV1 {
    pub message: String,
    pub status: SolveStatusV1,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<Vec<String>>,
    pub info: Vec<InfoEntryV1>,
}
