//! Versioned solve request and algorithm-name decoding.

use serde::Deserialize;

use npuzzle_search::{HeuristicKind, Strategy};

use crate::error::ServiceError;

/// The request body the web client posts.
///
/// Field names are the client's camelCase. The heuristic choice rides
/// inside the algorithm name: `"a-starm"` is A* with Manhattan,
/// `"a-stare"` with Euclidean.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SolveRequestV1 {
    /// Start configuration, compact digit form.
    pub input_string: String,
    /// Goal configuration, compact digit form.
    pub goal_string: String,
    /// Strategy selector; see [`SolveRequestV1::strategy`].
    pub algorithm_name: String,
}

impl SolveRequestV1 {
    /// Decode the wire algorithm name.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::UnknownAlgorithm`] for names outside the
    /// supported set.
    pub fn strategy(&self) -> Result<Strategy, ServiceError> {
        match self.algorithm_name.as_str() {
            "bfs" => Ok(Strategy::Bfs),
            "dfs" => Ok(Strategy::Dfs),
            "it-dfs" => Ok(Strategy::IterativeDeepening),
            "a-starm" => Ok(Strategy::AStar(HeuristicKind::Manhattan)),
            "a-stare" => Ok(Strategy::AStar(HeuristicKind::Euclidean)),
            other => Err(ServiceError::UnknownAlgorithm {
                name: other.to_owned(),
            }),
        }
    }
}
