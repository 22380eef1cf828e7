//! Orchestration: request → run → response.

use log::{info, warn};

use npuzzle_board::Board;
use npuzzle_search::{run, CancelToken, SearchOutcome, SearchPolicy, SearchReport, Strategy};

use crate::error::ServiceError;
use crate::request::SolveRequestV1;
use crate::response::{InfoEntryV1, SolveResponseV1, SolveStatusV1};

/// Decode, validate, and run a solve request.
///
/// Validation failures surface as an `"invalid"` response and never reach
/// a strategy loop. Everything after validation is a normal outcome — the
/// response status distinguishes solved, exhausted, and aborted runs.
#[must_use]
pub fn solve(
    request: &SolveRequestV1,
    policy: &SearchPolicy,
    cancel: &CancelToken,
) -> SolveResponseV1 {
    match prepare(request) {
        Ok((start, goal, strategy)) => {
            info!(
                "solving {start} -> {goal} with {}",
                request.algorithm_name
            );
            let outcome = run(start, goal, strategy, policy, cancel);
            info!(
                "{} finished: {} nodes in {:?}",
                request.algorithm_name,
                outcome.report().explored_nodes,
                outcome.report().elapsed
            );
            respond(request, &outcome)
        }
        Err(error) => {
            warn!("rejected solve request: {error}");
            SolveResponseV1 {
                message: error.to_string(),
                status: SolveStatusV1::Invalid,
                path: None,
                info: Vec::new(),
            }
        }
    }
}

fn prepare(request: &SolveRequestV1) -> Result<(Board, Board, Strategy), ServiceError> {
    let start: Board = request
        .input_string
        .parse()
        .map_err(ServiceError::InvalidStart)?;
    let goal: Board = request
        .goal_string
        .parse()
        .map_err(ServiceError::InvalidGoal)?;
    let strategy = request.strategy()?;
    Ok((start, goal, strategy))
}

fn respond(request: &SolveRequestV1, outcome: &SearchOutcome) -> SolveResponseV1 {
    match outcome {
        SearchOutcome::Solved { path, report } => SolveResponseV1 {
            message: format!(
                "solved {} using {}",
                request.input_string, request.algorithm_name
            ),
            status: SolveStatusV1::Success,
            path: Some(path.iter().map(ToString::to_string).collect()),
            info: info_entries(report),
        },
        SearchOutcome::NotFound { report } => SolveResponseV1 {
            message: format!(
                "no solution for {} using {}",
                request.input_string, request.algorithm_name
            ),
            status: SolveStatusV1::Failed,
            path: None,
            info: info_entries(report),
        },
        SearchOutcome::Aborted { reason, report } => SolveResponseV1 {
            message: format!("search aborted ({reason})"),
            status: SolveStatusV1::Aborted,
            path: None,
            info: info_entries(report),
        },
    }
}

/// Shape report fields into the client's `{title, value}` rows.
///
/// Titles and the 3-decimal time rounding are what the client already
/// renders; `cost` appears only when the strategy accounts one.
fn info_entries(report: &SearchReport) -> Vec<InfoEntryV1> {
    let seconds = (report.elapsed.as_secs_f64() * 1000.0).round() / 1000.0;
    let mut info = vec![
        InfoEntryV1 {
            title: "explored nodes".into(),
            value: report.explored_nodes.into(),
        },
        InfoEntryV1 {
            title: "total time".into(),
            value: seconds.into(),
        },
        InfoEntryV1 {
            title: "max search depth".into(),
            value: report.max_depth.into(),
        },
        InfoEntryV1 {
            title: "frontier high water".into(),
            value: report.frontier_high_water.into(),
        },
    ];
    if let Some(cost) = report.solution_cost {
        info.push(InfoEntryV1 {
            title: "cost".into(),
            value: cost.into(),
        });
    }
    info
}
