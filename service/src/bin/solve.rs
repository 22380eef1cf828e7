//! CLI host for the solve service.
//!
//! Stands in for the external request handler during development: decodes
//! flags into a request, runs it, prints the response JSON on stdout.

use std::time::Duration;

use clap::Parser;

use npuzzle_search::{CancelToken, SearchPolicy};
use npuzzle_service::{solve, SolveRequestV1};

/// Solve an 8-puzzle instance and print the wire response.
#[derive(Debug, Parser)]
#[command(name = "solve", version, about)]
struct Args {
    /// Start configuration (nine digits, 0 is the blank).
    #[arg(long)]
    input: String,

    /// Goal configuration.
    #[arg(long, default_value = "012345678")]
    goal: String,

    /// Algorithm name: bfs, dfs, it-dfs, a-starm, a-stare.
    #[arg(long, default_value = "bfs")]
    algorithm: String,

    /// Depth ceiling for it-dfs.
    #[arg(long)]
    max_depth: Option<u32>,

    /// Wall-clock budget in milliseconds.
    #[arg(long)]
    time_budget_ms: Option<u64>,

    /// Hard cap on node expansions.
    #[arg(long)]
    max_expansions: Option<u64>,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let mut policy = SearchPolicy::default();
    if let Some(max_depth) = args.max_depth {
        policy.max_depth = max_depth;
    }
    policy.time_budget = args.time_budget_ms.map(Duration::from_millis);
    policy.max_expansions = args.max_expansions;

    let request = SolveRequestV1 {
        input_string: args.input,
        goal_string: args.goal,
        algorithm_name: args.algorithm,
    };

    let response = solve(&request, &policy, &CancelToken::new());
    match serde_json::to_string_pretty(&response) {
        Ok(body) => println!("{body}"),
        Err(error) => {
            eprintln!("failed to serialize response: {error}");
            std::process::exit(1);
        }
    }
}
