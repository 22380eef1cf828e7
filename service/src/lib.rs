//! N-Puzzle Service: the wire boundary around the search engine.
//!
//! Decodes a solve request (the shape the web client posts), validates the
//! boards, runs the selected strategy, and shapes the outcome into the
//! versioned response the client renders. The HTTP transport, the static
//! asset server, and the process launcher are external collaborators —
//! this crate never touches a socket.
//!
//! # Crate dependency graph
//!
//! ```text
//! npuzzle-board  ←  npuzzle-search  ←  npuzzle-service
//! (pure values)     (frontiers, loops)  (wire shapes, CLI host)
//! ```

#![forbid(unsafe_code)]

pub mod error;
pub mod request;
pub mod response;
pub mod runner;

pub use error::ServiceError;
pub use request::SolveRequestV1;
pub use response::{InfoEntryV1, SolveResponseV1, SolveStatusV1};
pub use runner::solve;
