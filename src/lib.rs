//! Terminal side-scrolling runner (workspace facade crate).
//!
//! This package keeps the `term_runner::{core,engine,input,term,types}` public
//! API stable while the implementation lives in dedicated crates under `crates/`.

pub mod cli;
pub mod logging;

pub use term_runner_core as core;
pub use term_runner_engine as engine;
pub use term_runner_input as input;
pub use term_runner_term as term;
pub use term_runner_types as types;
