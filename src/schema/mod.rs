//! Schema module - Problem, configuration and result types for GASI-VRP runs.

mod config;
mod evolution;
mod problem;

pub use config::*;
pub use evolution::*;
pub use problem::*;
