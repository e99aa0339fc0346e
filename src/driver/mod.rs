//! # Driver layer
//!
//! CLI surface and end-to-end orchestration.
//!
//! - **cli**: clap argument parsing
//! - **workflow**: the conversion workflow itself

pub mod cli;
pub mod workflow;

pub use cli::Args;
pub use workflow::ConvertWorkflow;
