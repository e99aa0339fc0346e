//! # mclogconv
//!
//! Converts timestamped Minecraft-server log files into a styled HTML
//! chat transcript, optionally rendered to PDF.
//!
//! The core is the parsing pipeline: dated-filename recognition, line
//! extraction, chat filtering, speaker splitting and the date-keyed log
//! store. The driver layer wires it to a CLI and the render layer turns
//! the parsed messages into output artifacts.

pub mod config;
pub mod driver;
pub mod models;
pub mod parser;
pub mod render;
pub mod session;
pub mod splitter;
pub mod store;
