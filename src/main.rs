//! mclogconv - Minecraft chat log converter
//!
//! Parses server log files and renders the chat as styled HTML/PDF.

use anyhow::Result;
use clap::Parser;

use mclogconv::config::Config;
use mclogconv::driver::{Args, ConvertWorkflow};

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();

    // Load configuration (defaults when the file is absent)
    let config = Config::load(&args.config)?;

    let workflow = ConvertWorkflow::new(config);

    workflow.run(args)
}
