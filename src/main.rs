//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `node_ipinfo` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - Transport setup for the selected node
//! - Printing the rendered report
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;

use node_ipinfo::config::Opt;
use node_ipinfo::initialization::init_logger_with;
use node_ipinfo::{run_query, Config, NodeSelection, OutputFormat, ReqwestTransport};

#[tokio::main]
async fn main() -> Result<()> {
    let opt = Opt::parse();

    init_logger_with(opt.log_level.clone().into(), opt.log_format.clone())
        .context("Failed to initialize logger")?;

    let config = Config::from(&opt);
    let node = NodeSelection::new(opt.node_name.clone(), opt.node_address.clone());

    let transport = ReqwestTransport::new()
        .and_then(|t| t.with_node(&node.name, &opt.proxy))
        .context("Failed to initialize HTTP transport")?;

    let rendered = run_query(&transport, &node, &config).await;

    match config.output_format {
        // JSON output stays a single parseable document
        OutputFormat::Json => println!("{}", rendered.body),
        OutputFormat::Html | OutputFormat::Text => {
            println!("{}", rendered.title);
            println!("{}", rendered.body);
        }
    }

    Ok(())
}
