//! Alsvid demo suite.
//!
//! Small binaries that drive the diagram tracer with hand-written
//! event streams and print the result in a chosen output format:
//!
//! - **demo-teleport**: quantum teleportation with classically
//!   controlled corrections
//! - **demo-lifecycle**: wire release, revival, and swaps

pub mod circuits;

use clap::ValueEnum;
use console::style;
use tracing_subscriber::EnvFilter;

/// Which output strategy a demo should render with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Box-drawing character grid.
    Grid,
    /// Seven-bit-safe character grid.
    Ascii,
    /// qpic-style statement stream.
    Qpic,
}

/// Install the demo logging subscriber, honoring `RUST_LOG`.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();
}

pub fn print_header(title: &str) {
    println!();
    println!("{}", style(title).bold().cyan());
    println!("{}", style("=".repeat(title.len())).cyan());
}

pub fn print_section(title: &str) {
    println!();
    println!("{}", style(title).bold());
}
