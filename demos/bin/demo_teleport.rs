//! Quantum Teleportation Demo
//!
//! Renders the teleportation circuit, including the classically
//! controlled Pauli corrections, in any of the output formats.

use anyhow::Result;
use clap::Parser;

use alsvid_demos::circuits::teleport;
use alsvid_demos::{init_tracing, print_header, print_section, OutputFormat};
use alsvid_trace::{GlyphSet, Tracer};

#[derive(Parser, Debug)]
#[command(name = "demo-teleport")]
#[command(about = "Render a quantum teleportation circuit diagram")]
struct Args {
    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Grid)]
    format: OutputFormat,
}

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();

    print_header("Quantum Teleportation");
    print_section("Circuit");

    let text = match args.format {
        OutputFormat::Grid => {
            let mut tracer = Tracer::grid();
            teleport(&mut tracer)?;
            tracer.finish()?
        }
        OutputFormat::Ascii => {
            let mut tracer = Tracer::grid_with_glyphs(GlyphSet::ascii());
            teleport(&mut tracer)?;
            tracer.finish()?
        }
        OutputFormat::Qpic => {
            let mut tracer = Tracer::qpic();
            teleport(&mut tracer)?;
            tracer.finish()?
        }
    };
    println!("{text}");
    Ok(())
}
