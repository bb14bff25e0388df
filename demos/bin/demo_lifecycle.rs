//! Wire Lifecycle Demo
//!
//! Shows release, revival on the original row, swaps, and a
//! zero-branch conditional gate, with an optional mid-stream snapshot.

use anyhow::Result;
use clap::Parser;

use alsvid_demos::circuits::lifecycle;
use alsvid_demos::{init_tracing, print_header, print_section, OutputFormat};
use alsvid_trace::{GlyphSet, Tracer, WireId};

#[derive(Parser, Debug)]
#[command(name = "demo-lifecycle")]
#[command(about = "Render a wire release/revival circuit diagram")]
struct Args {
    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Grid)]
    format: OutputFormat,

    /// Also print a snapshot taken before the stream ends
    #[arg(long)]
    snapshot: bool,
}

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();

    print_header("Wire Lifecycle");

    if args.snapshot {
        // Snapshots are pure reads; grab one mid-stream.
        let mut tracer = Tracer::grid();
        tracer.on_allocate(&[WireId(0), WireId(1)])?;
        tracer.render_gate("H", &[WireId(0)], &[], None)?;
        print_section("Mid-stream snapshot");
        println!("{}", tracer.to_text());
    }

    print_section("Circuit");
    let text = match args.format {
        OutputFormat::Grid => {
            let mut tracer = Tracer::grid();
            lifecycle(&mut tracer)?;
            tracer.finish()?
        }
        OutputFormat::Ascii => {
            let mut tracer = Tracer::grid_with_glyphs(GlyphSet::ascii());
            lifecycle(&mut tracer)?;
            tracer.finish()?
        }
        OutputFormat::Qpic => {
            let mut tracer = Tracer::qpic();
            lifecycle(&mut tracer)?;
            tracer.finish()?
        }
    };
    println!("{text}");
    Ok(())
}
