use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use i8052_rom::{emit, load_file, EmitOptions, RomConfig, TableMatcher};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Convert an i8052 Intel HEX file into an annotated VHDL ROM"
)]
struct Opts {
    /// Output VHDL file
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,
    #[arg(value_name = "HEXFILE")]
    input: PathBuf,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let opts = Opts::parse();
    let mut cfg = RomConfig::default();
    if let Some(output) = opts.output {
        cfg.output = output;
    }

    // Load completely before touching the output so a bad input leaves no file behind.
    let image = load_file(&opts.input, cfg.capacity)
        .with_context(|| format!("loading {}", opts.input.display()))?;

    let file = File::create(&cfg.output)
        .with_context(|| format!("creating {}", cfg.output.display()))?;
    let emit_opts = EmitOptions::new(opts.input.display().to_string());
    emit(&image, &TableMatcher::mcs51(), &emit_opts, BufWriter::new(file))
        .with_context(|| format!("writing {}", cfg.output.display()))?;

    Ok(())
}
