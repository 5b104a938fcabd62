use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use std::path::PathBuf;

use i8052_rom::isa::mcs51::MCS51_TABLE;
use i8052_rom::{load_file, RomConfig, TableMatcher};

use i8052_romtool::{build_listing, render_listing, table_report};

#[derive(Parser, Debug)]
#[command(author, version, about = "i8052 ROM inspection CLI", long_about=None)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Annotated byte listing of a HEX file, as the VHDL emitter sees it
    Listing {
        /// Input Intel HEX file
        #[arg(value_name = "HEXFILE")]
        input: PathBuf,
        /// Output format: text or json
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
        /// Write output to file instead of stdout
        #[arg(long, value_name = "FILE")]
        out: Option<PathBuf>,
    },
    /// Dump the instruction table, validate it and report overlapping formats
    Table {
        /// Output format: text or json
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat { Text, Json }

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Listing { input, format, out } => {
            let cfg = RomConfig::default();
            let img = load_file(&input, cfg.capacity)
                .with_context(|| format!("loading {}", input.display()))?;
            let listing = build_listing(&img, &TableMatcher::mcs51());
            let text = match format {
                OutputFormat::Text => render_listing(&listing),
                OutputFormat::Json => serde_json::to_string_pretty(&listing)?,
            };
            if let Some(path) = out {
                std::fs::write(&path, text).with_context(|| format!("writing {}", path.display()))?;
            } else {
                print!("{}", text);
            }
        }
        Command::Table { format } => {
            let report = table_report(MCS51_TABLE);
            match format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
                OutputFormat::Text => {
                    println!("{:<5} {:<8} {:<10} {:<6} {:<4}", "idx", "name", "pattern", "window", "skip");
                    for row in &report.entries {
                        let f = &row.format;
                        println!("{:<5} {:<8} {:<10} {:<6} {:<4}", row.index, f.mnemonic, f.pattern, format!("{}..{}", f.msb, f.lsb), f.operand_skip);
                    }
                    println!("Overlaps: {}", report.overlaps.len());
                    for o in &report.overlaps {
                        let shadowed: Vec<&str> = o.shadowed.iter().map(|&i| MCS51_TABLE[i].mnemonic).collect();
                        println!("  {:#04x}: {} shadows {:?}", o.byte, MCS51_TABLE[o.winner].mnemonic, shadowed);
                    }
                    let unmatched: Vec<String> = report.unmatched.iter().map(|b| format!("{b:#04x}")).collect();
                    println!("Unmatched: {}", unmatched.join(" "));
                }
            }
            if let Some(err) = &report.error {
                anyhow::bail!("instruction table is invalid: {err}");
            }
        }
    }

    Ok(())
}
