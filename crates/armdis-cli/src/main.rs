use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use std::io::Write;
use std::path::{Path, PathBuf};

use armdis::{write_listing, DisasmConfig};
use armdis_cli::{family_stats, listing, load_raw_bin, parse_u32};

#[derive(Parser, Debug)]
#[command(author, version, about = "ARM disassembler CLI", long_about=None)]
struct Cli {
    /// Load address of the first word (hex or dec)
    #[arg(long)]
    base: Option<String>,
    /// Skip N bytes at start of file before loading
    #[arg(long)]
    skip: Option<usize>,
    /// Limit bytes loaded (default: to EOF after --skip)
    #[arg(long)]
    len: Option<usize>,
    /// JSON file with base/skip/len defaults; flags override it
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
    /// Input binary path
    #[arg(value_name = "BINFILE")]
    input: PathBuf,
    /// Subcommand
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Disassemble every word, or the words in [start, end)
    List {
        /// Start address (hex or dec)
        #[arg(requires = "end")]
        start: Option<String>,
        /// End address (hex or dec, exclusive)
        end: Option<String>,
        /// Output format: text or json
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
        /// Write output to file instead of stdout
        #[arg(long, value_name = "FILE")]
        out: Option<PathBuf>,
    },
    /// Count words per instruction family
    Stats {
        /// Output format: text or json
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat { Text, Json }

fn resolve_config(cli: &Cli) -> Result<DisasmConfig> {
    let mut cfg = match &cli.config {
        Some(path) => DisasmConfig::from_json_file(path)?,
        None => DisasmConfig::default(),
    };
    if let Some(base) = &cli.base { cfg.base = parse_u32(base)?; }
    if let Some(skip) = cli.skip { cfg.skip = skip; }
    if cli.len.is_some() { cfg.len = cli.len; }
    Ok(cfg)
}

fn emit(out: Option<&Path>, text: &[u8]) -> Result<()> {
    match out {
        Some(path) => std::fs::write(path, text)?,
        None => std::io::stdout().lock().write_all(text)?,
    }
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let cfg = resolve_config(&cli)?;
    tracing::debug!(?cfg, input = %cli.input.display(), "loading");
    let img = load_raw_bin(&cli.input, &cfg)?;

    match cli.cmd {
        Command::List { start, end, format, out } => {
            let range = match (start, end) {
                (Some(start), Some(end)) => {
                    let start = parse_u32(&start)?;
                    let end = parse_u32(&end)?;
                    anyhow::ensure!(end >= start, "end must be >= start");
                    Some(start..end)
                }
                _ => None,
            };
            let mut buf = Vec::new();
            match format {
                OutputFormat::Text => {
                    if let Some(range) = range {
                        for insn in listing(&img, Some(range)) {
                            writeln!(buf, "{}", insn.line())?;
                        }
                    } else {
                        let lines = write_listing(&mut buf, &img)?;
                        tracing::debug!(lines, "listing done");
                    }
                }
                OutputFormat::Json => {
                    serde_json::to_writer_pretty(&mut buf, &listing(&img, range))?;
                    buf.push(b'\n');
                }
            }
            emit(out.as_deref(), &buf)?;
        }
        Command::Stats { format } => {
            let stats = family_stats(&img);
            match format {
                OutputFormat::Text => {
                    println!("{:<20} {:>8}", "family", "words");
                    for c in &stats {
                        println!("{:<20} {:>8}", c.family.name(), c.count);
                    }
                    println!("{:<20} {:>8}", "total", stats.iter().map(|c| c.count).sum::<usize>());
                }
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&stats)?),
            }
        }
    }

    Ok(())
}
