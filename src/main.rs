use std::fs;
use std::io::{self, Write};
use std::path::Path;

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use log::{debug, info};

use ukkonen_rs::{render, text, SuffixTree, TextConfig};

/// Build a suffix tree and print it.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Text to index; must end with the sentinel unless --append-sentinel is set
    #[arg(default_value = "ATAAATG$")]
    text: String,

    /// Read the text from this file instead (trailing newline is dropped)
    #[arg(long, short)]
    input: Option<String>,

    /// Terminal sentinel character (single ASCII character)
    #[arg(long, default_value_t = '$')]
    sentinel: char,

    /// Append the sentinel when the text does not already end with it
    #[arg(long)]
    append_sentinel: bool,

    /// Which dump(s) to print
    #[arg(long, value_enum, default_value_t = Format::Both)]
    format: Format,

    /// Log construction statistics at info level
    #[arg(long)]
    stats: bool,

    /// Verbose/info output (default: quiet)
    #[arg(long, short = 'v', alias = "info")]
    verbose: bool,

    /// Debug output
    #[arg(long)]
    debug: bool,

    /// Trace output
    #[arg(long)]
    trace: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    /// Indented nested form, one suffix per line
    Nested,
    /// Flat pre-order list of edge labels
    Edges,
    /// Nested form, a blank line, then the edge list
    Both,
}

fn main() {
    let args = Args::parse();
    let log_level = if args.trace {
        "trace"
    } else if args.debug {
        "debug"
    } else if args.verbose || args.stats {
        "info"
    } else {
        "error"
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if let Err(error) = run(&args, &mut out) {
        eprintln!("suffix-tree failed: {error:?}");
        std::process::exit(1);
    }
}

fn sentinel_byte(sentinel: char) -> Result<u8> {
    if !sentinel.is_ascii() {
        bail!("Sentinel {sentinel:?} is not a single ASCII character");
    }
    Ok(sentinel as u8)
}

fn read_text(path: &Path) -> Result<Vec<u8>> {
    let mut bytes =
        fs::read(path).with_context(|| format!("Failed to read text from {}", path.display()))?;
    while matches!(bytes.last(), Some(b'\n' | b'\r')) {
        bytes.pop();
    }
    Ok(bytes)
}

fn run<W: Write>(args: &Args, out: &mut W) -> Result<()> {
    let config = TextConfig {
        sentinel: sentinel_byte(args.sentinel)?,
        append_sentinel: args.append_sentinel,
    };

    let raw = match &args.input {
        Some(path) => read_text(Path::new(path))?,
        None => args.text.clone().into_bytes(),
    };
    let text = text::prepare(&raw, &config).context("Input text rejected")?;
    info!("Building suffix tree over {} bytes", text.len());

    let (tree, stats) = SuffixTree::make_with_stats(&text);
    if args.stats {
        info!("{} nodes, {} leaves", tree.len(), tree.leaf_count());
        info!(
            "{} phases, {} extensions, {} splits, {} suffix links",
            stats.phases, stats.extensions, stats.splits, stats.suffix_links
        );
        info!(
            "{} link jumps, {} root restarts, {} unlinked ascents (max {} per walk)",
            stats.link_jumps, stats.root_restarts, stats.unlinked_ascents, stats.max_unlinked_ascents
        );
    }
    debug!("{stats:?}");

    match args.format {
        Format::Nested => render::write_nested(&tree, out)?,
        Format::Edges => render::write_edges(&tree, out)?,
        Format::Both => {
            render::write_nested(&tree, out)?;
            writeln!(out)?;
            render::write_edges(&tree, out)?;
        }
    }
    out.flush()?;
    Ok(())
}
