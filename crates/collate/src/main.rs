mod html;
mod load;

use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use char_diff::{CharDiff, NewlineAuthority, RenderOptions};
use clap::{Parser, ValueEnum};

use crate::html::{HtmlSink, HTML_HEADER, HTML_TAIL};

/// Collate the contents by comparing two versions of the texts
#[derive(Debug, Parser)]
#[command(name = "collate", version)]
struct Cli {
    /// Merge the same changes into one <del>/<ins> pair
    #[arg(short = 'm', long = "merge-changes")]
    merge: bool,

    /// Which side's line breaks produce <br /> markers
    #[arg(short = 'r', long = "out-return", value_enum, default_value = "new")]
    out_return: OutReturn,

    /// Show the HTML content only (no HTML header and tail)
    #[arg(short = 'C', long = "html-content")]
    content_only: bool,

    /// Show the HTML header and exit
    #[arg(short = 'H', long = "html-header")]
    header_only: bool,

    /// Show the HTML tail and exit
    #[arg(short = 'T', long = "html-tail")]
    tail_only: bool,

    /// Set the sequence number of the comparison title
    #[arg(short = 'x', long = "index-num")]
    index: Option<usize>,

    /// Verbose information
    #[arg(short, long)]
    verbose: bool,

    /// The old version of the file
    old_file: Option<PathBuf>,

    /// The new version of the file
    new_file: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutReturn {
    /// Line breaks from either version
    All,
    /// Line breaks from the old version only
    Old,
    /// Line breaks from the new version only
    New,
}

impl From<OutReturn> for NewlineAuthority {
    fn from(value: OutReturn) -> Self {
        match value {
            OutReturn::All => NewlineAuthority::Both,
            OutReturn::Old => NewlineAuthority::Old,
            OutReturn::New => NewlineAuthority::New,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::from_default_env()
        .filter_level(if cli.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Warn
        })
        .init();

    let stdout = io::stdout().lock();
    let mut out = BufWriter::new(stdout);
    run(cli, &mut out, &mut io::stderr())?;
    out.flush()?;
    Ok(())
}

fn run(cli: Cli, mut out: &mut dyn Write, err: &mut dyn Write) -> Result<()> {
    // Header/tail-only modes exist so a batch driver can wrap several
    // content-only comparisons into one page
    if cli.header_only {
        writeln!(out, "{HTML_HEADER}")?;
        return Ok(());
    }
    if cli.tail_only {
        writeln!(out, "\n{HTML_TAIL}")?;
        return Ok(());
    }

    let old_file = cli.old_file.context("missing <old file> argument")?;
    let new_file = cli.new_file.context("missing <new file> argument")?;
    let old_text = load::load_text(&old_file)?;
    let new_text = load::load_text(&new_file)?;

    if !cli.content_only {
        writeln!(out, "{HTML_HEADER}")?;
    }
    match cli.index {
        Some(index) => writeln!(out, "<h3>[{index}] Compared files:</h3>")?,
        None => writeln!(out, "<h3>Compared files:</h3>")?,
    }
    writeln!(out, "<table>")?;
    writeln!(
        out,
        "<tr><td>original file:</td><td><b>{}</b></td></tr>",
        html::escape(&old_file.display().to_string())
    )?;
    writeln!(
        out,
        "<tr><td>new file:</td><td><b>{}</b></td></tr>",
        html::escape(&new_file.display().to_string())
    )?;
    writeln!(out, "</table>")?;

    let options = RenderOptions {
        merge_runs: cli.merge,
        newline_authority: cli.out_return.into(),
    };
    let mut sink = HtmlSink::new(&mut out);
    let alignment = CharDiff::render(&old_text, &new_text, options, &mut sink)?;
    writeln!(err, "different sites = {}", alignment.distance())?;

    if !cli.content_only {
        writeln!(out, "\n{HTML_TAIL}")?;
    }
    Ok(())
}
