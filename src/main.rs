//! shoebox - bundle a folder's files into monthly zip archives.
//!
//! Usage:
//!   shoebox                     Launch the interactive form
//!   shoebox <INPUT> <OUTPUT>    Archive INPUT's files into OUTPUT
//!   shoebox --help              Show help

mod logging;

use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::{Result, bail, eyre};
use tracing::info;

use shoebox_archive::archive_groups;
use shoebox_core::RunConfig;
use shoebox_scan::MonthScanner;

#[derive(Parser)]
#[command(
    name = "shoebox",
    version,
    about = "Bundle a folder's files into monthly zip archives",
    long_about = "shoebox groups the files of a directory by the month they\n\
                  were created and writes one zip archive per month into the\n\
                  output directory.\n\n\
                  Run without arguments to launch the interactive form."
)]
struct Cli {
    /// Directory whose files should be archived
    #[arg(requires = "output_dir")]
    input_dir: Option<PathBuf>,

    /// Directory that receives the monthly archives
    output_dir: Option<PathBuf>,

    /// Skip hidden files (names starting with a dot)
    #[arg(long)]
    skip_hidden: bool,
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    match (cli.input_dir, cli.output_dir) {
        (Some(input), Some(output)) => {
            let _guard = logging::init(true);
            run_archive(input, output, cli.skip_hidden)
        }
        _ => {
            // Interactive form; console logging stays off so the
            // alternate screen is not disturbed.
            let _guard = logging::init(false);
            shoebox_tui::run()
        }
    }
}

/// Run one scan-then-archive pass and print its progress.
fn run_archive(input: PathBuf, output: PathBuf, skip_hidden: bool) -> Result<()> {
    if !input.is_dir() {
        bail!("Input path is not a directory: {}", input.display());
    }
    if !output.is_dir() {
        bail!("Output path is not a directory: {}", output.display());
    }

    let config = RunConfig::builder()
        .input_dir(input)
        .output_dir(output)
        .include_hidden(!skip_hidden)
        .build()
        .map_err(|e| eyre!(e.to_string()))?;

    eprintln!("Scanning {}...", config.input_dir.display());
    let groups = MonthScanner::new().scan(&config)?;

    for warning in &groups.warnings {
        eprintln!("warning: {}: {}", warning.path.display(), warning.message);
    }

    if groups.is_empty() {
        println!("No files found to archive.");
        return Ok(());
    }

    info!(
        files = groups.grouped_count(),
        months = groups.month_count(),
        "scan complete"
    );
    eprintln!(
        "Found {} file(s) across {} month(s)",
        groups.grouped_count(),
        groups.month_count()
    );

    let complete = archive_groups(&groups, &config.output_dir, |progress| {
        let source = progress
            .current_source
            .as_deref()
            .and_then(|p| p.file_name())
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let archive = progress
            .current_archive
            .as_deref()
            .map(|p| p.display().to_string())
            .unwrap_or_default();
        println!("[{:>3.0}%] {} -> {}", progress.percentage(), source, archive);
    });

    println!();
    println!("{}", "─".repeat(60));
    println!(" {}", complete.summary());
    println!(" {} archived", format_size(complete.bytes_archived));
    for archive in &complete.archives {
        println!("   {}", archive.display());
    }
    if !complete.failures.is_empty() {
        println!();
        println!(" {} failure(s):", complete.failures.len());
        for failure in &complete.failures {
            println!("   {failure}");
        }
    }
    println!("{}", "─".repeat(60));

    // Per-file failures are not fatal; the run finished.
    Ok(())
}

/// Format size in human-readable form.
fn format_size(bytes: u64) -> String {
    humansize::format_size(bytes, humansize::BINARY)
}
