use anyhow::{Context, Result};
use clap::Parser;
use split_components::{DEFAULT_INPUT_PATH, DEFAULT_OUTPUT_DIR, SplitConfig, SplitReport, split};
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Split a combined component file into one .toml file per component
#[derive(Parser, Debug)]
#[command(name = "split-components", version, about)]
struct Cli {
    /// Combined component declarations
    #[arg(short, long, default_value = DEFAULT_INPUT_PATH)]
    input: PathBuf,

    /// Directory to write the individual component files to
    #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR)]
    output_dir: PathBuf,

    /// Print the run report as JSON
    #[arg(long)]
    json: bool,

    /// Log skipped segments and every write
    #[arg(short, long, conflicts_with = "quiet")]
    verbose: bool,

    /// Only log errors
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_level = match (cli.verbose, cli.quiet) {
        (true, _) => "debug",
        (_, true) => "error",
        _ => "warn",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let stdout = io::stdout();
    let result = run(&cli, &mut stdout.lock());
    if let Err(e) = &result {
        eprintln!("Error: {:#}", e);
    }
    ExitCode::from(exit_status(&result))
}

/// Process exit status for a run: 0 on success, 1 on any failure
fn exit_status(result: &Result<()>) -> u8 {
    match result {
        Ok(()) => 0,
        Err(_) => 1,
    }
}

fn run(cli: &Cli, out: &mut impl Write) -> Result<()> {
    let config = SplitConfig::new(&cli.input, &cli.output_dir);
    let report = split(&config)?;

    if cli.json {
        let json = serde_json::to_string_pretty(&report).context("Failed to serialize report")?;
        writeln!(out, "{}", json)?;
    } else {
        write_summary(&report, out)?;
    }

    Ok(())
}

fn write_summary(report: &SplitReport, out: &mut impl Write) -> io::Result<()> {
    for file in &report.written {
        writeln!(out, "Created {}", file.path.display())?;
    }
    writeln!(
        out,
        "Split {} component{} into {}",
        report.count(),
        if report.count() == 1 { "" } else { "s" },
        report.output_dir.display()
    )
}
