use clap::Parser;
use color_eyre::Result;
use tracing_subscriber::EnvFilter;

use idprobe::report;
use idprobe::runner::{self, RunConfig};

#[derive(Parser, Debug)]
#[command(
    name = "idprobe",
    version,
    about = "Time linear-scan vs hash-set membership checks over random identifiers"
)]
struct Cli {
    /// Number of identifiers to generate
    #[arg(short = 'n', long = "count", default_value_t = runner::DEFAULT_COUNT)]
    count: usize,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    // Progress goes to stderr via tracing; stdout carries only the report.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let report = runner::run(&RunConfig { count: cli.count })?;
    report::render(&report, &mut std::io::stdout().lock())?;

    Ok(())
}
