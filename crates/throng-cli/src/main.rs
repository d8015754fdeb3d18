mod summary;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use throng_core::consts::DEFAULT_RUN_DIR;
use throng_core::pipeline::{run, RunContext};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "throng", about = "Crowd movement energy anomaly analysis")]
#[command(version)]
struct Cli {
    /// Run directory holding capture outputs; artifacts are written here too
    #[arg(default_value = DEFAULT_RUN_DIR)]
    dir: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let ctx = RunContext::new(cli.dir);
    let summary = run(&ctx)?;
    summary::print_run_summary(&summary);

    Ok(())
}
