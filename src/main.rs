use anyhow::Result;
use clap::Parser;

use dataset_checksums::cli::Cli;
use dataset_checksums::logging::init_logging;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let summary = cli.run()?;
    println!("{}", summary.summary());
    Ok(())
}
