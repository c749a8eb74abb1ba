use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use affect_grid::app::{self, RunConfig};

/// Plot every *.tsv trial log under a directory as per-emotion scatter grids.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Directory containing the *.tsv trial logs.
    #[arg(default_value = "./dat")]
    dir: PathBuf,

    /// Render one unfaceted grid instead of the SELF/OTHER/ALL sequence.
    #[arg(long)]
    no_facet: bool,

    /// Directory the PNG files are written to.
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    app::run(&RunConfig {
        data_dir: cli.dir,
        out_dir: cli.out_dir,
        facet: !cli.no_facet,
    })
}
