//! qsel - Entry Point
//!
//! Lives in the `qsel` facade crate so that the demo components registered
//! by the library are linked into the binary.

use clap::Parser;
use qsel::cli::{Cli, load_config, run};
use qsel::infrastructure::logging::init_logging;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;
    init_logging(&config.logging)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run(&cli.command, config, &mut out)
}
