//! Главный исполняемый файл shardsql

use clap::Parser;
use shardsql::cli::{init_logging, Cli};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = cli.load_config()?;
    init_logging(&config);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    cli.execute(&config, &mut out)?;

    Ok(())
}
