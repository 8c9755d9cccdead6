use std::io::Write;

use clap::Parser;

use fact_cli::{init_logger, run, Cli};

fn main() -> anyhow::Result<()> {
    let Cli {} = Cli::parse();

    let _guard = init_logger();

    let mut stdout = std::io::stdout().lock();
    run(&mut stdout)?;
    stdout.flush()?;

    Ok(())
}
