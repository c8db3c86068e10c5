use error::Result;

mod cli;
mod commands;
mod error;

fn main() -> Result<()> {
    let cli = cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(cli.log_level)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(command = ?cli.command, "running command");

    let output = commands::run(&cli.command).inspect_err(|err| tracing::error!("{}", err))?;
    println!("{output}");

    Ok(())
}
