use clap::Parser;
use log::LevelFilter;
use packaging_workshop::{greet, init_logging};

/// Prints a greeting in the language named by LOCAL_LANGUAGE (SPANISH, ENGLISH, ROMANSH or
/// KLINGON, any case). Anything else greets in Romansh.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Log to stderr at this level (off, error, warn, info, debug, trace)
    #[arg(short, long)]
    log_level: Option<LevelFilter>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    if let Some(level) = cli.log_level {
        init_logging(level)?;
    }
    greet();
    Ok(())
}
