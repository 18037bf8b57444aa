use clap::{Parser, Subcommand};
use cryo_core::{CryoError, CryoResult};
use cryo_nvf::NoVentFill;
use cryo_props::write_microfilm_tables;
use std::path::Path;
use thiserror::Error;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser)]
#[command(name = "cryo-cli")]
#[command(about = "Cryogenic property tables and no-vent fill trigger points", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write microfilm specific heat and thermal conductivity tables (4-300 K, 50 points)
    Tables,
    /// Solve the maximum initial tank temperature for a no-vent fill (LOX, LHe4)
    Threshold,
}

#[derive(Error, Debug)]
enum CliError {
    #[error(transparent)]
    Cryo(#[from] CryoError),
}

type CliResult<T> = Result<T, CliError>;

fn main() -> CliResult<()> {
    init_tracing();

    let cli = Cli::parse();

    match cli.command {
        Commands::Tables => cmd_tables(Path::new("."))?,
        Commands::Threshold => cmd_threshold()?,
    }
    Ok(())
}

fn cmd_tables(root: &Path) -> CryoResult<()> {
    let outputs = write_microfilm_tables(root)?;
    println!("✓ Wrote {}", outputs.specific_heat.display());
    println!("✓ Wrote {}", outputs.thermal_conductivity.display());
    Ok(())
}

fn cmd_threshold() -> CryoResult<()> {
    for report in NoVentFill::default().solve_all()? {
        println!("{report}");
    }
    Ok(())
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
