use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use ar_catalog::{Catalog, CatalogError, assemble, builtin_catalog, load_json, load_yaml};
use ar_core::units::{to_bar, to_lpm};
use ar_equipment::Equipment;
use ar_network::{LineBuilder, NetworkError};

#[derive(Parser)]
#[command(name = "ar-cli")]
#[command(about = "Armada CLI - fire-service water-supply planning tool", long_about = None)]
struct Cli {
    /// Catalog file (.yaml or .json); uses the built-in catalog when omitted
    #[arg(short, long, global = true)]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate catalog file syntax and structure
    Validate,
    /// List catalog equipment with one-line summaries
    List,
    /// Check whether two pieces of equipment can be joined
    Pair {
        /// Equipment uid on the discharging side
        from_uid: String,
        /// Equipment uid on the receiving side
        to_uid: String,
    },
    /// Build and evaluate a supply line, source first
    Line {
        /// Equipment uids in flow order
        uids: Vec<String>,
    },
}

#[derive(thiserror::Error, Debug)]
enum CliError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Network(#[from] NetworkError),

    #[error("No equipment with uid {uid} in the catalog")]
    UnknownUid { uid: String },
}

fn main() -> ExitCode {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let catalog = load_catalog(cli.catalog.as_deref())?;

    match cli.command {
        Commands::Validate => {
            ar_catalog::validate_catalog(&catalog).map_err(CatalogError::from)?;
            println!("catalog '{}' is valid ({} items)", catalog.name, catalog.equipment.len());
        }
        Commands::List => {
            let fleet = assemble(&catalog)?;
            for equipment in &fleet {
                let state = if equipment.is_operational() { "" } else { "  [fuera de servicio]" };
                println!("{:<18} {}{}", equipment.uid, equipment.describe(), state);
            }
        }
        Commands::Pair { from_uid, to_uid } => {
            let fleet = assemble(&catalog)?;
            let from = find(&fleet, &from_uid)?;
            let to = find(&fleet, &to_uid)?;
            if from.can_connect(to) {
                println!("{} -> {}: ok", from.uid, to.uid);
                for connector in from.connectable_outputs(to) {
                    println!("  via {} ({} mm)", connector.name, connector.diameter_mm);
                }
            } else {
                println!("{} -> {}: no", from.uid, to.uid);
            }
        }
        Commands::Line { uids } => {
            let fleet = assemble(&catalog)?;
            let mut builder = LineBuilder::new();
            for uid in &uids {
                builder = builder.push(find(&fleet, uid)?);
            }
            let line = builder.build()?;
            let report = line.evaluate();

            tracing::info!(
                demand_lpm = to_lpm(report.demand),
                segments = uids.len(),
                "line evaluated"
            );
            for (uid, pressure) in &report.residuals {
                println!("{:<18} {:>7.2} bar", uid, to_bar(*pressure));
            }
            match report.nozzle_ok {
                Some(true) => println!("nozzle: pressure ok"),
                Some(false) => println!("nozzle: INSUFFICIENT pressure"),
                None => println!("line does not end in a nozzle"),
            }
            for warning in &report.warnings {
                println!("warning: {warning}");
            }
        }
    }

    Ok(())
}

fn load_catalog(path: Option<&Path>) -> Result<Catalog, CliError> {
    let Some(path) = path else {
        tracing::debug!("no catalog file given, using the built-in catalog");
        return Ok(builtin_catalog());
    };
    let catalog = match path.extension().and_then(|e| e.to_str()) {
        Some("json") => load_json(path)?,
        _ => load_yaml(path)?,
    };
    Ok(catalog)
}

fn find<'a>(fleet: &'a [Equipment], uid: &str) -> Result<&'a Equipment, CliError> {
    fleet
        .iter()
        .find(|e| e.uid == uid)
        .ok_or_else(|| CliError::UnknownUid { uid: uid.to_string() })
}
