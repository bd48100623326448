use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use ag_app::{AppResult, RouteNetwork, dataset_service};

#[derive(Parser)]
#[command(name = "ag-cli")]
#[command(about = "Aerograph CLI - airport route graph analysis tool", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate dataset file syntax and structure
    Validate {
        /// Path to the dataset YAML/JSON file
        dataset_path: PathBuf,
    },
    /// Show dataset contents summary
    Info {
        /// Path to the dataset YAML/JSON file
        dataset_path: PathBuf,
    },
    /// Build the route graph and list its airports
    Airports {
        /// Path to the dataset YAML/JSON file
        dataset_path: PathBuf,
        /// Minimum distinct airlines for an airport to qualify
        #[arg(long, default_value_t = 0)]
        min_airlines: i32,
    },
    /// Find a fewest-hops route between two airports
    Path {
        /// Path to the dataset YAML/JSON file
        dataset_path: PathBuf,
        /// Origin airport code
        from: String,
        /// Destination airport code
        to: String,
        /// Minimum distinct airlines for an airport to qualify
        #[arg(long, default_value_t = 0)]
        min_airlines: i32,
    },
}

fn main() -> AppResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { dataset_path } => cmd_validate(&dataset_path),
        Commands::Info { dataset_path } => cmd_info(&dataset_path),
        Commands::Airports {
            dataset_path,
            min_airlines,
        } => cmd_airports(&dataset_path, min_airlines),
        Commands::Path {
            dataset_path,
            from,
            to,
            min_airlines,
        } => cmd_path(&dataset_path, &from, &to, min_airlines),
    }
}

fn cmd_validate(dataset_path: &Path) -> AppResult<()> {
    println!("Validating dataset: {}", dataset_path.display());
    dataset_service::load_dataset(dataset_path)?;
    println!("✓ Dataset is valid");
    Ok(())
}

fn cmd_info(dataset_path: &Path) -> AppResult<()> {
    let dataset = dataset_service::load_dataset(dataset_path)?;
    let summary = dataset_service::dataset_summary(&dataset);

    println!("Dataset: {}", summary.name);
    println!("  Airports: {}", summary.airport_count);
    println!("  Flight records: {}", summary.flight_record_count);
    println!("  Airlines: {}", summary.airline_count);
    Ok(())
}

fn cmd_airports(dataset_path: &Path, min_airlines: i32) -> AppResult<()> {
    let network = build_network(dataset_path, min_airlines)?;

    println!("Airports in the route graph:");
    for airport in network.airports()? {
        println!("  {} - {} ({})", airport.code, airport.name, airport.city);
    }
    Ok(())
}

fn cmd_path(dataset_path: &Path, from: &str, to: &str, min_airlines: i32) -> AppResult<()> {
    let network = build_network(dataset_path, min_airlines)?;

    let from = network.airport_by_code(from)?.clone();
    let to = network.airport_by_code(to)?.clone();

    match network.find_route(from.id, to.id)? {
        Some(path) => {
            println!("✓ Route found ({} hops):", path.len() - 1);
            for airport in &path {
                println!("  {} - {} ({})", airport.code, airport.name, airport.city);
            }
        }
        None => {
            // different connected components: a result, not an error
            println!("No route between {} and {}", from.code, to.code);
        }
    }
    Ok(())
}

fn build_network(dataset_path: &Path, min_airlines: i32) -> AppResult<RouteNetwork> {
    let dataset = dataset_service::load_dataset(dataset_path)?;
    let mut network = RouteNetwork::new(&dataset)?;
    let summary = network.build(min_airlines)?;
    println!(
        "✓ Graph built: {} airports, {} routes",
        summary.vertex_count, summary.edge_count
    );
    Ok(network)
}
