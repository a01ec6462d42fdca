#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

use clap::{Parser, Subcommand};
use kanto_core::FilterState;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

mod command;

use command::{
    BrowseStrategy, CommandStrategy, InfoStrategy, InitStrategy, ListInput, ListStrategy,
    TypesStrategy, VersionStrategy,
};

#[derive(Parser)]
#[command(name = "kanto")]
#[command(about = "Pokédex catalog browser", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load the catalog, filter it once and print the result
    List {
        /// Name or id substring
        #[arg(short = 's', long, default_value = "")]
        search: String,

        /// Type the entry must have (e.g. fire)
        #[arg(short = 't', long = "type", default_value = "")]
        category: String,

        /// Exclusion mode: negate each given filter
        #[arg(short = 'n', long = "not")]
        invert: bool,

        /// Print JSON instead of cards
        #[arg(long)]
        json: bool,
    },
    /// Load the catalog and filter it interactively
    Browse,
    /// List the selectable types
    Types,
    /// Initialize configuration
    Init,
    /// Show configuration
    Info,
    /// Show version
    Version,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let cli = Cli::parse();

    match cli.command {
        Commands::List {
            search,
            category,
            invert,
            json,
        } => {
            let input = ListInput {
                filter: FilterState::new(search, category.to_lowercase(), invert),
                json,
            };
            ListStrategy.execute(input).await
        }
        Commands::Browse => BrowseStrategy.execute(()).await,
        Commands::Types => TypesStrategy.execute(()).await,
        Commands::Init => InitStrategy.execute(()).await,
        Commands::Info => InfoStrategy.execute(()).await,
        Commands::Version => VersionStrategy.execute(()).await,
    }
}
