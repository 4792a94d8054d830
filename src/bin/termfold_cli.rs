use clap::{Parser, Subcommand};
use log::{error, info};
use std::path::PathBuf;
use std::process;

use termfold::{load_node_config, TermFoldNode, TermFoldResult};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Path to the node configuration file
    #[arg(short, long, default_value = "config/node_config.json")]
    config: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Delete all datasources, terms, and mappings from the store
    Wipe {},
    /// Load a datasource TSV file
    LoadDatasources {
        /// Path to the datasource TSV file
        #[arg(required = true)]
        path: PathBuf,
    },
    /// Load a term TSV file
    LoadTerms {
        /// Path to the term TSV file
        #[arg(required = true)]
        path: PathBuf,
    },
    /// Load a mapping TSV file
    LoadMappings {
        /// Path to the mapping TSV file
        #[arg(required = true)]
        path: PathBuf,
    },
    /// Show item counts per tree
    Stats {},
    /// Resolve curies into target vocabularies
    Resolve {
        /// Input curies, e.g. MESH:D009103
        #[arg(required = true)]
        ids: Vec<String>,
        /// Target vocabulary prefixes (all vocabularies when omitted)
        #[arg(long, short)]
        target: Vec<String>,
        /// Maximum number of mapping hops
        #[arg(long, short)]
        distance: Option<u32>,
    },
}

fn run(cli: Cli) -> TermFoldResult<()> {
    let config = load_node_config(Some(&cli.config))?;
    let default_distance = config.default_max_distance;
    let node = TermFoldNode::new(config)?;

    match cli.command {
        Commands::Wipe {} => {
            let removed = node.wipe()?;
            let total: u64 = removed.values().sum();
            info!("Wipe complete, {} items removed", total);
        }
        Commands::LoadDatasources { path } => {
            let receipt = node.loader().load_datasources(&path)?;
            println!("Loaded {} datasource rows (batch {})", receipt.rows, receipt.batch_id);
        }
        Commands::LoadTerms { path } => {
            let receipt = node.loader().load_terms(&path)?;
            println!("Loaded {} term rows (batch {})", receipt.rows, receipt.batch_id);
        }
        Commands::LoadMappings { path } => {
            let receipt = node.loader().load_mappings(&path)?;
            println!("Loaded {} mapping rows (batch {})", receipt.rows, receipt.batch_id);
        }
        Commands::Stats {} => {
            let stats = node.stats()?;
            let mut entries: Vec<_> = stats.into_iter().collect();
            entries.sort();
            for (tree, count) in entries {
                println!("{}: {}", tree, count);
            }
        }
        Commands::Resolve { ids, target, distance } => {
            let records = node
                .resolver()
                .resolve(&ids, &target, distance.unwrap_or(default_distance))?;
            println!("{}", serde_json::to_string_pretty(&records)?);
        }
    }

    Ok(())
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        error!("{}", e);
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
