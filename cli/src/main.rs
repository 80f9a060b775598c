mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tactidex_core::Tab;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(version, about = "TFT set reference from CommunityDragon data")]
struct Cli {
    /// Config file to use instead of the default location
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Download the export and save it unmodified
    Fetch {
        #[arg(short, long)]
        out: PathBuf,
    },
    /// Write the static data files
    Export {
        #[arg(short, long)]
        input: Option<PathBuf>,
        #[arg(short = 'o', long, default_value = "data")]
        out_dir: PathBuf,
    },
    /// Normalize and print set totals
    Summary {
        #[arg(short, long)]
        input: Option<PathBuf>,
    },
    /// Print one tab of the reference
    List {
        tab: Tab,
        #[arg(short, long)]
        cost: Option<i32>,
        #[arg(short, long, default_value = "")]
        search: String,
        #[arg(short, long)]
        input: Option<PathBuf>,
        /// Show icon URLs
        #[arg(long)]
        icons: bool,
    },
    /// List augments from Data Dragon instead of CommunityDragon
    Ddragon,
    /// Print the effective config and where it lives
    Config,
}

fn init_logging() {
    let filter = EnvFilter::builder()
        .with_default_directive(tracing::Level::INFO.into())
        .from_env_lossy();

    // If TACTIDEX_LOG_PATH is set, append to that file
    if let Ok(path) = std::env::var("TACTIDEX_LOG_PATH") {
        if let Ok(file) = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
        {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_target(true)
                .with_ansi(false)
                .with_writer(file)
                .init();
            return;
        }
    }

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<(), String> {
    init_logging();

    let cli = Cli::parse();
    let config_file = cli.config.as_deref();
    let config = tactidex_core::load_config(config_file).map_err(|e| e.to_string())?;

    match cli.command {
        Commands::Fetch { out } => commands::fetch(&config, &out).await,
        Commands::Export { input, out_dir } => {
            commands::export(&config, input.as_deref(), &out_dir).await
        }
        Commands::Summary { input } => commands::summary(&config, input.as_deref()).await,
        Commands::List {
            tab,
            cost,
            search,
            input,
            icons,
        } => {
            let query = tactidex_core::ViewQuery::new(tab)
                .with_search(search)
                .with_cost(cost);
            commands::list(&config, input.as_deref(), &query, icons).await
        }
        Commands::Ddragon => commands::ddragon(&config).await,
        Commands::Config => commands::show_config(&config, config_file),
    }
}
