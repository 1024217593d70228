use clap::{Parser, Subcommand, ValueEnum};

mod addresses;
mod report_cmd;

#[derive(Debug, Parser)]
#[command(name = "geoprobe")]
#[command(about = "Batch geocoding QA reports")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Geocode an address list and print the CSV report to stdout
    Report {
        /// Address list file (one entry per line, `# ` introduces a section
        /// comment); defaults to the built-in sample list
        #[arg(long)]
        input: Option<std::path::PathBuf>,

        /// Service-side matching mode
        #[arg(long, value_enum, default_value_t = SearchMethod::Advanced)]
        search_method: SearchMethod,

        /// Output flavor
        #[arg(long, value_enum, default_value_t = OutputFormat::Fields)]
        format: OutputFormat,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum SearchMethod {
    /// Fuzzy matching on the service side
    Advanced,
    /// Exact matching only
    Simple,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// One column per match field
    Fields,
    /// Address plus the whole result as JSON
    RawJson,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Report {
            input,
            search_method,
            format,
        }) => {
            let config = geoprobe_core::load_app_config()
                .map_err(|e| anyhow::anyhow!("configuration error: {e}"))?;
            init_tracing(&config.log_level);
            report_cmd::run(&config, input.as_deref(), search_method, format).await
        }
        None => {
            println!("no command given; try `geoprobe report`");
            Ok(())
        }
    }
}

/// Diagnostics go to stderr so the CSV stream on stdout stays clean.
/// `RUST_LOG` overrides the configured default level.
fn init_tracing(default_level: &str) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
