mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use rae_client::{ClientConfig, Dictionary, RaeClient};
use std::time::Duration;

#[derive(Parser)]
#[command(name = "rae")]
#[command(about = "Look up words in the Diccionario de la lengua española")]
#[command(version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("BUILD_HASH"), ")"))]
struct Cli {
    /// Log level: error, warn, info, debug, trace
    #[arg(long, global = true, default_value = "warn", value_enum)]
    log_level: LogLevel,

    /// Use UTC timestamps instead of local time
    #[arg(long, global = true)]
    utc: bool,

    /// Base URL of the dictionary service
    #[arg(long, global = true, default_value = rae_model::RAE_ENDPOINT)]
    endpoint: String,

    /// Per-request timeout in seconds (0 waits indefinitely)
    #[arg(long, global = true, default_value_t = 30)]
    timeout: u64,

    /// User-Agent header sent with every request
    #[arg(long, global = true)]
    user_agent: Option<String>,

    /// Print the result as JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    /// Also write the result as JSON to this file
    #[arg(short = 'O', long, global = true)]
    output: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, clap::ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Subcommand)]
enum Commands {
    /// Search for a word (letters only, accents and ñ allowed)
    Search {
        /// The word to look up (e.g., "haber")
        term: String,
    },

    /// Fetch one entry by the id listed in a search with several matches
    Fetch {
        /// Entry id (e.g., "JzTJ1Tq")
        id: String,
    },
}

impl Cli {
    fn client_config(&self) -> ClientConfig {
        let timeout = (self.timeout > 0).then(|| Duration::from_secs(self.timeout));
        let mut config = ClientConfig::default()
            .with_endpoint(&self.endpoint)
            .with_timeout(timeout);
        if let Some(user_agent) = &self.user_agent {
            config = config.with_user_agent(user_agent);
        }
        config
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Map log level, suppressing noisy HTML-parsing and JS engine crates at debug/trace
    let level = match cli.log_level {
        LogLevel::Error => "error",
        LogLevel::Warn  => "warn",
        LogLevel::Info  => "info",
        LogLevel::Debug => "debug,selectors=warn,html5ever=warn,boa_engine=warn,boa_parser=warn",
        LogLevel::Trace => "trace,selectors=warn,html5ever=warn,boa_engine=warn,boa_parser=warn",
    };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    // Timestamp format: 2026-02-14 19:44:09.123 -08:00
    let time_format = "%Y-%m-%d %H:%M:%S%.3f %:z";

    // Logs go to stderr so stdout stays clean for results
    if cli.utc {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_writer(std::io::stderr)
            .with_timer(tracing_subscriber::fmt::time::ChronoUtc::new(time_format.to_string()))
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_writer(std::io::stderr)
            .with_timer(tracing_subscriber::fmt::time::ChronoLocal::new(time_format.to_string()))
            .init();
    }

    let client = RaeClient::new(cli.client_config())?;

    let result = match &cli.command {
        Commands::Search { term } => client.search(term).await?,
        Commands::Fetch { id } => client.fetch_by_id(id).await?,
    };

    if cli.json {
        println!("{}", output::render_json(&result)?);
    } else {
        println!("{}", output::render_text(&result));
    }

    if let Some(path) = &cli.output {
        output::write_json(&result, path)?;
    }

    Ok(())
}
