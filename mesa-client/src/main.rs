//! mesa - restaurant operations dashboard on the command line
//!
//! Reservations, menu, orders, reviews, customer preferences and the
//! detailed order history, backed by the restaurant REST API.

mod commands;

use clap::{Parser, Subcommand};
use mesa_client::{ApiClient, ClientConfig, LogConfig, logger};

use commands::{
    HistoryArgs, MenuCommand, OrdersCommand, PreferencesCommand, ReservationsCommand,
    ReviewsCommand,
};

#[derive(Parser)]
#[command(name = "mesa")]
#[command(version, about = "Restaurant operations dashboard", long_about = None)]
struct Cli {
    /// Backend base URL (overrides MESA_API_URL)
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Request timeout in seconds, 0 waits forever (overrides MESA_TIMEOUT_SECS)
    #[arg(long, global = true)]
    timeout: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Table reservations
    #[command(subcommand)]
    Reservations(ReservationsCommand),

    /// Dishes on the menu
    #[command(subcommand)]
    Menu(MenuCommand),

    /// Customer orders
    #[command(subcommand)]
    Orders(OrdersCommand),

    /// Customer reviews
    #[command(subcommand)]
    Reviews(ReviewsCommand),

    /// Dietary preferences of a customer
    #[command(subcommand)]
    Preferences(PreferencesCommand),

    /// Detailed order history of a customer
    History(HistoryArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    logger::init_logger(&LogConfig::from_env())?;

    let mut config = ClientConfig::from_env();
    if let Some(url) = cli.api_url {
        config.base_url = url;
    }
    if let Some(seconds) = cli.timeout {
        config = config.with_timeout(seconds);
    }
    tracing::debug!(base_url = %config.base_url, timeout = ?config.timeout, "Client configured");

    let api = ApiClient::new(config.build_http_client()?);

    match cli.command {
        Commands::Reservations(cmd) => commands::reservations::run(&api, cmd).await,
        Commands::Menu(cmd) => commands::menu::run(&api, cmd).await,
        Commands::Orders(cmd) => commands::orders::run(&api, cmd).await,
        Commands::Reviews(cmd) => commands::reviews::run(&api, cmd).await,
        Commands::Preferences(cmd) => commands::preferences::run(&api, cmd).await,
        Commands::History(args) => commands::history::run(&api, args).await,
    }
}
