//! stockroom - Fast Rust CLI for small-shop inventory and sales
//!
//! One subcommand per screen: add products, restock, record sales, and view
//! inventory, sales history and a dashboard. Everything lives in one SQLite file.
//!
//! CHANGELOG:
//! - 10/18/2026 - Inventory subcommands and --db path override
//! - 01/10/2026 - Initial scaffold with CLI skeleton

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

use stockroom::commands;
use stockroom::db::connection::default_db_path;
use stockroom::output::{self, OutputControls};

/// Fast Rust CLI for small-shop inventory and sales tracking.
#[derive(Parser, Debug)]
#[command(name = "stockroom")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Database file (defaults to $STOCKROOM_DB, then the platform data dir)
    #[arg(long, global = true)]
    db: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Compact JSON output (no whitespace)
    #[arg(long, global = true)]
    compact: bool,

    /// Comma-separated field allowlist for JSON output
    #[arg(long, global = true)]
    fields: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create the database tables if they don't exist
    Init,

    /// Add a new product
    AddProduct {
        /// Product name (must be unique)
        name: String,

        /// Unit price
        #[arg(short, long, default_value_t = 0.0)]
        price: f64,

        /// Initial quantity in stock
        #[arg(short, long, default_value_t = 0)]
        quantity: i64,
    },

    /// Add stock to an existing product
    UpdateStock {
        /// Product id or name (exact, or a unique part of it)
        product: String,

        /// Units to add (at least 1)
        #[arg(short, long, default_value_t = 1)]
        quantity: i64,
    },

    /// Record a sale dated today
    RecordSale {
        /// Product id or name (exact, or a unique part of it)
        product: String,

        /// Units sold (at least 1)
        #[arg(short, long, default_value_t = 1)]
        quantity: i64,
    },

    /// Show the current inventory
    Inventory,

    /// Show all recorded sales
    Sales,

    /// Stock level and sales-over-time charts
    Dashboard,
}

fn main() -> ExitCode {
    // Logs go to stderr so JSON on stdout stays parseable
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let cli = Cli::parse();

    let output_controls = OutputControls {
        json: cli.json,
        compact: cli.compact,
        fields: cli.fields.clone(),
    };

    let db_path = cli.db.clone().unwrap_or_else(default_db_path);
    tracing::debug!(path = %db_path.display(), "using inventory database");

    let result = match cli.command {
        Command::Init => commands::setup::run(&db_path, &output_controls),
        Command::AddProduct { name, price, quantity } => {
            commands::products::add(&db_path, &name, price, quantity, &output_controls)
        }
        Command::UpdateStock { product, quantity } => {
            commands::products::update_stock(&db_path, &product, quantity, &output_controls)
        }
        Command::RecordSale { product, quantity } => {
            commands::sales::record(&db_path, &product, quantity, &output_controls)
        }
        Command::Inventory => commands::products::inventory(&db_path, &output_controls),
        Command::Sales => commands::sales::list(&db_path, &output_controls),
        Command::Dashboard => commands::dashboard::show(&db_path, &output_controls),
    };

    match result {
        Ok(()) => ExitCode::from(0),
        Err(e) => {
            if cli.json {
                println!("{}", output::format_error(&format!("{:#}", e)));
            } else {
                eprintln!("Error: {:#}", e);
            }
            ExitCode::from(1)
        }
    }
}
