//! FontSpace CLI - Session table migration and store management tools.
//!
//! # Usage
//!
//! ```bash
//! # Create the PostgreSQL session table
//! fontspace migrate
//!
//! # Write the seed catalog to a JSON store file
//! fontspace seed --store fontspace.json
//!
//! # Browse fonts in a store
//! fontspace fonts list --pricing premium --sort name
//!
//! # Review designer applications in the store file
//! fontspace applications list --status pending
//! fontspace applications review <id> --decision approved --notes "Welcome"
//!
//! # Review applications submitted through the storefront
//! fontspace sessions
//! fontspace applications --session <SESSION_ID> review <id> --decision approved
//! ```
//!
//! # Commands
//!
//! - `migrate` - Create the tower-sessions table in `PostgreSQL`
//! - `seed` - Write seed collections to a store file
//! - `fonts list` - Browse a store's font catalog
//! - `sessions` - Find client sessions with pending designer applications
//! - `applications list|review` - Designer application review, against the
//!   store file or one client session

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use fontspace_core::ApplicationReviewStatus;
use fontspace_storefront::storage::{KeyValueStore, Storage};

mod commands;

/// Default store file, relative to the working directory.
const DEFAULT_STORE: &str = "fontspace.json";

#[derive(Parser)]
#[command(name = "fontspace")]
#[command(author, version, about = "FontSpace CLI tools")]
struct Cli {
    /// JSON store file
    #[arg(long, global = true, default_value = DEFAULT_STORE)]
    store: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the session table in the storefront database
    Migrate,
    /// Write the seed collections to the store, replacing its contents
    Seed,
    /// Browse fonts
    Fonts {
        #[command(subcommand)]
        action: FontAction,
    },
    /// List client sessions with pending designer applications
    Sessions,
    /// Manage designer applications
    Applications {
        /// Work on this client session in the storefront database instead of
        /// the store file
        #[arg(long)]
        session: Option<String>,

        #[command(subcommand)]
        action: ApplicationAction,
    },
}

#[derive(Subcommand)]
enum FontAction {
    /// List fonts matching the browse filters
    List(commands::fonts::ListArgs),
}

#[derive(Subcommand)]
enum ApplicationAction {
    /// List applications
    List {
        /// Only show applications with this status
        #[arg(long)]
        status: Option<ReviewStatusArg>,
    },
    /// Approve or reject an application
    Review {
        /// Application ID
        id: String,

        /// Review decision
        #[arg(short, long)]
        decision: Decision,

        /// Notes shown to the applicant
        #[arg(short, long)]
        notes: Option<String>,
    },
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum ReviewStatusArg {
    Pending,
    Approved,
    Rejected,
}

impl From<ReviewStatusArg> for ApplicationReviewStatus {
    fn from(arg: ReviewStatusArg) -> Self {
        match arg {
            ReviewStatusArg::Pending => Self::Pending,
            ReviewStatusArg::Approved => Self::Approved,
            ReviewStatusArg::Rejected => Self::Rejected,
        }
    }
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum Decision {
    Approved,
    Rejected,
}

impl From<Decision> for ApplicationReviewStatus {
    fn from(decision: Decision) -> Self {
        match decision {
            Decision::Approved => Self::Approved,
            Decision::Rejected => Self::Rejected,
        }
    }
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let storage = commands::open_store(cli.store);

    match cli.command {
        Commands::Migrate => commands::migrate::sessions().await?,
        Commands::Seed => commands::seed::run(&storage).await?,
        Commands::Fonts { action } => match action {
            FontAction::List(args) => commands::fonts::list(&storage, args).await?,
        },
        Commands::Sessions => commands::sessions::list_pending().await?,
        Commands::Applications { session, action } => match session {
            Some(id) => applications(&commands::sessions::open(&id).await?, action).await?,
            None => applications(&storage, action).await?,
        },
    }
    Ok(())
}

async fn applications<S: KeyValueStore>(
    storage: &Storage<S>,
    action: ApplicationAction,
) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ApplicationAction::List { status } => {
            commands::applications::list(storage, status.map(Into::into)).await?;
        }
        ApplicationAction::Review {
            id,
            decision,
            notes,
        } => {
            commands::applications::review(storage, &id.into(), decision.into(), notes).await?;
        }
    }
    Ok(())
}
