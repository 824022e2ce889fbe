//! zendesk-client - command line access to Zendesk tickets and views
//!
//! Every subcommand performs one API call and prints the decoded result as
//! pretty JSON on stdout. Logs go to stderr.
//!
//! # Configuration
//!
//! Set the following environment variables (or use a `.env` file):
//!
//! - `ZENDESK_BASE_URL` or `ZENDESK_SUBDOMAIN`
//! - `ZENDESK_EMAIL`
//! - `ZENDESK_API_TOKEN`
//!
//! # Usage
//!
//! ```bash
//! zendesk-client check
//! zendesk-client tickets get 35436 --include users,groups
//! zendesk-client tickets export --start-time 1700000000
//! zendesk-client views count 25
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use tracing_subscriber::{fmt, EnvFilter};

use zendesk_client::models::TicketListOptions;
use zendesk_client::sideload::{
    GroupSideLoader, OrganizationSideLoader, SideLoader, UserSideLoader,
};
use zendesk_client::{Config, ZendeskClient};

#[derive(Parser)]
#[command(name = "zendesk-client", version)]
#[command(about = "Query Zendesk tickets and views", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Verify the base URL and credentials
    Check,

    /// Ticket operations
    Tickets {
        #[command(subcommand)]
        action: TicketAction,
    },

    /// View operations
    Views {
        #[command(subcommand)]
        action: ViewAction,
    },
}

#[derive(Subcommand)]
enum TicketAction {
    /// List tickets
    List {
        /// e.g. "created_at", "updated_at", "status"
        #[arg(long)]
        sort_by: Option<String>,

        /// "asc" or "desc"
        #[arg(long)]
        sort_order: Option<String>,

        #[arg(long)]
        per_page: Option<u32>,

        #[arg(long)]
        page: Option<u32>,
    },

    /// Show one ticket
    Get {
        id: i64,

        /// Related records to sideload
        #[arg(long, value_enum, value_delimiter = ',')]
        include: Vec<Include>,
    },

    /// Show several tickets at once
    ShowMany {
        #[arg(value_delimiter = ',', required = true)]
        ids: Vec<i64>,
    },

    /// Fetch one page of the incremental export
    Export {
        /// UNIX timestamp to start from
        #[arg(long, conflicts_with = "cursor")]
        start_time: Option<i64>,

        /// Cursor returned by a previous page
        #[arg(long)]
        cursor: Option<String>,
    },
}

#[derive(Subcommand)]
enum ViewAction {
    /// List views
    List {
        /// Only active views
        #[arg(long)]
        active: bool,
    },

    /// Show one view
    Get { id: i64 },

    /// Show the ticket count of a view
    Count { id: i64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Include {
    Users,
    Groups,
    Organizations,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (ignore errors if not found)
    dotenvy::dotenv().ok();

    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("zendesk_client=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::debug!("Configuration loaded, base_url: {}", config.base_url);

    let client = ZendeskClient::new(&config).context("Failed to create Zendesk client")?;

    match cli.command {
        Commands::Check => {
            client
                .test_connection()
                .await
                .context("Connection check failed")?;
            println!("ok");
        }
        Commands::Tickets { action } => run_ticket_action(&client, action).await?,
        Commands::Views { action } => run_view_action(&client, action).await?,
    }

    Ok(())
}

async fn run_ticket_action(client: &ZendeskClient, action: TicketAction) -> Result<()> {
    match action {
        TicketAction::List {
            sort_by,
            sort_order,
            per_page,
            page,
        } => {
            let mut opts = TicketListOptions::new();
            opts.sort_by = sort_by;
            opts.sort_order = sort_order;
            opts.page.per_page = per_page;
            opts.page.page = page;

            let (tickets, page) = client
                .list_tickets(Some(&opts))
                .await
                .context("Failed to list tickets")?;
            print_json(&serde_json::json!({ "tickets": tickets, "page": page }))
        }
        TicketAction::Get { id, include } => {
            let mut users = UserSideLoader::new();
            let mut groups = GroupSideLoader::new();
            let mut organizations = OrganizationSideLoader::new();

            let mut users_slot = Some(&mut users);
            let mut groups_slot = Some(&mut groups);
            let mut organizations_slot = Some(&mut organizations);

            let mut loaders: Vec<&mut dyn SideLoader> = Vec::new();
            for kind in sideload_order(&include) {
                let loader: Option<&mut dyn SideLoader> = match kind {
                    Include::Users => users_slot.take().map(|l| l as &mut dyn SideLoader),
                    Include::Groups => groups_slot.take().map(|l| l as &mut dyn SideLoader),
                    Include::Organizations => {
                        organizations_slot.take().map(|l| l as &mut dyn SideLoader)
                    }
                };
                loaders.extend(loader);
            }

            let ticket = client
                .get_ticket(id, &mut loaders)
                .await
                .with_context(|| format!("Failed to get ticket {}", id))?;
            tracing::info!(url = %client.ticket_web_url(id), "Fetched ticket");

            print_json(&serde_json::json!({
                "ticket": ticket,
                "users": users.users(),
                "groups": groups.groups(),
                "organizations": organizations.organizations(),
            }))
        }
        TicketAction::ShowMany { ids } => {
            let tickets = client
                .get_multiple_tickets(&ids)
                .await
                .context("Failed to get tickets")?;
            print_json(&tickets)
        }
        TicketAction::Export { start_time, cursor } => {
            let mut opts = TicketListOptions::new();
            opts.start_time = start_time;
            opts.cursor = cursor;

            let export = client
                .list_incremental_tickets(Some(&opts))
                .await
                .context("Failed to fetch incremental export")?;
            print_json(&serde_json::json!({
                "tickets": export.tickets,
                "after_url": export.after_url,
                "after_cursor": export.after_cursor,
                "end_of_stream": export.end_of_stream,
            }))
        }
    }
}

async fn run_view_action(client: &ZendeskClient, action: ViewAction) -> Result<()> {
    match action {
        ViewAction::List { active } => {
            let (views, page) = if active {
                client.list_active_views().await
            } else {
                client.list_views().await
            }
            .context("Failed to list views")?;
            print_json(&serde_json::json!({ "views": views, "page": page }))
        }
        ViewAction::Get { id } => {
            let view = client
                .get_view(id)
                .await
                .with_context(|| format!("Failed to get view {}", id))?;
            print_json(&view)
        }
        ViewAction::Count { id } => {
            let count = client
                .get_view_count(id)
                .await
                .with_context(|| format!("Failed to count view {}", id))?;
            print_json(&count)
        }
    }
}

/// Keeps `--include` in the order given, dropping repeats.
fn sideload_order(include: &[Include]) -> Vec<Include> {
    let mut order = Vec::with_capacity(include.len());
    for kind in include {
        if order.contains(kind) {
            tracing::warn!(?kind, "Ignoring repeated --include value");
            continue;
        }
        order.push(*kind);
    }
    order
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let rendered = serde_json::to_string_pretty(value).context("Failed to render output")?;
    println!("{}", rendered);
    Ok(())
}
