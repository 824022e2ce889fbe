//! # zendesk-client
//!
//! A typed async client for the Zendesk Support API, covering tickets and
//! views.
//!
//! ## Features
//!
//! - **Tickets**: list, fetch one or many, create, update, and page through
//!   the incremental export
//! - **Views**: list (all or active), fetch, count, create and update
//! - **Sideloading**: fetch related users, groups and organizations in the
//!   same request as a ticket
//! - **Custom fields**: strictly typed decoding of polymorphic field values
//! - **Security**: the API token is never logged or exposed in error messages
//!
//! Every call is a single request/response round trip. The client does
//! not retry or back off; rate limits surface as
//! [`ZendeskError::RateLimited`].
//!
//! ## Architecture
//!
//! - [`config`] - Configuration loading from environment variables
//! - [`error`] - Error types with token sanitization
//! - [`client`] - HTTP client and resource accessors
//! - [`models`] - Tickets, views, custom fields and pagination types
//! - [`sideload`] - The `SideLoader` trait and its implementations
//!
//! ## Configuration
//!
//! - `ZENDESK_BASE_URL` or `ZENDESK_SUBDOMAIN`: where the account lives
//! - `ZENDESK_EMAIL`: agent email the API token belongs to
//! - `ZENDESK_API_TOKEN`: API token for authentication
//!
//! Optional:
//! - `ZENDESK_TIMEOUT_SECS`: request timeout (default 30)
//! - `RUST_LOG`: Log level (e.g., `zendesk_client=debug`)
//!
//! ## Example
//!
//! ```ignore
//! use zendesk_client::config::Config;
//! use zendesk_client::models::TicketListOptions;
//! use zendesk_client::sideload::UserSideLoader;
//! use zendesk_client::ZendeskClient;
//!
//! async fn example() -> Result<(), zendesk_client::ZendeskError> {
//!     let config = Config::from_env()?;
//!     let client = ZendeskClient::new(&config)?;
//!
//!     let opts = TicketListOptions::new()
//!         .with_sort_by("updated_at")
//!         .with_sort_order("desc")
//!         .with_per_page(10);
//!     let (tickets, _page) = client.list_tickets(Some(&opts)).await?;
//!
//!     if let Some(id) = tickets.first().and_then(|t| t.id) {
//!         let mut users = UserSideLoader::new();
//!         let ticket = client.get_ticket(id, &mut [&mut users]).await?;
//!         println!("#{}: {} ({} users)", id, ticket.display_subject(), users.users().len());
//!     }
//!
//!     Ok(())
//! }
//! ```

#![warn(rustdoc::missing_crate_level_docs)]

pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod sideload;

pub use client::ZendeskClient;
pub use config::Config;
pub use error::ZendeskError;
