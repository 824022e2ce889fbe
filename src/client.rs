//! HTTP client for the Zendesk Support API.
//!
//! This module provides the `ZendeskClient` struct for making authenticated
//! requests to the Zendesk REST API (v2), along with the query builders the
//! accessors share.
//!
//! # Request Model
//!
//! Every accessor is a single request/response round trip. Nothing is
//! retried: transport failures, non-success statuses and decode errors are
//! returned as soon as they happen. Cancel a call by dropping its future;
//! the configured timeout bounds every request.
//!
//! # Security
//!
//! The API token is never logged. Error bodies are sanitized before they are
//! stored in an error.

use std::time::Duration;

use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Client, Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use url::form_urlencoded;

use crate::config::Config;
use crate::error::{json_kind, ZendeskError};
use crate::models::{
    null_as_default, IncrementalTickets, Page, Ticket, TicketListOptions, View, ViewCount,
};
use crate::sideload::SideLoader;

/// Path of the Zendesk REST API relative to the account URL.
const API_PATH: &str = "/api/v2";

/// Maximum length for HTTP error response bodies kept in errors.
const MAX_ERROR_BODY_LEN: usize = 500;

/// HTTP client for the Zendesk Support API.
///
/// Handles authentication, request formatting, and response decoding for
/// the ticket and view endpoints.
///
/// # Example
///
/// ```ignore
/// let config = Config::from_env()?;
/// let client = ZendeskClient::new(&config)?;
///
/// let (tickets, page) = client.list_tickets(None).await?;
/// ```
#[derive(Clone)]
pub struct ZendeskClient {
    /// The underlying HTTP client (cloning is cheap).
    http: Client,

    /// Base URL for the API (e.g., `https://acme.zendesk.com/api/v2`).
    base_url: String,

    /// Basic auth user, `{email}/token`.
    auth_user: String,

    /// API token for authentication.
    /// SECURITY: Never log this value!
    api_token: String,

    /// Timeout configured on `http`, kept for error reporting.
    timeout: Duration,
}

impl ZendeskClient {
    /// Creates a new client from configuration.
    ///
    /// # Errors
    ///
    /// Returns `ZendeskError::HttpClient` if the HTTP client fails to initialize.
    pub fn new(config: &Config) -> Result<Self, ZendeskError> {
        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(ZendeskError::HttpClient)?;

        Ok(Self {
            http,
            base_url: Self::normalize_base_url(&config.base_url),
            auth_user: format!("{}/token", config.email),
            api_token: config.api_token().to_string(),
            timeout: config.timeout,
        })
    }

    /// Normalizes the base URL to ensure it includes the API path.
    fn normalize_base_url(url: &str) -> String {
        let url = url.trim_end_matches('/');
        if url.ends_with(API_PATH) {
            url.to_string()
        } else if url.ends_with("/api") {
            format!("{}/v2", url)
        } else {
            format!("{}{}", url, API_PATH)
        }
    }

    /// Returns the agent UI URL of a ticket.
    pub fn ticket_web_url(&self, ticket_id: i64) -> String {
        let web_base = self.base_url.trim_end_matches(API_PATH);
        format!("{}/agent/tickets/{}", web_base, ticket_id)
    }

    /// Tests connectivity and credentials by listing a single ticket.
    ///
    /// # Errors
    ///
    /// Returns `ZendeskError::ConnectionTest` describing why the check failed.
    pub async fn test_connection(&self) -> Result<(), ZendeskError> {
        tracing::debug!("Testing connection to Zendesk");

        let opts = TicketListOptions::new().with_per_page(1);
        match self.list_tickets(Some(&opts)).await {
            Ok(_) => {
                tracing::info!("Connection test successful");
                Ok(())
            }
            Err(ZendeskError::Authentication) => Err(ZendeskError::connection_test(
                "Authentication failed - verify ZENDESK_EMAIL and ZENDESK_API_TOKEN",
            )),
            Err(ZendeskError::Timeout { duration, .. }) => {
                Err(ZendeskError::connection_test(format!(
                    "Connection timed out after {:?} - verify ZENDESK_BASE_URL is correct and reachable",
                    duration
                )))
            }
            Err(e) => Err(ZendeskError::connection_test(
                e.sanitized_display(&self.api_token),
            )),
        }
    }

    // ========================================================================
    // HTTP primitives
    // ========================================================================

    /// Makes a GET request and returns the raw response body.
    async fn get(&self, path: &str) -> Result<Vec<u8>, ZendeskError> {
        self.send::<()>(Method::GET, path, None).await
    }

    /// Makes a POST request with a JSON payload.
    async fn post<B>(&self, path: &str, payload: &B) -> Result<Vec<u8>, ZendeskError>
    where
        B: Serialize + ?Sized,
    {
        self.send(Method::POST, path, Some(payload)).await
    }

    /// Makes a PUT request with a JSON payload.
    async fn put<B>(&self, path: &str, payload: &B) -> Result<Vec<u8>, ZendeskError>
    where
        B: Serialize + ?Sized,
    {
        self.send(Method::PUT, path, Some(payload)).await
    }

    /// Sends one request to the API.
    ///
    /// `path` is relative to the API base and may already carry a query
    /// string. Non-success statuses are turned into errors; success bodies
    /// are returned undecoded so sideloaders can read them too.
    async fn send<B>(
        &self,
        method: Method,
        path: &str,
        payload: Option<&B>,
    ) -> Result<Vec<u8>, ZendeskError>
    where
        B: Serialize + ?Sized,
    {
        let url = format!("{}{}", self.base_url, path);

        tracing::debug!(
            method = %method,
            path = %path,
            "Making Zendesk API request"
        );

        let mut req = self
            .http
            .request(method.clone(), &url)
            .basic_auth(&self.auth_user, Some(&self.api_token))
            .header(ACCEPT, "application/json");

        if let Some(payload) = payload {
            let body = serde_json::to_vec(payload)?;
            req = req.header(CONTENT_TYPE, "application/json").body(body);
        }

        let response = req.send().await.map_err(|e| {
            if e.is_timeout() {
                return ZendeskError::timeout(self.timeout, format!("{} {}", method, path));
            }
            ZendeskError::Http(e)
        })?;
        let status = response.status();

        if !status.is_success() {
            return Err(self.handle_http_error(path, status, response).await);
        }

        let body = response.bytes().await.map_err(ZendeskError::Http)?;

        tracing::trace!(body = %String::from_utf8_lossy(&body), "Zendesk API response");

        Ok(body.to_vec())
    }

    /// Converts a non-success response into a `ZendeskError`.
    async fn handle_http_error(
        &self,
        path: &str,
        status: StatusCode,
        response: reqwest::Response,
    ) -> ZendeskError {
        let retry_after = response
            .headers()
            .get("retry-after")
            .and_then(|v| v.to_str().ok())
            .and_then(|s| s.trim().parse::<u64>().ok())
            .map(Duration::from_secs);

        let body = response.text().await.unwrap_or_default();
        let body = ZendeskError::sanitize_message(&body, &self.api_token);
        let body = truncate_body(body);

        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => ZendeskError::Authentication,
            StatusCode::NOT_FOUND => ZendeskError::not_found(path),
            StatusCode::TOO_MANY_REQUESTS => {
                tracing::warn!(?retry_after, "Rate limited by Zendesk");
                ZendeskError::RateLimited { retry_after }
            }
            _ => ZendeskError::HttpStatus { status, body },
        }
    }

    // ========================================================================
    // Tickets
    // ========================================================================

    /// Lists tickets with optional sorting and pagination.
    ///
    /// `None` behaves exactly like `Some(&TicketListOptions::default())`.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let opts = TicketListOptions::new()
    ///     .with_sort_by("created_at")
    ///     .with_sort_order("desc")
    ///     .with_per_page(25);
    /// let (tickets, page) = client.list_tickets(Some(&opts)).await?;
    /// ```
    pub async fn list_tickets(
        &self,
        opts: Option<&TicketListOptions>,
    ) -> Result<(Vec<Ticket>, Page), ZendeskError> {
        #[derive(Deserialize)]
        struct Response {
            #[serde(default, deserialize_with = "null_as_default")]
            tickets: Vec<Ticket>,
            #[serde(flatten)]
            page: Page,
        }

        let defaults = TicketListOptions::default();
        let path = add_options("/tickets.json", opts.unwrap_or(&defaults))?;

        let body = self.get(&path).await?;
        let response: Response = decode(&body)?;

        Ok((response.tickets, response.page))
    }

    /// Fetches one page of the incremental ticket export.
    ///
    /// This performs no looping: callers follow `after_url` or
    /// [`IncrementalTickets::next_options`] until `end_of_stream` is set.
    pub async fn list_incremental_tickets(
        &self,
        opts: Option<&TicketListOptions>,
    ) -> Result<IncrementalTickets, ZendeskError> {
        let defaults = TicketListOptions::default();
        let path = add_options("/incremental/tickets.json", opts.unwrap_or(&defaults))?;

        let body = self.get(&path).await?;
        let export: IncrementalTickets = decode(&body)?;

        tracing::debug!(
            count = export.tickets.len(),
            end_of_stream = export.end_of_stream,
            "Fetched incremental ticket page"
        );

        Ok(export)
    }

    /// Gets a single ticket, optionally sideloading related records.
    ///
    /// The sideloaders' keys are sent as one `include` parameter in the
    /// order given. After the ticket decodes, every sideloader parses the
    /// same response body; the first failure aborts the call.
    ///
    /// # Errors
    ///
    /// Returns `ZendeskError::NotFound` if the ticket doesn't exist.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let mut users = UserSideLoader::new();
    /// let ticket = client.get_ticket(35436, &mut [&mut users]).await?;
    /// ```
    pub async fn get_ticket(
        &self,
        id: i64,
        sideloaders: &mut [&mut dyn SideLoader],
    ) -> Result<Ticket, ZendeskError> {
        let mut builder = IncludeBuilder::default();
        for loader in sideloaders.iter() {
            builder.add_key(loader.key());
        }

        let path = builder.path(&format!("/tickets/{}.json", id));
        let body = self.get(&path).await?;
        let response: TicketEnvelope = decode(&body)?;

        for loader in sideloaders.iter_mut() {
            loader.unmarshal(&body)?;
        }

        Ok(response.ticket)
    }

    /// Gets several tickets in one request.
    ///
    /// A single malformed ticket fails the whole batch.
    pub async fn get_multiple_tickets(&self, ids: &[i64]) -> Result<Vec<Ticket>, ZendeskError> {
        #[derive(Serialize)]
        struct Query {
            ids: String,
        }

        #[derive(Deserialize)]
        struct Response {
            #[serde(default, deserialize_with = "null_as_default")]
            tickets: Vec<Ticket>,
        }

        let query = Query {
            ids: ids
                .iter()
                .map(|id| id.to_string())
                .collect::<Vec<_>>()
                .join(","),
        };
        let path = add_options("/tickets/show_many.json", &query)?;

        let body = self.get(&path).await?;
        let response: Response = decode(&body)?;

        Ok(response.tickets)
    }

    /// Creates a ticket and returns the stored record, including its id.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let ticket = Ticket {
    ///     subject: Some("Printer not working".to_string()),
    ///     comment: Some(TicketComment::new("It is on fire.")),
    ///     ..Default::default()
    /// };
    /// let created = client.create_ticket(&ticket).await?;
    /// println!("Created ticket #{:?}", created.id);
    /// ```
    pub async fn create_ticket(&self, ticket: &Ticket) -> Result<Ticket, ZendeskError> {
        let body = self
            .post("/tickets.json", &TicketPayload { ticket })
            .await?;
        let response: TicketEnvelope = decode(&body)?;

        Ok(response.ticket)
    }

    /// Updates a ticket. Only the fields set on `ticket` are sent.
    pub async fn update_ticket(&self, id: i64, ticket: &Ticket) -> Result<Ticket, ZendeskError> {
        let path = format!("/tickets/{}.json", id);
        let body = self.put(&path, &TicketPayload { ticket }).await?;
        let response: TicketEnvelope = decode(&body)?;

        Ok(response.ticket)
    }

    // ========================================================================
    // Views
    // ========================================================================

    /// Lists all views, active and inactive.
    pub async fn list_views(&self) -> Result<(Vec<View>, Page), ZendeskError> {
        self.list_views_at("/views.json").await
    }

    /// Lists active views only.
    pub async fn list_active_views(&self) -> Result<(Vec<View>, Page), ZendeskError> {
        self.list_views_at("/views/active.json").await
    }

    async fn list_views_at(&self, path: &str) -> Result<(Vec<View>, Page), ZendeskError> {
        #[derive(Deserialize)]
        struct Response {
            #[serde(default, deserialize_with = "null_as_default")]
            views: Vec<View>,
            #[serde(flatten)]
            page: Page,
        }

        let body = self.get(path).await?;
        let response: Response = decode(&body)?;

        Ok((response.views, response.page))
    }

    /// Gets a single view.
    pub async fn get_view(&self, id: i64) -> Result<View, ZendeskError> {
        let body = self.get(&format!("/views/{}.json", id)).await?;
        let response: ViewEnvelope = decode(&body)?;

        Ok(response.view)
    }

    /// Gets the ticket count of a view.
    pub async fn get_view_count(&self, id: i64) -> Result<ViewCount, ZendeskError> {
        #[derive(Deserialize)]
        struct Response {
            view_count: ViewCount,
        }

        let body = self.get(&format!("/views/{}/count.json", id)).await?;
        let response: Response = decode(&body)?;

        Ok(response.view_count)
    }

    /// Creates a view and returns the stored record.
    pub async fn create_view(&self, view: &View) -> Result<View, ZendeskError> {
        let body = self.post("/views.json", &ViewPayload { view }).await?;
        let response: ViewEnvelope = decode(&body)?;

        Ok(response.view)
    }

    /// Updates a view. Only the fields set on `view` are sent.
    pub async fn update_view(&self, id: i64, view: &View) -> Result<View, ZendeskError> {
        let path = format!("/views/{}.json", id);
        let body = self.put(&path, &ViewPayload { view }).await?;
        let response: ViewEnvelope = decode(&body)?;

        Ok(response.view)
    }
}

/// Request envelope for ticket writes.
#[derive(Serialize)]
struct TicketPayload<'a> {
    ticket: &'a Ticket,
}

/// Response envelope for single-ticket endpoints.
#[derive(Deserialize)]
struct TicketEnvelope {
    ticket: Ticket,
}

/// Request envelope for view writes.
#[derive(Serialize)]
struct ViewPayload<'a> {
    view: &'a View,
}

/// Response envelope for single-view endpoints. Older accounts answer
/// writes with a capitalised key.
#[derive(Deserialize)]
struct ViewEnvelope {
    #[serde(alias = "View")]
    view: View,
}

/// Decodes a JSON response body.
fn decode<T: DeserializeOwned>(body: &[u8]) -> Result<T, ZendeskError> {
    Ok(serde_json::from_slice(body)?)
}

fn truncate_body(body: String) -> String {
    if body.len() <= MAX_ERROR_BODY_LEN {
        return body;
    }
    let mut end = MAX_ERROR_BODY_LEN;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...[truncated]", &body[..end])
}

/// Appends an options struct to `path` as a query string.
///
/// The options are serialized through `serde_json`; `null` and empty string
/// fields are skipped, arrays are joined with commas, and keys come out in
/// sorted order.
///
/// # Errors
///
/// Returns `ZendeskError::InvalidPath` if the options don't serialize to a
/// flat object.
pub(crate) fn add_options<T>(path: &str, opts: &T) -> Result<String, ZendeskError>
where
    T: Serialize + ?Sized,
{
    let fields = match serde_json::to_value(opts)? {
        serde_json::Value::Null => return Ok(path.to_string()),
        serde_json::Value::Object(fields) => fields,
        other => {
            return Err(ZendeskError::InvalidPath(format!(
                "query options must be an object, got {}",
                json_kind(&other)
            )))
        }
    };

    let mut pairs = Vec::with_capacity(fields.len());
    for (key, value) in fields {
        if let Some(rendered) = render_query_value(&key, value)? {
            pairs.push((key, rendered));
        }
    }

    Ok(append_query(path, &pairs))
}

fn render_query_value(
    key: &str,
    value: serde_json::Value,
) -> Result<Option<String>, ZendeskError> {
    use serde_json::Value;

    let rendered = match value {
        Value::Null => return Ok(None),
        Value::String(s) if s.is_empty() => return Ok(None),
        Value::String(s) => s,
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Array(items) => {
            let mut parts = Vec::with_capacity(items.len());
            for item in items {
                match render_query_value(key, item)? {
                    Some(part) => parts.push(part),
                    None => continue,
                }
            }
            if parts.is_empty() {
                return Ok(None);
            }
            parts.join(",")
        }
        Value::Object(_) => {
            return Err(ZendeskError::InvalidPath(format!(
                "query option {} cannot be a nested object",
                key
            )))
        }
    };

    Ok(Some(rendered))
}

/// Appends encoded `pairs` to `path`, respecting an existing query string.
fn append_query(path: &str, pairs: &[(String, String)]) -> String {
    if pairs.is_empty() {
        return path.to_string();
    }

    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (key, value) in pairs {
        serializer.append_pair(key, value);
    }
    let separator = if path.contains('?') { '&' } else { '?' };
    format!("{}{}{}", path, separator, serializer.finish())
}

/// Accumulates sideload keys into a single `include` parameter.
#[derive(Debug, Default)]
pub(crate) struct IncludeBuilder {
    keys: Vec<String>,
}

impl IncludeBuilder {
    /// Adds a sideload key; keys keep their insertion order.
    pub(crate) fn add_key(&mut self, key: impl Into<String>) {
        self.keys.push(key.into());
    }

    /// Returns `base` with `include=a,b,c` appended, or unchanged when no
    /// keys were added.
    pub(crate) fn path(&self, base: &str) -> String {
        if self.keys.is_empty() {
            return base.to_string();
        }
        append_query(base, &[("include".to_string(), self.keys.join(","))])
    }
}
