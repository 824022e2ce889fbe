//! Sideloading of related records.
//!
//! Zendesk can embed related records next to the primary resource when
//! the request carries `include=users,groups,...`. Each [`SideLoader`]
//! names the key it wants included and, once the primary resource has
//! been decoded, parses its own records out of the same response body.
//!
//! # Example
//!
//! ```ignore
//! let mut users = UserSideLoader::new();
//! let mut groups = GroupSideLoader::new();
//! let ticket = client.get_ticket(42, &mut [&mut users, &mut groups]).await?;
//! for user in users.users() {
//!     println!("{}", user.display_name());
//! }
//! ```

use serde::Deserialize;

use crate::error::ZendeskError;
use crate::models::{null_as_default, Group, Organization, User};

/// A plug-in that requests and extracts one kind of related record.
pub trait SideLoader: Send {
    /// The value added to the `include` query parameter.
    fn key(&self) -> &str;

    /// Parses this loader's records from the raw response body.
    ///
    /// # Errors
    ///
    /// Returns `ZendeskError::Serialization` if the sideloaded records are
    /// malformed. A missing key is not an error.
    fn unmarshal(&mut self, body: &[u8]) -> Result<(), ZendeskError>;
}

/// Sideloads the users referenced by a ticket (requester, submitter,
/// assignee, CCs).
#[derive(Debug, Clone, Default)]
pub struct UserSideLoader {
    users: Vec<User>,
}

impl UserSideLoader {
    /// Creates an empty loader.
    pub fn new() -> Self {
        Self::default()
    }

    /// Users found in the last response.
    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// Consumes the loader, returning the users.
    pub fn into_users(self) -> Vec<User> {
        self.users
    }
}

impl SideLoader for UserSideLoader {
    fn key(&self) -> &str {
        "users"
    }

    fn unmarshal(&mut self, body: &[u8]) -> Result<(), ZendeskError> {
        #[derive(Deserialize)]
        struct Payload {
            #[serde(default, deserialize_with = "null_as_default")]
            users: Vec<User>,
        }

        let payload: Payload = serde_json::from_slice(body)?;
        tracing::debug!(count = payload.users.len(), "Sideloaded users");
        self.users = payload.users;
        Ok(())
    }
}

/// Sideloads the group a ticket is assigned to.
#[derive(Debug, Clone, Default)]
pub struct GroupSideLoader {
    groups: Vec<Group>,
}

impl GroupSideLoader {
    /// Creates an empty loader.
    pub fn new() -> Self {
        Self::default()
    }

    /// Groups found in the last response.
    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    /// Consumes the loader, returning the groups.
    pub fn into_groups(self) -> Vec<Group> {
        self.groups
    }
}

impl SideLoader for GroupSideLoader {
    fn key(&self) -> &str {
        "groups"
    }

    fn unmarshal(&mut self, body: &[u8]) -> Result<(), ZendeskError> {
        #[derive(Deserialize)]
        struct Payload {
            #[serde(default, deserialize_with = "null_as_default")]
            groups: Vec<Group>,
        }

        let payload: Payload = serde_json::from_slice(body)?;
        tracing::debug!(count = payload.groups.len(), "Sideloaded groups");
        self.groups = payload.groups;
        Ok(())
    }
}

/// Sideloads the organization of a ticket's requester.
#[derive(Debug, Clone, Default)]
pub struct OrganizationSideLoader {
    organizations: Vec<Organization>,
}

impl OrganizationSideLoader {
    /// Creates an empty loader.
    pub fn new() -> Self {
        Self::default()
    }

    /// Organizations found in the last response.
    pub fn organizations(&self) -> &[Organization] {
        &self.organizations
    }

    /// Consumes the loader, returning the organizations.
    pub fn into_organizations(self) -> Vec<Organization> {
        self.organizations
    }
}

impl SideLoader for OrganizationSideLoader {
    fn key(&self) -> &str {
        "organizations"
    }

    fn unmarshal(&mut self, body: &[u8]) -> Result<(), ZendeskError> {
        #[derive(Deserialize)]
        struct Payload {
            #[serde(default, deserialize_with = "null_as_default")]
            organizations: Vec<Organization>,
        }

        let payload: Payload = serde_json::from_slice(body)?;
        tracing::debug!(count = payload.organizations.len(), "Sideloaded organizations");
        self.organizations = payload.organizations;
        Ok(())
    }
}
