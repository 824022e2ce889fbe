//! Data models for the Zendesk Support API.
//!
//! This module contains type definitions for tickets, custom fields,
//! views, the records that can be sideloaded next to a ticket, and the
//! pagination types shared by list endpoints.

mod common;
mod custom_field;
mod group;
mod organization;
mod ticket;
mod user;
mod view;

pub use common::*;
pub use custom_field::*;
pub use group::*;
pub use organization::*;
pub use ticket::*;
pub use user::*;
pub use view::*;

pub(crate) use common::null_as_default;
