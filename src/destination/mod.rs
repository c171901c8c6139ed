//! # Notification Destination Adapter
//!
//! This module implements the AI notifications *destination* resource on top of the generic
//! [`framework`](crate::framework).
//!
//! ## Structure
//!
//! - [`model`] - [`Destination`], the data shape of one resource instance
//! - [`queries`] - the five GraphQL documents, one per lifecycle action
//! - [`payload`] - [`DestinationPayload`], the [`ResourceModel`](crate::framework::ResourceModel)
//!   implementation
//! - [`new()`] - Factory function wrapping a model
//!
//! ## Per-action contract
//!
//! | Action | Template | Required bindings | Result key |
//! |--------|----------|-------------------|------------|
//! | Create | [`queries::CREATE_MUTATION`] | `ACCOUNTID`, `FRAGMENT` | `id` |
//! | Read | [`queries::READ_QUERY`] | `ACCOUNTID`, `ID` | entities |
//! | Update | [`queries::UPDATE_MUTATION`] | `ACCOUNTID`, `FRAGMENT`, `ID` | `id` |
//! | Delete | [`queries::DELETE_MUTATION`] | `ACCOUNTID`, `ID` | `ids` |
//! | List | [`queries::LIST_QUERY`] | `ACCOUNTID`, `NEXTCURSOR` | entities |
//!
//! Every action uses `type` as the error key and asks for a propagation delay, since the
//! backing store is eventually consistent.
//!
//! ## Usage
//!
//! ```rust
//! use destination_adapter::destination::{self, Destination};
//! use destination_adapter::framework::ResourceModel;
//!
//! let payload = destination::new(Destination {
//!     fragment: Some("destination: {name: \"pager\", type: WEBHOOK}".into()),
//!     ..Default::default()
//! });
//!
//! let vars = payload.variables();
//! assert_eq!(vars["LISTQUERYFILTER"], "");
//! assert!(!vars.contains_key("ID"));
//! ```

pub mod model;
pub mod payload;
pub mod queries;

pub use model::*;
pub use payload::*;

/// Resource type name registered with the engine.
pub const TYPE_NAME: &str = "NewRelic::Observability::AINotificationsDestination";

/// Wraps a model in a fresh adapter for one action cycle.
pub fn new(model: Destination) -> DestinationPayload {
    DestinationPayload::new(model)
}
