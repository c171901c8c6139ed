//! Represents one notification destination as the engine hands it over.
//!
//! # Resource Adapter
//! [`Destination`] is wrapped by [`DestinationPayload`](crate::destination::DestinationPayload),
//! which implements [`ResourceModel`](crate::framework::ResourceModel) on its behalf.
//!
//! Field names on the wire follow the resource schema's PascalCase properties.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Destination {
    /// Assigned by the remote system on create; immutable afterwards.
    #[serde(rename = "Id", default, skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,

    /// Pre-rendered GraphQL input fragment, embedded verbatim in create/update mutations.
    #[serde(rename = "Destination", default, skip_serializing_if = "Option::is_none")]
    pub fragment: Option<String>,

    /// Extra bindings merged into every template's variables.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variables: Option<HashMap<String, String>>,

    /// Filter expression used by list queries only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub list_query_filter: Option<String>,
}

impl Destination {
    /// A destination known only by its identifier.
    pub fn with_identifier(identifier: impl Into<String>) -> Self {
        Self {
            identifier: Some(identifier.into()),
            ..Default::default()
        }
    }
}
