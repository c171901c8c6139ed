//! ResourceModel implementation for notification destinations.
//!
//! This module contains the [`ResourceModel`] implementation that lets a [`Destination`] be
//! reconciled by the generic [`ResourceClient`](crate::framework::ResourceClient).
//!
//! See the trait implementation on [`DestinationPayload`] for the per-action answers.

use super::model::Destination;
use super::queries;
use crate::framework::entity::{FRAGMENT, ID, LIST_QUERY_FILTER};
use crate::framework::{Action, ResourceModel, Variables};
use std::fmt::Display;
use tracing::debug;

/// One destination plus the siblings collected while listing.
#[derive(Debug, Clone, Default)]
pub struct DestinationPayload {
    model: Destination,
    models: Vec<Destination>,
}

impl DestinationPayload {
    pub fn new(model: Destination) -> Self {
        Self {
            model,
            models: Vec::new(),
        }
    }

    /// Minimal payload for a targeted read of an identifier discovered elsewhere.
    pub fn from_guid(guid: impl Display) -> Self {
        Self::new(Destination::with_identifier(guid.to_string()))
    }

    pub fn into_model(self) -> Destination {
        self.model
    }
}

impl ResourceModel for DestinationPayload {
    type Model = Destination;

    fn set_identifier(&mut self, identifier: Option<String>) {
        self.model.identifier = identifier;
    }

    fn identifier(&self) -> Option<&str> {
        self.model.identifier.as_deref()
    }

    fn resource_model(&self) -> &Destination {
        &self.model
    }

    fn resource_models(&self) -> &[Destination] {
        debug!(size = self.models.len(), models = ?self.models, "Returning resource models");
        &self.models
    }

    fn append_to_resource_models(&mut self, other: Self) {
        self.models.push(other.model);
    }

    fn new_model_from_guid(&self, guid: &dyn Display) -> Self {
        Self::from_guid(guid)
    }

    fn create_mutation(&self) -> &str {
        queries::CREATE_MUTATION
    }

    fn update_mutation(&self) -> &str {
        queries::UPDATE_MUTATION
    }

    fn delete_mutation(&self) -> &str {
        queries::DELETE_MUTATION
    }

    fn read_query(&self) -> &str {
        queries::READ_QUERY
    }

    fn list_query(&self) -> &str {
        queries::LIST_QUERY
    }

    fn graphql_fragment(&self) -> Option<&str> {
        self.model.fragment.as_deref()
    }

    /// Caller-supplied variables first, then the model's own fields on top.
    ///
    /// # Bindings
    /// - `ID`: only when the identifier is set
    /// - `FRAGMENT`: only when the fragment is set
    /// - `LISTQUERYFILTER`: always, empty when unset
    fn variables(&self) -> Variables {
        let mut vars = self.model.variables.clone().unwrap_or_default();

        if let Some(id) = &self.model.identifier {
            vars.insert(ID.to_string(), id.clone());
        }
        if let Some(fragment) = &self.model.fragment {
            vars.insert(FRAGMENT.to_string(), fragment.clone());
        }
        vars.insert(
            LIST_QUERY_FILTER.to_string(),
            self.model.list_query_filter.clone().unwrap_or_default(),
        );

        vars
    }

    fn error_key(&self) -> &str {
        "type"
    }

    /// Delete reports every removed identifier, so its payload is a list.
    fn result_key(&self, action: Action) -> &str {
        match action {
            Action::Delete => "ids",
            _ => "id",
        }
    }
}
