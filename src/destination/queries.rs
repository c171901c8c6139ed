//! GraphQL documents for the AI notifications destination API.
//!
//! Placeholders use triple braces and are filled from
//! [`DestinationPayload::variables`](crate::framework::ResourceModel::variables) plus the
//! engine's `ACCOUNTID`. `NEXTCURSOR` is bound by the engine while paging.

pub const CREATE_MUTATION: &str = r#"
mutation {
  aiNotificationsCreateDestination(accountId: {{{ACCOUNTID}}}, {{{FRAGMENT}}} ){
    destination {
      id
    }
    error {
      ... on AiNotificationsConstraintsError {
        constraints {
          dependencies
          name
        }
      }
      ... on AiNotificationsDataValidationError {
        details
        fields {
          field
          message
        }
      }
      ... on AiNotificationsResponseError {
        description
        details
        type
      }
      ... on AiNotificationsSuggestionError {
        description
        details
        type
      }
    }
  }
}
"#;

pub const UPDATE_MUTATION: &str = r#"
mutation {
  aiNotificationsUpdateDestination(accountId: {{{ACCOUNTID}}}, {{{FRAGMENT}}}, destinationId: "{{{ID}}}") {
    destination {
      id
      name
      updatedAt
      updatedBy
    }
    error {
      ... on AiNotificationsConstraintsError {
        constraints {
          dependencies
          name
        }
      }
      ... on AiNotificationsDataValidationError {
        details
        fields {
          field
          message
        }
      }
      ... on AiNotificationsResponseError {
        description
        details
        type
      }
      ... on AiNotificationsSuggestionError {
        description
        details
        type
      }
    }
  }
}
"#;

// Delete reports a plain error and every removed id.
pub const DELETE_MUTATION: &str = r#"
mutation {
  aiNotificationsDeleteDestination(accountId: {{{ACCOUNTID}}}, destinationId: "{{{ID}}}") {
    error {
      description
      details
      type
    }
    ids
  }
}
"#;

pub const READ_QUERY: &str = r#"
{
    actor {
        account(id: {{{ACCOUNTID}}}) {
            aiNotifications {
                destinations(filters: {id: "{{{ID}}}"}) {
                    entities {
                        id
                        type
                    }
                    error {
                        description
                        details
                        type
                    }
                    nextCursor
                    totalCount
                }
            }
        }
    }
}
"#;

pub const LIST_QUERY: &str = r#"
{
    actor {
        account(id: {{{ACCOUNTID}}}) {
            aiNotifications {
                destinations (cursor: "{{{NEXTCURSOR}}}"){
                    entities {
                        id
                        type
                    }
                    error {
                        description
                        details
                        type
                    }
                    nextCursor
                    totalCount
                }
            }
        }
    }
}
"#;
