use destination_adapter::destination::{Destination, DestinationPayload};
use destination_adapter::framework::mock::MockGraphQLClient;
use destination_adapter::framework::{ClientConfig, FrameworkError, ResourceClient, ResourceModel};
use destination_adapter::lifecycle::setup_tracing;
use serde_json::{json, Value};
use std::time::{Duration, Instant};

fn destinations_page(ids: &[&str], next_cursor: Value) -> Value {
    let entities: Vec<Value> = ids
        .iter()
        .map(|id| json!({ "id": id, "type": "WEBHOOK" }))
        .collect();
    json!({
        "actor": { "account": { "aiNotifications": { "destinations": {
            "entities": entities,
            "error": null,
            "nextCursor": next_cursor,
            "totalCount": ids.len()
        }}}}
    })
}

/// Full lifecycle of one destination against a scripted API.
#[tokio::test]
async fn test_destination_full_lifecycle() {
    let _ = setup_tracing();

    let mut mock = MockGraphQLClient::new();
    mock.expect_execute()
        .containing("aiNotificationsCreateDestination(accountId: 1234, destination: {name: \"d1\"} )")
        .return_ok(json!({
            "aiNotificationsCreateDestination": {
                "destination": { "id": "d-1" },
                "error": null
            }
        }));
    mock.expect_execute()
        .containing("destinations(filters: {id: \"d-1\"})")
        .return_ok(destinations_page(&["d-1"], Value::Null));
    mock.expect_execute()
        .containing("destinationId: \"d-1\"")
        .return_ok(json!({
            "aiNotificationsUpdateDestination": {
                "destination": { "id": "d-1", "name": "d2", "updatedAt": "2024-01-01", "updatedBy": 7 },
                "error": null
            }
        }));
    mock.expect_execute()
        .containing("aiNotificationsDeleteDestination(accountId: 1234, destinationId: \"d-1\")")
        .return_ok(json!({
            "aiNotificationsDeleteDestination": { "error": null, "ids": ["d-1"] }
        }));

    let client = ResourceClient::new(mock.client(), ClientConfig::new(1234));

    // 1. Create
    let mut payload = DestinationPayload::new(Destination {
        fragment: Some("destination: {name: \"d1\"}".into()),
        ..Default::default()
    });
    let id = client.create(&mut payload).await.expect("create failed");
    assert_eq!(id, "d-1");
    assert_eq!(payload.identifier(), Some("d-1"));

    // 2. Read
    let found = client.read(&payload).await.expect("read failed");
    assert_eq!(found, Some(json!({ "id": "d-1", "type": "WEBHOOK" })));

    // 3. Update
    let mut model = payload.into_model();
    model.fragment = Some("destination: {name: \"d2\"}".into());
    let payload = DestinationPayload::new(model);
    client.update(&payload).await.expect("update failed");

    // 4. Delete
    let deleted = client.delete(&payload).await.expect("delete failed");
    assert_eq!(deleted, vec!["d-1".to_string()]);

    let documents = mock.documents();
    assert_eq!(documents.len(), 4);
    assert!(documents.iter().all(|doc| !doc.contains("{{{")));
    mock.verify();
}

#[tokio::test]
async fn test_list_traverses_pages_in_order() {
    let mut mock = MockGraphQLClient::new();
    mock.expect_execute()
        .containing("cursor: \"\"")
        .return_ok(destinations_page(&["a", "b"], json!("c1")));
    mock.expect_execute()
        .containing("cursor: \"c1\"")
        .return_ok(destinations_page(&["c"], json!("")));

    let client = ResourceClient::new(mock.client(), ClientConfig::new(1));
    let mut payload = DestinationPayload::default();

    let count = client.list(&mut payload).await.expect("list failed");
    assert_eq!(count, 3);

    let ids: Vec<_> = payload
        .resource_models()
        .iter()
        .map(|m| m.identifier.clone().unwrap())
        .collect();
    assert_eq!(ids, vec!["a", "b", "c"]);
    assert!(payload
        .resource_models()
        .iter()
        .all(|m| m.fragment.is_none() && m.variables.is_none()));
    mock.verify();
}

#[tokio::test]
async fn test_list_stops_at_page_limit() {
    let mut mock = MockGraphQLClient::new();
    mock.expect_execute()
        .return_ok(destinations_page(&["a"], json!("c1")));

    let client = ResourceClient::new(mock.client(), ClientConfig::new(1).with_max_pages(1));
    let mut payload = DestinationPayload::default();

    let result = client.list(&mut payload).await;
    assert_eq!(result, Err(FrameworkError::PageLimitExceeded(1)));
    assert_eq!(payload.resource_models().len(), 1);
    mock.verify();
}

#[tokio::test]
async fn test_create_surfaces_validation_error() {
    let mut mock = MockGraphQLClient::new();
    mock.expect_execute().return_ok(json!({
        "aiNotificationsCreateDestination": {
            "destination": null,
            "error": {
                "details": "invalid destination",
                "fields": [{ "field": "properties", "message": "url is required" }]
            }
        }
    }));

    let client = ResourceClient::new(mock.client(), ClientConfig::new(1));
    let mut payload = DestinationPayload::new(Destination {
        fragment: Some("destination: {}".into()),
        ..Default::default()
    });

    match client.create(&mut payload).await {
        Err(FrameworkError::Validation { details, fields }) => {
            assert_eq!(details, "invalid destination");
            assert_eq!(fields[0].message, "url is required");
        }
        other => panic!("unexpected result: {:?}", other),
    }
    assert_eq!(payload.identifier(), None);
    mock.verify();
}

#[tokio::test]
async fn test_read_classifies_query_error() {
    let mut mock = MockGraphQLClient::new();
    mock.expect_execute().return_ok(json!({
        "actor": { "account": { "aiNotifications": { "destinations": {
            "entities": [],
            "error": { "description": "Access denied", "details": "", "type": "UNAUTHORIZED" },
            "nextCursor": null,
            "totalCount": 0
        }}}}
    }));

    let client = ResourceClient::new(mock.client(), ClientConfig::new(1));
    let payload = DestinationPayload::from_guid("d-9");

    match client.read(&payload).await {
        Err(FrameworkError::Api { kind, .. }) => assert_eq!(kind, "UNAUTHORIZED"),
        other => panic!("unexpected result: {:?}", other),
    }
    mock.verify();
}

#[tokio::test]
async fn test_read_of_missing_destination() {
    let mut mock = MockGraphQLClient::new();
    mock.expect_execute()
        .return_ok(destinations_page(&[], Value::Null));

    let client = ResourceClient::new(mock.client(), ClientConfig::new(1));
    let found = client
        .read(&DestinationPayload::from_guid("gone"))
        .await
        .unwrap();
    assert_eq!(found, None);
    mock.verify();
}

#[tokio::test]
async fn test_actions_without_identifier_send_nothing() {
    let mock = MockGraphQLClient::new();
    let client = ResourceClient::new(mock.client(), ClientConfig::new(1));
    let payload = DestinationPayload::default();

    assert!(matches!(
        client.read(&payload).await,
        Err(FrameworkError::MissingIdentifier { .. })
    ));
    assert!(matches!(
        client.update(&payload).await,
        Err(FrameworkError::MissingIdentifier { .. })
    ));
    assert!(matches!(
        client.delete(&payload).await,
        Err(FrameworkError::MissingIdentifier { .. })
    ));
    assert!(mock.documents().is_empty());
}

#[tokio::test]
async fn test_update_without_fragment_is_a_render_error() {
    let mock = MockGraphQLClient::new();
    let client = ResourceClient::new(mock.client(), ClientConfig::new(1));

    let result = client.update(&DestinationPayload::from_guid("d-1")).await;
    assert_eq!(result, Err(FrameworkError::MissingBinding("FRAGMENT".into())));
    assert!(mock.documents().is_empty());
}

#[tokio::test]
async fn test_transport_error_is_propagated() {
    let mut mock = MockGraphQLClient::new();
    mock.expect_execute()
        .return_err(FrameworkError::Transport("connection reset".into()));

    let client = ResourceClient::new(mock.client(), ClientConfig::new(1));
    let result = client.delete(&DestinationPayload::from_guid("d-1")).await;
    assert_eq!(result, Err(FrameworkError::Transport("connection reset".into())));
    mock.verify();
}

#[tokio::test]
async fn test_write_waits_for_propagation() {
    let mut mock = MockGraphQLClient::new();
    mock.expect_execute().return_ok(json!({
        "aiNotificationsDeleteDestination": { "error": null, "ids": ["d-1"] }
    }));

    let config = ClientConfig::new(1).with_propagation_delay(Duration::from_millis(20));
    let client = ResourceClient::new(mock.client(), config);

    let started = Instant::now();
    client
        .delete(&DestinationPayload::from_guid("d-1"))
        .await
        .unwrap();
    assert!(started.elapsed() >= Duration::from_millis(20));
    mock.verify();
}

#[tokio::test]
async fn test_caller_variables_reach_the_document() {
    let mut mock = MockGraphQLClient::new();
    mock.expect_execute()
        .containing("accountId: 999")
        .return_ok(json!({
            "aiNotificationsDeleteDestination": { "error": null, "ids": ["d-1"] }
        }));

    let client = ResourceClient::new(mock.client(), ClientConfig::new(1));
    let payload = DestinationPayload::new(Destination {
        identifier: Some("d-1".into()),
        variables: Some([("ACCOUNTID".to_string(), "999".to_string())].into()),
        ..Default::default()
    });

    client.delete(&payload).await.unwrap();
    mock.verify();
}
