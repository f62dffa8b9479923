mod helpers;

use helpers::{sample_notes, TestHarness};
use notegate::application::{NoteArgs, NotesArgs};
use notegate::constants::{DEFAULT_DELETE_TOPIC, DEFAULT_UPDATE_TOPIC};
use notegate::domain::{BackendError, GatewayError, Note, RequestContext, Timestamp};
use notegate::ports::{NoteField, Operation, Resolved};
use notegate::util::testing::{
    MockCall, MockNoteService, MockSearcher, RecordedCall, RecordingPublisher, MOCK_ASSIGNED_ID,
};
use serde_json::json;
use std::time::Duration;

fn caller() -> RequestContext {
    RequestContext::for_caller(sample_notes::CALLER)
}

#[tokio::test]
async fn given_create_without_author_when_executing_then_backend_receives_caller_as_author() {
    // Arrange
    let harness = TestHarness::with_service(MockNoteService::builder().build());

    // Act
    let resolved = harness
        .gateway
        .execute(Operation::CreateNote, json!({ "title": "T", "body": "B" }), &caller())
        .await
        .expect("create should succeed");

    // Assert
    assert_eq!(
        harness.service.created_notes(),
        vec![Note {
            author: "u@x.com".to_string(),
            title: "T".to_string(),
            body: "B".to_string(),
            date_created: Timestamp::ZERO,
            date_modified: Timestamp::ZERO,
            ..Default::default()
        }]
    );
    match resolved {
        Resolved::One(note) => {
            assert_eq!(note.title(), "T");
            assert_eq!(note.id(), MOCK_ASSIGNED_ID);
        }
        other => panic!("Expected a single note, got {other:?}"),
    }
    assert!(harness.publisher.published().is_empty());
}

#[tokio::test]
async fn given_publish_failure_when_updating_then_error_but_update_is_kept() {
    // Arrange
    let harness = TestHarness::new(
        MockNoteService::builder().with_note(sample_notes::groceries()).build(),
        MockSearcher::with_results(vec![]),
        RecordingPublisher::new().failing_on(DEFAULT_UPDATE_TOPIC),
    );

    // Act
    let result = harness
        .gateway
        .execute(Operation::UpdateNote, json!({ "id": "1", "title": "T2" }), &caller())
        .await;

    // Assert
    assert!(matches!(result, Err(GatewayError::Publish { .. })));
    let listed = harness
        .gateway
        .notes(
            &caller(),
            NotesArgs {
                ids: Some(vec![Some("1".to_string())]),
                ..Default::default()
            },
        )
        .await
        .expect("list should succeed");
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].title(), "T2");
}

#[tokio::test]
async fn given_delete_when_succeeding_then_delete_channel_gets_exactly_one_publish() {
    // Arrange
    let harness = TestHarness::with_service(
        MockNoteService::builder().with_note(sample_notes::groceries()).build(),
    );

    // Act
    let resolved = harness
        .gateway
        .execute(Operation::DeleteNote, json!({ "id": "1" }), &caller())
        .await
        .expect("delete should succeed");

    // Assert
    assert_eq!(resolved.len(), 1);
    let published = harness.publisher.published();
    assert_eq!(published.len(), 1);
    assert_eq!(published[0].0, DEFAULT_DELETE_TOPIC);
    assert_eq!(published[0].1, sample_notes::groceries());
}

#[tokio::test]
async fn given_search_without_query_when_executing_then_empty_and_no_backend_call() {
    let harness = TestHarness::new(
        MockNoteService::builder().build(),
        MockSearcher::with_results(vec![sample_notes::rust_talk()]),
        RecordingPublisher::new(),
    );

    let resolved = harness
        .gateway
        .execute(Operation::Search, json!({ "team": "core" }), &RequestContext::new())
        .await
        .expect("search should succeed");

    assert!(resolved.is_empty());
    assert_eq!(harness.searcher.call_count(), 0);
}

#[tokio::test]
async fn given_notes_without_authors_when_executing_then_query_uses_caller() {
    let harness = TestHarness::with_service(
        MockNoteService::builder()
            .with_list_result(vec![sample_notes::rust_talk(), sample_notes::groceries()])
            .build(),
    );

    let resolved = harness
        .gateway
        .execute(
            Operation::Notes,
            json!({ "title": "Rust", "fromdate": 5.9, "todate": 10.1, "authors": null }),
            &caller(),
        )
        .await
        .expect("notes should succeed");

    let queries = harness.service.list_queries();
    assert_eq!(queries.len(), 1);
    assert_eq!(queries[0].authors, vec!["u@x.com".to_string()]);
    assert_eq!(queries[0].fromdate, Some(Timestamp::from_seconds(5)));
    assert_eq!(queries[0].todate, Some(Timestamp::from_seconds(10)));
    // backend order is kept
    match resolved {
        Resolved::Many(notes) => {
            let ids: Vec<&str> = notes.iter().map(|n| n.id()).collect();
            assert_eq!(ids, vec!["2", "1"]);
        }
        other => panic!("Expected a list, got {other:?}"),
    }
}

#[tokio::test]
async fn given_notes_without_caller_when_executing_then_missing_identity_and_no_backend_call() {
    let harness = TestHarness::with_service(MockNoteService::builder().build());

    let result = harness
        .gateway
        .execute(Operation::Notes, json!({}), &RequestContext::new())
        .await;

    assert!(matches!(result, Err(GatewayError::MissingCallerIdentity)));
    assert!(harness.service.calls().is_empty());
}

#[tokio::test]
async fn given_backend_failure_when_listing_then_other_requests_still_succeed() {
    // Arrange
    let failing = TestHarness::with_service(
        MockNoteService::builder()
            .with_failure(MockCall::List, BackendError::Unavailable("db".into()))
            .build(),
    );
    let healthy = TestHarness::with_service(
        MockNoteService::builder().with_note(sample_notes::groceries()).build(),
    );
    let ctx = caller();

    // Act
    let (failed, succeeded) = tokio::join!(
        failing.gateway.notes(&ctx, NotesArgs::default()),
        healthy.gateway.notes(&ctx, NotesArgs::default()),
    );

    // Assert
    assert!(matches!(failed, Err(GatewayError::Backend { operation: "listNotes", .. })));
    assert_eq!(succeeded.expect("healthy list").len(), 1);
}

#[tokio::test]
async fn given_slow_backend_when_deadline_passes_then_deadline_exceeded() {
    let harness = TestHarness::with_service(
        MockNoteService::builder()
            .with_delay(Duration::from_millis(200))
            .build(),
    );
    let ctx = caller().with_timeout(Duration::from_millis(10));

    let result = harness.gateway.execute(Operation::CreateNote, json!({}), &ctx).await;

    assert!(matches!(result, Err(GatewayError::DeadlineExceeded)));
    assert!(harness.publisher.published().is_empty());
}

#[tokio::test]
async fn given_update_without_author_when_executing_then_caller_is_author() {
    let harness = TestHarness::with_service(
        MockNoteService::builder().with_note(sample_notes::groceries()).build(),
    );

    harness
        .gateway
        .update_note(
            &caller(),
            NoteArgs {
                id: Some("1".to_string()),
                ..Default::default()
            },
        )
        .await
        .expect("update should succeed");

    match &harness.service.calls()[0] {
        RecordedCall::Update(note) => assert_eq!(note.author, "u@x.com"),
        other => panic!("Expected update call, got {other:?}"),
    }
}

#[tokio::test]
async fn given_delete_args_with_link_when_executing_then_payload_omits_link() {
    let harness = TestHarness::with_service(
        MockNoteService::builder().with_note(sample_notes::groceries()).build(),
    );

    harness
        .gateway
        .execute(
            Operation::DeleteNote,
            json!({ "id": "1", "link": "https://example.com", "team": "home", "dateCreated": "12" }),
            &caller(),
        )
        .await
        .expect("delete should succeed");

    match &harness.service.calls()[0] {
        RecordedCall::Delete(note) => {
            assert_eq!(note.link, "");
            assert_eq!(note.team, "");
            assert!(note.tags.is_empty());
            assert_eq!(note.date_created, Timestamp::from_seconds(12));
        }
        other => panic!("Expected delete call, got {other:?}"),
    }
}

#[tokio::test]
async fn given_failed_operation_when_responding_then_envelope_carries_error() {
    let harness = TestHarness::with_service(
        MockNoteService::builder()
            .with_failure(MockCall::Create, BackendError::Other("rejected".into()))
            .build(),
    );

    let response = harness
        .gateway
        .respond(Operation::CreateNote, json!({ "title": "T" }), None, &caller())
        .await;

    assert!(!response.is_ok());
    assert_eq!(response.data["createNote"], serde_json::Value::Null);
    assert_eq!(response.errors[0].code, "BACKEND_FAILURE");
}

#[tokio::test]
async fn given_field_selection_when_responding_then_projects_selected_fields() {
    let harness = TestHarness::with_service(
        MockNoteService::builder().with_note(sample_notes::rust_talk()).build(),
    );

    let response = harness
        .gateway
        .respond(
            Operation::Notes,
            json!({ "authors": ["b@x.com", null] }),
            Some(&[NoteField::Id, NoteField::Tags][..]),
            &caller(),
        )
        .await;

    assert!(response.is_ok());
    assert_eq!(response.data["notes"], json!([{ "id": "2", "tags": [] }]));
}

#[tokio::test]
async fn given_bad_arguments_when_responding_then_invalid_arguments() {
    let harness = TestHarness::with_service(MockNoteService::builder().build());

    let response = harness
        .gateway
        .respond(Operation::UpdateNote, json!({ "dateCreated": "soon" }), None, &caller())
        .await;

    assert_eq!(response.errors[0].code, "INVALID_ARGUMENTS");
    assert!(harness.service.calls().is_empty());
}

#[tokio::test]
async fn given_create_with_team_and_tags_when_executing_then_backend_receives_both() {
    let harness = TestHarness::with_service(MockNoteService::builder().build());

    harness
        .gateway
        .execute(
            Operation::CreateNote,
            json!({ "title": "T", "team": "core", "tags": ["a", null, "b"] }),
            &caller(),
        )
        .await
        .expect("create should succeed");

    let created = harness.service.created_notes();
    assert_eq!(created.len(), 1);
    assert_eq!(created[0].team, "core");
    assert_eq!(created[0].tags, vec!["a".to_string(), "b".to_string()]);
}

#[tokio::test]
async fn given_update_with_tags_when_executing_then_backend_receives_tags() {
    let harness = TestHarness::with_service(
        MockNoteService::builder().with_note(sample_notes::groceries()).build(),
    );

    harness
        .gateway
        .execute(
            Operation::UpdateNote,
            json!({ "id": "1", "team": "home", "tags": [null, "weekly"] }),
            &caller(),
        )
        .await
        .expect("update should succeed");

    match &harness.service.calls()[0] {
        RecordedCall::Update(note) => {
            assert_eq!(note.team, "home");
            assert_eq!(note.tags, vec!["weekly".to_string()]);
        }
        other => panic!("Expected update call, got {other:?}"),
    }
}

#[tokio::test]
async fn given_notes_with_team_when_executing_then_query_carries_team() {
    let harness = TestHarness::with_service(MockNoteService::builder().build());

    harness
        .gateway
        .execute(Operation::Notes, json!({ "team": "core" }), &caller())
        .await
        .expect("notes should succeed");

    let queries = harness.service.list_queries();
    assert_eq!(queries.len(), 1);
    assert_eq!(queries[0].team, "core");
}
