use notegate::application::{Notifier, RecordGateway, SearchGateway, Topics};
use notegate::domain::{Note, Timestamp};
use notegate::ports::Gateway;
use notegate::util::testing::{MockNoteService, MockSearcher, RecordingPublisher};
use std::sync::Arc;

pub type TestGateway = Gateway<Arc<MockNoteService>, Arc<MockSearcher>, Arc<RecordingPublisher>>;

/// Gateway wired to shared mocks that stay inspectable after the call
#[allow(dead_code)]
pub struct TestHarness {
    pub service: Arc<MockNoteService>,
    pub searcher: Arc<MockSearcher>,
    pub publisher: Arc<RecordingPublisher>,
    pub gateway: TestGateway,
}

impl TestHarness {
    pub fn new(service: MockNoteService, searcher: MockSearcher, publisher: RecordingPublisher) -> Self {
        let service = Arc::new(service);
        let searcher = Arc::new(searcher);
        let publisher = Arc::new(publisher);
        let gateway = Gateway::new(
            RecordGateway::new(service.clone(), Notifier::new(publisher.clone(), Topics::default())),
            SearchGateway::new(Some(searcher.clone())),
        );

        Self {
            service,
            searcher,
            publisher,
            gateway,
        }
    }

    #[allow(dead_code)]
    pub fn with_service(service: MockNoteService) -> Self {
        Self::new(service, MockSearcher::with_results(vec![]), RecordingPublisher::new())
    }
}

/// Sample notes shared across tests
#[allow(dead_code)]
pub mod sample_notes {
    use super::*;

    pub const CALLER: &str = "u@x.com";

    pub fn groceries() -> Note {
        Note {
            id: "1".to_string(),
            title: "Groceries".to_string(),
            body: "eggs, milk".to_string(),
            author: CALLER.to_string(),
            team: "home".to_string(),
            note_type: "list".to_string(),
            date_created: Timestamp::from_seconds(1_600_000_000),
            date_modified: Timestamp::from_seconds(1_600_000_500),
            ..Default::default()
        }
    }

    pub fn rust_talk() -> Note {
        Note {
            id: "2".to_string(),
            title: "Rust talk".to_string(),
            body: "ownership and borrowing".to_string(),
            author: "b@x.com".to_string(),
            team: "core".to_string(),
            note_type: "markdown".to_string(),
            tags: vec!["rust".to_string()],
            ..Default::default()
        }
    }
}
