use std::{
    collections::VecDeque,
    sync::{Arc, Mutex},
};

use async_trait::async_trait;
use db::DBService;
use generator::{
    CompletionClient, CompletionError, CompletionRequest, GenerationSettings, Generator,
};

use crate::AppState;

/// Completion client that replays canned replies and records every request.
#[derive(Default)]
pub struct FakeCompletionClient {
    replies: Mutex<VecDeque<Result<String, CompletionError>>>,
    calls: Mutex<Vec<CompletionRequest>>,
}

impl FakeCompletionClient {
    pub fn with_replies(replies: Vec<Result<String, CompletionError>>) -> Arc<Self> {
        Arc::new(Self {
            replies: Mutex::new(replies.into()),
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn calls(&self) -> Vec<CompletionRequest> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl CompletionClient for FakeCompletionClient {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, CompletionError> {
        self.calls.lock().unwrap().push(request.clone());
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Err(CompletionError::EmptyResponse))
    }
}

pub async fn migrated_db() -> DBService {
    DBService::new("sqlite::memory:").await.unwrap()
}

/// A reachable database with no schema, so every write fails.
pub async fn unmigrated_db() -> DBService {
    DBService {
        pool: sea_orm::Database::connect("sqlite::memory:").await.unwrap(),
    }
}

pub fn single_pass_settings() -> GenerationSettings {
    GenerationSettings {
        refine: false,
        ..GenerationSettings::default()
    }
}

pub fn app_state(
    db: DBService,
    client: Arc<FakeCompletionClient>,
    settings: GenerationSettings,
) -> AppState {
    AppState::new(db, Generator::new(client, settings))
}
