//! The ordered story spoiler scenarios and the pipeline that runs them.
mod assertions;
mod create;
mod delete;
mod edit;
mod list;
mod pipeline;

pub use assertions::MessageExpectation;
pub use create::{CreateStoryWithoutRequiredFields, CreateValidStory};
pub use delete::{DeleteExistingStory, DeleteNonExistingStory};
pub use edit::{EditExistingStory, EditNonExistingStory};
pub use list::ListAllStories;
pub use pipeline::{Pipeline, ScenarioOutcome, SuiteReport};

use crate::configuration::SuiteSettings;
use crate::domain::StoryId;
use crate::session::Session;
use crate::telemetry::error_chain_fmt;
use reqwest::StatusCode;

/// State threaded through the pipeline: the shared session and the id slot
/// filled by the create scenario.
pub struct ScenarioContext<'a> {
    session: &'a Session,
    last_created_story_id: Option<StoryId>,
}

impl<'a> ScenarioContext<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self {
            session,
            last_created_story_id: None,
        }
    }

    pub fn session(&self) -> &'a Session {
        self.session
    }

    pub fn last_created_story_id(&self) -> Option<&StoryId> {
        self.last_created_story_id.as_ref()
    }

    pub fn record_created_story_id(&mut self, story_id: StoryId) {
        tracing::info!(%story_id, "Captured story id");
        self.last_created_story_id = Some(story_id);
    }

    /// The id captured earlier in the run, or a failure for scenarios that depend on it.
    pub fn require_story_id(&self) -> Result<&StoryId, ScenarioFailure> {
        self.last_created_story_id
            .as_ref()
            .ok_or(ScenarioFailure::MissingStoryId)
    }
}

#[async_trait::async_trait]
pub trait Scenario: Send + Sync {
    fn name(&self) -> &'static str;

    async fn run(&self, ctx: &mut ScenarioContext<'_>) -> Result<(), ScenarioFailure>;
}

#[derive(thiserror::Error)]
pub enum ScenarioFailure {
    #[error("Expected status code {expected}, got {actual}. Content: {body}")]
    UnexpectedStatus {
        expected: StatusCode,
        actual: StatusCode,
        body: String,
    },
    #[error("Expected the response to contain {phrase:?}. Content: {body}")]
    MissingPhrase { phrase: &'static str, body: String },
    #[error("Expected a message {expected}, got {actual:?}")]
    UnexpectedMessage {
        expected: MessageExpectation,
        actual: Option<String>,
    },
    #[error("Expected a non-empty list of story spoilers")]
    EmptyCollection,
    #[error("No story id was captured by an earlier scenario")]
    MissingStoryId,
    #[error("Failed to parse the response body. Content: {body}")]
    MalformedBody {
        #[source]
        source: serde_json::Error,
        body: String,
    },
    #[error("Failed to execute the request")]
    Transport(#[from] reqwest::Error),
}

impl std::fmt::Debug for ScenarioFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

/// The full story spoiler run, in the order the scenarios depend on each other.
pub fn story_spoiler_pipeline(settings: &SuiteSettings) -> Pipeline {
    Pipeline::new()
        .then(CreateValidStory::default())
        .then(EditExistingStory::default())
        .then(ListAllStories)
        .then(DeleteExistingStory)
        .then(CreateStoryWithoutRequiredFields::default())
        .then(EditNonExistingStory::new(settings.non_existing_story_id.clone()))
        .then(DeleteNonExistingStory::new(
            settings.non_existing_story_id.clone(),
        ))
}
