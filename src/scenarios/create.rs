use super::assertions::{MessageExpectation, expect_message, expect_status, parse_body};
use super::{Scenario, ScenarioContext, ScenarioFailure};
use crate::domain::{StoryId, StoryRequest, StoryResponse};
use reqwest::StatusCode;

pub const STORY_CREATED_MESSAGE: &str = "Successfully created!";

/// Creates a story with every required field set and captures its id for the
/// scenarios that follow.
pub struct CreateValidStory {
    story: StoryRequest,
}

impl CreateValidStory {
    pub fn new(story: StoryRequest) -> Self {
        Self { story }
    }
}

impl Default for CreateValidStory {
    fn default() -> Self {
        Self::new(StoryRequest {
            title: "New".into(),
            description: "New description".into(),
            url: Some(String::new()),
        })
    }
}

#[async_trait::async_trait]
impl Scenario for CreateValidStory {
    fn name(&self) -> &'static str {
        "create_story_with_required_fields_returns_created"
    }

    async fn run(&self, ctx: &mut ScenarioContext<'_>) -> Result<(), ScenarioFailure> {
        let response = ctx.session().create_story(&self.story).await?;

        // Captured before any assertion can fail
        let created = response.json::<StoryResponse>().unwrap_or_default();
        if let Some(story_id) = created.story_id.and_then(|id| StoryId::parse(id).ok()) {
            ctx.record_created_story_id(story_id);
        }

        expect_status(&response, StatusCode::CREATED)?;
        let created: StoryResponse = parse_body(&response)?;
        expect_message(
            created.msg.as_deref(),
            MessageExpectation::Equals(STORY_CREATED_MESSAGE),
        )?;
        if ctx.last_created_story_id().is_none() {
            return Err(ScenarioFailure::MissingStoryId);
        }
        Ok(())
    }
}

/// Submits a story with blank title and description and no url.
pub struct CreateStoryWithoutRequiredFields {
    story: StoryRequest,
}

impl Default for CreateStoryWithoutRequiredFields {
    fn default() -> Self {
        Self {
            story: StoryRequest {
                title: String::new(),
                description: String::new(),
                url: None,
            },
        }
    }
}

#[async_trait::async_trait]
impl Scenario for CreateStoryWithoutRequiredFields {
    fn name(&self) -> &'static str {
        "create_story_without_required_fields_returns_bad_request"
    }

    async fn run(&self, ctx: &mut ScenarioContext<'_>) -> Result<(), ScenarioFailure> {
        let response = ctx.session().create_story(&self.story).await?;
        expect_status(&response, StatusCode::BAD_REQUEST)
    }
}
