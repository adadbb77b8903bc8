use super::assertions::{
    MessageExpectation, expect_body_contains, expect_message, expect_status, parse_body,
};
use super::{Scenario, ScenarioContext, ScenarioFailure};
use crate::domain::{StoryRequest, StoryResponse};
use reqwest::StatusCode;

pub const STORY_EDITED_PHRASE: &str = "Successfully edited";
pub const NO_SPOILERS_PHRASE: &str = "No spoilers...";

/// Edits the story captured by the create scenario.
pub struct EditExistingStory {
    story: StoryRequest,
}

impl EditExistingStory {
    pub fn new(story: StoryRequest) -> Self {
        Self { story }
    }
}

impl Default for EditExistingStory {
    fn default() -> Self {
        Self::new(StoryRequest {
            title: "edited title".into(),
            description: " edited description".into(),
            url: Some(String::new()),
        })
    }
}

#[async_trait::async_trait]
impl Scenario for EditExistingStory {
    fn name(&self) -> &'static str {
        "edit_existing_story_returns_ok"
    }

    async fn run(&self, ctx: &mut ScenarioContext<'_>) -> Result<(), ScenarioFailure> {
        let story_id = ctx.require_story_id()?;
        let response = ctx
            .session()
            .edit_story(story_id, None, &self.story)
            .await?;

        expect_status(&response, StatusCode::OK)?;
        let edited: StoryResponse = parse_body(&response)?;
        expect_message(
            edited.msg.as_deref(),
            MessageExpectation::Contains(STORY_EDITED_PHRASE),
        )
    }
}

/// Edits a story the API does not hold.
///
/// The path carries the captured id, which the delete scenario has removed by
/// the time this runs; `non_existing_story_id` goes out as the `storyId`
/// query parameter.
pub struct EditNonExistingStory {
    non_existing_story_id: String,
    story: StoryRequest,
}

impl EditNonExistingStory {
    pub fn new(non_existing_story_id: String) -> Self {
        Self {
            non_existing_story_id,
            story: StoryRequest {
                title: "edited non-existing".into(),
                description: "edited non existing".into(),
                url: Some(String::new()),
            },
        }
    }
}

#[async_trait::async_trait]
impl Scenario for EditNonExistingStory {
    fn name(&self) -> &'static str {
        "edit_non_existing_story_returns_not_found"
    }

    async fn run(&self, ctx: &mut ScenarioContext<'_>) -> Result<(), ScenarioFailure> {
        let story_id = ctx.require_story_id()?;
        let response = ctx
            .session()
            .edit_story(story_id, Some(&self.non_existing_story_id), &self.story)
            .await?;

        expect_status(&response, StatusCode::NOT_FOUND)?;
        expect_body_contains(&response, NO_SPOILERS_PHRASE)
    }
}
