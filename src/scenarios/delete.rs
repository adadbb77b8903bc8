use super::assertions::{expect_body_contains, expect_status};
use super::{Scenario, ScenarioContext, ScenarioFailure};
use reqwest::StatusCode;

pub const STORY_DELETED_PHRASE: &str = "Deleted successfully";
pub const UNABLE_TO_DELETE_PHRASE: &str = "Unable to delete this story spoiler!";

/// Deletes the story captured by the create scenario.
pub struct DeleteExistingStory;

#[async_trait::async_trait]
impl Scenario for DeleteExistingStory {
    fn name(&self) -> &'static str {
        "delete_existing_story_returns_ok"
    }

    async fn run(&self, ctx: &mut ScenarioContext<'_>) -> Result<(), ScenarioFailure> {
        let story_id = ctx.require_story_id()?;
        tracing::info!(%story_id, "Deleting story");
        let response = ctx.session().delete_story(story_id, None).await?;

        expect_status(&response, StatusCode::OK)?;
        expect_body_contains(&response, STORY_DELETED_PHRASE)
    }
}

/// Deletes a story the API does not hold. Same request shape as
/// [`super::EditNonExistingStory`].
pub struct DeleteNonExistingStory {
    non_existing_story_id: String,
}

impl DeleteNonExistingStory {
    pub fn new(non_existing_story_id: String) -> Self {
        Self {
            non_existing_story_id,
        }
    }
}

#[async_trait::async_trait]
impl Scenario for DeleteNonExistingStory {
    fn name(&self) -> &'static str {
        "delete_non_existing_story_returns_bad_request"
    }

    async fn run(&self, ctx: &mut ScenarioContext<'_>) -> Result<(), ScenarioFailure> {
        let story_id = ctx.require_story_id()?;
        let response = ctx
            .session()
            .delete_story(story_id, Some(&self.non_existing_story_id))
            .await?;

        expect_status(&response, StatusCode::BAD_REQUEST)?;
        expect_body_contains(&response, UNABLE_TO_DELETE_PHRASE)
    }
}
