use super::assertions::{expect_status, parse_body};
use super::{Scenario, ScenarioContext, ScenarioFailure};
use crate::domain::StorySummary;
use reqwest::StatusCode;

pub struct ListAllStories;

#[async_trait::async_trait]
impl Scenario for ListAllStories {
    fn name(&self) -> &'static str {
        "list_all_stories_returns_non_empty_list"
    }

    async fn run(&self, ctx: &mut ScenarioContext<'_>) -> Result<(), ScenarioFailure> {
        let response = ctx.session().list_stories().await?;

        expect_status(&response, StatusCode::OK)?;
        let stories: Vec<StorySummary> = parse_body(&response)?;
        if stories.is_empty() {
            return Err(ScenarioFailure::EmptyCollection);
        }
        tracing::info!(count = stories.len(), "Listed story spoilers");
        Ok(())
    }
}
