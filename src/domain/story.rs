use serde::{Deserialize, Serialize};

/// Body of the create and edit calls.
#[derive(Debug, Clone, Serialize)]
pub struct StoryRequest {
    pub title: String,
    pub description: String,
    pub url: Option<String>,
}

/// Body returned by the create and edit calls.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoryResponse {
    #[serde(default)]
    pub msg: Option<String>,
    #[serde(default)]
    pub story_id: Option<String>,
}

/// One entry of `GET /api/Story/All`. Only the fields we look at are modelled.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StorySummary {
    #[serde(default)]
    pub story_id: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}
