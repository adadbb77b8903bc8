mod access_token;
mod story;
mod story_id;

pub use access_token::AccessToken;
pub use story::{StoryRequest, StoryResponse, StorySummary};
pub use story_id::StoryId;
