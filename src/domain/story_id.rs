/// Server-assigned identifier of a story spoiler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoryId(String);

impl StoryId {
    pub fn parse(s: String) -> Result<StoryId, String> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err("The story id is empty.".to_string());
        }
        if trimmed.contains(['/', '?', '#']) {
            return Err(format!("{} is not usable as a path segment.", trimmed));
        }
        Ok(Self(trimmed.to_string()))
    }
}

impl AsRef<str> for StoryId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for StoryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}
