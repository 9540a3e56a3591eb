/// Identifier of a story as reported by the search source.
pub type StoryId = String;

/// A single story record. Never mutated once it has been received.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Story {
    pub id: StoryId,
    pub title: String,
    pub url: String,
    pub author: String,
    pub comment_count: u32,
    pub points: u32,
}

impl Story {
    /// Minimal constructor used where only identity and title matter.
    pub fn new(id: impl Into<StoryId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            ..Self::default()
        }
    }
}
