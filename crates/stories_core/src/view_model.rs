use crate::{FetchStatus, Story};

/// Everything the presentation layer needs for one render.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StoriesViewModel {
    pub search_term: String,
    pub visible: Vec<Story>,
    pub total_count: usize,
    pub is_loading: bool,
    pub is_error: bool,
    pub status: FetchStatus,
}
