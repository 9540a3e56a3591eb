use crate::RequestId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Start an asynchronous search. The completion must echo `request_id`.
    FetchStories { request_id: RequestId, query: String },
    /// Store the current search term as the user's preference.
    PersistSearchTerm(String),
}
