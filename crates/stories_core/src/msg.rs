#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Application started; fetch for the restored search term.
    Started,
    /// User edited the search input. Never fetches on its own.
    SearchChanged(String),
    /// The edit burst settled (debounce elapsed). Fetches only for a new term.
    SearchSettled,
    /// User explicitly submitted the search. Always fetches, so it doubles as retry.
    SearchCommitted,
    /// User dismissed a story.
    RemoveStory(crate::Story),
    /// Engine completion for a search request.
    FetchSucceeded {
        request_id: crate::RequestId,
        stories: Vec<crate::Story>,
    },
    /// Engine failure for a search request (transport or malformed response).
    FetchFailed { request_id: crate::RequestId },
}
