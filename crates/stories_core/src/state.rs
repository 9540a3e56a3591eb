use crate::{filter, reduce, Action, Story, StoriesViewModel};

/// Token tying an engine completion to the request that produced it.
pub type RequestId = u64;

/// Coarse lifecycle derived from the fetch flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FetchStatus {
    #[default]
    Idle,
    Loading,
    Loaded,
    Errored,
}

/// Stories plus fetch flags. Only [`reduce`] changes it, which keeps
/// `is_loading` and `is_error` from ever being set together.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StoriesState {
    pub(crate) items: Vec<Story>,
    pub(crate) is_loading: bool,
    pub(crate) is_error: bool,
    pub(crate) has_loaded: bool,
}

impl StoriesState {
    pub fn new() -> Self {
        Self::default()
    }

    /// State after a successful fetch of `items`.
    pub fn loaded(items: Vec<Story>) -> Self {
        reduce(Self::new(), Action::Success(items))
    }

    pub fn items(&self) -> &[Story] {
        &self.items
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn is_error(&self) -> bool {
        self.is_error
    }

    pub fn status(&self) -> FetchStatus {
        if self.is_loading {
            FetchStatus::Loading
        } else if self.is_error {
            FetchStatus::Errored
        } else if self.has_loaded {
            FetchStatus::Loaded
        } else {
            FetchStatus::Idle
        }
    }
}

/// Application state: the live search term, the stories and the bookkeeping
/// needed to discard completions from superseded requests.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    search_term: String,
    committed_query: Option<String>,
    stories: StoriesState,
    in_flight: Option<RequestId>,
    last_request_id: RequestId,
    dirty: bool,
}

impl AppState {
    pub fn new(search_term: impl Into<String>) -> Self {
        Self {
            search_term: search_term.into(),
            ..Self::default()
        }
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// The query most recently acted on, if any.
    pub fn committed_query(&self) -> Option<&str> {
        self.committed_query.as_deref()
    }

    pub fn stories(&self) -> &StoriesState {
        &self.stories
    }

    /// The only request whose completion will still be applied.
    pub fn in_flight(&self) -> Option<RequestId> {
        self.in_flight
    }

    pub fn view(&self) -> StoriesViewModel {
        StoriesViewModel {
            search_term: self.search_term.clone(),
            visible: filter::visible(&self.stories.items, &self.search_term),
            total_count: self.stories.items.len(),
            is_loading: self.stories.is_loading,
            is_error: self.stories.is_error,
            status: self.stories.status(),
        }
    }

    /// Returns whether anything changed since the last call, and resets the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    /// Returns `false` when the term is unchanged.
    pub(crate) fn set_search_term(&mut self, term: String) -> bool {
        if self.search_term == term {
            return false;
        }
        self.search_term = term;
        self.dirty = true;
        true
    }

    pub(crate) fn dispatch(&mut self, action: Action) {
        let current = std::mem::take(&mut self.stories);
        self.stories = reduce(current, action);
        self.dirty = true;
    }

    /// Allocates a fresh token, superseding whatever was in flight.
    pub(crate) fn begin_request(&mut self, query: String) -> RequestId {
        self.last_request_id += 1;
        self.in_flight = Some(self.last_request_id);
        self.committed_query = Some(query);
        self.last_request_id
    }

    /// Returns `true` if `request_id` is the current request, retiring it.
    pub(crate) fn finish_request(&mut self, request_id: RequestId) -> bool {
        if self.in_flight == Some(request_id) {
            self.in_flight = None;
            true
        } else {
            false
        }
    }
}
