use stories_logging::{stories_debug, stories_info};

use crate::{Action, AppState, Effect, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::Started | Msg::SearchCommitted => commit_search(&mut state),
        Msg::SearchSettled => {
            if state.committed_query() == Some(state.search_term()) {
                Vec::new()
            } else {
                commit_search(&mut state)
            }
        }
        Msg::SearchChanged(term) => {
            if state.set_search_term(term) {
                vec![Effect::PersistSearchTerm(state.search_term().to_owned())]
            } else {
                Vec::new()
            }
        }
        Msg::RemoveStory(story) => {
            state.dispatch(Action::Remove(story));
            Vec::new()
        }
        Msg::FetchSucceeded {
            request_id,
            stories,
        } => {
            if state.finish_request(request_id) {
                stories_info!("Request {} loaded {} stories", request_id, stories.len());
                state.dispatch(Action::Success(stories));
            } else {
                stories_debug!("Dropping stale success for request {}", request_id);
            }
            Vec::new()
        }
        Msg::FetchFailed { request_id } => {
            if state.finish_request(request_id) {
                stories_info!("Request {} failed", request_id);
                state.dispatch(Action::Failure);
            } else {
                stories_debug!("Dropping stale failure for request {}", request_id);
            }
            Vec::new()
        }
    };

    (state, effects)
}

/// Commits the live search term. An empty term is an idle no-op: no request,
/// no `Init`, and whatever is in flight stays authoritative.
fn commit_search(state: &mut AppState) -> Vec<Effect> {
    let query = state.search_term().to_owned();
    if query.is_empty() {
        return Vec::new();
    }
    let request_id = state.begin_request(query.clone());
    state.dispatch(Action::Init);
    stories_debug!("Request {} started for {:?}", request_id, query);
    vec![Effect::FetchStories { request_id, query }]
}
