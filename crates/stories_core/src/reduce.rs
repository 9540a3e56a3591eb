use crate::{Action, StoriesState};

/// Pure reducer: computes the next fetch state from the current one.
///
/// `Init` and `Failure` leave the collection alone, so stale stories stay
/// displayable while a refetch is pending or after it failed. `Success`
/// replaces the collection outright; `Remove` filters it by id.
pub fn reduce(mut state: StoriesState, action: Action) -> StoriesState {
    match action {
        Action::Init => {
            state.is_loading = true;
            state.is_error = false;
        }
        Action::Success(payload) => {
            state.is_loading = false;
            state.is_error = false;
            state.has_loaded = true;
            state.items = payload;
        }
        Action::Failure => {
            state.is_loading = false;
            state.is_error = true;
        }
        Action::Remove(target) => {
            state.items.retain(|story| story.id != target.id);
        }
    }
    state
}
