//! Stories core: pure state machine, derived view and request bookkeeping.
mod action;
mod effect;
mod filter;
mod msg;
mod reduce;
mod state;
mod story;
mod update;
mod view_model;

pub use action::Action;
pub use effect::Effect;
pub use filter::visible;
pub use msg::Msg;
pub use reduce::reduce;
pub use state::{AppState, FetchStatus, RequestId, StoriesState};
pub use story::{Story, StoryId};
pub use update::update;
pub use view_model::StoriesViewModel;
