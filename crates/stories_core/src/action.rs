use crate::Story;

/// The closed vocabulary understood by [`crate::reduce`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// A fetch has started.
    Init,
    /// A fetch finished; the payload replaces the collection wholesale.
    Success(Vec<Story>),
    /// A fetch failed; previously loaded stories are kept.
    Failure,
    /// Drop every story sharing the target's id.
    Remove(Story),
}
