use proptest::prelude::*;
use stories_core::{reduce, update, Action, AppState, Msg, StoriesState, Story};

fn story() -> impl Strategy<Value = Story> {
    (0u8..6, "[a-zA-Z ]{0,8}").prop_map(|(id, title)| Story::new(id.to_string(), title))
}

fn action() -> impl Strategy<Value = Action> {
    prop_oneof![
        Just(Action::Init),
        Just(Action::Failure),
        prop::collection::vec(story(), 0..5).prop_map(Action::Success),
        story().prop_map(Action::Remove),
    ]
}

fn msg() -> impl Strategy<Value = Msg> {
    prop_oneof![
        Just(Msg::Started),
        Just(Msg::SearchSettled),
        Just(Msg::SearchCommitted),
        "[a-z]{0,3}".prop_map(Msg::SearchChanged),
        story().prop_map(Msg::RemoveStory),
        (0u64..8, prop::collection::vec(story(), 0..4))
            .prop_map(|(request_id, stories)| Msg::FetchSucceeded { request_id, stories }),
        (0u64..8).prop_map(|request_id| Msg::FetchFailed { request_id }),
    ]
}

proptest! {
    #[test]
    fn loading_and_error_never_coexist(actions in prop::collection::vec(action(), 0..40)) {
        let mut state = StoriesState::new();
        for action in actions {
            state = reduce(state, action);
            prop_assert!(!(state.is_loading() && state.is_error()));
        }
    }

    #[test]
    fn remove_shrinks_by_one_for_unique_ids(count in 1usize..10, pick in 0usize..10) {
        let items: Vec<Story> = (0..count)
            .map(|i| Story::new(i.to_string(), format!("story {i}")))
            .collect();
        let target = items[pick % count].clone();

        let next = reduce(StoriesState::loaded(items), Action::Remove(target.clone()));
        prop_assert_eq!(next.items().len(), count - 1);
        prop_assert!(next.items().iter().all(|s| s.id != target.id));
    }

    #[test]
    fn app_flags_stay_exclusive(msgs in prop::collection::vec(msg(), 0..40)) {
        let mut state = AppState::new("React");
        for msg in msgs {
            let (next, _effects) = update(state, msg);
            let view = next.view();
            prop_assert!(!(view.is_loading && view.is_error));
            prop_assert_eq!(view.is_loading, next.in_flight().is_some());
            state = next;
        }
    }
}
