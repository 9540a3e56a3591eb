use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use stories_core::{update, AppState, Msg, StoriesViewModel, Story};
use stories_engine::{
    sample_hits, EngineHandle, PersistedPreference, PreferenceStore, RonPreferenceStore,
    SimulatedFetcher,
};
use stories_logging::stories_info;

use crate::debounce::Debouncer;
use crate::effects::EffectRunner;
use crate::AppConfig;

const IDLE_POLL: Duration = Duration::from_millis(10);

/// Owns the application state and is the single place where messages are
/// applied, so every state change goes through [`update`].
pub struct StoriesApp {
    state: AppState,
    effects: EffectRunner,
    debouncer: Debouncer,
}

impl StoriesApp {
    /// Restores the search term from `store` and fires the startup search.
    pub fn new(config: &AppConfig, engine: EngineHandle, store: Arc<dyn PreferenceStore>) -> Self {
        let search = PersistedPreference::new(store, config.search_key.clone());
        let term = search.load_or(&config.default_search);
        stories_info!("Starting with search term {:?}", term);

        let mut app = Self {
            state: AppState::new(term),
            effects: EffectRunner::new(engine, search),
            debouncer: Debouncer::new(config.debounce),
        };
        app.dispatch(Msg::Started);
        app
    }

    pub fn from_config(config: &AppConfig) -> Self {
        let engine = if config.simulated {
            let fetcher = SimulatedFetcher::new(sample_hits()).with_delay(Duration::from_millis(300));
            EngineHandle::with_fetcher(Arc::new(fetcher))
        } else {
            EngineHandle::new(config.fetch.clone())
        };
        let store = Arc::new(RonPreferenceStore::open(config.state_dir.clone()));
        Self::new(config, engine, store)
    }

    pub fn view(&self) -> StoriesViewModel {
        self.state.view()
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn on_search_change(&mut self, text: impl Into<String>) {
        self.debouncer.touch(Instant::now());
        self.dispatch(Msg::SearchChanged(text.into()));
    }

    pub fn on_commit_search(&mut self) {
        self.debouncer.cancel();
        self.dispatch(Msg::SearchCommitted);
    }

    pub fn on_remove(&mut self, story: &Story) {
        self.dispatch(Msg::RemoveStory(story.clone()));
    }

    /// Applies settled edits and finished requests without blocking.
    /// Returns whether anything visible changed.
    pub fn pump(&mut self) -> bool {
        if self.debouncer.poll(Instant::now()) {
            self.dispatch(Msg::SearchSettled);
        }
        while let Some(msg) = self.effects.try_next() {
            self.dispatch(msg);
        }
        self.state.consume_dirty()
    }

    /// Pumps until no edit is pending and no request is in flight, or until
    /// `timeout` runs out. Returns `true` if it got there in time.
    pub fn settle(&mut self, timeout: Duration) -> bool {
        let deadline = Instant::now() + timeout;
        loop {
            self.pump();
            if !self.debouncer.is_pending() && self.state.in_flight().is_none() {
                return true;
            }
            let now = Instant::now();
            if now >= deadline {
                return false;
            }
            if self.debouncer.is_pending() {
                thread::sleep(IDLE_POLL.min(deadline - now));
            } else if let Some(msg) = self.effects.next_timeout(IDLE_POLL.min(deadline - now)) {
                self.dispatch(msg);
            }
        }
    }

    fn dispatch(&mut self, msg: Msg) {
        let state = std::mem::take(&mut self.state);
        let (state, effects) = update(state, msg);
        self.state = state;
        self.effects.run(effects);
    }
}
