use std::time::Duration;

use stories_core::{Effect, Msg, Story};
use stories_engine::{EngineEvent, EngineHandle, PersistedPreference, SearchHit};
use stories_logging::{stories_debug, stories_info, stories_warn};

/// Executes core effects and turns engine events back into messages.
pub struct EffectRunner {
    engine: EngineHandle,
    search: PersistedPreference,
}

impl EffectRunner {
    pub fn new(engine: EngineHandle, search: PersistedPreference) -> Self {
        Self { engine, search }
    }

    pub fn run(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::FetchStories { request_id, query } => {
                    stories_info!("FetchStories request_id={} query={:?}", request_id, query);
                    self.engine.fetch(request_id, query);
                }
                Effect::PersistSearchTerm(term) => {
                    stories_debug!("Persisting {}={:?}", self.search.key(), term);
                    self.search.save(&term);
                }
            }
        }
    }

    pub fn try_next(&self) -> Option<Msg> {
        self.engine.try_recv().map(into_msg)
    }

    pub fn next_timeout(&self, timeout: Duration) -> Option<Msg> {
        self.engine.recv_timeout(timeout).map(into_msg)
    }
}

fn into_msg(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::FetchCompleted {
            request_id,
            query,
            result,
        } => match result {
            Ok(hits) => Msg::FetchSucceeded {
                request_id,
                stories: map_hits(hits),
            },
            Err(err) => {
                stories_warn!("Request {} for {:?} failed: {}", request_id, query, err);
                Msg::FetchFailed { request_id }
            }
        },
    }
}

/// Hits without a title cannot be matched by the view filter and are dropped.
pub fn map_hits(hits: Vec<SearchHit>) -> Vec<Story> {
    let received = hits.len();
    let stories: Vec<Story> = hits
        .into_iter()
        .filter_map(|hit| {
            Some(Story {
                title: hit.title?,
                id: hit.object_id,
                url: hit.url.unwrap_or_default(),
                author: hit.author.unwrap_or_default(),
                comment_count: hit.num_comments.unwrap_or(0),
                points: hit.points.unwrap_or(0),
            })
        })
        .collect();
    if stories.len() < received {
        stories_debug!("Dropped {} untitled hits", received - stories.len());
    }
    stories
}
