//! Stories engine: search requests, background execution and preference storage.
mod engine;
mod fetch;
mod persist;
mod prefs;
mod simulated;
mod types;

pub use engine::EngineHandle;
pub use fetch::{FetchSettings, Fetcher, ReqwestFetcher, DEFAULT_ENDPOINT};
pub use persist::{ensure_state_dir, AtomicFileWriter, PersistError};
pub use prefs::{
    MemoryPreferenceStore, PersistedPreference, PreferenceStore, RonPreferenceStore,
    PREFS_FILENAME,
};
pub use simulated::{sample_hits, SimulatedFetcher};
pub use types::{EngineEvent, FailureKind, FetchError, RequestId, SearchHit, SearchResponse};
