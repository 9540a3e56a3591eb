use std::collections::{HashMap, HashSet};
use std::time::Duration;

use crate::{FailureKind, FetchError, Fetcher, SearchHit};

/// In-memory search source that answers after a delay.
///
/// Unless a query has canned hits, it answers with every hit whose title
/// contains the query, ignoring case.
#[derive(Debug, Clone, Default)]
pub struct SimulatedFetcher {
    hits: Vec<SearchHit>,
    delay: Duration,
    query_delays: HashMap<String, Duration>,
    query_hits: HashMap<String, Vec<SearchHit>>,
    failing_queries: HashSet<String>,
    fail_all: bool,
}

impl SimulatedFetcher {
    pub fn new(hits: Vec<SearchHit>) -> Self {
        Self {
            hits,
            ..Self::default()
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn with_query_delay(mut self, query: impl Into<String>, delay: Duration) -> Self {
        self.query_delays.insert(query.into(), delay);
        self
    }

    pub fn with_query_hits(mut self, query: impl Into<String>, hits: Vec<SearchHit>) -> Self {
        self.query_hits.insert(query.into(), hits);
        self
    }

    pub fn failing_query(mut self, query: impl Into<String>) -> Self {
        self.failing_queries.insert(query.into());
        self
    }

    pub fn failing(mut self) -> Self {
        self.fail_all = true;
        self
    }
}

#[async_trait::async_trait]
impl Fetcher for SimulatedFetcher {
    async fn search(&self, query: &str) -> Result<Vec<SearchHit>, FetchError> {
        let delay = self.query_delays.get(query).copied().unwrap_or(self.delay);
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }

        if self.fail_all || self.failing_queries.contains(query) {
            return Err(FetchError::new(
                FailureKind::Network,
                format!("simulated failure for {query:?}"),
            ));
        }

        if let Some(hits) = self.query_hits.get(query) {
            return Ok(hits.clone());
        }

        let needle = query.to_lowercase();
        Ok(self
            .hits
            .iter()
            .filter(|hit| {
                hit.title
                    .as_deref()
                    .is_some_and(|title| title.to_lowercase().contains(&needle))
            })
            .cloned()
            .collect())
    }
}

/// Two well-known stories, handy for offline runs.
pub fn sample_hits() -> Vec<SearchHit> {
    vec![
        SearchHit {
            object_id: "0".to_string(),
            title: Some("React".to_string()),
            url: Some("https://reactjs.org/".to_string()),
            author: Some("Jordan Walke".to_string()),
            num_comments: Some(3),
            points: Some(4),
        },
        SearchHit {
            object_id: "1".to_string(),
            title: Some("Redux".to_string()),
            url: Some("https://redux.js.org/".to_string()),
            author: Some("Dan Abramov, Andrew Clark".to_string()),
            num_comments: Some(2),
            points: Some(5),
        },
    ]
}
