//! Simulated AI search
//!
//! A search is a single deferred task: sleep for the configured latency, then hand
//! back the fixed result set. Each request gets a generation number so that a
//! completion arriving after the view moved on can be recognised and dropped.

use crate::models::{AiSearchResult, fixtures};
use anyhow::{Context, Result};
use flume::{Receiver, Sender};
use std::time::Duration;
use tokio::runtime::Runtime;
use tokio::task::JoinHandle;

#[derive(Debug, Clone)]
pub enum SearchMessage {
    Completed {
        generation: u64,
        query: String,
        results: Vec<AiSearchResult>,
    },
}

pub struct SearchWorker {
    runtime: Runtime,
    sender: Sender<SearchMessage>,
    receiver: Receiver<SearchMessage>,
    delay: Duration,
    generation: u64,
    in_flight: Option<JoinHandle<()>>,
}

impl std::fmt::Debug for SearchWorker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchWorker")
            .field("delay", &self.delay)
            .field("generation", &self.generation)
            .field("in_flight", &self.in_flight.is_some())
            .finish()
    }
}

impl SearchWorker {
    pub fn new(delay: Duration) -> Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .thread_name("devvault-search")
            .enable_time()
            .build()
            .context("Failed to start search runtime")?;

        let (sender, receiver) = flume::unbounded();

        Ok(Self {
            runtime,
            sender,
            receiver,
            delay,
            generation: 0,
            in_flight: None,
        })
    }

    /// Schedules a search and returns its generation. Any search still pending is
    /// aborted first.
    pub fn start(&mut self, query: &str) -> u64 {
        self.cancel();
        self.generation += 1;

        let generation = self.generation;
        let delay = self.delay;
        let sender = self.sender.clone();
        let query = query.to_string();

        tracing::debug!("Search #{} scheduled for {:?}: {:?}", generation, delay, query);

        self.in_flight = Some(self.runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = sender.send(SearchMessage::Completed {
                generation,
                query,
                results: fixtures::ai_search_results(),
            });
        }));

        generation
    }

    /// Aborts the pending search, if any
    pub fn cancel(&mut self) {
        if let Some(handle) = self.in_flight.take() {
            if !handle.is_finished() {
                tracing::debug!("Search #{} cancelled", self.generation);
            }
            handle.abort();
        }
    }

    /// Collects every completed search without blocking
    pub fn drain(&self) -> Vec<SearchMessage> {
        self.receiver.try_iter().collect()
    }

    #[cfg(test)]
    pub fn receiver(&self) -> &Receiver<SearchMessage> {
        &self.receiver
    }
}

impl Drop for SearchWorker {
    fn drop(&mut self) {
        self.cancel();
    }
}
