use std::{collections::BTreeMap, path::Path};

use anyhow::{Context, Result};
use cctp_indexer_logic::{CctpEvent, CctpIndexer, InMemoryStore, RecordStore};
use serde::Serialize;

use crate::settings::Settings;

/// Counts of what happened to every replayed event.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ReplaySummary {
    pub processed: usize,
    /// Events whose handler returned an error. The replay carries on past them.
    pub failed: usize,
    /// Keyed by outcome label.
    pub outcomes: BTreeMap<String, usize>,
}

/// Load and deserialize recorded events from a JSON file
pub fn load_events_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<CctpEvent>> {
    let content = std::fs::read_to_string(path.as_ref())
        .with_context(|| format!("Failed to read events file: {:?}", path.as_ref()))?;

    let events: Vec<CctpEvent> = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse events JSON: {:?}", path.as_ref()))?;

    Ok(events)
}

/// Feeds events to the indexer one at a time, in the given order.
pub fn replay<S: RecordStore>(indexer: &mut CctpIndexer<S>, events: &[CctpEvent]) -> ReplaySummary {
    let mut summary = ReplaySummary::default();
    for event in events {
        summary.processed += 1;
        match indexer.handle(event) {
            Ok(outcome) => {
                *summary
                    .outcomes
                    .entry(outcome.label().to_string())
                    .or_default() += 1;
            }
            Err(err) => {
                tracing::error!(
                    err = ?err,
                    kind = event.kind(),
                    transaction_hash = %event.transaction_hash(),
                    "failed to handle event"
                );
                summary.failed += 1;
            }
        }
    }
    summary
}

/// Replays the configured events file into a fresh in-memory store, then
/// writes the store snapshot and the indexer metrics where configured.
pub fn replay_from_settings(settings: &Settings) -> Result<(ReplaySummary, InMemoryStore)> {
    let events = load_events_from_file(&settings.events_path)?;
    tracing::info!(
        events = events.len(),
        path = ?settings.events_path,
        tracked_domain = settings.indexer.tracked_domain,
        "replaying events"
    );

    let mut indexer = CctpIndexer::new(settings.indexer.clone(), InMemoryStore::new());
    let summary = replay(&mut indexer, &events);
    let store = indexer.into_store();

    if let Some(path) = &settings.snapshot_path {
        let snapshot = serde_json::to_vec_pretty(&store.snapshot())
            .context("Failed to serialize store snapshot")?;
        std::fs::write(path, snapshot)
            .with_context(|| format!("Failed to write snapshot file: {path:?}"))?;
        tracing::info!(path = ?path, "store snapshot written");
    }

    if let Some(path) = &settings.metrics_path {
        let metrics = cctp_indexer_logic::metrics::encode_text()
            .context("Failed to encode indexer metrics")?;
        std::fs::write(path, metrics)
            .with_context(|| format!("Failed to write metrics file: {path:?}"))?;
        tracing::info!(path = ?path, "indexer metrics written");
    }

    Ok((summary, store))
}
