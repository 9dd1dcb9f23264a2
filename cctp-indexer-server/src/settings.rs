use std::path::PathBuf;

use blockscout_service_launcher::{
    launcher::ConfigSettings,
    tracing::{JaegerSettings, TracingSettings},
};
use cctp_indexer_logic::CctpIndexerSettings;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    /// JSON array of recorded events, replayed in file order.
    pub events_path: PathBuf,
    /// Where to write the resulting store as JSON, if anywhere.
    #[serde(default)]
    pub snapshot_path: Option<PathBuf>,
    /// Where to write the indexer counters in the Prometheus text format.
    #[serde(default)]
    pub metrics_path: Option<PathBuf>,

    #[serde(default)]
    pub indexer: CctpIndexerSettings,
    #[serde(default)]
    pub tracing: TracingSettings,
    #[serde(default)]
    pub jaeger: JaegerSettings,
}

impl ConfigSettings for Settings {
    const SERVICE_NAME: &'static str = "CCTP_INDEXER";
}

impl Settings {
    pub fn default(events_path: PathBuf) -> Self {
        Self {
            events_path,
            snapshot_path: None,
            metrics_path: None,
            indexer: Default::default(),
            tracing: Default::default(),
            jaeger: Default::default(),
        }
    }
}
