use blockscout_service_launcher::tracing::init_logs;

use crate::{replay, settings::Settings};

const SERVICE_NAME: &str = "cctp_indexer";

pub async fn run(settings: Settings) -> Result<(), anyhow::Error> {
    init_logs(SERVICE_NAME, &settings.tracing, &settings.jaeger)?;

    let (summary, _store) = replay::replay_from_settings(&settings)?;
    tracing::info!(
        processed = summary.processed,
        failed = summary.failed,
        outcomes = ?summary.outcomes,
        "replay finished"
    );

    Ok(())
}
