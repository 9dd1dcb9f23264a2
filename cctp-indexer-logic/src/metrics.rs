use lazy_static::lazy_static;
use prometheus::{
    Encoder, IntCounter, IntCounterVec, TextEncoder, register_int_counter, register_int_counter_vec,
};

lazy_static! {
    /// Handled events by kind {received, sent, burn} and outcome.
    pub static ref EVENTS_TOTAL: IntCounterVec = register_int_counter_vec!(
        "cctp_indexer_events_total",
        "handled bridge events grouped by kind and outcome",
        &["kind", "outcome"],
    )
    .unwrap();

    /// Sent messages stored without a burn in the same transaction.
    pub static ref UNCORRELATED_SENT_TOTAL: IntCounter = register_int_counter!(
        "cctp_indexer_uncorrelated_sent_total",
        "sent messages stored without a matching burn"
    )
    .unwrap();
}

/// Every metric in the default registry, in the Prometheus text format.
pub fn encode_text() -> Result<String, prometheus::Error> {
    let metric_families = prometheus::gather();
    let mut buffer = Vec::new();
    TextEncoder::new().encode(&metric_families, &mut buffer)?;
    String::from_utf8(buffer).map_err(|err| prometheus::Error::Msg(err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_output_contains_indexer_counters() {
        EVENTS_TOTAL.with_label_values(&["burn", "created"]).inc();
        UNCORRELATED_SENT_TOTAL.inc();

        let text = encode_text().unwrap();

        assert!(text.contains("cctp_indexer_events_total{kind=\"burn\",outcome=\"created\"}"));
        assert!(text.contains("cctp_indexer_uncorrelated_sent_total"));
    }
}
