//! Handlers for the three CCTP events and the routing entry point.
//!
//! Events are handled strictly one at a time; every handler reads and then
//! conditionally writes through the injected [`RecordStore`].

mod burn;
mod received;
mod sent;

use crate::{
    abi::{IFiatToken, IMessageTransmitter},
    error::{DecodeError, IndexerError},
    metrics,
    settings::CctpIndexerSettings,
    store::RecordStore,
    types::{AnnotatedEvent, CctpEvent},
};

/// What happened to a single event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HandleOutcome {
    /// A record was written. `replaced` is set when it overwrote an existing one.
    Accepted { replaced: bool },
    /// A chronologically newer record is already stored under the same id.
    DiscardedStale,
    /// The message is addressed to a domain this instance does not track.
    DiscardedWrongDomain { destination_domain: u32 },
    /// The payload could not be decoded.
    Malformed(DecodeError),
}

impl HandleOutcome {
    pub fn label(&self) -> &'static str {
        match self {
            HandleOutcome::Accepted { replaced: false } => "created",
            HandleOutcome::Accepted { replaced: true } => "replaced",
            HandleOutcome::DiscardedStale => "stale",
            HandleOutcome::DiscardedWrongDomain { .. } => "wrong_domain",
            HandleOutcome::Malformed(_) => "malformed",
        }
    }

    pub fn is_accepted(&self) -> bool {
        matches!(self, HandleOutcome::Accepted { .. })
    }
}

pub struct CctpIndexer<S> {
    settings: CctpIndexerSettings,
    store: S,
}

impl<S: RecordStore> CctpIndexer<S> {
    pub fn new(settings: CctpIndexerSettings, store: S) -> Self {
        Self { settings, store }
    }

    pub fn settings(&self) -> &CctpIndexerSettings {
        &self.settings
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// Routes an event to its handler.
    pub fn handle(&mut self, event: &CctpEvent) -> Result<HandleOutcome, IndexerError> {
        let outcome = match event {
            CctpEvent::Received(event) => received::handle(&mut self.store, &self.settings, event),
            CctpEvent::Sent(event) => sent::handle(&mut self.store, &self.settings, event),
            CctpEvent::Burn(event) => burn::handle(&mut self.store, event),
        }?;

        metrics::EVENTS_TOTAL
            .with_label_values(&[event.kind(), outcome.label()])
            .inc();
        Ok(outcome)
    }

    pub fn handle_received(
        &mut self,
        event: AnnotatedEvent<IMessageTransmitter::MessageReceived>,
    ) -> Result<HandleOutcome, IndexerError> {
        self.handle(&CctpEvent::Received(event))
    }

    pub fn handle_sent(
        &mut self,
        event: AnnotatedEvent<IMessageTransmitter::MessageSent>,
    ) -> Result<HandleOutcome, IndexerError> {
        self.handle(&CctpEvent::Sent(event))
    }

    pub fn handle_burn(
        &mut self,
        event: AnnotatedEvent<IFiatToken::Burn>,
    ) -> Result<HandleOutcome, IndexerError> {
        self.handle(&CctpEvent::Burn(event))
    }
}
