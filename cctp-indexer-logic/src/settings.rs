use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, PartialEq, Eq, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct CctpIndexerSettings {
    /// Domain this instance tracks as the destination of sent messages.
    /// Messages addressed to any other domain are dropped.
    #[serde(default = "default_tracked_domain")]
    pub tracked_domain: u32,
    /// Apply the sent-leg timestamp rule to received messages too, instead
    /// of overwriting unconditionally.
    #[serde(default)]
    pub guard_received_overwrites: bool,
}

impl Default for CctpIndexerSettings {
    fn default() -> Self {
        Self {
            tracked_domain: default_tracked_domain(),
            guard_received_overwrites: false,
        }
    }
}

fn default_tracked_domain() -> u32 {
    0
}
