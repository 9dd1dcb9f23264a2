mod replay;
mod server;
mod settings;

pub use replay::{ReplaySummary, load_events_from_file, replay, replay_from_settings};
pub use server::run;
pub use settings::Settings;
