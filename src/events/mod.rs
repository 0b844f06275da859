mod loader;
mod types;

pub use self::loader::{read_events, replay};
pub use self::types::LogEvent;
