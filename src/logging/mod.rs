// Re-export specific items from logger.rs and sink.rs
pub use self::logger::ConsoleLogger;
pub use self::sink::EventSink;

#[cfg(test)]
pub use self::sink::MockEventSink;

// Held by tests that touch the process-wide `colored` override.
#[cfg(test)]
pub static COLOR_OVERRIDE_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());

mod banner;
mod logger;
mod sink;
