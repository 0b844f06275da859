use std::fs;
use std::io::{self, Read};

use super::LogEvent;
use crate::error::{LoggerError, Result};
use crate::logging::EventSink;

/// Decodes an event batch: a JSON array, or one JSON object per line.
pub fn parse_events(text: &str) -> Result<Vec<LogEvent>> {
    if text.trim_start().starts_with('[') {
        let events: Vec<LogEvent> = serde_json::from_str(text)?;
        return Ok(events);
    }

    text.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(index, line)| {
            serde_json::from_str(line).map_err(|source| LoggerError::Decode {
                line: index + 1,
                source,
            })
        })
        .collect()
}

/// `-` reads standard input; anything else is a file path.
pub fn read_events(source: &str) -> Result<Vec<LogEvent>> {
    let raw = if source == "-" {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .map_err(|err| io_error("standard input", err))?;
        buffer
    } else {
        fs::read_to_string(source).map_err(|err| io_error(source, err))?
    };

    parse_events(&raw)
}

/// Feeds every event to `sink` in order and returns how many were recorded.
pub fn replay<S: EventSink + ?Sized>(events: &[LogEvent], sink: &S) -> usize {
    for event in events {
        sink.record(event);
    }
    events.len()
}

fn io_error(source_name: &str, source: io::Error) -> LoggerError {
    LoggerError::Io {
        source_name: source_name.to_string(),
        source,
    }
}
