use clap::Parser;
use std::process;

use cli::{Args, ColorChoice, Command};
use events::LogEvent;
use logging::{ConsoleLogger, EventSink};

mod cli;
mod error;
mod events;
mod logging;
mod utils;

fn configure_color(choice: ColorChoice) -> bool {
    match choice {
        ColorChoice::Always => {
            colored::control::set_override(true);
            true
        }
        ColorChoice::Never => {
            colored::control::set_override(false);
            false
        }
        ColorChoice::Auto => true,
    }
}

/// Single-call subcommands map one-to-one onto events; `replay` does not.
fn command_event(command: Command) -> Option<LogEvent> {
    let event = match command {
        Command::Banner => LogEvent::Banner,
        Command::Processed {
            annotation,
            file,
            details,
        } => LogEvent::AnnotationProcessed {
            annotation,
            file,
            details,
        },
        Command::Found {
            annotation,
            file,
            count,
        } => LogEvent::AnnotationFound {
            annotation,
            file,
            count,
        },
        Command::Start { module } => LogEvent::ProcessingStart { module },
        Command::Summary {
            module,
            processed,
            total,
        } => LogEvent::Summary {
            module,
            processed,
            total,
        },
        Command::Error { message, file } => LogEvent::Error { message, file },
        Command::Warning { message, file } => LogEvent::Warning { message, file },
        Command::Info { message } => LogEvent::Info { message },
        Command::Section { title } => LogEvent::SectionHeader { title },
        Command::Complete => LogEvent::Completion,
        Command::Replay { .. } => return None,
    };
    Some(event)
}

fn main() {
    let args = Args::parse();
    let color = configure_color(args.color);
    let logger = if color {
        ConsoleLogger::new()
    } else {
        ConsoleLogger::with_writer(std::io::stdout(), false)
    };

    match args.command {
        Command::Replay { source } => match events::read_events(&source) {
            Ok(batch) => {
                events::replay(&batch, &logger);
            }
            Err(err) => {
                logger.log_error(&err.to_string(), None);
                process::exit(1);
            }
        },
        command => {
            if let Some(event) = command_event(command) {
                logger.record(&event);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_event() {
        assert_eq!(command_event(Command::Banner), Some(LogEvent::Banner));
        assert_eq!(
            command_event(Command::Processed {
                annotation: "@Serializable".to_string(),
                file: "/a/b/Foo.java".to_string(),
                details: Some("3 fields".to_string()),
            }),
            Some(LogEvent::AnnotationProcessed {
                annotation: "@Serializable".to_string(),
                file: "/a/b/Foo.java".to_string(),
                details: Some("3 fields".to_string()),
            })
        );
        assert_eq!(
            command_event(Command::Section {
                title: "Serialization".to_string()
            }),
            Some(LogEvent::SectionHeader {
                title: "Serialization".to_string()
            })
        );
        assert_eq!(command_event(Command::Complete), Some(LogEvent::Completion));
        assert_eq!(
            command_event(Command::Replay {
                source: "-".to_string()
            }),
            None
        );
    }

    #[test]
    fn test_configure_color() {
        let _guard = crate::logging::COLOR_OVERRIDE_LOCK
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        let color = configure_color(ColorChoice::Never);
        assert!(!color);
        let logger = ConsoleLogger::with_writer(Vec::new(), color);
        logger.log_section_header("Serialization");
        logger.log_error("bad token", Some("/x/Y.java"));
        let plain = String::from_utf8(logger.into_inner()).unwrap();
        assert!(!plain.contains('\u{1b}'));
        assert!(plain.ends_with("  ✗ Error in Y.java: bad token\n"));

        let color = configure_color(ColorChoice::Always);
        assert!(color);
        let logger = ConsoleLogger::with_writer(Vec::new(), color);
        logger.log_info("styled");
        let styled = String::from_utf8(logger.into_inner()).unwrap();
        assert!(styled.contains("\u{1b}["));

        assert!(configure_color(ColorChoice::Auto));
        colored::control::unset_override();
    }

    #[test]
    fn test_command_output() {
        let args = Args::try_parse_from([
            "prebuild-logger",
            "error",
            "bad token",
            "--file",
            "/x/Y.java",
        ])
        .unwrap();
        let logger = ConsoleLogger::with_writer(Vec::new(), false);
        logger.record(&command_event(args.command).unwrap());

        assert_eq!(
            String::from_utf8(logger.into_inner()).unwrap(),
            "  ✗ Error in Y.java: bad token\n"
        );
    }
}
