use std::io::Write;

use super::ConsoleLogger;
use crate::events::LogEvent;

/// Anything that can take a recorded logger call.
#[cfg_attr(test, mockall::automock)]
pub trait EventSink {
    fn record(&self, event: &LogEvent);
}

impl<W: Write> EventSink for ConsoleLogger<W> {
    fn record(&self, event: &LogEvent) {
        match event {
            LogEvent::Banner => self.print_banner(),
            LogEvent::AnnotationProcessed {
                annotation,
                file,
                details,
            } => self.log_annotation_processed(annotation, file, details.as_deref()),
            LogEvent::AnnotationFound {
                annotation,
                file,
                count,
            } => self.log_annotation_found(annotation, file, *count),
            LogEvent::ProcessingStart { module } => self.log_processing_start(module),
            LogEvent::Summary {
                module,
                processed,
                total,
            } => self.log_summary(module, *processed, *total),
            LogEvent::Error { message, file } => self.log_error(message, file.as_deref()),
            LogEvent::Warning { message, file } => self.log_warning(message, file.as_deref()),
            LogEvent::Info { message } => self.log_info(message),
            LogEvent::SectionHeader { title } => self.log_section_header(title),
            LogEvent::Completion => self.log_completion(),
        }
    }
}
