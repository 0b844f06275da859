use serde::{Deserialize, Serialize};

/// One logger call, as written by a build script into an event batch.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum LogEvent {
    Banner,
    AnnotationProcessed {
        annotation: String,
        file: String,
        #[serde(default)]
        details: Option<String>,
    },
    AnnotationFound {
        annotation: String,
        file: String,
        #[serde(default = "default_count")]
        count: i64,
    },
    ProcessingStart {
        module: String,
    },
    Summary {
        module: String,
        processed: i64,
        #[serde(default)]
        total: Option<i64>,
    },
    Error {
        message: String,
        #[serde(default)]
        file: Option<String>,
    },
    Warning {
        message: String,
        #[serde(default)]
        file: Option<String>,
    },
    Info {
        message: String,
    },
    SectionHeader {
        title: String,
    },
    Completion,
}

fn default_count() -> i64 {
    1
}
