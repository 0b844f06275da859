use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    #[arg(long, value_enum, default_value_t = ColorChoice::Auto, global = true)]
    pub color: ColorChoice,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorChoice {
    Auto,
    Always,
    Never,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Print the pre-build banner
    Banner,
    /// Report a processed annotation
    Processed {
        annotation: String,
        file: String,
        #[arg(long)]
        details: Option<String>,
    },
    /// Report annotations found in a file
    Found {
        annotation: String,
        file: String,
        #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
        count: i64,
    },
    /// Announce the start of a processing module
    Start {
        #[arg(value_name = "MODULE")]
        module: String,
    },
    /// Print a module summary
    Summary {
        #[arg(value_name = "MODULE")]
        module: String,
        #[arg(allow_negative_numbers = true)]
        processed: i64,
        #[arg(long, allow_negative_numbers = true)]
        total: Option<i64>,
    },
    /// Report an error, optionally tied to a file
    Error {
        message: String,
        #[arg(long)]
        file: Option<String>,
    },
    /// Report a warning, optionally tied to a file
    Warning {
        message: String,
        #[arg(long)]
        file: Option<String>,
    },
    /// Print an informational line
    Info {
        message: String,
    },
    /// Print a ruled section header
    Section {
        title: String,
    },
    /// Print the completion footer
    Complete,
    /// Replay a batch of JSON events through a single logger
    Replay {
        #[arg(value_name = "SOURCE", default_value = "-")]
        source: String,
    },
}
