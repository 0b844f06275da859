use std::cell::{Cell, RefCell};
use std::io::{self, Stdout, Write};

use colored::Colorize;

use super::banner::BANNER;
use crate::utils::file_utils::file_name;

const RULE_WIDTH: usize = 70;

/// Prints pre-build status lines. Shared by reference across every step of a
/// run so the banner is only printed once.
pub struct ConsoleLogger<W: Write = Stdout> {
    out: RefCell<W>,
    color: bool,
    banner_shown: Cell<bool>,
}

impl ConsoleLogger {
    pub fn new() -> Self {
        Self::with_writer(io::stdout(), true)
    }
}

impl Default for ConsoleLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> ConsoleLogger<W> {
    pub fn with_writer(out: W, color: bool) -> Self {
        Self {
            out: RefCell::new(out),
            color,
            banner_shown: Cell::new(false),
        }
    }

    pub fn into_inner(self) -> W {
        self.out.into_inner()
    }

    pub fn banner_shown(&self) -> bool {
        self.banner_shown.get()
    }

    pub fn print_banner(&self) {
        if self.banner_shown.get() {
            return;
        }

        let art = if self.color {
            BANNER.cyan().bold().to_string()
        } else {
            BANNER.to_string()
        };
        self.blank();
        self.line(&art);
        self.blank();
        self.banner_shown.set(true);
    }

    /// `annotation` is reported as given, e.g. `@Serializable`. An empty
    /// `details` is treated the same as none.
    pub fn log_annotation_processed(
        &self,
        annotation: &str,
        file_path: &str,
        details: Option<&str>,
    ) {
        let mut message = format!("Processed {}", annotation);
        if let Some(details) = non_empty(details) {
            message.push_str(&format!(" - {}", details));
        }
        message.push_str(&format!(" in {}", file_name(file_path)));
        self.status(self.check(), &message);
    }

    pub fn log_annotation_found(&self, annotation: &str, file_path: &str, count: i64) {
        let file_name = file_name(file_path);
        let message = if count > 1 {
            format!("Found {} {} annotation(s) in {}", count, annotation, file_name)
        } else {
            format!("Found {} annotation in {}", annotation, file_name)
        };
        self.status(self.info_glyph(), &message);
    }

    pub fn log_processing_start(&self, module_name: &str) {
        self.blank();
        self.line(&format!("📦 Processing: {}", self.bold(module_name)));
    }

    pub fn log_summary(
        &self,
        module_name: &str,
        processed_count: i64,
        total_count: Option<i64>,
    ) {
        let message = match total_count {
            Some(total) => format!("{}: {}/{} processed", module_name, processed_count, total),
            None => format!("{}: {} processed", module_name, processed_count),
        };
        self.status(self.check(), &message);
    }

    pub fn log_error(&self, message: &str, file_path: Option<&str>) {
        let glyph = if self.color {
            "✗".red().to_string()
        } else {
            "✗".to_string()
        };
        self.status(glyph, &qualified("Error", message, file_path));
    }

    pub fn log_warning(&self, message: &str, file_path: Option<&str>) {
        let glyph = if self.color {
            "⚠".yellow().to_string()
        } else {
            "⚠".to_string()
        };
        self.status(glyph, &qualified("Warning", message, file_path));
    }

    pub fn log_info(&self, message: &str) {
        self.status(self.info_glyph(), message);
    }

    pub fn log_section_header(&self, title: &str) {
        let title = if self.color {
            title.bright_blue().bold().to_string()
        } else {
            title.to_string()
        };
        self.blank();
        self.rule('─');
        self.line(&format!("  {}", title));
        self.rule('─');
    }

    pub fn log_completion(&self) {
        self.blank();
        self.rule('═');
        self.status(self.check(), "Pre-build processing completed successfully");
        self.rule('═');
        self.blank();
    }

    fn status(&self, glyph: String, message: &str) {
        self.line(&format!("  {} {}", glyph, message));
    }

    fn rule(&self, ch: char) {
        let rule = ch.to_string().repeat(RULE_WIDTH);
        if self.color {
            self.line(&rule.bright_black().to_string());
        } else {
            self.line(&rule);
        }
    }

    fn check(&self) -> String {
        if self.color {
            "✓".green().to_string()
        } else {
            "✓".to_string()
        }
    }

    fn info_glyph(&self) -> String {
        if self.color {
            "ℹ".blue().to_string()
        } else {
            "ℹ".to_string()
        }
    }

    fn bold(&self, text: &str) -> String {
        if self.color {
            text.bold().to_string()
        } else {
            text.to_string()
        }
    }

    fn blank(&self) {
        self.line("");
    }

    // Output is fire-and-forget: a closed or broken stream is not the caller's problem.
    fn line(&self, text: &str) {
        let mut out = self.out.borrow_mut();
        let _ = writeln!(out, "{}", text);
        let _ = out.flush();
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

fn qualified(label: &str, message: &str, file_path: Option<&str>) -> String {
    match non_empty(file_path) {
        Some(path) => format!("{} in {}: {}", label, file_name(path), message),
        None => format!("{}: {}", label, message),
    }
}
