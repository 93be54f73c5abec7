//! Logging with colored module prefixes.
//!
//! The pipeline holds a [`LogSink`] reference instead of writing to a global
//! macro, so tests can capture output with [`MemorySink`]. `TermLogger` is
//! the production sink.

use owo_colors::OwoColorize;

/// Process-wide logging capability.
///
/// `module` is a short lowercase tag (`"compile"`, `"minify"`) rendered as a
/// colored `[module]` prefix by the terminal sink.
pub trait LogSink {
    fn info(&self, module: &str, message: &str);
    fn warn(&self, module: &str, message: &str);
    fn error(&self, module: &str, message: &str);
    /// Only rendered when verbose output is enabled.
    fn debug(&self, module: &str, message: &str);
}

/// Terminal sink: info/debug to stdout, warnings/errors to stderr.
pub struct TermLogger {
    verbose: bool,
}

impl TermLogger {
    pub const fn new(verbose: bool) -> Self {
        Self { verbose }
    }
}

impl LogSink for TermLogger {
    fn info(&self, module: &str, message: &str) {
        println!("{} {message}", prefix_info(module));
    }

    fn warn(&self, module: &str, message: &str) {
        eprintln!("{} {message}", format!("[{module}]").yellow().bold());
    }

    fn error(&self, module: &str, message: &str) {
        eprintln!("{} {message}", format!("[{module}]").bright_red().bold());
    }

    fn debug(&self, module: &str, message: &str) {
        if self.verbose {
            println!("{} {}", prefix_info(module), message.dimmed());
        }
    }
}

/// Default prefix color for informational output.
fn prefix_info(module: &str) -> String {
    format!("[{module}]").bright_yellow().bold().to_string()
}

// ============================================================================
// Test sink
// ============================================================================

#[cfg(test)]
pub use memory::MemorySink;
