//! Console appender implementation

use crate::core::{Appender, LogEvent, LogLevel, OutputFormat, Result};
use colored::Colorize;

pub struct ConsoleAppender {
    use_colors: bool,
    output_format: OutputFormat,
}

impl ConsoleAppender {
    pub fn new() -> Self {
        Self {
            use_colors: true,
            output_format: OutputFormat::default(),
        }
    }

    pub fn with_colors(use_colors: bool) -> Self {
        Self {
            use_colors,
            output_format: OutputFormat::default(),
        }
    }

    /// Set the output format for this appender
    ///
    /// # Example
    ///
    /// ```
    /// use rust_logger_calendar::appenders::ConsoleAppender;
    /// use rust_logger_calendar::OutputFormat;
    ///
    /// let appender = ConsoleAppender::new()
    ///     .with_output_format(OutputFormat::CompactJson);
    /// ```
    #[must_use]
    pub fn with_output_format(mut self, format: OutputFormat) -> Self {
        self.output_format = format;
        self
    }

    /// Format as text, colouring the level when enabled
    fn format_text(&self, event: &LogEvent) -> String {
        let text = OutputFormat::Text.format(event);
        if !self.use_colors {
            return text;
        }
        let short = event.level.short_name();
        let tag = format!("[{}]", short);
        let coloured = format!("[{}]", short.color(event.level.color_code()));
        text.replacen(&tag, &coloured, 1)
    }
}

impl Default for ConsoleAppender {
    fn default() -> Self {
        Self::new()
    }
}

impl Appender for ConsoleAppender {
    fn append(&mut self, event: &LogEvent) -> Result<()> {
        let output = match self.output_format {
            OutputFormat::Text => self.format_text(event),
            OutputFormat::CompactJson => self.output_format.format(event),
        };

        // Route Error and Fatal levels to stderr, others to stdout
        match event.level {
            LogLevel::Error | LogLevel::Fatal => eprintln!("{}", output),
            _ => println!("{}", output),
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        use std::io::Write;
        std::io::stdout().flush()?;
        std::io::stderr().flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "console"
    }
}
