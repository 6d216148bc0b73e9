//! Output formatting and writing utilities
//!
//! Command results go to the writer (stdout by default); logs stay on stderr.

use crate::cli::OutputFormat;
use crate::error::Result;
use colored::Colorize;
use serde::Serialize;
use std::io::{self, Write};
use tracing::trace;

/// Output writer that handles formats and colors
pub struct OutputWriter {
    use_color: bool,
    quiet: bool,
    writer: Box<dyn Write>,
}

impl OutputWriter {
    /// Create a new output writer on stdout
    pub fn new(use_color: bool, quiet: bool) -> Self {
        Self::with_writer(use_color, quiet, Box::new(io::stdout()))
    }

    /// Create an output writer with a custom writer
    pub fn with_writer(use_color: bool, quiet: bool, writer: Box<dyn Write>) -> Self {
        Self {
            use_color,
            quiet,
            writer,
        }
    }

    /// Write raw output
    pub fn write(&mut self, content: &str) -> Result<()> {
        write!(self.writer, "{}", content)?;
        self.writer.flush()?;
        Ok(())
    }

    /// Write a line of output
    pub fn writeln(&mut self, content: &str) -> Result<()> {
        writeln!(self.writer, "{}", content)?;
        self.writer.flush()?;
        Ok(())
    }

    /// Write data in the requested format
    pub fn data<T: Serialize>(&mut self, value: &T, format: OutputFormat) -> Result<()> {
        let formatted = match format {
            OutputFormat::Json => {
                let mut text = serde_json::to_string_pretty(value)?;
                text.push('\n');
                text
            }
            OutputFormat::Yaml => serde_yaml::to_string(value)?,
        };
        trace!(bytes = formatted.len(), "Writing data");
        self.write(&formatted)
    }

    /// Write a pass/fail line; never suppressed
    pub fn status(&mut self, ok: bool, message: &str) -> Result<()> {
        let line = match (ok, self.use_color) {
            (true, true) => format!("{} {}", "✓".green(), message),
            (false, true) => format!("{} {}", "✗".red(), message.red()),
            (true, false) => format!("ok   {}", message),
            (false, false) => format!("FAIL {}", message),
        };
        self.writeln(&line)
    }

    /// Write a success message
    pub fn success(&mut self, message: &str) -> Result<()> {
        if self.quiet {
            return Ok(());
        }

        if self.use_color {
            self.writeln(&message.green().to_string())
        } else {
            self.writeln(message)
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::cell::RefCell;
    use std::io::{self, Write};
    use std::rc::Rc;

    /// A cloneable in-memory writer so tests can read what was written
    #[derive(Clone, Default)]
    pub struct SharedBuffer(Rc<RefCell<Vec<u8>>>);

    impl SharedBuffer {
        pub fn contents(&self) -> String {
            String::from_utf8(self.0.borrow().clone()).unwrap()
        }
    }

    impl Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.borrow_mut().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::SharedBuffer;
    use super::*;
    use serde_json::json;

    fn writer(quiet: bool) -> (OutputWriter, SharedBuffer) {
        let buffer = SharedBuffer::default();
        (OutputWriter::with_writer(false, quiet, Box::new(buffer.clone())), buffer)
    }

    #[test]
    fn test_data_json_ends_with_newline() {
        let (mut output, buffer) = writer(false);
        output.data(&json!({"a": 1}), OutputFormat::Json).unwrap();
        assert_eq!(buffer.contents(), "{\n  \"a\": 1\n}\n");
    }

    #[test]
    fn test_data_yaml() {
        let (mut output, buffer) = writer(false);
        output.data(&json!({"a": [1]}), OutputFormat::Yaml).unwrap();
        assert_eq!(buffer.contents(), "a:\n- 1\n");
    }

    #[test]
    fn test_quiet_hides_success_but_not_status() {
        let (mut output, buffer) = writer(true);
        output.success("done").unwrap();
        output.status(false, "#/definitions/x").unwrap();
        assert_eq!(buffer.contents(), "FAIL #/definitions/x\n");
    }
}
