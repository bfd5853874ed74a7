use super::{CallSite, SinkOptions};
use chrono::{Local, Utc};
use parking_lot::Mutex;
use std::fmt;
use std::fmt::Write as _;
use std::io::{self, Write};
use std::panic::Location;
use std::path::Path;

/// Line writer shared by loggers.
///
/// Each call to [`Sink::output`] renders the header and text into a single
/// buffer and writes it while holding the writer lock, so lines coming from
/// different threads never interleave.
pub struct Sink {
    writer: Mutex<Box<dyn Write + Send>>,
    options: SinkOptions,
}

impl Sink {
    pub fn new<W>(writer: W, options: SinkOptions) -> Self
    where
        W: Write + Send + 'static,
    {
        Self {
            writer: Mutex::new(Box::new(writer)),
            options,
        }
    }

    pub fn stdout() -> Self {
        Self::stdout_with(SinkOptions::default())
    }

    pub fn stdout_with(options: SinkOptions) -> Self {
        Self::new(io::stdout(), options)
    }

    pub fn options(&self) -> SinkOptions {
        self.options
    }

    /// Writes `text` attributed to `location`. Failures are reported on the
    /// diagnostics channel and otherwise ignored.
    pub fn output(&self, location: &Location<'_>, text: &str) {
        let line = self.format_line(location, text);
        if let Err(error) = self.write_line(&line) {
            tracing::warn!(%error, "failed to write log line");
        }
    }

    pub fn format_line(&self, location: &Location<'_>, text: &str) -> String {
        let mut line = String::with_capacity(text.len() + 48);
        if let Some(format) = self.options.timestamp_format() {
            // Writing into a String cannot fail.
            let _ = if self.options.utc {
                write!(line, "{} ", Utc::now().format(format))
            } else {
                write!(line, "{} ", Local::now().format(format))
            };
        }
        match self.options.call_site {
            CallSite::Short => {
                let _ = write!(line, "{}:{}: ", short_file(location.file()), location.line());
            }
            CallSite::Long => {
                let _ = write!(line, "{}:{}: ", location.file(), location.line());
            }
            CallSite::Off => {}
        }
        line.push_str(text);
        if !text.ends_with('\n') {
            line.push('\n');
        }
        line
    }

    fn write_line(&self, line: &str) -> io::Result<()> {
        let mut writer = self.writer.lock();
        writer.write_all(line.as_bytes())?;
        writer.flush()
    }
}

impl fmt::Debug for Sink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sink")
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

fn short_file(file: &str) -> &str {
    Path::new(file)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::CaptureBuffer;

    #[test]
    fn default_header_has_date_time_and_short_file() {
        let buffer = CaptureBuffer::new();
        let sink = Sink::new(buffer.clone(), SinkOptions::default());
        let location = Location::caller();
        sink.output(location, "hello");

        let lines = buffer.lines();
        assert_eq!(lines.len(), 1);
        let line = &lines[0];
        // "YYYY/MM/DD HH:MM:SS sink.rs:LINE: hello"
        let (date, rest) = line.split_once(' ').unwrap();
        assert_eq!(date.len(), 10);
        assert_eq!(&date[4..5], "/");
        let (time, rest) = rest.split_once(' ').unwrap();
        assert_eq!(time.len(), 8);
        assert_eq!(rest, format!("sink.rs:{}: hello", location.line()));
    }

    #[test]
    fn long_call_site_keeps_the_path() {
        let sink = Sink::new(
            io::sink(),
            SinkOptions {
                call_site: CallSite::Long,
                ..SinkOptions::bare()
            },
        );
        let location = Location::caller();
        let line = sink.format_line(location, "x");
        assert_eq!(line, format!("{}:{}: x\n", location.file(), location.line()));
        assert!(line.contains("src/sink/sink.rs") || line.contains("src\\sink\\sink.rs"));
    }

    #[test]
    fn bare_options_write_only_the_text() {
        let sink = Sink::new(io::sink(), SinkOptions::bare());
        assert_eq!(sink.format_line(Location::caller(), "plain"), "plain\n");
        assert_eq!(sink.format_line(Location::caller(), "ends\n"), "ends\n");
    }

    #[test]
    fn microseconds_extend_the_time() {
        let sink = Sink::new(
            io::sink(),
            SinkOptions {
                time: true,
                microseconds: true,
                utc: true,
                ..SinkOptions::bare()
            },
        );
        let line = sink.format_line(Location::caller(), "t");
        let (time, text) = line.split_once(' ').unwrap();
        assert_eq!(time.len(), "HH:MM:SS.ffffff".len());
        assert_eq!(text, "t\n");
    }

    #[test]
    fn short_file_strips_directories() {
        assert_eq!(short_file("src/bin/logger_demo.rs"), "logger_demo.rs");
        assert_eq!(short_file("main.rs"), "main.rs");
    }
}
