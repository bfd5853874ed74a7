use crate::level::{Severity, Threshold};
use crate::sink::Sink;
use crate::style::Style;
use parking_lot::RwLock;
use std::fmt::{self, Display};
use std::panic::Location;
use std::process;
use std::sync::Arc;
use std::sync::atomic::{AtomicI32, Ordering};

/// A prefixed, colorized logger that drops calls below its threshold.
///
/// Every emitting method is `#[track_caller]`, so the `file:line` written by
/// the sink is the caller's, not this module's. Setters take `&self`; share a
/// logger between threads with an `Arc`.
///
/// `fatal`/`fatalf` terminate the process with exit status 1 once their line
/// has been written, unless the threshold is set above [`Severity::Fatal`].
#[derive(Debug)]
pub struct LeveledLogger {
    prefix: String,
    style: RwLock<Style>,
    threshold: AtomicI32,
    sink: Arc<Sink>,
}

impl LeveledLogger {
    /// A logger writing to its own stdout sink with the default header.
    pub fn new(prefix: impl Into<String>, style: Style, threshold: impl Into<Threshold>) -> Self {
        Self::with_sink(prefix, style, threshold, Arc::new(Sink::stdout()))
    }

    pub fn with_sink(
        prefix: impl Into<String>,
        style: Style,
        threshold: impl Into<Threshold>,
        sink: Arc<Sink>,
    ) -> Self {
        Self {
            prefix: prefix.into(),
            style: RwLock::new(style),
            threshold: AtomicI32::new(threshold.into().0),
            sink,
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn style(&self) -> Style {
        *self.style.read()
    }

    pub fn set_style(&self, style: Style) {
        *self.style.write() = style;
    }

    pub fn threshold(&self) -> Threshold {
        Threshold(self.threshold.load(Ordering::Relaxed))
    }

    /// Any integer is accepted, see [`Threshold`].
    pub fn set_threshold(&self, threshold: impl Into<Threshold>) {
        self.threshold.store(threshold.into().0, Ordering::Relaxed);
    }

    #[inline]
    pub fn is_enabled(&self, severity: Severity) -> bool {
        self.threshold().allows(severity)
    }

    pub fn sink(&self) -> &Arc<Sink> {
        &self.sink
    }

    #[track_caller]
    pub fn debug(&self, value: impl Display) {
        self.emit(Severity::Debug, Location::caller(), format_args!("{value}"));
    }

    #[track_caller]
    pub fn info(&self, value: impl Display) {
        self.emit(Severity::Info, Location::caller(), format_args!("{value}"));
    }

    #[track_caller]
    pub fn warn(&self, value: impl Display) {
        self.emit(Severity::Warn, Location::caller(), format_args!("{value}"));
    }

    #[track_caller]
    pub fn error(&self, value: impl Display) {
        self.emit(Severity::Error, Location::caller(), format_args!("{value}"));
    }

    #[track_caller]
    pub fn fatal(&self, value: impl Display) {
        self.emit(Severity::Fatal, Location::caller(), format_args!("{value}"));
    }

    #[track_caller]
    pub fn debugf(&self, args: fmt::Arguments<'_>) {
        self.emit(Severity::Debug, Location::caller(), args);
    }

    #[track_caller]
    pub fn infof(&self, args: fmt::Arguments<'_>) {
        self.emit(Severity::Info, Location::caller(), args);
    }

    #[track_caller]
    pub fn warnf(&self, args: fmt::Arguments<'_>) {
        self.emit(Severity::Warn, Location::caller(), args);
    }

    #[track_caller]
    pub fn errorf(&self, args: fmt::Arguments<'_>) {
        self.emit(Severity::Error, Location::caller(), args);
    }

    #[track_caller]
    pub fn fatalf(&self, args: fmt::Arguments<'_>) {
        self.emit(Severity::Fatal, Location::caller(), args);
    }

    /// Emits at a severity chosen at runtime. `Severity::Fatal` exits like
    /// [`fatal`](Self::fatal).
    #[track_caller]
    pub fn log(&self, severity: Severity, args: fmt::Arguments<'_>) {
        self.emit(severity, Location::caller(), args);
    }

    fn emit(&self, severity: Severity, location: &Location<'_>, args: fmt::Arguments<'_>) {
        if !self.is_enabled(severity) {
            return;
        }

        let text = format!("{} {}", self.style().paint(&self.prefix), args);
        self.sink.output(location, &text);

        if severity == Severity::Fatal {
            process::exit(1);
        }
    }
}
