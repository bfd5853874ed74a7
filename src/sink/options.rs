use serde::Deserialize;

/// How the emitting call site is written ahead of each line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CallSite {
    /// File name only, e.g. `main.rs:12`.
    #[default]
    Short,
    /// Path as recorded by the compiler, e.g. `src/bin/demo.rs:12`.
    Long,
    Off,
}

/// Header fields the sink writes before the text of every line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SinkOptions {
    pub date: bool,
    pub time: bool,
    pub microseconds: bool,
    pub utc: bool,
    pub call_site: CallSite,
}

impl SinkOptions {
    /// No header at all, only the text.
    pub const fn bare() -> Self {
        Self {
            date: false,
            time: false,
            microseconds: false,
            utc: false,
            call_site: CallSite::Off,
        }
    }

    pub(crate) fn timestamp_format(&self) -> Option<&'static str> {
        match (self.date, self.time, self.microseconds) {
            (false, false, false) => None,
            (true, false, false) => Some("%Y/%m/%d"),
            (false, true, false) => Some("%H:%M:%S"),
            (false, _, true) => Some("%H:%M:%S%.6f"),
            (true, true, false) => Some("%Y/%m/%d %H:%M:%S"),
            (true, _, true) => Some("%Y/%m/%d %H:%M:%S%.6f"),
        }
    }
}

impl Default for SinkOptions {
    /// Date, time and short file name.
    fn default() -> Self {
        Self {
            date: true,
            time: true,
            microseconds: false,
            utc: false,
            call_site: CallSite::Short,
        }
    }
}
