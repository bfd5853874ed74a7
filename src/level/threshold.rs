use super::Severity;
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// Minimum severity a logger emits.
///
/// Kept as a raw integer: anything below `Debug` (0) lets every call through,
/// anything above `Fatal` (4) suppresses every call, including fatal ones.
#[derive(Debug, Clone, Copy, Ord, PartialOrd, Eq, PartialEq, Hash, Deserialize)]
#[serde(try_from = "RawThreshold")]
pub struct Threshold(pub i32);

impl Threshold {
    pub const DEBUG: Threshold = Threshold(Severity::Debug as i32);
    pub const INFO: Threshold = Threshold(Severity::Info as i32);
    pub const WARN: Threshold = Threshold(Severity::Warn as i32);
    pub const ERROR: Threshold = Threshold(Severity::Error as i32);
    pub const FATAL: Threshold = Threshold(Severity::Fatal as i32);

    /// A call at `severity` passes iff `threshold <= severity`.
    #[inline]
    pub const fn allows(self, severity: Severity) -> bool {
        self.0 <= severity.code()
    }

    pub const fn severity(self) -> Option<Severity> {
        Severity::from_code(self.0)
    }
}

impl Default for Threshold {
    fn default() -> Self {
        Threshold::INFO
    }
}

impl From<Severity> for Threshold {
    fn from(severity: Severity) -> Self {
        Threshold(severity.code())
    }
}

impl From<i32> for Threshold {
    fn from(raw: i32) -> Self {
        Threshold(raw)
    }
}

impl fmt::Display for Threshold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.severity() {
            Some(severity) => write!(f, "{severity}"),
            None => write!(f, "{}", self.0),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid threshold {0:?}: expected a severity name or an integer")]
pub struct ParseThresholdError(pub String);

impl FromStr for Threshold {
    type Err = ParseThresholdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(raw) = s.trim().parse::<i32>() {
            return Ok(Threshold(raw));
        }
        s.parse::<Severity>()
            .map(Threshold::from)
            .map_err(|_| ParseThresholdError(s.to_string()))
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawThreshold {
    Code(i64),
    Name(String),
}

impl TryFrom<RawThreshold> for Threshold {
    type Error = ParseThresholdError;

    fn try_from(raw: RawThreshold) -> Result<Self, Self::Error> {
        match raw {
            RawThreshold::Code(code) => i32::try_from(code)
                .map(Threshold)
                .map_err(|_| ParseThresholdError(code.to_string())),
            RawThreshold::Name(name) => name.parse(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gate_matches_every_pairing() {
        for threshold in Severity::ALL {
            for severity in Severity::ALL {
                assert_eq!(
                    Threshold::from(threshold).allows(severity),
                    threshold <= severity,
                    "threshold={threshold} severity={severity}"
                );
            }
        }
    }

    #[test]
    fn out_of_range_values_keep_raw_comparison() {
        let below = Threshold(-3);
        let above = Threshold(9);
        for severity in Severity::ALL {
            assert!(below.allows(severity));
            assert!(!above.allows(severity));
        }
        assert!(!Threshold(5).allows(Severity::Fatal));
    }

    #[test]
    fn parses_names_and_raw_integers() {
        assert_eq!("warn".parse::<Threshold>(), Ok(Threshold::WARN));
        assert_eq!("-1".parse::<Threshold>(), Ok(Threshold(-1)));
        assert_eq!("42".parse::<Threshold>(), Ok(Threshold(42)));
        assert!("loud".parse::<Threshold>().is_err());
    }

    #[test]
    fn displays_name_when_in_range() {
        assert_eq!(Threshold::ERROR.to_string(), "error");
        assert_eq!(Threshold(12).to_string(), "12");
        assert_eq!(Threshold::default(), Threshold::INFO);
    }
}
