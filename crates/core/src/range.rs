use crate::error::{Result, ShareError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A suffix window over the year axis.
///
/// Serialized as a string: `"all"` or the number of most recent years
/// (e.g. `"10"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum TimeRange {
    #[default]
    All,
    /// The most recent `n` years, `n >= 1`.
    Last(u16),
}

impl TimeRange {
    /// Options offered by the range selector.
    pub const PRESETS: [TimeRange; 4] = [
        TimeRange::All,
        TimeRange::Last(5),
        TimeRange::Last(10),
        TimeRange::Last(15),
    ];

    /// Index of the first year kept when the axis has `len` entries.
    ///
    /// Ranges longer than the axis keep everything.
    pub fn start_index(self, len: usize) -> usize {
        match self {
            TimeRange::All     => 0,
            TimeRange::Last(n) => len.saturating_sub(usize::from(n)),
        }
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeRange::All     => f.write_str("All years"),
            TimeRange::Last(n) => write!(f, "Last {n} years"),
        }
    }
}

impl FromStr for TimeRange {
    type Err = ShareError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("all") {
            return Ok(TimeRange::All);
        }
        match s.parse::<u16>() {
            Ok(n) if n > 0 => Ok(TimeRange::Last(n)),
            _ => Err(ShareError::InvalidRange(s.to_string())),
        }
    }
}

impl TryFrom<String> for TimeRange {
    type Error = ShareError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<TimeRange> for String {
    fn from(range: TimeRange) -> Self {
        match range {
            TimeRange::All     => "all".to_string(),
            TimeRange::Last(n) => n.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_index_all_is_zero() {
        assert_eq!(TimeRange::All.start_index(24), 0);
    }

    #[test]
    fn start_index_keeps_suffix() {
        assert_eq!(TimeRange::Last(5).start_index(24), 19);
        assert_eq!(TimeRange::Last(24).start_index(24), 0);
    }

    #[test]
    fn start_index_clamps_oversized_range() {
        assert_eq!(TimeRange::Last(50).start_index(24), 0);
    }

    #[test]
    fn parse_accepts_all_and_numbers() {
        assert_eq!("all".parse::<TimeRange>().unwrap(), TimeRange::All);
        assert_eq!("ALL".parse::<TimeRange>().unwrap(), TimeRange::All);
        assert_eq!(" 10 ".parse::<TimeRange>().unwrap(), TimeRange::Last(10));
    }

    #[test]
    fn parse_rejects_zero_and_junk() {
        assert!(matches!("0".parse::<TimeRange>(), Err(ShareError::InvalidRange(_))));
        assert!("-3".parse::<TimeRange>().is_err());
        assert!("decade".parse::<TimeRange>().is_err());
    }

    #[test]
    fn display_labels() {
        assert_eq!(TimeRange::All.to_string(), "All years");
        assert_eq!(TimeRange::Last(5).to_string(), "Last 5 years");
        assert_eq!(TimeRange::Last(1).to_string(), "Last 1 years");
    }
}
