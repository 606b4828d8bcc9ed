use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Recency window selector.
///
/// Any label outside `1m | 3m | 6m | 1y` is kept as [`TimeFilter::Unrecognised`]
/// rather than rejected. It carries no day threshold and no month count, so
/// every filter given one returns an empty result.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TimeFilter {
    OneMonth,
    ThreeMonths,
    #[default]
    SixMonths,
    OneYear,
    Unrecognised(String),
}

impl TimeFilter {
    /// Maximum transaction age in days.
    pub fn days(&self) -> Option<i64> {
        match self {
            TimeFilter::OneMonth => Some(30),
            TimeFilter::ThreeMonths => Some(90),
            TimeFilter::SixMonths => Some(180),
            TimeFilter::OneYear => Some(365),
            TimeFilter::Unrecognised(_) => None,
        }
    }

    /// Number of trailing revenue periods to keep.
    pub fn months(&self) -> Option<usize> {
        match self {
            TimeFilter::OneMonth => Some(1),
            TimeFilter::ThreeMonths => Some(3),
            TimeFilter::SixMonths => Some(6),
            TimeFilter::OneYear => Some(12),
            TimeFilter::Unrecognised(_) => None,
        }
    }

    pub fn is_recognised(&self) -> bool {
        !matches!(self, TimeFilter::Unrecognised(_))
    }

    pub fn as_str(&self) -> &str {
        match self {
            TimeFilter::OneMonth => "1m",
            TimeFilter::ThreeMonths => "3m",
            TimeFilter::SixMonths => "6m",
            TimeFilter::OneYear => "1y",
            TimeFilter::Unrecognised(s) => s,
        }
    }
}

impl fmt::Display for TimeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for TimeFilter {
    fn from(s: &str) -> Self {
        match s {
            "1m" => TimeFilter::OneMonth,
            "3m" => TimeFilter::ThreeMonths,
            "6m" => TimeFilter::SixMonths,
            "1y" => TimeFilter::OneYear,
            other => TimeFilter::Unrecognised(other.to_string()),
        }
    }
}

impl From<String> for TimeFilter {
    fn from(s: String) -> Self {
        TimeFilter::from(s.as_str())
    }
}

impl From<TimeFilter> for String {
    fn from(t: TimeFilter) -> Self {
        t.as_str().to_string()
    }
}

impl FromStr for TimeFilter {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(TimeFilter::from(s))
    }
}
