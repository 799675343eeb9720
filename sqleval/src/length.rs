//! Query-size bucketing by whitespace word count.

use std::fmt;

/// Length bucket of a query string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
pub enum LengthCategory {
    Short,
    Medium,
    Long,
}

impl LengthCategory {
    /// All buckets, in reporting order.
    pub const ALL: [LengthCategory; 3] = [Self::Short, Self::Medium, Self::Long];

    /// Bucket a query: at most 10 words is Short, 11-25 Medium, more Long.
    pub fn of(query: &str) -> Self {
        match query.split_whitespace().count() {
            0..=10 => Self::Short,
            11..=25 => Self::Medium,
            _ => Self::Long,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Short => "Short",
            Self::Medium => "Medium",
            Self::Long => "Long",
        }
    }

    /// Lowercase form used in output file names.
    pub fn file_stem(self) -> &'static str {
        match self {
            Self::Short => "short",
            Self::Medium => "medium",
            Self::Long => "long",
        }
    }
}

impl fmt::Display for LengthCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
