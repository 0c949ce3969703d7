use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Severity of a finding.
///
/// The four axe-core levels are named; anything else is carried through
/// verbatim in `Other` instead of being rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Impact {
    Critical,
    Serious,
    Moderate,
    Minor,
    Other(String),
}

impl Impact {
    /// The named levels, most severe first.
    pub const KNOWN: [Impact; 4] = [
        Impact::Critical,
        Impact::Serious,
        Impact::Moderate,
        Impact::Minor,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            Self::Critical => "critical",
            Self::Serious => "serious",
            Self::Moderate => "moderate",
            Self::Minor => "minor",
            Self::Other(raw) => raw,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl From<&str> for Impact {
    fn from(raw: &str) -> Self {
        match raw {
            "critical" => Self::Critical,
            "serious" => Self::Serious,
            "moderate" => Self::Moderate,
            "minor" => Self::Minor,
            other => Self::Other(other.to_string()),
        }
    }
}

impl From<String> for Impact {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "critical" | "serious" | "moderate" | "minor" => Self::from(raw.as_str()),
            _ => Self::Other(raw),
        }
    }
}

impl Default for Impact {
    fn default() -> Self {
        Self::Other(String::new())
    }
}

impl fmt::Display for Impact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Impact {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

// axe-core emits `"impact": null` for some results, so null maps to an empty `Other`.
impl<'de> Deserialize<'de> for Impact {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.map(Impact::from).unwrap_or_default())
    }
}
