use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How a forward lookup with more than one address is rendered.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum MultiAddressStyle {
    /// `name resolves to a1, a2, a3.`
    #[default]
    Inline,

    /// A `name resolves to:` header followed by one ` • addr` line per address.
    Bulleted,
}

impl MultiAddressStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Inline => "inline",
            Self::Bulleted => "bulleted",
        }
    }
}

impl FromStr for MultiAddressStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "inline" => Ok(Self::Inline),
            "bulleted" => Ok(Self::Bulleted),
            other => Err(format!(
                "Invalid multi-address style '{}'. Expected 'inline' or 'bulleted'",
                other
            )),
        }
    }
}

impl fmt::Display for MultiAddressStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct ReplyConfig {
    #[serde(default)]
    pub multi_address_style: MultiAddressStyle,
}
