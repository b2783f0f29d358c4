use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ResolverBackend {
    /// Platform resolver (getaddrinfo / getnameinfo).
    #[default]
    System,

    /// hickory stub resolver driven by resolv.conf.
    Hickory,
}

impl ResolverBackend {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::System => "system",
            Self::Hickory => "hickory",
        }
    }
}

impl FromStr for ResolverBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "system" => Ok(Self::System),
            "hickory" => Ok(Self::Hickory),
            other => Err(format!(
                "Invalid resolver backend '{}'. Expected 'system' or 'hickory'",
                other
            )),
        }
    }
}

impl fmt::Display for ResolverBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ResolverConfig {
    /// Upper bound for a single forward or reverse lookup.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default)]
    pub backend: ResolverBackend,

    #[serde(default = "default_false")]
    pub dedupe_addresses: bool,
}

impl ResolverConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            backend: ResolverBackend::default(),
            dedupe_addresses: false,
        }
    }
}

fn default_timeout_secs() -> u64 {
    5
}

fn default_false() -> bool {
    false
}
