//! Options controlling input normalization and name resolution.

use serde::{Deserialize, Serialize};

/// What to do when a type or group name resolves only to the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResolutionMode {
    /// Keep the documented default and carry on.
    #[default]
    Lenient,
    /// Reject the request with an `UnresolvedName` error.
    Strict,
}

/// What to do with a secondary input longer than the name list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BroadcastPolicy {
    /// Drop the surplus elements.
    #[default]
    Truncate,
    /// Report an input shape error.
    Reject,
}

/// Options for building parameter requests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizationOptions {
    #[serde(default)]
    pub resolution: ResolutionMode,
    #[serde(default)]
    pub broadcast: BroadcastPolicy,
}

impl NormalizationOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Strict resolution and no silent truncation.
    pub fn strict() -> Self {
        Self {
            resolution: ResolutionMode::Strict,
            broadcast: BroadcastPolicy::Reject,
        }
    }

    pub fn with_resolution(mut self, mode: ResolutionMode) -> Self {
        self.resolution = mode;
        self
    }

    pub fn with_broadcast(mut self, policy: BroadcastPolicy) -> Self {
        self.broadcast = policy;
        self
    }
}
