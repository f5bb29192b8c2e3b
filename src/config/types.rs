use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Connection descriptor for a single capability provider.
///
/// Carries exactly the union of fields the transports need: a launch command
/// for providers hosted by an enclosing runtime, and/or a remote address for
/// providers reachable over HTTP. An absent `url` means the provider is not
/// remotely reachable.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ProviderDescriptor {
    /// Command to launch the provider (local binary or package runner)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,
    /// Arguments for the launch command
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub args: Vec<String>,
    /// Base address for the Remote-HTTP transport
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Environment variables passed to a launched provider
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub env: HashMap<String, String>,
}

/// The configuration document: a single top-level `providers` mapping.
///
/// Immutable after load; there is no live reload.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ProvidersConfig {
    #[serde(default)]
    pub providers: HashMap<String, ProviderDescriptor>,
}

impl ProvidersConfig {
    pub fn get(&self, provider: &str) -> Option<&ProviderDescriptor> {
        self.providers.get(provider)
    }
}
