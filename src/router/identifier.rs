//! Qualified tool identifier resolution.

use crate::utils::errors::{RouterError, RouterResult};

/// Separator between the provider and capability components.
pub const SEPARATOR: &str = "__";

/// A resolved qualified identifier.
///
/// Derived per call and never stored; both components are guaranteed
/// non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolId {
    pub provider: String,
    pub capability: String,
}

impl ToolId {
    /// Parse `<provider>__<capability>`.
    ///
    /// Anything that does not split into exactly two non-empty components on
    /// the separator fails with `MalformedIdentifier`. Whether the provider
    /// or capability actually exists is not checked here.
    pub fn resolve(identifier: &str) -> RouterResult<Self> {
        let parts: Vec<&str> = identifier.split(SEPARATOR).collect();
        match parts.as_slice() {
            [provider, capability] if !provider.is_empty() && !capability.is_empty() => {
                Ok(Self {
                    provider: provider.to_string(),
                    capability: capability.to_string(),
                })
            }
            _ => Err(RouterError::MalformedIdentifier(identifier.to_string())),
        }
    }
}

impl std::fmt::Display for ToolId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}{}", self.provider, SEPARATOR, self.capability)
    }
}
