//! Transport selection for tool invocations.

use crate::config::{ProviderDescriptor, ProvidersConfig};
use std::path::PathBuf;
use tracing::debug;

/// Environment variable forcing mock mode for every invocation.
pub const MOCK_MODE_ENV: &str = "TOOLGATE_MOCK_MODE";
/// Environment variable overriding the remote address for all providers.
pub const REMOTE_URL_ENV: &str = "TOOLGATE_REMOTE_URL";

/// The mutually exclusive invocation transports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportKind {
    /// Synthesize a stub response locally; no provider is contacted.
    Mock,
    /// POST to the provider's (or overridden) remote address.
    RemoteHttp,
    /// The provider's channel is assumed to be held open by an enclosing
    /// runtime. This layer cannot open such a channel itself, so execution
    /// reports the missing configuration and degrades to Mock.
    InheritedChannel,
}

impl std::fmt::Display for TransportKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransportKind::Mock => write!(f, "mock"),
            TransportKind::RemoteHttp => write!(f, "remote-http"),
            TransportKind::InheritedChannel => write!(f, "inherited-channel"),
        }
    }
}

/// Router behavior switches, resolved once at construction.
///
/// The process environment is read only inside `from_env`; tests construct
/// options directly instead of mutating environment variables.
#[derive(Debug, Clone, Default)]
pub struct RouterOptions {
    /// Force the Mock transport for every call.
    pub mock_mode: bool,
    /// Remote address applied to every provider, configured or not.
    pub remote_override: Option<String>,
    /// Explicit configuration file path; `None` uses the environment or the
    /// default location.
    pub config_path: Option<PathBuf>,
}

impl RouterOptions {
    /// Read `TOOLGATE_MOCK_MODE`, `TOOLGATE_REMOTE_URL` and `TOOLGATE_CONFIG`.
    pub fn from_env() -> Self {
        let mock_mode = std::env::var(MOCK_MODE_ENV)
            .map(|v| matches!(v.as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);
        let remote_override = std::env::var(REMOTE_URL_ENV)
            .ok()
            .filter(|v| !v.is_empty());
        let config_path = std::env::var(crate::config::store::CONFIG_PATH_ENV)
            .ok()
            .map(|p| PathBuf::from(crate::config::expand_path(&p)));

        Self {
            mock_mode,
            remote_override,
            config_path,
        }
    }
}

/// Decide which transport handles a call to `provider`.
///
/// Evaluated in strict order: mock mode beats any configured address, a
/// remote address (override or descriptor) beats the inherited channel, and
/// everything else lands on `InheritedChannel`.
pub fn select_transport(
    provider: &str,
    config: &ProvidersConfig,
    options: &RouterOptions,
) -> TransportKind {
    if options.mock_mode {
        debug!("Mock mode enabled; '{}' routed to mock transport", provider);
        return TransportKind::Mock;
    }

    let descriptor = config.get(provider);
    if options.remote_override.is_some() || descriptor.and_then(|d| d.url.as_ref()).is_some() {
        return TransportKind::RemoteHttp;
    }

    TransportKind::InheritedChannel
}

/// Resolve the remote base address for a provider.
///
/// The process-wide override wins over the descriptor's own address when
/// both are present.
pub fn resolve_remote_address(
    descriptor: Option<&ProviderDescriptor>,
    options: &RouterOptions,
) -> Option<String> {
    options
        .remote_override
        .clone()
        .or_else(|| descriptor.and_then(|d| d.url.clone()))
}
