//! Invocation execution over the selected transport.

use crate::config::{ConfigStore, ProviderDescriptor};
use crate::router::identifier::ToolId;
use crate::router::mock;
use crate::router::transport::{
    resolve_remote_address, select_transport, RouterOptions, TransportKind,
};
use crate::utils::errors::{RouterError, RouterResult};
use futures::future::try_join_all;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Timeout applied to health probes.
const HEALTH_TIMEOUT: Duration = Duration::from_secs(5);

/// A single member of a batch invocation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvocationRequest {
    pub identifier: String,
    #[serde(default)]
    pub input: Value,
}

/// Backing store for a router: the process-wide memoized store, or an owned
/// one when an explicit config path was supplied.
enum StoreHandle {
    Shared,
    Owned(ConfigStore),
}

/// Routes qualified tool invocations to capability providers.
///
/// One attempt per call, no retries; retry policy belongs to the wrappers
/// sitting above this layer.
pub struct Router {
    options: RouterOptions,
    store: StoreHandle,
    http: reqwest::Client,
}

impl Router {
    pub fn new(options: RouterOptions) -> Self {
        let store = match &options.config_path {
            Some(path) => StoreHandle::Owned(ConfigStore::new(path.clone())),
            None => StoreHandle::Shared,
        };
        Self {
            options,
            store,
            http: reqwest::Client::new(),
        }
    }

    fn store(&self) -> &ConfigStore {
        match &self.store {
            StoreHandle::Shared => crate::config::shared(),
            StoreHandle::Owned(store) => store,
        }
    }

    /// Construct with all switches read from the process environment.
    pub fn from_env() -> Self {
        Self::new(RouterOptions::from_env())
    }

    /// The descriptor configured for `provider`, if any.
    pub async fn provider_descriptor(&self, provider: &str) -> Option<ProviderDescriptor> {
        self.store().descriptor(provider).await
    }

    /// Execute a single invocation.
    ///
    /// The result is the provider's raw output; no schema validation is
    /// applied in either direction.
    pub async fn invoke(&self, identifier: &str, input: Value) -> RouterResult<Value> {
        let id = ToolId::resolve(identifier)?;
        let config = self.store().load().await;
        let transport = select_transport(&id.provider, config, &self.options);
        debug!("Invoking {} via {} transport", id, transport);

        match transport {
            TransportKind::Mock => Ok(mock::respond(&id.capability)),
            TransportKind::RemoteHttp => self.invoke_remote(&id, &input).await,
            TransportKind::InheritedChannel => {
                warn!(
                    "Provider '{}' has no remote address configured and no mock mode is active; \
                     an inherited host channel is assumed but cannot be opened from here",
                    id.provider
                );
                warn!(
                    "Falling back to mock output for {}; configure a url for '{}' or set {} to reach a real provider",
                    id,
                    id.provider,
                    crate::router::transport::REMOTE_URL_ENV
                );
                Ok(mock::respond(&id.capability))
            }
        }
    }

    async fn invoke_remote(&self, id: &ToolId, input: &Value) -> RouterResult<Value> {
        let descriptor = self.store().descriptor(&id.provider).await;
        let address = resolve_remote_address(descriptor.as_ref(), &self.options)
            .ok_or_else(|| {
                // select_transport only picks RemoteHttp when an address resolves
                RouterError::Transport(format!("provider '{}' has no remote address", id.provider))
            })?;
        let endpoint = join_endpoint(&address, &format!("tools/{}", id.capability));

        debug!("POST {}", endpoint);
        let response = self.http.post(&endpoint).json(input).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(RouterError::RemoteInvocation {
                provider: id.provider.clone(),
                capability: id.capability.clone(),
                status: status.as_u16(),
            });
        }

        Ok(response.json::<Value>().await?)
    }

    /// Execute every request concurrently, preserving request order in the
    /// result sequence. Any member failure fails the whole batch.
    pub async fn batch_invoke(&self, requests: Vec<InvocationRequest>) -> RouterResult<Vec<Value>> {
        debug!("Batch invoking {} request(s)", requests.len());
        try_join_all(
            requests
                .into_iter()
                .map(|r| async move { self.invoke(&r.identifier, r.input).await }),
        )
        .await
    }

    /// List the capabilities a provider declares at its discovery endpoint.
    ///
    /// Unknown providers, providers without a remote address, mock mode, and
    /// every discovery failure all yield an empty list. An empty list means
    /// "unknown", not "provider has no capabilities".
    pub async fn list_capabilities(&self, provider: &str) -> Vec<String> {
        if self.options.mock_mode {
            debug!("Mock mode: skipping discovery for '{}'", provider);
            return Vec::new();
        }

        let descriptor = self.store().descriptor(provider).await;
        let Some(address) = resolve_remote_address(descriptor.as_ref(), &self.options) else {
            debug!("Provider '{}' has no remote address; no discovery", provider);
            return Vec::new();
        };

        let endpoint = join_endpoint(&address, "tools");
        let response = match self.http.get(&endpoint).send().await {
            Ok(r) if r.status().is_success() => r,
            Ok(r) => {
                warn!("Discovery for '{}' returned status {}", provider, r.status());
                return Vec::new();
            }
            Err(e) => {
                warn!("Discovery for '{}' failed: {}", provider, e);
                return Vec::new();
            }
        };

        match response.json::<Value>().await {
            Ok(body) => parse_capability_list(&body),
            Err(e) => {
                warn!("Discovery response for '{}' did not parse: {}", provider, e);
                Vec::new()
            }
        }
    }

    /// Probe a provider's health endpoint.
    ///
    /// `false` without any network access when no remote address resolves;
    /// otherwise whether the probe reported success within the timeout.
    /// Transport errors never propagate.
    pub async fn check_health(&self, provider: &str) -> bool {
        let descriptor = self.store().descriptor(provider).await;
        let Some(address) = resolve_remote_address(descriptor.as_ref(), &self.options) else {
            return false;
        };

        let endpoint = join_endpoint(&address, "health");
        match self
            .http
            .get(&endpoint)
            .timeout(HEALTH_TIMEOUT)
            .send()
            .await
        {
            Ok(response) => {
                let healthy = response.status().is_success();
                info!("Health probe for '{}': {}", provider, healthy);
                healthy
            }
            Err(e) => {
                warn!("Health probe for '{}' failed: {}", provider, e);
                false
            }
        }
    }
}

fn join_endpoint(address: &str, path: &str) -> String {
    format!("{}/{}", address.trim_end_matches('/'), path)
}

/// Accept the discovery shapes providers actually emit: a bare array of
/// names, an array of `{name}` objects, or either wrapped in `{"tools": ...}`.
fn parse_capability_list(body: &Value) -> Vec<String> {
    let list = match body {
        Value::Array(items) => items.as_slice(),
        Value::Object(map) => match map.get("tools") {
            Some(Value::Array(items)) => items.as_slice(),
            _ => return Vec::new(),
        },
        _ => return Vec::new(),
    };

    list.iter()
        .filter_map(|item| match item {
            Value::String(name) => Some(name.clone()),
            Value::Object(obj) => obj
                .get("name")
                .and_then(Value::as_str)
                .map(|s| s.to_string()),
            _ => None,
        })
        .collect()
}
