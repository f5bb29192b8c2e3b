//! Toolgate: routes qualified tool invocations to capability providers.
//!
//! A qualified identifier names a provider and a capability joined by `__`.
//! The router resolves the identifier, selects a transport (mock stub,
//! remote HTTP, or a channel inherited from an enclosing runtime) and
//! executes the call. Callers never need to know which transport served
//! them.

pub mod cli;
pub mod config;
pub mod router;
pub mod utils;

pub use config::{ProviderDescriptor, ProvidersConfig};
pub use router::{InvocationRequest, Router, RouterOptions, ToolId, TransportKind};
pub use utils::{RouterError, RouterResult};
