pub mod store;
pub mod types;

pub use store::{default_config_path, expand_path, shared, ConfigStore};
pub use types::{ProviderDescriptor, ProvidersConfig};
