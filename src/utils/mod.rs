pub mod errors;
pub mod tracing;

pub use errors::{RouterError, RouterResult};
