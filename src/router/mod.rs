//! Tool-invocation routing: identifier resolution, transport selection and
//! execution.

pub mod executor;
pub mod identifier;
pub mod mock;
pub mod transport;

pub use executor::{InvocationRequest, Router};
pub use identifier::{ToolId, SEPARATOR};
pub use transport::{select_transport, RouterOptions, TransportKind};
