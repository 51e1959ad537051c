pub mod executor;
pub mod service;
pub mod types;

pub use executor::{execute_request, DEFAULT_TIMEOUT_MS};
pub use service::{HttpRelayService, RelayService};
pub use types::*;
