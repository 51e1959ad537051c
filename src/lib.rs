pub mod config;
pub mod error;
pub mod relay;
pub mod routes;
pub mod store;

pub use config::Config;
pub use relay::{execute_request, HttpRelayService, RelayService, RequestDescriptor, UpstreamReply};
pub use routes::AppState;
pub use store::{JsonFileStore, PresetStore, SavedRequestRecord};
