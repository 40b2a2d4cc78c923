pub mod config;
pub mod errors;
pub mod handler;
pub mod response;

pub use config::{ConfigError, ErrorMode, HandlerConfig};
pub use errors::AnnounceError;
pub use handler::{Action, Reply, dispatch, function_handler};
