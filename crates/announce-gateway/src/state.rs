use std::sync::Arc;

use announce_api::HandlerConfig;
use announce_core::AnnouncementStore;

use crate::config::GatewayConfig;
use crate::throttle::Throttle;

/// Shared application state passed to all Axum handlers.
#[derive(Clone)]
pub struct AppState {
    /// Store the announcement handler writes to and scans.
    pub store: Arc<dyn AnnouncementStore>,
    pub handler: Arc<HandlerConfig>,
    /// The single key every request must present.
    pub api_key: Arc<str>,
    pub post_throttle: Arc<Throttle>,
    pub get_throttle: Arc<Throttle>,
}

impl AppState {
    pub fn new(store: Arc<dyn AnnouncementStore>, config: &GatewayConfig) -> Self {
        Self {
            store,
            handler: Arc::new(config.handler.clone()),
            api_key: Arc::from(config.api_key.as_str()),
            post_throttle: Arc::new(Throttle::new(config.post_limit)),
            get_throttle: Arc::new(Throttle::new(config.get_limit)),
        }
    }
}
