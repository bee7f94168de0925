//! Frontend configuration

use crate::browser::page_origin;
use rota_core::PortalConfig;

/// Configuration for the browser app: defaults, with the API on the page's origin
pub fn portal_config() -> PortalConfig {
    let mut config = PortalConfig::default();
    if config.api.base_url.is_empty() {
        config.api.base_url = page_origin();
    }
    config
}
