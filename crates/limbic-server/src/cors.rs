use std::time::Duration;

use http::Method;
use http::header::{HeaderName, HeaderValue};
use limbic_config::CorsConfig;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

/// Build a Tower CORS layer from configuration
///
/// An empty list means "allow any" for that dimension; invalid entries
/// are dropped.
pub fn cors_layer(config: &CorsConfig) -> CorsLayer {
    let mut layer = CorsLayer::new();

    layer = if config.origins.is_empty() {
        layer.allow_origin(AllowOrigin::any())
    } else {
        let origins: Vec<HeaderValue> = config.origins.iter().filter_map(|o| o.parse().ok()).collect();
        layer.allow_origin(origins)
    };

    layer = if config.methods.is_empty() {
        layer.allow_methods(AllowMethods::any())
    } else {
        let methods: Vec<Method> = config.methods.iter().filter_map(|m| m.parse().ok()).collect();
        layer.allow_methods(methods)
    };

    layer = if config.headers.is_empty() {
        layer.allow_headers(AllowHeaders::any())
    } else {
        let headers: Vec<HeaderName> = config.headers.iter().filter_map(|h| h.parse().ok()).collect();
        layer.allow_headers(headers)
    };

    if let Some(max_age) = config.max_age {
        layer = layer.max_age(Duration::from_secs(max_age));
    }

    layer
}
