use axum::http::{HeaderName, HeaderValue, Method, header};
use config::{CorsConfig, Environment};
use tower_http::cors::{AllowOrigin, CorsLayer};

const X_REQUESTED_WITH: HeaderName = HeaderName::from_static("x-requested-with");

/// Development accepts any origin; otherwise only the configured list.
pub fn cors_layer(environment: Environment, cors: &CorsConfig) -> CorsLayer {
    let allow_origin = match environment {
        Environment::Development => AllowOrigin::any(),
        Environment::Production => {
            let origins: Vec<HeaderValue> = cors
                .allowed_origins
                .iter()
                .filter_map(|origin| match HeaderValue::from_str(origin.trim()) {
                    Ok(value) => Some(value),
                    Err(err) => {
                        tracing::warn!(origin = %origin, error = %err, "Ignoring invalid CORS origin");
                        None
                    }
                })
                .collect();
            AllowOrigin::list(origins)
        }
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::HEAD, Method::POST])
        .allow_headers([
            header::ORIGIN,
            X_REQUESTED_WITH,
            header::CONTENT_TYPE,
            header::ACCEPT,
        ])
}
