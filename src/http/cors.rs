//! CORS decoration module
//!
//! Every response the server produces passes through [`CorsHeaders::apply`],
//! whatever its method or status. The header values come from configuration
//! and are validated once at startup, so the hot path only clones
//! pre-checked `HeaderValue`s.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::header::{
    HeaderValue, InvalidHeaderValue, ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS,
    ACCESS_CONTROL_ALLOW_ORIGIN,
};
use hyper::Response;

use crate::config::CorsConfig;

/// Pre-validated CORS header values.
#[derive(Debug, Clone)]
pub struct CorsHeaders {
    allow_origin: HeaderValue,
    allow_methods: HeaderValue,
    allow_headers: HeaderValue,
}

impl CorsHeaders {
    /// Validate the configured header values.
    ///
    /// Fails at startup if any configured value is not a legal header value.
    pub fn from_config(config: &CorsConfig) -> Result<Self, InvalidHeaderValue> {
        Ok(Self {
            allow_origin: HeaderValue::from_str(&config.allow_origin)?,
            allow_methods: HeaderValue::from_str(&config.allow_methods)?,
            allow_headers: HeaderValue::from_str(&config.allow_headers)?,
        })
    }

    /// Insert the three CORS headers, overwriting any existing values.
    pub fn apply(&self, response: &mut Response<Full<Bytes>>) {
        let headers = response.headers_mut();
        headers.insert(ACCESS_CONTROL_ALLOW_ORIGIN, self.allow_origin.clone());
        headers.insert(ACCESS_CONTROL_ALLOW_METHODS, self.allow_methods.clone());
        headers.insert(ACCESS_CONTROL_ALLOW_HEADERS, self.allow_headers.clone());
    }
}
