//! API root, health check and the OpenAPI document.

use axum::{
    http::{HeaderMap, StatusCode, header},
    response::Json,
};
use utoipa::OpenApi;

use crate::{ApiDoc, types::ApiRoot};

/// Health check endpoint.
#[utoipa::path(
    get,
    path = "/health",
    tag = "root",
    responses(
        (status = 200, description = "Health check passed")
    )
)]
pub async fn health_check() -> StatusCode {
    StatusCode::OK
}

/// Links to the five collections.
///
/// Links are absolute when the request names its host, relative otherwise.
#[utoipa::path(
    get,
    path = "/api/",
    tag = "root",
    responses(
        (status = 200, description = "Collection links", body = ApiRoot)
    )
)]
pub async fn api_root(headers: HeaderMap) -> Json<ApiRoot> {
    Json(ApiRoot::under(&base_url(&headers)))
}

/// The OpenAPI document for this server.
pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

fn base_url(headers: &HeaderMap) -> String {
    let Some(host) = headers.get(header::HOST).and_then(|v| v.to_str().ok()) else {
        return String::new();
    };
    let scheme = headers
        .get("x-forwarded-proto")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("http");
    format!("{scheme}://{host}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_base_url_without_host_is_relative() {
        assert_eq!(base_url(&HeaderMap::new()), "");
    }

    #[test]
    fn test_base_url_honours_forwarded_proto() {
        let mut headers = HeaderMap::new();
        headers.insert(header::HOST, HeaderValue::from_static("octofit.example.com"));
        assert_eq!(base_url(&headers), "http://octofit.example.com");

        headers.insert("x-forwarded-proto", HeaderValue::from_static("https"));
        assert_eq!(base_url(&headers), "https://octofit.example.com");
    }
}
