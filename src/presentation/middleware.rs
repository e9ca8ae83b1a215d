//! Cross-cutting HTTP middleware: forwarded headers and HTTPS redirection.
//!
//! CORS, HSTS, static files and request tracing come from `tower-http`
//! and are composed in [`crate::app`].

use axum::extract::{Request, State};
use axum::http::{header, HeaderMap, HeaderValue, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use tracing::debug;

/// What a reverse proxy told us about the original request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ForwardedInfo {
    /// First entry of `X-Forwarded-For`.
    pub client: Option<String>,
    /// First entry of `X-Forwarded-Proto`, lowercased.
    pub scheme: Option<String>,
    /// First entry of `X-Forwarded-Host`.
    pub host: Option<String>,
}

impl ForwardedInfo {
    pub fn from_headers(headers: &HeaderMap) -> Self {
        Self {
            client: first_value(headers, "x-forwarded-for"),
            scheme: first_value(headers, "x-forwarded-proto").map(|s| s.to_ascii_lowercase()),
            host: first_value(headers, "x-forwarded-host"),
        }
    }
}

/// Trust every forwarded header kind. The forwarded host replaces `Host`,
/// and the full [`ForwardedInfo`] is stored as a request extension.
pub async fn forwarded_headers(mut request: Request, next: Next) -> Response {
    let info = ForwardedInfo::from_headers(request.headers());

    if let Some(host) = info.host.as_deref() {
        if let Ok(value) = HeaderValue::from_str(host) {
            request.headers_mut().insert(header::HOST, value);
        }
    }

    request.extensions_mut().insert(info);
    next.run(request).await
}

/// Redirect plain-HTTP requests to HTTPS on `https_port` with a 307.
///
/// The scheme is `https` only when a proxy says so through
/// `X-Forwarded-Proto`; this server never terminates TLS itself.
pub async fn https_redirection(
    State(https_port): State<u16>,
    request: Request,
    next: Next,
) -> Response {
    let scheme = request
        .extensions()
        .get::<ForwardedInfo>()
        .and_then(|info| info.scheme.as_deref())
        .unwrap_or("http");
    if scheme == "https" {
        return next.run(request).await;
    }

    let Some(host) = request
        .headers()
        .get(header::HOST)
        .and_then(|h| h.to_str().ok())
        .map(strip_port)
    else {
        return next.run(request).await;
    };

    let authority = if https_port == 443 {
        host.to_string()
    } else {
        format!("{}:{}", host, https_port)
    };
    let path_and_query = request
        .uri()
        .path_and_query()
        .map(|p| p.as_str())
        .unwrap_or("/");
    let location = format!("https://{}{}", authority, path_and_query);

    debug!(%location, "redirecting to https");
    (StatusCode::TEMPORARY_REDIRECT, [(header::LOCATION, location)]).into_response()
}

/// HSTS value: 30 days.
pub const HSTS_MAX_AGE: &str = "max-age=2592000";

/// Add `Strict-Transport-Security` to responses for requests whose
/// effective scheme is https. Plain-HTTP responses never carry it.
pub async fn strict_transport_security(request: Request, next: Next) -> Response {
    let secure = request
        .extensions()
        .get::<ForwardedInfo>()
        .and_then(|info| info.scheme.as_deref())
        == Some("https");

    let mut response = next.run(request).await;
    if secure {
        response
            .headers_mut()
            .entry(header::STRICT_TRANSPORT_SECURITY)
            .or_insert(HeaderValue::from_static(HSTS_MAX_AGE));
    }
    response
}

fn first_value(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)?
        .to_str()
        .ok()?
        .split(',')
        .next()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// `example.com:8080` → `example.com`, `[::1]:8080` → `[::1]`.
fn strip_port(host: &str) -> &str {
    if host.starts_with('[') {
        return match host.find(']') {
            Some(end) => &host[..=end],
            None => host,
        };
    }
    host.split(':').next().unwrap_or(host)
}
