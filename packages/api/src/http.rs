//! # Request plumbing
//!
//! In the browser: `gloo-net` fetch with same-origin credentials so the
//! session cookie rides along, plus an `X-CSRFToken` header on mutations.
//! Off-browser (native builds, unit tests): stubs returning
//! [`ApiError::Unsupported`] so callers compile and tests link.
//!
//! Rejection bodies are read as text first and parsed leniently — the
//! backend serves HTML error pages for some 5xx responses and those must
//! not turn into a second error.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::ApiError;

/// HTTP verbs the backend routes use.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl Method {
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
        }
    }
}

#[cfg(target_arch = "wasm32")]
impl Method {
    /// Everything except GET changes state and needs the CSRF header.
    fn needs_csrf(self) -> bool {
        !matches!(self, Method::Get)
    }
}

/// Marker for bodyless mutations, so call sites read cleanly.
pub(crate) const NO_BODY: Option<&()> = None;

#[cfg(target_arch = "wasm32")]
async fn dispatch<B: Serialize>(
    method: Method,
    path: &str,
    body: Option<&B>,
) -> Result<gloo_net::http::Response, ApiError> {
    use gloo_net::http::Request;

    let builder = match method {
        Method::Get => Request::get(path),
        Method::Post => Request::post(path),
        Method::Put => Request::put(path),
        Method::Patch => Request::patch(path),
        Method::Delete => Request::delete(path),
    }
    .credentials(web_sys::RequestCredentials::SameOrigin);

    let builder = if method.needs_csrf() {
        match crate::csrf::token() {
            Some(token) => builder.header(crate::csrf::HEADER_NAME, &token),
            None => builder,
        }
    } else {
        builder
    };

    let sent = match body {
        Some(body) => {
            let request = builder
                .json(body)
                .map_err(|err| ApiError::Network(err.to_string()))?;
            request.send().await
        }
        None => builder.send().await,
    };

    sent.map_err(|err| ApiError::Network(err.to_string()))
}

#[cfg(target_arch = "wasm32")]
async fn rejection(path: &str, response: gloo_net::http::Response) -> ApiError {
    let status = response.status();
    tracing::debug!("{path} rejected with status {status}");
    let body = match response.text().await {
        Ok(text) => serde_json::from_str::<crate::error::ErrorBody>(&text).ok(),
        Err(_) => None,
    };
    ApiError::Rejected { status, body }
}

/// GET a JSON payload.
#[cfg(target_arch = "wasm32")]
pub(crate) async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let response = dispatch::<()>(Method::Get, path, None).await?;
    if !response.ok() {
        return Err(rejection(path, response).await);
    }
    response
        .json::<T>()
        .await
        .map_err(|err| ApiError::Network(err.to_string()))
}

#[cfg(not(target_arch = "wasm32"))]
pub(crate) async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    tracing::debug!("GET {path} skipped off-browser");
    Err(ApiError::Unsupported)
}

/// Send a JSON body and decode a JSON reply.
#[cfg(target_arch = "wasm32")]
pub(crate) async fn send_json<B: Serialize, T: DeserializeOwned>(
    method: Method,
    path: &str,
    body: &B,
) -> Result<T, ApiError> {
    let response = dispatch(method, path, Some(body)).await?;
    if !response.ok() {
        return Err(rejection(path, response).await);
    }
    response
        .json::<T>()
        .await
        .map_err(|err| ApiError::Network(err.to_string()))
}

#[cfg(not(target_arch = "wasm32"))]
pub(crate) async fn send_json<B: Serialize, T: DeserializeOwned>(
    method: Method,
    path: &str,
    body: &B,
) -> Result<T, ApiError> {
    let _ = body;
    tracing::debug!("{} {path} skipped off-browser", method.as_str());
    Err(ApiError::Unsupported)
}

/// Send a request (optionally with a JSON body) and ignore the reply body.
#[cfg(target_arch = "wasm32")]
pub(crate) async fn send_empty<B: Serialize>(
    method: Method,
    path: &str,
    body: Option<&B>,
) -> Result<(), ApiError> {
    let response = dispatch(method, path, body).await?;
    if !response.ok() {
        return Err(rejection(path, response).await);
    }
    Ok(())
}

#[cfg(not(target_arch = "wasm32"))]
pub(crate) async fn send_empty<B: Serialize>(
    method: Method,
    path: &str,
    body: Option<&B>,
) -> Result<(), ApiError> {
    let _ = body;
    tracing::debug!("{} {path} skipped off-browser", method.as_str());
    Err(ApiError::Unsupported)
}
