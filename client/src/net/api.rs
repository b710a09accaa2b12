//! HTTP adapters for the catalog backend, the asset store and the
//! authentication service.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): every call fails with `ServiceError::Unavailable`; the
//! dashboard only fetches after hydration.
//!
//! ERROR HANDLING
//! ==============
//! Transport failures, non-2xx statuses and undecodable bodies map onto
//! `ServiceError` variants. The engine decides what to keep; nothing here
//! touches UI state.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use async_trait::async_trait;
use catalog::error::ServiceError;
#[cfg(any(test, feature = "hydrate"))]
use catalog::product::parse_collection;
use catalog::product::{Product, ProductDraft};
use catalog::service::{AssetStore, CatalogService};
#[cfg(any(test, feature = "hydrate"))]
use serde::Deserialize;

use crate::config::{AssetConfig, CatalogRoutes};

/// A file chosen in the form's file input.
#[derive(Clone, Debug)]
pub struct PickedFile {
    pub name: String,
    #[cfg(feature = "hydrate")]
    pub file: web_sys::File,
}

/// Token and user record handed back by a successful login.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoginSession {
    pub token: String,
    /// Raw JSON of the user record, stored as-is.
    pub user: Option<String>,
}

#[cfg(feature = "hydrate")]
#[derive(serde::Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[cfg(any(test, feature = "hydrate"))]
#[derive(Deserialize)]
struct LoginResponse {
    #[serde(default)]
    status: Option<bool>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    token: Option<String>,
    #[serde(default)]
    user: Option<serde_json::Value>,
}

#[cfg(any(test, feature = "hydrate"))]
#[derive(Deserialize)]
struct UploadResponse {
    secure_url: String,
}

#[cfg(any(test, feature = "hydrate"))]
fn decode_error(e: &serde_json::Error) -> ServiceError {
    ServiceError::Decode(e.to_string())
}

#[cfg(any(test, feature = "hydrate"))]
fn decode_products(body: &str) -> Result<Vec<Product>, ServiceError> {
    parse_collection(body).map_err(|e| decode_error(&e))
}

#[cfg(any(test, feature = "hydrate"))]
/// The record echoed by create/update. The backend sometimes wraps it under
/// `product` or `data`, and sometimes sends only a message; then `fallback`
/// stands in, since the engine refetches anyway.
fn decode_echo(body: &str, fallback: impl FnOnce() -> Product) -> Product {
    let Ok(value) = serde_json::from_str::<serde_json::Value>(body) else {
        return fallback();
    };
    ["product", "data"]
        .iter()
        .filter_map(|key| value.get(key))
        .chain(std::iter::once(&value))
        .find_map(|candidate| Product::deserialize(candidate).ok())
        .unwrap_or_else(fallback)
}

#[cfg(any(test, feature = "hydrate"))]
fn decode_upload(body: &str) -> Result<String, ServiceError> {
    let response: UploadResponse = serde_json::from_str(body).map_err(|e| decode_error(&e))?;
    if response.secure_url.is_empty() {
        return Err(ServiceError::Decode("upload response carried no secure_url".to_owned()));
    }
    Ok(response.secure_url)
}

#[cfg(any(test, feature = "hydrate"))]
fn login_failed_message(status: u16) -> String {
    format!("Login failed ({status})")
}

#[cfg(any(test, feature = "hydrate"))]
fn interpret_login(status: u16, body: &str) -> Result<LoginSession, String> {
    let http_ok = (200..300).contains(&status);
    let Ok(response) = serde_json::from_str::<LoginResponse>(body) else {
        return Err(if http_ok { "Malformed login response".to_owned() } else { login_failed_message(status) });
    };
    if !http_ok || response.status == Some(false) {
        return Err(response.message.unwrap_or_else(|| login_failed_message(status)));
    }
    match response.token.filter(|t| !t.is_empty()) {
        Some(token) => Ok(LoginSession { token, user: response.user.map(|u| u.to_string()) }),
        None => Err("Login response carried no token".to_owned()),
    }
}

#[cfg(feature = "hydrate")]
fn transport(e: impl std::fmt::Display) -> ServiceError {
    ServiceError::Transport(e.to_string())
}

#[cfg(feature = "hydrate")]
async fn read_body(
    request: Result<gloo_net::http::Request, gloo_net::Error>,
) -> Result<String, ServiceError> {
    let response = request.map_err(transport)?.send().await.map_err(transport)?;
    if !response.ok() {
        return Err(ServiceError::Status(response.status()));
    }
    response.text().await.map_err(|e| ServiceError::Decode(e.to_string()))
}

/// The product collection over HTTP.
#[derive(Clone, Debug)]
pub struct HttpCatalog {
    routes: CatalogRoutes,
}

impl HttpCatalog {
    pub fn new(routes: CatalogRoutes) -> Self {
        Self { routes }
    }
}

#[async_trait(?Send)]
impl CatalogService for HttpCatalog {
    async fn list(&self) -> Result<Vec<Product>, ServiceError> {
        #[cfg(feature = "hydrate")]
        {
            let body = read_body(gloo_net::http::Request::get(&self.routes.list_url()).build()).await?;
            decode_products(&body)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = &self.routes;
            Err(ServiceError::Unavailable)
        }
    }

    async fn create(&self, draft: &ProductDraft) -> Result<Product, ServiceError> {
        #[cfg(feature = "hydrate")]
        {
            let request = gloo_net::http::Request::post(&self.routes.create_url()).json(draft);
            let body = read_body(request).await?;
            Ok(decode_echo(&body, || Product::from_draft(String::new(), draft.clone())))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&self.routes, draft);
            Err(ServiceError::Unavailable)
        }
    }

    async fn update(&self, product: &Product) -> Result<Product, ServiceError> {
        #[cfg(feature = "hydrate")]
        {
            let request = gloo_net::http::Request::put(&self.routes.item_url(&product.id)).json(product);
            let body = read_body(request).await?;
            Ok(decode_echo(&body, || product.clone()))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&self.routes, product);
            Err(ServiceError::Unavailable)
        }
    }

    async fn delete(&self, id: &str) -> Result<(), ServiceError> {
        #[cfg(feature = "hydrate")]
        {
            read_body(gloo_net::http::Request::delete(&self.routes.item_url(id)).build()).await?;
            Ok(())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&self.routes, id);
            Err(ServiceError::Unavailable)
        }
    }
}

/// Unsigned-preset uploads to the image CDN.
#[derive(Clone, Debug)]
pub struct CloudinaryStore {
    config: AssetConfig,
}

impl CloudinaryStore {
    pub fn new(config: AssetConfig) -> Self {
        Self { config }
    }
}

#[async_trait(?Send)]
impl AssetStore for CloudinaryStore {
    type File = PickedFile;

    async fn upload(&self, file: &PickedFile) -> Result<String, ServiceError> {
        #[cfg(feature = "hydrate")]
        {
            let js_error = |e: wasm_bindgen::JsValue| ServiceError::Transport(format!("{e:?}"));
            let form = web_sys::FormData::new().map_err(js_error)?;
            form.append_with_blob("file", &file.file).map_err(js_error)?;
            form.append_with_str("upload_preset", &self.config.preset).map_err(js_error)?;
            let body = read_body(gloo_net::http::Request::post(&self.config.upload_url).body(form)).await?;
            decode_upload(&body)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&self.config, file);
            Err(ServiceError::Unavailable)
        }
    }
}

/// Exchange credentials for a session token.
///
/// # Errors
///
/// Returns a user-facing message when the request fails or the service
/// rejects the credentials.
pub async fn login(url: &str, email: &str, password: &str) -> Result<LoginSession, String> {
    #[cfg(feature = "hydrate")]
    {
        let response = gloo_net::http::Request::post(url)
            .json(&LoginRequest { email, password })
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        let status = response.status();
        let body = response.text().await.map_err(|e| e.to_string())?;
        interpret_login(status, &body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (url, email, password);
        Err("not available on server".to_owned())
    }
}
