//! Remote endpoints the dashboard talks to.
//!
//! Values are fixed at build time from `CATALOG_API_URL`, `ASSET_UPLOAD_URL`,
//! `ASSET_UPLOAD_PRESET` and `AUTH_LOGIN_URL`; unset variables fall back to
//! the production deployment. The WASM bundle has no runtime environment, so
//! there is nothing to read after startup.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

const DEFAULT_CATALOG_API_URL: &str = "https://devmarketbackend-1.onrender.com";
const DEFAULT_ASSET_UPLOAD_URL: &str = "https://api.cloudinary.com/v1_1/de4ks8mkh/image/upload";
const DEFAULT_ASSET_UPLOAD_PRESET: &str = "marketdata";
const DEFAULT_AUTH_LOGIN_PATH: &str = "/user/login";

/// Paths of the product collection on the catalog backend.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CatalogRoutes {
    base: String,
    list: String,
    create: String,
    /// Item path prefix; the product id is appended.
    item: String,
}

impl CatalogRoutes {
    /// The routes the production backend exposes.
    pub fn legacy(base: &str) -> Self {
        Self::new(base, "/product/Product", "/product/creatProducts", "/product")
    }

    /// Plain REST routes: `GET|POST /{collection}`, `PUT|DELETE /{collection}/{id}`.
    pub fn rest(base: &str, collection: &str) -> Self {
        let collection = format!("/{}", collection.trim_matches('/'));
        Self::new(base, &collection, &collection, &collection)
    }

    fn new(base: &str, list: &str, create: &str, item: &str) -> Self {
        Self {
            base: base.trim_end_matches('/').to_owned(),
            list: list.to_owned(),
            create: create.to_owned(),
            item: item.trim_end_matches('/').to_owned(),
        }
    }

    pub fn list_url(&self) -> String {
        format!("{}{}", self.base, self.list)
    }

    pub fn create_url(&self) -> String {
        format!("{}{}", self.base, self.create)
    }

    /// The id is opaque, so it is percent-encoded as one path segment.
    pub fn item_url(&self, id: &str) -> String {
        format!("{}{}/{}", self.base, self.item, encode_segment(id))
    }
}

fn encode_segment(raw: &str) -> String {
    // `byte_serialize` is form encoding: `+` for space. A literal `+` is
    // already `%2B`, so the swap is exact.
    url::form_urlencoded::byte_serialize(raw.as_bytes()).collect::<String>().replace('+', "%20")
}

/// Unsigned-preset upload endpoint of the asset store.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AssetConfig {
    pub upload_url: String,
    pub preset: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    pub catalog: CatalogRoutes,
    pub assets: AssetConfig,
    pub auth_login_url: String,
}

impl ApiConfig {
    /// Resolve from build-time environment.
    pub fn from_build_env() -> Self {
        Self::resolve(
            option_env!("CATALOG_API_URL"),
            option_env!("ASSET_UPLOAD_URL"),
            option_env!("ASSET_UPLOAD_PRESET"),
            option_env!("AUTH_LOGIN_URL"),
        )
    }

    fn resolve(catalog: Option<&str>, upload: Option<&str>, preset: Option<&str>, login: Option<&str>) -> Self {
        let base = non_empty(catalog).unwrap_or(DEFAULT_CATALOG_API_URL);
        let auth_login_url = non_empty(login).map_or_else(
            || format!("{}{DEFAULT_AUTH_LOGIN_PATH}", base.trim_end_matches('/')),
            str::to_owned,
        );
        Self {
            catalog: CatalogRoutes::legacy(base),
            assets: AssetConfig {
                upload_url: non_empty(upload).unwrap_or(DEFAULT_ASSET_UPLOAD_URL).to_owned(),
                preset: non_empty(preset).unwrap_or(DEFAULT_ASSET_UPLOAD_PRESET).to_owned(),
            },
            auth_login_url,
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::resolve(None, None, None, None)
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
