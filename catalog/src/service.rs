//! Remote collaborator traits.
//!
//! SYSTEM CONTEXT
//! ==============
//! The dashboard runs single-threaded in the browser, so futures here are not
//! `Send`. The `client` crate implements both traits over `gloo-net`; tests use
//! scripted fakes.

use async_trait::async_trait;

use crate::error::ServiceError;
use crate::product::{Product, ProductDraft};

/// The remote product collection.
#[async_trait(?Send)]
pub trait CatalogService {
    /// Fetch the full collection.
    async fn list(&self) -> Result<Vec<Product>, ServiceError>;

    /// Persist a draft. The server assigns the id.
    async fn create(&self, draft: &ProductDraft) -> Result<Product, ServiceError>;

    /// Replace the record `product.id` wholesale.
    async fn update(&self, product: &Product) -> Result<Product, ServiceError>;

    /// Remove the record `id`.
    async fn delete(&self, id: &str) -> Result<(), ServiceError>;
}

/// Remote asset storage that turns an uploaded file into a stable URL.
#[async_trait(?Send)]
pub trait AssetStore {
    /// Platform file handle (a browser `File`, a byte buffer in tests).
    type File;

    /// Upload one file and return its public URL.
    async fn upload(&self, file: &Self::File) -> Result<String, ServiceError>;
}

#[async_trait(?Send)]
impl<'a, T: CatalogService + ?Sized> CatalogService for &'a T {
    async fn list(&self) -> Result<Vec<Product>, ServiceError> {
        (**self).list().await
    }

    async fn create(&self, draft: &ProductDraft) -> Result<Product, ServiceError> {
        (**self).create(draft).await
    }

    async fn update(&self, product: &Product) -> Result<Product, ServiceError> {
        (**self).update(product).await
    }

    async fn delete(&self, id: &str) -> Result<(), ServiceError> {
        (**self).delete(id).await
    }
}

#[async_trait(?Send)]
impl<'a, T: AssetStore + ?Sized> AssetStore for &'a T {
    type File = T::File;

    async fn upload(&self, file: &Self::File) -> Result<String, ServiceError> {
        (**self).upload(file).await
    }
}
