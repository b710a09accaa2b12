//! Local product cache kept in step with the remote catalog.
//!
//! SYSTEM CONTEXT
//! ==============
//! [`ProductList`] is the snapshot the page renders; [`Catalog`] drives remote
//! calls and commits their outcomes into it. The remote service is the source
//! of truth: list responses replace the cache wholesale, and after a create or
//! update the engine refetches rather than trusting the echoed record.
//!
//! Requests are never cancelled. Because every list response is applied as a
//! full snapshot, overlapping fetches resolve to whichever completed last.
//!
//! ERROR HANDLING
//! ==============
//! A failed call leaves the cache exactly as it was, logs a warning, and hands
//! the error back so the caller can keep a form open. No path here panics.

#[cfg(test)]
#[path = "list_test.rs"]
mod list_test;

use crate::cell::StateCell;
use crate::consts::PAGE_SIZE;
use crate::error::ServiceError;
use crate::product::{Product, ProductDraft};
use crate::service::CatalogService;

/// Cached products plus the pagination cursor.
#[derive(Clone, Debug, PartialEq)]
pub struct ProductList {
    items: Vec<Product>,
    page_size: usize,
    cursor: usize,
    in_flight: usize,
}

impl Default for ProductList {
    fn default() -> Self {
        Self::new(PAGE_SIZE)
    }
}

impl ProductList {
    /// An empty list. A zero `page_size` is treated as one.
    #[must_use]
    pub fn new(page_size: usize) -> Self {
        Self { items: Vec::new(), page_size: page_size.max(1), cursor: 0, in_flight: 0 }
    }

    #[must_use]
    pub fn items(&self) -> &[Product] {
        &self.items
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Product> {
        self.items.iter().find(|p| p.id == id)
    }

    #[must_use]
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// True while at least one remote call is outstanding.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.in_flight > 0
    }

    /// Number of pages; an empty list still has one (empty) page.
    #[must_use]
    pub fn page_count(&self) -> usize {
        self.items.len().div_ceil(self.page_size).max(1)
    }

    /// Zero-based index of the page being shown.
    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Products on page `index`. Indices past the end yield an empty slice.
    #[must_use]
    pub fn page(&self, index: usize) -> &[Product] {
        let start = index.saturating_mul(self.page_size).min(self.items.len());
        let end = start.saturating_add(self.page_size).min(self.items.len());
        &self.items[start..end]
    }

    /// Products on the cursor's page.
    #[must_use]
    pub fn current_page(&self) -> &[Product] {
        self.page(self.cursor)
    }

    #[must_use]
    pub fn has_prev(&self) -> bool {
        self.cursor > 0
    }

    #[must_use]
    pub fn has_next(&self) -> bool {
        self.cursor + 1 < self.page_count()
    }

    pub fn next_page(&mut self) {
        if self.has_next() {
            self.cursor += 1;
        }
    }

    pub fn prev_page(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Swap in a server snapshot.
    pub fn replace_all(&mut self, items: Vec<Product>) {
        self.items = items;
        self.clamp_cursor();
    }

    /// Drop `id` locally. Returns `false` when it was not cached.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|p| p.id != id);
        self.clamp_cursor();
        self.items.len() != before
    }

    fn clamp_cursor(&mut self) {
        self.cursor = self.cursor.min(self.page_count() - 1);
    }

    fn begin_request(&mut self) {
        self.in_flight += 1;
    }

    fn end_request(&mut self) {
        self.in_flight = self.in_flight.saturating_sub(1);
    }
}

/// Remote synchronization engine over a shared [`ProductList`].
#[derive(Clone, Debug)]
pub struct Catalog<S, C> {
    service: S,
    list: C,
}

impl<S, C> Catalog<S, C>
where
    S: CatalogService,
    C: StateCell<ProductList>,
{
    pub fn new(service: S, list: C) -> Self {
        Self { service, list }
    }

    /// The cell the engine commits snapshots into.
    pub fn list(&self) -> &C {
        &self.list
    }

    /// Products on page `index` of the current snapshot.
    #[must_use]
    pub fn page(&self, index: usize) -> Vec<Product> {
        self.list.read(|l| l.page(index).to_vec()).unwrap_or_default()
    }

    /// Replace the cache with the remote collection. Returns the new length.
    ///
    /// # Errors
    ///
    /// Returns the [`ServiceError`] from the list call; the cache is untouched.
    pub async fn fetch_all(&self) -> Result<usize, ServiceError> {
        self.list.write(ProductList::begin_request);
        let result = self.service.list().await;
        self.list
            .write(|l| {
                l.end_request();
                match result {
                    Ok(items) => {
                        log::debug!("catalog snapshot: {} product(s)", items.len());
                        l.replace_all(items);
                        Ok(l.len())
                    }
                    Err(e) => {
                        log::warn!("failed to fetch products: {e}");
                        Err(e)
                    }
                }
            })
            .unwrap_or(Err(ServiceError::Unavailable))
    }

    /// Persist a new product, then resynchronize.
    ///
    /// A failed refetch after a successful create is logged but does not fail
    /// the create.
    ///
    /// # Errors
    ///
    /// Returns the [`ServiceError`] from the create call; the cache is
    /// untouched.
    pub async fn create(&self, draft: ProductDraft) -> Result<(), ServiceError> {
        self.mutate("create", self.service.create(&draft)).await?;
        self.resync().await;
        Ok(())
    }

    /// Replace product `id` wholesale, then resynchronize.
    ///
    /// # Errors
    ///
    /// Returns the [`ServiceError`] from the update call; the cache is
    /// untouched.
    pub async fn update(&self, id: &str, draft: ProductDraft) -> Result<(), ServiceError> {
        let product = Product::from_draft(id, draft);
        self.mutate("update", self.service.update(&product)).await?;
        self.resync().await;
        Ok(())
    }

    /// Delete product `id` and drop it from the cache without a refetch.
    ///
    /// # Errors
    ///
    /// Returns the [`ServiceError`] from the delete call; the cache is
    /// untouched.
    pub async fn delete(&self, id: &str) -> Result<(), ServiceError> {
        self.mutate("delete", self.service.delete(id)).await?;
        self.list.write(|l| {
            if !l.remove(id) {
                log::debug!("deleted product {id} was not cached");
            }
        });
        Ok(())
    }

    async fn mutate<T>(
        &self,
        op: &str,
        call: impl Future<Output = Result<T, ServiceError>>,
    ) -> Result<T, ServiceError> {
        self.list.write(ProductList::begin_request);
        let result = call.await;
        self.list.write(ProductList::end_request);
        result.inspect_err(|e| log::warn!("failed to {op} product: {e}"))
    }

    async fn resync(&self) {
        if let Err(e) = self.fetch_all().await {
            log::warn!("product list is stale until the next fetch: {e}");
        }
    }
}
