//! In-crate fakes shared by unit tests.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::pin::Pin;
use std::task::{Context, Poll};

use async_trait::async_trait;
use futures::channel::oneshot;

use crate::error::{ServiceError, StorageError};
use crate::product::{Product, ProductDraft};
use crate::service::{AssetStore, CatalogService};
use crate::storage::PreferenceStore;

/// Storage whose reads and/or writes always fail.
pub struct BrokenStore {
    pub reads_fail: bool,
    pub writes_fail: bool,
    pub writes: Cell<usize>,
}

impl BrokenStore {
    pub fn unreadable() -> Self {
        Self { reads_fail: true, writes_fail: true, writes: Cell::new(0) }
    }

    pub fn read_only() -> Self {
        Self { reads_fail: false, writes_fail: true, writes: Cell::new(0) }
    }
}

impl PreferenceStore for BrokenStore {
    fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        if self.reads_fail { Err(StorageError::Unavailable) } else { Ok(None) }
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        self.writes.set(self.writes.get() + 1);
        if self.writes_fail { Err(StorageError::Rejected("quota".to_owned())) } else { Ok(()) }
    }

    fn remove(&self, _key: &str) -> Result<(), StorageError> {
        if self.writes_fail { Err(StorageError::Rejected("security".to_owned())) } else { Ok(()) }
    }
}

pub fn product(id: &str, name: &str) -> Product {
    Product {
        id: id.to_owned(),
        name: name.to_owned(),
        category: "Templates".to_owned(),
        description: format!("{name} description"),
        price: 10.0,
        live_link: None,
        images: Vec::new(),
    }
}

pub fn products(count: usize) -> Vec<Product> {
    (1..=count).map(|i| product(&format!("p{i}"), &format!("Product {i}"))).collect()
}

/// In-memory backend that behaves like the real service: it assigns ids and
/// keeps the collection. Individual calls can be scripted to fail.
#[derive(Default)]
pub struct FakeCatalog {
    pub rows: RefCell<Vec<Product>>,
    pub next_id: Cell<u32>,
    pub fail_list: Cell<bool>,
    pub fail_create: Cell<bool>,
    pub fail_update: Cell<bool>,
    pub fail_delete: Cell<bool>,
    pub calls: RefCell<Vec<String>>,
}

impl FakeCatalog {
    pub fn with_rows(rows: Vec<Product>) -> Self {
        let fake = Self::default();
        *fake.rows.borrow_mut() = rows;
        fake
    }

    fn record(&self, call: impl Into<String>) {
        self.calls.borrow_mut().push(call.into());
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }
}

#[async_trait(?Send)]
impl CatalogService for FakeCatalog {
    async fn list(&self) -> Result<Vec<Product>, ServiceError> {
        self.record("list");
        if self.fail_list.get() {
            return Err(ServiceError::Transport("connection reset".to_owned()));
        }
        Ok(self.rows.borrow().clone())
    }

    async fn create(&self, draft: &ProductDraft) -> Result<Product, ServiceError> {
        self.record("create");
        if self.fail_create.get() {
            return Err(ServiceError::Status(500));
        }
        let id = self.next_id.get() + 1;
        self.next_id.set(id);
        let created = Product::from_draft(format!("srv-{id}"), draft.clone());
        self.rows.borrow_mut().push(created.clone());
        Ok(created)
    }

    async fn update(&self, product: &Product) -> Result<Product, ServiceError> {
        self.record(format!("update:{}", product.id));
        if self.fail_update.get() {
            return Err(ServiceError::Status(502));
        }
        let mut rows = self.rows.borrow_mut();
        match rows.iter_mut().find(|p| p.id == product.id) {
            Some(row) => {
                *row = product.clone();
                Ok(product.clone())
            }
            None => Err(ServiceError::Status(404)),
        }
    }

    async fn delete(&self, id: &str) -> Result<(), ServiceError> {
        self.record(format!("delete:{id}"));
        if self.fail_delete.get() {
            return Err(ServiceError::Status(503));
        }
        self.rows.borrow_mut().retain(|p| p.id != id);
        Ok(())
    }
}

/// List endpoint whose responses arrive only when the test sends them, so
/// completions can be reordered relative to issue order.
pub struct DeferredList {
    pending: RefCell<VecDeque<oneshot::Receiver<ListResult>>>,
}

pub type ListResult = Result<Vec<Product>, ServiceError>;

impl DeferredList {
    /// Service plus one sender per future `list` call, in call order.
    pub fn new(calls: usize) -> (Self, Vec<oneshot::Sender<ListResult>>) {
        let (senders, receivers): (Vec<_>, VecDeque<_>) = (0..calls).map(|_| oneshot::channel()).unzip();
        (Self { pending: RefCell::new(receivers) }, senders)
    }
}

#[async_trait(?Send)]
impl CatalogService for DeferredList {
    async fn list(&self) -> Result<Vec<Product>, ServiceError> {
        let next = self.pending.borrow_mut().pop_front();
        match next {
            Some(rx) => rx.await.unwrap_or(Err(ServiceError::Transport("cancelled".to_owned()))),
            None => Err(ServiceError::Transport("no response scripted".to_owned())),
        }
    }

    async fn create(&self, _draft: &ProductDraft) -> Result<Product, ServiceError> {
        Err(ServiceError::Unavailable)
    }

    async fn update(&self, _product: &Product) -> Result<Product, ServiceError> {
        Err(ServiceError::Unavailable)
    }

    async fn delete(&self, _id: &str) -> Result<(), ServiceError> {
        Err(ServiceError::Unavailable)
    }
}

/// Returns `Pending` once, letting sibling futures in a `join` run.
pub struct YieldNow(bool);

pub fn yield_now() -> YieldNow {
    YieldNow(false)
}

impl Future for YieldNow {
    type Output = ();

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
        if self.0 {
            Poll::Ready(())
        } else {
            self.0 = true;
            cx.waker().wake_by_ref();
            Poll::Pending
        }
    }
}

/// Asset store where a file is its own name; names starting with `bad`
/// fail to upload.
#[derive(Default)]
pub struct FakeAssets {
    pub uploaded: RefCell<Vec<String>>,
}

#[async_trait(?Send)]
impl AssetStore for FakeAssets {
    type File = String;

    async fn upload(&self, file: &String) -> Result<String, ServiceError> {
        if file.starts_with("bad") {
            return Err(ServiceError::Status(400));
        }
        self.uploaded.borrow_mut().push(file.clone());
        Ok(format!("https://cdn.example.com/{file}"))
    }
}
