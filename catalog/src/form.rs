//! Create/edit modal form and its image-upload pipeline.
//!
//! SYSTEM CONTEXT
//! ==============
//! The form is either closed or open in one of two modes: blank (create) or
//! prefilled from an existing product (edit). While open it holds raw field
//! text, the image URLs collected so far, and an upload batch counting
//! uploads still in flight.
//!
//! Every open and close starts a new session. Upload and submit results carry
//! the session they were started in and are dropped if the form has moved on,
//! so a slow upload can never attach an image to a different product.
//!
//! ERROR HANDLING
//! ==============
//! Validation runs before any remote call and leaves the form open with the
//! error shown. A submit is refused while uploads are pending. A remote
//! failure keeps the form open with the user's input intact.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use futures::future::join_all;
use url::Url;

use crate::cell::StateCell;
use crate::error::{FormError, ServiceError, ValidationError};
use crate::list::{Catalog, ProductList};
use crate::product::{Product, ProductDraft};
use crate::service::{AssetStore, CatalogService};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum FormMode {
    #[default]
    Closed,
    Create,
    /// Editing the product with this id.
    Edit(String),
}

/// Editable text inputs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Category,
    Description,
    Price,
    LiveLink,
}

/// Raw field text as typed. Parsed only on submit.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormFields {
    pub name: String,
    pub category: String,
    pub description: String,
    pub price: String,
    pub live_link: String,
}

impl FormFields {
    fn from_product(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            category: product.category.clone(),
            description: product.description.clone(),
            price: product.price.to_string(),
            live_link: product.live_link.clone().unwrap_or_default(),
        }
    }

    #[must_use]
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Category => &self.category,
            Field::Description => &self.description,
            Field::Price => &self.price,
            Field::LiveLink => &self.live_link,
        }
    }

    fn slot(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Category => &mut self.category,
            Field::Description => &mut self.description,
            Field::Price => &mut self.price,
            Field::LiveLink => &mut self.live_link,
        }
    }

    /// Parse into a draft carrying `images`.
    ///
    /// # Errors
    ///
    /// Returns the first [`ValidationError`] in field order.
    pub fn validate(&self, images: &[String]) -> Result<ProductDraft, ValidationError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ValidationError::MissingName);
        }
        let category = self.category.trim();
        if category.is_empty() {
            return Err(ValidationError::MissingCategory);
        }
        let price = parse_price(&self.price)?;
        let live_link = parse_live_link(&self.live_link)?;

        Ok(ProductDraft {
            name: name.to_owned(),
            category: category.to_owned(),
            description: self.description.trim().to_owned(),
            price,
            live_link,
            images: images.to_vec(),
        })
    }
}

fn parse_price(raw: &str) -> Result<f64, ValidationError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(ValidationError::MissingPrice);
    }
    match raw.parse::<f64>() {
        Ok(price) if price.is_finite() && price >= 0.0 => Ok(price),
        _ => Err(ValidationError::InvalidPrice),
    }
}

fn parse_live_link(raw: &str) -> Result<Option<String>, ValidationError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    match Url::parse(raw) {
        Ok(url) if matches!(url.scheme(), "http" | "https") && url.host_str().is_some() => Ok(Some(raw.to_owned())),
        _ => Err(ValidationError::InvalidLiveLink),
    }
}

/// What a validated submit will send.
#[derive(Clone, Debug, PartialEq)]
pub enum SubmitAction {
    Create(ProductDraft),
    Update { id: String, draft: ProductDraft },
}

/// A submit accepted by [`ProductForm::prepare_submit`], tagged with the form
/// session it belongs to.
#[derive(Clone, Debug, PartialEq)]
pub struct Submission {
    pub session: u64,
    pub action: SubmitAction,
}

/// Modal form state.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProductForm {
    mode: FormMode,
    fields: FormFields,
    images: Vec<String>,
    pending_uploads: usize,
    failed_uploads: Vec<String>,
    session: u64,
    error: Option<FormError>,
    submitting: bool,
}

impl ProductForm {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn mode(&self) -> &FormMode {
        &self.mode
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.mode != FormMode::Closed
    }

    #[must_use]
    pub fn is_editing(&self) -> bool {
        matches!(self.mode, FormMode::Edit(_))
    }

    #[must_use]
    pub fn fields(&self) -> &FormFields {
        &self.fields
    }

    #[must_use]
    pub fn images(&self) -> &[String] {
        &self.images
    }

    #[must_use]
    pub fn pending_uploads(&self) -> usize {
        self.pending_uploads
    }

    /// File names whose upload failed in this session.
    #[must_use]
    pub fn failed_uploads(&self) -> &[String] {
        &self.failed_uploads
    }

    #[must_use]
    pub fn error(&self) -> Option<&FormError> {
        self.error.as_ref()
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    #[must_use]
    pub fn session(&self) -> u64 {
        self.session
    }

    /// Whether the Save button should accept a click.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        self.is_open() && !self.submitting && self.pending_uploads == 0
    }

    /// Open blank for a new product.
    pub fn open_create(&mut self) {
        self.reset(FormMode::Create);
    }

    /// Open prefilled from `product`.
    pub fn open_edit(&mut self, product: &Product) {
        self.reset(FormMode::Edit(product.id.clone()));
        self.fields = FormFields::from_product(product);
        self.images = product.images.clone();
    }

    /// Discard input. Uploads still in flight are dropped when they land.
    pub fn close(&mut self) {
        self.reset(FormMode::Closed);
    }

    fn reset(&mut self, mode: FormMode) {
        *self = Self { mode, session: self.session.wrapping_add(1), ..Self::default() };
    }

    /// Replace one field's text. Ignored while closed.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        if !self.is_open() {
            return;
        }
        *self.fields.slot(field) = value.into();
        self.error = None;
    }

    /// Drop the image at `index`, returning its URL.
    pub fn remove_image(&mut self, index: usize) -> Option<String> {
        (index < self.images.len()).then(|| self.images.remove(index))
    }

    /// Register `count` uploads about to start. Returns the session their
    /// results must be reported against, or `None` when the form is closed.
    pub fn begin_uploads(&mut self, count: usize) -> Option<u64> {
        if !self.is_open() {
            return None;
        }
        self.pending_uploads += count;
        Some(self.session)
    }

    /// Settle one upload started in `session`. Returns `true` when a URL was
    /// appended; results from an earlier session are discarded.
    pub fn finish_upload(&mut self, session: u64, name: &str, result: Result<String, ServiceError>) -> bool {
        if session != self.session {
            log::debug!("dropping upload of {name:?} from closed form session {session}");
            return false;
        }
        self.pending_uploads = self.pending_uploads.saturating_sub(1);
        match result {
            Ok(url) => {
                self.images.push(url);
                true
            }
            Err(e) => {
                log::warn!("image upload failed for {name:?}: {e}");
                self.failed_uploads.push(name.to_owned());
                false
            }
        }
    }

    /// Validate and mark the form as submitting.
    ///
    /// # Errors
    ///
    /// [`FormError::Closed`] when nothing is open, [`FormError::AlreadySubmitting`]
    /// for a double click, [`FormError::UploadsPending`] while uploads are in
    /// flight, and [`FormError::Invalid`] on bad input. Validation errors are
    /// also stored for display.
    pub fn prepare_submit(&mut self) -> Result<Submission, FormError> {
        let action = match &self.mode {
            FormMode::Closed => return Err(FormError::Closed),
            _ if self.submitting => return Err(FormError::AlreadySubmitting),
            _ if self.pending_uploads > 0 => return Err(FormError::UploadsPending(self.pending_uploads)),
            FormMode::Create => self.fields.validate(&self.images).map(SubmitAction::Create),
            FormMode::Edit(id) => {
                self.fields.validate(&self.images).map(|draft| SubmitAction::Update { id: id.clone(), draft })
            }
        };
        match action {
            Ok(action) => {
                self.submitting = true;
                self.error = None;
                Ok(Submission { session: self.session, action })
            }
            Err(e) => {
                let error = FormError::from(e);
                self.error = Some(error.clone());
                Err(error)
            }
        }
    }

    /// The remote call for `session` succeeded.
    pub fn submit_succeeded(&mut self, session: u64) {
        if session == self.session {
            self.close();
        }
    }

    /// The remote call for `session` failed; input stays for a retry.
    pub fn submit_failed(&mut self, session: u64, error: FormError) {
        if session == self.session {
            self.submitting = false;
            self.error = Some(error);
        }
    }
}

/// Upload `files` concurrently into the open form. Each URL is appended as
/// its own upload resolves, so the thumbnails fill in out of order. Returns
/// how many URLs were appended.
pub async fn upload_images<A, C>(store: &A, form: &C, files: Vec<(String, A::File)>) -> usize
where
    A: AssetStore,
    C: StateCell<ProductForm>,
{
    if files.is_empty() {
        return 0;
    }
    let Some(session) = form.write(|f| f.begin_uploads(files.len())).flatten() else {
        log::debug!("ignoring {} file(s) selected while the form is closed", files.len());
        return 0;
    };

    let uploads = files.iter().map(|(name, file)| async move {
        let result = store.upload(file).await;
        form.write(|f| f.finish_upload(session, name, result)).unwrap_or(false)
    });
    join_all(uploads).await.into_iter().filter(|appended| *appended).count()
}

/// Submit the open form through `catalog`: a blank form creates, a prefilled
/// one updates. Closes the form on success.
///
/// # Errors
///
/// Any [`FormError`] from [`ProductForm::prepare_submit`], or
/// [`FormError::Remote`] when the catalog call fails.
pub async fn submit_form<S, L, C>(catalog: &Catalog<S, L>, form: &C) -> Result<(), FormError>
where
    S: CatalogService,
    L: StateCell<ProductList>,
    C: StateCell<ProductForm>,
{
    let submission = form.write(ProductForm::prepare_submit).unwrap_or(Err(FormError::Closed))?;
    let session = submission.session;
    let result = match submission.action {
        SubmitAction::Create(draft) => catalog.create(draft).await,
        SubmitAction::Update { id, draft } => catalog.update(&id, draft).await,
    };
    match result {
        Ok(()) => {
            form.write(|f| f.submit_succeeded(session));
            Ok(())
        }
        Err(e) => {
            let error = FormError::Remote(e);
            form.write(|f| f.submit_failed(session, error.clone()));
            Err(error)
        }
    }
}
