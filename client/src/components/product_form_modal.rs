//! Create/edit modal for a product.
//!
//! SYSTEM CONTEXT
//! ==============
//! All state lives in the engine's `ProductForm`; inputs write through
//! `set_field`, file selection starts an upload batch and Save runs
//! `submit_form`. Save stays disabled while uploads are in flight.

#[cfg(test)]
#[path = "product_form_modal_test.rs"]
mod product_form_modal_test;

use catalog::form::{Field, ProductForm};
#[cfg(feature = "hydrate")]
use catalog::form::{submit_form, upload_images};
use leptos::prelude::*;

use crate::net::api::CloudinaryStore;
use crate::pages::products::ProductCatalog;
#[cfg(feature = "hydrate")]
use crate::state::signal_cell::SignalCell;

/// Save button text for the form's current activity.
pub fn save_label(pending_uploads: usize, submitting: bool) -> String {
    if pending_uploads > 0 {
        format!("Uploading {pending_uploads} image(s)...")
    } else if submitting {
        "Saving...".to_owned()
    } else {
        "Save".to_owned()
    }
}

/// Summary line for files that did not upload.
pub fn failed_uploads_message(names: &[String]) -> Option<String> {
    (!names.is_empty()).then(|| format!("Could not upload: {}", names.join(", ")))
}

#[component]
fn FieldInput(form: RwSignal<ProductForm>, field: Field, placeholder: &'static str) -> impl IntoView {
    view! {
        <input
            type="text"
            class="form-input"
            placeholder=placeholder
            prop:value=move || form.with(|f| f.fields().get(field).to_owned())
            on:input=move |ev| form.update(|f| f.set_field(field, event_target_value(&ev)))
        />
    }
}

#[component]
pub fn ProductFormModal(
    form: RwSignal<ProductForm>,
    catalog: StoredValue<ProductCatalog>,
    assets: StoredValue<CloudinaryStore>,
) -> impl IntoView {
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        #[cfg(feature = "hydrate")]
        {
            let catalog = catalog.get_value();
            leptos::task::spawn_local(async move {
                if let Err(e) = submit_form(&catalog, &SignalCell::new(form)).await {
                    log::warn!("product not saved: {e}");
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = catalog;
        }
    };

    let on_files = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            use wasm_bindgen::JsCast;

            let Some(input) = ev.target().and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok()) else {
                return;
            };
            let files = picked_files(&input);
            input.set_value("");
            let store = assets.get_value();
            leptos::task::spawn_local(async move {
                let appended = upload_images(&store, &SignalCell::new(form), files).await;
                log::debug!("{appended} image(s) attached");
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (ev, assets);
        }
    };

    let error = move || form.with(|f| f.error().map(ToString::to_string));
    let failed = move || form.with(|f| failed_uploads_message(f.failed_uploads()));

    view! {
        <Show when=move || form.with(ProductForm::is_open)>
            <div class="modal-backdrop">
                <div class="modal" role="dialog" aria-modal="true">
                    <h2 class="modal__title">
                        {move || if form.with(ProductForm::is_editing) { "Edit Product" } else { "Add New Product" }}
                    </h2>
                    <form class="modal__form" on:submit=on_submit>
                        <FieldInput form=form field=Field::Name placeholder="Product Name" />
                        <FieldInput form=form field=Field::Category placeholder="Category" />
                        <FieldInput form=form field=Field::Price placeholder="Enter Price" />
                        <FieldInput form=form field=Field::LiveLink placeholder="Enter Live Link" />
                        <textarea
                            class="form-input"
                            placeholder="Description"
                            prop:value=move || form.with(|f| f.fields().get(Field::Description).to_owned())
                            on:input=move |ev| form.update(|f| f.set_field(Field::Description, event_target_value(&ev)))
                        ></textarea>
                        <input class="form-input" type="file" accept="image/*" multiple on:change=on_files />

                        <div class="modal__thumbs">
                            <For
                                each=move || form.with(|f| f.images().iter().cloned().enumerate().collect::<Vec<_>>())
                                key=|(index, url)| (*index, url.clone())
                                children=move |(index, url)| {
                                    view! {
                                        <figure class="modal__thumb">
                                            <img src=url alt="Product image" />
                                            <button
                                                type="button"
                                                aria-label="Remove image"
                                                on:click=move |_| {
                                                    form.update(|f| {
                                                        f.remove_image(index);
                                                    });
                                                }
                                            >
                                                "×"
                                            </button>
                                        </figure>
                                    }
                                }
                            />
                        </div>

                        {move || error().map(|msg| view! { <p class="form-error">{msg}</p> })}
                        {move || failed().map(|msg| view! { <p class="form-warning">{msg}</p> })}

                        <div class="modal__actions">
                            <button
                                type="submit"
                                class="btn btn--primary"
                                disabled=move || !form.with(ProductForm::can_submit)
                            >
                                {move || form.with(|f| save_label(f.pending_uploads(), f.is_submitting()))}
                            </button>
                            <button type="button" class="btn btn--danger" on:click=move |_| form.update(ProductForm::close)>
                                "Cancel"
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </Show>
    }
}

#[cfg(feature = "hydrate")]
fn picked_files(input: &web_sys::HtmlInputElement) -> Vec<(String, crate::net::api::PickedFile)> {
    let Some(list) = input.files() else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .map(|file| {
            let name = file.name();
            (name.clone(), crate::net::api::PickedFile { name, file })
        })
        .collect()
}
