//! Product list page: the paginated catalog grid with create, edit and delete.
//!
//! SYSTEM CONTEXT
//! ==============
//! Fetches the full collection once the page hydrates. Mutations go through
//! the engine, which refetches after create/update and drops rows locally
//! after delete; the grid re-renders from whatever snapshot is current.

#[cfg(test)]
#[path = "products_test.rs"]
mod products_test;

use catalog::form::ProductForm;
use catalog::list::{Catalog, ProductList};
use catalog::product::Product;
use catalog::shell::ShellState;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::product_card::ProductCard;
use crate::components::product_form_modal::ProductFormModal;
use crate::config::ApiConfig;
use crate::net::api::{CloudinaryStore, HttpCatalog};
use crate::state::signal_cell::SignalCell;
use crate::util::auth::install_session_guard;

/// The engine as the page wires it.
pub type ProductCatalog = Catalog<HttpCatalog, SignalCell<ProductList>>;

/// Route-guarded product list. Redirects to `/login` without a session.
#[component]
pub fn ProductsPage() -> impl IntoView {
    let config = expect_context::<ApiConfig>();
    let list = expect_context::<RwSignal<ProductList>>();
    let form = expect_context::<RwSignal<ProductForm>>();
    let shell = expect_context::<RwSignal<ShellState>>();

    install_session_guard(use_navigate());

    let catalog = StoredValue::new(Catalog::new(HttpCatalog::new(config.catalog.clone()), SignalCell::new(list)));
    let assets = StoredValue::new(CloudinaryStore::new(config.assets));

    Effect::new(move || {
        #[cfg(feature = "hydrate")]
        {
            let catalog = catalog.get_value();
            leptos::task::spawn_local(async move {
                if let Err(e) = catalog.fetch_all().await {
                    log::error!("initial product fetch failed: {e}");
                }
            });
        }
    });

    let on_add = move |_| {
        shell.update(ShellState::modal_opened);
        form.update(ProductForm::open_create);
    };
    let on_edit = Callback::new(move |product: Product| {
        shell.update(ShellState::modal_opened);
        form.update(|f| f.open_edit(&product));
    });
    let on_delete = Callback::new(move |id: String| {
        #[cfg(feature = "hydrate")]
        {
            let catalog = catalog.get_value();
            leptos::task::spawn_local(async move {
                if let Err(e) = catalog.delete(&id).await {
                    log::warn!("product {id} not deleted: {e}");
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
        }
    });

    let loading = move || list.with(ProductList::is_loading);
    let empty = move || list.with(ProductList::is_empty);

    view! {
        <section class="products-page">
            <div class="card">
                <div class="card__header">
                    <h2 class="card__title">"Product List"</h2>
                    <button class="btn btn--primary" on:click=on_add>
                        "Add New Products"
                    </button>
                </div>

                <Show when=move || empty()>
                    <p class="products-page__status">
                        {move || if loading() { "Loading products..." } else { "No products yet." }}
                    </p>
                </Show>

                <div class="product-grid">
                    {move || {
                        list.with(|l| l.current_page().to_vec())
                            .into_iter()
                            .map(|product| view! { <ProductCard product=product on_edit=on_edit on_delete=on_delete /> })
                            .collect_view()
                    }}
                </div>

                <div class="pagination">
                    <button
                        class="btn"
                        disabled=move || !list.with(ProductList::has_prev)
                        on:click=move |_| list.update(ProductList::prev_page)
                    >
                        "Previous"
                    </button>
                    <span class="pagination__label">{move || page_label(list.with(ProductList::cursor))}</span>
                    <button
                        class="btn"
                        disabled=move || !list.with(ProductList::has_next)
                        on:click=move |_| list.update(ProductList::next_page)
                    >
                        "Next"
                    </button>
                </div>
            </div>

            <ProductFormModal form=form catalog=catalog assets=assets />
        </section>
    }
}

/// One-based page label for a zero-based cursor.
pub fn page_label(cursor: usize) -> String {
    format!("Page {}", cursor + 1)
}
