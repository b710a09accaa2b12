//! One product in the catalog grid.

#[cfg(test)]
#[path = "product_card_test.rs"]
mod product_card_test;

use catalog::product::Product;
use leptos::prelude::*;

/// Display price in rupees, without trailing zeros for whole amounts.
pub fn format_price(price: f64) -> String {
    format!("₹{price}")
}

#[component]
pub fn ProductCard(product: Product, on_edit: Callback<Product>, on_delete: Callback<String>) -> impl IntoView {
    let thumbnail = product.thumbnail().map(str::to_owned);
    let live_link = product.live_link.clone();
    let price = format_price(product.price);
    let id = product.id.clone();
    let name = product.name.clone();
    let category = product.category.clone();
    let description = product.description.clone();

    view! {
        <article class="product-card">
            {match thumbnail {
                Some(src) => view! { <img class="product-card__image" src=src alt=name.clone() /> }.into_any(),
                None => view! { <div class="product-card__image product-card__image--empty">"No image"</div> }.into_any(),
            }}
            <h3 class="product-card__name">{name}</h3>
            <p class="product-card__category">
                <strong>"Category: "</strong>
                {category}
            </p>
            <p class="product-card__description">{description}</p>
            <p class="product-card__price">"Price: " <span>{price}</span></p>
            {live_link.map(|href| {
                view! {
                    <a class="btn btn--link" href=href target="_blank" rel="noopener noreferrer">
                        "Live Link"
                    </a>
                }
            })}
            <div class="product-card__actions">
                <button class="btn btn--secondary" on:click=move |_| on_edit.run(product.clone())>
                    "Edit"
                </button>
                <button class="btn btn--danger" on:click=move |_| on_delete.run(id.clone())>
                    "Delete"
                </button>
            </div>
        </article>
    }
}
