//! Catalog card for a single product.

use leptos::prelude::*;

use crate::net::types::Product;
use crate::routing::paths;
use crate::util::format;

/// A product tile with an add-to-cart action. The card hands the full
/// product snapshot to `on_add`; the cart freezes it from there.
#[component]
pub fn ProductCard(product: Product, on_add: Callback<Product>) -> impl IntoView {
    let snapshot = product.clone();

    view! {
        <div class="product-card">
            {product
                .image
                .clone()
                .map(|img| {
                    view! {
                        <img
                            class="product-card__image"
                            src=format::image_url(&img)
                            alt=product.name.clone()
                        />
                    }
                })}
            <a class="product-card__name" href=paths::product(&product.id)>
                {product.name.clone()}
            </a>
            <p class="product-card__description">{product.description.clone()}</p>
            <div class="product-card__meta">
                <span>{product.pages} " páginas"</span>
                <span class="product-card__price">{format::price(product.price)}</span>
            </div>
            <button class="btn btn--primary" on:click=move |_| on_add.run(snapshot.clone())>
                "Agregar al Carrito"
            </button>
        </div>
    }
}
