//! Detail screen for a single product.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::net::api;
use crate::net::types::Product;
use crate::routing::paths;
use crate::state::cart::CartStore;
use crate::util::format;

#[component]
pub fn ProductDetailPage() -> impl IntoView {
    let cart = expect_context::<CartStore>();
    let params = use_params_map();
    let toast = RwSignal::new(String::new());

    let product = LocalResource::new(move || {
        let id = params.get().get("id").unwrap_or_default();
        async move { api::fetch_product(&id).await }
    });

    let on_add = move |product: Product| {
        cart.add(product);
        toast.set("Producto agregado al carrito".to_owned());
        leptos::task::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(2_000).await;
            toast.set(String::new());
        });
    };

    view! {
        <div class="product-page">
            <a href=paths::CATEGORY_SELECTION>"← Volver a categorías"</a>
            <Suspense fallback=|| view! { <p>"Cargando producto..."</p> }>
                {move || {
                    product
                        .get()
                        .map(|fetched| match fetched {
                            None => {
                                view! { <p class="product-page__error">"Producto no encontrado"</p> }
                                    .into_any()
                            }
                            Some(product) => {
                                let snapshot = product.clone();
                                view! {
                                    <div class="product-page__card">
                                        {product
                                            .image
                                            .clone()
                                            .map(|img| {
                                                view! {
                                                    <img src=format::image_url(&img) alt=product.name.clone()/>
                                                }
                                            })}
                                        <div class="product-page__info">
                                            <h1>{product.name.clone()}</h1>
                                            <p>{product.description.clone()}</p>
                                            <span>{product.pages} " páginas"</span>
                                            <span class="product-page__price">
                                                {format::price(product.price)}
                                            </span>
                                            <button
                                                class="btn btn--primary"
                                                on:click=move |_| on_add(snapshot.clone())
                                            >
                                                "Agregar al Carrito"
                                            </button>
                                        </div>
                                    </div>
                                }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>
            {move || {
                let text = toast.get();
                (!text.is_empty()).then(|| view! { <div class="toast">{text}</div> })
            }}
        </div>
    }
}
