//! Catalog screen: paginated product listing for one category, with
//! client-side name search and sort filters.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::product_card::ProductCard;
use crate::net::api;
use crate::net::types::Product;
use crate::pages::category_selection::category_title;
use crate::routing::paths;
use crate::state::cart::CartStore;

const PAGE_SIZE: u32 = 8;

/// Client-side sort options offered in the filter sidebar.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum SortBy {
    #[default]
    All,
    PriceLow,
    PriceHigh,
    PagesLow,
    PagesHigh,
}

const SORT_OPTIONS: [(SortBy, &str); 5] = [
    (SortBy::All, "Todos los libros"),
    (SortBy::PriceLow, "Precio: Menor a Mayor"),
    (SortBy::PriceHigh, "Precio: Mayor a Menor"),
    (SortBy::PagesLow, "Páginas: Menor a Mayor"),
    (SortBy::PagesHigh, "Páginas: Mayor a Menor"),
];

/// Search-then-sort over the fetched page. The server paginates; search and
/// ordering refine only the page in hand.
fn apply_filters(mut products: Vec<Product>, search: &str, sort: SortBy) -> Vec<Product> {
    let needle = search.to_lowercase();
    if !needle.is_empty() {
        products.retain(|p| p.name.to_lowercase().contains(&needle));
    }
    match sort {
        SortBy::All => {}
        SortBy::PriceLow => products.sort_by(|a, b| a.price.total_cmp(&b.price)),
        SortBy::PriceHigh => products.sort_by(|a, b| b.price.total_cmp(&a.price)),
        SortBy::PagesLow => products.sort_by_key(|p| p.pages),
        SortBy::PagesHigh => products.sort_by_key(|p| std::cmp::Reverse(p.pages)),
    }
    products
}

#[component]
pub fn CatalogPage() -> impl IntoView {
    let cart = expect_context::<CartStore>();
    let params = use_params_map();

    let category = move || params.get().get("categoria").unwrap_or_default();
    let page = RwSignal::new(1_u32);
    let search = RwSignal::new(String::new());
    let sort = RwSignal::new(SortBy::default());
    let toast = RwSignal::new(String::new());

    // Back to the first page whenever the category changes.
    Effect::new(move || {
        let _ = category();
        page.set(1);
    });

    let products = LocalResource::new(move || {
        let category = category();
        let page = page.get();
        async move { api::fetch_products(&category, page, PAGE_SIZE).await }
    });

    let on_add = Callback::new(move |product: Product| {
        cart.add(product);
        toast.set("Producto agregado al carrito".to_owned());
        leptos::task::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(2_000).await;
            toast.set(String::new());
        });
    });

    view! {
        <div class="catalog-page">
            <header class="catalog-page__header">
                <a href=paths::CATEGORY_SELECTION>"← Volver a categorías"</a>
                {move || {
                    let (title, description) = category_title(&category());
                    view! {
                        <div>
                            <h1>{title}</h1>
                            <p>{description}</p>
                        </div>
                    }
                }}
            </header>

            <div class="catalog-page__body">
                <aside class="catalog-page__filters">
                    <h2>"Filtros"</h2>
                    <ul>
                        {SORT_OPTIONS
                            .iter()
                            .map(|&(option, label)| {
                                view! {
                                    <li>
                                        <label>
                                            <input
                                                type="radio"
                                                name="sort"
                                                checked=move || sort.get() == option
                                                on:change=move |_| sort.set(option)
                                            />
                                            {label}
                                        </label>
                                    </li>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </ul>
                </aside>

                <main class="catalog-page__main">
                    <input
                        class="catalog-page__search"
                        type="text"
                        placeholder="Buscar libros..."
                        prop:value=search
                        on:input=move |ev| search.set(event_target_value(&ev))
                    />

                    <Suspense fallback=|| {
                        view! { <p class="catalog-page__status">"Cargando productos..."</p> }
                    }>
                        {move || {
                            products
                                .get()
                                .map(|fetched| match fetched {
                                    None => {
                                        view! {
                                            <p class="catalog-page__status catalog-page__status--error">
                                                "Error al cargar productos"
                                            </p>
                                        }
                                            .into_any()
                                    }
                                    Some(result) => {
                                        let visible = apply_filters(
                                            result.products,
                                            &search.get(),
                                            sort.get(),
                                        );
                                        let total_pages = result.total.div_ceil(u64::from(PAGE_SIZE));
                                        if visible.is_empty() {
                                            return view! {
                                                <p class="catalog-page__status">
                                                    "No se encontraron productos"
                                                </p>
                                            }
                                                .into_any();
                                        }
                                        view! {
                                            <div class="catalog-page__grid">
                                                {visible
                                                    .into_iter()
                                                    .map(|product| {
                                                        view! { <ProductCard product=product on_add=on_add/> }
                                                    })
                                                    .collect::<Vec<_>>()}
                                            </div>
                                            <Pagination page=page total_pages=total_pages/>
                                        }
                                            .into_any()
                                    }
                                })
                        }}
                    </Suspense>
                </main>
            </div>

            {move || {
                let text = toast.get();
                (!text.is_empty()).then(|| view! { <div class="toast">{text}</div> })
            }}
        </div>
    }
}

/// Page selector: previous/next plus direct page buttons.
#[component]
fn Pagination(page: RwSignal<u32>, total_pages: u64) -> impl IntoView {
    let last = u32::try_from(total_pages).unwrap_or(u32::MAX).max(1);

    view! {
        <div class="pagination">
            <button
                disabled=move || page.get() == 1
                on:click=move |_| page.update(|p| *p = p.saturating_sub(1).max(1))
            >
                "Anterior"
            </button>
            {(1..=last)
                .map(|n| {
                    view! {
                        <button
                            class=move || {
                                if page.get() == n { "pagination__page pagination__page--current" } else { "pagination__page" }
                            }
                            on:click=move |_| page.set(n)
                        >
                            {n}
                        </button>
                    }
                })
                .collect::<Vec<_>>()}
            <button
                disabled=move || u64::from(page.get()) >= total_pages
                on:click=move |_| page.update(|p| *p += 1)
            >
                "Siguiente"
            </button>
        </div>
    }
}
