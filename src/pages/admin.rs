//! Back office: sales dashboard, product CRUD, order management and
//! user lookup. Admin accounts are pinned to this screen by the
//! redirect policy.

#[cfg(test)]
#[path = "admin_test.rs"]
mod admin_test;

use leptos::prelude::*;

use crate::net::api;
use crate::net::types::{Order, Product, ProductForm, ORDER_STATUSES};
use crate::state::session::SessionStore;
use crate::util::format;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum Section {
    #[default]
    Dashboard,
    Productos,
    Pedidos,
    Usuarios,
}

const SECTIONS: [(Section, &str); 4] = [
    (Section::Dashboard, "Dashboard"),
    (Section::Productos, "Productos"),
    (Section::Pedidos, "Pedidos"),
    (Section::Usuarios, "Usuarios"),
];

/// Orders whose buyer matches the search text by name or email.
fn filter_orders(orders: Vec<Order>, search: &str) -> Vec<Order> {
    let needle = search.to_lowercase();
    if needle.is_empty() {
        return orders;
    }
    orders
        .into_iter()
        .filter(|order| {
            order.user.as_ref().is_some_and(|u| {
                u.nombre.to_lowercase().contains(&needle)
                    || u.email.to_lowercase().contains(&needle)
            })
        })
        .collect()
}

#[component]
pub fn AdminPage() -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let section = RwSignal::new(Section::default());

    view! {
        <div class="admin-page">
            <aside class="admin-page__sidebar">
                <h1>"Panel de administración"</h1>
                <nav>
                    {SECTIONS
                        .iter()
                        .map(|&(target, label)| {
                            view! {
                                <button
                                    class=move || {
                                        if section.get() == target {
                                            "admin-page__nav admin-page__nav--current"
                                        } else {
                                            "admin-page__nav"
                                        }
                                    }
                                    on:click=move |_| section.set(target)
                                >
                                    {label}
                                </button>
                            }
                        })
                        .collect::<Vec<_>>()}
                </nav>
                <button class="admin-page__logout" on:click=move |_| session.logout()>
                    "Cerrar sesión"
                </button>
            </aside>
            <main class="admin-page__content">
                {move || match section.get() {
                    Section::Dashboard => view! { <DashboardSection/> }.into_any(),
                    Section::Productos => view! { <ProductsSection/> }.into_any(),
                    Section::Pedidos => view! { <OrdersSection/> }.into_any(),
                    Section::Usuarios => view! { <UsersSection/> }.into_any(),
                }}
            </main>
        </div>
    }
}

// =============================================================
// Dashboard
// =============================================================

#[component]
fn DashboardSection() -> impl IntoView {
    let stats = LocalResource::new(api::fetch_order_stats);
    let sales = LocalResource::new(api::fetch_sales_by_month);
    let top = LocalResource::new(api::fetch_top_products);

    view! {
        <section class="admin-dashboard">
            <h2>"Dashboard"</h2>
            <Suspense fallback=|| view! { <p>"Cargando estadísticas..."</p> }>
                {move || {
                    stats
                        .get()
                        .map(|fetched| match fetched {
                            None => {
                                view! { <p>"No se pudieron cargar las estadísticas"</p> }
                                    .into_any()
                            }
                            Some(stats) => {
                                let mut by_status: Vec<_> =
                                    stats.pedidos_por_estado.into_iter().collect();
                                by_status.sort();
                                view! {
                                    <div class="admin-dashboard__cards">
                                        <StatCard
                                            label="Facturación total"
                                            value=format::price(stats.total_facturacion)
                                        />
                                        <StatCard label="Hoy" value=format::price(stats.diaria)/>
                                        <StatCard
                                            label="Esta semana"
                                            value=format::price(stats.semanal)
                                        />
                                        <StatCard
                                            label="Este mes"
                                            value=format::price(stats.mensual)
                                        />
                                        <StatCard
                                            label="Pedidos totales"
                                            value=stats.pedidos_totales.to_string()
                                        />
                                    </div>
                                    <div class="admin-dashboard__chips">
                                        {by_status
                                            .into_iter()
                                            .map(|(status, count)| {
                                                view! {
                                                    <span class="admin-dashboard__chip">
                                                        {status} ": " {count}
                                                    </span>
                                                }
                                            })
                                            .collect::<Vec<_>>()}
                                    </div>
                                    <h3>"Pedidos recientes"</h3>
                                    <ul class="admin-dashboard__recent">
                                        {stats
                                            .recientes
                                            .iter()
                                            .map(|order| {
                                                let buyer = order
                                                    .user
                                                    .as_ref()
                                                    .map(|u| u.nombre.clone())
                                                    .unwrap_or_default();
                                                view! {
                                                    <li>
                                                        <span>{buyer}</span>
                                                        <span>{format::price(order.total)}</span>
                                                        <span>{order.status.clone()}</span>
                                                    </li>
                                                }
                                            })
                                            .collect::<Vec<_>>()}
                                    </ul>
                                }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>

            <div class="admin-dashboard__charts">
                <section>
                    <h3>"Ventas por mes"</h3>
                    <Suspense fallback=|| view! { <p>"Cargando..."</p> }>
                        {move || {
                            sales
                                .get()
                                .map(|fetched| {
                                    view! {
                                        <ul>
                                            {fetched
                                                .unwrap_or_default()
                                                .iter()
                                                .map(|month| {
                                                    view! {
                                                        <li>
                                                            <span>{month.label.clone()}</span>
                                                            <span>{format::price(month.total)}</span>
                                                        </li>
                                                    }
                                                })
                                                .collect::<Vec<_>>()}
                                        </ul>
                                    }
                                })
                        }}
                    </Suspense>
                </section>
                <section>
                    <h3>"Libros más vendidos"</h3>
                    <Suspense fallback=|| view! { <p>"Cargando..."</p> }>
                        {move || {
                            top.get()
                                .map(|fetched| {
                                    view! {
                                        <ul>
                                            {fetched
                                                .unwrap_or_default()
                                                .iter()
                                                .map(|product| {
                                                    view! {
                                                        <li>
                                                            <span>{product.name.clone()}</span>
                                                            <span>{product.count} " vendidos"</span>
                                                        </li>
                                                    }
                                                })
                                                .collect::<Vec<_>>()}
                                        </ul>
                                    }
                                })
                        }}
                    </Suspense>
                </section>
            </div>
        </section>
    }
}

#[component]
fn StatCard(label: &'static str, value: String) -> impl IntoView {
    view! {
        <div class="stat-card">
            <span class="stat-card__label">{label}</span>
            <span class="stat-card__value">{value}</span>
        </div>
    }
}

// =============================================================
// Products
// =============================================================

#[component]
fn ProductsSection() -> impl IntoView {
    // Bumped after every mutation to refetch the list.
    let version = RwSignal::new(0_u32);
    let products = LocalResource::new(move || {
        version.track();
        api::fetch_all_products()
    });

    let edit_id = RwSignal::new(None::<String>);
    let name = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let price = RwSignal::new(String::new());
    let pages = RwSignal::new(String::new());
    let image = RwSignal::new(String::new());
    let category = RwSignal::new("medicina".to_owned());
    let error = RwSignal::new(String::new());

    let reset_form = move || {
        edit_id.set(None);
        name.set(String::new());
        description.set(String::new());
        price.set(String::new());
        pages.set(String::new());
        image.set(String::new());
        category.set("medicina".to_owned());
        error.set(String::new());
    };

    let on_save = move |_| {
        let name_value = name.get_untracked().trim().to_owned();
        if name_value.is_empty() {
            error.set("El nombre es obligatorio.".to_owned());
            return;
        }
        let Ok(price_value) = price.get_untracked().trim().parse::<f64>() else {
            error.set("El precio debe ser un número.".to_owned());
            return;
        };
        let pages_value = pages.get_untracked().trim().parse::<u32>().unwrap_or(0);
        let image_value = image.get_untracked().trim().to_owned();
        let form = ProductForm {
            name: name_value,
            description: description.get_untracked(),
            price: price_value,
            pages: pages_value,
            image: (!image_value.is_empty()).then_some(image_value),
            category: category.get_untracked(),
        };
        let editing = edit_id.get_untracked();
        leptos::task::spawn_local(async move {
            let saved = match editing {
                Some(id) => api::update_product(&id, &form).await,
                None => api::create_product(&form).await,
            };
            match saved {
                Ok(()) => {
                    reset_form();
                    version.update(|v| *v += 1);
                }
                Err(api::ApiError::Message(msg)) if !msg.is_empty() => error.set(msg),
                Err(_) => error.set("No se pudo guardar el producto.".to_owned()),
            }
        });
    };

    let on_edit = move |product: &Product| {
        edit_id.set(Some(product.id.clone()));
        name.set(product.name.clone());
        description.set(product.description.clone());
        price.set(product.price.to_string());
        pages.set(product.pages.to_string());
        image.set(product.image.clone().unwrap_or_default());
        category.set(product.category.clone());
        error.set(String::new());
    };

    let on_delete = move |id: String| {
        leptos::task::spawn_local(async move {
            if api::delete_product(&id).await {
                version.update(|v| *v += 1);
            }
        });
    };

    view! {
        <section class="admin-products">
            <h2>"Productos"</h2>

            <form class="admin-products__form" on:submit=move |ev| ev.prevent_default()>
                <h3>
                    {move || {
                        if edit_id.get().is_some() { "Editar producto" } else { "Nuevo producto" }
                    }}
                </h3>
                <input
                    type="text"
                    placeholder="Nombre"
                    prop:value=name
                    on:input=move |ev| name.set(event_target_value(&ev))
                />
                <textarea
                    placeholder="Descripción"
                    prop:value=description
                    on:input=move |ev| description.set(event_target_value(&ev))
                ></textarea>
                <input
                    type="number"
                    placeholder="Precio"
                    prop:value=price
                    on:input=move |ev| price.set(event_target_value(&ev))
                />
                <input
                    type="number"
                    placeholder="Páginas"
                    prop:value=pages
                    on:input=move |ev| pages.set(event_target_value(&ev))
                />
                <input
                    type="text"
                    placeholder="URL de imagen"
                    prop:value=image
                    on:input=move |ev| image.set(event_target_value(&ev))
                />
                <select on:change=move |ev| category.set(event_target_value(&ev))>
                    <option value="medicina" selected=move || category.get() == "medicina">
                        "Medicina"
                    </option>
                    <option value="otros" selected=move || category.get() == "otros">
                        "Otros"
                    </option>
                </select>
                {move || {
                    let msg = error.get();
                    (!msg.is_empty()).then(|| view! { <p class="admin-products__error">{msg}</p> })
                }}
                <div class="admin-products__actions">
                    <button class="btn btn--primary" on:click=on_save>
                        {move || if edit_id.get().is_some() { "Guardar cambios" } else { "Crear" }}
                    </button>
                    {move || {
                        edit_id
                            .get()
                            .is_some()
                            .then(|| {
                                view! {
                                    <button class="btn" on:click=move |_| reset_form()>
                                        "Cancelar"
                                    </button>
                                }
                            })
                    }}
                </div>
            </form>

            <Suspense fallback=|| view! { <p>"Cargando productos..."</p> }>
                {move || {
                    products
                        .get()
                        .map(|fetched| {
                            let listing = fetched.unwrap_or_default();
                            view! {
                                <table class="admin-table">
                                    <thead>
                                        <tr>
                                            <th>"Nombre"</th>
                                            <th>"Categoría"</th>
                                            <th>"Precio"</th>
                                            <th>"Páginas"</th>
                                            <th></th>
                                        </tr>
                                    </thead>
                                    <tbody>
                                        {listing
                                            .iter()
                                            .map(|product| {
                                                let snapshot = product.clone();
                                                let delete_id = product.id.clone();
                                                view! {
                                                    <tr>
                                                        <td>{product.name.clone()}</td>
                                                        <td>{product.category.clone()}</td>
                                                        <td>{format::price(product.price)}</td>
                                                        <td>{product.pages}</td>
                                                        <td>
                                                            <button on:click=move |_| on_edit(&snapshot)>
                                                                "Editar"
                                                            </button>
                                                            <button on:click=move |_| on_delete(
                                                                delete_id.clone(),
                                                            )>"Eliminar"</button>
                                                        </td>
                                                    </tr>
                                                }
                                            })
                                            .collect::<Vec<_>>()}
                                    </tbody>
                                </table>
                            }
                        })
                }}
            </Suspense>
        </section>
    }
}

// =============================================================
// Orders
// =============================================================

#[component]
fn OrdersSection() -> impl IntoView {
    let version = RwSignal::new(0_u32);
    let search = RwSignal::new(String::new());
    let orders = LocalResource::new(move || {
        version.track();
        api::fetch_orders()
    });

    let on_status = move |id: String, status: String| {
        leptos::task::spawn_local(async move {
            if api::update_order_status(&id, &status).await {
                version.update(|v| *v += 1);
            }
        });
    };

    view! {
        <section class="admin-orders">
            <h2>"Pedidos"</h2>
            <input
                type="text"
                placeholder="Buscar por cliente o email..."
                prop:value=search
                on:input=move |ev| search.set(event_target_value(&ev))
            />
            <Suspense fallback=|| view! { <p>"Cargando pedidos..."</p> }>
                {move || {
                    orders
                        .get()
                        .map(|fetched| {
                            let visible =
                                filter_orders(fetched.unwrap_or_default(), &search.get());
                            if visible.is_empty() {
                                return view! { <p>"No se encontraron pedidos"</p> }.into_any();
                            }
                            view! {
                                <table class="admin-table">
                                    <thead>
                                        <tr>
                                            <th>"Cliente"</th>
                                            <th>"Productos"</th>
                                            <th>"Total"</th>
                                            <th>"Fecha"</th>
                                            <th>"Estado"</th>
                                        </tr>
                                    </thead>
                                    <tbody>
                                        {visible
                                            .iter()
                                            .map(|order| {
                                                let id = order.id.clone();
                                                let current = order.status.clone();
                                                let buyer = order
                                                    .user
                                                    .as_ref()
                                                    .map(|u| {
                                                        format!("{} ({})", u.nombre, u.email)
                                                    })
                                                    .unwrap_or_else(|| "Usuario eliminado".to_owned());
                                                let items = order
                                                    .products
                                                    .iter()
                                                    .map(|line| {
                                                        let name = line
                                                            .product
                                                            .as_ref()
                                                            .map(|p| p.name.clone())
                                                            .unwrap_or_else(|| {
                                                                "Producto eliminado".to_owned()
                                                            });
                                                        format!("{name} x{}", line.quantity)
                                                    })
                                                    .collect::<Vec<_>>()
                                                    .join(", ");
                                                view! {
                                                    <tr>
                                                        <td>{buyer}</td>
                                                        <td>{items}</td>
                                                        <td>{format::price(order.total)}</td>
                                                        <td>{order.created_at.clone()}</td>
                                                        <td>
                                                            <select on:change=move |ev| on_status(
                                                                id.clone(),
                                                                event_target_value(&ev),
                                                            )>
                                                                {ORDER_STATUSES
                                                                    .iter()
                                                                    .map(|&status| {
                                                                        view! {
                                                                            <option
                                                                                value=status
                                                                                selected=current == status
                                                                            >
                                                                                {status}
                                                                            </option>
                                                                        }
                                                                    })
                                                                    .collect::<Vec<_>>()}
                                                            </select>
                                                        </td>
                                                    </tr>
                                                }
                                            })
                                            .collect::<Vec<_>>()}
                                    </tbody>
                                </table>
                            }
                                .into_any()
                        })
                }}
            </Suspense>
        </section>
    }
}

// =============================================================
// Users
// =============================================================

#[component]
fn UsersSection() -> impl IntoView {
    let search = RwSignal::new(String::new());
    let selected = RwSignal::new(None::<String>);

    let users = LocalResource::new(move || {
        let search = search.get();
        async move { api::fetch_users(&search).await }
    });
    let user_orders = LocalResource::new(move || {
        let selected = selected.get();
        async move {
            match selected {
                Some(id) => api::fetch_user_orders(&id).await,
                None => None,
            }
        }
    });

    view! {
        <section class="admin-users">
            <h2>"Usuarios"</h2>
            <input
                type="text"
                placeholder="Buscar por nombre o email..."
                prop:value=search
                on:input=move |ev| {
                    search.set(event_target_value(&ev));
                    selected.set(None);
                }
            />
            <Suspense fallback=|| view! { <p>"Cargando usuarios..."</p> }>
                {move || {
                    users
                        .get()
                        .map(|fetched| {
                            let listing = fetched.unwrap_or_default();
                            view! {
                                <table class="admin-table">
                                    <thead>
                                        <tr>
                                            <th>"Nombre"</th>
                                            <th>"Email"</th>
                                            <th>"Carrera"</th>
                                            <th>"Teléfono"</th>
                                            <th></th>
                                        </tr>
                                    </thead>
                                    <tbody>
                                        {listing
                                            .iter()
                                            .map(|user| {
                                                let id = user.id.clone();
                                                view! {
                                                    <tr>
                                                        <td>
                                                            {user.nombre.clone()}
                                                            {user.is_admin.then_some(" (admin)")}
                                                        </td>
                                                        <td>{user.email.clone()}</td>
                                                        <td>{user.carrera.clone()}</td>
                                                        <td>{user.telefono.clone()}</td>
                                                        <td>
                                                            <button on:click=move |_| selected.set(
                                                                Some(id.clone()),
                                                            )>"Ver pedidos"</button>
                                                        </td>
                                                    </tr>
                                                }
                                            })
                                            .collect::<Vec<_>>()}
                                    </tbody>
                                </table>
                            }
                        })
                }}
            </Suspense>

            {move || {
                selected
                    .get()
                    .map(|_| {
                        view! {
                            <div class="admin-users__orders">
                                <h3>"Pedidos del usuario"</h3>
                                <Suspense fallback=|| view! { <p>"Cargando pedidos..."</p> }>
                                    {move || {
                                        user_orders
                                            .get()
                                            .map(|fetched| {
                                                let listing = fetched.unwrap_or_default();
                                                if listing.is_empty() {
                                                    return view! {
                                                        <p>"Este usuario no tiene pedidos"</p>
                                                    }
                                                        .into_any();
                                                }
                                                view! {
                                                    <ul>
                                                        {listing
                                                            .iter()
                                                            .map(|order| {
                                                                view! {
                                                                    <li>
                                                                        <span>{order.created_at.clone()}</span>
                                                                        <span>{format::price(order.total)}</span>
                                                                        <span>{order.status.clone()}</span>
                                                                    </li>
                                                                }
                                                            })
                                                            .collect::<Vec<_>>()}
                                                    </ul>
                                                }
                                                    .into_any()
                                            })
                                    }}
                                </Suspense>
                            </div>
                        }
                    })
            }}
        </section>
    }
}
