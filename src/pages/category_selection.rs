//! Landing screen for regular users: pick a catalog category.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::routing::paths;

struct Category {
    id: &'static str,
    icon: &'static str,
    name: &'static str,
    description: &'static str,
}

const CATEGORIES: [Category; 2] = [
    Category {
        id: "medicina",
        icon: "🏥",
        name: "📚 Libros de Medicina",
        description: "Libros especializados para estudiantes de medicina",
    },
    Category {
        id: "otros",
        icon: "🎓",
        name: "📖 Otros Libros",
        description: "Libros para otras carreras universitarias",
    },
];

#[component]
pub fn CategorySelectionPage() -> impl IntoView {
    let navigate = use_navigate();

    view! {
        <div class="category-page">
            <header class="category-page__header">
                <h1>"📚 Libros universitarios"</h1>
                <p>"Selecciona la categoría de libros que necesitas"</p>
            </header>
            <div class="category-page__grid">
                {CATEGORIES
                    .iter()
                    .map(|category| {
                        let navigate = navigate.clone();
                        let id = category.id;
                        view! {
                            <button
                                class=format!("category-card category-card--{id}")
                                on:click=move |_| {
                                    navigate(&paths::catalog(id), NavigateOptions::default());
                                }
                            >
                                <span class="category-card__icon">{category.icon}</span>
                                <h2>{category.name}</h2>
                                <p>{category.description}</p>
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
            <footer class="category-page__footer">
                <p>"Más de 1300 títulos disponibles • Stock actualizado"</p>
            </footer>
        </div>
    }
}

/// Display names for a catalog category id.
#[must_use]
pub fn category_title(id: &str) -> (&'static str, &'static str) {
    if id == "medicina" {
        (
            "Libros de Medicina",
            "Libros especializados para estudiantes de medicina",
        )
    } else {
        (
            "Otros Libros",
            "Libros para otras carreras universitarias",
        )
    }
}
