//! Store navigation bar with cart badge.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::routing::paths;
use crate::state::cart::CartStore;
use crate::state::session::SessionStore;

/// Top navigation for the storefront. Hidden for admins and on the auth
/// screens (decided in `app.rs`).
#[component]
pub fn Navbar() -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let cart = expect_context::<CartStore>();
    let navigate = use_navigate();

    let on_logout = move |_| {
        session.logout();
        navigate(paths::LOGIN, NavigateOptions::default());
    };

    view! {
        <nav class="navbar">
            <a class="navbar__brand" href=paths::CATEGORY_SELECTION>
                "📚 Libros Universitarios"
            </a>
            <div class="navbar__links">
                <a href=paths::CATEGORY_SELECTION>"Categorías"</a>
                <a class="navbar__cart" href=paths::CART>
                    "Carrito"
                    {move || {
                        let count = cart.get().len();
                        (count > 0).then(|| view! { <span class="navbar__badge">{count}</span> })
                    }}
                </a>
                <a href=paths::ACCOUNT>"Mi cuenta"</a>
                <button class="navbar__logout" on:click=on_logout>
                    "Cerrar sesión"
                </button>
            </div>
        </nav>
    }
}
