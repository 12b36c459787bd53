//! Session banner with a logout action.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::routing::paths;
use crate::state::session::SessionStore;

/// Shows whether a session is active and offers logout.
#[component]
pub fn AuthStatus() -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let navigate = use_navigate();

    let on_logout = move |_| {
        session.logout();
        navigate(paths::LOGIN, NavigateOptions::default());
    };

    move || {
        if session.get().is_authenticated {
            view! {
                <div class="auth-status auth-status--active">
                    <p>"Has iniciado sesión"</p>
                    <button on:click=on_logout.clone()>"Cerrar Sesión"</button>
                </div>
            }
            .into_any()
        } else {
            view! {
                <div class="auth-status auth-status--inactive">
                    <p>"No has iniciado sesión"</p>
                </div>
            }
            .into_any()
        }
    }
}
