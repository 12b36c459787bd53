//! Account screen: profile as decoded from the credential token.

use leptos::prelude::*;

use crate::components::auth_status::AuthStatus;
use crate::state::session::SessionStore;

#[component]
pub fn AccountPage() -> impl IntoView {
    let session = expect_context::<SessionStore>();

    view! {
        <div class="account-page">
            <h1>"Mi cuenta"</h1>
            <AuthStatus/>
            {move || {
                session
                    .get()
                    .user
                    .map_or_else(
                        || {
                            view! {
                                // Token present but no decodable profile.
                                <p class="account-page__missing">
                                    "No hay datos de perfil disponibles."
                                </p>
                            }
                                .into_any()
                        },
                        |user| {
                            view! {
                                <div class="account-page__profile">
                                    <p>"Nombre: " {user.nombre.clone()}</p>
                                    <p>"Email: " {user.email.clone()}</p>
                                </div>
                            }
                                .into_any()
                        },
                    )
            }}
        </div>
    }
}
