//! Registration screen. On success the user is sent to the login screen.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::api::{self, ApiError};
use crate::net::types::RegisterRequest;
use crate::routing::paths;

#[component]
pub fn RegisterPage() -> impl IntoView {
    let navigate = use_navigate();

    let nombre = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let carrera = RwSignal::new(String::new());
    let telefono = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let pending = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if nombre.get_untracked().trim().is_empty()
            || email.get_untracked().trim().is_empty()
            || password.get_untracked().is_empty()
        {
            message.set("Completa los campos obligatorios.".to_owned());
            return;
        }
        pending.set(true);
        message.set(String::new());
        let request = RegisterRequest {
            nombre: nombre.get_untracked(),
            email: email.get_untracked(),
            password: password.get_untracked(),
            carrera: carrera.get_untracked(),
            telefono: telefono.get_untracked(),
        };
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match api::register(&request).await {
                Ok(()) => {
                    navigate(paths::LOGIN, NavigateOptions::default());
                }
                Err(ApiError::Message(msg)) if !msg.is_empty() => message.set(msg),
                Err(ApiError::Message(_)) => {
                    message.set("No se pudo crear la cuenta. Intenta nuevamente.".to_owned());
                }
                Err(ApiError::Network) => {
                    message.set(
                        "No se pudo conectar con el servidor. Verifica tu conexión a internet."
                            .to_owned(),
                    );
                }
            }
            pending.set(false);
        });
    };

    let text_field = move |signal: RwSignal<String>, kind: &'static str, label: &'static str| {
        view! {
            <input
                type=kind
                placeholder=label
                prop:value=signal
                on:input=move |ev| signal.set(event_target_value(&ev))
            />
        }
    };

    view! {
        <div class="auth-page">
            <form class="auth-page__form" on:submit=on_submit>
                <h2>"Crear Cuenta"</h2>
                {text_field(nombre, "text", "Nombre completo")}
                {text_field(email, "email", "Email")}
                {text_field(password, "password", "Contraseña")}
                {text_field(carrera, "text", "Carrera")}
                {text_field(telefono, "tel", "Teléfono")}
                <button class="btn btn--primary" type="submit" disabled=move || pending.get()>
                    {move || if pending.get() { "Creando cuenta..." } else { "Registrarse" }}
                </button>
                {move || {
                    let msg = message.get();
                    (!msg.is_empty()).then(|| view! { <p class="auth-page__message">{msg}</p> })
                }}
                <div class="auth-page__footer">
                    "¿Ya tienes cuenta? "
                    <a href=paths::LOGIN>"Inicia sesión"</a>
                </div>
            </form>
        </div>
    }
}
