//! Login screen.
//!
//! On success the session store receives the token; the top-level redirect
//! policy then moves the user forward (admins to the back office, everyone
//! else to category selection).

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;

use crate::net::api::{self, ApiError};
use crate::net::types::LoginRequest;
use crate::routing::paths;
use crate::state::session::SessionStore;

/// Shape check matching the classic `\S+@\S+\.\S+` rule.
fn looks_like_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    let no_space = |s: &str| !s.is_empty() && !s.contains(char::is_whitespace);
    no_space(local) && no_space(host) && no_space(tld)
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<SessionStore>();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let email_error = RwSignal::new(None::<&'static str>);
    let password_error = RwSignal::new(None::<&'static str>);
    let message = RwSignal::new(String::new());
    let pending = RwSignal::new(false);

    let validate = move || {
        let value = email.get_untracked();
        email_error.set(if value.trim().is_empty() {
            Some("El email es obligatorio.")
        } else if !looks_like_email(&value) {
            Some("Email inválido.")
        } else {
            None
        });
        password_error.set(if password.get_untracked().is_empty() {
            Some("La contraseña es obligatoria.")
        } else {
            None
        });
        email_error.get_untracked().is_none() && password_error.get_untracked().is_none()
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if !validate() {
            return;
        }
        pending.set(true);
        message.set(String::new());
        let request = LoginRequest {
            email: email.get_untracked(),
            password: password.get_untracked(),
        };
        leptos::task::spawn_local(async move {
            match api::login(&request).await {
                Ok(token) => {
                    message.set("¡Login exitoso!".to_owned());
                    session.login(&token);
                }
                Err(ApiError::Message(msg)) if msg.contains("incorrectos") => {
                    message.set(
                        "El email o la contraseña no son correctos. ¿Olvidaste tu contraseña?"
                            .to_owned(),
                    );
                }
                Err(ApiError::Message(msg)) if !msg.is_empty() => message.set(msg),
                Err(ApiError::Message(_)) => {
                    message.set(
                        "Ocurrió un error inesperado. Intenta nuevamente o contacta soporte."
                            .to_owned(),
                    );
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

    view! {
        <div class="auth-page">
            <form class="auth-page__form" on:submit=on_submit>
                <h2>"Iniciar Sesión"</h2>
                <input
                    type="email"
                    placeholder="Email"
                    prop:value=email
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
                {move || email_error.get().map(|e| view! { <div class="field-error">{e}</div> })}
                <input
                    type="password"
                    placeholder="Contraseña"
                    prop:value=password
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
                {move || {
                    password_error.get().map(|e| view! { <div class="field-error">{e}</div> })
                }}
                <button class="btn btn--primary" type="submit" disabled=move || pending.get()>
                    {move || if pending.get() { "Ingresando..." } else { "Iniciar Sesión" }}
                </button>
                {move || {
                    let msg = message.get();
                    (!msg.is_empty()).then(|| view! { <p class="auth-page__message">{msg}</p> })
                }}
                <div class="auth-page__footer">
                    "¿No tienes cuenta? "
                    <a href=paths::REGISTER>"Regístrate aquí"</a>
                </div>
            </form>
        </div>
    }
}
