//! Checkout screen: order summary, payment method, order creation.
//!
//! A confirmed order clears the cart (and its persisted copy) and shows a
//! success screen; the root link there bounces through the redirect policy
//! back to category selection.

use leptos::prelude::*;

use crate::net::api::{self, ApiError};
use crate::net::types::{NewOrder, OrderItem};
use crate::routing::paths;
use crate::state::cart::CartStore;
use crate::state::session::SessionStore;
use crate::util::format;

const PAYMENT_METHODS: [(&str, &str, bool); 2] = [
    ("efectivo", "Efectivo al retirar", true),
    ("mercadopago", "Mercado Pago (próximamente)", false),
];

#[component]
pub fn CheckoutPage() -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let cart = expect_context::<CartStore>();

    let payment_method = RwSignal::new("efectivo".to_owned());
    let pending = RwSignal::new(false);
    let success = RwSignal::new(false);
    let error = RwSignal::new(String::new());

    let on_confirm = move |_| {
        let contents = cart.get_untracked();
        if contents.is_empty() {
            error.set("El carrito está vacío.".to_owned());
            return;
        }
        pending.set(true);
        error.set(String::new());

        let state = session.get_untracked();
        let order = NewOrder {
            user: state.user.as_ref().map(|u| u.id.clone()).unwrap_or_default(),
            products: contents
                .lines
                .iter()
                .map(|line| OrderItem {
                    product: line.product.id.clone(),
                    quantity: line.quantity,
                })
                .collect(),
            total: contents.total(),
            payment_method: payment_method.get_untracked(),
        };
        let token = state.token.unwrap_or_default();

        leptos::task::spawn_local(async move {
            match api::create_order(&order, &token).await {
                Ok(()) => {
                    success.set(true);
                    cart.clear();
                }
                Err(ApiError::Message(msg)) if msg.contains("Verifica los datos") => {
                    error.set(
                        "No se pudo crear el pedido. Verifica los datos e intenta nuevamente."
                            .to_owned(),
                    );
                }
                Err(ApiError::Message(msg)) if !msg.is_empty() => error.set(msg),
                Err(ApiError::Message(_)) => {
                    error.set(
                        "Ocurrió un error inesperado al crear el pedido. Intenta nuevamente o contacta soporte."
                            .to_owned(),
                    );
                }
                Err(ApiError::Network) => {
                    error.set(
                        "No se pudo conectar con el servidor. Verifica tu conexión a internet."
                            .to_owned(),
                    );
                }
            }
            pending.set(false);
        });
    };

    move || {
        if success.get() {
            return view! {
                <div class="checkout-page checkout-page--success">
                    <h1>"¡Pedido realizado con éxito!"</h1>
                    <p>
                        "Gracias por tu compra. Te avisaremos cuando tu pedido esté listo para retirar."
                    </p>
                    <a class="btn btn--primary" href=paths::ROOT>
                        "Volver al Catálogo"
                    </a>
                </div>
            }
                .into_any();
        }

        view! {
            <div class="checkout-page">
                <h1>"Finalizar compra"</h1>

                <section class="checkout-page__panel">
                    <h2>"Resumen del pedido"</h2>
                    {move || {
                        let contents = cart.get();
                        if contents.is_empty() {
                            view! { <p>"Tu carrito está vacío."</p> }.into_any()
                        } else {
                            view! {
                                <ul>
                                    {contents
                                        .lines
                                        .iter()
                                        .map(|line| {
                                            view! {
                                                <li>
                                                    <span>
                                                        {line.product.name.clone()} " x"
                                                        {line.quantity}
                                                    </span>
                                                    <span>
                                                        {format::price(
                                                            line.product.price * f64::from(line.quantity),
                                                        )}
                                                    </span>
                                                </li>
                                            }
                                        })
                                        .collect::<Vec<_>>()}
                                </ul>
                            }
                                .into_any()
                        }
                    }}
                    <div class="checkout-page__total">
                        <span>"Total:"</span>
                        {move || format::price(cart.get().total())}
                    </div>
                </section>

                <section class="checkout-page__panel">
                    <h2>"Datos del usuario"</h2>
                    {move || {
                        let user = session.get().user;
                        view! {
                            <div>
                                <p>
                                    "Nombre: "
                                    {user.as_ref().map(|u| u.nombre.clone()).unwrap_or_default()}
                                </p>
                                <p>
                                    "Email: "
                                    {user.as_ref().map(|u| u.email.clone()).unwrap_or_default()}
                                </p>
                            </div>
                        }
                    }}
                </section>

                <section class="checkout-page__panel">
                    <h2>"Método de pago"</h2>
                    {PAYMENT_METHODS
                        .iter()
                        .map(|&(value, label, enabled)| {
                            view! {
                                <label>
                                    <input
                                        type="radio"
                                        name="payment"
                                        disabled=!enabled
                                        checked=move || payment_method.get() == value
                                        on:change=move |_| payment_method.set(value.to_owned())
                                    />
                                    {label}
                                </label>
                            }
                        })
                        .collect::<Vec<_>>()}
                </section>

                {move || {
                    let msg = error.get();
                    (!msg.is_empty())
                        .then(|| view! { <p class="checkout-page__error">{msg}</p> })
                }}

                <button
                    class="btn btn--primary checkout-page__confirm"
                    disabled=move || cart.get().is_empty() || pending.get()
                    on:click=on_confirm
                >
                    {move || if pending.get() { "Procesando..." } else { "Confirmar pedido" }}
                </button>
            </div>
        }
            .into_any()
    }
}
