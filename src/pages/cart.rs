//! Shopping cart screen: line listing, quantity edits, removal, total.

use leptos::prelude::*;

use crate::routing::paths;
use crate::state::cart::CartStore;
use crate::util::format;

#[component]
pub fn CartPage() -> impl IntoView {
    let cart = expect_context::<CartStore>();

    view! {
        <div class="cart-page">
            <h1>"Tu carrito"</h1>
            {move || {
                let contents = cart.get();
                if contents.is_empty() {
                    return view! {
                        <div class="cart-page__empty">
                            <p>"Tu carrito está vacío."</p>
                            <a class="btn btn--primary" href=paths::CATEGORY_SELECTION>
                                "Ir al catálogo"
                            </a>
                        </div>
                    }
                        .into_any();
                }
                view! {
                    <ul class="cart-page__lines">
                        {contents
                            .lines
                            .iter()
                            .map(|line| {
                                let id = line.product.id.clone();
                                let quantity = i64::from(line.quantity);
                                let decrement = {
                                    let id = id.clone();
                                    move |_| cart.set_quantity(&id, quantity - 1)
                                };
                                let increment = {
                                    let id = id.clone();
                                    move |_| cart.set_quantity(&id, quantity + 1)
                                };
                                let remove = {
                                    let id = id.clone();
                                    move |_| cart.remove(&id)
                                };
                                view! {
                                    <li class="cart-line">
                                        {line
                                            .product
                                            .image
                                            .clone()
                                            .map(|img| {
                                                view! {
                                                    <img
                                                        class="cart-line__image"
                                                        src=format::image_url(&img)
                                                        alt=line.product.name.clone()
                                                    />
                                                }
                                            })}
                                        <div class="cart-line__info">
                                            <span class="cart-line__name">
                                                {line.product.name.clone()}
                                            </span>
                                            <span class="cart-line__price">
                                                {format::price(line.product.price)}
                                            </span>
                                        </div>
                                        <div class="cart-line__quantity">
                                            <button on:click=decrement>"−"</button>
                                            <span>{line.quantity}</span>
                                            <button on:click=increment>"+"</button>
                                        </div>
                                        <span class="cart-line__subtotal">
                                            {format::price(
                                                line.product.price * f64::from(line.quantity),
                                            )}
                                        </span>
                                        <button class="cart-line__remove" on:click=remove>
                                            "Quitar"
                                        </button>
                                    </li>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </ul>
                    <div class="cart-page__summary">
                        <span class="cart-page__total">
                            "Total: " {format::price(contents.total())}
                        </span>
                        <button class="btn" on:click=move |_| cart.clear()>
                            "Vaciar carrito"
                        </button>
                        <a class="btn btn--primary" href=paths::CHECKOUT>
                            "Finalizar compra"
                        </a>
                    </div>
                }
                    .into_any()
            }}
        </div>
    }
}
