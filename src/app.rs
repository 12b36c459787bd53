//! Application shell: store setup, router, top-level redirect policy.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::hooks::{use_location, use_navigate};
use leptos_router::{NavigateOptions, ParamSegment, StaticSegment};

use crate::components::navbar::Navbar;
use crate::components::require_auth::RequireAuth;
use crate::pages::account::AccountPage;
use crate::pages::admin::AdminPage;
use crate::pages::cart::CartPage;
use crate::pages::catalog::CatalogPage;
use crate::pages::category_selection::CategorySelectionPage;
use crate::pages::checkout::CheckoutPage;
use crate::pages::login::LoginPage;
use crate::pages::product_detail::ProductDetailPage;
use crate::pages::register::RegisterPage;
use crate::routing::guard::{self, RouteDecision};
use crate::routing::paths;
use crate::state::cart::CartStore;
use crate::state::session::SessionStore;
use crate::util::storage::BrowserStorage;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = SessionStore::new(BrowserStorage);
    let cart = CartStore::new(BrowserStorage);
    provide_context(session);
    provide_context(cart);

    // One-shot: load the persisted credential before any guard decides.
    Effect::new(move || session.rehydrate());

    view! {
        <Title text="Libros Universitarios"/>
        <Router>
            <Shell/>
        </Router>
    }
}

/// Everything that needs router context: the policy effect, the navbar
/// and the route tree.
#[component]
fn Shell() -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let location = use_location();
    let navigate = use_navigate();

    // Applied on every navigation and session change, before the per-route
    // guards. `replace: true` keeps bounced paths out of history.
    Effect::new(move || {
        let path = location.pathname.get();
        if let RouteDecision::Redirect(target) = guard::redirect_policy(&session.get(), &path) {
            navigate(
                target,
                NavigateOptions {
                    replace: true,
                    ..NavigateOptions::default()
                },
            );
        }
    });

    let show_navbar = move || {
        let state = session.get();
        let path = location.pathname.get();
        state.is_authenticated
            && !state.is_admin()
            && path != paths::LOGIN
            && path != paths::REGISTER
    };

    view! {
        <Show when=show_navbar>
            <Navbar/>
        </Show>
        <Routes fallback=|| view! { <RedirectToLogin/> }>
            <Route path=StaticSegment("") view=|| ()/>
            <Route path=StaticSegment("login") view=LoginPage/>
            <Route path=StaticSegment("registro") view=RegisterPage/>
            <Route
                path=StaticSegment("seleccionar-categoria")
                view=|| {
                    view! {
                        <RequireAuth>
                            <CategorySelectionPage/>
                        </RequireAuth>
                    }
                }
            />
            <Route
                path=(StaticSegment("catalogo"), ParamSegment("categoria"))
                view=|| {
                    view! {
                        <RequireAuth>
                            <CatalogPage/>
                        </RequireAuth>
                    }
                }
            />
            <Route
                path=(StaticSegment("producto"), ParamSegment("id"))
                view=|| {
                    view! {
                        <RequireAuth>
                            <ProductDetailPage/>
                        </RequireAuth>
                    }
                }
            />
            <Route
                path=StaticSegment("carrito")
                view=|| {
                    view! {
                        <RequireAuth>
                            <CartPage/>
                        </RequireAuth>
                    }
                }
            />
            <Route
                path=StaticSegment("checkout")
                view=|| {
                    view! {
                        <RequireAuth>
                            <CheckoutPage/>
                        </RequireAuth>
                    }
                }
            />
            <Route
                path=StaticSegment("cuenta")
                view=|| {
                    view! {
                        <RequireAuth>
                            <AccountPage/>
                        </RequireAuth>
                    }
                }
            />
            <Route
                path=StaticSegment("admin")
                view=|| {
                    view! {
                        <RequireAuth admin_only=true>
                            <AdminPage/>
                        </RequireAuth>
                    }
                }
            />
        </Routes>
    }
}

/// Unknown paths land on the login screen; the redirect policy takes over
/// from there for signed-in users.
#[component]
fn RedirectToLogin() -> impl IntoView {
    let navigate = use_navigate();
    Effect::new(move || {
        navigate(
            paths::LOGIN,
            NavigateOptions {
                replace: true,
                ..NavigateOptions::default()
            },
        );
    });
}
