//! Route wrapper enforcing the per-route access guard.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};
use wasm_bindgen::JsValue;

use crate::routing::guard::{self, RouteDecision};
use crate::state::session::SessionStore;

/// Renders its children only when the current session may see this screen.
///
/// While the session is still rehydrating this renders nothing, so the user
/// never sees a flash of a wrong redirect. When the guard decides on a
/// redirect the navigation happens here; the decision itself lives in
/// `routing::guard` and stays pure. The attempted path travels along as
/// history state so a login flow can return to it (best-effort).
#[component]
pub fn RequireAuth(#[prop(optional)] admin_only: bool, children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let location = use_location();
    let navigate = use_navigate();

    Effect::new(move || {
        if let RouteDecision::Redirect(target) = guard::require_auth(&session.get(), admin_only) {
            let from = location.pathname.get_untracked();
            navigate(
                target,
                NavigateOptions {
                    replace: true,
                    state: leptos_router::location::State::new(Some(JsValue::from_str(&from))),
                    ..NavigateOptions::default()
                },
            );
        }
    });

    move || match guard::require_auth(&session.get(), admin_only) {
        RouteDecision::Render => Some(children()),
        RouteDecision::Pending | RouteDecision::Redirect(_) => None,
    }
}
