use super::*;
use crate::auth::token::SessionUser;

fn loading() -> SessionState {
    SessionState::default()
}

fn anonymous() -> SessionState {
    SessionState {
        loading: false,
        ..SessionState::default()
    }
}

fn signed_in(is_admin: bool) -> SessionState {
    SessionState {
        token: Some("t".to_owned()),
        user: Some(SessionUser {
            id: "u1".to_owned(),
            nombre: "Ana".to_owned(),
            email: "ana@uni.edu".to_owned(),
            is_admin,
        }),
        is_authenticated: true,
        loading: false,
    }
}

// =============================================================
// Per-route guard
// =============================================================

#[test]
fn require_auth_suspends_while_loading() {
    assert_eq!(require_auth(&loading(), false), RouteDecision::Pending);
    assert_eq!(require_auth(&loading(), true), RouteDecision::Pending);
}

#[test]
fn require_auth_redirects_anonymous_to_login() {
    assert_eq!(
        require_auth(&anonymous(), false),
        RouteDecision::Redirect(paths::LOGIN)
    );
}

#[test]
fn require_auth_keeps_non_admin_out_of_admin_screens() {
    assert_eq!(
        require_auth(&signed_in(false), true),
        RouteDecision::Redirect(paths::CATEGORY_SELECTION)
    );
}

#[test]
fn require_auth_keeps_admin_out_of_store_screens() {
    assert_eq!(
        require_auth(&signed_in(true), false),
        RouteDecision::Redirect(paths::ADMIN)
    );
}

#[test]
fn require_auth_allows_matching_role() {
    assert_eq!(require_auth(&signed_in(false), false), RouteDecision::Render);
    assert_eq!(require_auth(&signed_in(true), true), RouteDecision::Render);
}

// =============================================================
// Top-level redirect policy
// =============================================================

#[test]
fn policy_suspends_while_loading() {
    assert_eq!(redirect_policy(&loading(), paths::CART), RouteDecision::Pending);
}

#[test]
fn policy_sends_anonymous_to_login() {
    assert_eq!(
        redirect_policy(&anonymous(), paths::CART),
        RouteDecision::Redirect(paths::LOGIN)
    );
    assert_eq!(
        redirect_policy(&anonymous(), paths::ROOT),
        RouteDecision::Redirect(paths::LOGIN)
    );
}

#[test]
fn policy_lets_anonymous_reach_login_and_register() {
    assert_eq!(redirect_policy(&anonymous(), paths::LOGIN), RouteDecision::Render);
    assert_eq!(redirect_policy(&anonymous(), paths::REGISTER), RouteDecision::Render);
}

#[test]
fn policy_pins_admin_to_admin_home() {
    assert_eq!(
        redirect_policy(&signed_in(true), paths::CATEGORY_SELECTION),
        RouteDecision::Redirect(paths::ADMIN)
    );
    assert_eq!(
        redirect_policy(&signed_in(true), paths::CART),
        RouteDecision::Redirect(paths::ADMIN)
    );
    assert_eq!(redirect_policy(&signed_in(true), paths::ADMIN), RouteDecision::Render);
}

#[test]
fn policy_keeps_non_admin_off_admin_and_root() {
    assert_eq!(
        redirect_policy(&signed_in(false), paths::ADMIN),
        RouteDecision::Redirect(paths::CATEGORY_SELECTION)
    );
    assert_eq!(
        redirect_policy(&signed_in(false), paths::ROOT),
        RouteDecision::Redirect(paths::CATEGORY_SELECTION)
    );
}

#[test]
fn policy_bounces_signed_in_non_admin_off_login() {
    assert_eq!(
        redirect_policy(&signed_in(false), paths::LOGIN),
        RouteDecision::Redirect(paths::CATEGORY_SELECTION)
    );
}

#[test]
fn policy_renders_regular_screens_for_non_admin() {
    for path in [paths::CATEGORY_SELECTION, paths::CART, paths::CHECKOUT, paths::ACCOUNT] {
        assert_eq!(redirect_policy(&signed_in(false), path), RouteDecision::Render);
    }
    assert_eq!(
        redirect_policy(&signed_in(false), &paths::catalog("medicina")),
        RouteDecision::Render
    );
}

#[test]
fn policy_is_idempotent() {
    // Re-applying the policy to the path it just redirected to must render.
    let cases = [
        (anonymous(), paths::CART),
        (anonymous(), paths::CHECKOUT),
        (signed_in(true), paths::CATEGORY_SELECTION),
        (signed_in(true), paths::ROOT),
        (signed_in(false), paths::ADMIN),
        (signed_in(false), paths::ROOT),
        (signed_in(false), paths::LOGIN),
    ];
    for (session, path) in cases {
        let RouteDecision::Redirect(target) = redirect_policy(&session, path) else {
            panic!("expected a redirect from {path}");
        };
        assert_eq!(
            redirect_policy(&session, target),
            RouteDecision::Render,
            "policy looped via {path} -> {target}"
        );
    }
}
