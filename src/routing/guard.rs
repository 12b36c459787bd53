//! Access guard: pure decisions over session state and the current path.
//!
//! The guard never navigates. It states the intended destination and the
//! presentation layer obeys (`components/require_auth.rs` and the top-level
//! effect in `app.rs`). Both entry points are re-evaluated on every
//! navigation or session change.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::routing::paths;
use crate::state::session::SessionState;

/// Outcome of an access decision.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteDecision {
    /// Session rehydration has not finished; render nothing yet rather
    /// than flash a wrong redirect.
    Pending,
    Render,
    Redirect(&'static str),
}

/// Per-route guard for protected screens.
///
/// Admin and non-admin areas are disjoint: an admin is bounced out of
/// regular screens just as a regular user is bounced out of admin-only
/// ones.
#[must_use]
pub fn require_auth(session: &SessionState, admin_only: bool) -> RouteDecision {
    if session.loading {
        return RouteDecision::Pending;
    }
    if !session.is_authenticated {
        return RouteDecision::Redirect(paths::LOGIN);
    }
    if admin_only && !session.is_admin() {
        return RouteDecision::Redirect(paths::CATEGORY_SELECTION);
    }
    if !admin_only && session.is_admin() {
        return RouteDecision::Redirect(paths::ADMIN);
    }
    RouteDecision::Render
}

/// Top-level redirect policy, evaluated once per navigation before the
/// route tree renders. First matching rule wins.
///
/// Idempotent: applying the policy to its own redirect target yields
/// `Render`, so no redirect loops are possible.
#[must_use]
pub fn redirect_policy(session: &SessionState, path: &str) -> RouteDecision {
    if session.loading {
        return RouteDecision::Pending;
    }
    if !session.is_authenticated {
        if path == paths::LOGIN || path == paths::REGISTER {
            return RouteDecision::Render;
        }
        return RouteDecision::Redirect(paths::LOGIN);
    }
    if session.is_admin() {
        if path == paths::ADMIN {
            return RouteDecision::Render;
        }
        return RouteDecision::Redirect(paths::ADMIN);
    }
    // Authenticated non-admin: never the admin root, the bare root, or a
    // revisit of the login screen.
    if path == paths::ADMIN || path == paths::ROOT || path == paths::LOGIN {
        return RouteDecision::Redirect(paths::CATEGORY_SELECTION);
    }
    RouteDecision::Render
}
