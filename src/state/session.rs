//! Session state derived from the stored credential token.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;

use crate::auth::token::{self, SessionUser};
use crate::util::storage::{BrowserStorage, KeyValueStorage, TOKEN_KEY};

/// Current session as the UI sees it.
///
/// Invariant: `is_authenticated` is driven by token presence alone. A token
/// that fails to decode still authenticates the session; it just carries no
/// usable profile, so `user` stays empty.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionState {
    pub token: Option<String>,
    pub user: Option<SessionUser>,
    pub is_authenticated: bool,
    /// True only during startup rehydration, never again afterwards.
    pub loading: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            token: None,
            user: None,
            is_authenticated: false,
            loading: true,
        }
    }
}

impl SessionState {
    /// Derive session state from a token read back from storage.
    fn from_stored_token(token: Option<String>) -> Self {
        match token {
            Some(token) => {
                let user = token::decode(&token).ok().map(|p| p.user);
                Self {
                    token: Some(token),
                    user,
                    is_authenticated: true,
                    loading: false,
                }
            }
            None => Self {
                token: None,
                user: None,
                is_authenticated: false,
                loading: false,
            },
        }
    }

    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.user.as_ref().is_some_and(|u| u.is_admin)
    }
}

/// Owned session store: reactive state plus the storage slot it persists to.
///
/// Mutations happen only through [`rehydrate`](Self::rehydrate),
/// [`login`](Self::login), and [`logout`](Self::logout); consumers read.
/// Provided once via context in `app.rs`; the default backend is the
/// browser's `localStorage`.
#[derive(Clone, Copy)]
pub struct SessionStore<S: KeyValueStorage = BrowserStorage> {
    storage: S,
    state: RwSignal<SessionState>,
}

impl<S: KeyValueStorage> SessionStore<S> {
    /// Create the store in its pre-rehydration state (`loading = true`).
    #[must_use]
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            state: RwSignal::new(SessionState::default()),
        }
    }

    /// Read the current state, tracking it reactively.
    #[must_use]
    pub fn get(&self) -> SessionState {
        self.state.get()
    }

    /// Read the current state without tracking (event handlers).
    #[must_use]
    pub fn get_untracked(&self) -> SessionState {
        self.state.get_untracked()
    }

    /// One-shot startup rehydration from the persisted token. Clears
    /// `loading` unconditionally.
    pub fn rehydrate(&self) {
        let token = self.storage.get(TOKEN_KEY);
        self.state.set(SessionState::from_stored_token(token));
    }

    /// Persist the token and mark the session authenticated. The profile is
    /// populated only if the token decodes; otherwise it is silently left
    /// as-is.
    pub fn login(&self, token: &str) {
        self.storage.set(TOKEN_KEY, token);
        let user = token::decode(token).ok().map(|p| p.user);
        self.state.update(|s| {
            s.token = Some(token.to_owned());
            s.is_authenticated = true;
            if let Some(user) = user {
                s.user = Some(user);
            }
        });
    }

    /// Remove the persisted token and reset to the logged-out state.
    pub fn logout(&self) {
        self.storage.remove(TOKEN_KEY);
        self.state.update(|s| {
            s.token = None;
            s.user = None;
            s.is_authenticated = false;
        });
    }
}
