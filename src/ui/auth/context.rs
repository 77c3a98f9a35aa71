//! Session context for pages that need the signed-in user
//!
//! This module provides a reactive session context that:
//! - Is created explicitly by `App` and injected into the component tree
//! - Restores itself from localStorage after hydration
//! - Exposes setters for every field
//! - Clears localStorage on teardown

use leptos::prelude::*;

use crate::core::storage::BrowserStorage;
use crate::core::{Session, TokenCheck, UserData};

/// Session context providing authentication state and setters
#[derive(Clone, Copy)]
pub struct SessionContext {
    /// Whether a user is signed in
    pub authenticated: RwSignal<bool>,
    /// True until the persisted session has been checked
    pub loading: RwSignal<bool>,
    /// Data about the signed-in user
    pub user_data: RwSignal<UserData>,
}

impl SessionContext {
    fn new(session: Session) -> Self {
        Self {
            authenticated: RwSignal::new(session.authenticated),
            loading: RwSignal::new(session.loading),
            user_data: RwSignal::new(session.user_data),
        }
    }

    pub fn set_authenticated(&self, authenticated: bool) {
        self.authenticated.set(authenticated);
    }

    pub fn set_loading(&self, loading: bool) {
        self.loading.set(loading);
    }

    pub fn set_user_data(&self, user_data: UserData) {
        self.user_data.set(user_data);
    }

    /// Copy of the current state, for code outside the reactive graph
    /// Uses get_untracked() since this is typically called from event handlers
    pub fn snapshot(&self) -> Session {
        Session {
            authenticated: self.authenticated.get_untracked(),
            loading: self.loading.get_untracked(),
            user_data: self.user_data.get_untracked(),
        }
    }

    /// Replace the reactive state with `session`
    pub fn apply(&self, session: Session) {
        self.authenticated.set(session.authenticated);
        self.loading.set(session.loading);
        self.user_data.set(session.user_data);
    }

    pub fn first_name(&self) -> Option<String> {
        self.user_data.with(|data| {
            data.get(crate::core::storage::USER_FIRST_NAME)
                .filter(|name| !name.is_empty())
                .cloned()
        })
    }

    /// Sign out: clear localStorage and reset the state
    pub fn teardown(&self) {
        let mut session = self.snapshot();
        if let Err(e) = session.teardown(&BrowserStorage) {
            leptos::logging::warn!("Failed to clear session storage: {}", e);
        }
        self.apply(session);
    }
}

/// Create the session context and provide it to the component tree
pub fn provide_session_context(token_check: TokenCheck) -> SessionContext {
    // Start loading on both server and client to avoid hydration mismatch
    let ctx = SessionContext::new(Session::default());

    // Restore state from localStorage after hydration (client-side only)
    #[cfg(not(feature = "ssr"))]
    {
        Effect::new(move |_| {
            ctx.apply(Session::init(&BrowserStorage, token_check));
        });
    }
    #[cfg(feature = "ssr")]
    {
        let _ = token_check;
    }

    provide_context(ctx);
    ctx
}

/// Get session context from the component tree
pub fn use_session_context() -> SessionContext {
    expect_context::<SessionContext>()
}
