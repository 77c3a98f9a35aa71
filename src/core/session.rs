//! Session state restored from persisted storage
//!
//! The session is an explicit object: it is created with [`Session::init`]
//! from a [`KeyValueStore`], mutated through its setters, and cleared with
//! [`Session::teardown`]. Nothing about it is global.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::storage::{KeyValueStore, SESSION_KEYS, USER_FIRST_NAME, USER_ID, USER_TOKEN};

/// How a persisted token is judged when the session starts.
///
/// Earlier versions of the app compared the stored token against a boolean,
/// which can never match, so a stored token never restored a session.
/// `Legacy` keeps that behaviour for deployments that rely on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TokenCheck {
    /// Any non-empty token authenticates
    #[default]
    Present,
    /// Never authenticate from storage
    Legacy,
}

impl TokenCheck {
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenCheck::Present => "present",
            TokenCheck::Legacy => "legacy",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "legacy" => TokenCheck::Legacy,
            _ => TokenCheck::Present,
        }
    }

    pub fn accepts(&self, token: Option<&str>) -> bool {
        match self {
            TokenCheck::Present => token.is_some_and(|t| !t.is_empty()),
            TokenCheck::Legacy => false,
        }
    }
}

/// Data known about the signed-in user, keyed like the persisted entries
pub type UserData = BTreeMap<String, String>;

/// Authentication state of the app
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub authenticated: bool,
    pub loading: bool,
    pub user_data: UserData,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            authenticated: false,
            loading: true,
            user_data: UserData::new(),
        }
    }
}

impl Session {
    /// Restore the session from storage.
    ///
    /// Starts out loading, checks the stored token, then finishes loading.
    pub fn init(store: &impl KeyValueStore, check: TokenCheck) -> Self {
        let mut session = Session::default();

        let token = store.get(USER_TOKEN);
        if check.accepts(token.as_deref()) {
            session.authenticated = true;
            session.user_data = read_user_data(store);
        }

        session.loading = false;
        session
    }

    pub fn set_authenticated(&mut self, authenticated: bool) {
        self.authenticated = authenticated;
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    pub fn set_user_data(&mut self, user_data: UserData) {
        self.user_data = user_data;
    }

    /// Persist a fresh login and mark the session authenticated.
    ///
    /// The token is written last. If any write fails, every session key is
    /// removed again so a half-written login is never restored.
    pub fn sign_in(
        &mut self,
        store: &impl KeyValueStore,
        token: &str,
        user_id: &str,
        first_name: &str,
    ) -> Result<(), String> {
        let written = store
            .set(USER_ID, user_id)
            .and_then(|()| store.set(USER_FIRST_NAME, first_name))
            .and_then(|()| store.set(USER_TOKEN, token));

        if let Err(err) = written {
            for key in SESSION_KEYS {
                let _ = store.remove(key);
            }
            return Err(err);
        }

        self.authenticated = true;
        self.user_data = read_user_data(store);
        Ok(())
    }

    /// Clear persisted entries and reset to a signed-out session
    pub fn teardown(&mut self, store: &impl KeyValueStore) -> Result<(), String> {
        for key in SESSION_KEYS {
            store.remove(key)?;
        }
        self.authenticated = false;
        self.loading = false;
        self.user_data.clear();
        Ok(())
    }

    pub fn first_name(&self) -> Option<&str> {
        self.user_data.get(USER_FIRST_NAME).map(String::as_str)
    }

    pub fn user_id(&self) -> Option<&str> {
        self.user_data.get(USER_ID).map(String::as_str)
    }
}

fn read_user_data(store: &impl KeyValueStore) -> UserData {
    [USER_ID, USER_FIRST_NAME]
        .into_iter()
        .filter_map(|key| store.get(key).map(|value| (key.to_string(), value)))
        .collect()
}
