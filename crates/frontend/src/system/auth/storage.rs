//! localStorage persistence of the session: token, user, role, permissions.
//!
//! Written once at login, cleared at logout, read-only in between. Every
//! load fails closed: a missing window, absent key or malformed JSON yields
//! the empty/default value, never an error.

use contracts::system::auth::{Permission, UserInfo};
use serde::{Deserialize, Serialize};
use web_sys::window;

const ACCESS_TOKEN_KEY: &str = "auth_access_token";
const SESSION_KEY: &str = "auth_session";

/// Session payload persisted alongside the token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredSession {
    pub user: UserInfo,
    pub role: String,
    pub permissions: Vec<Permission>,
}

fn local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

pub fn save_access_token(token: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(ACCESS_TOKEN_KEY, token);
    }
}

pub fn get_access_token() -> Option<String> {
    local_storage()?.get_item(ACCESS_TOKEN_KEY).ok()?
}

pub fn save_session(session: &StoredSession) {
    if let (Some(storage), Ok(json)) = (local_storage(), serde_json::to_string(session)) {
        let _ = storage.set_item(SESSION_KEY, &json);
    }
}

pub fn get_session() -> Option<StoredSession> {
    let json = local_storage()?.get_item(SESSION_KEY).ok()??;
    serde_json::from_str(&json).ok()
}

/// The persisted permission set; empty when absent or malformed (fails
/// closed, never errors).
pub fn load_permissions() -> Vec<Permission> {
    get_session().map(|s| s.permissions).unwrap_or_default()
}

pub fn clear() {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(ACCESS_TOKEN_KEY);
        let _ = storage.remove_item(SESSION_KEY);
    }
}
