//! HTTP helpers for talking to the dealership REST API.

use gloo_net::http::{Request, RequestBuilder};
use leptos::prelude::*;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::system::auth::storage;

/// Base URL of the API server, derived from the current window location.
/// The backend is served from the same host on port 3000.
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:3000", protocol, hostname)
}

pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

fn with_auth(builder: RequestBuilder) -> RequestBuilder {
    match storage::get_access_token() {
        Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
        None => builder,
    }
}

pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, String> {
    let response = with_auth(Request::get(&api_url(path)))
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;
    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }
    response
        .json::<T>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// POST with a JSON body; the response body, if any, is ignored.
pub async fn post_json<B: Serialize>(path: &str, body: &B) -> Result<(), String> {
    let response = with_auth(Request::post(&api_url(path)))
        .json(body)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;
    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }
    Ok(())
}

/// POST without a body, for state transitions (approve, verify, apply).
pub async fn post_empty(path: &str) -> Result<(), String> {
    let response = with_auth(Request::post(&api_url(path)))
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;
    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }
    Ok(())
}

pub async fn put_json<B: Serialize>(path: &str, body: &B) -> Result<(), String> {
    let response = with_auth(Request::put(&api_url(path)))
        .json(body)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;
    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }
    Ok(())
}

pub async fn delete(path: &str) -> Result<(), String> {
    let response = with_auth(Request::delete(&api_url(path)))
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;
    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }
    Ok(())
}

/// Stale-response guard for list fetches.
///
/// Each fetch takes a ticket before awaiting; by the time the response
/// arrives, a newer fetch may have started (rapid tab switching, repeated
/// refresh). Only the holder of the current ticket may apply its response,
/// so a slow earlier request can never overwrite a fast later one.
#[derive(Clone, Copy)]
pub struct FetchTicket {
    generation: RwSignal<u64>,
}

impl FetchTicket {
    pub fn new() -> Self {
        Self {
            generation: RwSignal::new(0),
        }
    }

    /// Start a new fetch; invalidates all earlier tickets.
    pub fn begin(&self) -> u64 {
        let next = self.generation.get_untracked() + 1;
        self.generation.set(next);
        next
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        self.generation.try_get_untracked() == Some(ticket)
    }
}

impl Default for FetchTicket {
    fn default() -> Self {
        Self::new()
    }
}
