// src/common/session.rs
//! Cookie-keyed server-side sessions.
//!
//! The only thing kept per session is the one-shot flash message shown after
//! a product has been added. Reading the flash removes it.

use axum::http::{header, HeaderMap, HeaderValue};
use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info};
use uuid::Uuid;

pub const SESSION_COOKIE: &str = "inventory_session";

#[derive(Debug, Clone)]
struct Session {
    flash: Option<String>,
    last_seen: DateTime<Utc>,
}

impl Session {
    fn new(now: DateTime<Utc>) -> Self {
        Self {
            flash: None,
            last_seen: now,
        }
    }
}

/// Session resolved for the current request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionHandle {
    pub id: Uuid,
    /// The client did not send a usable cookie; one must be set on the response
    pub is_new: bool,
}

#[derive(Clone)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<Uuid, Session>>>,
    ttl: Duration,
    secure_cookie: bool,
}

impl SessionStore {
    pub fn new(ttl_minutes: i64, secure_cookie: bool) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            ttl: Duration::minutes(ttl_minutes),
            secure_cookie,
        }
    }

    /// Find the live session named by the request cookie.
    /// Nothing is created here: a session only exists once a flash needs one.
    pub async fn resolve(&self, headers: &HeaderMap) -> Option<SessionHandle> {
        let id = session_id_from_headers(headers)?;
        let now = Utc::now();
        let mut sessions = self.sessions.write().await;

        let expired = match sessions.get_mut(&id) {
            Some(session) if now - session.last_seen <= self.ttl => {
                session.last_seen = now;
                return Some(SessionHandle { id, is_new: false });
            }
            Some(_) => true,
            None => false,
        };
        if expired {
            debug!(session_id = %id, "Session expired");
            sessions.remove(&id);
        }
        None
    }

    /// Start a new session; its cookie must be set on the response
    pub async fn start(&self) -> SessionHandle {
        let id = Uuid::new_v4();
        let mut sessions = self.sessions.write().await;
        sessions.insert(id, Session::new(Utc::now()));
        debug!(session_id = %id, active = sessions.len(), "Session created");
        SessionHandle { id, is_new: true }
    }

    pub async fn set_flash(&self, id: Uuid, message: impl Into<String>) {
        let now = Utc::now();
        let mut sessions = self.sessions.write().await;
        let session = sessions.entry(id).or_insert_with(|| Session::new(now));
        session.flash = Some(message.into());
        session.last_seen = now;
    }

    /// Read-then-delete: a flash is handed out exactly once
    pub async fn take_flash(&self, id: Uuid) -> Option<String> {
        self.sessions
            .write()
            .await
            .get_mut(&id)
            .and_then(|session| session.flash.take())
    }

    /// Drop sessions idle for longer than the TTL, returning how many were removed
    pub async fn cleanup_expired(&self) -> usize {
        let now = Utc::now();
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, session| now - session.last_seen <= self.ttl);
        let removed = before - sessions.len();
        if removed > 0 {
            info!(removed = removed, active = sessions.len(), "Expired sessions removed");
        } else {
            debug!(active = sessions.len(), "Session sweep found nothing to remove");
        }
        removed
    }

    #[cfg(test)]
    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    /// `Set-Cookie` value naming the given session
    pub fn cookie_header(&self, id: Uuid) -> Option<HeaderValue> {
        let mut cookie = format!(
            "{}={}; Path=/; HttpOnly; SameSite=Lax; Max-Age={}",
            SESSION_COOKIE,
            id,
            self.ttl.num_seconds()
        );
        if self.secure_cookie {
            cookie.push_str("; Secure");
        }
        HeaderValue::from_str(&cookie).ok()
    }

    pub fn start_cleanup_task(store: SessionStore) {
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(tokio::time::Duration::from_secs(60));
            loop {
                interval.tick().await;
                store.cleanup_expired().await;
            }
        });
    }

    #[cfg(test)]
    async fn backdate(&self, id: Uuid, by: Duration) {
        if let Some(session) = self.sessions.write().await.get_mut(&id) {
            session.last_seen = session.last_seen - by;
        }
    }
}

fn session_id_from_headers(headers: &HeaderMap) -> Option<Uuid> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == SESSION_COOKIE)
        .and_then(|(_, value)| Uuid::parse_str(value.trim()).ok())
}
