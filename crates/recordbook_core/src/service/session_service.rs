//! Session gate for the single demo identity.
//!
//! # Responsibility
//! - Track whether a user is authenticated.
//! - Validate login attempts against the fixed demo credential pair.
//! - Surface the last user-visible login error.
//!
//! # Invariants
//! - At most one user is authenticated at a time.
//! - A failed attempt never changes who is authenticated.
//! - `logout` is synchronous and cannot fail.
//! - Overlapping logins are not serialized; the last one to finish wins.
//! - Loading and identity are tracked independently.

use crate::config::{LatencyProfile, Operation};
use crate::latency::Latency;
use crate::model::user::{LoginCredentials, User};
use log::{info, warn};
use parking_lot::Mutex;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// User-visible message for a rejected login.
pub const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid email or password";

/// Observable session lifecycle.
///
/// `Authenticating` is reported while any attempt is in flight; the identity
/// from before the attempt stays available through `current_user()`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    Anonymous,
    /// A login attempt is in flight.
    Authenticating,
    Authenticated(User),
}

/// Login failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    InvalidCredentials,
}

impl Display for SessionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidCredentials => write!(f, "{INVALID_CREDENTIALS_MESSAGE}"),
        }
    }
}

impl Error for SessionError {}

#[derive(Debug, Default)]
struct SessionInner {
    user: Option<User>,
    /// Login attempts started but not yet finished or abandoned.
    in_flight: usize,
    error: Option<String>,
}

/// Explicitly owned session state. Starts `Anonymous`.
pub struct SessionManager {
    inner: Mutex<SessionInner>,
    latency: Arc<dyn Latency>,
    login_delay: Duration,
}

impl SessionManager {
    pub fn new(latency: Arc<dyn Latency>, profile: &LatencyProfile) -> Self {
        Self {
            inner: Mutex::new(SessionInner::default()),
            latency,
            login_delay: profile.delay_for(Operation::Login),
        }
    }

    /// Attempts to authenticate with `credentials`.
    ///
    /// # Contract
    /// - Marks an attempt in flight and clears any previous error.
    /// - After the simulated delay, an exact match with the demo pair
    ///   authenticates; anything else returns `InvalidCredentials` and keeps
    ///   whatever identity was already authenticated.
    /// - Dropping the future before it completes only withdraws its
    ///   in-flight marker.
    pub async fn login(&self, credentials: LoginCredentials) -> Result<User, SessionError> {
        let started_at = Instant::now();
        {
            let mut inner = self.inner.lock();
            inner.error = None;
            inner.in_flight += 1;
        }
        let mut guard = InFlightGuard {
            inner: &self.inner,
            armed: true,
        };

        self.latency.wait(self.login_delay).await;

        let mut inner = self.inner.lock();
        inner.in_flight = inner.in_flight.saturating_sub(1);
        guard.disarm();

        if credentials.matches_demo() {
            let user = User::demo();
            inner.user = Some(user.clone());
            inner.error = None;
            info!(
                "event=session_login module=session status=ok duration_ms={} user_id={}",
                started_at.elapsed().as_millis(),
                user.id
            );
            Ok(user)
        } else {
            inner.error = Some(INVALID_CREDENTIALS_MESSAGE.to_string());
            warn!(
                "event=session_login module=session status=error duration_ms={} error_code=invalid_credentials authenticated={}",
                started_at.elapsed().as_millis(),
                inner.user.is_some()
            );
            Err(SessionError::InvalidCredentials)
        }
    }

    /// Drops the current identity.
    pub fn logout(&self) {
        self.inner.lock().user = None;
        info!("event=session_logout module=session status=ok");
    }

    pub fn state(&self) -> SessionState {
        let inner = self.inner.lock();
        if inner.in_flight > 0 {
            return SessionState::Authenticating;
        }
        match &inner.user {
            Some(user) => SessionState::Authenticated(user.clone()),
            None => SessionState::Anonymous,
        }
    }

    pub fn current_user(&self) -> Option<User> {
        self.inner.lock().user.clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.inner.lock().user.is_some()
    }

    /// True while any login attempt is in flight.
    pub fn is_loading(&self) -> bool {
        self.inner.lock().in_flight > 0
    }

    /// Message from the most recent failed login, if not yet cleared.
    pub fn last_error(&self) -> Option<String> {
        self.inner.lock().error.clone()
    }
}

struct InFlightGuard<'a> {
    inner: &'a Mutex<SessionInner>,
    armed: bool,
}

impl InFlightGuard<'_> {
    fn disarm(&mut self) {
        self.armed = false;
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        if self.armed {
            let mut inner = self.inner.lock();
            inner.in_flight = inner.in_flight.saturating_sub(1);
        }
    }
}
