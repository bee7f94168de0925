//! Page access guard
//!
//! Decides on page load whether the stored session may see the current page.
//! This is a convenience redirect only: the role marker lives in client
//! storage and can be edited by the user, so the backend must still
//! authorize every request.

use crate::config::RouteConfig;
use crate::navigation::Navigator;
use crate::role::Role;
use crate::session::{KeyValueStorage, Session, SessionStore};
use tracing::{debug, info};

/// Outcome of a guard check
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    Redirect(String),
}

impl GuardDecision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, GuardDecision::Allow)
    }
}

/// Maps paths to the role allowed to view them
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccessPolicy {
    routes: RouteConfig,
}

impl AccessPolicy {
    pub fn new(routes: RouteConfig) -> Self {
        Self { routes }
    }

    pub fn routes(&self) -> &RouteConfig {
        &self.routes
    }

    /// Role whose prefix covers `path`, if any
    pub fn required_role(&self, path: &str) -> Option<Role> {
        Role::ALL
            .into_iter()
            .find(|role| under_prefix(path, self.routes.prefix_for(*role)))
    }

    /// Decide whether `session` may view `path`
    pub fn check(&self, path: &str, session: Option<&Session>) -> GuardDecision {
        // The login page itself is never guarded.
        if path == self.routes.login {
            return GuardDecision::Allow;
        }

        let Some(session) = session else {
            return GuardDecision::Redirect(self.routes.login.clone());
        };

        match self.required_role(path) {
            Some(required) if session.role != Some(required) => {
                GuardDecision::Redirect(self.routes.login.clone())
            }
            _ => GuardDecision::Allow,
        }
    }

    /// Check the current page against the stored session and redirect if needed
    pub fn enforce<S, N>(&self, store: &SessionStore<S>, navigator: &N) -> GuardDecision
    where
        S: KeyValueStorage,
        N: Navigator + ?Sized,
    {
        let path = navigator.current_path();
        let session = store.load();
        let decision = self.check(&path, session.as_ref());

        match &decision {
            GuardDecision::Allow => debug!(%path, "Page access allowed"),
            GuardDecision::Redirect(target) => {
                info!(%path, %target, signed_in = session.is_some(), "Redirecting away from guarded page");
                navigator.navigate(target);
            }
        }

        decision
    }
}

/// Segment-aware prefix match: `/admin` covers `/admin` and `/admin/x`, not `/administrator`
fn under_prefix(path: &str, prefix: &str) -> bool {
    let prefix = prefix.trim_end_matches('/');
    match path.strip_prefix(prefix) {
        Some(rest) => rest.is_empty() || rest.starts_with('/'),
        None => false,
    }
}
