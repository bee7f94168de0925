//! Session plumbing shared by pages and hooks

use crate::browser::{BrowserStorage, WindowNavigator};
use crate::config::portal_config;
use rota_client::{ClientError, LoginFlow, PortalClient};
use rota_core::{AccessPolicy, GuardDecision, Session, SessionStore};
use std::cell::RefCell;

thread_local! {
    /// Client is built once per page
    static CLIENT: RefCell<Option<PortalClient>> = const { RefCell::new(None) };
}

pub type BrowserLoginFlow = LoginFlow<PortalClient, BrowserStorage, WindowNavigator>;

/// Session store over `localStorage`
pub fn session_store() -> SessionStore<BrowserStorage> {
    SessionStore::new(BrowserStorage, portal_config().storage)
}

/// Currently stored session, if any
pub fn current_session() -> Option<Session> {
    session_store().load()
}

fn portal_client() -> Result<PortalClient, ClientError> {
    CLIENT.with(|cell| {
        if let Some(client) = cell.borrow().as_ref() {
            return Ok(client.clone());
        }
        let client = PortalClient::from_config(&portal_config().api)?;
        *cell.borrow_mut() = Some(client.clone());
        Ok(client)
    })
}

/// Login flow wired to the backend, `localStorage` and `window.location`
pub fn login_flow() -> Result<BrowserLoginFlow, ClientError> {
    let config = portal_config();
    Ok(LoginFlow::new(
        portal_client()?,
        SessionStore::new(BrowserStorage, config.storage),
        WindowNavigator,
        config.routes,
    ))
}

/// Guard decision for `path` against the stored session, without navigating
pub fn decision_for(path: &str) -> GuardDecision {
    AccessPolicy::new(portal_config().routes).check(path, current_session().as_ref())
}

/// Run the page guard for the current location
pub fn guard_current_page() -> GuardDecision {
    let policy = AccessPolicy::new(portal_config().routes);
    policy.enforce(&session_store(), &WindowNavigator)
}
