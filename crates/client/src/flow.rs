//! Login submission and sign-out

use crate::login::LoginApi;
use rota_core::{
    KeyValueStorage, LoginError, LoginForm, Navigator, RouteConfig, Session, SessionStore,
    StorageError,
};
use tracing::{info, warn};

/// Runs a login form submission end to end: validate, call the backend,
/// persist the session, and move to the role's dashboard.
pub struct LoginFlow<A, S, N> {
    api: A,
    store: SessionStore<S>,
    navigator: N,
    routes: RouteConfig,
}

impl<A, S, N> LoginFlow<A, S, N>
where
    A: LoginApi,
    S: KeyValueStorage,
    N: Navigator,
{
    pub fn new(api: A, store: SessionStore<S>, navigator: N, routes: RouteConfig) -> Self {
        Self {
            api,
            store,
            navigator,
            routes,
        }
    }

    pub fn store(&self) -> &SessionStore<S> {
        &self.store
    }

    /// Handle one submit of the login form.
    ///
    /// Nothing is written to storage unless the backend issued a token.
    pub async fn submit(&self, form: &LoginForm) -> Result<Session, LoginError> {
        form.credentials.validate()?;

        let reply = self.api.login(&form.credentials).await.map_err(|e| {
            warn!(error = %e, "Login request failed");
            LoginError::Network(e.to_string())
        })?;

        let token = reply.into_token().inspect_err(|e| {
            info!(username = %form.credentials.username, error = %e, "Login rejected");
        })?;

        let role = form.effective_role();
        let session = Session::new(token, role);
        if let Err(e) = self.store.save(&session) {
            warn!(error = %e, "Failed to persist session");
            // Don't leave a token behind without its role marker.
            if let Err(clear_err) = self.store.clear() {
                warn!(error = %clear_err, "Failed to roll back partial session");
            }
            return Err(e.into());
        }

        let target = self.routes.dashboard_for(role);
        info!(username = %form.credentials.username, %role, %target, "Login succeeded");
        self.navigator.navigate(target);

        Ok(session)
    }

    /// Forget the stored session and return to the login page
    pub fn sign_out(&self) -> Result<(), StorageError> {
        self.store.clear()?;
        info!("Signed out");
        self.navigator.navigate(&self.routes.login);
        Ok(())
    }
}
