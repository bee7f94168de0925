//! Login form submission hook

use crate::session::login_flow;
use rota_core::{LoginError, LoginForm};
use tracing::error;
use yew::prelude::*;

/// Login submission state
#[derive(Clone, Debug, PartialEq)]
pub enum LoginState {
    Idle,
    Submitting,
    Failed(String),
}

/// Login hook handle
#[derive(Clone)]
pub struct UseLoginHandle {
    state: UseStateHandle<LoginState>,
}

impl UseLoginHandle {
    /// Submit the form. Ignored while a previous submit is still in flight.
    pub fn submit(&self, form: LoginForm) {
        if *self.state == LoginState::Submitting {
            return;
        }

        // Empty fields are reported without touching the network.
        if let Err(e) = form.credentials.validate() {
            self.state.set(LoginState::Failed(e.user_message()));
            return;
        }

        let state = self.state.clone();
        state.set(LoginState::Submitting);

        wasm_bindgen_futures::spawn_local(async move {
            let flow = match login_flow() {
                Ok(flow) => flow,
                Err(e) => {
                    error!(error = %e, "Failed to build portal client");
                    state.set(LoginState::Failed(
                        LoginError::Network(e.to_string()).user_message(),
                    ));
                    return;
                }
            };

            match flow.submit(&form).await {
                // The page is being replaced by the dashboard; keep the form disabled.
                Ok(_) => {}
                Err(e) => state.set(LoginState::Failed(e.user_message())),
            }
        });
    }

    /// Dismiss the current error
    pub fn clear_error(&self) {
        if matches!(*self.state, LoginState::Failed(_)) {
            self.state.set(LoginState::Idle);
        }
    }

    pub fn state(&self) -> &LoginState {
        &self.state
    }

    pub fn is_submitting(&self) -> bool {
        *self.state == LoginState::Submitting
    }
}

#[hook]
pub fn use_login() -> UseLoginHandle {
    let state = use_state(|| LoginState::Idle);
    UseLoginHandle { state }
}
