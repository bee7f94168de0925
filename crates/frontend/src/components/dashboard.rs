//! Role dashboards

use crate::session::{current_session, login_flow};
use rota_core::Role;
use tracing::error;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct DashboardProps {
    pub role: Role,
}

#[function_component(Dashboard)]
pub fn dashboard(props: &DashboardProps) -> Html {
    let sign_out_error = use_state(|| None::<String>);

    let on_sign_out = {
        let sign_out_error = sign_out_error.clone();
        Callback::from(move |_: MouseEvent| {
            let result = login_flow()
                .map_err(|e| e.to_string())
                .and_then(|flow| flow.sign_out().map_err(|e| e.to_string()));
            if let Err(e) = result {
                error!(error = %e, "Sign out failed");
                sign_out_error.set(Some("Could not sign out. Please try again.".to_string()));
            }
        })
    };

    let signed_in_as = current_session()
        .and_then(|session| session.role)
        .map(Role::label)
        .unwrap_or("Unknown");

    html! {
        <div class="min-h-screen bg-gray-50">
            <header class="flex items-center justify-between px-6 py-4 bg-white shadow">
                <h1 class="text-xl font-semibold text-gray-900">
                    { format!("{} dashboard", props.role.label()) }
                </h1>
                <div class="flex items-center gap-4">
                    <span class="text-sm text-gray-600">{ format!("Signed in as {signed_in_as}") }</span>
                    <button
                        class="px-4 py-2 bg-gray-100 hover:bg-gray-200 text-gray-800 rounded-lg text-sm"
                        onclick={on_sign_out}
                    >
                        {"Sign out"}
                    </button>
                </div>
            </header>
            if let Some(message) = &*sign_out_error {
                <div role="alert" class="m-6 bg-red-50 border border-red-200 rounded-lg p-3 text-red-700 text-sm">
                    {message.clone()}
                </div>
            }
        </div>
    }
}
