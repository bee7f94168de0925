//! Login page

use crate::hooks::{LoginState, use_login};
use rota_core::{LoginForm, Role};
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[function_component(LoginPage)]
pub fn login_page() -> Html {
    let login = use_login();

    let username = use_state(String::new);
    let password = use_state(String::new);
    let role = use_state(Role::default);

    let on_username_input = {
        let username = username.clone();
        let login = login.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            username.set(input.value());
            login.clear_error();
        })
    };

    let on_password_input = {
        let password = password.clone();
        let login = login.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            password.set(input.value());
            login.clear_error();
        })
    };

    let on_submit = {
        let login = login.clone();
        let username = username.clone();
        let password = password.clone();
        let role = role.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let form = LoginForm::new((*username).clone(), (*password).clone()).with_role(*role);
            login.submit(form);
        })
    };

    let role_options = Role::ALL.iter().map(|option| {
        let option = *option;
        let onchange = {
            let role = role.clone();
            Callback::from(move |_: Event| role.set(option))
        };
        html! {
            <label class="inline-flex items-center gap-2 text-sm text-gray-700">
                <input
                    type="radio"
                    name="userType"
                    value={option.as_str()}
                    checked={*role == option}
                    {onchange}
                />
                {option.label()}
            </label>
        }
    });

    html! {
        <div class="min-h-screen bg-gray-50 flex items-center justify-center">
            <form
                id="login-form"
                class="w-full max-w-sm bg-white shadow rounded-lg p-8 space-y-4"
                onsubmit={on_submit}
            >
                <h1 class="text-2xl font-semibold text-gray-900 text-center">{"Sign in"}</h1>

                if let LoginState::Failed(message) = login.state() {
                    <div role="alert" class="bg-red-50 border border-red-200 rounded-lg p-3 text-red-700 text-sm">
                        {message.clone()}
                    </div>
                }

                <input
                    id="username"
                    type="text"
                    autocomplete="username"
                    class="w-full px-4 py-3 border border-gray-300 rounded-lg focus:outline-none focus:border-blue-500"
                    placeholder="Username"
                    value={(*username).clone()}
                    oninput={on_username_input}
                />
                <input
                    id="password"
                    type="password"
                    autocomplete="current-password"
                    class="w-full px-4 py-3 border border-gray-300 rounded-lg focus:outline-none focus:border-blue-500"
                    placeholder="Password"
                    value={(*password).clone()}
                    oninput={on_password_input}
                />

                <fieldset class="flex justify-center gap-6">
                    { for role_options }
                </fieldset>

                <button
                    type="submit"
                    class="w-full px-4 py-3 bg-blue-600 hover:bg-blue-700 text-white rounded-lg font-medium disabled:opacity-50 disabled:cursor-not-allowed"
                    disabled={login.is_submitting()}
                >
                    { if login.is_submitting() { "Signing in..." } else { "Sign in" } }
                </button>
            </form>
        </div>
    }
}
