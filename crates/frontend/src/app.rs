use crate::components::{Dashboard, LoginPage, ProtectedPage};
use rota_core::Role;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Login,
    #[at("/admin/dashboard")]
    AdminDashboard,
    #[at("/staff/dashboard")]
    StaffDashboard,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(route: Route) -> Html {
    match route {
        Route::Login => html! { <LoginPage /> },
        Route::AdminDashboard => html! {
            <ProtectedPage>
                <Dashboard role={Role::Admin} />
            </ProtectedPage>
        },
        Route::StaffDashboard => html! {
            <ProtectedPage>
                <Dashboard role={Role::Staff} />
            </ProtectedPage>
        },
        Route::NotFound => html! {
            <div class="min-h-screen flex flex-col items-center justify-center gap-4">
                <p class="text-gray-600">{"Page not found"}</p>
                <a class="text-blue-600 hover:underline" href="/">{"Back to sign in"}</a>
            </div>
        },
    }
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}
