use rota_frontend::logging::init_logging;
use rota_frontend::session::guard_current_page;
use rota_frontend::App;

fn main() {
    console_error_panic_hook::set_once();
    init_logging();

    // Leave before rendering anything if this page is off limits.
    if !guard_current_page().is_allowed() {
        return;
    }

    yew::Renderer::<App>::new().render();
}
