use ecoleta_web::components::App;
use ecoleta_web::config::CONFIG;

fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::new(CONFIG.log_level()));
    log::info!("♻️ E-coleta starting (backend: {})", CONFIG.backend_url);

    yew::Renderer::<App>::new().render();
}
