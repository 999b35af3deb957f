use leptos::*;
use wasm_bindgen::JsCast;

use pa_frontend::App;

fn main() {
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();
    log::info!("Start problem archive frontend");
    let app_container = document()
        .get_element_by_id("app")
        .expect("app container element")
        .dyn_into()
        .expect("HtmlElement");
    mount_to(app_container, App);
}
