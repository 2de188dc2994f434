/// Browser entry point for the nodedeck demo
///
/// Pure client-side rendering, served by Trunk. Mounts the demo onto
/// the `#root` element from `index.html`.

use leptos::*;
use wasm_bindgen::JsCast;

use nodedeck_demo::app::App;

pub fn main() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Debug).expect("failed to initialize logging");
    log::info!("mounting nodedeck demo");

    let root = document()
        .get_element_by_id("root")
        .expect("index.html must provide a #root element")
        .dyn_into::<web_sys::HtmlElement>()
        .expect("#root must be an HTML element");

    mount_to(root, App);
}
