mod components;
mod config;
mod error;
mod model;
mod state;
mod storage;
mod util;

use components::App;

fn main() {
    console_error_panic_hook::set_once();
    _ = console_log::init_with_level(log::Level::Debug);
    yew::Renderer::<App>::new().render();
}
