mod components;
mod config;
mod error;
mod model;
mod render;
mod state;
mod util;

use components::app::{App, AppProps};
use config::GameConfig;

fn main() {
    util::install_panic_hook();
    let config = GameConfig::load();
    util::init_logging(config.level_filter());
    log::info!(
        "starting {0}x{0} game on a {1}x{2} canvas",
        config.grid_size,
        config.width,
        config.height
    );
    yew::Renderer::<App>::with_props(AppProps { config }).render();
}
