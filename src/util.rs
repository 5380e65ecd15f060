// Logger and panic hook setup. The browser build logs to the devtools
// console; native builds (tests) go through env_logger.
use log::LevelFilter;

/// Installs the logger. A second call keeps the first logger.
pub fn init_logging(level: LevelFilter) {
    if install_logger(level).is_err() {
        log::debug!("logger already installed");
    }
}

#[cfg(target_arch = "wasm32")]
fn install_logger(level: LevelFilter) -> Result<(), log::SetLoggerError> {
    match level.to_level() {
        Some(level) => console_log::init_with_level(level),
        None => {
            log::set_max_level(LevelFilter::Off);
            Ok(())
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn install_logger(level: LevelFilter) -> Result<(), log::SetLoggerError> {
    env_logger::Builder::new().filter_level(level).try_init()
}

pub fn install_panic_hook() {
    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();
}
