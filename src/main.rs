//! Paddle Pong entry point
//!
//! Sets up logging and settings, then hands control to the winit loop.

use paddle_pong::{Settings, platform};

fn main() {
    // info+ by default; keep the GPU stack quiet unless RUST_LOG asks for it
    let default = "info,wgpu_core=warn,wgpu_hal=warn,naga=warn";
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default))
        .format_timestamp_secs()
        .init();

    log::info!("Paddle Pong starting...");

    let settings = Settings::load().unwrap_or_else(|e| {
        log::warn!("{e}; using default settings");
        Settings::default()
    });

    if let Err(e) = platform::run(settings) {
        log::error!("Fatal: {e:#}");
        std::process::exit(1);
    }
}
