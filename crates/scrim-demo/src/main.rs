//! scrim-demo - single-screen modal loading overlay demo
//!
//! This is the main entry point for the GUI application. It:
//! 1. Loads the YAML config (reset delay, window size, auto trigger)
//! 2. Launches the iced application
//! 3. Dispatches the one-time "appeared" message as the startup task

mod config;
mod ui;

use iced::{Size, Task};

use ui::message::Message;
use ui::DemoApp;

fn main() -> iced::Result {
    // Initialize logger - set RUST_LOG=debug for verbose output
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    log::info!("scrim-demo starting up");

    let config_path = config::default_config_path();
    let config = config::load_config(&config_path);

    // Write a starter config on first run so the tunables are discoverable
    if !config_path.exists() {
        if let Err(e) = config::save_config(&config, &config_path) {
            log::warn!("could not write default config: {:#}", e);
        }
    }

    let window_size = Size::new(config.window.width, config.window.height);
    let auto_trigger = config.overlay.auto_trigger;

    iced::application(
        move || {
            let app = DemoApp::new(&config);

            // The automatic first loading cycle, unless configured off
            let startup_task = if auto_trigger {
                Task::done(Message::Appeared)
            } else {
                Task::none()
            };

            (app, startup_task)
        },
        update,
        view,
    )
    .subscription(subscription)
    .theme(theme)
    .title("Scrim Demo")
    .window_size(window_size)
    .run()
}

/// Update function for iced
fn update(app: &mut DemoApp, message: Message) -> Task<Message> {
    app.update(message)
}

/// View function for iced
fn view(app: &DemoApp) -> iced::Element<'_, Message> {
    app.view()
}

/// Subscription function for iced
fn subscription(app: &DemoApp) -> iced::Subscription<Message> {
    app.subscription()
}

/// Theme function for iced
fn theme(app: &DemoApp) -> iced::Theme {
    app.theme()
}
