//! Messages for the demo screen

use iced::Size;

/// Messages that can be sent to the application
#[derive(Debug, Clone)]
pub enum Message {
    /// The screen became visible for the first time (dispatched once at boot)
    Appeared,
    /// The "Demo" button was pressed
    DemoPressed,
    /// A scheduled reset fired; the overlay comes down
    LoadingElapsed,
    /// Window geometry event; resolves the overlay host region
    HostResized(Size),
}
