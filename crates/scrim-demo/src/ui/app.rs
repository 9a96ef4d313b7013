//! Main iced application for the scrim demo
//!
//! One screen: a gray banner, two static number lists side by side, and a
//! "Demo" button. The left list is wrapped by the overlay host; because the
//! host anchors to the full window region, an active overlay covers the
//! banner, both lists, and the button, and none of them receive input
//! until the reset fires.

use std::time::Duration;

use iced::widget::{button, column, container, row, text, Space};
use iced::{event, window};
use iced::{Alignment, Background, Color, Element, Event, Fill, Length, Rectangle, Subscription, Task, Theme};

use scrim_widgets::{overlay_host, LoadingSignal, OverlayHost};

use super::message::Message;
use crate::config::DemoConfig;

/// Application state
pub struct DemoApp {
    /// Writable loading flag; the overlay host holds the read-only view
    signal: LoadingSignal,
    /// Overlay attach/detach state for the window region
    overlay: OverlayHost,
    /// How long the overlay stays up after a trigger
    reset_delay: Duration,
    /// Resets scheduled but not yet fired. A value above one when a reset
    /// fires means a stale timer is cutting a later activation short.
    pending_resets: u32,
}

impl DemoApp {
    /// Create a new application instance
    pub fn new(config: &DemoConfig) -> Self {
        let signal = LoadingSignal::new();
        let overlay = OverlayHost::new(signal.reader());
        Self {
            signal,
            overlay,
            reset_delay: config.reset_delay(),
            pending_resets: 0,
        }
    }

    /// Update application state
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Appeared => {
                log::info!("screen appeared, starting automatic loading cycle");
                self.trigger()
            }

            Message::DemoPressed => {
                log::info!("demo button pressed");
                self.trigger()
            }

            Message::LoadingElapsed => {
                self.pending_resets = self.pending_resets.saturating_sub(1);
                if self.pending_resets > 0 {
                    // Reference behavior: a stale timer from an earlier
                    // trigger ends the current activation early. The later
                    // timers will fire into an already-inactive signal.
                    log::debug!(
                        "stale reset fired with {} still pending, ending activation early",
                        self.pending_resets
                    );
                }
                self.signal.set(false);
                self.overlay.sync();
                Task::none()
            }

            Message::HostResized(size) => {
                // First event wins; later ones are no-ops. Syncing here
                // picks up an activation that predates resolution.
                self.overlay.resolve_region(Rectangle::with_size(size));
                self.overlay.sync();
                Task::none()
            }
        }
    }

    /// Start one loading cycle: raise the signal, schedule the reset.
    ///
    /// The reset is fire-and-forget; re-triggering re-asserts the signal
    /// but neither cancels nor extends the pending reset.
    fn trigger(&mut self) -> Task<Message> {
        self.signal.set(true);
        self.overlay.sync();
        self.pending_resets += 1;

        Task::future(Self::reset_after(self.reset_delay))
    }

    /// The deferred reset: resolves to [`Message::LoadingElapsed`] after `delay`
    async fn reset_after(delay: Duration) -> Message {
        tokio::time::sleep(delay).await;
        Message::LoadingElapsed
    }

    /// Subscribe to window geometry events for host region resolution
    pub fn subscription(&self) -> Subscription<Message> {
        event::listen_with(|event, _status, _window| match event {
            Event::Window(window::Event::Opened { size, .. }) => {
                Some(Message::HostResized(size))
            }
            Event::Window(window::Event::Resized(size)) => Some(Message::HostResized(size)),
            _ => None,
        })
    }

    /// Build the view
    pub fn view(&self) -> Element<'_, Message> {
        // Gray banner filling the area above the lists
        let banner = container(Space::new())
            .width(Fill)
            .height(Length::FillPortion(2))
            .style(banner_style);

        // Two static lists side by side. The overlay is window-anchored, so
        // it wraps the screen root below rather than the first list; wrapping
        // here as well would emit a second backdrop and panel while active.
        let lists = row![number_list(1..6), number_list(6..11)]
            .spacing(10)
            .height(Length::FillPortion(3));

        let demo_button = container(button(text("Demo").size(14)).on_press(Message::DemoPressed))
            .center_x(Fill);

        let content = column![banner, lists, demo_button]
            .spacing(10)
            .padding(10)
            .align_x(Alignment::Center);

        let base: Element<'_, Message> = container(content).width(Fill).height(Fill).into();

        // Anchor the overlay to the window region so an active panel is
        // modal for the whole screen, not just the wrapped list
        overlay_host(base, &self.overlay)
    }

    /// Get the theme
    pub fn theme(&self) -> Theme {
        Theme::Dark
    }
}

/// Render one static list of labeled rows
fn number_list(values: std::ops::Range<u32>) -> Element<'static, Message> {
    let rows: Vec<Element<'static, Message>> = values
        .map(|n| {
            container(text(n.to_string()).size(14))
                .padding([6, 12])
                .width(Fill)
                .style(row_style)
                .into()
        })
        .collect();

    container(column(rows).spacing(1))
        .padding(4)
        .width(Length::FillPortion(1))
        .height(Fill)
        .style(list_style)
        .into()
}

// ─────────────────────────────────────────────────────────────────────────────
// Container styles
// ─────────────────────────────────────────────────────────────────────────────

const BANNER_GRAY: Color = Color::from_rgb(0.5, 0.5, 0.5);
const LIST_BG: Color = Color::from_rgb(0.12, 0.12, 0.14);
const ROW_BG: Color = Color::from_rgb(0.18, 0.18, 0.20);
const BORDER_COLOR: Color = Color::from_rgb(0.35, 0.35, 0.40);

fn banner_style(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(BANNER_GRAY)),
        ..Default::default()
    }
}

fn list_style(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(LIST_BG)),
        border: iced::Border {
            color: BORDER_COLOR,
            width: 1.0,
            radius: 4.0.into(),
        },
        ..Default::default()
    }
}

fn row_style(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(ROW_BG)),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::Size;

    fn app_with_resolved_region() -> DemoApp {
        let mut app = DemoApp::new(&DemoConfig::default());
        let _ = app.update(Message::HostResized(Size::new(900.0, 700.0)));
        app
    }

    #[test]
    fn test_appear_shows_overlay_immediately() {
        let mut app = app_with_resolved_region();

        let _ = app.update(Message::Appeared);

        assert!(app.signal.get());
        assert!(app.overlay.is_attached());
        assert!(!app.overlay.region_interactive());
    }

    #[test]
    fn test_reset_brings_overlay_down() {
        let mut app = app_with_resolved_region();

        let _ = app.update(Message::Appeared);
        let _ = app.update(Message::LoadingElapsed);

        assert!(!app.signal.get());
        assert!(!app.overlay.is_attached());
        assert!(app.overlay.region_interactive());
    }

    #[test]
    fn test_stale_timer_cuts_second_activation_short() {
        let mut app = app_with_resolved_region();

        // First trigger at t=0, second at t=1s; the first timer fires at
        // t=2s and takes the overlay down even though the second activation
        // is only 1s old. Reference behavior, preserved.
        let _ = app.update(Message::Appeared);
        let _ = app.update(Message::DemoPressed);
        assert!(app.signal.get());

        let _ = app.update(Message::LoadingElapsed);
        assert!(!app.signal.get());
        assert!(!app.overlay.is_attached());

        // The second timer fires into an already-inactive signal
        let _ = app.update(Message::LoadingElapsed);
        assert!(!app.signal.get());
    }

    #[test]
    fn test_activation_before_region_resolution_attaches_on_first_layout() {
        let mut app = DemoApp::new(&DemoConfig::default());

        let _ = app.update(Message::Appeared);
        assert!(app.signal.get());
        assert!(!app.overlay.is_attached());

        let _ = app.update(Message::HostResized(Size::new(900.0, 700.0)));
        assert!(app.overlay.is_attached());
    }

    #[test]
    fn test_retrigger_while_active_keeps_overlay_up() {
        let mut app = app_with_resolved_region();

        let _ = app.update(Message::Appeared);
        let before = app.overlay.attachment().cloned();

        let _ = app.update(Message::DemoPressed);

        assert!(app.overlay.is_attached());
        assert_eq!(app.overlay.attachment().cloned(), before);
    }

    #[test]
    fn test_view_builds_once_while_active() {
        let mut app = app_with_resolved_region();

        let _ = app.update(Message::Appeared);
        assert!(app.overlay.is_attached());

        // The overlay wraps the screen root exactly once; the lists inside
        // are plain. Building the frame while attached exercises that path.
        let _frame = app.view();
        drop(_frame);

        let _ = app.update(Message::LoadingElapsed);
        let _frame = app.view();
    }

    #[tokio::test(start_paused = true)]
    async fn test_reset_message_arrives_after_configured_delay() {
        let mut app = app_with_resolved_region();
        let _ = app.update(Message::Appeared);
        assert!(app.signal.get());

        // The same future trigger() schedules, under a paused clock
        let reset = tokio::spawn(DemoApp::reset_after(app.reset_delay));
        tokio::task::yield_now().await;

        tokio::time::advance(Duration::from_millis(1999)).await;
        assert!(!reset.is_finished());

        tokio::time::advance(Duration::from_millis(1)).await;
        tokio::task::yield_now().await;
        assert!(reset.is_finished());

        let message = reset.await.unwrap();
        assert!(matches!(message, Message::LoadingElapsed));

        let _ = app.update(message);
        assert!(!app.signal.get());
        assert!(!app.overlay.is_attached());
    }
}
