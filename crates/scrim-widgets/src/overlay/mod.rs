//! Modal loading overlay host
//!
//! Retained attach/detach state for a modal overlay driven by a shared
//! boolean signal, plus a view function that renders it. Layout:
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │  backdrop (host region, 80% black)           │
//! │                ┌──────────┐                  │
//! │                │  ▓▓▓▓    │  142×142 panel,  │
//! │                │  ▓▓▓▓    │  rounded corners │
//! │                │ Loading  │                  │
//! │                └──────────┘                  │
//! └──────────────────────────────────────────────┘
//! ```
//!
//! The host anchors to the nearest enclosing full-screen region, not the
//! wrapped child's local bounds, so an attached overlay covers sibling
//! content as well. The region is discovered lazily from the first window
//! geometry event and memoized; until then [`OverlayHost::sync`] is a
//! silent no-op, retried on every subsequent geometry event.

mod view;

pub use view::overlay_host;

use iced::Rectangle;

use crate::signal::SignalReader;
use crate::theme;

/// Fixed content descriptor for the loading panel
///
/// Purely data; the view layer turns it into widgets. Attach/detach cycles
/// build it fresh each time, so two attachments are structurally equal.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayPanel {
    /// Side length of the square panel
    pub size: f32,
    /// Corner radius of the panel backing
    pub corner_radius: f32,
    /// Glyph placeholder width
    pub glyph_width: f32,
    /// Glyph placeholder height
    pub glyph_height: f32,
    /// Caption beneath the glyph
    pub caption: &'static str,
}

impl OverlayPanel {
    /// The standard loading panel
    fn standard() -> Self {
        Self {
            size: theme::PANEL_SIZE,
            corner_radius: theme::PANEL_CORNER_RADIUS,
            glyph_width: theme::GLYPH_WIDTH,
            glyph_height: theme::GLYPH_HEIGHT,
            caption: theme::CAPTION,
        }
    }
}

/// One live show/hide cycle of the overlay
///
/// Created on the signal's false→true transition, dropped on true→false.
/// Never outlives the host that inserted it.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayAttachment {
    /// The panel inserted into the region
    pub panel: OverlayPanel,
    /// The region the panel was inserted into
    pub region: Rectangle,
}

/// Attach/detach state machine for the modal overlay
///
/// Reads the loading signal and mirrors it into at most one attachment.
/// All mutation happens through [`OverlayHost::sync`], which the owning
/// screen calls after every signal write and after region resolution.
#[derive(Debug)]
pub struct OverlayHost {
    /// Read-only view of the owning screen's loading flag
    signal: SignalReader,
    /// Host region, resolved once from the first geometry event
    region: Option<Rectangle>,
    /// Live attachment, present only while the signal is active
    attachment: Option<OverlayAttachment>,
    /// Whether the host region currently accepts input
    region_interactive: bool,
}

impl OverlayHost {
    /// Create a host observing `signal`. No side effects beyond storage.
    pub fn new(signal: SignalReader) -> Self {
        Self {
            signal,
            region: None,
            attachment: None,
            region_interactive: true,
        }
    }

    /// Cache the host region on first call; later calls are no-ops.
    ///
    /// Callers feed every window geometry event through here, so a region
    /// that was unavailable at construction time resolves on the first
    /// layout pass.
    pub fn resolve_region(&mut self, region: Rectangle) {
        if self.region.is_none() {
            log::debug!("overlay host region resolved: {:?}", region);
            self.region = Some(region);
        }
    }

    /// The cached host region, if resolved
    pub fn region(&self) -> Option<Rectangle> {
        self.region
    }

    /// Whether a panel is currently attached
    pub fn is_attached(&self) -> bool {
        self.attachment.is_some()
    }

    /// The live attachment, if any
    pub fn attachment(&self) -> Option<&OverlayAttachment> {
        self.attachment.as_ref()
    }

    /// Whether the host region currently accepts input
    pub fn region_interactive(&self) -> bool {
        self.region_interactive
    }

    /// Re-evaluate attach/detach from the signal's current value.
    ///
    /// Rising edge attaches and disables region input; falling edge detaches
    /// and restores it; anything else is a no-op. While the region is
    /// unresolved every call is a no-op, so a missed activation attaches on
    /// the sync that follows resolution.
    pub fn sync(&mut self) {
        let Some(region) = self.region else {
            return;
        };

        match (self.attachment.is_some(), self.signal.get()) {
            (false, true) => {
                self.attachment = Some(OverlayAttachment {
                    panel: OverlayPanel::standard(),
                    region,
                });
                self.region_interactive = false;
                log::debug!("overlay attached to {:?}", region);
            }
            (true, false) => {
                self.attachment = None;
                self.region_interactive = true;
                log::debug!("overlay detached");
            }
            // Already in the requested state
            _ => {}
        }
    }
}
