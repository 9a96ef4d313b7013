//! Shared visual constants for the scrim overlay
//!
//! Panel metrics and palette used by the overlay view layer. The panel is a
//! fixed square centered within the host region, never stretched to fill it.

use iced::Color;

/// Side length of the square loading panel, in pixels
pub const PANEL_SIZE: f32 = 142.0;

/// Corner radius of the loading panel
pub const PANEL_CORNER_RADIUS: f32 = 10.0;

/// Width of the glyph placeholder block inside the panel
pub const GLYPH_WIDTH: f32 = 48.0;

/// Height of the glyph placeholder block inside the panel
pub const GLYPH_HEIGHT: f32 = 72.0;

/// Caption shown beneath the glyph
pub const CAPTION: &str = "Loading";

/// Caption text size
pub const CAPTION_SIZE: f32 = 16.0;

/// Vertical gap between glyph and caption
pub const PANEL_SPACING: f32 = 8.0;

/// Full-region backdrop behind the panel (80% black)
pub const BACKDROP_COLOR: Color = Color::from_rgba(0.0, 0.0, 0.0, 0.8);

/// Panel backing (70% black over the backdrop)
pub const PANEL_COLOR: Color = Color::from_rgba(0.0, 0.0, 0.0, 0.7);

/// Glyph placeholder fill
pub const GLYPH_COLOR: Color = Color::WHITE;

/// Caption text color
pub const CAPTION_COLOR: Color = Color::WHITE;
