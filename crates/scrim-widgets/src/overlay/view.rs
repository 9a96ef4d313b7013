//! View function for the overlay host

use iced::widget::{center, column, container, opaque, stack, text, Space};
use iced::{Alignment, Background, Element, Length};

use super::{OverlayAttachment, OverlayHost};
use crate::theme;

/// Render `base` with the host's overlay stacked above it when attached
///
/// While no attachment is live this is just `base`. While attached, an
/// opaque backdrop covers the whole region and swallows all input, so the
/// wrapped child and any siblings underneath receive none.
pub fn overlay_host<'a, Message: 'a>(
    base: Element<'a, Message>,
    host: &OverlayHost,
) -> Element<'a, Message> {
    match host.attachment() {
        Some(attachment) => stack![base, opaque(backdrop(attachment))].into(),
        None => base,
    }
}

/// Full-region backdrop with the panel centered inside it
fn backdrop<'a, Message: 'a>(attachment: &OverlayAttachment) -> Element<'a, Message> {
    center(panel(attachment))
        .width(Length::Fill)
        .height(Length::Fill)
        .style(backdrop_style)
        .into()
}

/// The fixed square loading panel
fn panel<'a, Message: 'a>(attachment: &OverlayAttachment) -> Element<'a, Message> {
    let glyph = container(Space::new())
        .width(Length::Fixed(attachment.panel.glyph_width))
        .height(Length::Fixed(attachment.panel.glyph_height))
        .style(glyph_style);

    let caption = text(attachment.panel.caption)
        .size(theme::CAPTION_SIZE)
        .color(theme::CAPTION_COLOR);

    let radius = attachment.panel.corner_radius;

    container(
        column![glyph, caption]
            .spacing(theme::PANEL_SPACING)
            .align_x(Alignment::Center),
    )
    .center(Length::Fixed(attachment.panel.size))
    .style(move |_theme| container::Style {
        background: Some(Background::Color(theme::PANEL_COLOR)),
        border: iced::Border {
            color: iced::Color::TRANSPARENT,
            width: 0.0,
            radius: radius.into(),
        },
        ..Default::default()
    })
    .into()
}

// ─────────────────────────────────────────────────────────────────────────────
// Container styles
// ─────────────────────────────────────────────────────────────────────────────

fn backdrop_style(_theme: &iced::Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(theme::BACKDROP_COLOR)),
        ..Default::default()
    }
}

fn glyph_style(_theme: &iced::Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(theme::GLYPH_COLOR)),
        ..Default::default()
    }
}
