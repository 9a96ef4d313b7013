//! Modal loading overlay widgets for iced applications
//!
//! This crate provides a reusable "scrim" overlay: a centered loading panel
//! rendered above arbitrary content on a semi-transparent backdrop, modal
//! for the region it covers.
//!
//! ## Architecture (iced 0.14 patterns)
//!
//! Following idiomatic iced patterns:
//!
//! - **State structs**: Pure data (`OverlayHost`, `OverlayAttachment`)
//! - **View functions**: Take state, return `Element<Message>`
//! - **Signals**: A shared boolean (`LoadingSignal` writer, `SignalReader`
//!   read-only view) drives attach/detach through `OverlayHost::sync`
//!
//! The host region is resolved lazily from window geometry events and
//! memoized; until resolution, sync calls degrade silently and are retried
//! on the next layout pass.

pub mod overlay;
pub mod signal;
pub mod theme;

// Re-export commonly used items
pub use overlay::{overlay_host, OverlayAttachment, OverlayHost, OverlayPanel};
pub use signal::{LoadingSignal, SignalReader};
