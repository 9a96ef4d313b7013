//! UI module for the scrim demo screen
//!
//! Built with iced - a cross-platform GUI library for Rust.
//! One screen, message-passing architecture, no background threads.

pub mod app;
pub mod message;

pub use app::DemoApp;
