//! lvscroll - fast scroller demo
//!
//! A sample list of numbers with an `lvscroll_ui` fast scroller on top,
//! driven by a scripted session and rendered as text.

pub mod animator;
pub mod app;
pub mod config;
pub mod constants;
pub mod sample;
pub mod session;

pub use app::DemoApp;
pub use config::{ConfigError, DemoConfig, LogLevel};
