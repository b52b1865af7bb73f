//! funapp application layer: screen runtime, screen drivers, and the headless entrypoint.

/// Shared services and screen factories.
pub mod context;
/// Screen task runtime and the headless driver.
pub mod runtime;
/// Per-screen effect executors.
pub mod screens;

pub use context::AppContext;
pub use runtime::run;
pub use runtime::screen::{Feeds, Screen, ScreenDriver, TaskScope, spawn_screen};
