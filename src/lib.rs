//! Library entry for funapp exposing the screen machines for integration tests.

pub mod app;
pub mod args;
pub mod favorites;
pub mod logic;
pub mod settings;
pub mod sources;
pub mod state;
