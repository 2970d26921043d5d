//! Browser client for Pong
//!
//! Draws on an HTML canvas with the 2D context and feeds keyboard and mouse
//! input into the simulation. Only `input` builds off wasm32.

pub mod input;

#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
mod canvas;
#[cfg(target_arch = "wasm32")]
mod scoreboard;

#[cfg(target_arch = "wasm32")]
pub use app::start_game;
