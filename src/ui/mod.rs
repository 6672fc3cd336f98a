//! UI module for the principles TUI.
//!
//! This module contains the rendering functions for the interface: the
//! top-level frame layout and the four content views.

mod helpers;
mod render;
mod views;

pub use render::render;
