//! Data models for the principles TUI.
//!
//! This module contains the static content catalog (principles, exercises,
//! external links) and the tab identifier enum.

pub mod content;
pub mod tab;

// Re-exports for convenient access
pub use content::{
    Difficulty, Exercise, Principle, PrincipleId, EXERCISES, GUIDE_URL, PRINCIPLES, SOURCE_REPO_URL,
};
pub use tab::Tab;
