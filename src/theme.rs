//! Theme module for the principles TUI.
//!
//! Centralized color palette and styling constants for the dark terminal
//! aesthetic, plus the accent mappings for principles and difficulty badges.

use ratatui::style::Color;
use ratatui::symbols::border;

use crate::models::{Difficulty, PrincipleId};

// ============================================================================
// Background Colors
// ============================================================================

/// Primary background color - deepest space black (#0a0e14)
pub const BG_PRIMARY: Color = Color::Rgb(10, 14, 20);

/// Secondary background color - card fill (#12161c)
pub const BG_SECONDARY: Color = Color::Rgb(18, 22, 28);

/// Subtle border color (#1e2530)
pub const BORDER_SUBTLE: Color = Color::Rgb(30, 37, 48);

// ============================================================================
// Accent Colors
// ============================================================================

/// Primary cyan accent color (#00d4aa)
pub const CYAN_PRIMARY: Color = Color::Rgb(0, 212, 170);

/// Dimmed cyan for secondary elements (#0a8a6e)
pub const CYAN_DIM: Color = Color::Rgb(10, 138, 110);

// ============================================================================
// Text Colors
// ============================================================================

/// Primary text color - bright white (#e2e8f0)
pub const TEXT_PRIMARY: Color = Color::Rgb(226, 232, 240);

/// Secondary text color - muted gray (#94a3b8)
pub const TEXT_SECONDARY: Color = Color::Rgb(148, 163, 184);

/// Muted text color - for labels and hints (#64748b)
pub const TEXT_MUTED: Color = Color::Rgb(100, 116, 139);

// ============================================================================
// Badge Colors
// ============================================================================

/// Green badge color (#4ade80)
pub const GREEN_BADGE: Color = Color::Rgb(74, 222, 128);

/// Amber badge color (#fbbf24)
pub const AMBER_BADGE: Color = Color::Rgb(251, 191, 36);

/// Red badge color (#f87171)
pub const RED_BADGE: Color = Color::Rgb(248, 113, 113);

/// Blue accent color (#60a5fa)
pub const BLUE_ACCENT: Color = Color::Rgb(96, 165, 250);

/// Violet accent color (#a78bfa)
pub const VIOLET_ACCENT: Color = Color::Rgb(167, 139, 250);

// ============================================================================
// Borders
// ============================================================================

/// Rounded border set used by all cards
pub const ROUNDED_BORDERS: border::Set = border::ROUNDED;

/// Accent color for a principle's card, tag, and icon.
pub fn principle_accent(id: PrincipleId) -> Color {
    match id {
        PrincipleId::Dry => CYAN_PRIMARY,
        PrincipleId::Kiss => AMBER_BADGE,
        PrincipleId::Srp => BLUE_ACCENT,
        PrincipleId::Solid => VIOLET_ACCENT,
    }
}

/// Color for a difficulty badge.
pub fn difficulty_color(difficulty: Difficulty) -> Color {
    match difficulty {
        Difficulty::Beginner => GREEN_BADGE,
        Difficulty::Intermediate => AMBER_BADGE,
        Difficulty::Advanced => RED_BADGE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_principle_accents_are_distinct() {
        let accents = [
            principle_accent(PrincipleId::Dry),
            principle_accent(PrincipleId::Kiss),
            principle_accent(PrincipleId::Srp),
            principle_accent(PrincipleId::Solid),
        ];
        for i in 0..accents.len() {
            for j in (i + 1)..accents.len() {
                assert_ne!(accents[i], accents[j]);
            }
        }
    }

    #[test]
    fn test_difficulty_colors_are_distinct() {
        assert_ne!(difficulty_color(Difficulty::Beginner), difficulty_color(Difficulty::Advanced));
        assert_ne!(
            difficulty_color(Difficulty::Beginner),
            difficulty_color(Difficulty::Intermediate)
        );
    }
}
