//! UI helper functions

use ratatui::prelude::*;

/// Word-wrap `text` to `max_width` columns (character count). Tokens wider
/// than `max_width` (URLs, long identifiers) are hard-broken so nothing is
/// ever clipped.
pub fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    if max_width == 0 {
        return vec![text.to_string()];
    }

    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;

    for word in text.split_whitespace() {
        let word_width = word.chars().count();
        if word_width > max_width {
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            let mut chunk_width = 0;
            for ch in word.chars() {
                if chunk_width == max_width {
                    lines.push(std::mem::take(&mut current));
                    chunk_width = 0;
                }
                current.push(ch);
                chunk_width += 1;
            }
            current_width = chunk_width;
            continue;
        }
        if current.is_empty() {
            current.push_str(word);
            current_width = word_width;
        } else if current_width + 1 + word_width <= max_width {
            current.push(' ');
            current.push_str(word);
            current_width += 1 + word_width;
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
            current_width = word_width;
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }

    if lines.is_empty() {
        lines.push(String::new());
    }

    lines
}

/// Build a pill-style badge span, e.g. " Beginner " in its accent color.
pub fn badge(text: &str, color: Color) -> Span<'static> {
    Span::styled(
        format!(" {} ", text),
        Style::default().fg(color).add_modifier(Modifier::REVERSED),
    )
}
