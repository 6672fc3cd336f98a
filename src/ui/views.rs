//! Content view rendering: one function per tab.
//!
//! Every field drawn here is a direct read of the static records in
//! `models::content`; the only processing is word wrapping to the card
//! width.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::models::{Exercise, Principle, EXERCISES, GUIDE_URL, PRINCIPLES, SOURCE_REPO_URL};
use crate::theme::{
    difficulty_color, principle_accent, BG_SECONDARY, BORDER_SUBTLE, CYAN_DIM, CYAN_PRIMARY,
    ROUNDED_BORDERS, TEXT_MUTED, TEXT_PRIMARY, TEXT_SECONDARY,
};
use crate::ui::helpers::{badge, wrap_text};

/// Render the Overview view: stat cards, intro prose, and the
/// call-to-action hint.
pub fn render_overview(frame: &mut Frame, area: Rect, scroll: u16) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Stat cards
            Constraint::Min(1),    // Intro prose
            Constraint::Length(1), // Call to action
        ])
        .split(area);

    render_stat_cards(frame, layout[0]);

    let intro = vec![
        Line::from(Span::styled(
            "Welcome to the design principles workshop.",
            Style::default().fg(TEXT_PRIMARY).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Writing code that works is the easy part. Writing code that the \
             next person can read, change, and extend is what these pages are \
             about. Each principle here is a habit, not a rule: a default you \
             reach for when the design could go either way.",
            Style::default().fg(TEXT_SECONDARY),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Browse the Principles view for the ideas, then pick a scenario \
             from the Exercises view and refactor it in the language it names. \
             The Resources view links the source of this program and the \
             companion guide with worked examples.",
            Style::default().fg(TEXT_SECONDARY),
        )),
    ];

    let paragraph = Paragraph::new(intro)
        .wrap(ratatui::widgets::Wrap { trim: true })
        .scroll((scroll, 0));
    frame.render_widget(paragraph, layout[1]);

    let cta = Line::from(Span::styled(
        "▸ Press Enter to browse the exercises",
        Style::default().fg(CYAN_PRIMARY).add_modifier(Modifier::BOLD),
    ));
    frame.render_widget(Paragraph::new(cta), layout[2]);
}

/// Render the two headline stat cards (principle and exercise counts).
fn render_stat_cards(frame: &mut Frame, area: Rect) {
    let card_layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let cards = [
        (PRINCIPLES.len(), "PRINCIPLES"),
        (EXERCISES.len(), "EXERCISES"),
    ];

    for (slot, (count, caption)) in card_layout.iter().zip(cards) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_set(ROUNDED_BORDERS)
            .border_style(Style::default().fg(BORDER_SUBTLE))
            .style(Style::default().bg(BG_SECONDARY));

        let content = vec![
            Line::from(Span::styled(
                format!("{}", count),
                Style::default().fg(CYAN_PRIMARY).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(caption, Style::default().fg(TEXT_MUTED))),
        ];

        let paragraph = Paragraph::new(content).block(block).alignment(Alignment::Center);
        frame.render_widget(paragraph, *slot);
    }
}

/// Render the Principles view: one card per principle, scrolled by whole
/// cards.
pub fn render_principles(frame: &mut Frame, area: Rect, scroll: u16) {
    let first = (scroll as usize).min(PRINCIPLES.len().saturating_sub(1));
    let mut y = area.y;

    for principle in PRINCIPLES.iter().skip(first) {
        let inner_width = area.width.saturating_sub(4) as usize;
        let description = wrap_text(principle.description, inner_width);
        // borders + title + description + benefits row
        let height = 2 + 1 + description.len() as u16 + 1;
        if y + height > area.bottom() {
            break;
        }

        render_principle_card(frame, Rect::new(area.x, y, area.width, height), principle, &description);
        y += height;
    }
}

fn render_principle_card(frame: &mut Frame, area: Rect, principle: &Principle, description: &[String]) {
    let accent = principle_accent(principle.id);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_set(ROUNDED_BORDERS)
        .border_style(Style::default().fg(BORDER_SUBTLE))
        .style(Style::default().bg(BG_SECONDARY));

    let mut lines = vec![Line::from(vec![
        Span::styled(format!("{} ", principle.icon), Style::default().fg(accent)),
        badge(principle.short_name, accent),
        Span::styled(
            format!(" {}", principle.full_name),
            Style::default().fg(TEXT_PRIMARY).add_modifier(Modifier::BOLD),
        ),
    ])];

    for line in description {
        lines.push(Line::from(Span::styled(
            line.clone(),
            Style::default().fg(TEXT_SECONDARY),
        )));
    }

    let mut benefit_spans = Vec::new();
    for benefit in principle.benefits {
        if !benefit_spans.is_empty() {
            benefit_spans.push(Span::raw(" "));
        }
        benefit_spans.push(badge(benefit, TEXT_SECONDARY));
    }
    lines.push(Line::from(benefit_spans));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Render the Exercises view: one card per exercise, scrolled by whole
/// cards.
pub fn render_exercises(frame: &mut Frame, area: Rect, scroll: u16) {
    let first = (scroll as usize).min(EXERCISES.len().saturating_sub(1));
    let mut y = area.y;

    for exercise in EXERCISES.iter().skip(first) {
        let inner_width = area.width.saturating_sub(4) as usize;
        let scenario = wrap_text(exercise.scenario, inner_width);
        // borders + title + meta row + scenario
        let height = 2 + 1 + 1 + scenario.len() as u16;
        if y + height > area.bottom() {
            break;
        }

        render_exercise_card(frame, Rect::new(area.x, y, area.width, height), exercise, &scenario);
        y += height;
    }
}

fn render_exercise_card(frame: &mut Frame, area: Rect, exercise: &Exercise, scenario: &[String]) {
    let accent = principle_accent(exercise.principle);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_set(ROUNDED_BORDERS)
        .border_style(Style::default().fg(BORDER_SUBTLE))
        .style(Style::default().bg(BG_SECONDARY));

    let mut lines = vec![
        Line::from(vec![
            badge(exercise.principle.tag(), accent),
            Span::styled(
                format!(" {}", exercise.title),
                Style::default().fg(TEXT_PRIMARY).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled(
                format!("{}  ", exercise.language),
                Style::default().fg(TEXT_SECONDARY),
            ),
            badge(exercise.difficulty.label(), difficulty_color(exercise.difficulty)),
        ]),
    ];

    for line in scenario {
        lines.push(Line::from(Span::styled(
            line.clone(),
            Style::default().fg(TEXT_MUTED),
        )));
    }

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Render the Resources view: the two link cards and further-reading
/// prose.
pub fn render_resources(frame: &mut Frame, area: Rect, scroll: u16) {
    // Card height follows the wrapped URL so narrow terminals wrap the
    // link instead of clipping it
    let inner_width = area.width.saturating_sub(4) as usize;
    let source_lines = wrap_text(SOURCE_REPO_URL, inner_width);
    let guide_lines = wrap_text(GUIDE_URL, inner_width);

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3 + source_lines.len() as u16), // Source repository card
            Constraint::Length(3 + guide_lines.len() as u16),  // Companion guide card
            Constraint::Min(1),                                // Further reading
        ])
        .split(area);

    render_link_card(frame, layout[0], "Source Repository", &source_lines, "s");
    render_link_card(frame, layout[1], "Companion Guide (README)", &guide_lines, "d");

    let reading = vec![
        Line::from(Span::styled(
            "Further reading",
            Style::default().fg(TEXT_PRIMARY).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "• The Pragmatic Programmer (Hunt & Thomas), where DRY was coined",
            Style::default().fg(TEXT_SECONDARY),
        )),
        Line::from(Span::styled(
            "• Clean Architecture (Martin), the SOLID principles in depth",
            Style::default().fg(TEXT_SECONDARY),
        )),
        Line::from(Span::styled(
            "• A Philosophy of Software Design (Ousterhout), on fighting complexity",
            Style::default().fg(TEXT_SECONDARY),
        )),
    ];

    let paragraph = Paragraph::new(reading)
        .wrap(ratatui::widgets::Wrap { trim: true })
        .scroll((scroll, 0));
    frame.render_widget(paragraph, layout[2]);
}

fn render_link_card(
    frame: &mut Frame,
    area: Rect,
    title: &'static str,
    url_lines: &[String],
    key: &'static str,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_set(ROUNDED_BORDERS)
        .border_style(Style::default().fg(BORDER_SUBTLE))
        .style(Style::default().bg(BG_SECONDARY));

    let mut lines = vec![Line::from(vec![
        Span::styled(
            title,
            Style::default().fg(CYAN_PRIMARY).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  press {} to open", key),
            Style::default().fg(CYAN_DIM),
        ),
    ])];

    for line in url_lines {
        lines.push(Line::from(Span::styled(
            line.clone(),
            Style::default().fg(TEXT_SECONDARY),
        )));
    }

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
