//! Top-level frame rendering: header, tab bar, active view, footer.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Tabs},
};

use crate::app::App;
use crate::cli::VERSION;
use crate::models::Tab;
use crate::theme::{
    BG_PRIMARY, BORDER_SUBTLE, CYAN_PRIMARY, ROUNDED_BORDERS, TEXT_MUTED, TEXT_SECONDARY,
};
use crate::ui::views;

/// Render the whole frame from the current application state.
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    frame.render_widget(Block::default().style(Style::default().bg(BG_PRIMARY)), area);

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Header
            Constraint::Length(1), // Tab bar
            Constraint::Min(3),    // Active view
            Constraint::Length(1), // Footer
        ])
        .split(area);

    render_header(frame, layout[0]);
    render_tab_bar(frame, layout[1], app.active_tab);
    render_active_view(frame, layout[2], app);
    render_footer(frame, layout[3], app);
}

fn render_header(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(vec![
            Span::styled(
                " Software Design Principles",
                Style::default().fg(CYAN_PRIMARY).add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!("  v{}", VERSION), Style::default().fg(TEXT_MUTED)),
        ]),
        Line::from(Span::styled(
            " Learn DRY, KISS, and SOLID through hands-on refactoring",
            Style::default().fg(TEXT_SECONDARY),
        )),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

fn render_tab_bar(frame: &mut Frame, area: Rect, active: Tab) {
    let titles = Tab::ALL.iter().map(|tab| tab.label());
    let tabs = Tabs::new(titles)
        .select(active.index())
        .style(Style::default().fg(TEXT_MUTED))
        .highlight_style(Style::default().fg(CYAN_PRIMARY).add_modifier(Modifier::BOLD))
        .divider(Span::styled("│", Style::default().fg(BORDER_SUBTLE)));
    frame.render_widget(tabs, area);
}

fn render_active_view(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(format!(" {} ", app.active_tab.label()))
        .borders(Borders::ALL)
        .border_set(ROUNDED_BORDERS)
        .border_style(Style::default().fg(BORDER_SUBTLE));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let scroll = app.active_scroll();
    match app.active_tab {
        Tab::Overview => views::render_overview(frame, inner, scroll),
        Tab::Principles => views::render_principles(frame, inner, scroll),
        Tab::Exercises => views::render_exercises(frame, inner, scroll),
        Tab::Resources => views::render_resources(frame, inner, scroll),
    }
}

fn render_footer(frame: &mut Frame, area: Rect, app: &App) {
    // The footer doubles as the status line for link activations
    if let Some(status) = &app.status {
        let line = Paragraph::new(format!(" {} ", status))
            .style(Style::default().fg(Color::Black).bg(CYAN_PRIMARY));
        frame.render_widget(line, area);
        return;
    }

    let mut hints = String::from(" q: Quit | Tab/1-4: Switch View | ↑↓: Scroll");
    match app.active_tab {
        Tab::Overview => hints.push_str(" | Enter: Exercises"),
        Tab::Resources => hints.push_str(" | s: Source | d: Guide"),
        _ => {}
    }
    let line = Paragraph::new(hints).style(Style::default().fg(Color::Black).bg(CYAN_PRIMARY));
    frame.render_widget(line, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    /// Draw the app into a test backend and return the buffer as text.
    fn render_to_text(app: &App) -> String {
        render_to_text_sized(app, 80, 30)
    }

    fn render_to_text_sized(app: &App, width: u16, height: u16) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| render(frame, app)).unwrap();

        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                if let Some(cell) = buffer.cell((x, y)) {
                    text.push_str(cell.symbol());
                }
            }
            text.push('\n');
        }
        text
    }

    /// A sentinel string unique to each view's content.
    fn sentinel(tab: Tab) -> &'static str {
        match tab {
            Tab::Overview => "design principles workshop",
            Tab::Principles => "Don't Repeat Yourself",
            Tab::Exercises => "Data Validation",
            Tab::Resources => "Source Repository",
        }
    }

    #[test]
    fn test_each_tab_shows_exactly_one_view() {
        for selected in Tab::ALL {
            let mut app = App::new();
            app.select_tab(selected);
            let text = render_to_text(&app);
            for tab in Tab::ALL {
                if tab == selected {
                    assert!(
                        text.contains(sentinel(tab)),
                        "{:?} view missing while {:?} selected",
                        tab,
                        selected
                    );
                } else {
                    assert!(
                        !text.contains(sentinel(tab)),
                        "{:?} view visible while {:?} selected",
                        tab,
                        selected
                    );
                }
            }
        }
    }

    #[test]
    fn test_all_tab_labels_always_in_tab_bar() {
        let app = App::new();
        let text = render_to_text(&app);
        for tab in Tab::ALL {
            assert!(text.contains(tab.label()));
        }
    }

    #[test]
    fn test_principles_view_lists_all_four_entries() {
        let mut app = App::new();
        app.select_tab(Tab::Principles);
        // A 30-row terminal cannot fit all four cards; scroll through and
        // collect what appears.
        let mut seen = String::new();
        for offset in 0..4 {
            app.scroll[Tab::Principles.index()] = offset;
            seen.push_str(&render_to_text(&app));
        }
        for principle in &crate::models::PRINCIPLES {
            assert!(seen.contains(principle.full_name));
            for benefit in principle.benefits {
                assert!(seen.contains(benefit));
            }
        }
    }

    #[test]
    fn test_exercises_view_lists_all_six_entries() {
        let mut app = App::new();
        app.select_tab(Tab::Exercises);
        let mut seen = String::new();
        for offset in 0..6 {
            app.scroll[Tab::Exercises.index()] = offset;
            seen.push_str(&render_to_text(&app));
        }
        for exercise in &crate::models::EXERCISES {
            assert!(seen.contains(exercise.title));
            assert!(seen.contains(exercise.language));
            assert!(seen.contains(exercise.difficulty.label()));
        }
    }

    #[test]
    fn test_resources_view_shows_literal_urls() {
        let mut app = App::new();
        app.select_tab(Tab::Resources);
        let text = render_to_text(&app);
        assert!(text.contains(crate::models::SOURCE_REPO_URL));
        assert!(text.contains(crate::models::GUIDE_URL));
    }

    #[test]
    fn test_resources_urls_wrap_instead_of_clip_when_narrow() {
        let mut app = App::new();
        app.select_tab(Tab::Resources);
        let text = render_to_text_sized(&app, 50, 30);
        // Both URLs are wider than a 50-column card; their tails must
        // still be on screen, continued on the next line
        assert!(text.contains("#readme"));
        assert!(text.contains("-tui"));
    }

    #[test]
    fn test_footer_shows_status_after_link_activation() {
        use crossterm::event::{KeyEvent, KeyModifiers};

        let mut app = App::new();
        app.select_tab(Tab::Resources);
        app.handle_key(KeyEvent::new(crossterm::event::KeyCode::Char('s'), KeyModifiers::NONE));
        let text = render_to_text(&app);
        assert!(text.contains("Opening"));
    }
}
