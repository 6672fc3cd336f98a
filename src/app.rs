//! Application state and key handling for the principles TUI.
//!
//! This module contains the `App` struct which holds all mutable state for
//! the interface: the active tab, per-tab scroll offsets, the transient
//! status line, and the pending external-link slot drained by the event
//! loop in `main`.

use crossterm::event::{KeyCode, KeyEvent};

use crate::models::{Tab, EXERCISES, GUIDE_URL, PRINCIPLES, SOURCE_REPO_URL};

/// Application state
pub struct App {
    /// Which of the four views is visible. Always starts at Overview.
    pub active_tab: Tab,
    /// Scroll offset per tab, indexed by `Tab::index()`. Card views scroll
    /// by whole cards, prose views by line.
    pub scroll: [u16; Tab::ALL.len()],
    /// Transient message shown in the footer area, e.g. after a link
    /// activation.
    pub status: Option<String>,
    /// URL requested by a key press, consumed by the event loop.
    pending_link: Option<&'static str>,
    pub should_quit: bool,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    pub fn new() -> Self {
        Self {
            active_tab: Tab::default(),
            scroll: [0; Tab::ALL.len()],
            status: None,
            pending_link: None,
            should_quit: false,
        }
    }

    /// Handle one key press. All navigation is synchronous; the next draw
    /// reflects the new state.
    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Tab | KeyCode::Right | KeyCode::Char('l') => {
                self.select_tab(self.active_tab.next());
            }
            KeyCode::BackTab | KeyCode::Left | KeyCode::Char('h') => {
                self.select_tab(self.active_tab.prev());
            }
            KeyCode::Char(c @ '1'..='4') => {
                let index = c as usize - '1' as usize;
                if let Some(tab) = Tab::from_index(index) {
                    self.select_tab(tab);
                }
            }
            // Overview call-to-action: jump straight to the exercises
            KeyCode::Enter if self.active_tab == Tab::Overview => {
                self.select_tab(Tab::Exercises);
            }
            KeyCode::Char('s') if self.active_tab == Tab::Resources => {
                self.request_link(SOURCE_REPO_URL);
            }
            KeyCode::Char('d') if self.active_tab == Tab::Resources => {
                self.request_link(GUIDE_URL);
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.scroll_up();
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.scroll_down();
            }
            _ => {}
        }
    }

    pub fn select_tab(&mut self, tab: Tab) {
        self.active_tab = tab;
        self.status = None;
    }

    /// Scroll offset of the active tab.
    pub fn active_scroll(&self) -> u16 {
        self.scroll[self.active_tab.index()]
    }

    fn scroll_up(&mut self) {
        let offset = &mut self.scroll[self.active_tab.index()];
        *offset = offset.saturating_sub(1);
    }

    fn scroll_down(&mut self) {
        let max = Self::max_scroll(self.active_tab);
        let offset = &mut self.scroll[self.active_tab.index()];
        *offset = offset.saturating_add(1).min(max);
    }

    /// Upper scroll bound per tab, so Down never runs off into blank
    /// space. Card views scroll by whole cards; the prose views are
    /// bounded by their longest wrapped rendering on a narrow terminal.
    fn max_scroll(tab: Tab) -> u16 {
        match tab {
            Tab::Overview => 16,
            Tab::Principles => PRINCIPLES.len() as u16 - 1,
            Tab::Exercises => EXERCISES.len() as u16 - 1,
            Tab::Resources => 8,
        }
    }

    /// Record a link activation. The actual browser launch happens in the
    /// event loop so that key handling stays free of side effects.
    fn request_link(&mut self, url: &'static str) {
        self.pending_link = Some(url);
        self.status = Some(format!("Opening {url} in your browser"));
    }

    /// Take the URL requested by the last key press, if any. Each
    /// activation yields exactly one URL.
    pub fn take_pending_link(&mut self) -> Option<&'static str> {
        self.pending_link.take()
    }
}
