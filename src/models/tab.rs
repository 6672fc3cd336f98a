//! Tab identifiers for the four content views.

/// The four mutually exclusive content views. Exactly one is visible at a
/// time; every launch starts on Overview.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Overview,
    Principles,
    Exercises,
    Resources,
}

impl Tab {
    /// All tabs in display order (left to right in the tab bar).
    pub const ALL: [Tab; 4] = [Tab::Overview, Tab::Principles, Tab::Exercises, Tab::Resources];

    pub fn label(&self) -> &'static str {
        match self {
            Tab::Overview => "Overview",
            Tab::Principles => "Principles",
            Tab::Exercises => "Exercises",
            Tab::Resources => "Resources",
        }
    }

    /// Position in the tab bar (0-based).
    pub fn index(&self) -> usize {
        match self {
            Tab::Overview => 0,
            Tab::Principles => 1,
            Tab::Exercises => 2,
            Tab::Resources => 3,
        }
    }

    /// Tab at a 0-based position, if any.
    pub fn from_index(index: usize) -> Option<Tab> {
        Tab::ALL.get(index).copied()
    }

    /// Next tab to the right, wrapping around.
    pub fn next(&self) -> Tab {
        Tab::ALL[(self.index() + 1) % Tab::ALL.len()]
    }

    /// Previous tab to the left, wrapping around.
    pub fn prev(&self) -> Tab {
        Tab::ALL[(self.index() + Tab::ALL.len() - 1) % Tab::ALL.len()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_default_is_overview() {
        assert_eq!(Tab::default(), Tab::Overview);
    }

    #[test]
    fn test_tab_all_has_four_entries() {
        assert_eq!(Tab::ALL.len(), 4);
    }

    #[test]
    fn test_tab_labels() {
        assert_eq!(Tab::Overview.label(), "Overview");
        assert_eq!(Tab::Principles.label(), "Principles");
        assert_eq!(Tab::Exercises.label(), "Exercises");
        assert_eq!(Tab::Resources.label(), "Resources");
    }

    #[test]
    fn test_tab_index_round_trips() {
        for tab in Tab::ALL {
            assert_eq!(Tab::from_index(tab.index()), Some(tab));
        }
        assert_eq!(Tab::from_index(4), None);
    }

    #[test]
    fn test_tab_next_wraps() {
        assert_eq!(Tab::Overview.next(), Tab::Principles);
        assert_eq!(Tab::Resources.next(), Tab::Overview);
    }

    #[test]
    fn test_tab_prev_wraps() {
        assert_eq!(Tab::Principles.prev(), Tab::Overview);
        assert_eq!(Tab::Overview.prev(), Tab::Resources);
    }

    #[test]
    fn test_tab_next_then_prev_is_identity() {
        for tab in Tab::ALL {
            assert_eq!(tab.next().prev(), tab);
        }
    }
}
