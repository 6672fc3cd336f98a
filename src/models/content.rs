//! The static content catalog.
//!
//! Everything the UI shows comes from the fixed records in this module:
//! four principle entries, six exercise entries, and the two external
//! links. The records are compile-time constants and are never mutated.

/// Identifier for one of the four principle entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrincipleId {
    Dry,
    Kiss,
    Srp,
    Solid,
}

impl PrincipleId {
    /// Short display tag, e.g. "DRY".
    pub fn tag(&self) -> &'static str {
        match self {
            PrincipleId::Dry => "DRY",
            PrincipleId::Kiss => "KISS",
            PrincipleId::Srp => "SRP",
            PrincipleId::Solid => "SOLID",
        }
    }
}

/// Difficulty badge for an exercise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Beginner => "Beginner",
            Difficulty::Intermediate => "Intermediate",
            Difficulty::Advanced => "Advanced",
        }
    }
}

/// One design-principle entry.
pub struct Principle {
    pub id: PrincipleId,
    pub short_name: &'static str,
    pub full_name: &'static str,
    pub description: &'static str,
    pub benefits: &'static [&'static str],
    pub icon: &'static str,
}

/// One practice-exercise entry.
pub struct Exercise {
    pub principle: PrincipleId,
    pub title: &'static str,
    pub language: &'static str,
    pub scenario: &'static str,
    pub difficulty: Difficulty,
}

/// The four principle entries, in display order.
pub static PRINCIPLES: [Principle; 4] = [
    Principle {
        id: PrincipleId::Dry,
        short_name: "DRY",
        full_name: "Don't Repeat Yourself",
        description: "Every piece of knowledge should have a single, \
            unambiguous, authoritative representation within a system. When \
            the same logic lives in two places, the two copies drift apart \
            and one of them becomes a bug.",
        benefits: &["Maintainability", "Readability", "Reduced Bugs", "Faster Development"],
        icon: "♻",
    },
    Principle {
        id: PrincipleId::Kiss,
        short_name: "KISS",
        full_name: "Keep It Simple, Stupid",
        description: "Most systems work best when kept simple. Prefer the \
            straightforward solution over the clever one; complexity added \
            today is the debugging session of six months from now.",
        benefits: &["Easier Debugging", "Lower Onboarding Cost", "Fewer Surprises", "Simpler Tests"],
        icon: "✦",
    },
    Principle {
        id: PrincipleId::Srp,
        short_name: "SRP",
        full_name: "Single Responsibility Principle",
        description: "A module should have one, and only one, reason to \
            change. When a type answers to several masters, every change for \
            one of them risks breaking the others.",
        benefits: &["Focused Modules", "Safer Changes", "Better Reuse", "Clearer Ownership"],
        icon: "◎",
    },
    Principle {
        id: PrincipleId::Solid,
        short_name: "SOLID",
        full_name: "The Five SOLID Principles",
        description: "Single responsibility, open/closed, Liskov \
            substitution, interface segregation, and dependency inversion: \
            five guidelines that together keep object designs flexible under \
            changing requirements.",
        benefits: &["Extensibility", "Testability", "Loose Coupling", "Stable Interfaces"],
        icon: "▣",
    },
];

/// The six practice exercises, in display order.
pub static EXERCISES: [Exercise; 6] = [
    Exercise {
        principle: PrincipleId::Dry,
        title: "Data Validation",
        language: "Python",
        scenario: "A signup form validates email, username, and password with \
            three near-identical blocks of checks. Extract the shared rules \
            into reusable validators without changing behavior.",
        difficulty: Difficulty::Beginner,
    },
    Exercise {
        principle: PrincipleId::Dry,
        title: "Report Formatting",
        language: "JavaScript",
        scenario: "Weekly, monthly, and quarterly report generators each \
            rebuild the same header, totals, and footer markup. Fold the \
            duplication into one template the three reports share.",
        difficulty: Difficulty::Intermediate,
    },
    Exercise {
        principle: PrincipleId::Kiss,
        title: "Config Loader",
        language: "Go",
        scenario: "A configuration loader supports four file formats, \
            environment overrides, and remote fetch, but the project only \
            ever uses one local file. Strip it back to the simple thing.",
        difficulty: Difficulty::Beginner,
    },
    Exercise {
        principle: PrincipleId::Srp,
        title: "Order Processor",
        language: "Java",
        scenario: "One OrderService validates input, calculates tax, charges \
            the card, writes the database, and sends email. Split it into \
            collaborators that each have a single reason to change.",
        difficulty: Difficulty::Intermediate,
    },
    Exercise {
        principle: PrincipleId::Solid,
        title: "Payment Methods",
        language: "C#",
        scenario: "A checkout switch statement grows a new case for every \
            payment provider. Apply open/closed: introduce an abstraction so \
            new providers plug in without editing the checkout.",
        difficulty: Difficulty::Advanced,
    },
    Exercise {
        principle: PrincipleId::Solid,
        title: "Notification Plugins",
        language: "TypeScript",
        scenario: "Email, SMS, and push notifications share one fat interface \
            that forces empty method bodies everywhere. Segregate the \
            interfaces and invert the dependencies of the dispatcher.",
        difficulty: Difficulty::Advanced,
    },
];

/// Source repository for this project, opened from the Resources view.
pub const SOURCE_REPO_URL: &str = "https://github.com/principles-dev/principles-tui";

/// The project README, which hosts the companion guide of worked code
/// examples (docs/code-examples.md).
pub const GUIDE_URL: &str = "https://github.com/principles-dev/principles-tui#readme";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exactly_four_principles() {
        assert_eq!(PRINCIPLES.len(), 4);
        let tags: Vec<&str> = PRINCIPLES.iter().map(|p| p.short_name).collect();
        assert_eq!(tags, vec!["DRY", "KISS", "SRP", "SOLID"]);
    }

    #[test]
    fn test_dry_benefits_exact_order() {
        let dry = &PRINCIPLES[0];
        assert_eq!(dry.full_name, "Don't Repeat Yourself");
        assert_eq!(
            dry.benefits,
            &["Maintainability", "Readability", "Reduced Bugs", "Faster Development"]
        );
    }

    #[test]
    fn test_every_principle_is_fully_populated() {
        for principle in &PRINCIPLES {
            assert_eq!(principle.short_name, principle.id.tag());
            assert!(!principle.full_name.is_empty());
            assert!(!principle.description.is_empty());
            assert!(!principle.icon.is_empty());
            assert_eq!(principle.benefits.len(), 4);
        }
    }

    #[test]
    fn test_exactly_six_exercises() {
        assert_eq!(EXERCISES.len(), 6);
    }

    #[test]
    fn test_first_exercise_literals() {
        let first = &EXERCISES[0];
        assert_eq!(first.title, "Data Validation");
        assert_eq!(first.language, "Python");
        assert_eq!(first.difficulty.label(), "Beginner");
        assert_eq!(first.principle.tag(), "DRY");
    }

    #[test]
    fn test_every_exercise_references_a_known_principle() {
        for exercise in &EXERCISES {
            assert!(PRINCIPLES.iter().any(|p| p.id == exercise.principle));
            assert!(!exercise.title.is_empty());
            assert!(!exercise.language.is_empty());
            assert!(!exercise.scenario.is_empty());
        }
    }

    #[test]
    fn test_difficulty_labels() {
        assert_eq!(Difficulty::Beginner.label(), "Beginner");
        assert_eq!(Difficulty::Intermediate.label(), "Intermediate");
        assert_eq!(Difficulty::Advanced.label(), "Advanced");
    }

    #[test]
    fn test_external_urls_are_https() {
        assert!(SOURCE_REPO_URL.starts_with("https://"));
        assert!(GUIDE_URL.starts_with("https://"));
        assert_ne!(SOURCE_REPO_URL, GUIDE_URL);
    }
}
