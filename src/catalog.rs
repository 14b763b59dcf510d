//! The fixed demo dataset shown on the board.

use crate::error::{BoardError, Result};
use crate::i18n::Translator;
use crate::model::Task;
use chrono::NaiveDate;
use std::collections::HashSet;

/// A task as written in source, before translation and validation.
#[derive(Debug, Clone, Copy)]
pub struct SeedTask {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub due: (i32, u32, u32),
    pub assignee: &'static str,
    pub priority: &'static str,
    pub status: &'static str,
}

pub const SEED_TASKS: [SeedTask; 8] = [
    SeedTask {
        id: 1,
        title: "Design system audit",
        description: "Review and document all existing design tokens, components, and patterns.",
        due: (2026, 3, 1),
        assignee: "Alice",
        priority: "high",
        status: "todo",
    },
    SeedTask {
        id: 2,
        title: "API rate limiting",
        description: "Implement rate limiting middleware for all public API endpoints.",
        due: (2026, 2, 28),
        assignee: "Bob",
        priority: "high",
        status: "inProgress",
    },
    SeedTask {
        id: 3,
        title: "User onboarding flow",
        description: "Build the multi-step onboarding wizard with progress tracking.",
        due: (2026, 3, 5),
        assignee: "Carol",
        priority: "medium",
        status: "todo",
    },
    SeedTask {
        id: 4,
        title: "Database migration",
        description: "Migrate user preferences table to the new schema.",
        due: (2026, 2, 25),
        assignee: "Dave",
        priority: "medium",
        status: "inProgress",
    },
    SeedTask {
        id: 5,
        title: "CI pipeline optimization",
        description: "Reduce build times by parallelizing test suites and caching dependencies.",
        due: (2026, 2, 20),
        assignee: "Eve",
        priority: "low",
        status: "done",
    },
    SeedTask {
        id: 6,
        title: "Accessibility review",
        description: "Audit all pages for WCAG 2.1 AA compliance and fix critical issues.",
        due: (2026, 3, 10),
        assignee: "Alice",
        priority: "high",
        status: "todo",
    },
    SeedTask {
        id: 7,
        title: "Search indexing",
        description: "Set up full-text search indexing for the knowledge base articles.",
        due: (2026, 2, 22),
        assignee: "Bob",
        priority: "low",
        status: "done",
    },
    SeedTask {
        id: 8,
        title: "Error tracking integration",
        description: "Integrate Sentry for real-time error monitoring and alerting.",
        due: (2026, 3, 3),
        assignee: "Carol",
        priority: "medium",
        status: "inProgress",
    },
];

/// Loads the demo tasks, translating titles and descriptions.
pub fn load_tasks(translator: &dyn Translator) -> Result<Vec<Task>> {
    build_tasks(&SEED_TASKS, translator)
}

/// Validates and translates seed records, keeping their order.
///
/// Unknown status or priority values and duplicate ids are rejected here so
/// that grouping and rendering only ever see well-formed tasks.
pub fn build_tasks(seeds: &[SeedTask], translator: &dyn Translator) -> Result<Vec<Task>> {
    let mut seen = HashSet::with_capacity(seeds.len());
    let mut tasks = Vec::with_capacity(seeds.len());

    for seed in seeds {
        if !seen.insert(seed.id) {
            return Err(BoardError::DuplicateTaskId(seed.id));
        }
        let status = seed.status.parse()?;
        let priority = seed.priority.parse()?;
        let (year, month, day) = seed.due;
        let due = NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
            BoardError::Config(format!("Task {} has an invalid due date", seed.id))
        })?;

        let task = Task::new(seed.id, translator.translate(seed.title)?, due)
            .with_description(translator.translate(seed.description)?)
            .with_assignee(seed.assignee.to_string())
            .with_priority(priority)
            .with_status(status);
        tasks.push(task);
    }

    tracing::debug!(locale = %translator.locale(), count = tasks.len(), "Loaded task catalog");
    Ok(tasks)
}
