//! Partitioning of tasks into board columns.

use crate::model::{Task, TaskStatus};

/// Column order on the board.
pub const COLUMN_ORDER: [TaskStatus; 3] =
    [TaskStatus::Todo, TaskStatus::InProgress, TaskStatus::Done];

/// Tasks bucketed by column key, in the order the keys were requested.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grouping {
    buckets: Vec<(TaskStatus, Vec<Task>)>,
}

impl Grouping {
    pub fn iter(&self) -> impl Iterator<Item = (TaskStatus, &[Task])> {
        self.buckets
            .iter()
            .map(|(key, tasks)| (*key, tasks.as_slice()))
    }

    pub fn get(&self, key: TaskStatus) -> Option<&[Task]> {
        self.buckets
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, tasks)| tasks.as_slice())
    }

    pub fn keys(&self) -> impl Iterator<Item = TaskStatus> + '_ {
        self.buckets.iter().map(|(key, _)| *key)
    }

    /// Number of buckets, including empty ones.
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Sum of all bucket sizes.
    pub fn total(&self) -> usize {
        self.buckets.iter().map(|(_, tasks)| tasks.len()).sum()
    }
}

/// Stable partition of `tasks` by status, one bucket per entry in `columns`.
///
/// Tasks whose status is not among `columns` are left out. Repeated keys in
/// `columns` are only bucketed once.
pub fn group_by_column(tasks: &[Task], columns: &[TaskStatus]) -> Grouping {
    let mut buckets: Vec<(TaskStatus, Vec<Task>)> = Vec::with_capacity(columns.len());
    for key in columns {
        if buckets.iter().any(|(k, _)| k == key) {
            continue;
        }
        let matching = tasks.iter().filter(|t| t.status == *key).cloned().collect();
        buckets.push((*key, matching));
    }
    Grouping { buckets }
}
