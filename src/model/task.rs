use super::types::{TaskPriority, TaskStatus};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub due: NaiveDate,
    pub assignee: String,

    #[serde(default)]
    pub priority: TaskPriority,

    #[serde(default)]
    pub status: TaskStatus,
}

impl Task {
    pub fn new(id: u32, title: String, due: NaiveDate) -> Self {
        Self {
            id,
            title,
            description: String::new(),
            due,
            assignee: String::new(),
            priority: TaskPriority::default(),
            status: TaskStatus::default(),
        }
    }

    pub fn with_description(mut self, description: String) -> Self {
        self.description = description;
        self
    }

    pub fn with_assignee(mut self, assignee: String) -> Self {
        self.assignee = assignee;
        self
    }

    pub fn with_priority(mut self, priority: TaskPriority) -> Self {
        self.priority = priority;
        self
    }

    pub fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = status;
        self
    }
}
