//! Task types: Task, Subtask

use super::ids::{SubtaskId, TaskId};
use crate::palette::DEFAULT_TASK_COLOR;
use crate::reorder::Keyed;
use serde::{Deserialize, Serialize};

/// A card on the board
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: TaskId,
    pub text: String,
    pub color: String,
    #[serde(rename = "subTasks")]
    pub subtasks: Vec<Subtask>,
    pub is_starred: bool,
    /// Milliseconds since the Unix epoch, fixed at creation
    pub created_at: i64,
}

impl Task {
    /// Create an unstarred task with the default color and no subtasks
    pub fn new(id: TaskId, text: impl Into<String>, created_at: i64) -> Self {
        Self {
            id,
            text: text.into(),
            color: DEFAULT_TASK_COLOR.to_string(),
            subtasks: Vec::new(),
            is_starred: false,
            created_at,
        }
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    pub fn with_starred(mut self, starred: bool) -> Self {
        self.is_starred = starred;
        self
    }

    pub fn with_subtask(mut self, subtask: Subtask) -> Self {
        self.subtasks.push(subtask);
        self
    }

    pub fn find_subtask(&self, id: &SubtaskId) -> Option<&Subtask> {
        self.subtasks.iter().find(|s| &s.id == id)
    }

    pub fn find_subtask_mut(&mut self, id: &SubtaskId) -> Option<&mut Subtask> {
        self.subtasks.iter_mut().find(|s| &s.id == id)
    }

    /// (completed, total) subtask counts
    pub fn progress(&self) -> (usize, usize) {
        let done = self.subtasks.iter().filter(|s| s.completed).count();
        (done, self.subtasks.len())
    }

    /// True when the task has at least one subtask and all are completed.
    ///
    /// A task without subtasks is never considered complete.
    pub fn is_complete(&self) -> bool {
        !self.subtasks.is_empty() && self.subtasks.iter().all(|s| s.completed)
    }
}

impl Keyed for Task {
    type Key = TaskId;

    fn key(&self) -> &TaskId {
        &self.id
    }
}

/// A checklist item owned by exactly one task
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subtask {
    pub id: SubtaskId,
    pub text: String,
    pub completed: bool,
}

impl Subtask {
    /// Create an incomplete subtask
    pub fn new(id: SubtaskId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            completed: false,
        }
    }

    pub fn with_completed(mut self, completed: bool) -> Self {
        self.completed = completed;
        self
    }
}

impl Keyed for Subtask {
    type Key = SubtaskId;

    fn key(&self) -> &SubtaskId {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sub(id: &str, completed: bool) -> Subtask {
        Subtask::new(SubtaskId::from(id), id).with_completed(completed)
    }

    #[test]
    fn test_task_creation() {
        let task = Task::new(TaskId::from("task-1"), "Test task", 1_000);
        assert_eq!(task.text, "Test task");
        assert_eq!(task.color, DEFAULT_TASK_COLOR);
        assert!(!task.is_starred);
        assert!(task.subtasks.is_empty());
        assert_eq!(task.created_at, 1_000);
    }

    #[test]
    fn test_is_complete() {
        let empty = Task::new(TaskId::from("task-1"), "t", 0);
        assert!(!empty.is_complete());

        let partial = Task::new(TaskId::from("task-2"), "t", 0)
            .with_subtask(sub("subtask-1", true))
            .with_subtask(sub("subtask-2", false));
        assert!(!partial.is_complete());
        assert_eq!(partial.progress(), (1, 2));

        let done = Task::new(TaskId::from("task-3"), "t", 0).with_subtask(sub("subtask-3", true));
        assert!(done.is_complete());
    }

    #[test]
    fn test_task_serialization_uses_camel_case() {
        let task = Task::new(TaskId::from("task-1"), "t", 5)
            .with_starred(true)
            .with_subtask(sub("subtask-1", false));
        let json = serde_json::to_value(&task).unwrap();
        assert_eq!(json["isStarred"], true);
        assert_eq!(json["createdAt"], 5);
        assert_eq!(json["subTasks"][0]["id"], "subtask-1");

        let parsed: Task = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, task);
    }
}
