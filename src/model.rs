use std::fmt;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct TaskId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct SubtaskId(pub u64);

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for SubtaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Task {
    pub id: TaskId,
    pub text: String,
    pub completed: bool,
    pub subtasks: Vec<Subtask>,
}

impl Task {
    pub fn new(id: TaskId, text: &str) -> Self {
        Self {
            id,
            text: text.to_string(),
            completed: false,
            subtasks: Vec::new(),
        }
    }

    /// Returns display icon: x=completed, .=open
    pub fn icon(&self) -> &'static str {
        icon(self.completed)
    }

    pub fn subtask(&self, id: SubtaskId) -> Option<&Subtask> {
        self.subtasks.iter().find(|s| s.id == id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Subtask {
    pub id: SubtaskId,
    pub text: String,
    pub completed: bool,
}

impl Subtask {
    pub fn new(id: SubtaskId, text: &str) -> Self {
        Self {
            id,
            text: text.to_string(),
            completed: false,
        }
    }

    pub fn icon(&self) -> &'static str {
        icon(self.completed)
    }
}

fn icon(completed: bool) -> &'static str {
    if completed {
        "x"
    } else {
        "."
    }
}
