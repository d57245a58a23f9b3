//! In-memory task list state.
//!
//! `TaskList` owns every task and subtask along with the text-entry state of
//! the screen. All operations are synchronous and infallible: empty text on
//! add and unknown ids on toggle are silent no-ops.

use log::debug;
use serde::Serialize;

use crate::model::{Subtask, SubtaskId, Task, TaskId};

/// One state transition of the task list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    AddTask(String),
    ToggleTask(TaskId),
    ToggleAllTasks,
    AddSubtask(TaskId, String),
    ToggleSubtask(TaskId, SubtaskId),
    SelectTaskForSubtaskEntry(TaskId),
    SetPendingTaskText(String),
    SetPendingSubtaskText(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskList {
    tasks: Vec<Task>,
    pending_task_text: String,
    pending_subtask_text: String,
    selected_task_id: Option<TaskId>,
    last_id: u64,
}

/// Everything a renderer reads from the task list.
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot<'a> {
    pub current: Vec<&'a Task>,
    pub completed: Vec<&'a Task>,
    pub pending_task_text: &'a str,
    pub pending_subtask_text: &'a str,
    pub selected_task_id: Option<TaskId>,
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn task(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn pending_task_text(&self) -> &str {
        &self.pending_task_text
    }

    pub fn pending_subtask_text(&self) -> &str {
        &self.pending_subtask_text
    }

    pub fn selected_task_id(&self) -> Option<TaskId> {
        self.selected_task_id
    }

    /// Tasks not yet completed, in insertion order.
    pub fn current_tasks(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter().filter(|t| !t.completed)
    }

    /// Completed tasks, in insertion order.
    pub fn completed_tasks(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter().filter(|t| t.completed)
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            current: self.current_tasks().collect(),
            completed: self.completed_tasks().collect(),
            pending_task_text: &self.pending_task_text,
            pending_subtask_text: &self.pending_subtask_text,
            selected_task_id: self.selected_task_id,
        }
    }

    fn next_id(&mut self) -> u64 {
        self.last_id += 1;
        self.last_id
    }

    fn task_mut(&mut self, id: TaskId) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|t| t.id == id)
    }

    /// Append a new open task. Returns `None` without touching any state
    /// when `text` is empty.
    pub fn add_task(&mut self, text: &str) -> Option<TaskId> {
        if text.is_empty() {
            debug!("add_task: ignoring empty text");
            return None;
        }
        let id = TaskId(self.next_id());
        self.tasks.push(Task::new(id, text));
        self.pending_task_text.clear();
        debug!("add_task: added task {id}");
        Some(id)
    }

    pub fn toggle_task(&mut self, id: TaskId) {
        match self.task_mut(id) {
            Some(task) => {
                task.completed = !task.completed;
                debug!("toggle_task: task {id} completed={}", task.completed);
            }
            None => debug!("toggle_task: no task {id}"),
        }
    }

    /// Mark every task incomplete if all are complete, otherwise mark every
    /// task complete. Subtasks are left alone.
    pub fn toggle_all_tasks(&mut self) {
        let all_completed = self.tasks.iter().all(|t| t.completed);
        for task in &mut self.tasks {
            task.completed = !all_completed;
        }
        debug!(
            "toggle_all_tasks: {} tasks completed={}",
            self.tasks.len(),
            !all_completed
        );
    }

    /// Append a new open subtask to `task_id`. Returns `None` without touching
    /// any state when `text` is empty or the task does not exist.
    pub fn add_subtask(&mut self, task_id: TaskId, text: &str) -> Option<SubtaskId> {
        if text.is_empty() {
            debug!("add_subtask: ignoring empty text");
            return None;
        }
        if self.task(task_id).is_none() {
            debug!("add_subtask: no task {task_id}");
            return None;
        }
        let id = SubtaskId(self.next_id());
        if let Some(task) = self.task_mut(task_id) {
            task.subtasks.push(Subtask::new(id, text));
        }
        self.pending_subtask_text.clear();
        debug!("add_subtask: added subtask {id} to task {task_id}");
        Some(id)
    }

    pub fn toggle_subtask(&mut self, task_id: TaskId, subtask_id: SubtaskId) {
        let subtask = self
            .task_mut(task_id)
            .and_then(|t| t.subtasks.iter_mut().find(|s| s.id == subtask_id));
        match subtask {
            Some(subtask) => {
                subtask.completed = !subtask.completed;
                debug!(
                    "toggle_subtask: subtask {subtask_id} of task {task_id} completed={}",
                    subtask.completed
                );
            }
            None => debug!("toggle_subtask: no subtask {subtask_id} in task {task_id}"),
        }
    }

    /// Open subtask entry for `task_id`, or close it if it is already open.
    pub fn select_task_for_subtask_entry(&mut self, task_id: TaskId) {
        if self.selected_task_id == Some(task_id) {
            self.selected_task_id = None;
        } else {
            self.selected_task_id = Some(task_id);
        }
        debug!(
            "select_task_for_subtask_entry: selected={:?}",
            self.selected_task_id
        );
    }

    pub fn set_pending_task_text(&mut self, text: &str) {
        self.pending_task_text = text.to_string();
    }

    pub fn set_pending_subtask_text(&mut self, text: &str) {
        self.pending_subtask_text = text.to_string();
    }

    /// Apply one action in place.
    pub fn dispatch(&mut self, action: Action) {
        match action {
            Action::AddTask(text) => {
                self.add_task(&text);
            }
            Action::ToggleTask(id) => self.toggle_task(id),
            Action::ToggleAllTasks => self.toggle_all_tasks(),
            Action::AddSubtask(task_id, text) => {
                self.add_subtask(task_id, &text);
            }
            Action::ToggleSubtask(task_id, subtask_id) => {
                self.toggle_subtask(task_id, subtask_id)
            }
            Action::SelectTaskForSubtaskEntry(id) => self.select_task_for_subtask_entry(id),
            Action::SetPendingTaskText(text) => self.set_pending_task_text(&text),
            Action::SetPendingSubtaskText(text) => self.set_pending_subtask_text(&text),
        }
    }

    /// Consume this snapshot and return the next one.
    pub fn apply(mut self, action: Action) -> Self {
        self.dispatch(action);
        self
    }
}
