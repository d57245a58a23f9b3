use ratatui::widgets::ListState;

use crate::model::{SubtaskId, TaskId};
use crate::store::TaskList;

/// A selectable line on the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Row {
    Task(TaskId),
    Subtask(TaskId, SubtaskId),
}

impl Row {
    pub fn task_id(self) -> TaskId {
        match self {
            Row::Task(id) | Row::Subtask(id, _) => id,
        }
    }
}

/// Which widget receives typed characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    List,
    TaskInput,
    SubtaskInput,
}

pub struct App {
    pub list: TaskList,
    /// Current-section rows followed by completed-section rows.
    pub rows: Vec<Row>,
    pub current_rows: usize,
    pub cursor: usize,
    pub focus: Focus,
    pub show_help: bool,
    /// Scroll state of the "Today's Tasks" panel.
    pub current_list: ListState,
    /// Scroll state of the "Completed" panel.
    pub completed_list: ListState,
}

impl App {
    pub fn new(list: TaskList) -> Self {
        let mut app = App {
            list,
            rows: Vec::new(),
            current_rows: 0,
            cursor: 0,
            focus: Focus::List,
            show_help: false,
            current_list: ListState::default(),
            completed_list: ListState::default(),
        };
        app.refresh();
        app
    }

    /// Rebuild rows from the list's views, keeping the cursor on the same
    /// row when it still exists.
    pub fn refresh(&mut self) {
        let selected = self.selected_row();

        let mut rows = Vec::new();
        for task in self.list.current_tasks() {
            push_rows(&mut rows, task);
        }
        self.current_rows = rows.len();
        for task in self.list.completed_tasks() {
            push_rows(&mut rows, task);
        }
        self.rows = rows;

        if let Some(pos) = selected.and_then(|r| self.rows.iter().position(|x| *x == r)) {
            self.cursor = pos;
        }
        self.clamp_cursor();
    }

    fn clamp_cursor(&mut self) {
        if self.rows.is_empty() {
            self.cursor = 0;
        } else if self.cursor >= self.rows.len() {
            self.cursor = self.rows.len() - 1;
        }
    }

    pub fn selected_row(&self) -> Option<Row> {
        self.rows.get(self.cursor).copied()
    }

    pub fn move_up(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
        }
    }

    pub fn move_down(&mut self) {
        if !self.rows.is_empty() && self.cursor < self.rows.len() - 1 {
            self.cursor += 1;
        }
    }

    pub fn toggle_selected(&mut self) {
        match self.selected_row() {
            Some(Row::Task(id)) => self.list.toggle_task(id),
            Some(Row::Subtask(task, sub)) => self.list.toggle_subtask(task, sub),
            None => return,
        }
        self.refresh();
    }

    pub fn toggle_all(&mut self) {
        self.list.toggle_all_tasks();
        self.refresh();
    }

    /// Open or close subtask entry for the task under the cursor.
    pub fn toggle_subtask_entry(&mut self) {
        let Some(row) = self.selected_row() else {
            return;
        };
        self.list.select_task_for_subtask_entry(row.task_id());
        self.focus = if self.list.selected_task_id().is_some() {
            Focus::SubtaskInput
        } else {
            Focus::List
        };
    }

    pub fn close_subtask_entry(&mut self) {
        if let Some(id) = self.list.selected_task_id() {
            self.list.select_task_for_subtask_entry(id);
        }
        self.focus = Focus::List;
    }

    pub fn push_char(&mut self, c: char) {
        self.edit_input(|buf| buf.push(c));
    }

    pub fn pop_char(&mut self) {
        self.edit_input(|buf| {
            buf.pop();
        });
    }

    pub fn clear_input(&mut self) {
        self.edit_input(String::clear);
    }

    fn edit_input(&mut self, f: impl FnOnce(&mut String)) {
        match self.focus {
            Focus::TaskInput => {
                let mut buf = self.list.pending_task_text().to_string();
                f(&mut buf);
                self.list.set_pending_task_text(&buf);
            }
            Focus::SubtaskInput => {
                let mut buf = self.list.pending_subtask_text().to_string();
                f(&mut buf);
                self.list.set_pending_subtask_text(&buf);
            }
            Focus::List => {}
        }
    }

    /// Add the pending task text as a new task. Focus stays on the input so
    /// several tasks can be entered in a row.
    pub fn submit_task(&mut self) {
        let text = self.list.pending_task_text().to_string();
        if self.list.add_task(&text).is_some() {
            self.refresh();
        }
    }

    pub fn submit_subtask(&mut self) {
        let Some(task_id) = self.list.selected_task_id() else {
            return;
        };
        let text = self.list.pending_subtask_text().to_string();
        if self.list.add_subtask(task_id, &text).is_some() {
            self.refresh();
        }
    }

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }
}

fn push_rows(rows: &mut Vec<Row>, task: &crate::model::Task) {
    rows.push(Row::Task(task.id));
    rows.extend(task.subtasks.iter().map(|s| Row::Subtask(task.id, s.id)));
}
