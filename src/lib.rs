pub mod logging;
pub mod model;
pub mod output;
pub mod script;
pub mod store;
pub mod tui;

pub use model::{Subtask, SubtaskId, Task, TaskId};
pub use store::{Action, Snapshot, TaskList};
