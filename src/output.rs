use crate::model::Task;
use crate::store::TaskList;

pub const CURRENT_TITLE: &str = "Today's Tasks";
pub const COMPLETED_TITLE: &str = "Completed";

/// Render both views as plain text, one section each.
pub fn format_views(list: &TaskList) -> String {
    let mut out = String::new();
    out.push_str(CURRENT_TITLE);
    out.push('\n');
    for task in list.current_tasks() {
        write_task(&mut out, task);
    }
    out.push('\n');
    out.push_str(COMPLETED_TITLE);
    out.push('\n');
    for task in list.completed_tasks() {
        write_task(&mut out, task);
    }
    out
}

pub fn format_task_line(task: &Task) -> String {
    format!("{} [{}] {}", task.icon(), task.id, task.text)
}

fn write_task(out: &mut String, task: &Task) {
    out.push_str(&format_task_line(task));
    out.push('\n');
    for subtask in &task.subtasks {
        out.push_str(&format!(
            "    {} [{}] {}\n",
            subtask.icon(),
            subtask.id,
            subtask.text
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_list_has_both_headers() {
        let list = TaskList::new();
        assert_eq!(format_views(&list), "Today's Tasks\n\nCompleted\n");
    }

    #[test]
    fn tasks_split_by_section_with_subtasks() {
        let mut list = TaskList::new();
        let milk = list.add_task("buy milk").unwrap();
        let dog = list.add_task("walk dog").unwrap();
        let leash = list.add_subtask(dog, "find leash").unwrap();
        list.toggle_subtask(dog, leash);
        list.toggle_task(milk);

        let out = format_views(&list);
        assert_eq!(
            out,
            "Today's Tasks\n\
             . [2] walk dog\n    x [3] find leash\n\
             \n\
             Completed\n\
             x [1] buy milk\n"
        );
    }
}
