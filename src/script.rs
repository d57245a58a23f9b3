//! Batch mode: drive a `TaskList` from newline-separated steps.
//!
//! Each line is split with POSIX shell quoting and parsed as a `Step`.
//! The whole batch is parsed before anything is applied, so a bad line
//! leaves the list untouched.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};

use crate::model::{SubtaskId, TaskId};
use crate::store::{Action, TaskList};

#[derive(Parser)]
#[command(name = "step", no_binary_name = true, disable_help_subcommand = true)]
struct StepLine {
    #[command(subcommand)]
    step: Step,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Add a task
    Add {
        /// Task text (empty text is ignored)
        #[arg(default_value = "", allow_hyphen_values = true)]
        text: String,
    },
    /// Flip a task's completed flag
    Toggle { id: u64 },
    /// Complete every task, or reopen all if all are complete
    #[command(name = "toggle-all")]
    ToggleAll,
    /// Add a subtask under a task
    #[command(name = "add-subtask")]
    AddSubtask {
        task: u64,
        #[arg(default_value = "", allow_hyphen_values = true)]
        text: String,
    },
    /// Flip a subtask's completed flag
    #[command(name = "toggle-subtask")]
    ToggleSubtask { task: u64, subtask: u64 },
    /// Open or close subtask entry for a task
    Select { task: u64 },
    /// Set the pending task text
    Type {
        #[arg(default_value = "", allow_hyphen_values = true)]
        text: String,
    },
    /// Set the pending subtask text
    #[command(name = "type-subtask")]
    TypeSubtask {
        #[arg(default_value = "", allow_hyphen_values = true)]
        text: String,
    },
}

impl From<Step> for Action {
    fn from(step: Step) -> Self {
        match step {
            Step::Add { text } => Action::AddTask(text),
            Step::Toggle { id } => Action::ToggleTask(TaskId(id)),
            Step::ToggleAll => Action::ToggleAllTasks,
            Step::AddSubtask { task, text } => Action::AddSubtask(TaskId(task), text),
            Step::ToggleSubtask { task, subtask } => {
                Action::ToggleSubtask(TaskId(task), SubtaskId(subtask))
            }
            Step::Select { task } => Action::SelectTaskForSubtaskEntry(TaskId(task)),
            Step::Type { text } => Action::SetPendingTaskText(text),
            Step::TypeSubtask { text } => Action::SetPendingSubtaskText(text),
        }
    }
}

/// Parse a single non-blank line into a step.
pub fn parse_line(line: &str) -> Result<Step> {
    let Some(tokens) = shlex::split(line) else {
        bail!("unbalanced quotes");
    };
    let parsed = StepLine::try_parse_from(&tokens)
        .map_err(|e| anyhow::anyhow!(e.render().to_string().trim_end().to_string()))?;
    Ok(parsed.step)
}

/// Parse a whole batch. Blank lines and `#` comments are skipped.
pub fn parse(input: &str) -> Result<Vec<Step>> {
    let mut steps = Vec::new();
    for (i, line) in input.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let step = parse_line(trimmed).with_context(|| format!("line {}: {trimmed}", i + 1))?;
        steps.push(step);
    }
    Ok(steps)
}

/// Parse `input` and apply every step to `list`. Returns the number of
/// steps applied.
pub fn run(list: &mut TaskList, input: &str) -> Result<usize> {
    let steps = parse(input)?;
    let count = steps.len();
    for step in steps {
        log::debug!("exec: {step:?}");
        list.dispatch(step.into());
    }
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_quoted_text() {
        let step = parse_line(r#"add "buy milk""#).unwrap();
        assert_eq!(
            step,
            Step::Add {
                text: "buy milk".into()
            }
        );
    }

    #[test]
    fn apostrophe_inside_double_quotes() {
        let step = parse_line(r#"add "Here's one""#).unwrap();
        assert_eq!(
            step,
            Step::Add {
                text: "Here's one".into()
            }
        );
    }

    #[test]
    fn add_without_text_is_empty_add() {
        assert_eq!(parse_line("add").unwrap(), Step::Add { text: String::new() });
    }

    #[test]
    fn text_may_start_with_hyphen() {
        assert_eq!(
            parse_line(r#"add "-5 minutes of stretching""#).unwrap(),
            Step::Add {
                text: "-5 minutes of stretching".into()
            }
        );
        assert_eq!(
            parse_line(r#"add-subtask 1 "-x marks the spot""#).unwrap(),
            Step::AddSubtask {
                task: 1,
                text: "-x marks the spot".into()
            }
        );
        assert_eq!(
            parse_line("type -draft").unwrap(),
            Step::Type {
                text: "-draft".into()
            }
        );
        assert_eq!(
            parse_line("type-subtask -x").unwrap(),
            Step::TypeSubtask { text: "-x".into() }
        );
    }

    #[test]
    fn parses_every_step() {
        let steps = parse(
            "add a\n\
             toggle 1\n\
             toggle-all\n\
             add-subtask 1 'step one'\n\
             toggle-subtask 1 2\n\
             select 1\n\
             type draft\n\
             type-subtask sub\n",
        )
        .unwrap();
        assert_eq!(steps.len(), 8);
        assert_eq!(steps[2], Step::ToggleAll);
        assert_eq!(
            steps[3],
            Step::AddSubtask {
                task: 1,
                text: "step one".into()
            }
        );
    }

    #[test]
    fn skips_blank_lines_and_comments() {
        let steps = parse("\n# setup\nadd a\n   \n").unwrap();
        assert_eq!(steps.len(), 1);
    }

    #[test]
    fn bad_line_reports_line_number_and_applies_nothing() {
        let mut list = TaskList::new();
        let err = run(&mut list, "add a\ntoggle notanumber\n").unwrap_err();
        assert!(format!("{err:#}").contains("line 2"));
        assert!(list.tasks().is_empty());
    }

    #[test]
    fn unknown_step_is_rejected() {
        assert!(parse_line("delete 1").is_err());
    }

    #[test]
    fn unbalanced_quotes_rejected() {
        let err = parse_line("add \"oops").unwrap_err();
        assert!(err.to_string().contains("unbalanced"));
    }

    #[test]
    fn run_applies_steps_in_order() {
        let mut list = TaskList::new();
        let n = run(
            &mut list,
            "add a\nadd b\nadd-subtask 2 s\ntoggle 1\nselect 2\n",
        )
        .unwrap();
        assert_eq!(n, 5);
        assert_eq!(list.completed_tasks().count(), 1);
        assert_eq!(list.task(TaskId(2)).unwrap().subtasks.len(), 1);
        assert_eq!(list.selected_task_id(), Some(TaskId(2)));
    }
}
