use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::{App, Focus};

/// Result of handling a key press.
#[derive(Debug, PartialEq, Eq)]
pub enum KeyAction {
    Quit,
    Continue,
}

/// Handle a key press. Returns an action indicating what the event loop should do.
pub fn handle_key(app: &mut App, key: KeyEvent) -> KeyAction {
    if app.show_help {
        app.toggle_help();
        return KeyAction::Continue;
    }
    match app.focus {
        Focus::List => handle_list(app, key),
        Focus::TaskInput | Focus::SubtaskInput => handle_input(app, key),
    }
}

/// Ctrl or Alt chords are commands, never text.
fn is_modified(key: KeyEvent) -> bool {
    key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
}

fn handle_list(app: &mut App, key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            return KeyAction::Quit
        }
        KeyCode::Char(_) if is_modified(key) => {}
        KeyCode::Char('q') | KeyCode::Esc => return KeyAction::Quit,
        KeyCode::Char('j') | KeyCode::Down => app.move_down(),
        KeyCode::Char('k') | KeyCode::Up => app.move_up(),
        KeyCode::Char(' ') | KeyCode::Char('x') => app.toggle_selected(),
        KeyCode::Char('T') => app.toggle_all(),
        KeyCode::Char('i') | KeyCode::Char('a') => app.focus = Focus::TaskInput,
        KeyCode::Char('s') => app.toggle_subtask_entry(),
        KeyCode::Char('?') => app.toggle_help(),
        _ => {}
    }
    KeyAction::Continue
}

fn handle_input(app: &mut App, key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Esc => {
            if app.focus == Focus::SubtaskInput {
                app.close_subtask_entry();
            } else {
                app.focus = Focus::List;
            }
        }
        KeyCode::Enter => match app.focus {
            Focus::TaskInput => app.submit_task(),
            Focus::SubtaskInput => app.submit_subtask(),
            Focus::List => {}
        },
        KeyCode::Backspace => app.pop_char(),
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => app.clear_input(),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            return KeyAction::Quit
        }
        KeyCode::Char(c) if !is_modified(key) => app.push_char(c),
        _ => {}
    }
    KeyAction::Continue
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TaskId;
    use crate::store::TaskList;

    fn press(app: &mut App, code: KeyCode) -> KeyAction {
        handle_key(app, KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn type_str(app: &mut App, s: &str) {
        for c in s.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn add_task_through_keys() {
        let mut app = App::new(TaskList::new());
        press(&mut app, KeyCode::Char('i'));
        type_str(&mut app, "buy milk");
        press(&mut app, KeyCode::Enter);
        // Empty submit is ignored.
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Esc);

        assert_eq!(app.list.tasks().len(), 1);
        assert_eq!(app.list.tasks()[0].text, "buy milk");
        assert_eq!(app.focus, Focus::List);
    }

    #[test]
    fn q_in_input_is_text_not_quit() {
        let mut app = App::new(TaskList::new());
        press(&mut app, KeyCode::Char('a'));
        assert_eq!(press(&mut app, KeyCode::Char('q')), KeyAction::Continue);
        assert_eq!(app.list.pending_task_text(), "q");
    }

    #[test]
    fn ctrl_u_clears_input() {
        let mut app = App::new(TaskList::new());
        press(&mut app, KeyCode::Char('i'));
        type_str(&mut app, "draft");
        handle_key(
            &mut app,
            KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL),
        );
        assert_eq!(app.list.pending_task_text(), "");
    }

    #[test]
    fn toggle_and_toggle_all_keys() {
        let mut list = TaskList::new();
        list.add_task("a");
        list.add_task("b");
        let mut app = App::new(list);

        press(&mut app, KeyCode::Char(' '));
        assert_eq!(app.list.completed_tasks().count(), 1);
        press(&mut app, KeyCode::Char('T'));
        assert_eq!(app.list.completed_tasks().count(), 2);
        press(&mut app, KeyCode::Char('T'));
        assert_eq!(app.list.current_tasks().count(), 2);
    }

    #[test]
    fn subtask_entry_and_escape() {
        let mut list = TaskList::new();
        list.add_task("a");
        let mut app = App::new(list);

        press(&mut app, KeyCode::Char('s'));
        type_str(&mut app, "step");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.list.task(TaskId(1)).unwrap().subtasks[0].text, "step");
        assert_eq!(app.list.selected_task_id(), Some(TaskId(1)));

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.list.selected_task_id(), None);
        assert_eq!(press(&mut app, KeyCode::Char('q')), KeyAction::Quit);
    }

    #[test]
    fn ctrl_c_quits_from_list() {
        let mut app = App::new(TaskList::new());
        let action = handle_key(
            &mut app,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        );
        assert_eq!(action, KeyAction::Quit);
    }

    #[test]
    fn chords_are_not_typed_into_input() {
        let mut app = App::new(TaskList::new());
        press(&mut app, KeyCode::Char('i'));
        type_str(&mut app, "ab");
        handle_key(
            &mut app,
            KeyEvent::new(KeyCode::Char('x'), KeyModifiers::ALT),
        );
        handle_key(
            &mut app,
            KeyEvent::new(KeyCode::Char('w'), KeyModifiers::CONTROL),
        );
        handle_key(
            &mut app,
            KeyEvent::new(KeyCode::Char('C'), KeyModifiers::SHIFT),
        );
        assert_eq!(app.list.pending_task_text(), "abC");
    }

    #[test]
    fn chords_do_not_trigger_list_keys() {
        let mut list = TaskList::new();
        list.add_task("a");
        let mut app = App::new(list);
        handle_key(
            &mut app,
            KeyEvent::new(KeyCode::Char('x'), KeyModifiers::CONTROL),
        );
        assert_eq!(app.list.completed_tasks().count(), 0);
    }

    #[test]
    fn help_swallows_next_key() {
        let mut app = App::new(TaskList::new());
        press(&mut app, KeyCode::Char('?'));
        assert!(app.show_help);
        assert_eq!(press(&mut app, KeyCode::Char('q')), KeyAction::Continue);
        assert!(!app.show_help);
    }
}
