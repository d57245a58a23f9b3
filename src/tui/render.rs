use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, Paragraph};

use super::app::{App, Focus, Row};
use crate::model::Task;
use crate::output::{COMPLETED_TITLE, CURRENT_TITLE};

/// Which list panel a row range is drawn into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Current,
    Completed,
}

pub fn render(frame: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Percentage(60),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(frame.area());

    render_input(frame, app, chunks[0]);
    render_section(frame, app, Section::Current, chunks[1]);
    render_section(frame, app, Section::Completed, chunks[2]);
    frame.render_widget(
        Paragraph::new(hint(app.focus)).style(Style::default().fg(Color::DarkGray)),
        chunks[3],
    );

    if app.show_help {
        render_help(frame);
    }
}

fn hint(focus: Focus) -> &'static str {
    match focus {
        Focus::List => "i: new task  space: toggle  T: toggle all  s: subtask  ?: help  q: quit",
        Focus::TaskInput => "Enter: add task  C-u: clear  Esc: back",
        Focus::SubtaskInput => "Enter: add subtask  C-u: clear  Esc: close",
    }
}

fn render_input(frame: &mut Frame, app: &App, area: Rect) {
    let focused = app.focus == Focus::TaskInput;
    let text = app.list.pending_task_text();
    let (content, style) = if text.is_empty() && !focused {
        (
            "Add a new task".to_string(),
            Style::default().fg(Color::DarkGray),
        )
    } else {
        let cursor = if focused { "_" } else { "" };
        (format!("{text}{cursor}"), Style::default())
    };
    let border = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };
    frame.render_widget(
        Paragraph::new(content).style(style).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border)
                .title(" New Task "),
        ),
        area,
    );
}

fn render_section(frame: &mut Frame, app: &mut App, section: Section, area: Rect) {
    let (title, range) = match section {
        Section::Current => (CURRENT_TITLE, 0..app.current_rows),
        Section::Completed => (COMPLETED_TITLE, app.current_rows..app.rows.len()),
    };

    let mut items = Vec::new();
    // Item index of the cursor row; subtask input lines shift items past rows.
    let mut selected = None;
    for i in range {
        let row = app.rows[i];
        let Some(task) = app.list.task(row.task_id()) else {
            continue;
        };
        let line = match row {
            Row::Task(_) => task_line(task),
            Row::Subtask(_, sub_id) => match task.subtask(sub_id) {
                Some(sub) => Line::from(vec![
                    Span::raw("    "),
                    Span::styled(format!("{} ", sub.icon()), status_style(sub.completed)),
                    Span::raw(sub.text.clone()),
                ]),
                None => continue,
            },
        };
        if i == app.cursor {
            selected = Some(items.len());
        }
        items.push(ListItem::new(line));

        if app.list.selected_task_id() == Some(task.id) && is_last_row_of_task(app, i) {
            items.push(subtask_input_item(app));
        }
    }

    let highlight = if app.focus == Focus::List {
        Style::default().bg(Color::DarkGray)
    } else {
        Style::default()
    };
    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {title} ")),
        )
        .highlight_style(highlight);

    let state = match section {
        Section::Current => &mut app.current_list,
        Section::Completed => &mut app.completed_list,
    };
    state.select(selected);
    frame.render_stateful_widget(list, area, state);
}

fn task_line(task: &Task) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{} ", task.icon()), status_style(task.completed)),
        Span::styled(task.text.clone(), Style::default().bold()),
    ])
}

fn is_last_row_of_task(app: &App, i: usize) -> bool {
    match app.rows.get(i + 1) {
        Some(Row::Subtask(task, _)) => *task != app.rows[i].task_id(),
        _ => true,
    }
}

fn subtask_input_item(app: &App) -> ListItem<'static> {
    let focused = app.focus == Focus::SubtaskInput;
    let text = app.list.pending_subtask_text();
    let cursor = if focused { "_" } else { "" };
    ListItem::new(Line::from(vec![
        Span::styled("    + ", Style::default().fg(Color::Cyan)),
        Span::raw(format!("{text}{cursor}")),
    ]))
}

fn status_style(completed: bool) -> Style {
    if completed {
        Style::default().dim()
    } else {
        Style::default().fg(Color::Yellow)
    }
}

/// Center a rectangle within an area.
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

fn render_help(frame: &mut Frame) {
    let term = frame.area();
    let width = 44.min(term.width.saturating_sub(4));
    let height = 14.min(term.height.saturating_sub(2));
    let area = centered_rect(width, height, term);

    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Help ")
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let keys = [
        ("j/Down  ", "Move down"),
        ("k/Up    ", "Move up"),
        ("Space/x ", "Toggle task or subtask"),
        ("T       ", "Toggle all tasks"),
        ("i/a     ", "Type a new task"),
        ("s       ", "Add subtasks to task"),
        ("?       ", "Toggle help"),
        ("q/Esc   ", "Quit"),
    ];
    let mut help_text: Vec<Line> = keys
        .iter()
        .map(|(k, desc)| {
            Line::from(vec![
                Span::styled(*k, Style::default().fg(Color::Cyan)),
                Span::raw(*desc),
            ])
        })
        .collect();
    help_text.push(Line::raw(""));
    help_text.push(Line::from(vec![Span::styled(
        "Text input:",
        Style::default().bold(),
    )]));
    help_text.push(Line::from(vec![
        Span::styled("  Enter   ", Style::default().fg(Color::Cyan)),
        Span::raw("Add"),
    ]));
    help_text.push(Line::from(vec![
        Span::styled("  Esc     ", Style::default().fg(Color::Cyan)),
        Span::raw("Leave input"),
    ]));

    frame.render_widget(Paragraph::new(help_text), inner);
}
