use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};
use todo_core::{ListBody, RowView, TodoView, Transport};

use crate::app::{App, InputMode};

pub fn draw<T: Transport>(f: &mut Frame, app: &mut App<T>) {
    let view = app.view();
    let banner_height = if view.banner.is_some() { 3 } else { 0 };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),             // Header
            Constraint::Length(3),             // Input
            Constraint::Length(banner_height), // Error banner
            Constraint::Min(1),                // Tasks
            Constraint::Length(1),             // Remaining count
            Constraint::Length(1),             // Help
        ])
        .split(f.area());

    let header = Paragraph::new("Todo App")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_type(BorderType::Rounded));
    f.render_widget(header, chunks[0]);

    draw_input(f, &view, app.input_mode, chunks[1]);

    if let Some(message) = &view.banner {
        let banner = Paragraph::new(Line::from(vec![
            Span::styled(message.as_str(), Style::default().fg(Color::Red)),
            Span::styled("  (x to dismiss)", Style::default().fg(Color::DarkGray)),
        ]))
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(Color::Red)));
        f.render_widget(banner, chunks[2]);
    }

    draw_tasks(f, app, &view.body, chunks[3]);

    if let Some(remaining) = view.remaining {
        let counter = Paragraph::new(remaining.label()).style(Style::default().fg(Color::Gray));
        f.render_widget(counter, chunks[4]);
    }

    let help = match app.input_mode {
        InputMode::Normal => "a: Add | space: Toggle | d: Delete | r: Refresh | j/k: Navigate | q: Quit",
        InputMode::Editing => "enter: Add | esc: Back",
    };
    let footer = Paragraph::new(help)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    f.render_widget(footer, chunks[5]);
}

fn draw_input(f: &mut Frame, view: &TodoView, mode: InputMode, area: Rect) {
    let editing = mode == InputMode::Editing;
    let text_style = if view.input_enabled {
        Style::default()
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let text = if view.draft_text.is_empty() && !editing {
        Span::styled("Add a new task...", Style::default().fg(Color::DarkGray))
    } else {
        Span::styled(view.draft_text.as_str(), text_style)
    };

    let add_style = if view.add_enabled {
        Style::default().fg(Color::White).bg(Color::Blue)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let border_style = if editing {
        Style::default().fg(Color::Blue)
    } else {
        Style::default()
    };

    let input = Paragraph::new(Line::from(vec![
        text,
        Span::raw("  "),
        Span::styled(format!(" {} ", view.add_label), add_style),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border_style),
    );
    f.render_widget(input, area);

    if editing {
        let x = area.x + 1 + view.draft_text.chars().count() as u16;
        f.set_cursor_position((x.min(area.right().saturating_sub(2)), area.y + 1));
    }
}

fn draw_tasks<T: Transport>(f: &mut Frame, app: &mut App<T>, body: &ListBody, area: Rect) {
    let block = Block::default()
        .title(" Tasks ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);

    let rows = match body {
        ListBody::Loading => return placeholder(f, "Loading tasks...", block, area),
        ListBody::Empty => return placeholder(f, "No tasks found", block, area),
        ListBody::Rows(rows) => rows,
    };

    let items: Vec<ListItem> = rows.iter().map(row_item).collect();
    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD))
        .highlight_symbol(">> ");
    f.render_stateful_widget(list, area, &mut app.list_state);
}

fn row_item(row: &RowView) -> ListItem<'_> {
    let (marker, text_style) = if row.completed {
        (
            "[x] ",
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::CROSSED_OUT),
        )
    } else {
        ("[ ] ", Style::default())
    };
    ListItem::new(Line::from(vec![
        Span::styled(marker, Style::default().fg(Color::Green)),
        Span::styled(row.text.as_str(), text_style),
    ]))
}

fn placeholder(f: &mut Frame, message: &str, block: Block, area: Rect) {
    let paragraph = Paragraph::new(message)
        .style(Style::default().fg(Color::Gray))
        .alignment(Alignment::Center)
        .block(block);
    f.render_widget(paragraph, area);
}
