//! UI rendering for the TUI

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
};

use crate::format;
use crate::manager::Filter;
use crate::store::ItemStore;

use super::app::{App, Mode};
use super::state::NoticeKind;

/// Main draw function - orchestrates all rendering
pub fn draw<S: ItemStore>(frame: &mut Frame, app: &App<S>) {
    let area = frame.area();

    let main_layout = Layout::vertical([
        Constraint::Length(1), // Header
        Constraint::Length(1), // Filter bar
        Constraint::Length(3), // Input bar
        Constraint::Length(1), // Notice region
        Constraint::Min(5),    // Item table
        Constraint::Length(1), // Footer
    ])
    .split(area);

    draw_header(frame, app, main_layout[0]);
    draw_filter_bar(frame, app, main_layout[1]);
    draw_input_bar(frame, app, main_layout[2]);
    draw_notice(frame, app, main_layout[3]);
    draw_table(frame, app, main_layout[4]);
    draw_footer(frame, app, main_layout[5]);
}

fn draw_header<S: ItemStore>(frame: &mut Frame, app: &App<S>, area: Rect) {
    let total = app.manager.len();
    let in_cart = app.manager.filter_items(Filter::Added).len();

    let header_text = format!(
        " carted │ {} item(s) │ {} in cart │ showing {}/{}",
        total,
        in_cart,
        app.visible.len(),
        total
    );

    let header =
        Paragraph::new(header_text).style(Style::default().bg(Color::Blue).fg(Color::White).bold());

    frame.render_widget(header, area);
}

fn draw_filter_bar<S: ItemStore>(frame: &mut Frame, app: &App<S>, area: Rect) {
    let mut spans = vec![Span::raw(" Filter: ")];

    let filters = [
        (Filter::All, "1:All"),
        (Filter::Added, "2:Added to Cart"),
        (Filter::NotAdded, "3:Not Added to Cart"),
    ];
    for (filter, label) in filters {
        let style = if app.filter == filter {
            Style::default().fg(Color::Black).bg(Color::Yellow)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::styled(format!("[{}]", label), style));
        spans.push(Span::raw(" "));
    }

    let filter_bar = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(filter_bar, area);
}

fn draw_input_bar<S: ItemStore>(frame: &mut Frame, app: &App<S>, area: Rect) {
    let title = if app.edit.is_editing() {
        " Update item "
    } else {
        " Add item "
    };

    let border_style = if app.mode == Mode::Input {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let mut spans = vec![Span::raw(app.input.as_str())];
    if app.mode == Mode::Input {
        spans.push(Span::styled("_", Style::default().fg(Color::Cyan)));
    }

    let input = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(title),
    );

    frame.render_widget(input, area);
}

fn draw_notice<S: ItemStore>(frame: &mut Frame, app: &App<S>, area: Rect) {
    let Some(notice) = &app.notice else {
        return;
    };

    let style = match notice.kind {
        NoticeKind::Success => Style::default().fg(Color::Green).bold(),
        NoticeKind::Error => Style::default().fg(Color::Red).bold(),
    };

    let line = Paragraph::new(format!(" {}", notice.text)).style(style);
    frame.render_widget(line, area);
}

fn draw_table<S: ItemStore>(frame: &mut Frame, app: &App<S>, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title(" Items ");

    if app.visible.is_empty() {
        // Placeholder row spanning the whole table
        let empty = Paragraph::new("No task found")
            .style(Style::default().fg(Color::DarkGray))
            .centered()
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let header = Row::new(vec!["Item", "Status", "Id"])
        .style(Style::default().fg(Color::White).bold())
        .bottom_margin(1);

    let rows: Vec<Row> = app
        .visible
        .iter()
        .map(|item| {
            let status_style = if item.completed {
                Style::default().fg(Color::Green)
            } else {
                Style::default().fg(Color::Yellow)
            };
            Row::new(vec![
                // Stored text is re-truncated at render time
                Cell::from(format::format_item(&item.text)),
                Cell::from(item.status_label()).style(status_style),
                Cell::from(item.id.clone()).style(Style::default().fg(Color::DarkGray)),
            ])
        })
        .collect();

    let widths = [
        Constraint::Length((format::MAX_ITEM_LEN + format::ELLIPSIS.len()) as u16),
        Constraint::Length(format::NOT_ADDED_LABEL.len() as u16),
        Constraint::Min(12),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .row_highlight_style(Style::default().bg(Color::Blue).fg(Color::White))
        .highlight_symbol("> ");

    let mut state = TableState::default().with_selected(Some(app.selected));
    frame.render_stateful_widget(table, area, &mut state);
}

fn draw_footer<S: ItemStore>(frame: &mut Frame, app: &App<S>, area: Rect) {
    let keybinds = match app.mode {
        Mode::Normal => {
            " i:add  e:edit  Space:toggle  d:delete  C:clear all  1/2/3:filter  j/k:move  q:quit"
        }
        Mode::Input => " Enter:save  Esc:cancel",
    };

    let footer =
        Paragraph::new(keybinds).style(Style::default().bg(Color::DarkGray).fg(Color::White));

    frame.render_widget(footer, area);
}
