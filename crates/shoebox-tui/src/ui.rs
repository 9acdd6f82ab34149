//! Form rendering.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Gauge, List, ListItem, Paragraph};

use crate::app::{App, Field};

/// Render the whole form.
pub fn render(frame: &mut Frame, app: &App) {
    let theme = &app.theme;

    frame.render_widget(
        Block::default().style(Style::default().bg(theme.background)),
        frame.area(),
    );

    let [header, input, output, gauge, log, footer] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Min(3),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    render_header(frame, app, header);
    render_field(
        frame,
        app,
        input,
        " Source directory ",
        &app.input_value,
        app.focus == Field::Input,
    );
    render_field(
        frame,
        app,
        output,
        " Destination directory ",
        &app.output_value,
        app.focus == Field::Output,
    );
    render_gauge(frame, app, gauge);
    render_log(frame, app, log);
    render_footer(frame, app, footer);
}

fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let title = Line::from(vec![
        Span::styled(" shoebox ", app.theme.header),
        Span::styled("— monthly archive bundler", app.theme.footer),
    ]);
    frame.render_widget(Paragraph::new(title), area);
}

fn render_field(
    frame: &mut Frame,
    app: &App,
    area: Rect,
    title: &str,
    value: &str,
    focused: bool,
) {
    let theme = &app.theme;
    let border = if focused && !app.running {
        theme.border_focused
    } else {
        theme.border
    };
    let style = if focused && !app.running {
        theme.input_focused
    } else {
        theme.input
    };

    // A block cursor marks the editable field.
    let text = if focused && !app.running {
        format!("{value}█")
    } else {
        value.to_string()
    };

    let block = Block::bordered()
        .title(Span::styled(title, theme.label))
        .border_style(border);
    frame.render_widget(Paragraph::new(text).style(style).block(block), area);
}

fn render_gauge(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let (ratio, label) = match &app.progress {
        Some(progress) => {
            let pct = progress.percentage();
            (
                (pct / 100.0).clamp(0.0, 1.0),
                format!(
                    "{:.0}% ({}/{} files)",
                    pct, progress.files_completed, progress.files_total
                ),
            )
        }
        None => (0.0, "idle".to_string()),
    };

    let block = Block::bordered()
        .title(Span::styled(" Progress ", theme.label))
        .border_style(theme.border);
    frame.render_widget(
        Gauge::default()
            .block(block)
            .gauge_style(theme.progress_bar)
            .ratio(ratio)
            .label(label),
        area,
    );
}

fn render_log(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let height = area.height.saturating_sub(2) as usize;

    // Window the log by the scroll offset, counted from the bottom.
    let end = app.log.len().saturating_sub(app.log_scroll);
    let start = end.saturating_sub(height);
    let items: Vec<ListItem> = app.log[start..end]
        .iter()
        .map(|line| {
            ListItem::new(Line::styled(
                line.text.clone(),
                Style::default().fg(theme.level_color(line.level)),
            ))
        })
        .collect();

    let title = if app.log_scroll > 0 {
        format!(" Log (scrolled {} lines) ", app.log_scroll)
    } else {
        " Log ".to_string()
    };
    let block = Block::bordered()
        .title(Span::styled(title, theme.label))
        .border_style(theme.border);
    frame.render_widget(List::new(items).block(block), area);
}

fn render_footer(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let line = if app.running {
        Line::from(Span::styled(
            " archiving… start disabled until the run finishes",
            theme.footer,
        ))
    } else {
        Line::from(vec![
            Span::styled(" Tab ", theme.help_key),
            Span::styled("switch field", theme.help_desc),
            Span::styled("  Enter ", theme.help_key),
            Span::styled("start", theme.help_desc),
            Span::styled("  ↑/↓ ", theme.help_key),
            Span::styled("scroll log", theme.help_desc),
            Span::styled("  Esc ", theme.help_key),
            Span::styled("quit", theme.help_desc),
        ])
    };
    frame.render_widget(Paragraph::new(line), area);
}
