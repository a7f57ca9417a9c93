use crate::app::AppState;
use crate::chime::Chime;
use crate::domain::{format_countdown, RunStatus, TimerConfig};
use crate::focus::TimerSnapshot;
use crate::persistence::KeyValueStore;
use crate::ticker::TickScheduler;
use crate::ui::layout::centered_rows;
use crate::ui::styles::{
    border_style, countdown_style, default_style, gauge_style, idle_style, running_style,
    title_style,
};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

/// Lines shown above the progress gauge
pub fn timer_lines(snapshot: &TimerSnapshot, config: &TimerConfig, today_total: &str) -> Vec<Line<'static>> {
    let status = RunStatus::from_running(snapshot.is_running);
    let status_style = match status {
        RunStatus::Running => running_style(),
        RunStatus::Idle => idle_style(),
    };

    vec![
        Line::from(vec![
            Span::raw(format!("{} ", snapshot.mode.symbol())),
            Span::styled(snapshot.mode.name().to_uppercase(), countdown_style(snapshot.mode)),
        ]),
        Line::raw(""),
        Line::from(Span::styled(
            format_countdown(snapshot.remaining_secs),
            countdown_style(snapshot.mode),
        )),
        Line::raw(""),
        Line::from(Span::styled(format!("[{}]", status.to_tag()), status_style)),
        Line::from(Span::styled(
            snapshot.mode.contextual_phrase().to_string(),
            default_style(),
        )),
        Line::raw(""),
        Line::from(vec![
            Span::styled("Work: ", title_style()),
            Span::raw(format!("{} min   ", config.work_secs() / 60)),
            Span::styled("Break: ", title_style()),
            Span::raw(format!("{} min", config.break_secs() / 60)),
        ]),
        Line::from(vec![
            Span::styled("Today: ", title_style()),
            Span::raw(today_total.to_string()),
        ]),
    ]
}

/// Render the countdown pane
pub fn render_timer_pane<S, K, C>(f: &mut Frame, app: &AppState<S, K, C>, area: Rect)
where
    S: TickScheduler,
    K: KeyValueStore,
    C: Chime,
{
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style())
        .title(Span::styled(" Pomodoro Focus ", title_style()));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let snapshot = app.timer.snapshot();
    let lines = timer_lines(&snapshot, &app.timer.config(), &app.today_total_formatted());
    let content_height = lines.len() as u16 + 2;
    let content = centered_rows(inner, content_height);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(content);

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
    f.render_widget(paragraph, chunks[0]);

    let percent = (app.timer.state().progress_ratio() * 100.0).clamp(0.0, 100.0);
    let gauge = Gauge::default()
        .gauge_style(gauge_style(snapshot.mode))
        .percent(percent as u16)
        .label("");
    f.render_widget(gauge, chunks[1]);
}
