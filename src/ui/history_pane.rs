use crate::domain::{format_hours, SessionHistory};
use crate::ui::styles::{border_style, default_style, done_style, title_style};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

/// One list line per day, newest first, then a total
pub fn history_lines(history: &SessionHistory) -> Vec<Line<'static>> {
    if history.is_empty() {
        return vec![Line::from(Span::styled(
            "No completed work sessions yet",
            default_style(),
        ))];
    }

    let mut lines: Vec<Line<'static>> = history
        .rows_newest_first()
        .into_iter()
        .map(|row| {
            Line::from(vec![
                Span::styled(format!("{}  ", row.date), default_style()),
                Span::styled(row.hours_formatted(), done_style()),
            ])
        })
        .collect();

    lines.push(Line::raw(""));
    lines.push(Line::from(vec![
        Span::styled("Total       ", title_style()),
        Span::styled(format_hours(history.total_minutes()), done_style()),
    ]));
    lines
}

/// Render the per-day work history pane
pub fn render_history_pane(f: &mut Frame, history: &SessionHistory, area: Rect) {
    let items: Vec<ListItem> = history_lines(history).into_iter().map(ListItem::new).collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style())
            .title(Span::styled(" Work History (per day) ", title_style())),
    );
    f.render_widget(list, area);
}
