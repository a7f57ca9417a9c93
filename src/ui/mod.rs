pub mod history_pane;
pub mod keybindings;
pub mod layout;
pub mod styles;
pub mod timer_pane;

use crate::app::AppState;
use crate::chime::Chime;
use crate::persistence::KeyValueStore;
use crate::ticker::TickScheduler;
use history_pane::render_history_pane;
use keybindings::render_keybindings;
use layout::create_layout;
use ratatui::{layout::Rect, text::Span, widgets::Paragraph, Frame};
use styles::{default_style, error_style};
use timer_pane::render_timer_pane;

/// Main render function - draws the entire UI
pub fn render<S, K, C>(f: &mut Frame, app: &AppState<S, K, C>)
where
    S: TickScheduler,
    K: KeyValueStore,
    C: Chime,
{
    let size = f.size();
    let layout = create_layout(size, app.show_history);

    render_keybindings(f, layout.keybindings_area);
    render_timer_pane(f, app, layout.timer_area);

    if let Some(history_area) = layout.history_area {
        render_history_pane(f, app.timer.history(), history_area);
    }

    render_status_line(f, app, layout.status_area);
}

fn render_status_line<S, K, C>(f: &mut Frame, app: &AppState<S, K, C>, area: Rect)
where
    S: TickScheduler,
    K: KeyValueStore,
    C: Chime,
{
    let Some(status) = &app.status else {
        return;
    };
    let style = if status.is_warning {
        error_style()
    } else {
        default_style()
    };
    f.render_widget(
        Paragraph::new(Span::styled(format!(" {}", status.text), style)),
        area,
    );
}
