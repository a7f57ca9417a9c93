use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Main layout structure
pub struct MainLayout {
    pub keybindings_area: Rect,
    pub timer_area: Rect,
    pub history_area: Option<Rect>,
    pub status_area: Rect,
}

/// Create the main layout
/// - Top bar: keybindings (1 row)
/// - Main area: Timer (60%) | History (40%) when history shown, otherwise Timer only
/// - Bottom bar: status message (1 row)
pub fn create_layout(area: Rect, show_history: bool) -> MainLayout {
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Keybindings bar
            Constraint::Min(0),    // Main content
            Constraint::Length(1), // Status line
        ])
        .split(area);

    let keybindings_area = main_chunks[0];
    let content_area = main_chunks[1];
    let status_area = main_chunks[2];

    if show_history {
        let horizontal_split = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(60), // Timer pane
                Constraint::Percentage(40), // History pane
            ])
            .split(content_area);

        MainLayout {
            keybindings_area,
            timer_area: horizontal_split[0],
            history_area: Some(horizontal_split[1]),
            status_area,
        }
    } else {
        MainLayout {
            keybindings_area,
            timer_area: content_area,
            history_area: None,
            status_area,
        }
    }
}

/// Vertically centre a block of `height` rows inside `area`
pub fn centered_rows(area: Rect, height: u16) -> Rect {
    let height = height.min(area.height);
    let top = (area.height - height) / 2;
    Rect::new(area.x, area.y + top, area.width, height)
}
