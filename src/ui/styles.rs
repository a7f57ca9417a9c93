use crate::domain::TimerMode;
use ratatui::style::{Color, Modifier, Style};

/// Default text style
pub fn default_style() -> Style {
    Style::default().fg(Color::White)
}

/// Running status badge style
pub fn running_style() -> Style {
    Style::default()
        .fg(Color::Magenta)
        .add_modifier(Modifier::BOLD)
}

/// Idle status badge style
pub fn idle_style() -> Style {
    Style::default().fg(Color::Gray)
}

/// Countdown digits, coloured by phase
pub fn countdown_style(mode: TimerMode) -> Style {
    let color = match mode {
        TimerMode::Work => Color::LightRed,
        TimerMode::Break => Color::LightGreen,
    };
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

/// Title style for panes
pub fn title_style() -> Style {
    Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD)
}

/// Border style
pub fn border_style() -> Style {
    Style::default().fg(Color::Gray)
}

/// Keybinding hint style
pub fn hint_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

/// Phase progress gauge style
pub fn gauge_style(mode: TimerMode) -> Style {
    match mode {
        TimerMode::Work => Style::default().fg(Color::Red).bg(Color::DarkGray),
        TimerMode::Break => Style::default().fg(Color::Green).bg(Color::DarkGray),
    }
}

/// Warning message style
pub fn error_style() -> Style {
    Style::default()
        .fg(Color::Red)
        .add_modifier(Modifier::BOLD)
}

/// Logged minutes in the history pane
pub fn done_style() -> Style {
    Style::default().fg(Color::Green)
}
