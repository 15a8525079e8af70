use ratatui::prelude::*;

/// Border style for the focused input field
pub fn focused_border_style() -> Style {
    Style::default().fg(Color::Cyan)
}

/// Border style for unfocused input fields
pub fn unfocused_border_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

/// Text style for placeholder text
pub fn input_placeholder_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

/// Text style for normal input text
pub fn input_text_style() -> Style {
    Style::default().fg(Color::White)
}

/// Text style for inline error messages
pub fn error_text_style() -> Style {
    Style::default().fg(Color::Red)
}

/// Text style for inline success messages
pub fn success_text_style() -> Style {
    Style::default().fg(Color::Green)
}

/// Style for screen titles
pub fn title_style() -> Style {
    Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
}
