use ratatui::style::{Color, Modifier, Style};

pub struct Theme {
    pub focus_border: Color,
    pub blurred_border: Color,
    pub text: Color,
    pub text_secondary: Color,
    pub selection_bg: Color,
    pub selection_fg: Color,

    // Specific components
    pub tab_active: Style,
    pub tab_inactive: Style,
    pub category_badge: Style,
    pub idea_text: Style,
    pub idea_placeholder: Style,
    pub flash: Style,
    pub empty_hint: Style,
    pub footer: Style,
    pub popup_border: Style,
    pub popup_text: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            focus_border: Color::Cyan,
            blurred_border: Color::DarkGray,
            text: Color::White,
            text_secondary: Color::Gray,
            selection_bg: Color::DarkGray,
            selection_fg: Color::Yellow,

            tab_active: Style::default().fg(Color::Black).bg(Color::Indexed(63)).add_modifier(Modifier::BOLD),
            tab_inactive: Style::default().fg(Color::Gray),
            category_badge: Style::default().fg(Color::Indexed(63)).add_modifier(Modifier::BOLD),
            idea_text: Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            idea_placeholder: Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
            flash: Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            empty_hint: Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
            footer: Style::default().fg(Color::Gray).add_modifier(Modifier::DIM),
            popup_border: Style::default().fg(Color::Magenta).bg(Color::Black),
            popup_text: Style::default().fg(Color::White),
        }
    }
}
