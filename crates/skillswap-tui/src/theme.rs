use ratatui::style::{Color, Modifier, Style};

pub struct Theme {
    pub header: Style,
    pub brand: Style,
    pub tab_active: Style,
    pub tab_inactive: Style,
    pub status_bar: Style,
    pub panel_border: Style,
    pub panel_border_focused: Style,
    pub panel_title: Style,
    pub highlight: Style,
    pub selected: Style,
    pub muted: Style,
    pub accent: Style,
    pub star: Style,
    pub price: Style,
    pub disabled: Style,
    pub error: Style,
    pub success: Style,
    pub input_cursor: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            header: Style::default()
                .fg(Color::Rgb(220, 230, 255))
                .bg(Color::Rgb(40, 30, 90))
                .add_modifier(Modifier::BOLD),
            brand: Style::default()
                .fg(Color::Rgb(180, 140, 255))
                .bg(Color::Rgb(40, 30, 90))
                .add_modifier(Modifier::BOLD),
            tab_active: Style::default()
                .fg(Color::Rgb(180, 140, 255))
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            tab_inactive: Style::default().fg(Color::Gray),
            status_bar: Style::default().fg(Color::White).bg(Color::DarkGray),
            panel_border: Style::default().fg(Color::Gray),
            panel_border_focused: Style::default().fg(Color::Rgb(180, 140, 255)),
            panel_title: Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
            highlight: Style::default().fg(Color::Rgb(215, 150, 60)),
            selected: Style::default()
                .fg(Color::Black)
                .bg(Color::Rgb(180, 140, 255))
                .add_modifier(Modifier::BOLD),
            muted: Style::default().fg(Color::DarkGray),
            accent: Style::default().fg(Color::Cyan),
            star: Style::default().fg(Color::Yellow),
            price: Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
            disabled: Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::CROSSED_OUT),
            error: Style::default().fg(Color::Red),
            success: Style::default().fg(Color::Green),
            input_cursor: Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        }
    }
}
