use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::BorderType;

pub struct Theme;

impl Theme {
    pub const BG_DARK: Color = Color::Rgb(22, 22, 30);
    pub const BG_SURFACE: Color = Color::Rgb(32, 32, 44);
    pub const BORDER_DIM: Color = Color::Rgb(70, 70, 90);
    pub const TEXT_PRIMARY: Color = Color::Rgb(220, 220, 230);
    pub const TEXT_SECONDARY: Color = Color::Rgb(150, 150, 170);
    pub const TEXT_MUTED: Color = Color::Rgb(100, 100, 120);
    pub const ACCENT_TEAL: Color = Color::Rgb(80, 200, 190);
    pub const ACCENT_AMBER: Color = Color::Rgb(240, 180, 80);
    pub const ACCENT_GREEN: Color = Color::Rgb(120, 210, 120);
    pub const ACCENT_RED: Color = Color::Rgb(235, 100, 100);
    pub const ACCENT_LAVENDER: Color = Color::Rgb(170, 150, 240);

    pub fn border() -> Style {
        Style::default().fg(Self::BORDER_DIM)
    }

    pub fn border_focused() -> Style {
        Style::default().fg(Self::ACCENT_TEAL)
    }

    pub fn border_type() -> BorderType {
        BorderType::Rounded
    }

    pub fn border_type_focused() -> BorderType {
        BorderType::Thick
    }

    pub fn title() -> Style {
        Style::default()
            .fg(Self::TEXT_PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    pub fn header() -> Style {
        Style::default()
            .fg(Self::ACCENT_LAVENDER)
            .add_modifier(Modifier::BOLD)
    }

    pub fn text() -> Style {
        Style::default().fg(Self::TEXT_PRIMARY)
    }

    pub fn muted() -> Style {
        Style::default().fg(Self::TEXT_MUTED)
    }

    pub fn selected_row() -> Style {
        Style::default()
            .fg(Self::BG_DARK)
            .bg(Self::ACCENT_TEAL)
            .add_modifier(Modifier::BOLD)
    }

    pub fn key_hint() -> Style {
        Style::default()
            .fg(Self::ACCENT_AMBER)
            .add_modifier(Modifier::BOLD)
    }

    pub fn status_bar() -> Style {
        Style::default().fg(Self::TEXT_PRIMARY).bg(Self::BG_SURFACE)
    }

    pub fn loading() -> Style {
        Style::default().fg(Self::ACCENT_AMBER).bg(Self::BG_SURFACE)
    }

    pub fn loaded() -> Style {
        Style::default().fg(Self::ACCENT_GREEN).bg(Self::BG_SURFACE)
    }

    pub fn failed() -> Style {
        Style::default()
            .fg(Self::ACCENT_RED)
            .bg(Self::BG_SURFACE)
            .add_modifier(Modifier::BOLD)
    }

    pub fn scrollbar_thumb() -> Style {
        Style::default().fg(Self::ACCENT_TEAL)
    }

    pub fn scrollbar_track() -> Style {
        Style::default().fg(Self::BORDER_DIM)
    }
}
