use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct AppLayout {
    pub country_field: Rect,
    pub holiday_table: Rect,
    pub status_bar: Rect,
}

pub fn compute_layout(area: Rect) -> AppLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Country dropdown (collapsed)
            Constraint::Min(5),    // Holidays
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    AppLayout {
        country_field: chunks[0],
        holiday_table: chunks[1],
        status_bar: chunks[2],
    }
}

/// Centered popup rectangle: `pct_w`% x `pct_h`% of `area`, at least
/// `min_w` x `min_h` when the terminal allows it.
pub fn centered_popup(area: Rect, pct_w: u16, pct_h: u16, min_w: u16, min_h: u16) -> Rect {
    let w = (area.width * pct_w / 100)
        .max(min_w)
        .min(area.width.saturating_sub(4));
    let h = (area.height * pct_h / 100)
        .max(min_h)
        .min(area.height.saturating_sub(2));
    let x = area.x + area.width.saturating_sub(w) / 2;
    let y = area.y + area.height.saturating_sub(h) / 2;
    Rect::new(x, y, w, h)
}
