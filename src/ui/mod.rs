mod country_dropdown;
mod holiday_table;
mod layout;
mod status_bar;
mod theme;

use crate::app::state::AppState;
use ratatui::prelude::*;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub fn render(frame: &mut Frame, state: &AppState) {
    let app_layout = layout::compute_layout(frame.area());

    country_dropdown::render_field(frame, app_layout.country_field, state);
    holiday_table::render(frame, app_layout.holiday_table, state);
    status_bar::render(frame, app_layout.status_bar, state);

    // Popup last so it draws over everything
    country_dropdown::render_popup(frame, state);
}

/// Cut `s` to at most `max` display columns, ending in `…` when shortened.
pub(crate) fn truncate(s: &str, max: usize) -> String {
    if s.width() <= max {
        return s.to_string();
    }
    if max == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w + 1 > max {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}
