use crate::app::state::{AppState, FetchStatus, FocusPanel};
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{
    Block, Borders, Cell, Paragraph, Row, Scrollbar, ScrollbarOrientation, ScrollbarState, Table,
    TableState,
};

const COLUMNS: [&str; 3] = ["Holiday", "Date", "Regional Scope"];

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let focused = state.focus == FocusPanel::Table;
    let (border_style, border_type) = if focused {
        (Theme::border_focused(), Theme::border_type_focused())
    } else {
        (Theme::border(), Theme::border_type())
    };

    let holidays = &state.selection.holidays;
    let mut title = match state.holidays_country {
        Some(ref code) => {
            let name = state
                .selection
                .country(code)
                .map(|c| c.display_name())
                .unwrap_or(code.as_str());
            format!(" Holidays: {} ({}) ", name, holidays.len())
        }
        None => " Holidays ".to_string(),
    };
    if state.holidays_stale {
        title.push_str("[stale] ");
    }

    let block = Block::default()
        .title(title)
        .title_style(if state.holidays_stale {
            Style::default().fg(Theme::ACCENT_RED).add_modifier(Modifier::BOLD)
        } else {
            Theme::title()
        })
        .borders(Borders::ALL)
        .border_type(border_type)
        .border_style(border_style);

    if holidays.is_empty() {
        let msg = match state.holidays_status {
            FetchStatus::Loading => "  Loading holidays...",
            FetchStatus::Failed(_) => "  Could not load holidays. Press r to retry.",
            _ => "  No public holidays in the next twelve months.",
        };
        let paragraph = Paragraph::new(Line::from(Span::styled(msg, Theme::muted()))).block(block);
        frame.render_widget(paragraph, area);
        return;
    }

    let header = Row::new(COLUMNS.iter().map(|c| Cell::from(*c))).style(Theme::header());
    let rows: Vec<Row> = holidays
        .iter()
        .map(|h| {
            Row::new(vec![
                Cell::from(h.display_name().to_string()),
                Cell::from(h.start_date.clone()),
                Cell::from(h.regional_scope.clone()),
            ])
            .style(Theme::text())
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Min(20),
            Constraint::Length(12),
            Constraint::Length(16),
        ],
    )
    .header(header)
    .block(block)
    .column_spacing(2)
    .row_highlight_style(if focused {
        Theme::selected_row()
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    });

    let mut table_state = TableState::default().with_selected(Some(state.table_selected));
    frame.render_stateful_widget(table, area, &mut table_state);

    // Rows visible inside borders and header
    let visible = area.height.saturating_sub(3) as usize;
    if visible > 0 && holidays.len() > visible {
        let scrollbar_area = Rect::new(
            area.x + area.width.saturating_sub(1),
            area.y + 2,
            1,
            visible as u16,
        );
        let mut scrollbar_state = ScrollbarState::new(holidays.len()).position(state.table_selected);
        frame.render_stateful_widget(
            Scrollbar::new(ScrollbarOrientation::VerticalRight)
                .thumb_style(Theme::scrollbar_thumb())
                .track_style(Theme::scrollbar_track()),
            scrollbar_area,
            &mut scrollbar_state,
        );
    }
}
