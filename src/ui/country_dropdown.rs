use crate::app::state::{AppState, FetchStatus, FocusPanel};
use crate::ui::layout::centered_popup;
use crate::ui::theme::Theme;
use crate::ui::truncate;
use ratatui::prelude::*;
use ratatui::widgets::{
    Block, Borders, Clear, List, ListItem, ListState, Paragraph, Scrollbar, ScrollbarOrientation,
    ScrollbarState,
};

/// Collapsed dropdown: the country whose holidays are being shown.
pub fn render_field(frame: &mut Frame, area: Rect, state: &AppState) {
    let focused = state.focus == FocusPanel::Dropdown;
    let (border_style, border_type) = if focused {
        (Theme::border_focused(), Theme::border_type_focused())
    } else {
        (Theme::border(), Theme::border_type())
    };

    let block = Block::default()
        .title(" Country ")
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_type(border_type)
        .border_style(border_style);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let code = state.effective_country_code();
    let hint = match state.countries_status {
        FetchStatus::Loading => "  loading countries...",
        FetchStatus::Failed(_) => "  country list unavailable (R to retry)",
        _ => "  ▾ Enter to change",
    };
    let label_w = (inner.width as usize).saturating_sub(code.len() + hint.len() + 4);
    let line = Line::from(vec![
        Span::styled(
            format!(" {}", truncate(&state.dropdown_label(), label_w)),
            Theme::title(),
        ),
        Span::styled(format!(" ({})", code), Style::default().fg(Theme::TEXT_SECONDARY)),
        Span::styled(hint, Theme::muted()),
    ]);
    frame.render_widget(Paragraph::new(line), inner);
}

/// Open dropdown: filterable list of countries, one row per ISO code.
pub fn render_popup(frame: &mut Frame, state: &AppState) {
    let dropdown = &state.dropdown;
    if !dropdown.visible {
        return;
    }

    let popup_area = centered_popup(frame.area(), 60, 70, 40, 12);
    frame.render_widget(Clear, popup_area);

    let countries = &state.selection.countries;
    let block = Block::default()
        .title(format!(
            " Select country ({} / {}) ",
            dropdown.filtered.len(),
            countries.len()
        ))
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Style::default().fg(Theme::ACCENT_LAVENDER))
        .style(Style::default().bg(Theme::BG_SURFACE));
    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    if inner.height < 4 || inner.width < 10 {
        return;
    }

    // Filter bar
    let filter_area = Rect::new(inner.x, inner.y, inner.width, 1);
    let filter_line = Line::from(vec![
        Span::styled(" Filter: ", Theme::key_hint()),
        if dropdown.filter.is_empty() {
            Span::styled("(type to filter)", Theme::muted())
        } else {
            Span::styled(dropdown.filter.as_str(), Theme::text())
        },
        Span::styled("█", Style::default().fg(Theme::ACCENT_TEAL)),
    ]);
    frame.render_widget(Paragraph::new(filter_line), filter_area);

    // List
    let list_h = inner.height.saturating_sub(2);
    let list_area = Rect::new(inner.x, inner.y + 1, inner.width.saturating_sub(1), list_h);

    if dropdown.filtered.is_empty() {
        let msg = match (&state.countries_status, countries.is_empty()) {
            (FetchStatus::Loading, true) => "  Loading countries...",
            (FetchStatus::Failed(_), true) => "  Country list unavailable.",
            (_, true) => "  No countries.",
            (_, false) => "  No countries match filter.",
        };
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(msg, Theme::muted()))),
            list_area,
        );
    } else {
        let name_w = (list_area.width as usize).saturating_sub(10);
        let items: Vec<ListItem> = dropdown
            .filtered
            .iter()
            .filter_map(|&i| countries.get(i))
            .map(|c| {
                ListItem::new(Line::from(vec![
                    Span::styled(format!(" {:<4}", c.iso_code), Style::default().fg(Theme::TEXT_SECONDARY)),
                    Span::styled(truncate(c.display_name(), name_w), Theme::text()),
                ]))
            })
            .collect();

        let list = List::new(items)
            .highlight_style(Theme::selected_row())
            .highlight_symbol("▶");
        let mut list_state = ListState::default().with_selected(Some(dropdown.selected));
        frame.render_stateful_widget(list, list_area, &mut list_state);

        if dropdown.filtered.len() > list_h as usize {
            let scrollbar_area = Rect::new(inner.x + inner.width.saturating_sub(1), inner.y + 1, 1, list_h);
            let mut scrollbar_state =
                ScrollbarState::new(dropdown.filtered.len()).position(dropdown.selected);
            frame.render_stateful_widget(
                Scrollbar::new(ScrollbarOrientation::VerticalRight)
                    .thumb_style(Theme::scrollbar_thumb())
                    .track_style(Theme::scrollbar_track()),
                scrollbar_area,
                &mut scrollbar_state,
            );
        }
    }

    // Help
    let help_area = Rect::new(inner.x, inner.y + inner.height - 1, inner.width, 1);
    let help = Line::from(vec![
        Span::styled(" ↑↓/PgUp/Dn", Theme::key_hint()),
        Span::styled(" Navigate  ", Style::default().fg(Theme::TEXT_SECONDARY)),
        Span::styled("Enter", Theme::key_hint()),
        Span::styled(" Select  ", Style::default().fg(Theme::TEXT_SECONDARY)),
        Span::styled("Esc", Theme::key_hint()),
        Span::styled(" Close", Style::default().fg(Theme::TEXT_SECONDARY)),
    ]);
    frame.render_widget(Paragraph::new(help), help_area);
}
