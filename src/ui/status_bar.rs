use crate::app::state::{AppState, FetchStatus, FocusPanel};
use crate::ui::theme::Theme;
use crate::ui::truncate;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

const SPINNER: [&str; 4] = ["◐", "◓", "◑", "◒"];

fn phase_span(label: &str, status: &FetchStatus, tick: u64) -> Span<'static> {
    match status {
        FetchStatus::Idle => Span::styled(format!(" {}: -- ", label), Theme::status_bar()),
        FetchStatus::Loading => Span::styled(
            format!(" {} {}: loading ", SPINNER[(tick % 4) as usize], label),
            Theme::loading(),
        ),
        FetchStatus::Loaded => Span::styled(format!(" {}: ok ", label), Theme::loaded()),
        FetchStatus::Failed(reason) => Span::styled(
            format!(" {}: failed ({}) ", label, truncate(reason, 40)),
            Theme::failed(),
        ),
    }
}

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let mut parts: Vec<Span> = vec![
        phase_span("countries", &state.countries_status, state.tick_count),
        Span::styled("|", Theme::status_bar()),
        phase_span("holidays", &state.holidays_status, state.tick_count),
    ];

    if state.holidays_stale {
        parts.push(Span::styled(" showing previous results ", Theme::failed()));
    }

    if let Some(range) = state.active_range {
        parts.push(Span::styled(
            format!("| {} - {} ", range.valid_from(), range.valid_to()),
            Theme::status_bar(),
        ));
    }

    let help = match state.focus {
        FocusPanel::Dropdown => " Enter:country Tab:table r:refresh R:reload q:quit ",
        FocusPanel::Table => " ↑↓:scroll Tab:country r:refresh R:reload q:quit ",
    };

    // Pad so the help text sits flush right
    let used: usize = parts.iter().map(|s| s.width()).sum();
    let remaining = (area.width as usize).saturating_sub(used + help.chars().count());
    parts.push(Span::styled(" ".repeat(remaining), Theme::status_bar()));
    parts.push(Span::styled(help, Style::default().fg(Theme::ACCENT_TEAL).bg(Theme::BG_SURFACE)));

    frame.render_widget(Paragraph::new(Line::from(parts)), area);
}
