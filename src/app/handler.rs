use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::state::*;
use chrono::{Local, NaiveDate};
use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

const PAGE: usize = 10;

pub fn handle_event(state: &mut AppState, event: AppEvent) -> Vec<Action> {
    handle_event_on(state, event, Local::now().date_naive())
}

/// Same as [`handle_event`] with an explicit "today" for the query window.
pub fn handle_event_on(state: &mut AppState, event: AppEvent, today: NaiveDate) -> Vec<Action> {
    match event {
        AppEvent::Terminal(cevent) => handle_terminal(state, cevent, today),
        AppEvent::CountriesLoaded { request_id, result } => {
            // A new country list may change the effective code.
            if state.apply_countries(request_id, result) {
                vec![state.begin_holidays_fetch(today)]
            } else {
                vec![]
            }
        }
        AppEvent::HolidaysLoaded {
            request_id,
            country_iso_code,
            result,
        } => {
            state.apply_holidays(request_id, country_iso_code, result);
            vec![]
        }
        AppEvent::Tick => {
            state.tick_count = state.tick_count.wrapping_add(1);
            // Spinner only
            if state.countries_status.is_loading() || state.holidays_status.is_loading() {
                state.dirty = true;
            }
            vec![]
        }
    }
}

fn handle_terminal(state: &mut AppState, event: CEvent, today: NaiveDate) -> Vec<Action> {
    match event {
        CEvent::Key(key) if key.kind == KeyEventKind::Press => {
            state.dirty = true;
            handle_key(state, key, today)
        }
        CEvent::Resize(_, _) => {
            state.dirty = true;
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(state: &mut AppState, key: KeyEvent, today: NaiveDate) -> Vec<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return vec![Action::Quit];
    }

    // Dropdown captures all input when open
    if state.dropdown.visible {
        return handle_dropdown_key(state, key, today);
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => vec![Action::Quit],
        KeyCode::Tab | KeyCode::BackTab => {
            state.cycle_focus();
            vec![]
        }
        KeyCode::Char('c') => {
            state.open_dropdown();
            vec![]
        }
        KeyCode::Char('r') => vec![state.begin_holidays_fetch(today)],
        KeyCode::Char('R') => vec![state.begin_countries_fetch()],
        _ => match state.focus {
            FocusPanel::Dropdown => handle_dropdown_field_key(state, key),
            FocusPanel::Table => handle_table_key(state, key),
        },
    }
}

fn handle_dropdown_field_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    match key.code {
        KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Down => state.open_dropdown(),
        _ => {}
    }
    vec![]
}

fn handle_table_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => state.scroll_table_up(1),
        KeyCode::Down | KeyCode::Char('j') => state.scroll_table_down(1),
        KeyCode::PageUp => state.scroll_table_up(PAGE),
        KeyCode::PageDown => state.scroll_table_down(PAGE),
        KeyCode::Home | KeyCode::Char('g') => state.scroll_table_up(usize::MAX),
        KeyCode::End | KeyCode::Char('G') => state.scroll_table_end(),
        _ => {}
    }
    vec![]
}

fn handle_dropdown_key(state: &mut AppState, key: KeyEvent, today: NaiveDate) -> Vec<Action> {
    let countries = &state.selection.countries;
    let dropdown = &mut state.dropdown;
    match key.code {
        KeyCode::Esc => dropdown.close(),
        KeyCode::Up => dropdown.move_up(1),
        KeyCode::Down => dropdown.move_down(1),
        KeyCode::PageUp => dropdown.move_up(PAGE),
        KeyCode::PageDown => dropdown.move_down(PAGE),
        KeyCode::Home => dropdown.move_home(),
        KeyCode::End => dropdown.move_end(),
        KeyCode::Backspace => dropdown.pop_filter(countries),
        KeyCode::Enter => {
            let picked = dropdown.highlighted(countries).map(|c| c.iso_code.clone());
            if let Some(code) = picked {
                dropdown.close();
                state.focus = FocusPanel::Table;
                return state.select_country(code, today).into_iter().collect();
            }
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            dropdown.push_filter(c, countries);
        }
        _ => {}
    }
    vec![]
}
