use crate::api::{ApiError, HolidayQuery};
use crate::app::action::Action;
use crate::app::event::RequestId;
use crate::app::request::RequestTracker;
use crate::config::AppConfig;
use crate::holidays::{compute_range, Country, DateRange, Holiday};
use chrono::NaiveDate;

/// Progress of one fetch phase as shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchStatus {
    Idle,
    Loading,
    Loaded,
    Failed(String),
}

impl FetchStatus {
    pub fn is_loading(&self) -> bool {
        matches!(self, FetchStatus::Loading)
    }
}

/// What the user picked and what was fetched for it.
#[derive(Debug, Default)]
pub struct SelectionState {
    pub countries: Vec<Country>,
    pub selected_country_code: Option<String>,
    pub holidays: Vec<Holiday>,
}

impl SelectionState {
    /// Country code to query: the explicit selection, else the default
    /// country's code if it is in the list, else the default itself.
    pub fn effective_country_code(&self, default_code: &str) -> String {
        if let Some(ref code) = self.selected_country_code {
            return code.clone();
        }
        self.countries
            .iter()
            .find(|c| c.iso_code == default_code)
            .map(|c| c.iso_code.clone())
            .unwrap_or_else(|| default_code.to_string())
    }

    pub fn country(&self, iso_code: &str) -> Option<&Country> {
        self.countries.iter().find(|c| c.iso_code == iso_code)
    }
}

/// Country picker popup.
#[derive(Debug, Default)]
pub struct DropdownState {
    pub visible: bool,
    pub filter: String,
    /// Indices into `SelectionState::countries` matching `filter`.
    pub filtered: Vec<usize>,
    /// Position within `filtered`.
    pub selected: usize,
}

impl DropdownState {
    /// Show the popup with the current country highlighted.
    pub fn open(&mut self, countries: &[Country], current_code: &str) {
        self.visible = true;
        self.filter.clear();
        self.refilter(countries);
        self.selected = self
            .filtered
            .iter()
            .position(|&i| countries[i].iso_code == current_code)
            .unwrap_or(0);
    }

    pub fn close(&mut self) {
        self.visible = false;
        self.filter.clear();
    }

    pub fn refilter(&mut self, countries: &[Country]) {
        self.filtered = countries
            .iter()
            .enumerate()
            .filter(|(_, c)| c.matches_filter(&self.filter))
            .map(|(i, _)| i)
            .collect();
        if self.selected >= self.filtered.len() {
            self.selected = self.filtered.len().saturating_sub(1);
        }
    }

    pub fn push_filter(&mut self, c: char, countries: &[Country]) {
        self.filter.push(c);
        self.selected = 0;
        self.refilter(countries);
    }

    pub fn pop_filter(&mut self, countries: &[Country]) {
        if self.filter.pop().is_some() {
            self.selected = 0;
            self.refilter(countries);
        }
    }

    pub fn move_up(&mut self, n: usize) {
        self.selected = self.selected.saturating_sub(n);
    }

    pub fn move_down(&mut self, n: usize) {
        if !self.filtered.is_empty() {
            self.selected = (self.selected + n).min(self.filtered.len() - 1);
        }
    }

    pub fn move_home(&mut self) {
        self.selected = 0;
    }

    pub fn move_end(&mut self) {
        self.selected = self.filtered.len().saturating_sub(1);
    }

    pub fn highlighted<'a>(&self, countries: &'a [Country]) -> Option<&'a Country> {
        self.filtered
            .get(self.selected)
            .and_then(|&i| countries.get(i))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusPanel {
    Dropdown,
    Table,
}

pub struct AppState {
    pub config: AppConfig,
    pub selection: SelectionState,
    pub countries_status: FetchStatus,
    pub holidays_status: FetchStatus,
    /// Displayed holidays do not belong to the latest query (it failed).
    pub holidays_stale: bool,
    /// Country the displayed holidays were fetched for.
    pub holidays_country: Option<String>,
    /// Window of the latest holidays query.
    pub active_range: Option<DateRange>,
    pub countries_requests: RequestTracker,
    pub holidays_requests: RequestTracker,
    pub dropdown: DropdownState,
    /// Highlighted row in the holiday table.
    pub table_selected: usize,
    pub focus: FocusPanel,
    pub tick_count: u64,
    pub should_quit: bool,
    pub dirty: bool,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            selection: SelectionState::default(),
            countries_status: FetchStatus::Idle,
            holidays_status: FetchStatus::Idle,
            holidays_stale: false,
            holidays_country: None,
            active_range: None,
            countries_requests: RequestTracker::new(),
            holidays_requests: RequestTracker::new(),
            dropdown: DropdownState::default(),
            table_selected: 0,
            focus: FocusPanel::Dropdown,
            tick_count: 0,
            should_quit: false,
            dirty: true,
        }
    }

    /// Initial fetches: the country list, and holidays for the default
    /// country so the table is not empty while countries load.
    pub fn start(&mut self, today: NaiveDate) -> Vec<Action> {
        vec![self.begin_countries_fetch(), self.begin_holidays_fetch(today)]
    }

    pub fn effective_country_code(&self) -> String {
        self.selection
            .effective_country_code(&self.config.selection.default_country_code)
    }

    pub fn begin_countries_fetch(&mut self) -> Action {
        let request_id = self.countries_requests.issue();
        self.countries_status = FetchStatus::Loading;
        self.dirty = true;
        tracing::debug!(request_id, "fetching countries");
        Action::FetchCountries {
            request_id,
            language_iso_code: self.config.api.language_iso_code.clone(),
        }
    }

    /// Apply a countries response. Returns true when the country list was
    /// replaced, meaning holidays must be fetched again.
    pub fn apply_countries(
        &mut self,
        request_id: RequestId,
        result: Result<Vec<Country>, ApiError>,
    ) -> bool {
        if !self.countries_requests.is_current(request_id) {
            tracing::debug!(request_id, "discarding stale countries response");
            return false;
        }
        self.dirty = true;
        match result {
            Ok(countries) => {
                tracing::info!(request_id, count = countries.len(), "countries loaded");
                self.selection.countries = countries;
                self.countries_status = FetchStatus::Loaded;
                if self.dropdown.visible {
                    self.dropdown.refilter(&self.selection.countries);
                }
                true
            }
            Err(e) => {
                self.countries_status = FetchStatus::Failed(e.to_string());
                false
            }
        }
    }

    pub fn begin_holidays_fetch(&mut self, today: NaiveDate) -> Action {
        let request_id = self.holidays_requests.issue();
        let range = compute_range(today);
        let country_iso_code = self.effective_country_code();
        tracing::debug!(
            request_id,
            country = %country_iso_code,
            from = %range.valid_from(),
            to = %range.valid_to(),
            "fetching holidays"
        );
        self.active_range = Some(range);
        self.holidays_status = FetchStatus::Loading;
        self.dirty = true;
        Action::FetchHolidays {
            request_id,
            query: HolidayQuery {
                country_iso_code,
                range,
                language_iso_code: self.config.api.language_iso_code.clone(),
            },
        }
    }

    /// Apply a holidays response. A failure keeps the previous list on
    /// screen and marks it stale. Returns true when the response was applied.
    pub fn apply_holidays(
        &mut self,
        request_id: RequestId,
        country_iso_code: String,
        result: Result<Vec<Holiday>, ApiError>,
    ) -> bool {
        if !self.holidays_requests.is_current(request_id) {
            tracing::debug!(
                request_id,
                country = %country_iso_code,
                "discarding stale holidays response"
            );
            return false;
        }
        self.dirty = true;
        match result {
            Ok(holidays) => {
                tracing::info!(
                    request_id,
                    country = %country_iso_code,
                    count = holidays.len(),
                    "holidays loaded"
                );
                self.selection.holidays = holidays;
                self.holidays_country = Some(country_iso_code);
                self.holidays_status = FetchStatus::Loaded;
                self.holidays_stale = false;
                self.table_selected = 0;
            }
            Err(e) => {
                self.holidays_status = FetchStatus::Failed(e.to_string());
                self.holidays_stale = true;
            }
        }
        true
    }

    /// Record a new selection. Returns the holidays fetch it triggers, or
    /// `None` when the code is already selected.
    pub fn select_country(&mut self, iso_code: String, today: NaiveDate) -> Option<Action> {
        if self.selection.selected_country_code.as_deref() == Some(iso_code.as_str()) {
            return None;
        }
        tracing::info!(country = %iso_code, "selection changed");
        self.selection.selected_country_code = Some(iso_code);
        Some(self.begin_holidays_fetch(today))
    }

    pub fn open_dropdown(&mut self) {
        let current = self.effective_country_code();
        self.dropdown.open(&self.selection.countries, &current);
        self.dirty = true;
    }

    pub fn cycle_focus(&mut self) {
        self.focus = match self.focus {
            FocusPanel::Dropdown => FocusPanel::Table,
            FocusPanel::Table => FocusPanel::Dropdown,
        };
        self.dirty = true;
    }

    pub fn scroll_table_up(&mut self, n: usize) {
        self.table_selected = self.table_selected.saturating_sub(n);
        self.dirty = true;
    }

    pub fn scroll_table_down(&mut self, n: usize) {
        let len = self.selection.holidays.len();
        if len > 0 {
            self.table_selected = (self.table_selected + n).min(len - 1);
        }
        self.dirty = true;
    }

    pub fn scroll_table_end(&mut self) {
        self.table_selected = self.selection.holidays.len().saturating_sub(1);
        self.dirty = true;
    }

    /// Label for the collapsed dropdown: the effective country's name, or
    /// its code while the country list is unavailable.
    pub fn dropdown_label(&self) -> String {
        let code = self.effective_country_code();
        self.selection
            .country(&code)
            .map(|c| c.display_name().to_string())
            .unwrap_or(code)
    }
}
