//! 域名列表状态
//!
//! Holds the fetched collection and everything the list view derives from it:
//! client-side search, sort order, paging, selection, row action availability
//! and the panel/delete state machine.

mod machine;
mod row;

use std::cmp::Ordering;

use domain_console_api::Domain;

pub use machine::{PanelEvent, PanelMachine, PanelMode, Phase, TransitionError};
pub use row::{RowAction, RowView, Tone};

/// Rows per page.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Ordering of the list by domain string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl SortOrder {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Ascending => "Order by Ascending",
            Self::Descending => "Order by Descending",
        }
    }
}

/// List view state.
#[derive(Debug, Clone)]
pub struct TableState {
    domains: Vec<Domain>,
    loading: bool,
    search: String,
    sort: SortOrder,
    /// 当前页（从 1 开始）
    page: usize,
    page_size: usize,
    /// Selection index within the visible page.
    selected: usize,
    machine: PanelMachine,
}

impl Default for TableState {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl TableState {
    pub fn new(page_size: usize) -> Self {
        Self {
            domains: Vec::new(),
            loading: false,
            search: String::new(),
            sort: SortOrder::default(),
            page: 1,
            page_size: page_size.max(1),
            selected: 0,
            machine: PanelMachine::default(),
        }
    }

    // ========== Data ==========

    pub fn domains(&self) -> &[Domain] {
        &self.domains
    }

    /// Replace the collection with a fresh server snapshot, keeping the
    /// selected record selected when it is still present.
    pub fn set_domains(&mut self, domains: Vec<Domain>) {
        let keep = self.selected().map(|d| d.id.clone());
        self.domains = domains;
        self.loading = false;
        match keep {
            Some(id) => self.select_id(&id),
            None => self.clamp(),
        }
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    // ========== Search & sort ==========

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
        self.page = 1;
        self.selected = 0;
    }

    pub fn push_search_char(&mut self, c: char) {
        let mut search = std::mem::take(&mut self.search);
        search.push(c);
        self.set_search(search);
    }

    pub fn pop_search_char(&mut self) {
        let mut search = std::mem::take(&mut self.search);
        search.pop();
        self.set_search(search);
    }

    pub fn sort_order(&self) -> SortOrder {
        self.sort
    }

    pub fn set_sort_order(&mut self, sort: SortOrder) {
        let keep = self.selected().map(|d| d.id.clone());
        self.sort = sort;
        if let Some(id) = keep {
            self.select_id(&id);
        }
    }

    pub fn toggle_sort(&mut self) {
        self.set_sort_order(self.sort.toggled());
    }

    /// Records matching the search, in sort order.
    ///
    /// Matching is a case-insensitive substring test on `domain`. Sorting
    /// compares `domain` case-insensitively and breaks ties by `id`.
    pub fn filtered(&self) -> Vec<&Domain> {
        let needle = self.search.to_lowercase();
        let mut rows: Vec<&Domain> = self
            .domains
            .iter()
            .filter(|d| d.domain.to_lowercase().contains(&needle))
            .collect();
        rows.sort_by(|a, b| {
            let ord = compare_domains(a, b);
            match self.sort {
                SortOrder::Ascending => ord,
                SortOrder::Descending => ord.reverse(),
            }
        });
        rows
    }

    // ========== Paging ==========

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Number of pages, at least one.
    pub fn page_count(&self) -> usize {
        self.filtered().len().div_ceil(self.page_size).max(1)
    }

    pub fn next_page(&mut self) {
        if self.page < self.page_count() {
            self.page += 1;
            self.selected = 0;
        }
    }

    pub fn prev_page(&mut self) {
        if self.page > 1 {
            self.page -= 1;
            self.selected = 0;
        }
    }

    /// Rows on the current page.
    pub fn visible(&self) -> Vec<&Domain> {
        self.filtered()
            .into_iter()
            .skip((self.page - 1) * self.page_size)
            .take(self.page_size)
            .collect()
    }

    /// Presentation rows for the current page.
    pub fn rows(&self) -> Vec<RowView<'_>> {
        let deleting = self.machine.deleting_id();
        self.visible()
            .into_iter()
            .enumerate()
            .map(|(i, record)| RowView {
                selected: i == self.selected,
                deleting: deleting == Some(record.id.as_str()),
                ..RowView::new(record)
            })
            .collect()
    }

    // ========== Selection ==========

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn selected(&self) -> Option<&Domain> {
        self.visible().get(self.selected).copied()
    }

    pub fn select_next(&mut self) {
        let len = self.visible().len();
        if len > 0 && self.selected + 1 < len {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Move the page and selection onto `id` if it is in the filtered set.
    fn select_id(&mut self, id: &str) {
        let position = self.filtered().iter().position(|d| d.id == id);
        match position {
            Some(pos) => {
                self.page = pos / self.page_size + 1;
                self.selected = pos % self.page_size;
            }
            None => self.clamp(),
        }
    }

    fn clamp(&mut self) {
        self.page = self.page.clamp(1, self.page_count());
        let len = self.visible().len();
        self.selected = self.selected.min(len.saturating_sub(1));
    }

    // ========== Panel & actions ==========

    pub fn phase(&self) -> &Phase {
        self.machine.phase()
    }

    pub fn apply(&mut self, event: PanelEvent) -> Result<&Phase, TransitionError> {
        self.machine.handle(event)
    }

    pub fn panel_mode(&self) -> Option<&PanelMode> {
        self.machine.panel_mode()
    }

    pub fn is_deleting(&self) -> bool {
        self.machine.is_deleting()
    }

    /// Id of the record whose delete is in flight.
    pub fn deleting_id(&self) -> Option<&str> {
        self.machine.deleting_id()
    }

    /// Whether `action` is available for `record` right now.
    ///
    /// Verify is disabled once the record is verified. Delete is disabled
    /// while any delete is in flight.
    pub fn is_action_enabled(&self, action: RowAction, record: &Domain) -> bool {
        match action {
            RowAction::Edit => !self.machine.is_deleting(),
            RowAction::Verify => !record.status.is_verified(),
            RowAction::Delete => !self.machine.is_deleting(),
            RowAction::CopyDomain => true,
        }
    }

    /// Actions for `record` paired with their availability.
    pub fn row_actions(&self, record: &Domain) -> Vec<(RowAction, bool)> {
        RowAction::ALL
            .into_iter()
            .map(|action| (action, self.is_action_enabled(action, record)))
            .collect()
    }
}

fn compare_domains(a: &Domain, b: &Domain) -> Ordering {
    a.domain
        .to_lowercase()
        .cmp(&b.domain.to_lowercase())
        .then_with(|| a.id.cmp(&b.id))
}
