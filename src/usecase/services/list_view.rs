use std::collections::HashSet;

use tracing::{debug, trace};

use crate::domain::entities::user::{User, UserColumn};
use crate::domain::entities::view_state::{
    FilterState, Pagination, SortDirection, SortSpec, DEFAULT_PAGE_SIZE,
};
use crate::domain::error::ViewError;
use crate::usecase::ports::source::UserSource;

/// Filter, sort and paginate a fixed list of users.
///
/// Derived views are recomputed from the current state on every call. Every
/// handler that changes the filtered set or its order moves back to page 1.
#[derive(Debug, Clone, PartialEq)]
pub struct ListViewProcessor {
    source: Vec<User>,
    filters: FilterState,
    sort: Option<SortSpec>,
    pagination: Pagination,
}

/// Everything the table needs for one render.
#[derive(Debug, Clone, PartialEq)]
pub struct PageView {
    pub rows: Vec<User>,
    pub total_count: usize,
    pub filtered_count: usize,
    pub page_size: usize,
    pub current_page: usize,
    pub total_pages: usize,
    pub page_numbers: Vec<usize>,
    pub sort: Option<SortSpec>,
    pub filters_active: bool,
}

impl PageView {
    /// 1-based positions of the first and last visible row, `None` when empty.
    pub fn visible_range(&self) -> Option<(usize, usize)> {
        if self.rows.is_empty() {
            return None;
        }
        let first = (self.current_page - 1) * self.page_size + 1;
        Some((first, first + self.rows.len() - 1))
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }
}

impl Default for ListViewProcessor {
    /// An empty list with default filters, sort and page size.
    fn default() -> Self {
        Self {
            source: Vec::new(),
            filters: FilterState::default(),
            sort: Some(SortSpec::default()),
            pagination: Pagination::default(),
        }
    }
}

impl ListViewProcessor {
    pub fn new(source: Vec<User>) -> Result<Self, ViewError> {
        Self::with_page_size(source, DEFAULT_PAGE_SIZE)
    }

    pub fn with_page_size(source: Vec<User>, page_size: usize) -> Result<Self, ViewError> {
        if page_size == 0 {
            return Err(ViewError::InvalidPageSize);
        }

        let mut seen = HashSet::with_capacity(source.len());
        for user in &source {
            if !seen.insert(user.id) {
                return Err(ViewError::DuplicateId(user.id));
            }
        }

        Ok(Self {
            source,
            filters: FilterState::default(),
            sort: Some(SortSpec::default()),
            pagination: Pagination {
                page_size,
                current_page: 1,
            },
        })
    }

    pub fn from_source(source: &impl UserSource) -> Result<Self, ViewError> {
        Self::new(source.load_users())
    }

    pub fn source(&self) -> &[User] {
        &self.source
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn sort(&self) -> Option<SortSpec> {
        self.sort
    }

    pub fn page_size(&self) -> usize {
        self.pagination.page_size
    }

    pub fn current_page(&self) -> usize {
        self.pagination.current_page
    }

    pub fn filtered(&self) -> Vec<&User> {
        self.source
            .iter()
            .filter(|user| self.filters.matches(user))
            .collect()
    }

    pub fn sorted(&self) -> Vec<&User> {
        let mut users = self.filtered();
        if let Some(SortSpec { column, direction }) = self.sort {
            users.sort_by(|a, b| {
                let ordering = column.compare(a, b);
                match direction {
                    SortDirection::Asc => ordering,
                    SortDirection::Desc => ordering.reverse(),
                }
            });
        }
        users
    }

    pub fn paged(&self) -> Vec<&User> {
        let sorted = self.sorted();
        let (start, end) = self.pagination.bounds(sorted.len());
        sorted[start..end].to_vec()
    }

    pub fn total_pages(&self) -> usize {
        self.pagination.total_pages(self.filtered().len())
    }

    pub fn page_numbers(&self) -> Vec<usize> {
        (1..=self.total_pages()).collect()
    }

    pub fn view(&self) -> PageView {
        let sorted = self.sorted();
        let filtered_count = sorted.len();
        let total_pages = self.pagination.total_pages(filtered_count);
        let (start, end) = self.pagination.bounds(filtered_count);

        PageView {
            rows: sorted[start..end].iter().map(|user| (*user).clone()).collect(),
            total_count: self.source.len(),
            filtered_count,
            page_size: self.pagination.page_size,
            current_page: self.pagination.current_page,
            total_pages,
            page_numbers: (1..=total_pages).collect(),
            sort: self.sort,
            filters_active: self.filters.is_active(),
        }
    }

    /// Activates `column`, or flips the direction if it is already active.
    pub fn sort_by(&mut self, column: UserColumn) {
        let next = match self.sort {
            Some(current) if current.column == column => SortSpec {
                column,
                direction: current.direction.flipped(),
            },
            _ => SortSpec {
                column,
                direction: SortDirection::Asc,
            },
        };
        debug!(?column, direction = ?next.direction, "sort changed");
        self.sort = Some(next);
        self.pagination.current_page = 1;
    }

    pub fn clear_sort(&mut self) {
        debug!("sort cleared");
        self.sort = None;
        self.pagination.current_page = 1;
    }

    /// Moves to `page`; returns `false` and changes nothing when out of range.
    pub fn change_page(&mut self, page: usize) -> bool {
        let total_pages = self.total_pages();
        if page < 1 || page > total_pages {
            trace!(page, total_pages, "page change ignored");
            return false;
        }
        self.pagination.current_page = page;
        true
    }

    pub fn set_name_filter_enabled(&mut self, enabled: bool) {
        self.filters.name_enabled = enabled;
        self.on_filter_change();
    }

    pub fn set_name_term(&mut self, term: impl Into<String>) {
        self.filters.name_term = term.into();
        self.on_filter_change();
    }

    pub fn set_age_filter_enabled(&mut self, enabled: bool) {
        self.filters.age_enabled = enabled;
        self.on_filter_change();
    }

    pub fn set_min_age(&mut self, min_age: Option<u32>) {
        self.filters.min_age = min_age;
        self.on_filter_change();
    }

    pub fn set_max_age(&mut self, max_age: Option<u32>) {
        self.filters.max_age = max_age;
        self.on_filter_change();
    }

    pub fn set_city_filter_enabled(&mut self, enabled: bool) {
        self.filters.city_enabled = enabled;
        self.on_filter_change();
    }

    pub fn set_city_term(&mut self, term: impl Into<String>) {
        self.filters.city_term = term.into();
        self.on_filter_change();
    }

    pub fn clear_filters(&mut self) {
        self.filters = FilterState::default();
        self.on_filter_change();
    }

    fn on_filter_change(&mut self) {
        debug!(filters = ?self.filters, "filters changed");
        self.pagination.current_page = 1;
    }
}
