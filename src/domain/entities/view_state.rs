use crate::domain::entities::user::{User, UserColumn};

pub const DEFAULT_PAGE_SIZE: usize = 5;
pub const DEFAULT_SORT_COLUMN: UserColumn = UserColumn::Name;
pub const DEFAULT_SORT_DIRECTION: SortDirection = SortDirection::Asc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortSpec {
    pub column: UserColumn,
    pub direction: SortDirection,
}

impl Default for SortSpec {
    fn default() -> Self {
        Self {
            column: DEFAULT_SORT_COLUMN,
            direction: DEFAULT_SORT_DIRECTION,
        }
    }
}

/// Filter toggles and their criteria.
///
/// A criterion only constrains the result while its toggle is on. Text terms
/// are trimmed before matching and an empty term matches everything.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterState {
    pub name_enabled: bool,
    pub name_term: String,
    pub age_enabled: bool,
    pub min_age: Option<u32>,
    pub max_age: Option<u32>,
    pub city_enabled: bool,
    pub city_term: String,
}

impl FilterState {
    pub fn matches(&self, user: &User) -> bool {
        if self.name_enabled && !contains_term(&user.name, &self.name_term) {
            return false;
        }

        if self.age_enabled {
            if self.min_age.is_some_and(|min| user.age < min) {
                return false;
            }
            if self.max_age.is_some_and(|max| user.age > max) {
                return false;
            }
        }

        if self.city_enabled && !contains_term(&user.city, &self.city_term) {
            return false;
        }

        true
    }

    pub fn is_active(&self) -> bool {
        (self.name_enabled && !self.name_term.trim().is_empty())
            || (self.age_enabled && (self.min_age.is_some() || self.max_age.is_some()))
            || (self.city_enabled && !self.city_term.trim().is_empty())
    }
}

fn contains_term(value: &str, term: &str) -> bool {
    let term = term.trim();
    if term.is_empty() {
        return true;
    }
    value.to_lowercase().contains(&term.to_lowercase())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub(crate) page_size: usize,
    pub(crate) current_page: usize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            current_page: 1,
        }
    }
}

impl Pagination {
    /// Number of pages needed for `item_count` items, never less than one.
    pub fn total_pages(&self, item_count: usize) -> usize {
        item_count.div_ceil(self.page_size.max(1)).max(1)
    }

    /// Half-open index range of the current page, clipped to `item_count`.
    pub fn bounds(&self, item_count: usize) -> (usize, usize) {
        let start = self
            .current_page
            .saturating_sub(1)
            .saturating_mul(self.page_size)
            .min(item_count);
        let end = start.saturating_add(self.page_size).min(item_count);
        (start, end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pagination_bounds_treat_page_zero_as_first_page() {
        let pagination = Pagination {
            page_size: 5,
            current_page: 0,
        };

        assert_eq!(pagination.bounds(12), (0, 5));
    }

    #[test]
    fn pagination_with_zero_page_size_does_not_divide_by_zero() {
        let pagination = Pagination {
            page_size: 0,
            current_page: 1,
        };

        assert_eq!(pagination.total_pages(12), 12);
        assert_eq!(pagination.total_pages(0), 1);
        assert_eq!(pagination.bounds(12), (0, 0));
    }

    #[test]
    fn is_active_ignores_enabled_filters_without_values() {
        let mut filters = FilterState {
            name_enabled: true,
            age_enabled: true,
            city_enabled: true,
            name_term: "  ".to_string(),
            ..FilterState::default()
        };
        assert!(!filters.is_active());

        filters.max_age = Some(30);
        assert!(filters.is_active());

        filters.age_enabled = false;
        filters.city_term = "pur".to_string();
        assert!(filters.is_active());

        filters.city_enabled = false;
        assert!(!filters.is_active());
    }
}
