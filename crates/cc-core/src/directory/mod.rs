//! Admin-facing customer directory: search, sort and paginate over the list
//! fetched once when the dashboard mounts.
//!
//! The master list is the only stored state. Every derived view (filtered, sorted,
//! paged) is recomputed from it on read, so a balance written back by the ledger is
//! visible in all of them at once.

mod page;

pub use page::{DirectoryPage, SortState};

use crate::{CoreError, Customer, Result as CoreErrorResult, SortDirection, SortKey};

use std::cmp::Ordering;
use std::panic::Location;

use error_location::ErrorLocation;

/// Page sizes offered to the operator.
pub const PAGE_SIZE_OPTIONS: [usize; 4] = [5, 10, 25, 50];
pub const DEFAULT_PAGE_SIZE: usize = 10;

#[derive(Debug, Clone)]
pub struct Directory {
    customers: Vec<Customer>,
    search_term: String,
    sort: Option<SortState>,
    page: usize,
    page_size: usize,
}

impl Default for Directory {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl Directory {
    pub fn new(customers: Vec<Customer>) -> Self {
        Self {
            customers,
            search_term: String::new(),
            sort: None,
            page: 0,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    #[track_caller]
    pub fn with_page_size(customers: Vec<Customer>, page_size: usize) -> CoreErrorResult<Self> {
        let mut directory = Self::new(customers);
        directory.set_page_size(page_size)?;
        Ok(directory)
    }

    /// Replace the master list (e.g. after a fresh fetch). Returns to the first page.
    pub fn replace_all(&mut self, customers: Vec<Customer>) {
        self.customers = customers;
        self.page = 0;
    }

    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    pub fn len(&self) -> usize {
        self.customers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.customers.is_empty()
    }

    pub fn get(&self, customer_id: &str) -> Option<&Customer> {
        self.customers.iter().find(|c| c.id == customer_id)
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn sort(&self) -> Option<SortState> {
        self.sort
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Update the search term. Always returns to the first page.
    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
        self.page = 0;
    }

    /// Select a sort column. Re-selecting the active column flips its direction,
    /// a new column starts ascending.
    pub fn toggle_sort(&mut self, key: SortKey) {
        self.sort = Some(match self.sort {
            Some(current) if current.key == key => SortState {
                key,
                direction: current.direction.flipped(),
            },
            _ => SortState {
                key,
                direction: SortDirection::Ascending,
            },
        });
    }

    /// Jump to a zero-based page, clamped to the last available page.
    pub fn set_page(&mut self, page: usize) {
        self.page = page.min(self.page_count().saturating_sub(1));
    }

    /// Change the page size. Only values from [`PAGE_SIZE_OPTIONS`] are accepted.
    #[track_caller]
    pub fn set_page_size(&mut self, page_size: usize) -> CoreErrorResult<()> {
        if !PAGE_SIZE_OPTIONS.contains(&page_size) {
            return Err(CoreError::InvalidPageSize {
                value: page_size,
                allowed: format!("{PAGE_SIZE_OPTIONS:?}"),
                location: ErrorLocation::from(Location::caller()),
            });
        }
        self.page_size = page_size;
        self.page = 0;
        Ok(())
    }

    /// Write an authoritative balance back into the master list.
    ///
    /// Returns the updated record, or `None` if the customer is not listed.
    pub fn apply_balance(&mut self, customer_id: &str, cuts_remaining: i64) -> Option<&Customer> {
        let customer = self.customers.iter_mut().find(|c| c.id == customer_id)?;
        customer.cuts_remaining = cuts_remaining;
        Some(customer)
    }

    /// Search then sort, before pagination.
    pub fn filtered(&self) -> Vec<&Customer> {
        let mut items = search(&self.customers, &self.search_term);
        if let Some(sort) = self.sort {
            sort_customers(&mut items, sort.key, sort.direction);
        }
        items
    }

    pub fn page_count(&self) -> usize {
        self.filtered().len().div_ceil(self.page_size).max(1)
    }

    /// Items on the current page.
    pub fn page_items(&self) -> Vec<&Customer> {
        let filtered = self.filtered();
        paginate(&filtered, self.page, self.page_size).to_vec()
    }

    /// Snapshot of the current page for rendering.
    pub fn page_view(&self) -> DirectoryPage {
        let filtered = self.filtered();
        let total = filtered.len();
        let items = paginate(&filtered, self.page, self.page_size)
            .iter()
            .map(|c| (*c).clone())
            .collect();

        DirectoryPage {
            items,
            page: self.page,
            page_size: self.page_size,
            page_count: total.div_ceil(self.page_size).max(1),
            total,
            search: self.search_term.clone(),
            sort: self.sort,
        }
    }
}

/// Customers whose name or phone number contains `term`, ignoring case.
/// An empty term matches everyone.
pub fn search<'a>(customers: &'a [Customer], term: &str) -> Vec<&'a Customer> {
    let needle = term.to_lowercase();
    customers
        .iter()
        .filter(|c| c.matches_lowercase(&needle))
        .collect()
}

/// Stable sort. Ties keep their incoming order in both directions.
pub fn sort_customers(items: &mut [&Customer], key: SortKey, direction: SortDirection) {
    items.sort_by(|a, b| {
        let ordering = match key {
            SortKey::Name => compare_text(&a.name, &b.name),
            SortKey::Phone => compare_text(&a.phone_number, &b.phone_number),
            SortKey::CutsRemaining => a.cuts_remaining.cmp(&b.cuts_remaining),
        };
        match direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });
}

/// Zero-based page slice. Out-of-range pages are empty.
pub fn paginate<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    if page_size == 0 {
        return &[];
    }
    let start = page.saturating_mul(page_size);
    let end = start.saturating_add(page_size).min(items.len());
    items.get(start..end).unwrap_or(&[])
}

/// Collation-style comparison: letters compare case-insensitively first, then by
/// exact code points so distinct strings never compare equal.
fn compare_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}
