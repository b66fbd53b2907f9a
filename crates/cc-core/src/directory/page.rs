use crate::{Customer, SortDirection, SortKey};

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SortState {
    pub key: SortKey,
    pub direction: SortDirection,
}

/// One rendered page of the directory.
#[derive(Debug, Clone, Serialize)]
pub struct DirectoryPage {
    pub items: Vec<Customer>,
    pub page: usize,
    pub page_size: usize,
    pub page_count: usize,
    pub total: usize,
    pub search: String,
    pub sort: Option<SortState>,
}
