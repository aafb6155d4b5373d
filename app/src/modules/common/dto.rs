use serde::{Deserialize, Serialize};
use validator::Validate;

fn default_page() -> u64 {
    1
}

fn default_page_size() -> u64 {
    10
}

#[derive(Deserialize, Validate, Clone, Copy)]
pub struct Pagination {
    #[serde(default = "default_page")]
    #[validate(range(min = 1, max = 99999))]
    pub page: u64,

    #[serde(default = "default_page_size")]
    #[validate(range(min = 1, max = 100))]
    pub page_size: u64,
}

impl Default for Pagination {
    fn default() -> Self {
        Pagination {
            page: default_page(),
            page_size: default_page_size(),
        }
    }
}

/// Pagination metadata of a executed query
#[derive(Serialize)]
pub struct PaginationResult<T> {
    /// 1 Indexed Page number
    ///
    /// used to determine the offset used in the query
    pub page: u64,

    /// Total pages available for the given query
    pub page_count: u64,

    /// Total items available for the given query
    pub item_count: u64,

    /// Amount of records per page
    pub page_size: u64,

    /// Records from the query
    pub records: Vec<T>,
}
