mod listing;
mod request;
mod wrapper;

pub use listing::*;
pub use request::*;
pub use wrapper::*;

use serde::Deserialize;

/// Raw query string of `GET /api/articles`. Every field stays a string so that
/// malformed values reach validation instead of failing deserialization.
#[derive(Deserialize, Debug, Default)]
pub struct ArticleQueryParams {
    pub topic: Option<String>,
    pub author: Option<String>,
    pub sort_by: Option<String>,
    pub order: Option<String>,
    pub limit: Option<String>,
    pub p: Option<String>,
    pub total_count: Option<String>,
}

#[derive(Deserialize, Debug, Default)]
pub struct PageQueryParams {
    pub limit: Option<String>,
    pub p: Option<String>,
}
