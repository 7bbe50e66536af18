//! The header search box.

use crate::routes::Route;

/// Search box that turns a submitted keyword into a navigation request.
#[derive(Debug, Clone, Copy, Default)]
pub struct SearchBox;

impl SearchBox {
    /// Submit a keyword.
    ///
    /// A blank keyword navigates to the unfiltered listing instead of an
    /// empty search.
    #[must_use]
    pub fn submit(keyword: &str) -> Route {
        let keyword = keyword.trim();
        if keyword.is_empty() {
            Route::Products { category: None }
        } else {
            Route::Search(keyword.to_string())
        }
    }
}
