//! Page category constants for tab pages.
//!
//! Every page rendered inside a tab declares an HTML `id` in the format
//! `{entity}--{category}` (e.g. `"a012_payouts--list"`) and a
//! `data-page-category` with one of the constants below.

/// Filterable table of records
pub const PAGE_CAT_LIST: &str = "list";

/// Detail placeholder
pub const PAGE_CAT_DETAIL: &str = "detail";

/// Metric cards and summaries
pub const PAGE_CAT_DASHBOARD: &str = "dashboard";

/// Free-form page such as the two-pane dispatch view
pub const PAGE_CAT_CUSTOM: &str = "custom";

/// Validate that a page id matches the `{entity}--{category}` format.
pub fn is_valid_page_id(id: &str) -> bool {
    matches!(id.split_once("--"), Some((entity, category)) if !entity.is_empty() && !category.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_id_format() {
        assert!(is_valid_page_id("a002_jobs_queue--list"));
        assert!(!is_valid_page_id("a002_jobs_queue"));
        assert!(!is_valid_page_id("--list"));
        assert!(!is_valid_page_id("dashboard--"));
    }
}
