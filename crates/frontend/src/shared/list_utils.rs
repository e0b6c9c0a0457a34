//! Sorting helpers for list headers.

use contracts::shared::listing::ListQuery;

/// Sort indicator for a header
pub fn get_sort_indicator(current_field: &str, field: &str, ascending: bool) -> &'static str {
    if current_field == field {
        if ascending {
            " ▲"
        } else {
            " ▼"
        }
    } else {
        " ⇅"
    }
}

/// CSS class of the indicator; the active column is highlighted
pub fn get_sort_class(current_field: &str, field: &str) -> &'static str {
    if current_field == field {
        "table__sort-icon table__sort-icon--active"
    } else {
        "table__sort-icon"
    }
}

/// Click on a sortable header: the same column flips the direction, a new
/// column starts ascending. Always returns to the first page.
pub fn toggle_sort(query: &mut ListQuery, field: &str) {
    if query.sort.as_deref() == Some(field) {
        query.desc = !query.desc;
    } else {
        query.sort = Some(field.to_string());
        query.desc = false;
    }
    query.page = 0;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_indicator() {
        assert_eq!(get_sort_indicator("price", "price", true), " ▲");
        assert_eq!(get_sort_indicator("price", "price", false), " ▼");
        assert_eq!(get_sort_indicator("price", "date", true), " ⇅");
    }

    #[test]
    fn test_toggle_sort() {
        let mut query = ListQuery {
            page: 3,
            ..Default::default()
        };
        toggle_sort(&mut query, "price");
        assert_eq!(query.sort.as_deref(), Some("price"));
        assert!(!query.desc);
        assert_eq!(query.page, 0);

        toggle_sort(&mut query, "price");
        assert!(query.desc);

        toggle_sort(&mut query, "date");
        assert_eq!(query.sort.as_deref(), Some("date"));
        assert!(!query.desc);
    }
}
