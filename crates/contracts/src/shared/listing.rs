//! Filter, sort and paginate a dataset the same way on both sides.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap};

use super::metadata::Stored;

pub const DEFAULT_PAGE_SIZE: usize = 50;
pub const MAX_PAGE_SIZE: usize = 500;

/// Query keys with a fixed meaning; every other key is a filter
pub const RESERVED_KEYS: &[&str] = &["q", "sort", "desc", "page", "page_size", "date_from", "date_to"];

#[derive(Debug, Clone, PartialEq)]
pub enum FilterControl {
    Text,
    /// (code, label) pairs; an empty selection means "All"
    Select(Vec<(&'static str, &'static str)>),
    DateRange,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FilterSpec {
    pub field: &'static str,
    pub label: &'static str,
    pub control: FilterControl,
}

impl FilterSpec {
    pub fn select(field: &'static str, label: &'static str, options: Vec<(&'static str, &'static str)>) -> Self {
        Self {
            field,
            label,
            control: FilterControl::Select(options),
        }
    }

    pub fn text(field: &'static str, label: &'static str) -> Self {
        Self {
            field,
            label,
            control: FilterControl::Text,
        }
    }

    pub fn date_range(label: &'static str) -> Self {
        Self {
            field: "date",
            label,
            control: FilterControl::DateRange,
        }
    }
}

/// A record that can be shown in the filterable table.
pub trait ListRecord {
    fn record_id(&self) -> &str;

    /// Fields the free-text search looks at
    fn search_fields(&self) -> Vec<&str>;

    /// Exact match of a select/text filter; unknown fields match everything
    fn matches_filter(&self, field: &str, value: &str) -> bool;

    /// Date used by the date range filter, `YYYY-MM-DD...`
    fn record_date(&self) -> Option<&str> {
        None
    }

    /// `None` when the field is not sortable
    fn compare_by(&self, other: &Self, field: &str) -> Option<Ordering>;

    fn filter_specs() -> Vec<FilterSpec>;

    fn search_placeholder() -> &'static str {
        "Search..."
    }
}

impl<T: ListRecord> ListRecord for Stored<T> {
    fn record_id(&self) -> &str {
        self.item.record_id()
    }

    fn search_fields(&self) -> Vec<&str> {
        self.item.search_fields()
    }

    fn matches_filter(&self, field: &str, value: &str) -> bool {
        self.item.matches_filter(field, value)
    }

    fn record_date(&self) -> Option<&str> {
        self.item.record_date()
    }

    fn compare_by(&self, other: &Self, field: &str) -> Option<Ordering> {
        self.item.compare_by(&other.item, field)
    }

    fn filter_specs() -> Vec<FilterSpec> {
        T::filter_specs()
    }

    fn search_placeholder() -> &'static str {
        T::search_placeholder()
    }
}

/// Total order for amounts; NaN sorts as equal
pub fn cmp_f64(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    pub search: String,
    pub filters: BTreeMap<String, String>,
    pub date_from: Option<String>,
    pub date_to: Option<String>,
    pub sort: Option<String>,
    pub desc: bool,
    pub page: usize,
    pub page_size: usize,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            search: String::new(),
            filters: BTreeMap::new(),
            date_from: None,
            date_to: None,
            sort: None,
            desc: false,
            page: 0,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

fn non_empty(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

impl ListQuery {
    /// Builds a query from flat query-string params
    pub fn from_params(params: &HashMap<String, String>) -> Self {
        let mut query = ListQuery::default();
        for (key, value) in params {
            match key.as_str() {
                "q" => query.search = value.trim().to_string(),
                "sort" => query.sort = non_empty(value),
                "desc" => query.desc = matches!(value.as_str(), "true" | "1"),
                "page" => query.page = value.parse().unwrap_or(0),
                "page_size" => query.page_size = value.parse().unwrap_or(DEFAULT_PAGE_SIZE),
                "date_from" => query.date_from = non_empty(value),
                "date_to" => query.date_to = non_empty(value),
                _ => {
                    if let Some(v) = non_empty(value) {
                        query.filters.insert(key.clone(), v);
                    }
                }
            }
        }
        query.page_size = query.page_size.clamp(1, MAX_PAGE_SIZE);
        query
    }

    /// Inverse of `from_params`; defaults and empty values are omitted
    pub fn to_params(&self) -> BTreeMap<String, String> {
        let mut params: BTreeMap<String, String> = self
            .filters
            .iter()
            .filter(|(k, v)| !v.is_empty() && !RESERVED_KEYS.contains(&k.as_str()))
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();

        if !self.search.trim().is_empty() {
            params.insert("q".into(), self.search.trim().to_string());
        }
        if let Some(sort) = &self.sort {
            params.insert("sort".into(), sort.clone());
            if self.desc {
                params.insert("desc".into(), "true".into());
            }
        }
        if let Some(from) = &self.date_from {
            params.insert("date_from".into(), from.clone());
        }
        if let Some(to) = &self.date_to {
            params.insert("date_to".into(), to.clone());
        }
        if self.page > 0 {
            params.insert("page".into(), self.page.to_string());
        }
        if self.page_size != DEFAULT_PAGE_SIZE {
            params.insert("page_size".into(), self.page_size.to_string());
        }
        params
    }

    pub fn set_filter(&mut self, field: &str, value: &str) {
        match non_empty(value) {
            Some(v) => {
                self.filters.insert(field.to_string(), v);
            }
            None => {
                self.filters.remove(field);
            }
        }
    }

    pub fn filter(&self, field: &str) -> &str {
        self.filters.get(field).map(String::as_str).unwrap_or("")
    }

    /// Filters plus search plus date bounds that are set
    pub fn active_filters_count(&self) -> usize {
        self.filters.len()
            + usize::from(!self.search.is_empty())
            + usize::from(self.date_from.is_some() || self.date_to.is_some())
    }

    pub fn matches<T: ListRecord>(&self, record: &T) -> bool {
        let needle = self.search.trim().to_lowercase();
        if !needle.is_empty()
            && !record
                .search_fields()
                .iter()
                .any(|f| f.to_lowercase().contains(&needle))
        {
            return false;
        }

        if !self
            .filters
            .iter()
            .all(|(field, value)| record.matches_filter(field, value))
        {
            return false;
        }

        if self.date_from.is_some() || self.date_to.is_some() {
            let Some(date) = record.record_date().and_then(|d| d.get(..10)) else {
                return false;
            };
            if let Some(from) = &self.date_from {
                if date < from.as_str() {
                    return false;
                }
            }
            if let Some(to) = &self.date_to {
                if date > to.as_str() {
                    return false;
                }
            }
        }

        true
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub total: usize,
    pub page: usize,
    pub page_size: usize,
    pub total_pages: usize,
}

/// Filtered and sorted rows without pagination (CSV exports use this)
pub fn filter_sorted<'a, T: ListRecord>(items: &'a [T], query: &ListQuery) -> Vec<&'a T> {
    let mut rows: Vec<&T> = items.iter().filter(|r| query.matches(*r)).collect();

    if let Some(field) = query.sort.as_deref() {
        if let (Some(first), Some(_)) = (rows.first(), rows.get(1)) {
            if first.compare_by(first, field).is_some() {
                rows.sort_by(|a, b| {
                    let ord = a.compare_by(b, field).unwrap_or(Ordering::Equal);
                    if query.desc {
                        ord.reverse()
                    } else {
                        ord
                    }
                });
            }
        }
    }
    rows
}

/// Filters, sorts (stable) and cuts one page out of `items`.
pub fn apply_query<T: ListRecord + Clone>(items: &[T], query: &ListQuery) -> Paginated<T> {
    let rows = filter_sorted(items, query);
    let page_size = query.page_size.clamp(1, MAX_PAGE_SIZE);
    let total = rows.len();
    let total_pages = total.div_ceil(page_size);
    let items = rows
        .into_iter()
        .skip(query.page.saturating_mul(page_size))
        .take(page_size)
        .cloned()
        .collect();

    Paginated {
        items,
        total,
        page: query.page,
        page_size,
        total_pages,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        id: &'static str,
        name: &'static str,
        kind: &'static str,
        amount: f64,
        date: Option<&'static str>,
    }

    impl ListRecord for Row {
        fn record_id(&self) -> &str {
            self.id
        }

        fn search_fields(&self) -> Vec<&str> {
            vec![self.id, self.name]
        }

        fn matches_filter(&self, field: &str, value: &str) -> bool {
            match field {
                "kind" => self.kind == value,
                _ => true,
            }
        }

        fn record_date(&self) -> Option<&str> {
            self.date
        }

        fn compare_by(&self, other: &Self, field: &str) -> Option<Ordering> {
            match field {
                "amount" => Some(cmp_f64(self.amount, other.amount)),
                "name" => Some(self.name.cmp(other.name)),
                _ => None,
            }
        }

        fn filter_specs() -> Vec<FilterSpec> {
            vec![FilterSpec::select("kind", "Kind", vec![("a", "A"), ("b", "B")])]
        }
    }

    fn rows() -> Vec<Row> {
        vec![
            Row { id: "J-1", name: "Sarah Mitchell", kind: "a", amount: 120.0, date: Some("2025-02-16 10:00") },
            Row { id: "J-2", name: "James Chen", kind: "b", amount: 85.0, date: Some("2025-02-15 14:30") },
            Row { id: "J-3", name: "Emma Wilson", kind: "a", amount: 85.0, date: Some("2025-02-14 09:00") },
            Row { id: "J-4", name: "Sam Other", kind: "b", amount: 200.0, date: None },
        ]
    }

    fn ids(page: &Paginated<Row>) -> Vec<&'static str> {
        page.items.iter().map(|r| r.id).collect()
    }

    #[test]
    fn test_search_is_case_insensitive_and_trimmed() {
        let query = ListQuery { search: "  sArAh ".into(), ..Default::default() };
        assert_eq!(ids(&apply_query(&rows(), &query)), vec!["J-1"]);

        let query = ListQuery { search: "j-".into(), ..Default::default() };
        assert_eq!(apply_query(&rows(), &query).total, 4);
    }

    #[test]
    fn test_filters_combine_with_and() {
        let mut query = ListQuery { search: "sa".into(), ..Default::default() };
        query.set_filter("kind", "b");
        assert_eq!(ids(&apply_query(&rows(), &query)), vec!["J-4"]);

        query.set_filter("kind", "");
        assert!(query.filters.is_empty());
    }

    #[test]
    fn test_date_range_is_inclusive_and_drops_undated() {
        let query = ListQuery {
            date_from: Some("2025-02-15".into()),
            date_to: Some("2025-02-16".into()),
            ..Default::default()
        };
        assert_eq!(ids(&apply_query(&rows(), &query)), vec!["J-1", "J-2"]);

        let query = ListQuery { date_to: Some("2025-02-14".into()), ..Default::default() };
        assert_eq!(ids(&apply_query(&rows(), &query)), vec!["J-3"]);
    }

    #[test]
    fn test_sort_is_stable_and_reversible() {
        let mut query = ListQuery { sort: Some("amount".into()), ..Default::default() };
        assert_eq!(ids(&apply_query(&rows(), &query)), vec!["J-2", "J-3", "J-1", "J-4"]);

        query.desc = true;
        assert_eq!(ids(&apply_query(&rows(), &query)), vec!["J-4", "J-1", "J-2", "J-3"]);

        query.sort = Some("unknown".into());
        assert_eq!(ids(&apply_query(&rows(), &query)), vec!["J-1", "J-2", "J-3", "J-4"]);
    }

    #[test]
    fn test_pagination_arithmetic() {
        let query = ListQuery { page: 1, page_size: 3, ..Default::default() };
        let page = apply_query(&rows(), &query);
        assert_eq!(page.total, 4);
        assert_eq!(page.total_pages, 2);
        assert_eq!(ids(&page), vec!["J-4"]);

        let query = ListQuery { page: 5, page_size: 3, ..Default::default() };
        assert!(apply_query(&rows(), &query).items.is_empty());

        let query = ListQuery { page_size: 0, ..Default::default() };
        assert_eq!(apply_query(&rows(), &query).page_size, 1);
    }

    #[test]
    fn test_params_split_reserved_and_filters() {
        let params: HashMap<String, String> = [
            ("q", "sarah"),
            ("status", "pending"),
            ("category", ""),
            ("page", "2"),
            ("page_size", "9999"),
            ("desc", "true"),
            ("sort", "amount"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        let query = ListQuery::from_params(&params);
        assert_eq!(query.search, "sarah");
        assert_eq!(query.filter("status"), "pending");
        assert!(!query.filters.contains_key("category"));
        assert_eq!(query.page, 2);
        assert_eq!(query.page_size, MAX_PAGE_SIZE);
        assert!(query.desc);

        let back = ListQuery::from_params(&query.to_params().into_iter().collect());
        assert_eq!(back, query);
    }
}
