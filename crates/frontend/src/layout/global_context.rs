use contracts::shared::detail::DetailRef;
use leptos::logging::log;
use leptos::prelude::Effect;
use leptos::prelude::*;
use std::collections::HashMap;
use web_sys::window;

use crate::layout::tabs::tab_label_for_key;

/// Tab opened when the URL names none
pub const HOME_TAB: &str = "d400_dashboard";

/// `Admin InstaFix – Payouts to Professionals`
pub fn document_title(page: &str) -> String {
    format!("Admin InstaFix \u{2013} {}", page)
}

/// Tab to open for a query string: `?active=<key>` wins, then a detail
/// link such as `?job=J-2841`.
pub fn tab_key_from_query(search: &str) -> Option<String> {
    let query = search.trim_start_matches('?');
    let params: HashMap<String, String> = serde_qs::from_str(query).unwrap_or_default();
    if let Some(active) = params.get("active").filter(|k| !k.is_empty()) {
        return Some(active.clone());
    }
    DetailRef::from_query(query).map(|d| d.tab_key())
}

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub opened: RwSignal<Vec<Tab>>,
    pub active: RwSignal<Option<String>>,
    pub left_open: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            opened: RwSignal::new(vec![]),
            active: RwSignal::new(None),
            left_open: RwSignal::new(true),
        }
    }

    /// Opens the tab named by the URL, then keeps `?active=` and the
    /// document title in sync with the active tab.
    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        let initial = tab_key_from_query(&search).unwrap_or_else(|| HOME_TAB.to_string());
        self.open_tab(&initial, &tab_label_for_key(&initial));

        let this = *self;
        Effect::new(move |_| {
            let Some(active_key) = this.active.get() else {
                return;
            };

            let title = this.opened.with_untracked(|tabs| {
                tabs.iter()
                    .find(|t| t.key == active_key)
                    .map(|t| t.title.clone())
            });
            if let Some(document) = window().and_then(|w| w.document()) {
                document.set_title(&document_title(
                    &title.unwrap_or_else(|| tab_label_for_key(&active_key)),
                ));
            }

            let query_string = serde_qs::to_string(&HashMap::from([(
                "active".to_string(),
                active_key.clone(),
            )]))
            .unwrap_or_default();
            let new_url = format!("?{}", query_string);

            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();

            if current_search != new_url {
                if let Some(w) = window() {
                    if let Ok(history) = w.history() {
                        let _ = history.replace_state_with_url(
                            &wasm_bindgen::JsValue::NULL,
                            "",
                            Some(&new_url),
                        );
                    }
                }
            }
        });
    }

    pub fn open_tab(&self, key: &str, title: &str) {
        log!("open_tab: key='{}', title='{}'", key, title);
        let exists = self
            .opened
            .with_untracked(|tabs| tabs.iter().any(|tab| tab.key == key));
        if !exists {
            let tab = Tab {
                key: key.to_string(),
                title: title.to_string(),
            };
            self.opened.update(|tabs| tabs.push(tab));
        }
        self.activate_tab(key);
    }

    /// Opens the shared detail placeholder for a record
    pub fn open_detail(&self, detail: &DetailRef) {
        let key = detail.tab_key();
        self.open_tab(&key, &tab_label_for_key(&key));
    }

    pub fn activate_tab(&self, key: &str) {
        self.active.set(Some(key.to_string()));
    }

    pub fn close_tab(&self, key: &str) {
        log!("close_tab: key='{}'", key);
        self.opened.update(|tabs| tabs.retain(|tab| tab.key != key));
        if self
            .active
            .with_untracked(|active| active.as_deref() == Some(key))
        {
            let next_active = self
                .opened
                .with_untracked(|tabs| tabs.last().map(|t| t.key.clone()));
            self.active.set(next_active);
        }
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|val| *val = !*val);
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tab {
    pub key: String,
    pub title: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_title() {
        assert_eq!(
            document_title("Disputes"),
            "Admin InstaFix \u{2013} Disputes"
        );
    }

    #[test]
    fn test_tab_key_from_query() {
        assert_eq!(
            tab_key_from_query("?active=a012_payouts").as_deref(),
            Some("a012_payouts")
        );
        assert_eq!(
            tab_key_from_query("?job=J-2841").as_deref(),
            Some("detail__job__J-2841")
        );
        assert_eq!(
            tab_key_from_query("?dispute=d1&chat=1").as_deref(),
            Some("detail__dispute__d1__chat")
        );
        assert_eq!(tab_key_from_query(""), None);
    }
}
