//! Links to the shared detail placeholder.
//!
//! A detail link is a single query parameter naming the record
//! (`?job=J-2841`), optionally followed by `chat=1`. Keys are not resolved
//! against any store.

use serde::{Deserialize, Serialize};

const TAB_PREFIX: &str = "detail__";
const CHAT_SUFFIX: &str = "__chat";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetailRef {
    pub param: String,
    pub value: String,
    #[serde(default)]
    pub chat: bool,
}

impl DetailRef {
    pub fn new(param: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            param: param.into(),
            value: value.into(),
            chat: false,
        }
    }

    pub fn with_chat(mut self, chat: bool) -> Self {
        self.chat = chat;
        self
    }

    /// `job=J-2841` or `dispute=d1&chat=1`
    pub fn to_query(&self) -> String {
        if self.chat {
            format!("{}={}&chat=1", self.param, self.value)
        } else {
            format!("{}={}", self.param, self.value)
        }
    }

    /// Parses a query string with or without the leading `?`.
    pub fn from_query(query: &str) -> Option<Self> {
        let query = query.strip_prefix('?').unwrap_or(query);
        let mut found: Option<DetailRef> = None;
        let mut chat = false;

        for pair in query.split('&').filter(|p| !p.is_empty()) {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            if key == "chat" {
                chat = value == "1";
            } else if found.is_none() && !key.is_empty() && !value.is_empty() {
                found = Some(DetailRef::new(key, value));
            }
        }

        found.map(|d| d.with_chat(chat))
    }

    /// Tab key, e.g. `detail__job__J-2841`
    pub fn tab_key(&self) -> String {
        let mut key = format!("{}{}__{}", TAB_PREFIX, self.param, self.value);
        if self.chat {
            key.push_str(CHAT_SUFFIX);
        }
        key
    }

    pub fn from_tab_key(key: &str) -> Option<Self> {
        let rest = key.strip_prefix(TAB_PREFIX)?;
        let (param, value) = rest.split_once("__")?;
        let (value, chat) = match value.strip_suffix(CHAT_SUFFIX) {
            Some(v) => (v, true),
            None => (value, false),
        };
        if param.is_empty() || value.is_empty() {
            return None;
        }
        Some(DetailRef::new(param, value).with_chat(chat))
    }

    pub fn is_tab_key(key: &str) -> bool {
        key.starts_with(TAB_PREFIX)
    }
}
