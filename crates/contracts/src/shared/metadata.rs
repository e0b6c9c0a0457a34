use serde::{Deserialize, Serialize};

/// Lifecycle data of a stored record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityMetadata {
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
    /// Optimistic locking counter, starts at 1
    pub version: i32,
}

impl EntityMetadata {
    pub fn new() -> Self {
        let now = chrono::Utc::now();
        Self {
            created_at: now,
            updated_at: now,
            version: 1,
        }
    }

    pub fn touch(&mut self) {
        self.updated_at = chrono::Utc::now();
    }

    pub fn increment_version(&mut self) {
        self.version += 1;
    }
}

impl Default for EntityMetadata {
    fn default() -> Self {
        Self::new()
    }
}

/// A record as served by the backend: the record itself plus `meta`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stored<T> {
    #[serde(flatten)]
    pub item: T,
    pub meta: EntityMetadata,
}

impl<T> Stored<T> {
    pub fn new(item: T) -> Self {
        Self {
            item,
            meta: EntityMetadata::new(),
        }
    }

    pub fn version(&self) -> i32 {
        self.meta.version
    }

    /// Marks a successful mutation
    pub fn bump(&mut self) {
        self.meta.increment_version();
        self.meta.touch();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Row {
        id: String,
    }

    #[test]
    fn test_stored_flattens_item() {
        let mut stored = Stored::new(Row { id: "x1".into() });
        assert_eq!(stored.version(), 1);
        stored.bump();
        assert_eq!(stored.version(), 2);

        let json = serde_json::to_value(&stored).unwrap();
        assert_eq!(json["id"], "x1");
        assert_eq!(json["meta"]["version"], 2);

        let back: Stored<Row> = serde_json::from_value(json).unwrap();
        assert_eq!(back.item.id, "x1");
    }
}
