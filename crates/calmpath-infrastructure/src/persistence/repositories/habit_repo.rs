use async_trait::async_trait;
use std::sync::Arc;

use calmpath_domain::habit::{Habit, HabitRepository};
use calmpath_domain::shared::{DomainError, HabitId};

use crate::http::docstore::value;
use crate::http::docstore::{DocStoreClient, Document};

const COLLECTION: &str = "habits";

/// Read-only catalog repository; habit documents are maintained out of band.
pub struct DocStoreHabitRepository {
    docstore: Arc<DocStoreClient>,
}

impl DocStoreHabitRepository {
    pub fn new(docstore: Arc<DocStoreClient>) -> Self {
        Self { docstore }
    }

    fn decode(doc: &Document) -> Habit {
        Habit::new(
            HabitId::from_string(doc.doc_id()),
            value::as_string(&doc.fields, "name"),
            value::as_string(&doc.fields, "icon"),
            value::as_bool(&doc.fields, "isPositive"),
        )
    }
}

#[async_trait]
impl HabitRepository for DocStoreHabitRepository {
    async fn find_all(&self) -> Result<Vec<Habit>, DomainError> {
        let documents = self
            .docstore
            .list_documents(COLLECTION)
            .await
            .map_err(|e| DomainError::Repository(e.to_string()))?;

        Ok(documents.iter().map(Self::decode).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_full_document() {
        let doc = Document {
            name: "projects/p/databases/(default)/documents/habits/meditation".to_string(),
            fields: json!({
                "name": { "stringValue": "Meditation" },
                "icon": { "stringValue": "lotus" },
                "isPositive": { "booleanValue": true }
            })
            .as_object()
            .cloned()
            .unwrap(),
        };

        let habit = DocStoreHabitRepository::decode(&doc);
        assert_eq!(habit.id, HabitId::from_string("meditation"));
        assert_eq!(habit.name, "Meditation");
        assert_eq!(habit.icon.as_deref(), Some("lotus"));
        assert_eq!(habit.is_positive, Some(true));
    }

    #[test]
    fn test_decode_bare_document_gets_default_name() {
        let doc = Document {
            name: "projects/p/databases/(default)/documents/habits/h9".to_string(),
            fields: serde_json::Map::new(),
        };

        let habit = DocStoreHabitRepository::decode(&doc);
        assert_eq!(habit.name, "Unnamed Habit");
        assert!(habit.icon.is_none());
    }
}
