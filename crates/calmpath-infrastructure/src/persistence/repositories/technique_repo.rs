use async_trait::async_trait;
use serde_json::{Map, Value};
use std::sync::Arc;

use calmpath_domain::shared::{DomainError, TechniqueId};
use calmpath_domain::technique::{Technique, TechniqueRepository};

use crate::http::docstore::value;
use crate::http::docstore::{DocStoreClient, Document};

const COLLECTION: &str = "techniques";

pub struct DocStoreTechniqueRepository {
    docstore: Arc<DocStoreClient>,
}

impl DocStoreTechniqueRepository {
    pub fn new(docstore: Arc<DocStoreClient>) -> Self {
        Self { docstore }
    }

    fn to_fields(technique: &Technique) -> Map<String, Value> {
        let mut fields = Map::new();
        fields.insert("name".to_string(), value::string_value(technique.name()));
        fields.insert(
            "category".to_string(),
            value::string_value(technique.category()),
        );
        fields.insert(
            "description".to_string(),
            value::string_value(technique.description()),
        );
        fields.insert(
            "imageURL".to_string(),
            value::string_value(technique.image_url()),
        );
        fields.insert("upvotes".to_string(), value::integer_value(technique.upvotes()));
        fields.insert(
            "downvotes".to_string(),
            value::integer_value(technique.downvotes()),
        );
        fields
    }

    /// Vote counters tolerate both numeric and string encodings; older
    /// documents were written with string counts.
    fn decode(doc: &Document) -> Technique {
        Technique::restore(
            TechniqueId::from_string(doc.doc_id()),
            value::as_string(&doc.fields, "name").unwrap_or_default(),
            value::as_string(&doc.fields, "category").unwrap_or_default(),
            value::as_string(&doc.fields, "description").unwrap_or_default(),
            value::as_string(&doc.fields, "imageURL").unwrap_or_default(),
            decode_count(&doc.fields, "upvotes"),
            decode_count(&doc.fields, "downvotes"),
        )
    }
}

fn decode_count(fields: &Map<String, Value>, key: &str) -> i64 {
    if let Some(v) = value::as_i64(fields, key) {
        return v;
    }
    value::as_string(fields, key)
        .and_then(|s| s.parse().ok())
        .unwrap_or(0)
}

#[async_trait]
impl TechniqueRepository for DocStoreTechniqueRepository {
    async fn find_all(&self) -> Result<Vec<Technique>, DomainError> {
        let documents = self
            .docstore
            .list_documents(COLLECTION)
            .await
            .map_err(|e| DomainError::Repository(e.to_string()))?;

        Ok(documents.iter().map(Self::decode).collect())
    }

    async fn save(&self, technique: &Technique) -> Result<(), DomainError> {
        self.docstore
            .patch_document(
                COLLECTION,
                technique.id().as_str(),
                Self::to_fields(technique),
                None,
            )
            .await
            .map_err(|e| DomainError::Repository(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn doc(fields: Value) -> Document {
        Document {
            name: "projects/p/databases/(default)/documents/techniques/t1".to_string(),
            fields: fields.as_object().cloned().unwrap(),
        }
    }

    #[test]
    fn test_encode_decode_round_trip() {
        let technique = Technique::restore(
            TechniqueId::from_string("t1"),
            "Box Breathing".to_string(),
            "Breathing".to_string(),
            "Inhale, hold, exhale, hold.".to_string(),
            "https://example.com/box.png".to_string(),
            12,
            3,
        );

        let doc = Document {
            name: "projects/p/databases/(default)/documents/techniques/t1".to_string(),
            fields: DocStoreTechniqueRepository::to_fields(&technique),
        };

        let decoded = DocStoreTechniqueRepository::decode(&doc);
        assert_eq!(decoded, technique);
        assert_eq!(decoded.score(), 9);
    }

    #[test]
    fn test_decode_string_vote_counts() {
        let decoded = DocStoreTechniqueRepository::decode(&doc(json!({
            "name": { "stringValue": "Grounding" },
            "upvotes": { "stringValue": "8" },
            "downvotes": { "stringValue": "2" }
        })));

        assert_eq!(decoded.upvotes(), 8);
        assert_eq!(decoded.downvotes(), 2);
    }

    #[test]
    fn test_decode_missing_counts_default_to_zero() {
        let decoded = DocStoreTechniqueRepository::decode(&doc(json!({
            "name": { "stringValue": "Journaling" }
        })));

        assert_eq!(decoded.upvotes(), 0);
        assert_eq!(decoded.downvotes(), 0);
        assert_eq!(decoded.score(), 0);
    }
}
