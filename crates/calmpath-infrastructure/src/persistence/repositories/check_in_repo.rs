use async_trait::async_trait;
use chrono::{Duration, NaiveDate};
use log::warn;
use serde_json::{Map, Value};
use std::collections::BTreeSet;
use std::sync::Arc;

use calmpath_domain::check_in::{CheckIn, CheckInRepository};
use calmpath_domain::shared::{CheckInId, DomainError, HabitId, UserId};

use crate::http::docstore::value;
use crate::http::docstore::{DocStoreClient, Document, DocumentQuery};

const COLLECTION: &str = "checkIns";

pub struct DocStoreCheckInRepository {
    docstore: Arc<DocStoreClient>,
}

impl DocStoreCheckInRepository {
    pub fn new(docstore: Arc<DocStoreClient>) -> Self {
        Self { docstore }
    }

    fn to_fields(check_in: &CheckIn) -> Map<String, Value> {
        let mut fields = Map::new();
        fields.insert(
            "userId".to_string(),
            value::string_value(check_in.user_id().as_str()),
        );
        fields.insert("date".to_string(), value::date_value(check_in.date()));
        fields.insert(
            "anxietyLevel".to_string(),
            value::double_value(check_in.anxiety_level().value()),
        );
        fields.insert(
            "selectedHabits".to_string(),
            value::string_array_value(check_in.selected_habits().iter().map(|h| h.as_str())),
        );
        fields.insert("notes".to_string(), value::string_value(check_in.notes()));
        fields
    }

    /// Decode a stored document, or `None` when required fields are
    /// missing or malformed. Malformed records degrade to "no data
    /// point", never a hard failure.
    fn decode(doc: &Document) -> Option<CheckIn> {
        let user_id = value::as_string(&doc.fields, "userId")?;
        let date = value::as_date(&doc.fields, "date")?;
        let anxiety_level = value::as_f64(&doc.fields, "anxietyLevel")?;
        let selected_habits: BTreeSet<HabitId> = value::as_string_array(&doc.fields, "selectedHabits")
            .unwrap_or_default()
            .into_iter()
            .map(|s| HabitId::from_string(&s))
            .collect();
        let notes = value::as_string(&doc.fields, "notes").unwrap_or_default();

        CheckIn::restore(
            CheckInId::from_string(doc.doc_id()),
            UserId::from_string(&user_id),
            date,
            anxiety_level,
            selected_habits,
            notes,
        )
        .ok()
    }

    fn decode_all(documents: &[Document]) -> Vec<CheckIn> {
        documents
            .iter()
            .filter_map(|doc| {
                let decoded = Self::decode(doc);
                if decoded.is_none() {
                    warn!("[checkins] skip malformed document id={}", doc.doc_id());
                }
                decoded
            })
            .collect()
    }
}

#[async_trait]
impl CheckInRepository for DocStoreCheckInRepository {
    async fn upsert(&self, check_in: &CheckIn) -> Result<(), DomainError> {
        self.docstore
            .patch_document(
                COLLECTION,
                check_in.id().as_str(),
                Self::to_fields(check_in),
                None,
            )
            .await
            .map_err(|e| DomainError::Repository(e.to_string()))
    }

    async fn find_for_day(
        &self,
        user_id: &UserId,
        date: NaiveDate,
    ) -> Result<Option<CheckIn>, DomainError> {
        let query = DocumentQuery::collection(COLLECTION)
            .where_eq("userId", value::string_value(user_id.as_str()))
            .where_gte("date", value::date_value(date))
            .where_lt("date", value::date_value(date + Duration::days(1)));

        let documents = self
            .docstore
            .run_query(&query)
            .await
            .map_err(|e| DomainError::Repository(e.to_string()))?;

        Ok(Self::decode_all(&documents).into_iter().next())
    }

    async fn list_since(
        &self,
        user_id: &UserId,
        since: NaiveDate,
    ) -> Result<Vec<CheckIn>, DomainError> {
        let query = DocumentQuery::collection(COLLECTION)
            .where_eq("userId", value::string_value(user_id.as_str()))
            .where_gte("date", value::date_value(since))
            .order_by_asc("date");

        let documents = self
            .docstore
            .run_query(&query)
            .await
            .map_err(|e| DomainError::Repository(e.to_string()))?;

        Ok(Self::decode_all(&documents))
    }

    async fn count_for_user(&self, user_id: &UserId) -> Result<u32, DomainError> {
        let query = DocumentQuery::collection(COLLECTION)
            .where_eq("userId", value::string_value(user_id.as_str()));

        let documents = self
            .docstore
            .run_query(&query)
            .await
            .map_err(|e| DomainError::Repository(e.to_string()))?;

        Ok(documents.len() as u32)
    }
}
