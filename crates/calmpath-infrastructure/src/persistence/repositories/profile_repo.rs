use async_trait::async_trait;
use chrono::NaiveDate;
use serde_json::{Map, Value};
use std::collections::BTreeSet;
use std::sync::Arc;

use calmpath_domain::profile::{UserProfile, UserProfileRepository};
use calmpath_domain::shared::{DomainError, HabitId, UserId};

use crate::http::docstore::value;
use crate::http::docstore::{DocStoreClient, Document};

const COLLECTION: &str = "users";

const PROFILE_FIELDS: &[&str] = &[
    "email",
    "name",
    "bio",
    "profileImageURL",
    "checkInCount",
    "lastCheckInDate",
    "currentStreak",
    "selectedHabits",
];

pub struct DocStoreUserProfileRepository {
    docstore: Arc<DocStoreClient>,
}

impl DocStoreUserProfileRepository {
    pub fn new(docstore: Arc<DocStoreClient>) -> Self {
        Self { docstore }
    }

    fn to_fields(profile: &UserProfile) -> Map<String, Value> {
        let mut fields = Map::new();
        fields.insert("email".to_string(), value::string_value(profile.email()));
        fields.insert("name".to_string(), value::string_value(profile.name()));
        if let Some(bio) = profile.bio() {
            fields.insert("bio".to_string(), value::string_value(bio));
        }
        if let Some(url) = profile.profile_image_url() {
            fields.insert("profileImageURL".to_string(), value::string_value(url));
        }
        fields.insert(
            "checkInCount".to_string(),
            value::integer_value(profile.check_in_count() as i64),
        );
        if let Some(date) = profile.last_check_in_date() {
            fields.insert("lastCheckInDate".to_string(), value::date_value(date));
        }
        fields.insert(
            "currentStreak".to_string(),
            value::integer_value(profile.current_streak() as i64),
        );
        fields.insert(
            "selectedHabits".to_string(),
            value::string_array_value(profile.selected_habit_ids().iter().map(|h| h.as_str())),
        );
        fields
    }

    /// Absent aggregates decode to zero so that older documents written
    /// before the stats fields existed keep loading.
    fn decode(doc: &Document) -> UserProfile {
        let selected: BTreeSet<HabitId> = value::as_string_array(&doc.fields, "selectedHabits")
            .unwrap_or_default()
            .into_iter()
            .map(|s| HabitId::from_string(&s))
            .collect();

        UserProfile::restore(
            UserId::from_string(doc.doc_id()),
            value::as_string(&doc.fields, "email").unwrap_or_default(),
            value::as_string(&doc.fields, "name").unwrap_or_default(),
            value::as_string(&doc.fields, "bio"),
            value::as_string(&doc.fields, "profileImageURL"),
            value::as_i64(&doc.fields, "checkInCount").unwrap_or(0) as u32,
            value::as_date(&doc.fields, "lastCheckInDate"),
            value::as_i64(&doc.fields, "currentStreak").unwrap_or(0) as u32,
            selected,
        )
    }
}

#[async_trait]
impl UserProfileRepository for DocStoreUserProfileRepository {
    async fn save(&self, profile: &UserProfile) -> Result<(), DomainError> {
        // Field-masked patch: merge semantics, untouched fields survive
        self.docstore
            .patch_document(
                COLLECTION,
                profile.id().as_str(),
                Self::to_fields(profile),
                Some(PROFILE_FIELDS),
            )
            .await
            .map_err(|e| DomainError::Repository(e.to_string()))
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<UserProfile>, DomainError> {
        let document = self
            .docstore
            .get_document(COLLECTION, id.as_str())
            .await
            .map_err(|e| DomainError::Repository(e.to_string()))?;

        Ok(document.map(|doc| Self::decode(&doc)))
    }

    async fn update_check_in_stats(
        &self,
        user_id: &UserId,
        check_in_count: u32,
        today: NaiveDate,
    ) -> Result<(), DomainError> {
        let profile = self
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| DomainError::UserNotFound(user_id.to_string()))?;

        let updated = profile.with_check_in_recorded(check_in_count, today);

        let mut fields = Map::new();
        fields.insert(
            "checkInCount".to_string(),
            value::integer_value(updated.check_in_count() as i64),
        );
        fields.insert("lastCheckInDate".to_string(), value::date_value(today));
        fields.insert(
            "currentStreak".to_string(),
            value::integer_value(updated.current_streak() as i64),
        );

        self.docstore
            .patch_document(
                COLLECTION,
                user_id.as_str(),
                fields,
                Some(&["checkInCount", "lastCheckInDate", "currentStreak"]),
            )
            .await
            .map_err(|e| DomainError::Repository(e.to_string()))
    }

    async fn save_selected_habits(
        &self,
        user_id: &UserId,
        habit_ids: &BTreeSet<HabitId>,
    ) -> Result<(), DomainError> {
        let mut fields = Map::new();
        fields.insert(
            "selectedHabits".to_string(),
            value::string_array_value(habit_ids.iter().map(|h| h.as_str())),
        );

        self.docstore
            .patch_document(COLLECTION, user_id.as_str(), fields, Some(&["selectedHabits"]))
            .await
            .map_err(|e| DomainError::Repository(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_encode_decode_round_trip() {
        let profile = UserProfile::restore(
            UserId::from_string("user-1"),
            "user@example.com".to_string(),
            "Hadi".to_string(),
            Some("getting better".to_string()),
            None,
            5,
            NaiveDate::from_ymd_opt(2024, 10, 20),
            3,
            [HabitId::from_string("meditation")].into_iter().collect(),
        );

        let doc = Document {
            name: "projects/p/databases/(default)/documents/users/user-1".to_string(),
            fields: DocStoreUserProfileRepository::to_fields(&profile),
        };

        let decoded = DocStoreUserProfileRepository::decode(&doc);
        assert_eq!(decoded, profile);
    }

    #[test]
    fn test_decode_tolerates_missing_aggregates() {
        let doc = Document {
            name: "projects/p/databases/(default)/documents/users/user-2".to_string(),
            fields: json!({ "email": { "stringValue": "old@example.com" } })
                .as_object()
                .cloned()
                .unwrap(),
        };

        let decoded = DocStoreUserProfileRepository::decode(&doc);
        assert_eq!(decoded.check_in_count(), 0);
        assert_eq!(decoded.current_streak(), 0);
        assert!(decoded.last_check_in_date().is_none());
        assert!(decoded.selected_habit_ids().is_empty());
    }
}
