//! REST client for the managed document store.
//!
//! Documents live under `projects/{project}/databases/(default)/documents/
//! {collection}/{id}` and carry typed fields (see [`value`]). The client
//! supports get, upsert-by-id (patch), filtered ordered queries, and
//! collection listing — the full contract the repositories need.

pub mod value;

use anyhow::{Context, Result};
use reqwest::StatusCode;
use serde_json::{json, Map, Value};
use std::sync::Arc;
use tokio::sync::RwLock;

use super::HttpClient;
use crate::config::BackendConfig;

/// A fetched document: its full resource name plus typed fields.
#[derive(Debug, Clone)]
pub struct Document {
    pub name: String,
    pub fields: Map<String, Value>,
}

impl Document {
    /// Last path segment of the resource name.
    pub fn doc_id(&self) -> &str {
        self.name.rsplit('/').next().unwrap_or(&self.name)
    }
}

/// Filtered, ordered query against a single collection.
#[derive(Debug, Clone)]
pub struct DocumentQuery {
    collection: String,
    filters: Vec<Value>,
    order_by: Option<(String, &'static str)>,
}

impl DocumentQuery {
    pub fn collection(collection: &str) -> Self {
        Self {
            collection: collection.to_string(),
            filters: Vec::new(),
            order_by: None,
        }
    }

    pub fn where_eq(mut self, field: &str, value: Value) -> Self {
        self.filters.push(field_filter(field, "EQUAL", value));
        self
    }

    pub fn where_gte(mut self, field: &str, value: Value) -> Self {
        self.filters
            .push(field_filter(field, "GREATER_THAN_OR_EQUAL", value));
        self
    }

    pub fn where_lt(mut self, field: &str, value: Value) -> Self {
        self.filters.push(field_filter(field, "LESS_THAN", value));
        self
    }

    pub fn order_by_asc(mut self, field: &str) -> Self {
        self.order_by = Some((field.to_string(), "ASCENDING"));
        self
    }

    fn to_structured_query(&self) -> Value {
        let mut query = json!({
            "from": [{ "collectionId": self.collection }],
        });

        match self.filters.len() {
            0 => {}
            1 => {
                query["where"] = self.filters[0].clone();
            }
            _ => {
                query["where"] = json!({
                    "compositeFilter": {
                        "op": "AND",
                        "filters": self.filters,
                    }
                });
            }
        }

        if let Some((field, direction)) = &self.order_by {
            query["orderBy"] = json!([{
                "field": { "fieldPath": field },
                "direction": direction,
            }]);
        }

        query
    }
}

fn field_filter(field: &str, op: &str, value: Value) -> Value {
    json!({
        "fieldFilter": {
            "field": { "fieldPath": field },
            "op": op,
            "value": value,
        }
    })
}

pub struct DocStoreClient {
    http: Arc<HttpClient>,
    documents_root: String,
    // Bearer token of the signed-in user; set by the auth flow
    auth_token: RwLock<Option<String>>,
}

impl DocStoreClient {
    pub fn new(http: Arc<HttpClient>, config: &BackendConfig) -> Self {
        let documents_root = format!(
            "{}/projects/{}/databases/(default)/documents",
            config.docstore_url.trim_end_matches('/'),
            config.project_id
        );

        Self {
            http,
            documents_root,
            auth_token: RwLock::new(None),
        }
    }

    /// Attach the signed-in user's token to subsequent requests.
    pub async fn set_auth_token(&self, token: Option<String>) {
        *self.auth_token.write().await = token;
    }

    pub async fn get_document(
        &self,
        collection: &str,
        doc_id: &str,
    ) -> Result<Option<Document>> {
        let url = format!("{}/{}/{}", self.documents_root, collection, doc_id);
        let token = self.auth_token.read().await.clone();

        self.http
            .execute_with_retry("Get document", || {
                let url = url.clone();
                let token = token.clone();
                let client = self.http.client.clone();

                async move {
                    let mut request = client.get(&url);
                    if let Some(token) = &token {
                        request = request.bearer_auth(token);
                    }

                    let response = request.send().await.context("Document get failed")?;
                    if response.status() == StatusCode::NOT_FOUND {
                        return Ok(None);
                    }

                    let response = response.error_for_status()?;
                    let body: Value = response.json().await.context("Invalid document body")?;
                    Ok(parse_document(&body))
                }
            })
            .await
    }

    /// Upsert a document by id. With `field_mask` set, only the named
    /// fields are written and the rest of the document is left alone
    /// (merge semantics); without it the whole document is replaced.
    pub async fn patch_document(
        &self,
        collection: &str,
        doc_id: &str,
        fields: Map<String, Value>,
        field_mask: Option<&[&str]>,
    ) -> Result<()> {
        let mut url = url::Url::parse(&format!(
            "{}/{}/{}",
            self.documents_root, collection, doc_id
        ))
        .context("Invalid document URL")?;

        if let Some(mask) = field_mask {
            let mut pairs = url.query_pairs_mut();
            for field in mask {
                pairs.append_pair("updateMask.fieldPaths", field);
            }
        }

        let url = url.to_string();
        let body = json!({ "fields": fields });
        let token = self.auth_token.read().await.clone();

        self.http
            .execute_with_retry("Patch document", || {
                let url = url.clone();
                let body = body.clone();
                let token = token.clone();
                let client = self.http.client.clone();

                async move {
                    let mut request = client.patch(&url).json(&body);
                    if let Some(token) = &token {
                        request = request.bearer_auth(token);
                    }

                    request
                        .send()
                        .await
                        .context("Document patch failed")?
                        .error_for_status()
                        .context("Document patch rejected")?;
                    Ok(())
                }
            })
            .await
    }

    /// Run a filtered query. Results arrive one document per response
    /// entry; entries without a document (read-time markers) are skipped.
    pub async fn run_query(&self, query: &DocumentQuery) -> Result<Vec<Document>> {
        let url = format!("{}:runQuery", self.documents_root);
        let body = json!({ "structuredQuery": query.to_structured_query() });
        let token = self.auth_token.read().await.clone();

        self.http
            .execute_with_retry("Run query", || {
                let url = url.clone();
                let body = body.clone();
                let token = token.clone();
                let client = self.http.client.clone();

                async move {
                    let mut request = client.post(&url).json(&body);
                    if let Some(token) = &token {
                        request = request.bearer_auth(token);
                    }

                    let response = request
                        .send()
                        .await
                        .context("Query failed")?
                        .error_for_status()
                        .context("Query rejected")?;

                    let entries: Vec<Value> =
                        response.json().await.context("Invalid query response")?;
                    Ok(entries
                        .iter()
                        .filter_map(|entry| parse_document(entry.get("document")?))
                        .collect())
                }
            })
            .await
    }

    /// List every document in a collection (catalog-sized collections only).
    pub async fn list_documents(&self, collection: &str) -> Result<Vec<Document>> {
        let url = format!("{}/{}", self.documents_root, collection);
        let token = self.auth_token.read().await.clone();

        self.http
            .execute_with_retry("List documents", || {
                let url = url.clone();
                let token = token.clone();
                let client = self.http.client.clone();

                async move {
                    let mut request = client.get(&url);
                    if let Some(token) = &token {
                        request = request.bearer_auth(token);
                    }

                    let response = request
                        .send()
                        .await
                        .context("Document list failed")?
                        .error_for_status()
                        .context("Document list rejected")?;

                    let body: Value = response.json().await.context("Invalid list response")?;
                    let documents = body
                        .get("documents")
                        .and_then(Value::as_array)
                        .map(|docs| docs.iter().filter_map(parse_document).collect())
                        .unwrap_or_default();
                    Ok(documents)
                }
            })
            .await
    }
}

fn parse_document(value: &Value) -> Option<Document> {
    let name = value.get("name")?.as_str()?.to_string();
    let fields = value
        .get("fields")
        .and_then(Value::as_object)
        .cloned()
        .unwrap_or_default();
    Some(Document { name, fields })
}
