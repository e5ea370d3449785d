use async_trait::async_trait;
use kernel::repository::document::DocumentStore;
use reqwest::{Client, StatusCode};
use serde_json::{json, Map, Value};
use shared::{
    config::FirestoreConfig,
    error::{AppError, AppResult},
};

/// `DocumentStore` backed by the Firestore REST API.
///
/// A `PATCH` on a document name replaces the document (creating it when
/// missing); adding `updateMask.fieldPaths` for each top-level key turns
/// the same call into a merge.
pub struct FirestoreClient {
    http: Client,
    base_url: String,
    project_id: String,
    api_key: Option<String>,
}

impl FirestoreClient {
    pub fn new(config: &FirestoreConfig) -> Self {
        Self {
            http: Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            project_id: config.project_id.clone(),
            api_key: config.api_key.clone(),
        }
    }

    fn document_url(&self, path: &str) -> String {
        format!(
            "{}/v1/projects/{}/databases/(default)/documents/{}",
            self.base_url, self.project_id, path
        )
    }

    async fn patch(&self, path: &str, document: &Value, merge: bool) -> AppResult<()> {
        let fields = encode_fields(document)?;
        let mut request = self
            .http
            .patch(self.document_url(path))
            .json(&json!({ "fields": fields }));

        if let Some(key) = &self.api_key {
            request = request.query(&[("key", key.as_str())]);
        }
        if merge {
            let mask: Vec<(&str, &String)> = document
                .as_object()
                .map(|fields| fields.keys().map(|k| ("updateMask.fieldPaths", k)).collect())
                .unwrap_or_default();
            request = request.query(&mask);
        }

        let response = request.send().await?;
        if response.status().is_success() {
            return Ok(());
        }
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        Err(AppError::DocumentStoreError(error_message(status, &body)))
    }
}

#[async_trait]
impl DocumentStore for FirestoreClient {
    async fn put(&self, path: &str, document: &Value) -> AppResult<()> {
        self.patch(path, document, false).await
    }

    async fn put_merge(&self, path: &str, document: &Value) -> AppResult<()> {
        self.patch(path, document, true).await
    }

    async fn get(&self, path: &str) -> AppResult<Option<Value>> {
        let mut request = self.http.get(self.document_url(path));
        if let Some(key) = &self.api_key {
            request = request.query(&[("key", key.as_str())]);
        }

        let response = request.send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::DocumentStoreError(error_message(status, &body)));
        }

        let document: Value = response.json().await?;
        match document.get("fields") {
            Some(fields) => Ok(Some(decode_fields(fields))),
            None => Ok(Some(json!({}))),
        }
    }
}

/// Extracts the server's own message when the error body is well-formed,
/// so the user-facing toast carries something better than a status code.
fn error_message(status: StatusCode, body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| v["error"]["message"].as_str().map(str::to_string))
        .unwrap_or_else(|| format!("document request failed with status {status}"))
}

fn encode_fields(document: &Value) -> AppResult<Value> {
    let fields = document.as_object().ok_or_else(|| {
        AppError::UnprocessableEntity("document root must be a JSON object".to_string())
    })?;
    let encoded: Map<String, Value> = fields
        .iter()
        .map(|(key, value)| (key.clone(), encode_value(value)))
        .collect();
    Ok(Value::Object(encoded))
}

fn encode_value(value: &Value) -> Value {
    match value {
        Value::Null => json!({ "nullValue": null }),
        Value::Bool(b) => json!({ "booleanValue": b }),
        Value::Number(n) => match n.as_i64() {
            // Firestore carries integers as decimal strings.
            Some(i) => json!({ "integerValue": i.to_string() }),
            None => json!({ "doubleValue": n.as_f64() }),
        },
        Value::String(s) => json!({ "stringValue": s }),
        Value::Array(items) => json!({
            "arrayValue": { "values": items.iter().map(encode_value).collect::<Vec<_>>() }
        }),
        Value::Object(fields) => json!({
            "mapValue": {
                "fields": fields
                    .iter()
                    .map(|(key, value)| (key.clone(), encode_value(value)))
                    .collect::<Map<String, Value>>()
            }
        }),
    }
}

fn decode_fields(fields: &Value) -> Value {
    let decoded: Map<String, Value> = fields
        .as_object()
        .map(|fields| {
            fields
                .iter()
                .map(|(key, value)| (key.clone(), decode_value(value)))
                .collect()
        })
        .unwrap_or_default();
    Value::Object(decoded)
}

fn decode_value(value: &Value) -> Value {
    let Some(wrapper) = value.as_object() else {
        return Value::Null;
    };
    if let Some(s) = wrapper.get("stringValue") {
        return s.clone();
    }
    if let Some(i) = wrapper.get("integerValue").and_then(Value::as_str) {
        return i.parse::<i64>().map(Value::from).unwrap_or(Value::Null);
    }
    if let Some(d) = wrapper.get("doubleValue") {
        return d.clone();
    }
    if let Some(b) = wrapper.get("booleanValue") {
        return b.clone();
    }
    if let Some(ts) = wrapper.get("timestampValue") {
        return ts.clone();
    }
    if let Some(items) = wrapper
        .get("arrayValue")
        .and_then(|a| a.get("values"))
        .and_then(Value::as_array)
    {
        return Value::Array(items.iter().map(decode_value).collect());
    }
    if let Some(fields) = wrapper.get("mapValue").and_then(|m| m.get("fields")) {
        return decode_fields(fields);
    }
    Value::Null
}
