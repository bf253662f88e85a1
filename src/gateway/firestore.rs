use crate::Result;
use crate::config::FirestoreConfig;
use crate::gateway::error::GatewayError;
use crate::gateway::error::GatewayError::{ConnectionFailed, MalformedResponse, QueryRejected};
use crate::gateway::{Document, FieldValue, QueryGateway};
use crate::tools::web::build_client;
use crate::tools::{log_error_and_return, log_message_and_return};
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use std::collections::BTreeMap;

/// Client of the Firestore REST API, limited to `runQuery`.
#[derive(Debug, Clone)]
pub struct FirestoreClient {
    client: Client,
    config: FirestoreConfig,
}

#[derive(Deserialize)]
struct RunQueryResponseEntry {
    document: Option<StoredDocument>,
}

#[derive(Deserialize)]
struct StoredDocument {
    name: String,
    #[serde(default)]
    fields: BTreeMap<String, FieldValue>,
}

impl From<StoredDocument> for Document {
    fn from(document: StoredDocument) -> Self {
        // Documents are named `projects/{project}/databases/{database}/documents/{collection}/{id}`
        let id = document
            .name
            .rsplit('/')
            .next()
            .unwrap_or_default()
            .to_owned();
        Document::new(id, document.fields)
    }
}

impl FirestoreClient {
    pub fn new(config: FirestoreConfig) -> Result<Self> {
        let config = config.validate()?;
        let client = build_client()?;
        Ok(Self { client, config })
    }
}

impl QueryGateway for FirestoreClient {
    async fn query_equals(
        &self,
        collection: &str,
        field: &str,
        value: FieldValue,
    ) -> Result<Vec<Document>, GatewayError> {
        debug!("Querying documents [collection: {collection}, field: {field}]");

        let body = json!({
            "structuredQuery": {
                "from": [{"collectionId": collection}],
                "where": {
                    "fieldFilter": {
                        "field": {"fieldPath": field},
                        "op": "EQUAL",
                        "value": value,
                    }
                }
            }
        });

        let mut request = self.client.post(self.config.run_query_url()).json(&body);
        if let Some(api_key) = self.config.api_key() {
            request = request.query(&[("key", api_key)]);
        }

        let response = request
            .send()
            .await
            .map_err(log_message_and_return(
                "Can't reach the document store.",
                ConnectionFailed,
            ))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!("Query rejected by the document store [status: {status}]\n{body}");
            return Err(QueryRejected(status.as_u16()));
        }

        let entries = response
            .json::<Vec<RunQueryResponseEntry>>()
            .await
            .map_err(log_error_and_return(MalformedResponse))?;

        // An empty result still contains a single entry, holding only the read time
        let documents = entries
            .into_iter()
            .filter_map(|entry| entry.document)
            .map(Document::from)
            .collect::<Vec<_>>();
        debug!(
            "Documents retrieved [collection: {collection}, count: {}]",
            documents.len()
        );
        Ok(documents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::tests::init_logger;
    use wiremock::matchers::{body_json, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const RUN_QUERY_PATH: &str = "/v1/projects/gym-app/databases/(default)/documents:runQuery";

    fn build_firestore_client(mock_server: &MockServer, api_key: Option<&str>) -> FirestoreClient {
        let config = FirestoreConfig::new("gym-app".to_owned(), api_key.map(str::to_owned))
            .unwrap()
            .with_base_url(mock_server.uri());
        FirestoreClient::new(config).unwrap()
    }

    fn document_entry(collection: &str, id: &str, fields: serde_json::Value) -> serde_json::Value {
        json!({
            "document": {
                "name": format!("projects/gym-app/databases/(default)/documents/{collection}/{id}"),
                "fields": fields,
                "createTime": "2025-01-01T00:00:00Z",
                "updateTime": "2025-01-01T00:00:00Z",
            },
            "readTime": "2025-06-15T12:00:00Z",
        })
    }

    #[tokio::test]
    async fn should_query_documents() {
        init_logger();
        let mock_server = MockServer::start().await;
        let expected_body = json!({
            "structuredQuery": {
                "from": [{"collectionId": "usuarios"}],
                "where": {
                    "fieldFilter": {
                        "field": {"fieldPath": "telefono"},
                        "op": "EQUAL",
                        "value": {"stringValue": "5551234567"},
                    }
                }
            }
        });
        Mock::given(method("POST"))
            .and(path(RUN_QUERY_PATH))
            .and(query_param("key", "test-key"))
            .and(body_json(&expected_body))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                document_entry("usuarios", "first", json!({"nombre": {"stringValue": "Ana"}})),
                document_entry("usuarios", "second", json!({"nombre": {"stringValue": "Luis"}})),
            ])))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = build_firestore_client(&mock_server, Some("test-key"));
        let documents = client
            .query_equals("usuarios", "telefono", FieldValue::from("5551234567"))
            .await
            .unwrap();

        let ids = documents
            .iter()
            .map(|document| document.id().as_str())
            .collect::<Vec<_>>();
        assert_eq!(vec!["first", "second"], ids);
        assert_eq!(
            Some("Ana".to_owned()),
            documents[0].string_field("nombre")
        );
    }

    #[tokio::test]
    async fn should_return_no_document_when_only_read_time_is_received() {
        init_logger();
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(RUN_QUERY_PATH))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!([{"readTime": "2025-06-15T12:00:00Z"}])),
            )
            .mount(&mock_server)
            .await;

        let client = build_firestore_client(&mock_server, None);
        let documents = client
            .query_equals("planes", "activo", FieldValue::from(true))
            .await
            .unwrap();

        assert!(documents.is_empty());
    }

    #[tokio::test]
    async fn should_read_documents_with_non_finite_numbers() {
        init_logger();
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(RUN_QUERY_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                document_entry("planes", "semanal", json!({"precio": {"doubleValue": "NaN"}})),
                document_entry("planes", "mensual", json!({"precio": {"doubleValue": 80000.0}})),
            ])))
            .mount(&mock_server)
            .await;

        let client = build_firestore_client(&mock_server, None);
        let documents = client
            .query_equals("planes", "activo", FieldValue::from(true))
            .await
            .unwrap();

        assert_eq!(2, documents.len());
        assert_eq!(None, documents[0].field("precio").and_then(FieldValue::as_f64));
        assert_eq!(
            Some(80000.0),
            documents[1].field("precio").and_then(FieldValue::as_f64)
        );
    }

    #[tokio::test]
    async fn should_fail_when_query_is_rejected() {
        init_logger();
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(RUN_QUERY_PATH))
            .respond_with(ResponseTemplate::new(403).set_body_json(json!({
                "error": {"code": 403, "message": "Missing or insufficient permissions.", "status": "PERMISSION_DENIED"}
            })))
            .mount(&mock_server)
            .await;

        let client = build_firestore_client(&mock_server, None);
        let result = client
            .query_equals("usuarios", "telefono", FieldValue::from("5551234567"))
            .await;

        assert_eq!(Err(QueryRejected(403)), result);
    }

    #[tokio::test]
    async fn should_fail_when_response_is_malformed() {
        init_logger();
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(RUN_QUERY_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>Oops</html>"))
            .mount(&mock_server)
            .await;

        let client = build_firestore_client(&mock_server, None);
        let result = client
            .query_equals("usuarios", "telefono", FieldValue::from("5551234567"))
            .await;

        assert_eq!(Err(MalformedResponse), result);
    }

    #[tokio::test]
    async fn should_fail_when_store_is_unreachable() {
        init_logger();
        let config = FirestoreConfig::new("gym-app".to_owned(), None)
            .unwrap()
            .with_base_url("http://127.0.0.1:1".to_owned());
        let client = FirestoreClient::new(config).unwrap();

        let result = client
            .query_equals("usuarios", "telefono", FieldValue::from("5551234567"))
            .await;

        assert_eq!(Err(ConnectionFailed), result);
    }

    #[test]
    fn should_refuse_configuration_without_project_id() {
        let config: FirestoreConfig =
            serde_json::from_value(json!({"projectId": ""})).unwrap();
        assert!(FirestoreClient::new(config).is_err());
    }
}
