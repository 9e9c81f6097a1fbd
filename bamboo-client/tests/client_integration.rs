// bamboo-client/tests/client_integration.rs
// End-to-end tests against a local axum server

use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use bamboo_client::{
    CancellationToken, ClientConfig, ClientError, EmployeeClient, EmployeeField, EmployeeFields,
};
use serde_json::json;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Basic auth for "secret:x"
const EXPECTED_AUTH: &str = "Basic c2VjcmV0Ong=";

#[derive(Clone, Default)]
struct MockState {
    /// `fields` query values, in arrival order
    fields: Arc<Mutex<Vec<String>>>,
}

fn check_headers(headers: &HeaderMap) -> Result<(), Response> {
    let auth = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok());
    if auth != Some(EXPECTED_AUTH) {
        return Err(StatusCode::UNAUTHORIZED.into_response());
    }
    let accept = headers.get(header::ACCEPT).and_then(|v| v.to_str().ok());
    if accept != Some("application/json") {
        return Err(StatusCode::NOT_ACCEPTABLE.into_response());
    }
    Ok(())
}

async fn directory(headers: HeaderMap) -> Response {
    if let Err(resp) = check_headers(&headers) {
        return resp;
    }
    // Shape of the live service: camelCase keys plus a field catalogue
    Json(json!({
        "fields": [{"id": "displayName", "type": "text", "name": "Display Name"}],
        "employees": [
            {"id": "7", "displayName": "Ann", "workEmail": "a@x.com", "photoUploaded": false},
            {"id": "8", "displayName": "Bea", "workEmail": "b@x.com"}
        ]
    }))
    .into_response()
}

async fn employee(
    State(state): State<MockState>,
    Path(id): Path<String>,
    Query(query): Query<HashMap<String, String>>,
    headers: HeaderMap,
) -> Response {
    if let Err(resp) = check_headers(&headers) {
        return resp;
    }
    state
        .fields
        .lock()
        .unwrap()
        .push(query.get("fields").cloned().unwrap_or_default());

    match id.as_str() {
        "7" => Json(json!({
            "id": "7",
            "displayName": "Ann",
            "jobTitle": "Engineer",
            "canUploadPhoto": 0
        }))
        .into_response(),
        "8" => Json(json!({"id": "8", "jobTitle": "Designer"})).into_response(),
        "broken" => (StatusCode::OK, "not json").into_response(),
        "forbidden" => (StatusCode::FORBIDDEN, "no access").into_response(),
        "crash" => (StatusCode::INTERNAL_SERVER_ERROR, "boom").into_response(),
        _ => (StatusCode::NOT_FOUND, "no such employee").into_response(),
    }
}

async fn spawn_server() -> (String, MockState) {
    let state = MockState::default();
    let app = Router::new()
        .route("/acme/v1/employees/directory", get(directory))
        .route("/acme/v1/employees/{id}", get(employee))
        .with_state(state.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{addr}/acme/v1"), state)
}

fn client_for(base_url: &str) -> EmployeeClient {
    let config = ClientConfig::new(base_url).with_api_key("secret").with_timeout(5);
    EmployeeClient::from_config(&config).unwrap()
}

#[tokio::test]
async fn test_directory_over_http() {
    let (base_url, _) = spawn_server().await;
    let client = client_for(&base_url);
    let cancel = CancellationToken::new();

    let directory = client.employee_directory(&cancel).await.unwrap();
    assert_eq!(directory.len(), 2);
    assert_eq!(directory[0].id, "7");
    assert_eq!(directory[0].photo_uploaded, Some(false));
    assert_eq!(directory[1].photo_uploaded, None);
}

#[tokio::test]
async fn test_employee_default_fields_over_http() {
    let (base_url, state) = spawn_server().await;
    let client = client_for(&base_url);
    let cancel = CancellationToken::new();

    let employee = client
        .employee(&cancel, "7", EmployeeFields::new())
        .await
        .unwrap();
    assert_eq!(employee.job_title.as_deref(), Some("Engineer"));
    assert_eq!(employee.can_upload_photo, Some(0));
    assert_eq!(employee.photo_uploaded, None);

    let fields = state.fields.lock().unwrap().clone();
    assert_eq!(fields, vec![EmployeeFields::default_set().join(",")]);
}

#[tokio::test]
async fn test_employee_by_email_over_http() {
    let (base_url, state) = spawn_server().await;
    let client = client_for(&base_url);
    let cancel = CancellationToken::new();

    let employee = client
        .employee_by_email(&cancel, "b@x.com", [EmployeeField::JobTitle])
        .await
        .unwrap();
    assert_eq!(employee.id, "8");
    assert_eq!(employee.job_title.as_deref(), Some("Designer"));
    assert_eq!(employee.can_upload_photo, None);

    let fields = state.fields.lock().unwrap().clone();
    assert_eq!(fields, vec!["JobTitle".to_string()]);

    let id = client.employee_id_by_email(&cancel, "a@x.com").await.unwrap();
    assert_eq!(id.as_deref(), Some("7"));

    let err = client
        .employee_by_email(&cancel, "nobody@x.com", EmployeeFields::new())
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::EmployeeNotFound(_)));
}

#[tokio::test]
async fn test_status_mapping() {
    let (base_url, _) = spawn_server().await;
    let client = client_for(&base_url);
    let cancel = CancellationToken::new();
    let fields = EmployeeFields::from([EmployeeField::DisplayName]);

    let err = client.employee(&cancel, "missing", &fields).await.unwrap_err();
    assert!(matches!(err, ClientError::NotFound(ref body) if body == "no such employee"));

    let err = client.employee(&cancel, "forbidden", &fields).await.unwrap_err();
    assert!(matches!(err, ClientError::Forbidden(_)));

    let err = client.employee(&cancel, "crash", &fields).await.unwrap_err();
    assert!(matches!(err, ClientError::Status { status: 500, ref body } if body == "boom"));

    let err = client.employee(&cancel, "broken", &fields).await.unwrap_err();
    assert!(matches!(err, ClientError::Decode(_)));
}

#[tokio::test]
async fn test_missing_api_key_is_unauthorized() {
    let (base_url, _) = spawn_server().await;
    let client = EmployeeClient::from_config(&ClientConfig::new(&base_url)).unwrap();
    let cancel = CancellationToken::new();

    let err = client.employee_directory(&cancel).await.unwrap_err();
    assert!(matches!(err, ClientError::Unauthorized));
}

#[tokio::test]
async fn test_connection_refused_is_transport_error() {
    // Bind then drop to get a port with nothing listening
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = client_for(&format!("http://{addr}"));
    let cancel = CancellationToken::new();

    let err = client.employee_directory(&cancel).await.unwrap_err();
    assert!(matches!(err, ClientError::Http(_)));
}
