mod common;

use actix_web::http::StatusCode;
use users_table::source::http::HttpUserSource;
use users_table::source::{FetchError, GENERIC_FAILURE_STATUS, UserSource, UsersFetch};

use common::{UNREACHABLE_URL, spawn_upstream, users_json};

#[actix_web::test]
async fn fetches_and_decodes_users() {
    let url = spawn_upstream(StatusCode::OK, users_json(1..=3));
    let source = HttpUserSource::new(url).unwrap();

    let users = source.fetch_users().await.unwrap();

    assert_eq!(users.len(), 3);
    assert_eq!(users[0].id, 1);
    assert_eq!(users[2].email, "user3@example.com");
    assert_eq!(users[1].updated_at, "2024-01-15T10:00:00.000Z");
}

#[actix_web::test]
async fn non_success_status_is_an_error() {
    let url = spawn_upstream(StatusCode::NOT_FOUND, String::new());
    let source = HttpUserSource::new(url).unwrap();

    let err = source.fetch_users().await.unwrap_err();

    assert!(matches!(err, FetchError::Status(404)));
    assert_eq!(err.status_code(), 404);
}

#[actix_web::test]
async fn malformed_body_is_a_decode_error() {
    let url = spawn_upstream(StatusCode::OK, "{\"users\": []}".to_string());
    let source = HttpUserSource::new(url).unwrap();

    let err = source.fetch_users().await.unwrap_err();

    assert!(matches!(err, FetchError::Decode(_)));
    assert_eq!(err.status_code(), GENERIC_FAILURE_STATUS);
}

#[actix_web::test]
async fn refused_connection_maps_to_generic_status() {
    let source = HttpUserSource::new(UNREACHABLE_URL).unwrap();

    let fetch = UsersFetch::from_result(source.fetch_users().await);

    assert_eq!(fetch.status_code, GENERIC_FAILURE_STATUS);
    assert!(fetch.users.is_empty());
}
